use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CrudService;
use crate::models::{PaginationQuery, Resource, response::error_response};
use crate::storage::{CrudStorage, Storage};

pub async fn list_records<R>(
    service: &CrudService<R>,
    filter: R::Filter,
    pagination: PaginationQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse>
where
    R: Resource,
    dyn Storage: CrudStorage<R>,
{
    let storage = service.get_storage(request)?;

    match <dyn Storage as CrudStorage<R>>::list_records(
        storage.as_ref(),
        filter,
        pagination.window(),
    )
    .await
    {
        Ok(records) => Ok(HttpResponse::Ok().json(records)),
        Err(e) => {
            tracing::error!("Failed to list {}: {}", R::PATH, e);
            Ok(error_response(&e, None))
        }
    }
}
