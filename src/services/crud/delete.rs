use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, http::StatusCode};

use super::CrudService;
use crate::models::{MessageResponse, Resource, response::error_response};
use crate::storage::{CrudStorage, Storage};

pub async fn delete_record<R>(
    service: &CrudService<R>,
    id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse>
where
    R: Resource,
    dyn Storage: CrudStorage<R>,
{
    let storage = service.get_storage(request)?;

    match <dyn Storage as CrudStorage<R>>::delete_record(storage.as_ref(), id).await {
        Ok(true) => Ok(MessageResponse::deleted(R::NAME, id).respond(StatusCode::OK)),
        Ok(false) => Ok(MessageResponse::not_found(R::NAME, id).respond(StatusCode::NOT_FOUND)),
        Err(e) => {
            tracing::error!("Failed to delete {} {}: {}", R::NAME, id, e);
            Ok(error_response(
                &e,
                Some(format!("Could not delete {} with id {id}", R::NAME)),
            ))
        }
    }
}
