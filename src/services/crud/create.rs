use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, http::StatusCode};

use super::CrudService;
use crate::models::{MessageResponse, Resource, response::error_response};
use crate::storage::{CrudStorage, Storage};

pub async fn create_record<R>(
    service: &CrudService<R>,
    mut req: R::Create,
    request: &HttpRequest,
) -> ActixResult<HttpResponse>
where
    R: Resource,
    dyn Storage: CrudStorage<R>,
{
    if let Err(msg) = R::validate_create(&req) {
        return Ok(MessageResponse::new(msg).respond(StatusCode::BAD_REQUEST));
    }
    if let Err(e) = R::prepare_create(&mut req) {
        tracing::error!("Failed to prepare {} for storage: {}", R::NAME, e);
        return Ok(error_response(&e, None));
    }

    let storage = service.get_storage(request)?;

    match <dyn Storage as CrudStorage<R>>::create_record(storage.as_ref(), req).await {
        Ok(record) => Ok(HttpResponse::Created().json(record)),
        Err(e) => {
            tracing::error!("Failed to create {}: {}", R::NAME, e);
            Ok(error_response(&e, None))
        }
    }
}
