use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, http::StatusCode};

use super::CrudService;
use crate::models::{MessageResponse, Resource, response::error_response};
use crate::storage::{CrudStorage, Storage};

pub async fn update_record<R>(
    service: &CrudService<R>,
    id: i64,
    mut req: R::Update,
    request: &HttpRequest,
) -> ActixResult<HttpResponse>
where
    R: Resource,
    dyn Storage: CrudStorage<R>,
{
    if let Err(msg) = R::validate_update(&req) {
        return Ok(MessageResponse::new(msg).respond(StatusCode::BAD_REQUEST));
    }
    if let Err(e) = R::prepare_update(&mut req) {
        tracing::error!("Failed to prepare {} update: {}", R::NAME, e);
        return Ok(error_response(&e, None));
    }

    let storage = service.get_storage(request)?;

    match <dyn Storage as CrudStorage<R>>::update_record(storage.as_ref(), id, req).await {
        Ok(Some(record)) => Ok(HttpResponse::Ok().json(record)),
        Ok(None) => Ok(MessageResponse::not_found(R::NAME, id).respond(StatusCode::NOT_FOUND)),
        Err(e) => {
            tracing::error!("Failed to update {} {}: {}", R::NAME, id, e);
            Ok(error_response(
                &e,
                Some(format!("Error updating {} with id {id}", R::NAME)),
            ))
        }
    }
}
