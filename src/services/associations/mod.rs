//! 多对多关联查询：课程的标签、用户选修的课程

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, http::StatusCode, web};
use std::sync::Arc;

use crate::models::{MessageResponse, response::error_response};
use crate::storage::Storage;

pub struct AssociationService;

impl AssociationService {
    pub const fn new() -> Self {
        Self
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        request
            .app_data::<web::Data<Arc<dyn Storage>>>()
            .map(|data| data.get_ref().clone())
            .ok_or_else(|| actix_web::error::ErrorInternalServerError("Storage not configured"))
    }

    pub async fn course_tags(&self, course_id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request)?;
        match storage.list_course_tags_for_course(course_id).await {
            Ok(Some(tags)) => Ok(HttpResponse::Ok().json(tags)),
            Ok(None) => Ok(MessageResponse::not_found("Course", course_id).respond(StatusCode::NOT_FOUND)),
            Err(e) => {
                tracing::error!("Failed to list tags of course {}: {}", course_id, e);
                Ok(error_response(&e, None))
            }
        }
    }

    pub async fn user_courses(&self, user_id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request)?;
        match storage.list_courses_for_user(user_id).await {
            Ok(Some(courses)) => Ok(HttpResponse::Ok().json(courses)),
            Ok(None) => Ok(MessageResponse::not_found("User", user_id).respond(StatusCode::NOT_FOUND)),
            Err(e) => {
                tracing::error!("Failed to list courses of user {}: {}", user_id, e);
                Ok(error_response(&e, None))
            }
        }
    }
}

impl Default for AssociationService {
    fn default() -> Self {
        Self::new()
    }
}
