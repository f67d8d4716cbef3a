use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::services::AssociationService;
use crate::utils::SafeId;

static ASSOCIATION_SERVICE: Lazy<AssociationService> = Lazy::new(AssociationService::new);

pub async fn course_tags(req: HttpRequest, course_id: SafeId) -> ActixResult<HttpResponse> {
    ASSOCIATION_SERVICE.course_tags(course_id.0, &req).await
}

pub async fn user_courses(req: HttpRequest, user_id: SafeId) -> ActixResult<HttpResponse> {
    ASSOCIATION_SERVICE.user_courses(user_id.0, &req).await
}

// 配置路由
pub fn configure_association_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/courses/{id}/tags", web::get().to(course_tags))
        .route("/users/{id}/courses", web::get().to(user_courses));
}
