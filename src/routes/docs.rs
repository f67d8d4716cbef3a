use actix_web::{HttpResponse, web};
use once_cell::sync::Lazy;
use utoipa::openapi::OpenApi;

use crate::services::build_openapi;

// 文档在首次请求时生成一次
static OPENAPI: Lazy<OpenApi> = Lazy::new(build_openapi);

pub async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(&*OPENAPI)
}

pub fn configure_docs_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/openapi.json", web::get().to(openapi_json));
}
