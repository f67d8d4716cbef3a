use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::models::AppStartTime;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub started_at: chrono::DateTime<chrono::Utc>,
    /// 已运行秒数
    pub uptime: i64,
    pub docs: &'static str,
}

pub async fn index(start_time: Option<web::Data<AppStartTime>>) -> HttpResponse {
    let started_at = start_time
        .map(|t| t.start_datetime)
        .unwrap_or_else(chrono::Utc::now);
    HttpResponse::Ok().json(ServiceInfo {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        started_at,
        uptime: (chrono::Utc::now() - started_at).num_seconds(),
        docs: "/api/openapi.json",
    })
}

pub fn configure_index_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index));
}
