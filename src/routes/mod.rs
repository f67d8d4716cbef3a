pub mod associations;

pub mod auth;

pub mod docs;

pub mod index;

pub mod resources;

pub use associations::configure_association_routes;
pub use auth::configure_auth_routes;
pub use docs::configure_docs_routes;
pub use index::configure_index_routes;
pub use resources::configure_resource_routes;

use actix_web::web;

/// 注册全部路由，供主程序与集成测试共用
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(configure_index_routes)
        .configure(configure_docs_routes)
        .configure(configure_auth_routes)
        .configure(configure_association_routes)
        .configure(configure_resource_routes);
}
