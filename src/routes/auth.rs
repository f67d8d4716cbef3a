use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::auth::requests::{LoginRequest, RegisterRequest};
use crate::services::AuthService;

// 懒加载的全局 AuthService 实例
static AUTH_SERVICE: Lazy<AuthService> = Lazy::new(AuthService::new);

// 同时接受 JSON 与表单提交
pub async fn login(
    req: HttpRequest,
    body: web::Either<web::Json<LoginRequest>, web::Form<LoginRequest>>,
) -> ActixResult<HttpResponse> {
    let login_request = match body {
        web::Either::Left(json) => json.into_inner(),
        web::Either::Right(form) => form.into_inner(),
    };
    AUTH_SERVICE.login(login_request, &req).await
}

pub async fn logout(req: HttpRequest) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.logout(&req).await
}

pub async fn register(
    req: HttpRequest,
    body: web::Json<RegisterRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.register(body.into_inner(), &req).await
}

pub async fn me(req: HttpRequest) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.me(&req).await
}

// 配置路由
pub fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .route("/login", web::post().to(login))
            .service(
                web::resource("/logout")
                    .route(web::get().to(logout))
                    .route(web::post().to(logout)),
            )
            .route("/register", web::post().to(register))
            .service(
                web::resource("/me")
                    .wrap(middlewares::RequireSession)
                    .route(web::get().to(me)),
            ),
    );
}
