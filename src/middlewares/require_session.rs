/*!
 * 会话认证中间件
 *
 * 从会话 Cookie 中取出会话 ID，经对象缓存解析为用户 ID，再从存储加载用户，
 * 成功后把 [`User`] 放入请求扩展；否则返回 401。
 *
 * ```rust,ignore
 * web::resource("/auth/me")
 *     .wrap(RequireSession)
 *     .route(web::get().to(profile))
 * ```
 */

use std::{rc::Rc, sync::Arc};

use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage, HttpRequest,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
    web,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use tracing::{debug, info};

use crate::cache::ObjectCache;
use crate::config::AppConfig;
use crate::models::{MessageResponse, users::entities::User};
use crate::storage::{CrudStorage, Storage};
use crate::utils::session::resolve_session;

#[derive(Clone, Default)]
pub struct RequireSession;

async fn authenticate(req: &ServiceRequest) -> Result<User, &'static str> {
    let cookie_name = &AppConfig::get().session.cookie_name;
    let sid = req
        .cookie(cookie_name)
        .map(|c| c.value().to_string())
        .ok_or("Missing session cookie")?;

    let cache = req
        .app_data::<web::Data<Arc<dyn ObjectCache>>>()
        .ok_or("Session store unavailable")?
        .get_ref()
        .clone();
    let user_id = resolve_session(cache.as_ref(), &sid)
        .await
        .ok_or("Session expired or invalid")?;

    let storage = req
        .app_data::<web::Data<Arc<dyn Storage>>>()
        .ok_or("Storage unavailable")?
        .get_ref()
        .clone();
    let user = <dyn Storage as CrudStorage<User>>::get_record(storage.as_ref(), user_id)
        .await
        .map_err(|err| {
            info!("Failed to load session user {}: {}", user_id, err);
            "Failed to load session user"
        })?;

    user.ok_or("Session user no longer exists")
}

impl<S, B> Transform<S, ServiceRequest> for RequireSession
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireSessionMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireSessionMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct RequireSessionMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequireSessionMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        Box::pin(async move {
            match authenticate(&req).await {
                Ok(user) => {
                    debug!("Session authentication successful for ID: {}", user.id);
                    req.extensions_mut().insert(user);
                    Ok(srv.call(req).await?.map_into_left_body())
                }
                Err(reason) => {
                    info!("Session rejected for {}: {}", req.path(), reason);
                    let resp = MessageResponse::new(format!("Unauthorized: {reason}"))
                        .respond(StatusCode::UNAUTHORIZED);
                    Ok(req.into_response(resp).map_into_right_body())
                }
            }
        })
    }
}

impl RequireSession {
    /// 取出中间件放入的当前用户
    pub fn current_user(req: &HttpRequest) -> Option<User> {
        req.extensions().get::<User>().cloned()
    }
}
