use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};

use crate::models::{PaginationQuery, Resource, ResourceVisitor, visit_resources};
use crate::services::CrudService;
use crate::storage::{CrudStorage, Storage};
use crate::utils::SafeId;

// HTTP处理程序，按资源类型单态化
pub async fn list_records<R>(
    req: HttpRequest,
    filter: web::Query<R::Filter>,
    pagination: web::Query<PaginationQuery>,
) -> ActixResult<HttpResponse>
where
    R: Resource,
    dyn Storage: CrudStorage<R>,
{
    CrudService::<R>::new()
        .list(filter.into_inner(), pagination.into_inner(), &req)
        .await
}

pub async fn create_record<R>(
    req: HttpRequest,
    body: web::Json<R::Create>,
) -> ActixResult<HttpResponse>
where
    R: Resource,
    dyn Storage: CrudStorage<R>,
{
    CrudService::<R>::new().create(body.into_inner(), &req).await
}

pub async fn get_record<R>(req: HttpRequest, id: SafeId) -> ActixResult<HttpResponse>
where
    R: Resource,
    dyn Storage: CrudStorage<R>,
{
    CrudService::<R>::new().get(id.0, &req).await
}

pub async fn update_record<R>(
    req: HttpRequest,
    id: SafeId,
    body: web::Json<R::Update>,
) -> ActixResult<HttpResponse>
where
    R: Resource,
    dyn Storage: CrudStorage<R>,
{
    CrudService::<R>::new()
        .update(id.0, body.into_inner(), &req)
        .await
}

pub async fn delete_record<R>(req: HttpRequest, id: SafeId) -> ActixResult<HttpResponse>
where
    R: Resource,
    dyn Storage: CrudStorage<R>,
{
    CrudService::<R>::new().delete(id.0, &req).await
}

struct RouteRegistrar<'a> {
    cfg: &'a mut web::ServiceConfig,
}

impl ResourceVisitor for RouteRegistrar<'_> {
    fn visit<R>(&mut self)
    where
        R: Resource,
        dyn Storage: CrudStorage<R>,
    {
        self.cfg
            .service(
                web::resource(format!("/{}", R::PATH))
                    .route(web::get().to(list_records::<R>))
                    .route(web::post().to(create_record::<R>)),
            )
            .service(
                web::resource(format!("/{}/{{id}}", R::PATH))
                    .route(web::get().to(get_record::<R>))
                    .route(web::put().to(update_record::<R>))
                    .route(web::delete().to(delete_record::<R>)),
            );
    }
}

// 配置路由
pub fn configure_resource_routes(cfg: &mut web::ServiceConfig) {
    visit_resources(&mut RouteRegistrar { cfg });
}
