//! 通用 CRUD 服务
//!
//! 对任意 [`Resource`] 提供列表、查询、创建、更新、删除五个操作，
//! 存储访问统一经由 `Arc<dyn Storage>` 上对应的 [`CrudStorage`] 实现。

pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use std::marker::PhantomData;
use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};

use crate::models::{PaginationQuery, Resource};
use crate::storage::{CrudStorage, Storage};

pub struct CrudService<R> {
    _resource: PhantomData<fn() -> R>,
}

impl<R> Default for CrudService<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> CrudService<R> {
    pub const fn new() -> Self {
        Self {
            _resource: PhantomData,
        }
    }
}

impl<R> CrudService<R>
where
    R: Resource,
    dyn Storage: CrudStorage<R>,
{
    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        request
            .app_data::<web::Data<Arc<dyn Storage>>>()
            .map(|data| data.get_ref().clone())
            .ok_or_else(|| actix_web::error::ErrorInternalServerError("Storage not configured"))
    }

    pub async fn list(
        &self,
        filter: R::Filter,
        pagination: PaginationQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_records(self, filter, pagination, request).await
    }

    pub async fn get(&self, id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        get::get_record(self, id, request).await
    }

    pub async fn create(&self, req: R::Create, request: &HttpRequest) -> ActixResult<HttpResponse> {
        create::create_record(self, req, request).await
    }

    pub async fn update(
        &self,
        id: i64,
        req: R::Update,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_record(self, id, req, request).await
    }

    pub async fn delete(&self, id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        delete::delete_record(self, id, request).await
    }
}
