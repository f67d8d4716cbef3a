//! EduCenter API - 教育中心目录后端服务
//!
//! 基于 Actix Web 与 SeaORM 的 REST 服务，为教育中心、分校、课程、
//! 报名、合同、付款等资源提供统一的 CRUD 接口，并提供基于 Cookie 会话的认证。
//!
//! # 架构
//! - `cache`: 对象缓存层（Moka/Redis），用作会话存储
//! - `config`: 配置管理
//! - `entity`: SeaORM 数据库实体
//! - `errors`: 统一错误处理
//! - `middlewares`: 会话认证中间件
//! - `models`: 资源与请求模型
//! - `routes`: API 路由层
//! - `runtime`: 运行时生命周期管理
//! - `services`: 业务逻辑层（通用 CRUD、认证、关联查询、OpenAPI）
//! - `storage`: 数据存储层（SeaORM）
//! - `utils`: 工具函数

pub mod cache;
pub mod config;
pub mod entity;
pub mod errors;
pub mod middlewares;
pub mod models;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
