//! 通用资源描述
//!
//! 每种 REST 资源（分校、课程、城市……）都实现 [`Resource`]，
//! 路由、服务与 OpenAPI 文档据此为其生成同一套 CRUD 接口。

use serde::{Serialize, de::DeserializeOwned};
use utoipa::{IntoParams, ToSchema};

use crate::errors::Result;

pub trait Resource: Serialize + ToSchema<'static> + Send + Sync + 'static {
    /// 创建请求体
    type Create: DeserializeOwned + ToSchema<'static> + Send + 'static;
    /// 更新请求体，所有字段可选
    type Update: DeserializeOwned + ToSchema<'static> + Send + 'static;
    /// 列表过滤参数
    type Filter: DeserializeOwned + IntoParams + Default + Send + 'static;

    /// 消息中使用的资源名，例如 `Branch`
    const NAME: &'static str;
    /// 路由路径段，例如 `branches`
    const PATH: &'static str;

    fn validate_create(_req: &Self::Create) -> std::result::Result<(), String> {
        Ok(())
    }

    fn validate_update(_req: &Self::Update) -> std::result::Result<(), String> {
        Ok(())
    }

    /// 写入存储前的加工（例如密码哈希）
    fn prepare_create(_req: &mut Self::Create) -> Result<()> {
        Ok(())
    }

    fn prepare_update(_req: &mut Self::Update) -> Result<()> {
        Ok(())
    }
}

/// 校验字符串长度（按字符计）
pub fn check_len(field: &str, value: &str, max: usize) -> std::result::Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{field} must not be empty"));
    }
    if value.chars().count() > max {
        return Err(format!("{field} must be at most {max} characters"));
    }
    Ok(())
}

/// 同 [`check_len`]，`None` 视为通过
pub fn check_len_opt(
    field: &str,
    value: Option<&String>,
    max: usize,
) -> std::result::Result<(), String> {
    value.map_or(Ok(()), |v| check_len(field, v, max))
}

/// 非空校验
pub fn check_not_blank(field: &str, value: &str) -> std::result::Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{field} must not be empty"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_len() {
        assert!(check_len("name", "Central", 100).is_ok());
        assert!(check_len("name", "   ", 100).is_err());
        assert!(check_len("name", &"x".repeat(101), 100).is_err());
        // 多字节字符按字符计数
        assert!(check_len("name", &"é".repeat(100), 100).is_ok());
    }

    #[test]
    fn test_check_len_opt() {
        assert!(check_len_opt("status", None, 50).is_ok());
        assert!(check_len_opt("status", Some(&"a".repeat(51)), 50).is_err());
    }
}
