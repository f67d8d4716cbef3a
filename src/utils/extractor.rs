use actix_web::{FromRequest, HttpRequest, HttpResponse, dev::Payload, error::InternalError};
use futures_util::future::{Ready, ready};

use crate::models::MessageResponse;

/// 路径中的 `{id}` 段，必须是正整数
///
/// 解析失败时直接以 400 响应，不进入处理函数。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SafeId(pub i64);

impl SafeId {
    pub fn parse(raw: &str) -> Option<i64> {
        raw.parse::<i64>().ok().filter(|id| *id > 0)
    }
}

impl FromRequest for SafeId {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let raw = req.match_info().get("id").unwrap_or_default();
        let result = match Self::parse(raw) {
            Some(id) => Ok(SafeId(id)),
            None => {
                let response = HttpResponse::BadRequest()
                    .json(MessageResponse::new(format!("Invalid id: '{raw}'")));
                Err(InternalError::from_response("invalid id", response).into())
            }
        };
        ready(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(SafeId::parse("42"), Some(42));
        assert_eq!(SafeId::parse("0"), None);
        assert_eq!(SafeId::parse("-3"), None);
        assert_eq!(SafeId::parse("abc"), None);
        assert_eq!(SafeId::parse("1.5"), None);
    }
}
