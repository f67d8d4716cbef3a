use serde::Deserialize;
use utoipa::IntoParams;

pub const DEFAULT_PAGE_SIZE: u64 = 20;
pub const MAX_PAGE_SIZE: u64 = 100;
/// 数据库驱动以 i64 绑定 OFFSET，超出部分截断
pub const MAX_OFFSET: u64 = i64::MAX as u64;

/// 分页查询参数
///
/// 两个参数都缺省时返回整张表；只给出其一时另一个取默认值。
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationQuery {
    /// 页码，从 1 开始
    pub page: Option<u64>,
    /// 每页条数，1..=100
    pub size: Option<u64>,
}

/// 存储层使用的偏移窗口
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub offset: u64,
    pub limit: u64,
}

impl PaginationQuery {
    pub fn window(&self) -> Option<PageWindow> {
        if self.page.is_none() && self.size.is_none() {
            return None;
        }
        let page = self.page.unwrap_or(1).max(1);
        let size = self
            .size
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE);
        Some(PageWindow {
            offset: (page - 1).saturating_mul(size).min(MAX_OFFSET),
            limit: size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_huge_page_offset_fits_i64() {
        let query = PaginationQuery {
            page: Some(100_000_000_000_000_000),
            size: Some(100),
        };
        let window = query.window().expect("window");
        assert_eq!(window.offset, MAX_OFFSET);
        assert!(i64::try_from(window.offset).is_ok());

        let query = PaginationQuery {
            page: Some(u64::MAX),
            size: Some(1),
        };
        assert!(i64::try_from(query.window().expect("window").offset).is_ok());
    }

    #[test]
    fn test_no_params_means_full_table() {
        assert_eq!(PaginationQuery::default().window(), None);
    }

    #[test]
    fn test_page_only_uses_default_size() {
        let query = PaginationQuery {
            page: Some(3),
            size: None,
        };
        assert_eq!(
            query.window(),
            Some(PageWindow {
                offset: 40,
                limit: 20
            })
        );
    }

    #[test]
    fn test_size_is_clamped() {
        let query = PaginationQuery {
            page: Some(1),
            size: Some(1000),
        };
        assert_eq!(query.window().map(|w| w.limit), Some(MAX_PAGE_SIZE));

        let query = PaginationQuery {
            page: Some(2),
            size: Some(0),
        };
        assert_eq!(
            query.window(),
            Some(PageWindow {
                offset: 1,
                limit: 1
            })
        );
    }

    #[test]
    fn test_page_zero_is_first_page() {
        let query = PaginationQuery {
            page: Some(0),
            size: Some(10),
        };
        assert_eq!(query.window().map(|w| w.offset), Some(0));
    }
}
