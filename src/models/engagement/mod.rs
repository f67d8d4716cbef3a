//! 评价、通知、搜索历史与常见问题

pub mod entities;
pub mod requests;
