//! 教育中心、分校与公告

pub mod entities;
pub mod requests;
