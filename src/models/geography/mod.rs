//! 地理分类：城市 / 区 / 街道

pub mod entities;
pub mod requests;
