//! 用户、角色与员工

pub mod entities;
pub mod requests;
