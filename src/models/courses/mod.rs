//! 课程、课程标签与选课

pub mod entities;
pub mod requests;
