pub mod auth;
pub mod billing;
pub mod centers;
pub mod common;
pub mod courses;
pub mod engagement;
pub mod geography;
pub mod users;

pub use common::*;

#[derive(Clone, Debug)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
