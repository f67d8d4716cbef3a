//! 合同与付款

pub mod entities;
pub mod requests;
