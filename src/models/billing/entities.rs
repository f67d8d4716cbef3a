use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::requests::{
    ContractFilter, CreateContractRequest, CreatePaymentRequest, PaymentFilter,
    UpdateContractRequest, UpdatePaymentRequest,
};
use crate::models::common::Resource;
use crate::models::common::resource::{check_len, check_len_opt, check_not_blank};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    pub id: i64,
    pub user_id: Option<i64>,
    pub course_id: Option<i64>,
    pub content: String,
    pub status: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: i64,
    pub user_id: Option<i64>,
    pub contract_id: Option<i64>,
    pub amount: f64,
    pub status: String,
    pub method: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn check_amount(amount: f64) -> Result<(), String> {
    if !amount.is_finite() || amount < 0.0 {
        return Err("amount must be a non-negative number".into());
    }
    Ok(())
}

impl Resource for Contract {
    type Create = CreateContractRequest;
    type Update = UpdateContractRequest;
    type Filter = ContractFilter;

    const NAME: &'static str = "Contract";
    const PATH: &'static str = "contracts";

    fn validate_create(req: &Self::Create) -> Result<(), String> {
        check_not_blank("content", &req.content)?;
        check_len_opt("status", req.status.as_ref(), 50)
    }

    fn validate_update(req: &Self::Update) -> Result<(), String> {
        if let Some(content) = &req.content {
            check_not_blank("content", content)?;
        }
        check_len_opt("status", req.status.as_ref(), 50)
    }
}

impl Resource for Payment {
    type Create = CreatePaymentRequest;
    type Update = UpdatePaymentRequest;
    type Filter = PaymentFilter;

    const NAME: &'static str = "Payment";
    const PATH: &'static str = "payments";

    fn validate_create(req: &Self::Create) -> Result<(), String> {
        check_amount(req.amount)?;
        check_len("status", &req.status, 255)?;
        check_len("method", &req.method, 50)
    }

    fn validate_update(req: &Self::Update) -> Result<(), String> {
        if let Some(amount) = req.amount {
            check_amount(amount)?;
        }
        check_len_opt("status", req.status.as_ref(), 255)?;
        check_len_opt("method", req.method.as_ref(), 50)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_amount_rejected() {
        let req = CreatePaymentRequest {
            user_id: 1,
            contract_id: 1,
            amount: -5.0,
            status: "paid".into(),
            method: "card".into(),
        };
        assert!(Payment::validate_create(&req).is_err());
    }

    #[test]
    fn test_contract_status_length() {
        let req = UpdateContractRequest {
            status: Some("s".repeat(51)),
            ..Default::default()
        };
        assert!(Contract::validate_update(&req).is_err());
    }
}
