use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateContractRequest {
    pub user_id: i64,
    pub course_id: i64,
    pub content: String,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContractRequest {
    pub user_id: Option<i64>,
    pub course_id: Option<i64>,
    pub content: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ContractFilter {
    pub user_id: Option<i64>,
    pub course_id: Option<i64>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentRequest {
    pub user_id: i64,
    pub contract_id: i64,
    pub amount: f64,
    pub status: String,
    pub method: String,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePaymentRequest {
    pub user_id: Option<i64>,
    pub contract_id: Option<i64>,
    pub amount: Option<f64>,
    pub status: Option<String>,
    pub method: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct PaymentFilter {
    pub user_id: Option<i64>,
    pub contract_id: Option<i64>,
    pub status: Option<String>,
}
