use crate::entity::{contracts, payments};
use crate::impl_crud_storage;
use crate::models::billing::{
    entities::{Contract, Payment},
    requests::{
        ContractFilter, CreateContractRequest, CreatePaymentRequest, PaymentFilter,
        UpdateContractRequest, UpdatePaymentRequest,
    },
};
use sea_orm::{ColumnTrait, QueryFilter, Select, Set};

// 合同
fn build_contract(req: CreateContractRequest, now: i64) -> contracts::ActiveModel {
    contracts::ActiveModel {
        user_id: Set(Some(req.user_id)),
        course_id: Set(Some(req.course_id)),
        content: Set(req.content),
        status: Set(req.status),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
}

fn patch_contract(model: &mut contracts::ActiveModel, req: UpdateContractRequest) {
    if let Some(user_id) = req.user_id {
        model.user_id = Set(Some(user_id));
    }
    if let Some(course_id) = req.course_id {
        model.course_id = Set(Some(course_id));
    }
    if let Some(content) = req.content {
        model.content = Set(content);
    }
    if let Some(status) = req.status {
        model.status = Set(Some(status));
    }
}

fn filter_contracts(
    mut select: Select<contracts::Entity>,
    filter: ContractFilter,
) -> Select<contracts::Entity> {
    if let Some(user_id) = filter.user_id {
        select = select.filter(contracts::Column::UserId.eq(user_id));
    }
    if let Some(course_id) = filter.course_id {
        select = select.filter(contracts::Column::CourseId.eq(course_id));
    }
    if let Some(status) = filter.status {
        select = select.filter(contracts::Column::Status.eq(status));
    }
    select
}

impl_crud_storage! {
    record: Contract,
    entity: contracts,
    convert: into_contract,
    build: build_contract,
    patch: patch_contract,
    filter: filter_contracts,
}

// 付款
fn build_payment(req: CreatePaymentRequest, now: i64) -> payments::ActiveModel {
    payments::ActiveModel {
        user_id: Set(Some(req.user_id)),
        contract_id: Set(Some(req.contract_id)),
        amount: Set(req.amount),
        status: Set(req.status),
        method: Set(req.method),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
}

fn patch_payment(model: &mut payments::ActiveModel, req: UpdatePaymentRequest) {
    if let Some(user_id) = req.user_id {
        model.user_id = Set(Some(user_id));
    }
    if let Some(contract_id) = req.contract_id {
        model.contract_id = Set(Some(contract_id));
    }
    if let Some(amount) = req.amount {
        model.amount = Set(amount);
    }
    if let Some(status) = req.status {
        model.status = Set(status);
    }
    if let Some(method) = req.method {
        model.method = Set(method);
    }
}

fn filter_payments(
    mut select: Select<payments::Entity>,
    filter: PaymentFilter,
) -> Select<payments::Entity> {
    if let Some(user_id) = filter.user_id {
        select = select.filter(payments::Column::UserId.eq(user_id));
    }
    if let Some(contract_id) = filter.contract_id {
        select = select.filter(payments::Column::ContractId.eq(contract_id));
    }
    if let Some(status) = filter.status {
        select = select.filter(payments::Column::Status.eq(status));
    }
    select
}

impl_crud_storage! {
    record: Payment,
    entity: payments,
    convert: into_payment,
    build: build_payment,
    patch: patch_payment,
    filter: filter_payments,
}
