use super::{contains_pattern, search_term};
use crate::entity::{faqs, notifications, reviews, search_histories};
use crate::impl_crud_storage;
use crate::models::engagement::{
    entities::{Faq, Notification, Review, SearchHistory},
    requests::{
        CreateFaqRequest, CreateNotificationRequest, CreateReviewRequest,
        CreateSearchHistoryRequest, FaqFilter, NotificationFilter, ReviewFilter,
        SearchHistoryFilter, UpdateFaqRequest, UpdateNotificationRequest, UpdateReviewRequest,
        UpdateSearchHistoryRequest,
    },
};
use sea_orm::{ColumnTrait, QueryFilter, Select, Set};

// 评价
fn build_review(req: CreateReviewRequest, now: i64) -> reviews::ActiveModel {
    reviews::ActiveModel {
        user_id: Set(Some(req.user_id)),
        branch_id: Set(Some(req.branch_id)),
        rating: Set(req.rating),
        description: Set(req.description),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
}

fn patch_review(model: &mut reviews::ActiveModel, req: UpdateReviewRequest) {
    if let Some(user_id) = req.user_id {
        model.user_id = Set(Some(user_id));
    }
    if let Some(branch_id) = req.branch_id {
        model.branch_id = Set(Some(branch_id));
    }
    if let Some(rating) = req.rating {
        model.rating = Set(rating);
    }
    if let Some(description) = req.description {
        model.description = Set(description);
    }
}

fn filter_reviews(
    mut select: Select<reviews::Entity>,
    filter: ReviewFilter,
) -> Select<reviews::Entity> {
    if let Some(user_id) = filter.user_id {
        select = select.filter(reviews::Column::UserId.eq(user_id));
    }
    if let Some(branch_id) = filter.branch_id {
        select = select.filter(reviews::Column::BranchId.eq(branch_id));
    }
    select
}

impl_crud_storage! {
    record: Review,
    entity: reviews,
    convert: into_review,
    build: build_review,
    patch: patch_review,
    filter: filter_reviews,
}

// 通知
fn build_notification(req: CreateNotificationRequest, now: i64) -> notifications::ActiveModel {
    notifications::ActiveModel {
        user_id: Set(Some(req.user_id)),
        content: Set(req.content),
        seen: Set(req.seen.unwrap_or(false)),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
}

fn patch_notification(model: &mut notifications::ActiveModel, req: UpdateNotificationRequest) {
    if let Some(user_id) = req.user_id {
        model.user_id = Set(Some(user_id));
    }
    if let Some(content) = req.content {
        model.content = Set(content);
    }
    if let Some(seen) = req.seen {
        model.seen = Set(seen);
    }
}

fn filter_notifications(
    mut select: Select<notifications::Entity>,
    filter: NotificationFilter,
) -> Select<notifications::Entity> {
    if let Some(user_id) = filter.user_id {
        select = select.filter(notifications::Column::UserId.eq(user_id));
    }
    if let Some(seen) = filter.seen {
        select = select.filter(notifications::Column::Seen.eq(seen));
    }
    select
}

impl_crud_storage! {
    record: Notification,
    entity: notifications,
    convert: into_notification,
    build: build_notification,
    patch: patch_notification,
    filter: filter_notifications,
}

// 搜索历史
fn build_search_history(
    req: CreateSearchHistoryRequest,
    now: i64,
) -> search_histories::ActiveModel {
    search_histories::ActiveModel {
        user_id: Set(Some(req.user_id)),
        query: Set(req.query),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
}

fn patch_search_history(
    model: &mut search_histories::ActiveModel,
    req: UpdateSearchHistoryRequest,
) {
    if let Some(user_id) = req.user_id {
        model.user_id = Set(Some(user_id));
    }
    if let Some(query) = req.query {
        model.query = Set(query);
    }
}

fn filter_search_histories(
    mut select: Select<search_histories::Entity>,
    filter: SearchHistoryFilter,
) -> Select<search_histories::Entity> {
    if let Some(user_id) = filter.user_id {
        select = select.filter(search_histories::Column::UserId.eq(user_id));
    }
    select
}

impl_crud_storage! {
    record: SearchHistory,
    entity: search_histories,
    convert: into_search_history,
    build: build_search_history,
    patch: patch_search_history,
    filter: filter_search_histories,
}

// 常见问题
fn build_faq(req: CreateFaqRequest, now: i64) -> faqs::ActiveModel {
    faqs::ActiveModel {
        question: Set(req.question),
        answer: Set(req.answer),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
}

fn patch_faq(model: &mut faqs::ActiveModel, req: UpdateFaqRequest) {
    if let Some(question) = req.question {
        model.question = Set(question);
    }
    if let Some(answer) = req.answer {
        model.answer = Set(answer);
    }
}

fn filter_faqs(mut select: Select<faqs::Entity>, filter: FaqFilter) -> Select<faqs::Entity> {
    if let Some(term) = search_term(filter.search) {
        select = select.filter(faqs::Column::Question.like(contains_pattern(&term)));
    }
    select
}

impl_crud_storage! {
    record: Faq,
    entity: faqs,
    convert: into_faq,
    build: build_faq,
    patch: patch_faq,
    filter: filter_faqs,
}
