use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::requests::{
    CreateFaqRequest, CreateNotificationRequest, CreateReviewRequest,
    CreateSearchHistoryRequest, FaqFilter, NotificationFilter, ReviewFilter, SearchHistoryFilter,
    UpdateFaqRequest, UpdateNotificationRequest, UpdateReviewRequest, UpdateSearchHistoryRequest,
};
use crate::models::common::Resource;
use crate::models::common::resource::{check_len, check_len_opt, check_not_blank};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: i64,
    pub user_id: Option<i64>,
    pub branch_id: Option<i64>,
    pub rating: i32,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: i64,
    pub user_id: Option<i64>,
    pub content: String,
    pub seen: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchHistory {
    pub id: i64,
    pub user_id: Option<i64>,
    pub query: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Faq {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn check_rating(rating: i32) -> Result<(), String> {
    if !(1..=5).contains(&rating) {
        return Err("rating must be between 1 and 5".into());
    }
    Ok(())
}

impl Resource for Review {
    type Create = CreateReviewRequest;
    type Update = UpdateReviewRequest;
    type Filter = ReviewFilter;

    const NAME: &'static str = "Review";
    const PATH: &'static str = "reviews";

    fn validate_create(req: &Self::Create) -> Result<(), String> {
        check_rating(req.rating)?;
        check_not_blank("description", &req.description)
    }

    fn validate_update(req: &Self::Update) -> Result<(), String> {
        req.rating.map_or(Ok(()), check_rating)?;
        match &req.description {
            Some(description) => check_not_blank("description", description),
            None => Ok(()),
        }
    }
}

impl Resource for Notification {
    type Create = CreateNotificationRequest;
    type Update = UpdateNotificationRequest;
    type Filter = NotificationFilter;

    const NAME: &'static str = "Notification";
    const PATH: &'static str = "notifications";

    fn validate_create(req: &Self::Create) -> Result<(), String> {
        check_len("content", &req.content, 255)
    }

    fn validate_update(req: &Self::Update) -> Result<(), String> {
        check_len_opt("content", req.content.as_ref(), 255)
    }
}

impl Resource for SearchHistory {
    type Create = CreateSearchHistoryRequest;
    type Update = UpdateSearchHistoryRequest;
    type Filter = SearchHistoryFilter;

    const NAME: &'static str = "SearchHistory";
    const PATH: &'static str = "searchHistories";

    fn validate_create(req: &Self::Create) -> Result<(), String> {
        check_len("query", &req.query, 255)
    }

    fn validate_update(req: &Self::Update) -> Result<(), String> {
        check_len_opt("query", req.query.as_ref(), 255)
    }
}

impl Resource for Faq {
    type Create = CreateFaqRequest;
    type Update = UpdateFaqRequest;
    type Filter = FaqFilter;

    const NAME: &'static str = "FAQ";
    const PATH: &'static str = "faqs";

    fn validate_create(req: &Self::Create) -> Result<(), String> {
        check_not_blank("question", &req.question)?;
        check_not_blank("answer", &req.answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_bounds() {
        let mut req = CreateReviewRequest {
            user_id: 1,
            branch_id: 1,
            rating: 5,
            description: "Great teachers".into(),
        };
        assert!(Review::validate_create(&req).is_ok());

        req.rating = 0;
        assert!(Review::validate_create(&req).is_err());

        let update = UpdateReviewRequest {
            rating: Some(6),
            ..Default::default()
        };
        assert!(Review::validate_update(&update).is_err());
    }
}
