use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::requests::{
    AnnouncementFilter, BranchFilter, CreateAnnouncementRequest, CreateBranchRequest,
    CreateEducationCenterRequest, EducationCenterFilter, UpdateAnnouncementRequest,
    UpdateBranchRequest, UpdateEducationCenterRequest,
};
use crate::models::common::Resource;
use crate::models::common::resource::{check_len, check_len_opt, check_not_blank};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EducationCenter {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    pub id: i64,
    pub education_center_id: i64,
    pub name: String,
    pub subdistrict_id: Option<i64>,
    pub other_description: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    pub id: i64,
    pub education_center_id: Option<i64>,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn check_coordinates(latitude: Option<f64>, longitude: Option<f64>) -> Result<(), String> {
    if let Some(lat) = latitude
        && !(-90.0..=90.0).contains(&lat)
    {
        return Err("latitude must be between -90 and 90".into());
    }
    if let Some(lng) = longitude
        && !(-180.0..=180.0).contains(&lng)
    {
        return Err("longitude must be between -180 and 180".into());
    }
    Ok(())
}

impl Resource for EducationCenter {
    type Create = CreateEducationCenterRequest;
    type Update = UpdateEducationCenterRequest;
    type Filter = EducationCenterFilter;

    const NAME: &'static str = "EducationCenter";
    const PATH: &'static str = "educenters";

    fn validate_create(req: &Self::Create) -> Result<(), String> {
        check_len("name", &req.name, 100)
    }

    fn validate_update(req: &Self::Update) -> Result<(), String> {
        check_len_opt("name", req.name.as_ref(), 100)
    }
}

impl Resource for Branch {
    type Create = CreateBranchRequest;
    type Update = UpdateBranchRequest;
    type Filter = BranchFilter;

    const NAME: &'static str = "Branch";
    const PATH: &'static str = "branches";

    fn validate_create(req: &Self::Create) -> Result<(), String> {
        check_len("name", &req.name, 100)?;
        check_coordinates(req.latitude, req.longitude)
    }

    fn validate_update(req: &Self::Update) -> Result<(), String> {
        check_len_opt("name", req.name.as_ref(), 100)?;
        check_coordinates(req.latitude, req.longitude)
    }
}

impl Resource for Announcement {
    type Create = CreateAnnouncementRequest;
    type Update = UpdateAnnouncementRequest;
    type Filter = AnnouncementFilter;

    const NAME: &'static str = "Announcement";
    const PATH: &'static str = "announcements";

    fn validate_create(req: &Self::Create) -> Result<(), String> {
        check_len("title", &req.title, 255)?;
        check_not_blank("content", &req.content)
    }

    fn validate_update(req: &Self::Update) -> Result<(), String> {
        check_len_opt("title", req.title.as_ref(), 255)?;
        match &req.content {
            Some(content) => check_not_blank("content", content),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_branch_coordinates() {
        let mut req = CreateBranchRequest {
            education_center_id: 1,
            name: "North".into(),
            subdistrict_id: 2,
            other_description: None,
            latitude: Some(41.3),
            longitude: Some(69.2),
            image: None,
        };
        assert!(Branch::validate_create(&req).is_ok());

        req.latitude = Some(91.0);
        assert_eq!(
            Branch::validate_create(&req),
            Err("latitude must be between -90 and 90".to_string())
        );
    }

    #[test]
    fn test_education_center_name_length() {
        let req = CreateEducationCenterRequest {
            name: "x".repeat(101),
            description: None,
            image: None,
        };
        assert!(EducationCenter::validate_create(&req).is_err());
    }
}
