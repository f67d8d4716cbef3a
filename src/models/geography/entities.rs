use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::requests::{
    CityFilter, CreateCityRequest, CreateDistrictRequest, CreateSubdistrictRequest,
    DistrictFilter, SubdistrictFilter, UpdateCityRequest, UpdateDistrictRequest,
    UpdateSubdistrictRequest,
};
use crate::models::common::Resource;
use crate::models::common::resource::{check_len, check_len_opt};

const NAME_MAX: usize = 255;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct City {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct District {
    pub id: i64,
    pub city_id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Subdistrict {
    pub id: i64,
    pub district_id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Resource for City {
    type Create = CreateCityRequest;
    type Update = UpdateCityRequest;
    type Filter = CityFilter;

    const NAME: &'static str = "City";
    const PATH: &'static str = "cities";

    fn validate_create(req: &Self::Create) -> Result<(), String> {
        check_len("name", &req.name, NAME_MAX)
    }

    fn validate_update(req: &Self::Update) -> Result<(), String> {
        check_len_opt("name", req.name.as_ref(), NAME_MAX)
    }
}

impl Resource for District {
    type Create = CreateDistrictRequest;
    type Update = UpdateDistrictRequest;
    type Filter = DistrictFilter;

    const NAME: &'static str = "District";
    const PATH: &'static str = "districts";

    fn validate_create(req: &Self::Create) -> Result<(), String> {
        check_len("name", &req.name, NAME_MAX)
    }

    fn validate_update(req: &Self::Update) -> Result<(), String> {
        check_len_opt("name", req.name.as_ref(), NAME_MAX)
    }
}

impl Resource for Subdistrict {
    type Create = CreateSubdistrictRequest;
    type Update = UpdateSubdistrictRequest;
    type Filter = SubdistrictFilter;

    const NAME: &'static str = "Subdistrict";
    const PATH: &'static str = "subdistricts";

    fn validate_create(req: &Self::Create) -> Result<(), String> {
        check_len("name", &req.name, NAME_MAX)
    }

    fn validate_update(req: &Self::Update) -> Result<(), String> {
        check_len_opt("name", req.name.as_ref(), NAME_MAX)
    }
}
