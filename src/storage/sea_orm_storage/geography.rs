use super::{contains_pattern, search_term};
use crate::entity::{cities, districts, subdistricts};
use crate::impl_crud_storage;
use crate::models::geography::{
    entities::{City, District, Subdistrict},
    requests::{
        CityFilter, CreateCityRequest, CreateDistrictRequest, CreateSubdistrictRequest,
        DistrictFilter, SubdistrictFilter, UpdateCityRequest, UpdateDistrictRequest,
        UpdateSubdistrictRequest,
    },
};
use sea_orm::{ColumnTrait, QueryFilter, Select, Set};

// 城市
fn build_city(req: CreateCityRequest, now: i64) -> cities::ActiveModel {
    cities::ActiveModel {
        name: Set(req.name),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
}

fn patch_city(model: &mut cities::ActiveModel, req: UpdateCityRequest) {
    if let Some(name) = req.name {
        model.name = Set(name);
    }
}

fn filter_cities(mut select: Select<cities::Entity>, filter: CityFilter) -> Select<cities::Entity> {
    if let Some(term) = search_term(filter.search) {
        select = select.filter(cities::Column::Name.like(contains_pattern(&term)));
    }
    select
}

impl_crud_storage! {
    record: City,
    entity: cities,
    convert: into_city,
    build: build_city,
    patch: patch_city,
    filter: filter_cities,
}

// 区
fn build_district(req: CreateDistrictRequest, now: i64) -> districts::ActiveModel {
    districts::ActiveModel {
        city_id: Set(req.city_id),
        name: Set(req.name),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
}

fn patch_district(model: &mut districts::ActiveModel, req: UpdateDistrictRequest) {
    if let Some(city_id) = req.city_id {
        model.city_id = Set(city_id);
    }
    if let Some(name) = req.name {
        model.name = Set(name);
    }
}

fn filter_districts(
    mut select: Select<districts::Entity>,
    filter: DistrictFilter,
) -> Select<districts::Entity> {
    if let Some(city_id) = filter.city_id {
        select = select.filter(districts::Column::CityId.eq(city_id));
    }
    if let Some(term) = search_term(filter.search) {
        select = select.filter(districts::Column::Name.like(contains_pattern(&term)));
    }
    select
}

impl_crud_storage! {
    record: District,
    entity: districts,
    convert: into_district,
    build: build_district,
    patch: patch_district,
    filter: filter_districts,
}

// 街道
fn build_subdistrict(req: CreateSubdistrictRequest, now: i64) -> subdistricts::ActiveModel {
    subdistricts::ActiveModel {
        district_id: Set(req.district_id),
        name: Set(req.name),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
}

fn patch_subdistrict(model: &mut subdistricts::ActiveModel, req: UpdateSubdistrictRequest) {
    if let Some(district_id) = req.district_id {
        model.district_id = Set(district_id);
    }
    if let Some(name) = req.name {
        model.name = Set(name);
    }
}

fn filter_subdistricts(
    mut select: Select<subdistricts::Entity>,
    filter: SubdistrictFilter,
) -> Select<subdistricts::Entity> {
    if let Some(district_id) = filter.district_id {
        select = select.filter(subdistricts::Column::DistrictId.eq(district_id));
    }
    if let Some(term) = search_term(filter.search) {
        select = select.filter(subdistricts::Column::Name.like(contains_pattern(&term)));
    }
    select
}

impl_crud_storage! {
    record: Subdistrict,
    entity: subdistricts,
    convert: into_subdistrict,
    build: build_subdistrict,
    patch: patch_subdistrict,
    filter: filter_subdistricts,
}
