use super::{contains_pattern, search_term};
use crate::entity::{announcements, branches, education_centers};
use crate::impl_crud_storage;
use crate::models::centers::{
    entities::{Announcement, Branch, EducationCenter},
    requests::{
        AnnouncementFilter, BranchFilter, CreateAnnouncementRequest, CreateBranchRequest,
        CreateEducationCenterRequest, EducationCenterFilter, UpdateAnnouncementRequest,
        UpdateBranchRequest, UpdateEducationCenterRequest,
    },
};
use sea_orm::{ColumnTrait, QueryFilter, Select, Set};

// 教育中心
fn build_education_center(
    req: CreateEducationCenterRequest,
    now: i64,
) -> education_centers::ActiveModel {
    education_centers::ActiveModel {
        name: Set(req.name),
        description: Set(req.description),
        image: Set(req.image),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
}

fn patch_education_center(
    model: &mut education_centers::ActiveModel,
    req: UpdateEducationCenterRequest,
) {
    if let Some(name) = req.name {
        model.name = Set(name);
    }
    if let Some(description) = req.description {
        model.description = Set(Some(description));
    }
    if let Some(image) = req.image {
        model.image = Set(Some(image));
    }
}

fn filter_education_centers(
    mut select: Select<education_centers::Entity>,
    filter: EducationCenterFilter,
) -> Select<education_centers::Entity> {
    if let Some(term) = search_term(filter.search) {
        select = select.filter(education_centers::Column::Name.like(contains_pattern(&term)));
    }
    select
}

impl_crud_storage! {
    record: EducationCenter,
    entity: education_centers,
    convert: into_education_center,
    build: build_education_center,
    patch: patch_education_center,
    filter: filter_education_centers,
}

// 分校
fn build_branch(req: CreateBranchRequest, now: i64) -> branches::ActiveModel {
    branches::ActiveModel {
        education_center_id: Set(req.education_center_id),
        name: Set(req.name),
        subdistrict_id: Set(Some(req.subdistrict_id)),
        other_description: Set(req.other_description),
        latitude: Set(req.latitude),
        longitude: Set(req.longitude),
        image: Set(req.image),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
}

fn patch_branch(model: &mut branches::ActiveModel, req: UpdateBranchRequest) {
    if let Some(education_center_id) = req.education_center_id {
        model.education_center_id = Set(education_center_id);
    }
    if let Some(name) = req.name {
        model.name = Set(name);
    }
    if let Some(subdistrict_id) = req.subdistrict_id {
        model.subdistrict_id = Set(Some(subdistrict_id));
    }
    if let Some(other_description) = req.other_description {
        model.other_description = Set(Some(other_description));
    }
    if let Some(latitude) = req.latitude {
        model.latitude = Set(Some(latitude));
    }
    if let Some(longitude) = req.longitude {
        model.longitude = Set(Some(longitude));
    }
    if let Some(image) = req.image {
        model.image = Set(Some(image));
    }
}

fn filter_branches(
    mut select: Select<branches::Entity>,
    filter: BranchFilter,
) -> Select<branches::Entity> {
    if let Some(education_center_id) = filter.education_center_id {
        select = select.filter(branches::Column::EducationCenterId.eq(education_center_id));
    }
    if let Some(subdistrict_id) = filter.subdistrict_id {
        select = select.filter(branches::Column::SubdistrictId.eq(subdistrict_id));
    }
    if let Some(term) = search_term(filter.search) {
        select = select.filter(branches::Column::Name.like(contains_pattern(&term)));
    }
    select
}

impl_crud_storage! {
    record: Branch,
    entity: branches,
    convert: into_branch,
    build: build_branch,
    patch: patch_branch,
    filter: filter_branches,
}

// 公告
fn build_announcement(req: CreateAnnouncementRequest, now: i64) -> announcements::ActiveModel {
    announcements::ActiveModel {
        education_center_id: Set(Some(req.education_center_id)),
        title: Set(req.title),
        content: Set(req.content),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
}

fn patch_announcement(model: &mut announcements::ActiveModel, req: UpdateAnnouncementRequest) {
    if let Some(education_center_id) = req.education_center_id {
        model.education_center_id = Set(Some(education_center_id));
    }
    if let Some(title) = req.title {
        model.title = Set(title);
    }
    if let Some(content) = req.content {
        model.content = Set(content);
    }
}

fn filter_announcements(
    mut select: Select<announcements::Entity>,
    filter: AnnouncementFilter,
) -> Select<announcements::Entity> {
    if let Some(education_center_id) = filter.education_center_id {
        select = select.filter(announcements::Column::EducationCenterId.eq(education_center_id));
    }
    if let Some(term) = search_term(filter.search) {
        select = select.filter(announcements::Column::Title.like(contains_pattern(&term)));
    }
    select
}

impl_crud_storage! {
    record: Announcement,
    entity: announcements,
    convert: into_announcement,
    build: build_announcement,
    patch: patch_announcement,
    filter: filter_announcements,
}
