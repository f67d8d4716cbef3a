use super::{SeaOrmStorage, contains_pattern, map_db_err, search_term};
use crate::entity::{course_tag_mappings, course_tags, courses, enrollments};
use crate::errors::Result;
use crate::impl_crud_storage;
use crate::models::courses::{
    entities::{Course, CourseTag, CourseTagMapping, Enrollment},
    requests::{
        CourseFilter, CourseTagFilter, CourseTagMappingFilter, CreateCourseRequest,
        CreateCourseTagMappingRequest, CreateCourseTagRequest, CreateEnrollmentRequest,
        EnrollmentFilter, UpdateCourseRequest, UpdateCourseTagMappingRequest,
        UpdateCourseTagRequest, UpdateEnrollmentRequest,
    },
};
use chrono::{DateTime, Utc};
use sea_orm::{ColumnTrait, EntityTrait, ModelTrait, QueryFilter, QueryOrder, Select, Set};

fn unix(value: Option<DateTime<Utc>>) -> Option<i64> {
    value.map(|dt| dt.timestamp())
}

// 课程
fn build_course(req: CreateCourseRequest, now: i64) -> courses::ActiveModel {
    courses::ActiveModel {
        branch_id: Set(req.branch_id),
        name: Set(req.name),
        description: Set(req.description),
        start_date: Set(unix(req.start_date)),
        end_date: Set(unix(req.end_date)),
        enrollment_start_date: Set(unix(req.enrollment_start_date)),
        enrollment_end_date: Set(unix(req.enrollment_end_date)),
        max_students: Set(req.max_students),
        current_students: Set(req.current_students.unwrap_or(0)),
        image: Set(req.image),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
}

fn patch_course(model: &mut courses::ActiveModel, req: UpdateCourseRequest) {
    if let Some(branch_id) = req.branch_id {
        model.branch_id = Set(Some(branch_id));
    }
    if let Some(name) = req.name {
        model.name = Set(name);
    }
    if let Some(description) = req.description {
        model.description = Set(Some(description));
    }
    if req.start_date.is_some() {
        model.start_date = Set(unix(req.start_date));
    }
    if req.end_date.is_some() {
        model.end_date = Set(unix(req.end_date));
    }
    if req.enrollment_start_date.is_some() {
        model.enrollment_start_date = Set(unix(req.enrollment_start_date));
    }
    if req.enrollment_end_date.is_some() {
        model.enrollment_end_date = Set(unix(req.enrollment_end_date));
    }
    if let Some(max_students) = req.max_students {
        model.max_students = Set(Some(max_students));
    }
    if let Some(current_students) = req.current_students {
        model.current_students = Set(current_students);
    }
    if let Some(image) = req.image {
        model.image = Set(Some(image));
    }
}

fn filter_courses(
    mut select: Select<courses::Entity>,
    filter: CourseFilter,
) -> Select<courses::Entity> {
    if let Some(branch_id) = filter.branch_id {
        select = select.filter(courses::Column::BranchId.eq(branch_id));
    }
    if let Some(term) = search_term(filter.search) {
        select = select.filter(courses::Column::Name.like(contains_pattern(&term)));
    }
    select
}

impl_crud_storage! {
    record: Course,
    entity: courses,
    convert: into_course,
    build: build_course,
    patch: patch_course,
    filter: filter_courses,
}

// 课程标签
fn build_course_tag(req: CreateCourseTagRequest, now: i64) -> course_tags::ActiveModel {
    course_tags::ActiveModel {
        tag_name: Set(req.tag_name),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
}

fn patch_course_tag(model: &mut course_tags::ActiveModel, req: UpdateCourseTagRequest) {
    if let Some(tag_name) = req.tag_name {
        model.tag_name = Set(tag_name);
    }
}

fn filter_course_tags(
    mut select: Select<course_tags::Entity>,
    filter: CourseTagFilter,
) -> Select<course_tags::Entity> {
    if let Some(term) = search_term(filter.search) {
        select = select.filter(course_tags::Column::TagName.like(contains_pattern(&term)));
    }
    select
}

impl_crud_storage! {
    record: CourseTag,
    entity: course_tags,
    convert: into_course_tag,
    build: build_course_tag,
    patch: patch_course_tag,
    filter: filter_course_tags,
}

// 课程-标签关联
fn build_course_tag_mapping(
    req: CreateCourseTagMappingRequest,
    now: i64,
) -> course_tag_mappings::ActiveModel {
    course_tag_mappings::ActiveModel {
        course_id: Set(req.course_id),
        tag_id: Set(req.tag_id),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
}

fn patch_course_tag_mapping(
    model: &mut course_tag_mappings::ActiveModel,
    req: UpdateCourseTagMappingRequest,
) {
    if let Some(course_id) = req.course_id {
        model.course_id = Set(course_id);
    }
    if let Some(tag_id) = req.tag_id {
        model.tag_id = Set(tag_id);
    }
}

fn filter_course_tag_mappings(
    mut select: Select<course_tag_mappings::Entity>,
    filter: CourseTagMappingFilter,
) -> Select<course_tag_mappings::Entity> {
    if let Some(course_id) = filter.course_id {
        select = select.filter(course_tag_mappings::Column::CourseId.eq(course_id));
    }
    if let Some(tag_id) = filter.tag_id {
        select = select.filter(course_tag_mappings::Column::TagId.eq(tag_id));
    }
    select
}

impl_crud_storage! {
    record: CourseTagMapping,
    entity: course_tag_mappings,
    convert: into_course_tag_mapping,
    build: build_course_tag_mapping,
    patch: patch_course_tag_mapping,
    filter: filter_course_tag_mappings,
}

// 选课
fn build_enrollment(req: CreateEnrollmentRequest, now: i64) -> enrollments::ActiveModel {
    enrollments::ActiveModel {
        user_id: Set(req.user_id),
        course_id: Set(req.course_id),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
}

fn patch_enrollment(model: &mut enrollments::ActiveModel, req: UpdateEnrollmentRequest) {
    if let Some(user_id) = req.user_id {
        model.user_id = Set(user_id);
    }
    if let Some(course_id) = req.course_id {
        model.course_id = Set(course_id);
    }
}

fn filter_enrollments(
    mut select: Select<enrollments::Entity>,
    filter: EnrollmentFilter,
) -> Select<enrollments::Entity> {
    if let Some(user_id) = filter.user_id {
        select = select.filter(enrollments::Column::UserId.eq(user_id));
    }
    if let Some(course_id) = filter.course_id {
        select = select.filter(enrollments::Column::CourseId.eq(course_id));
    }
    select
}

impl_crud_storage! {
    record: Enrollment,
    entity: enrollments,
    convert: into_enrollment,
    build: build_enrollment,
    patch: patch_enrollment,
    filter: filter_enrollments,
}

impl SeaOrmStorage {
    /// 课程的全部标签（多对多，经由 course_tag_mappings）
    pub async fn list_course_tags_for_course_impl(
        &self,
        course_id: i64,
    ) -> Result<Option<Vec<CourseTag>>> {
        let Some(course) = courses::Entity::find_by_id(course_id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?
        else {
            return Ok(None);
        };

        let tags = course
            .find_related(course_tags::Entity)
            .order_by_asc(course_tags::Column::Id)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(Some(tags.into_iter().map(|m| m.into_course_tag()).collect()))
    }
}
