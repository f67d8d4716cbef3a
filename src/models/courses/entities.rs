use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::requests::{
    CourseFilter, CourseTagFilter, CourseTagMappingFilter, CreateCourseRequest,
    CreateCourseTagMappingRequest, CreateCourseTagRequest, CreateEnrollmentRequest,
    EnrollmentFilter, UpdateCourseRequest, UpdateCourseTagMappingRequest,
    UpdateCourseTagRequest, UpdateEnrollmentRequest,
};
use crate::models::common::Resource;
use crate::models::common::resource::{check_len, check_len_opt};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: i64,
    pub branch_id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub enrollment_start_date: Option<DateTime<Utc>>,
    pub enrollment_end_date: Option<DateTime<Utc>>,
    pub max_students: Option<i32>,
    pub current_students: i32,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseTag {
    pub id: i64,
    pub tag_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseTagMapping {
    pub id: i64,
    pub course_id: i64,
    pub tag_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    pub id: i64,
    pub user_id: i64,
    pub course_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn check_range(
    label: &str,
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
) -> Result<(), String> {
    if let (Some(start), Some(end)) = (start, end)
        && end < start
    {
        return Err(format!("{label} end must not be before its start"));
    }
    Ok(())
}

fn check_capacity(max_students: Option<i32>, current_students: Option<i32>) -> Result<(), String> {
    if max_students.is_some_and(|max| max < 0) {
        return Err("maxStudents must not be negative".into());
    }
    if current_students.is_some_and(|cur| cur < 0) {
        return Err("currentStudents must not be negative".into());
    }
    if let (Some(max), Some(cur)) = (max_students, current_students)
        && cur > max
    {
        return Err("currentStudents must not exceed maxStudents".into());
    }
    Ok(())
}

impl Resource for Course {
    type Create = CreateCourseRequest;
    type Update = UpdateCourseRequest;
    type Filter = CourseFilter;

    const NAME: &'static str = "Course";
    const PATH: &'static str = "courses";

    fn validate_create(req: &Self::Create) -> Result<(), String> {
        check_len("name", &req.name, 100)?;
        check_range("course", req.start_date, req.end_date)?;
        check_range(
            "enrollment",
            req.enrollment_start_date,
            req.enrollment_end_date,
        )?;
        check_capacity(req.max_students, req.current_students)
    }

    fn validate_update(req: &Self::Update) -> Result<(), String> {
        check_len_opt("name", req.name.as_ref(), 100)?;
        check_range("course", req.start_date, req.end_date)?;
        check_range(
            "enrollment",
            req.enrollment_start_date,
            req.enrollment_end_date,
        )?;
        check_capacity(req.max_students, req.current_students)
    }
}

impl Resource for CourseTag {
    type Create = CreateCourseTagRequest;
    type Update = UpdateCourseTagRequest;
    type Filter = CourseTagFilter;

    const NAME: &'static str = "CourseTag";
    const PATH: &'static str = "courseTags";

    fn validate_create(req: &Self::Create) -> Result<(), String> {
        check_len("tagName", &req.tag_name, 100)
    }

    fn validate_update(req: &Self::Update) -> Result<(), String> {
        check_len_opt("tagName", req.tag_name.as_ref(), 100)
    }
}

impl Resource for CourseTagMapping {
    type Create = CreateCourseTagMappingRequest;
    type Update = UpdateCourseTagMappingRequest;
    type Filter = CourseTagMappingFilter;

    const NAME: &'static str = "CourseTagMapping";
    const PATH: &'static str = "courseTagMappings";
}

impl Resource for Enrollment {
    type Create = CreateEnrollmentRequest;
    type Update = UpdateEnrollmentRequest;
    type Filter = EnrollmentFilter;

    const NAME: &'static str = "Enrollment";
    const PATH: &'static str = "enrollments";
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn course_request() -> CreateCourseRequest {
        CreateCourseRequest {
            branch_id: Some(1),
            name: "Algebra I".into(),
            description: None,
            start_date: Utc.with_ymd_and_hms(2025, 9, 1, 0, 0, 0).single(),
            end_date: Utc.with_ymd_and_hms(2025, 12, 20, 0, 0, 0).single(),
            enrollment_start_date: None,
            enrollment_end_date: None,
            max_students: Some(30),
            current_students: Some(0),
            image: None,
        }
    }

    #[test]
    fn test_valid_course() {
        assert!(Course::validate_create(&course_request()).is_ok());
    }

    #[test]
    fn test_end_before_start() {
        let mut req = course_request();
        std::mem::swap(&mut req.start_date, &mut req.end_date);
        assert!(Course::validate_create(&req).is_err());
    }

    #[test]
    fn test_over_capacity() {
        let mut req = course_request();
        req.current_students = Some(31);
        assert_eq!(
            Course::validate_create(&req),
            Err("currentStudents must not exceed maxStudents".to_string())
        );
    }
}
