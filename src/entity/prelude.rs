//! 预导入模块，方便使用

pub use super::announcements::{
    ActiveModel as AnnouncementActiveModel, Column as AnnouncementColumn, Entity as Announcements, Model as AnnouncementModel,
};
pub use super::branches::{
    ActiveModel as BranchActiveModel, Column as BranchColumn, Entity as Branches, Model as BranchModel,
};
pub use super::cities::{
    ActiveModel as CityActiveModel, Column as CityColumn, Entity as Cities, Model as CityModel,
};
pub use super::contracts::{
    ActiveModel as ContractActiveModel, Column as ContractColumn, Entity as Contracts, Model as ContractModel,
};
pub use super::course_tag_mappings::{
    ActiveModel as CourseTagMappingActiveModel, Column as CourseTagMappingColumn, Entity as CourseTagMappings, Model as CourseTagMappingModel,
};
pub use super::course_tags::{
    ActiveModel as CourseTagActiveModel, Column as CourseTagColumn, Entity as CourseTags, Model as CourseTagModel,
};
pub use super::courses::{
    ActiveModel as CourseActiveModel, Column as CourseColumn, Entity as Courses, Model as CourseModel,
};
pub use super::districts::{
    ActiveModel as DistrictActiveModel, Column as DistrictColumn, Entity as Districts, Model as DistrictModel,
};
pub use super::education_centers::{
    ActiveModel as EducationCenterActiveModel, Column as EducationCenterColumn, Entity as EducationCenters, Model as EducationCenterModel,
};
pub use super::enrollments::{
    ActiveModel as EnrollmentActiveModel, Column as EnrollmentColumn, Entity as Enrollments, Model as EnrollmentModel,
};
pub use super::faqs::{
    ActiveModel as FaqActiveModel, Column as FaqColumn, Entity as Faqs, Model as FaqModel,
};
pub use super::notifications::{
    ActiveModel as NotificationActiveModel, Column as NotificationColumn, Entity as Notifications, Model as NotificationModel,
};
pub use super::payments::{
    ActiveModel as PaymentActiveModel, Column as PaymentColumn, Entity as Payments, Model as PaymentModel,
};
pub use super::reviews::{
    ActiveModel as ReviewActiveModel, Column as ReviewColumn, Entity as Reviews, Model as ReviewModel,
};
pub use super::search_histories::{
    ActiveModel as SearchHistoryActiveModel, Column as SearchHistoryColumn, Entity as SearchHistories, Model as SearchHistoryModel,
};
pub use super::subdistricts::{
    ActiveModel as SubdistrictActiveModel, Column as SubdistrictColumn, Entity as Subdistricts, Model as SubdistrictModel,
};
pub use super::user_roles::{
    ActiveModel as UserRoleActiveModel, Column as UserRoleColumn, Entity as UserRoles, Model as UserRoleModel,
};
pub use super::users::{
    ActiveModel as UserActiveModel, Column as UserColumn, Entity as Users, Model as UserModel,
};
