use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

fn id_column<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .big_integer()
        .not_null()
        .auto_increment()
        .primary_key()
        .to_owned()
}

fn timestamp_column<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col).big_integer().not_null().to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 用户角色表
        manager
            .create_table(
                Table::create()
                    .table(UserRoles::Table)
                    .if_not_exists()
                    .col(id_column(UserRoles::Id))
                    .col(ColumnDef::new(UserRoles::RoleName).string().not_null())
                    .col(timestamp_column(UserRoles::CreatedAt))
                    .col(timestamp_column(UserRoles::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // 教育中心表
        manager
            .create_table(
                Table::create()
                    .table(EducationCenters::Table)
                    .if_not_exists()
                    .col(id_column(EducationCenters::Id))
                    .col(
                        ColumnDef::new(EducationCenters::Name)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(ColumnDef::new(EducationCenters::Description).text().null())
                    .col(ColumnDef::new(EducationCenters::Image).string().null())
                    .col(timestamp_column(EducationCenters::CreatedAt))
                    .col(timestamp_column(EducationCenters::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // 地理分类：城市 / 区 / 街道
        manager
            .create_table(
                Table::create()
                    .table(Cities::Table)
                    .if_not_exists()
                    .col(id_column(Cities::Id))
                    .col(ColumnDef::new(Cities::Name).string().not_null())
                    .col(timestamp_column(Cities::CreatedAt))
                    .col(timestamp_column(Cities::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Districts::Table)
                    .if_not_exists()
                    .col(id_column(Districts::Id))
                    .col(ColumnDef::new(Districts::CityId).big_integer().not_null())
                    .col(ColumnDef::new(Districts::Name).string().not_null())
                    .col(timestamp_column(Districts::CreatedAt))
                    .col(timestamp_column(Districts::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .from(Districts::Table, Districts::CityId)
                            .to(Cities::Table, Cities::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Subdistricts::Table)
                    .if_not_exists()
                    .col(id_column(Subdistricts::Id))
                    .col(
                        ColumnDef::new(Subdistricts::DistrictId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Subdistricts::Name).string().not_null())
                    .col(timestamp_column(Subdistricts::CreatedAt))
                    .col(timestamp_column(Subdistricts::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .from(Subdistricts::Table, Subdistricts::DistrictId)
                            .to(Districts::Table, Districts::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 分校表
        manager
            .create_table(
                Table::create()
                    .table(Branches::Table)
                    .if_not_exists()
                    .col(id_column(Branches::Id))
                    .col(
                        ColumnDef::new(Branches::EducationCenterId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Branches::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Branches::SubdistrictId).big_integer().null())
                    .col(ColumnDef::new(Branches::OtherDescription).text().null())
                    .col(ColumnDef::new(Branches::Latitude).double().null())
                    .col(ColumnDef::new(Branches::Longitude).double().null())
                    .col(ColumnDef::new(Branches::Image).string().null())
                    .col(timestamp_column(Branches::CreatedAt))
                    .col(timestamp_column(Branches::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .from(Branches::Table, Branches::EducationCenterId)
                            .to(EducationCenters::Table, EducationCenters::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Branches::Table, Branches::SubdistrictId)
                            .to(Subdistricts::Table, Subdistricts::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // 课程表
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(id_column(Courses::Id))
                    .col(ColumnDef::new(Courses::BranchId).big_integer().null())
                    .col(ColumnDef::new(Courses::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Courses::Description).text().null())
                    .col(ColumnDef::new(Courses::StartDate).big_integer().null())
                    .col(ColumnDef::new(Courses::EndDate).big_integer().null())
                    .col(
                        ColumnDef::new(Courses::EnrollmentStartDate)
                            .big_integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Courses::EnrollmentEndDate)
                            .big_integer()
                            .null(),
                    )
                    .col(ColumnDef::new(Courses::MaxStudents).integer().null())
                    .col(
                        ColumnDef::new(Courses::CurrentStudents)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Courses::Image).string().null())
                    .col(timestamp_column(Courses::CreatedAt))
                    .col(timestamp_column(Courses::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .from(Courses::Table, Courses::BranchId)
                            .to(Branches::Table, Branches::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CourseTags::Table)
                    .if_not_exists()
                    .col(id_column(CourseTags::Id))
                    .col(ColumnDef::new(CourseTags::TagName).string_len(100).not_null())
                    .col(timestamp_column(CourseTags::CreatedAt))
                    .col(timestamp_column(CourseTags::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CourseTagMappings::Table)
                    .if_not_exists()
                    .col(id_column(CourseTagMappings::Id))
                    .col(
                        ColumnDef::new(CourseTagMappings::CourseId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CourseTagMappings::TagId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(timestamp_column(CourseTagMappings::CreatedAt))
                    .col(timestamp_column(CourseTagMappings::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .from(CourseTagMappings::Table, CourseTagMappings::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CourseTagMappings::Table, CourseTagMappings::TagId)
                            .to(CourseTags::Table, CourseTags::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 用户表
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(id_column(Users::Id))
                    .col(
                        ColumnDef::new(Users::Email)
                            .string_len(100)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Users::Name).string_len(100).not_null())
                    .col(
                        ColumnDef::new(Users::WorkEducationCenterId)
                            .big_integer()
                            .null(),
                    )
                    .col(ColumnDef::new(Users::UserRoleId).big_integer().not_null())
                    .col(ColumnDef::new(Users::ProfileImage).string().null())
                    .col(timestamp_column(Users::CreatedAt))
                    .col(timestamp_column(Users::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .from(Users::Table, Users::WorkEducationCenterId)
                            .to(EducationCenters::Table, EducationCenters::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Users::Table, Users::UserRoleId)
                            .to(UserRoles::Table, UserRoles::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // 选课表
        manager
            .create_table(
                Table::create()
                    .table(Enrollments::Table)
                    .if_not_exists()
                    .col(id_column(Enrollments::Id))
                    .col(ColumnDef::new(Enrollments::UserId).big_integer().not_null())
                    .col(ColumnDef::new(Enrollments::CourseId).big_integer().not_null())
                    .col(timestamp_column(Enrollments::CreatedAt))
                    .col(timestamp_column(Enrollments::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .from(Enrollments::Table, Enrollments::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Enrollments::Table, Enrollments::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 合同与付款
        manager
            .create_table(
                Table::create()
                    .table(Contracts::Table)
                    .if_not_exists()
                    .col(id_column(Contracts::Id))
                    .col(ColumnDef::new(Contracts::UserId).big_integer().null())
                    .col(ColumnDef::new(Contracts::CourseId).big_integer().null())
                    .col(ColumnDef::new(Contracts::Content).text().not_null())
                    .col(ColumnDef::new(Contracts::Status).string_len(50).null())
                    .col(timestamp_column(Contracts::CreatedAt))
                    .col(timestamp_column(Contracts::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .from(Contracts::Table, Contracts::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Contracts::Table, Contracts::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Payments::Table)
                    .if_not_exists()
                    .col(id_column(Payments::Id))
                    .col(ColumnDef::new(Payments::UserId).big_integer().null())
                    .col(ColumnDef::new(Payments::ContractId).big_integer().null())
                    .col(ColumnDef::new(Payments::Amount).double().not_null())
                    .col(ColumnDef::new(Payments::Status).string().not_null())
                    .col(ColumnDef::new(Payments::Method).string_len(50).not_null())
                    .col(timestamp_column(Payments::CreatedAt))
                    .col(timestamp_column(Payments::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .from(Payments::Table, Payments::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Payments::Table, Payments::ContractId)
                            .to(Contracts::Table, Contracts::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // 评价表
        manager
            .create_table(
                Table::create()
                    .table(Reviews::Table)
                    .if_not_exists()
                    .col(id_column(Reviews::Id))
                    .col(ColumnDef::new(Reviews::UserId).big_integer().null())
                    .col(ColumnDef::new(Reviews::BranchId).big_integer().null())
                    .col(ColumnDef::new(Reviews::Rating).integer().not_null())
                    .col(ColumnDef::new(Reviews::Description).text().not_null())
                    .col(timestamp_column(Reviews::CreatedAt))
                    .col(timestamp_column(Reviews::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .from(Reviews::Table, Reviews::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Reviews::Table, Reviews::BranchId)
                            .to(Branches::Table, Branches::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // 公告、通知、搜索历史、常见问题
        manager
            .create_table(
                Table::create()
                    .table(Announcements::Table)
                    .if_not_exists()
                    .col(id_column(Announcements::Id))
                    .col(
                        ColumnDef::new(Announcements::EducationCenterId)
                            .big_integer()
                            .null(),
                    )
                    .col(ColumnDef::new(Announcements::Title).string_len(255).not_null())
                    .col(ColumnDef::new(Announcements::Content).text().not_null())
                    .col(timestamp_column(Announcements::CreatedAt))
                    .col(timestamp_column(Announcements::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .from(Announcements::Table, Announcements::EducationCenterId)
                            .to(EducationCenters::Table, EducationCenters::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Notifications::Table)
                    .if_not_exists()
                    .col(id_column(Notifications::Id))
                    .col(ColumnDef::new(Notifications::UserId).big_integer().null())
                    .col(
                        ColumnDef::new(Notifications::Content)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Notifications::Seen)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(timestamp_column(Notifications::CreatedAt))
                    .col(timestamp_column(Notifications::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .from(Notifications::Table, Notifications::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SearchHistories::Table)
                    .if_not_exists()
                    .col(id_column(SearchHistories::Id))
                    .col(ColumnDef::new(SearchHistories::UserId).big_integer().null())
                    .col(
                        ColumnDef::new(SearchHistories::Query)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(timestamp_column(SearchHistories::CreatedAt))
                    .col(timestamp_column(SearchHistories::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .from(SearchHistories::Table, SearchHistories::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Faqs::Table)
                    .if_not_exists()
                    .col(id_column(Faqs::Id))
                    .col(ColumnDef::new(Faqs::Question).text().not_null())
                    .col(ColumnDef::new(Faqs::Answer).text().not_null())
                    .col(timestamp_column(Faqs::CreatedAt))
                    .col(timestamp_column(Faqs::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // 外键列索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_branches_education_center_id")
                    .table(Branches::Table)
                    .col(Branches::EducationCenterId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_courses_branch_id")
                    .table(Courses::Table)
                    .col(Courses::BranchId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_enrollments_user_course")
                    .table(Enrollments::Table)
                    .col(Enrollments::UserId)
                    .col(Enrollments::CourseId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_course_tag_mappings_course_tag")
                    .table(CourseTagMappings::Table)
                    .col(CourseTagMappings::CourseId)
                    .col(CourseTagMappings::TagId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 按依赖关系逆序删除
        manager
            .drop_table(Table::drop().table(Faqs::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SearchHistories::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Notifications::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Announcements::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Reviews::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Payments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Contracts::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Enrollments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CourseTagMappings::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CourseTags::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Branches::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Subdistricts::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Districts::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Cities::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(EducationCenters::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(UserRoles::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum UserRoles {
    Table,
    Id,
    RoleName,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum EducationCenters {
    Table,
    Id,
    Name,
    Description,
    Image,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Cities {
    Table,
    Id,
    Name,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Districts {
    Table,
    Id,
    CityId,
    Name,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Subdistricts {
    Table,
    Id,
    DistrictId,
    Name,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Branches {
    Table,
    Id,
    EducationCenterId,
    Name,
    SubdistrictId,
    OtherDescription,
    Latitude,
    Longitude,
    Image,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Courses {
    Table,
    Id,
    BranchId,
    Name,
    Description,
    StartDate,
    EndDate,
    EnrollmentStartDate,
    EnrollmentEndDate,
    MaxStudents,
    CurrentStudents,
    Image,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum CourseTags {
    Table,
    Id,
    TagName,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum CourseTagMappings {
    Table,
    Id,
    CourseId,
    TagId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Email,
    PasswordHash,
    Name,
    WorkEducationCenterId,
    UserRoleId,
    ProfileImage,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Enrollments {
    Table,
    Id,
    UserId,
    CourseId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Contracts {
    Table,
    Id,
    UserId,
    CourseId,
    Content,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Payments {
    Table,
    Id,
    UserId,
    ContractId,
    Amount,
    Status,
    Method,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Reviews {
    Table,
    Id,
    UserId,
    BranchId,
    Rating,
    Description,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Announcements {
    Table,
    Id,
    EducationCenterId,
    Title,
    Content,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Notifications {
    Table,
    Id,
    UserId,
    Content,
    Seen,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum SearchHistories {
    Table,
    Id,
    UserId,
    Query,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Faqs {
    Table,
    Id,
    Question,
    Answer,
    CreatedAt,
    UpdatedAt,
}
