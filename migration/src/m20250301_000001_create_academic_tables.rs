use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建学生表
        manager
            .create_table(
                Table::create()
                    .table(Students::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Students::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Students::RegNo)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Students::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Students::Name).string().not_null())
                    .col(ColumnDef::new(Students::Email).string().not_null())
                    .col(ColumnDef::new(Students::Aadhar).string().null())
                    .col(ColumnDef::new(Students::Degree).string().null())
                    .col(ColumnDef::new(Students::Batch).string().null())
                    .col(ColumnDef::new(Students::Section).string().null())
                    .col(ColumnDef::new(Students::FacultyAdvisor).string().null())
                    .col(ColumnDef::new(Students::Dob).string().null())
                    .col(ColumnDef::new(Students::Gender).string().null())
                    .col(ColumnDef::new(Students::Nationality).string().null())
                    .col(ColumnDef::new(Students::Religion).string().null())
                    .col(ColumnDef::new(Students::Community).string().null())
                    .col(ColumnDef::new(Students::Caste).string().null())
                    .col(ColumnDef::new(Students::Address).text().null())
                    .col(
                        ColumnDef::new(Students::Cgpa)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(Students::EarnedCredits)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Students::Arrears)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Students::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Students::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建教师表
        manager
            .create_table(
                Table::create()
                    .table(Teachers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Teachers::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Teachers::StaffId)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Teachers::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Teachers::Name).string().not_null())
                    .col(ColumnDef::new(Teachers::Email).string().not_null())
                    .col(ColumnDef::new(Teachers::Department).string().null())
                    .col(ColumnDef::new(Teachers::Designation).string().null())
                    .col(ColumnDef::new(Teachers::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Teachers::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建课程表
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Courses::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Courses::CourseCode)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Courses::CourseName).string().not_null())
                    .col(ColumnDef::new(Courses::Credits).integer().not_null())
                    .col(ColumnDef::new(Courses::Semester).integer().null())
                    .col(ColumnDef::new(Courses::Description).text().null())
                    .to_owned(),
            )
            .await?;

        // 创建选课表
        manager
            .create_table(
                Table::create()
                    .table(Enrollments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Enrollments::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Enrollments::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Enrollments::CourseCode).string().not_null())
                    .col(
                        ColumnDef::new(Enrollments::EnrolledAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Enrollments::Table, Enrollments::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建授课安排表
        manager
            .create_table(
                Table::create()
                    .table(TeachingAssignments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TeachingAssignments::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(TeachingAssignments::TeacherId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TeachingAssignments::CourseCode)
                            .string()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(TeachingAssignments::Table, TeachingAssignments::TeacherId)
                            .to(Teachers::Table, Teachers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建出勤汇总表
        manager
            .create_table(
                Table::create()
                    .table(Attendance::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Attendance::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Attendance::StudentId).big_integer().not_null())
                    .col(ColumnDef::new(Attendance::CourseCode).string().not_null())
                    .col(ColumnDef::new(Attendance::CourseName).string().not_null())
                    .col(
                        ColumnDef::new(Attendance::Conducted)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Attendance::Attended)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Attendance::Onduty)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Attendance::MedicalLeave)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Attendance::RestrictedHoliday)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Attendance::ExtraHours)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Attendance::Percentage).double().null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Attendance::Table, Attendance::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建每日出勤表
        manager
            .create_table(
                Table::create()
                    .table(DailyAttendance::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DailyAttendance::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(DailyAttendance::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DailyAttendance::CourseCode)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(DailyAttendance::Date).string().not_null())
                    .col(ColumnDef::new(DailyAttendance::Slot).string().not_null())
                    .col(ColumnDef::new(DailyAttendance::Status).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(DailyAttendance::Table, DailyAttendance::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建成绩表
        manager
            .create_table(
                Table::create()
                    .table(Grades::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Grades::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Grades::StudentId).big_integer().not_null())
                    .col(ColumnDef::new(Grades::Semester).integer().not_null())
                    .col(ColumnDef::new(Grades::CourseCode).string().not_null())
                    .col(ColumnDef::new(Grades::CourseName).string().not_null())
                    .col(ColumnDef::new(Grades::Credits).double().not_null())
                    .col(ColumnDef::new(Grades::GradePoints).double().not_null())
                    .col(ColumnDef::new(Grades::Grade).string().not_null())
                    .col(ColumnDef::new(Grades::Category).string().not_null())
                    .col(ColumnDef::new(Grades::ExamMonthYear).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Grades::Table, Grades::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建学分要求表
        manager
            .create_table(
                Table::create()
                    .table(CreditRequirements::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CreditRequirements::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CreditRequirements::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CreditRequirements::Category)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CreditRequirements::MinCredits)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CreditRequirements::Studied)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CreditRequirements::Earned)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CreditRequirements::ToBeEarned)
                            .double()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CreditRequirements::Table, CreditRequirements::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_enrollments_student_course")
                    .table(Enrollments::Table)
                    .col(Enrollments::StudentId)
                    .col(Enrollments::CourseCode)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_teaching_assignments_teacher_course")
                    .table(TeachingAssignments::Table)
                    .col(TeachingAssignments::TeacherId)
                    .col(TeachingAssignments::CourseCode)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_attendance_student_id")
                    .table(Attendance::Table)
                    .col(Attendance::StudentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_daily_attendance_student_course")
                    .table(DailyAttendance::Table)
                    .col(DailyAttendance::StudentId)
                    .col(DailyAttendance::CourseCode)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_grades_student_id")
                    .table(Grades::Table)
                    .col(Grades::StudentId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 按照创建的相反顺序删除
        manager
            .drop_table(Table::drop().table(CreditRequirements::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Grades::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(DailyAttendance::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Attendance::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TeachingAssignments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Enrollments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Teachers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Students::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
pub(crate) enum Students {
    #[sea_orm(iden = "students")]
    Table,
    Id,
    RegNo,
    PasswordHash,
    Name,
    Email,
    Aadhar,
    Degree,
    Batch,
    Section,
    FacultyAdvisor,
    Dob,
    Gender,
    Nationality,
    Religion,
    Community,
    Caste,
    Address,
    Cgpa,
    EarnedCredits,
    Arrears,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub(crate) enum Teachers {
    #[sea_orm(iden = "teachers")]
    Table,
    Id,
    StaffId,
    PasswordHash,
    Name,
    Email,
    Department,
    Designation,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Courses {
    #[sea_orm(iden = "courses")]
    Table,
    Id,
    CourseCode,
    CourseName,
    Credits,
    Semester,
    Description,
}

#[derive(DeriveIden)]
enum Enrollments {
    #[sea_orm(iden = "enrollments")]
    Table,
    Id,
    StudentId,
    CourseCode,
    EnrolledAt,
}

#[derive(DeriveIden)]
enum TeachingAssignments {
    #[sea_orm(iden = "teaching_assignments")]
    Table,
    Id,
    TeacherId,
    CourseCode,
}

#[derive(DeriveIden)]
enum Attendance {
    #[sea_orm(iden = "attendance")]
    Table,
    Id,
    StudentId,
    CourseCode,
    CourseName,
    Conducted,
    Attended,
    Onduty,
    MedicalLeave,
    RestrictedHoliday,
    ExtraHours,
    Percentage,
}

#[derive(DeriveIden)]
enum DailyAttendance {
    #[sea_orm(iden = "daily_attendance")]
    Table,
    Id,
    StudentId,
    CourseCode,
    Date,
    Slot,
    Status,
}

#[derive(DeriveIden)]
enum Grades {
    #[sea_orm(iden = "grades")]
    Table,
    Id,
    StudentId,
    Semester,
    CourseCode,
    CourseName,
    Credits,
    GradePoints,
    Grade,
    Category,
    ExamMonthYear,
}

#[derive(DeriveIden)]
enum CreditRequirements {
    #[sea_orm(iden = "credit_requirements")]
    Table,
    Id,
    StudentId,
    Category,
    MinCredits,
    Studied,
    Earned,
    ToBeEarned,
}
