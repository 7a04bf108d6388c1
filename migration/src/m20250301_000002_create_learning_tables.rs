use sea_orm_migration::prelude::*;

use crate::m20250301_000001_create_academic_tables::{Students, Teachers};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ==================== 课程资料 ====================
        manager
            .create_table(
                Table::create()
                    .table(Materials::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Materials::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Materials::CourseCode).string().not_null())
                    .col(ColumnDef::new(Materials::Title).string().not_null())
                    .col(ColumnDef::new(Materials::MaterialType).string().not_null())
                    .col(ColumnDef::new(Materials::Url).string().not_null())
                    .col(
                        ColumnDef::new(Materials::WeekNumber)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(ColumnDef::new(Materials::CreatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // ==================== 作业 ====================
        manager
            .create_table(
                Table::create()
                    .table(Assignments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Assignments::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Assignments::CourseCode).string().not_null())
                    .col(ColumnDef::new(Assignments::Title).string().not_null())
                    .col(ColumnDef::new(Assignments::Description).text().null())
                    .col(ColumnDef::new(Assignments::MaxMarks).integer().not_null())
                    .col(ColumnDef::new(Assignments::DueDate).big_integer().null())
                    .col(
                        ColumnDef::new(Assignments::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // ==================== 作业提交 ====================
        manager
            .create_table(
                Table::create()
                    .table(Submissions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Submissions::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Submissions::AssignmentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Submissions::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Submissions::FileUrl).string().not_null())
                    .col(ColumnDef::new(Submissions::Status).string().not_null())
                    .col(ColumnDef::new(Submissions::MarksObtained).integer().null())
                    .col(ColumnDef::new(Submissions::Feedback).text().null())
                    .col(ColumnDef::new(Submissions::GradedBy).big_integer().null())
                    .col(
                        ColumnDef::new(Submissions::SubmittedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Submissions::GradedAt).big_integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Submissions::Table, Submissions::AssignmentId)
                            .to(Assignments::Table, Assignments::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Submissions::Table, Submissions::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Submissions::Table, Submissions::GradedBy)
                            .to(Teachers::Table, Teachers::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // ==================== 测验 ====================
        manager
            .create_table(
                Table::create()
                    .table(Quizzes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Quizzes::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Quizzes::CourseCode).string().not_null())
                    .col(ColumnDef::new(Quizzes::Title).string().not_null())
                    .col(
                        ColumnDef::new(Quizzes::DurationMinutes)
                            .integer()
                            .not_null()
                            .default(10),
                    )
                    .col(ColumnDef::new(Quizzes::CreatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(QuizQuestions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(QuizQuestions::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(QuizQuestions::QuizId).big_integer().not_null())
                    .col(ColumnDef::new(QuizQuestions::Position).integer().not_null())
                    .col(ColumnDef::new(QuizQuestions::Question).text().not_null())
                    .col(ColumnDef::new(QuizQuestions::Options).text().not_null())
                    .col(
                        ColumnDef::new(QuizQuestions::CorrectOption)
                            .integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(QuizQuestions::Table, QuizQuestions::QuizId)
                            .to(Quizzes::Table, Quizzes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(QuizAttempts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(QuizAttempts::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(QuizAttempts::QuizId).big_integer().not_null())
                    .col(
                        ColumnDef::new(QuizAttempts::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(QuizAttempts::Score).integer().not_null())
                    .col(
                        ColumnDef::new(QuizAttempts::CorrectAnswers)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(QuizAttempts::TotalQuestions)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(QuizAttempts::AutoSubmitted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(QuizAttempts::AttemptedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(QuizAttempts::Table, QuizAttempts::QuizId)
                            .to(Quizzes::Table, Quizzes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(QuizAttempts::Table, QuizAttempts::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // ==================== 学习时长 ====================
        manager
            .create_table(
                Table::create()
                    .table(ActivityLogs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ActivityLogs::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ActivityLogs::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ActivityLogs::CourseCode).string().null())
                    .col(
                        ColumnDef::new(ActivityLogs::ActivityType)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ActivityLogs::DurationSeconds)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ActivityLogs::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ActivityLogs::Table, ActivityLogs::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // ==================== 预测快照 ====================
        manager
            .create_table(
                Table::create()
                    .table(MlPredictions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MlPredictions::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(MlPredictions::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(MlPredictions::PredictedGpa)
                            .double()
                            .not_null(),
                    )
                    .col(ColumnDef::new(MlPredictions::RiskLevel).string().not_null())
                    .col(
                        ColumnDef::new(MlPredictions::PerformanceTrend)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(MlPredictions::ConfidenceScore)
                            .double()
                            .not_null(),
                    )
                    .col(ColumnDef::new(MlPredictions::RiskFactors).text().not_null())
                    .col(
                        ColumnDef::new(MlPredictions::Recommendation)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(MlPredictions::SuccessProbability)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(MlPredictions::RiskIndex).integer().not_null())
                    .col(
                        ColumnDef::new(MlPredictions::ImprovementPotential)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(MlPredictions::PredictionDate)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(MlPredictions::Table, MlPredictions::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // ==================== 公告 ====================
        manager
            .create_table(
                Table::create()
                    .table(Notifications::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Notifications::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Notifications::Content).text().not_null())
                    .col(
                        ColumnDef::new(Notifications::NotificationType)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Notifications::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // ==================== 索引 ====================
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_materials_course_week")
                    .table(Materials::Table)
                    .col(Materials::CourseCode)
                    .col(Materials::WeekNumber)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_submissions_status_submitted_at")
                    .table(Submissions::Table)
                    .col(Submissions::Status)
                    .col(Submissions::SubmittedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_quiz_attempts_student_id")
                    .table(QuizAttempts::Table)
                    .col(QuizAttempts::StudentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_activity_logs_student_id")
                    .table(ActivityLogs::Table)
                    .col(ActivityLogs::StudentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_ml_predictions_student_date")
                    .table(MlPredictions::Table)
                    .col(MlPredictions::StudentId)
                    .col(MlPredictions::PredictionDate)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Notifications::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(MlPredictions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ActivityLogs::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(QuizAttempts::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(QuizQuestions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Quizzes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Submissions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Assignments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Materials::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Materials {
    #[sea_orm(iden = "materials")]
    Table,
    Id,
    CourseCode,
    Title,
    MaterialType,
    Url,
    WeekNumber,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Assignments {
    #[sea_orm(iden = "assignments")]
    Table,
    Id,
    CourseCode,
    Title,
    Description,
    MaxMarks,
    DueDate,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Submissions {
    #[sea_orm(iden = "submissions")]
    Table,
    Id,
    AssignmentId,
    StudentId,
    FileUrl,
    Status,
    MarksObtained,
    Feedback,
    GradedBy,
    SubmittedAt,
    GradedAt,
}

#[derive(DeriveIden)]
enum Quizzes {
    #[sea_orm(iden = "quizzes")]
    Table,
    Id,
    CourseCode,
    Title,
    DurationMinutes,
    CreatedAt,
}

#[derive(DeriveIden)]
enum QuizQuestions {
    #[sea_orm(iden = "quiz_questions")]
    Table,
    Id,
    QuizId,
    Position,
    Question,
    Options,
    CorrectOption,
}

#[derive(DeriveIden)]
enum QuizAttempts {
    #[sea_orm(iden = "quiz_attempts")]
    Table,
    Id,
    QuizId,
    StudentId,
    Score,
    CorrectAnswers,
    TotalQuestions,
    AutoSubmitted,
    AttemptedAt,
}

#[derive(DeriveIden)]
enum ActivityLogs {
    #[sea_orm(iden = "activity_logs")]
    Table,
    Id,
    StudentId,
    CourseCode,
    ActivityType,
    DurationSeconds,
    CreatedAt,
}

#[derive(DeriveIden)]
enum MlPredictions {
    #[sea_orm(iden = "ml_predictions")]
    Table,
    Id,
    StudentId,
    PredictedGpa,
    RiskLevel,
    PerformanceTrend,
    ConfidenceScore,
    RiskFactors,
    Recommendation,
    SuccessProbability,
    RiskIndex,
    ImprovementPotential,
    PredictionDate,
}

#[derive(DeriveIden)]
enum Notifications {
    #[sea_orm(iden = "notifications")]
    Table,
    Id,
    Content,
    NotificationType,
    CreatedAt,
}
