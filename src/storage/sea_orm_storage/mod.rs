//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod activity;
mod attendance;
mod courses;
mod grades;
mod lms;
mod notifications;
mod predictions;
mod quizzes;
mod students;
mod submissions;
mod teachers;

use crate::config::AppConfig;
use crate::errors::{PortalError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| PortalError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("Storage ready, database: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| PortalError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| PortalError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| PortalError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(PortalError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
use crate::models::{
    activity::{entities::ActivityLog, requests::CreateActivityRequest},
    attendance::entities::{AttendanceRecord, DailyAttendance},
    courses::entities::{Assignment, Course, Material},
    forecast::entities::{MLPrediction, NewPrediction},
    grades::entities::{CreditRequirement, GradeRecord},
    notifications::entities::Notification,
    quizzes::entities::{NewQuizAttempt, Quiz, QuizAttempt, QuizQuestion},
    students::{entities::Student, requests::CreateStudentRequest},
    submissions::{entities::Submission, requests::GradeUpdate},
    teachers::{
        entities::Teacher,
        requests::{CreateAssignmentRequest, CreateMaterialRequest},
        responses::PendingSubmissionItem,
    },
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 学生模块
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student> {
        self.create_student_impl(student).await
    }

    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>> {
        self.get_student_by_id_impl(id).await
    }

    async fn get_student_by_reg_no(&self, reg_no: &str) -> Result<Option<Student>> {
        self.get_student_by_reg_no_impl(reg_no).await
    }

    // 教师模块
    async fn get_teacher_by_id(&self, id: i64) -> Result<Option<Teacher>> {
        self.get_teacher_by_id_impl(id).await
    }

    async fn get_teacher_by_staff_id(&self, staff_id: &str) -> Result<Option<Teacher>> {
        self.get_teacher_by_staff_id_impl(staff_id).await
    }

    // 课程模块
    async fn get_course_by_code(&self, course_code: &str) -> Result<Option<Course>> {
        self.get_course_by_code_impl(course_code).await
    }

    async fn list_enrolled_courses(&self, student_id: i64) -> Result<Vec<Course>> {
        self.list_enrolled_courses_impl(student_id).await
    }

    async fn is_enrolled(&self, student_id: i64, course_code: &str) -> Result<bool> {
        self.is_enrolled_impl(student_id, course_code).await
    }

    async fn list_teacher_courses(&self, teacher_id: i64) -> Result<Vec<Course>> {
        self.list_teacher_courses_impl(teacher_id).await
    }

    async fn teaches_course(&self, teacher_id: i64, course_code: &str) -> Result<bool> {
        self.teaches_course_impl(teacher_id, course_code).await
    }

    // 出勤模块
    async fn list_attendance(&self, student_id: i64) -> Result<Vec<AttendanceRecord>> {
        self.list_attendance_impl(student_id).await
    }

    async fn list_daily_attendance(
        &self,
        student_id: i64,
        course_code: &str,
    ) -> Result<Vec<DailyAttendance>> {
        self.list_daily_attendance_impl(student_id, course_code)
            .await
    }

    // 成绩模块
    async fn list_grades(&self, student_id: i64) -> Result<Vec<GradeRecord>> {
        self.list_grades_impl(student_id).await
    }

    async fn list_credit_requirements(&self, student_id: i64) -> Result<Vec<CreditRequirement>> {
        self.list_credit_requirements_impl(student_id).await
    }

    // 课程资料与作业模块
    async fn list_materials(&self, course_code: &str) -> Result<Vec<Material>> {
        self.list_materials_impl(course_code).await
    }

    async fn create_material(
        &self,
        course_code: &str,
        req: CreateMaterialRequest,
    ) -> Result<Material> {
        self.create_material_impl(course_code, req).await
    }

    async fn list_assignments(&self, course_code: &str) -> Result<Vec<Assignment>> {
        self.list_assignments_impl(course_code).await
    }

    async fn get_assignment_by_id(&self, id: i64) -> Result<Option<Assignment>> {
        self.get_assignment_by_id_impl(id).await
    }

    async fn create_assignment(
        &self,
        course_code: &str,
        req: CreateAssignmentRequest,
    ) -> Result<Assignment> {
        self.create_assignment_impl(course_code, req).await
    }

    // 提交模块
    async fn create_submission(
        &self,
        assignment_id: i64,
        student_id: i64,
        file_url: &str,
    ) -> Result<Submission> {
        self.create_submission_impl(assignment_id, student_id, file_url)
            .await
    }

    async fn get_submission_by_id(&self, id: i64) -> Result<Option<Submission>> {
        self.get_submission_by_id_impl(id).await
    }

    async fn list_student_submissions(&self, student_id: i64) -> Result<Vec<Submission>> {
        self.list_student_submissions_impl(student_id).await
    }

    async fn list_pending_submissions(
        &self,
        teacher_id: i64,
    ) -> Result<Vec<PendingSubmissionItem>> {
        self.list_pending_submissions_impl(teacher_id).await
    }

    async fn grade_submission(&self, id: i64, update: GradeUpdate) -> Result<Option<Submission>> {
        self.grade_submission_impl(id, update).await
    }

    // 测验模块
    async fn list_quizzes(&self, course_code: &str) -> Result<Vec<Quiz>> {
        self.list_quizzes_impl(course_code).await
    }

    async fn get_quiz_by_id(&self, id: i64) -> Result<Option<Quiz>> {
        self.get_quiz_by_id_impl(id).await
    }

    async fn list_quiz_questions(&self, quiz_id: i64) -> Result<Vec<QuizQuestion>> {
        self.list_quiz_questions_impl(quiz_id).await
    }

    async fn create_quiz_attempt(&self, attempt: NewQuizAttempt) -> Result<QuizAttempt> {
        self.create_quiz_attempt_impl(attempt).await
    }

    async fn list_quiz_attempts(&self, student_id: i64) -> Result<Vec<QuizAttempt>> {
        self.list_quiz_attempts_impl(student_id).await
    }

    // 学习时长模块
    async fn create_activity_log(
        &self,
        student_id: i64,
        req: CreateActivityRequest,
    ) -> Result<ActivityLog> {
        self.create_activity_log_impl(student_id, req).await
    }

    async fn total_activity_seconds(&self, student_id: i64) -> Result<i64> {
        self.total_activity_seconds_impl(student_id).await
    }

    // 预测模块
    async fn create_prediction(&self, prediction: NewPrediction) -> Result<MLPrediction> {
        self.create_prediction_impl(prediction).await
    }

    async fn get_latest_prediction(&self, student_id: i64) -> Result<Option<MLPrediction>> {
        self.get_latest_prediction_impl(student_id).await
    }

    // 公告模块
    async fn list_notifications(&self, limit: u64) -> Result<Vec<Notification>> {
        self.list_notifications_impl(limit).await
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::entity::{
        daily_attendance, enrollments, grades, submissions, teachers, teaching_assignments,
    };
    use crate::models::forecast::entities::{
        ForecastScores, NewPrediction, PerformanceTrend, RiskLevel,
    };
    use crate::models::students::{entities::Student, requests::CreateStudentRequest};
    use crate::models::submissions::{entities::SubmissionStatus, requests::GradeUpdate};
    use crate::models::teachers::requests::CreateAssignmentRequest;
    use crate::services::grades::summary::cgpa;
    use sea_orm::{ActiveModelTrait, Set};

    /// 内存 SQLite，已执行全部迁移
    pub(crate) async fn memory_storage() -> SeaOrmStorage {
        let mut opt = ConnectOptions::new("sqlite::memory:");
        opt.max_connections(1).min_connections(1).sqlx_logging(false);
        let db = Database::connect(opt).await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        SeaOrmStorage { db }
    }

    pub(crate) async fn seed_student(storage: &SeaOrmStorage, reg_no: &str) -> Student {
        storage
            .create_student_impl(CreateStudentRequest {
                reg_no: reg_no.to_string(),
                name: format!("Student {reg_no}"),
                email: format!("{reg_no}@campus.test"),
                password_hash: "hash".to_string(),
                degree: Some("B.Tech CSE".to_string()),
                batch: Some("2024-2028".to_string()),
                section: Some("A".to_string()),
                cgpa: 0.0,
                earned_credits: 0,
                arrears: 0,
            })
            .await
            .unwrap()
    }

    pub(crate) async fn enroll(storage: &SeaOrmStorage, student_id: i64, course_code: &str) {
        enrollments::ActiveModel {
            student_id: Set(student_id),
            course_code: Set(course_code.to_string()),
            enrolled_at: Set(0),
            ..Default::default()
        }
        .insert(&storage.db)
        .await
        .unwrap();
    }

    async fn seed_teacher(storage: &SeaOrmStorage, staff_id: &str, courses: &[&str]) -> i64 {
        let teacher = teachers::ActiveModel {
            staff_id: Set(staff_id.to_string()),
            password_hash: Set("hash".to_string()),
            name: Set(format!("Teacher {staff_id}")),
            email: Set(format!("{staff_id}@campus.test")),
            department: Set(None),
            designation: Set(None),
            created_at: Set(0),
            updated_at: Set(0),
            ..Default::default()
        }
        .insert(&storage.db)
        .await
        .unwrap();

        for code in courses {
            teaching_assignments::ActiveModel {
                teacher_id: Set(teacher.id),
                course_code: Set(code.to_string()),
                ..Default::default()
            }
            .insert(&storage.db)
            .await
            .unwrap();
        }
        teacher.id
    }

    async fn seed_assignment(storage: &SeaOrmStorage, course_code: &str, title: &str) -> i64 {
        storage
            .create_assignment_impl(
                course_code,
                CreateAssignmentRequest {
                    title: title.to_string(),
                    description: None,
                    max_marks: 100,
                    due_date: None,
                },
            )
            .await
            .unwrap()
            .id
    }

    async fn seed_submission(
        storage: &SeaOrmStorage,
        assignment_id: i64,
        student_id: i64,
        submitted_at: i64,
    ) -> i64 {
        submissions::ActiveModel {
            assignment_id: Set(assignment_id),
            student_id: Set(student_id),
            file_url: Set(format!("https://files.campus.test/{assignment_id}/{student_id}.pdf")),
            status: Set(SubmissionStatus::PENDING.to_string()),
            submitted_at: Set(submitted_at),
            ..Default::default()
        }
        .insert(&storage.db)
        .await
        .unwrap()
        .id
    }

    fn prediction(student_id: i64, predicted_gpa: f64) -> NewPrediction {
        NewPrediction {
            student_id,
            predicted_gpa,
            risk_level: RiskLevel::Low,
            performance_trend: PerformanceTrend::Stable,
            confidence_score: 0.8,
            risk_factors: vec!["attendance".to_string()],
            recommendation: "Keep going".to_string(),
            scores: ForecastScores {
                success_probability: 80,
                risk_index: 20,
                improvement_potential: 40,
            },
        }
    }

    #[test]
    fn test_build_database_url() {
        assert_eq!(
            SeaOrmStorage::build_database_url("portal.db").unwrap(),
            "sqlite://portal.db?mode=rwc"
        );
        assert_eq!(
            SeaOrmStorage::build_database_url("sqlite://data/portal.db").unwrap(),
            "sqlite://data/portal.db"
        );
        assert_eq!(
            SeaOrmStorage::build_database_url("postgres://u:p@localhost/portal").unwrap(),
            "postgres://u:p@localhost/portal"
        );
        assert!(SeaOrmStorage::build_database_url("ftp://nope").is_err());
    }

    #[tokio::test]
    async fn test_daily_attendance_newest_first() {
        let storage = memory_storage().await;
        let student = seed_student(&storage, "9924008001").await;

        let days = [
            ("2024-01-05", "P1"),
            ("2024-03-01", "P2"),
            ("2024-02-10", "P1"),
            ("2024-03-01", "P1"),
        ];
        for (date, slot) in days {
            daily_attendance::ActiveModel {
                student_id: Set(student.id),
                course_code: Set("CS101".to_string()),
                date: Set(date.to_string()),
                slot: Set(slot.to_string()),
                status: Set("Present".to_string()),
                ..Default::default()
            }
            .insert(&storage.db)
            .await
            .unwrap();
        }

        let rows = storage
            .list_daily_attendance_impl(student.id, "CS101")
            .await
            .unwrap();
        let order: Vec<(&str, &str)> = rows
            .iter()
            .map(|r| (r.date.as_str(), r.slot.as_str()))
            .collect();
        assert_eq!(
            order,
            vec![
                ("2024-03-01", "P1"),
                ("2024-03-01", "P2"),
                ("2024-02-10", "P1"),
                ("2024-01-05", "P1"),
            ]
        );
        assert!(storage
            .list_daily_attendance_impl(student.id, "MA102")
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_pending_queue_and_grading() {
        let storage = memory_storage().await;
        let alice = seed_student(&storage, "9924008001").await;
        let bob = seed_student(&storage, "9924008002").await;
        let teacher_id = seed_teacher(&storage, "T001", &["CS101"]).await;
        seed_teacher(&storage, "T002", &["MA102"]).await;

        let lab = seed_assignment(&storage, "CS101", "Lab 1").await;
        let other = seed_assignment(&storage, "MA102", "Sheet 1").await;

        let late = seed_submission(&storage, lab, alice.id, 2_000).await;
        let early = seed_submission(&storage, lab, bob.id, 1_000).await;
        seed_submission(&storage, other, alice.id, 500).await;

        let queue = storage.list_pending_submissions_impl(teacher_id).await.unwrap();
        let ids: Vec<i64> = queue.iter().map(|item| item.submission.id).collect();
        assert_eq!(ids, vec![early, late]);
        assert_eq!(queue[0].student_name, "Student 9924008002");
        assert_eq!(queue[0].student_reg_no, "9924008002");
        assert_eq!(queue[0].assignment.title, "Lab 1");

        let graded = storage
            .grade_submission_impl(
                early,
                GradeUpdate {
                    marks_obtained: 85,
                    feedback: Some("Good work".to_string()),
                    graded_by: teacher_id,
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(graded.status, SubmissionStatus::Graded);
        assert_eq!(graded.marks_obtained, Some(85));
        assert_eq!(graded.feedback.as_deref(), Some("Good work"));
        assert_eq!(graded.graded_by, Some(teacher_id));
        assert!(graded.graded_at.is_some());

        let queue = storage.list_pending_submissions_impl(teacher_id).await.unwrap();
        assert_eq!(queue.len(), 1);
        assert_eq!(queue[0].submission.id, late);

        storage
            .grade_submission_impl(
                late,
                GradeUpdate {
                    marks_obtained: 70,
                    feedback: None,
                    graded_by: teacher_id,
                },
            )
            .await
            .unwrap();
        assert!(storage
            .list_pending_submissions_impl(teacher_id)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_grade_missing_submission() {
        let storage = memory_storage().await;
        let teacher_id = seed_teacher(&storage, "T001", &["CS101"]).await;

        let result = storage
            .grade_submission_impl(
                404,
                GradeUpdate {
                    marks_obtained: 50,
                    feedback: None,
                    graded_by: teacher_id,
                },
            )
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_latest_prediction() {
        let storage = memory_storage().await;
        let student = seed_student(&storage, "9924008001").await;

        assert!(storage
            .get_latest_prediction_impl(student.id)
            .await
            .unwrap()
            .is_none());

        storage.create_prediction_impl(prediction(student.id, 7.2)).await.unwrap();
        let second = storage
            .create_prediction_impl(prediction(student.id, 8.1))
            .await
            .unwrap();

        let latest = storage
            .get_latest_prediction_impl(student.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(latest.id, second.id);
        assert_eq!(latest.predicted_gpa, 8.1);
        assert_eq!(latest.risk_factors, vec!["attendance".to_string()]);
    }

    #[tokio::test]
    async fn test_grades_by_semester() {
        let storage = memory_storage().await;
        let student = seed_student(&storage, "9924008001").await;

        let rows = [(2, "CS201", 4.0, 9.0), (1, "CS101", 3.0, 8.0)];
        for (semester, code, credits, points) in rows {
            grades::ActiveModel {
                student_id: Set(student.id),
                semester: Set(semester),
                course_code: Set(code.to_string()),
                course_name: Set(format!("Course {code}")),
                credits: Set(credits),
                grade_points: Set(points),
                grade: Set("A".to_string()),
                category: Set("Core".to_string()),
                exam_month_year: Set("NOV 2024".to_string()),
                ..Default::default()
            }
            .insert(&storage.db)
            .await
            .unwrap();
        }

        let rows = storage.list_grades_impl(student.id).await.unwrap();
        let semesters: Vec<i32> = rows.iter().map(|r| r.semester).collect();
        assert_eq!(semesters, vec![1, 2]);
        assert_eq!(cgpa(&rows), 8.57);
    }
}
