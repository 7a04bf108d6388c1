use std::sync::Arc;

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

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 学生方法
    // 创建学生
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student>;
    // 通过ID获取学生
    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>>;
    // 通过学号获取学生
    async fn get_student_by_reg_no(&self, reg_no: &str) -> Result<Option<Student>>;

    /// 教师方法
    async fn get_teacher_by_id(&self, id: i64) -> Result<Option<Teacher>>;
    async fn get_teacher_by_staff_id(&self, staff_id: &str) -> Result<Option<Teacher>>;

    /// 课程方法
    async fn get_course_by_code(&self, course_code: &str) -> Result<Option<Course>>;
    // 学生已选课程
    async fn list_enrolled_courses(&self, student_id: i64) -> Result<Vec<Course>>;
    async fn is_enrolled(&self, student_id: i64, course_code: &str) -> Result<bool>;
    // 教师所授课程
    async fn list_teacher_courses(&self, teacher_id: i64) -> Result<Vec<Course>>;
    async fn teaches_course(&self, teacher_id: i64, course_code: &str) -> Result<bool>;

    /// 出勤方法
    async fn list_attendance(&self, student_id: i64) -> Result<Vec<AttendanceRecord>>;
    // 按日期倒序
    async fn list_daily_attendance(
        &self,
        student_id: i64,
        course_code: &str,
    ) -> Result<Vec<DailyAttendance>>;

    /// 成绩方法
    // 按学期升序
    async fn list_grades(&self, student_id: i64) -> Result<Vec<GradeRecord>>;
    async fn list_credit_requirements(&self, student_id: i64) -> Result<Vec<CreditRequirement>>;

    /// 课程资料与作业方法
    async fn list_materials(&self, course_code: &str) -> Result<Vec<Material>>;
    async fn create_material(
        &self,
        course_code: &str,
        req: CreateMaterialRequest,
    ) -> Result<Material>;
    async fn list_assignments(&self, course_code: &str) -> Result<Vec<Assignment>>;
    async fn get_assignment_by_id(&self, id: i64) -> Result<Option<Assignment>>;
    async fn create_assignment(
        &self,
        course_code: &str,
        req: CreateAssignmentRequest,
    ) -> Result<Assignment>;

    /// 作业提交方法
    async fn create_submission(
        &self,
        assignment_id: i64,
        student_id: i64,
        file_url: &str,
    ) -> Result<Submission>;
    async fn get_submission_by_id(&self, id: i64) -> Result<Option<Submission>>;
    async fn list_student_submissions(&self, student_id: i64) -> Result<Vec<Submission>>;
    // 教师所授课程的待评分提交，按提交时间升序
    async fn list_pending_submissions(&self, teacher_id: i64)
    -> Result<Vec<PendingSubmissionItem>>;
    // 单次更新，后写覆盖
    async fn grade_submission(&self, id: i64, update: GradeUpdate) -> Result<Option<Submission>>;

    /// 测验方法
    async fn list_quizzes(&self, course_code: &str) -> Result<Vec<Quiz>>;
    async fn get_quiz_by_id(&self, id: i64) -> Result<Option<Quiz>>;
    // 按题目顺序
    async fn list_quiz_questions(&self, quiz_id: i64) -> Result<Vec<QuizQuestion>>;
    async fn create_quiz_attempt(&self, attempt: NewQuizAttempt) -> Result<QuizAttempt>;
    async fn list_quiz_attempts(&self, student_id: i64) -> Result<Vec<QuizAttempt>>;

    /// 学习时长方法
    async fn create_activity_log(
        &self,
        student_id: i64,
        req: CreateActivityRequest,
    ) -> Result<ActivityLog>;
    async fn total_activity_seconds(&self, student_id: i64) -> Result<i64>;

    /// 预测快照方法
    async fn create_prediction(&self, prediction: NewPrediction) -> Result<MLPrediction>;
    async fn get_latest_prediction(&self, student_id: i64) -> Result<Option<MLPrediction>>;

    /// 公告方法
    // 最新在前
    async fn list_notifications(&self, limit: u64) -> Result<Vec<Notification>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
