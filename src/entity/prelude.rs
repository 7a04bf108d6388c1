//! 预导入模块，方便使用

pub use super::activity_logs::{
    ActiveModel as ActivityLogActiveModel, Entity as ActivityLogs, Model as ActivityLogModel,
};
pub use super::assignments::{
    ActiveModel as AssignmentActiveModel, Entity as Assignments, Model as AssignmentModel,
};
pub use super::attendance::{
    ActiveModel as AttendanceActiveModel, Entity as Attendance, Model as AttendanceModel,
};
pub use super::courses::{ActiveModel as CourseActiveModel, Entity as Courses, Model as CourseModel};
pub use super::credit_requirements::{
    ActiveModel as CreditRequirementActiveModel, Entity as CreditRequirements,
    Model as CreditRequirementModel,
};
pub use super::daily_attendance::{
    ActiveModel as DailyAttendanceActiveModel, Entity as DailyAttendance,
    Model as DailyAttendanceModel,
};
pub use super::enrollments::{
    ActiveModel as EnrollmentActiveModel, Entity as Enrollments, Model as EnrollmentModel,
};
pub use super::grades::{ActiveModel as GradeActiveModel, Entity as Grades, Model as GradeModel};
pub use super::materials::{
    ActiveModel as MaterialActiveModel, Entity as Materials, Model as MaterialModel,
};
pub use super::ml_predictions::{
    ActiveModel as PredictionActiveModel, Entity as MlPredictions, Model as PredictionModel,
};
pub use super::notifications::{
    ActiveModel as NotificationActiveModel, Entity as Notifications, Model as NotificationModel,
};
pub use super::quiz_attempts::{
    ActiveModel as QuizAttemptActiveModel, Entity as QuizAttempts, Model as QuizAttemptModel,
};
pub use super::quiz_questions::{
    ActiveModel as QuizQuestionActiveModel, Entity as QuizQuestions, Model as QuizQuestionModel,
};
pub use super::quizzes::{ActiveModel as QuizActiveModel, Entity as Quizzes, Model as QuizModel};
pub use super::students::{
    ActiveModel as StudentActiveModel, Entity as Students, Model as StudentModel,
};
pub use super::submissions::{
    ActiveModel as SubmissionActiveModel, Entity as Submissions, Model as SubmissionModel,
};
pub use super::teachers::{
    ActiveModel as TeacherActiveModel, Entity as Teachers, Model as TeacherModel,
};
pub use super::teaching_assignments::{
    ActiveModel as TeachingAssignmentActiveModel, Entity as TeachingAssignments,
    Model as TeachingAssignmentModel,
};
