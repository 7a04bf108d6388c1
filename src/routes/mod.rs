pub mod activity;
pub mod attendance;
pub mod auth;
pub mod forecast;
pub mod grades;
pub mod lms;
pub mod notifications;
pub mod quizzes;
pub mod students;
pub mod teacher;

pub use activity::configure_activity_routes;
pub use attendance::configure_attendance_routes;
pub use auth::configure_auth_routes;
pub use forecast::configure_forecast_routes;
pub use grades::configure_grades_routes;
pub use lms::configure_lms_routes;
pub use notifications::configure_notifications_routes;
pub use quizzes::configure_quizzes_routes;
pub use students::configure_students_routes;
pub use teacher::configure_teacher_routes;
