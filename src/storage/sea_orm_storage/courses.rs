//! 课程、选课与授课安排

use super::SeaOrmStorage;
use crate::entity::courses::{Column as CourseColumn, Entity as Courses};
use crate::entity::enrollments::{Column as EnrollmentColumn, Entity as Enrollments};
use crate::entity::teaching_assignments::{
    Column as TeachingColumn, Entity as TeachingAssignments,
};
use crate::errors::{PortalError, Result};
use crate::models::courses::entities::Course;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect};

impl SeaOrmStorage {
    /// 通过课程代码获取课程
    pub async fn get_course_by_code_impl(&self, course_code: &str) -> Result<Option<Course>> {
        let result = Courses::find()
            .filter(CourseColumn::CourseCode.eq(course_code))
            .one(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询课程失败: {e}")))?;

        Ok(result.map(|m| m.into_course()))
    }

    /// 按课程代码批量获取课程
    async fn list_courses_by_codes(&self, codes: Vec<String>) -> Result<Vec<Course>> {
        if codes.is_empty() {
            return Ok(Vec::new());
        }

        let courses = Courses::find()
            .filter(CourseColumn::CourseCode.is_in(codes))
            .order_by_asc(CourseColumn::CourseCode)
            .all(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询课程列表失败: {e}")))?;

        Ok(courses.into_iter().map(|m| m.into_course()).collect())
    }

    /// 学生已选课程
    pub async fn list_enrolled_courses_impl(&self, student_id: i64) -> Result<Vec<Course>> {
        let codes = Enrollments::find()
            .filter(EnrollmentColumn::StudentId.eq(student_id))
            .select_only()
            .column(EnrollmentColumn::CourseCode)
            .into_tuple::<String>()
            .all(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询选课记录失败: {e}")))?;

        self.list_courses_by_codes(codes).await
    }

    /// 是否已选该课程
    pub async fn is_enrolled_impl(&self, student_id: i64, course_code: &str) -> Result<bool> {
        let count = Enrollments::find()
            .filter(EnrollmentColumn::StudentId.eq(student_id))
            .filter(EnrollmentColumn::CourseCode.eq(course_code))
            .count(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询选课记录失败: {e}")))?;

        Ok(count > 0)
    }

    /// 教师所授课程代码
    pub(super) async fn list_teacher_course_codes(&self, teacher_id: i64) -> Result<Vec<String>> {
        TeachingAssignments::find()
            .filter(TeachingColumn::TeacherId.eq(teacher_id))
            .select_only()
            .column(TeachingColumn::CourseCode)
            .into_tuple::<String>()
            .all(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询授课安排失败: {e}")))
    }

    /// 教师所授课程
    pub async fn list_teacher_courses_impl(&self, teacher_id: i64) -> Result<Vec<Course>> {
        let codes = self.list_teacher_course_codes(teacher_id).await?;
        self.list_courses_by_codes(codes).await
    }

    /// 教师是否教授该课程
    pub async fn teaches_course_impl(&self, teacher_id: i64, course_code: &str) -> Result<bool> {
        let count = TeachingAssignments::find()
            .filter(TeachingColumn::TeacherId.eq(teacher_id))
            .filter(TeachingColumn::CourseCode.eq(course_code))
            .count(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询授课安排失败: {e}")))?;

        Ok(count > 0)
    }
}
