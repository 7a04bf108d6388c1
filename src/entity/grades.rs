//! 成绩实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "grades")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub semester: i32,
    pub course_code: String,
    pub course_name: String,
    pub credits: f64,
    pub grade_points: f64,
    pub grade: String,
    pub category: String,
    pub exam_month_year: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_grade(self) -> crate::models::grades::entities::GradeRecord {
        crate::models::grades::entities::GradeRecord {
            id: self.id,
            student_id: self.student_id,
            semester: self.semester,
            course_code: self.course_code,
            course_name: self.course_name,
            credits: self.credits,
            grade_points: self.grade_points,
            grade: self.grade,
            category: self.category,
            exam_month_year: self.exam_month_year,
        }
    }
}
