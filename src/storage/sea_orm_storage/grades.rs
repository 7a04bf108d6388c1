use super::SeaOrmStorage;
use crate::entity::credit_requirements::{
    Column as RequirementColumn, Entity as CreditRequirements,
};
use crate::entity::grades::{Column as GradeColumn, Entity as Grades};
use crate::errors::{PortalError, Result};
use crate::models::grades::entities::{CreditRequirement, GradeRecord};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

impl SeaOrmStorage {
    /// 学生成绩（按学期升序）
    pub async fn list_grades_impl(&self, student_id: i64) -> Result<Vec<GradeRecord>> {
        let rows = Grades::find()
            .filter(GradeColumn::StudentId.eq(student_id))
            .order_by_asc(GradeColumn::Semester)
            .order_by_asc(GradeColumn::CourseCode)
            .all(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询成绩失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_grade()).collect())
    }

    /// 学分要求
    pub async fn list_credit_requirements_impl(
        &self,
        student_id: i64,
    ) -> Result<Vec<CreditRequirement>> {
        let rows = CreditRequirements::find()
            .filter(RequirementColumn::StudentId.eq(student_id))
            .order_by_asc(RequirementColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询学分要求失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_requirement()).collect())
    }
}
