//! 课程资料与作业

use super::SeaOrmStorage;
use crate::entity::assignments::{
    ActiveModel as AssignmentActiveModel, Column as AssignmentColumn, Entity as Assignments,
};
use crate::entity::materials::{
    ActiveModel as MaterialActiveModel, Column as MaterialColumn, Entity as Materials,
};
use crate::errors::{PortalError, Result};
use crate::models::courses::entities::{Assignment, Material};
use crate::models::teachers::requests::{CreateAssignmentRequest, CreateMaterialRequest};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 课程资料（按周次升序）
    pub async fn list_materials_impl(&self, course_code: &str) -> Result<Vec<Material>> {
        let rows = Materials::find()
            .filter(MaterialColumn::CourseCode.eq(course_code))
            .order_by_asc(MaterialColumn::WeekNumber)
            .order_by_asc(MaterialColumn::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询课程资料失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_material()).collect())
    }

    /// 发布课程资料
    pub async fn create_material_impl(
        &self,
        course_code: &str,
        req: CreateMaterialRequest,
    ) -> Result<Material> {
        let model = MaterialActiveModel {
            course_code: Set(course_code.to_string()),
            title: Set(req.title),
            material_type: Set(req.material_type.to_string()),
            url: Set(req.url),
            week_number: Set(req.week_number),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("创建课程资料失败: {e}")))?;

        Ok(result.into_material())
    }

    /// 课程作业
    pub async fn list_assignments_impl(&self, course_code: &str) -> Result<Vec<Assignment>> {
        let rows = Assignments::find()
            .filter(AssignmentColumn::CourseCode.eq(course_code))
            .order_by_asc(AssignmentColumn::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询作业列表失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_assignment()).collect())
    }

    /// 通过 ID 获取作业
    pub async fn get_assignment_by_id_impl(&self, id: i64) -> Result<Option<Assignment>> {
        let result = Assignments::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询作业失败: {e}")))?;

        Ok(result.map(|m| m.into_assignment()))
    }

    /// 发布作业
    pub async fn create_assignment_impl(
        &self,
        course_code: &str,
        req: CreateAssignmentRequest,
    ) -> Result<Assignment> {
        let model = AssignmentActiveModel {
            course_code: Set(course_code.to_string()),
            title: Set(req.title),
            description: Set(req.description),
            max_marks: Set(req.max_marks),
            due_date: Set(req.due_date.map(|d| d.timestamp())),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("创建作业失败: {e}")))?;

        Ok(result.into_assignment())
    }
}
