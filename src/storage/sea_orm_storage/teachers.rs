use super::SeaOrmStorage;
use crate::entity::teachers::{Column, Entity as Teachers};
use crate::errors::{PortalError, Result};
use crate::models::teachers::entities::Teacher;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

impl SeaOrmStorage {
    /// 通过 ID 获取教师
    pub async fn get_teacher_by_id_impl(&self, id: i64) -> Result<Option<Teacher>> {
        let result = Teachers::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询教师失败: {e}")))?;

        Ok(result.map(|m| m.into_teacher()))
    }

    /// 通过工号获取教师
    pub async fn get_teacher_by_staff_id_impl(&self, staff_id: &str) -> Result<Option<Teacher>> {
        let result = Teachers::find()
            .filter(Column::StaffId.eq(staff_id))
            .one(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询教师失败: {e}")))?;

        Ok(result.map(|m| m.into_teacher()))
    }
}
