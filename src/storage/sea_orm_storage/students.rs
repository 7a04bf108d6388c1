use super::SeaOrmStorage;
use crate::entity::students::{ActiveModel, Column, Entity as Students};
use crate::errors::{PortalError, Result};
use crate::models::students::{entities::Student, requests::CreateStudentRequest};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};

impl SeaOrmStorage {
    /// 创建学生
    pub async fn create_student_impl(&self, req: CreateStudentRequest) -> Result<Student> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            reg_no: Set(req.reg_no),
            password_hash: Set(req.password_hash),
            name: Set(req.name),
            email: Set(req.email),
            degree: Set(req.degree),
            batch: Set(req.batch),
            section: Set(req.section),
            cgpa: Set(req.cgpa),
            earned_credits: Set(req.earned_credits),
            arrears: Set(req.arrears),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("创建学生失败: {e}")))?;

        Ok(result.into_student())
    }

    /// 通过 ID 获取学生
    pub async fn get_student_by_id_impl(&self, id: i64) -> Result<Option<Student>> {
        let result = Students::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询学生失败: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 通过学号获取学生
    pub async fn get_student_by_reg_no_impl(&self, reg_no: &str) -> Result<Option<Student>> {
        let result = Students::find()
            .filter(Column::RegNo.eq(reg_no))
            .one(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询学生失败: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }
}
