//! 作业提交与评分队列

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::assignments::{Column as AssignmentColumn, Entity as Assignments};
use crate::entity::students::{Column as StudentColumn, Entity as Students};
use crate::entity::submissions::{ActiveModel, Column, Entity as Submissions};
use crate::errors::{PortalError, Result};
use crate::models::submissions::{
    entities::{Submission, SubmissionStatus},
    requests::GradeUpdate,
};
use crate::models::teachers::responses::PendingSubmissionItem;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建提交，状态为待评分
    pub async fn create_submission_impl(
        &self,
        assignment_id: i64,
        student_id: i64,
        file_url: &str,
    ) -> Result<Submission> {
        let model = ActiveModel {
            assignment_id: Set(assignment_id),
            student_id: Set(student_id),
            file_url: Set(file_url.to_string()),
            status: Set(SubmissionStatus::Pending.to_string()),
            submitted_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("创建提交失败: {e}")))?;

        Ok(result.into_submission())
    }

    /// 通过 ID 获取提交
    pub async fn get_submission_by_id_impl(&self, id: i64) -> Result<Option<Submission>> {
        let result = Submissions::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询提交失败: {e}")))?;

        Ok(result.map(|m| m.into_submission()))
    }

    /// 学生自己的提交（最新在前）
    pub async fn list_student_submissions_impl(&self, student_id: i64) -> Result<Vec<Submission>> {
        let rows = Submissions::find()
            .filter(Column::StudentId.eq(student_id))
            .order_by_desc(Column::SubmittedAt)
            .all(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询提交列表失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_submission()).collect())
    }

    /// 教师待评分队列，按提交时间升序
    pub async fn list_pending_submissions_impl(
        &self,
        teacher_id: i64,
    ) -> Result<Vec<PendingSubmissionItem>> {
        let course_codes = self.list_teacher_course_codes(teacher_id).await?;
        if course_codes.is_empty() {
            return Ok(Vec::new());
        }

        // 1. 授课课程下的作业
        let assignments: HashMap<i64, _> = Assignments::find()
            .filter(AssignmentColumn::CourseCode.is_in(course_codes))
            .all(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询作业列表失败: {e}")))?
            .into_iter()
            .map(|m| (m.id, m.into_assignment()))
            .collect();

        if assignments.is_empty() {
            return Ok(Vec::new());
        }

        // 2. 待评分提交
        let assignment_ids: Vec<i64> = assignments.keys().copied().collect();
        let submissions = Submissions::find()
            .filter(Column::AssignmentId.is_in(assignment_ids))
            .filter(Column::Status.eq(SubmissionStatus::PENDING))
            .order_by_asc(Column::SubmittedAt)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询待评分提交失败: {e}")))?;

        if submissions.is_empty() {
            return Ok(Vec::new());
        }

        // 3. 提交者信息
        let student_ids: Vec<i64> = submissions.iter().map(|s| s.student_id).collect();
        let students: HashMap<i64, (String, String)> = Students::find()
            .filter(StudentColumn::Id.is_in(student_ids))
            .all(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询学生信息失败: {e}")))?
            .into_iter()
            .map(|s| (s.id, (s.name, s.reg_no)))
            .collect();

        let items = submissions
            .into_iter()
            .filter_map(|s| {
                let assignment = assignments.get(&s.assignment_id)?.clone();
                let (student_name, student_reg_no) = students
                    .get(&s.student_id)
                    .cloned()
                    .unwrap_or_else(|| ("Unknown".to_string(), String::new()));
                Some(PendingSubmissionItem {
                    submission: s.into_submission(),
                    student_name,
                    student_reg_no,
                    assignment,
                })
            })
            .collect();

        Ok(items)
    }

    /// 评分：单次更新，后写覆盖
    pub async fn grade_submission_impl(
        &self,
        id: i64,
        update: GradeUpdate,
    ) -> Result<Option<Submission>> {
        if self.get_submission_by_id_impl(id).await?.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            id: Set(id),
            status: Set(SubmissionStatus::Graded.to_string()),
            marks_obtained: Set(Some(update.marks_obtained)),
            feedback: Set(update.feedback),
            graded_by: Set(Some(update.graded_by)),
            graded_at: Set(Some(chrono::Utc::now().timestamp())),
            ..Default::default()
        };

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("更新评分失败: {e}")))?;

        Ok(Some(result.into_submission()))
    }
}
