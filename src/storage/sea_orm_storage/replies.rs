use super::SeaOrmStorage;
use crate::entity::replies::{ActiveModel, Column, Entity as Replies};
use crate::errors::{FeedbackSysError, Result};
use crate::models::replies::{entities::Reply, requests::SubmitReplyRequest};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建回复
    pub async fn create_reply_impl(&self, reply: SubmitReplyRequest) -> Result<Reply> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            student_id: Set(reply.student_id),
            form_name: Set(reply.form_name),
            question: Set(reply.question),
            answer: Set(reply.answer),
            reply: Set(reply.reply),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| FeedbackSysError::database_operation(format!("创建回复失败: {e}")))?;

        Ok(result.into_reply())
    }

    /// 某学生收到的回复列表
    pub async fn list_replies_by_student_impl(&self, student_id: i64) -> Result<Vec<Reply>> {
        let results = Replies::find()
            .filter(Column::StudentId.eq(student_id))
            .order_by_desc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| FeedbackSysError::database_operation(format!("查询回复失败: {e}")))?;

        Ok(results.into_iter().map(|m| m.into_reply()).collect())
    }
}
