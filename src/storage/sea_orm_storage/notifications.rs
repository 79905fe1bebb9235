use super::SeaOrmStorage;
use crate::entity::notifications::{ActiveModel, Column, Entity as Notifications};
use crate::errors::{FeedbackSysError, Result};
use crate::models::notifications::entities::Notification;
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 表单发布的通知扇出
    ///
    /// 单次批量插入，(student_id, form_name) 已存在的行由唯一索引跳过，
    /// 返回实际插入数。
    pub async fn notify_students_impl(
        &self,
        form_name: &str,
        student_ids: &[i64],
    ) -> Result<u64> {
        if student_ids.is_empty() {
            return Ok(0);
        }

        let now = chrono::Utc::now().timestamp();
        let models: Vec<ActiveModel> = student_ids
            .iter()
            .map(|student_id| ActiveModel {
                student_id: Set(*student_id),
                form_name: Set(form_name.to_string()),
                accepted: Set(false),
                created_at: Set(now),
                ..Default::default()
            })
            .collect();

        let mut inserted = 0;
        for chunk in models.chunks(500) {
            inserted += Notifications::insert_many(chunk.to_vec())
                .on_conflict(
                    OnConflict::columns([Column::StudentId, Column::FormName])
                        .do_nothing()
                        .to_owned(),
                )
                .exec_without_returning(&self.db)
                .await
                .map_err(|e| {
                    FeedbackSysError::database_operation(format!("通知扇出失败: {e}"))
                })?;
        }

        Ok(inserted)
    }

    /// 某学生的通知列表
    pub async fn list_notifications_by_student_impl(
        &self,
        student_id: i64,
    ) -> Result<Vec<Notification>> {
        let results = Notifications::find()
            .filter(Column::StudentId.eq(student_id))
            .order_by_desc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| FeedbackSysError::database_operation(format!("查询通知失败: {e}")))?;

        Ok(results.into_iter().map(|m| m.into_notification()).collect())
    }

    /// 通过 ID 获取通知
    pub async fn get_notification_by_id_impl(&self, id: i64) -> Result<Option<Notification>> {
        let result = Notifications::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| FeedbackSysError::database_operation(format!("查询通知失败: {e}")))?;

        Ok(result.map(|m| m.into_notification()))
    }

    /// 置已读标记，幂等
    pub async fn accept_notification_impl(&self, id: i64) -> Result<Option<Notification>> {
        Notifications::update_many()
            .col_expr(Column::Accepted, Expr::value(true))
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| FeedbackSysError::database_operation(format!("更新通知失败: {e}")))?;

        self.get_notification_by_id_impl(id).await
    }
}
