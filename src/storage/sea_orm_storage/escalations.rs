use super::SeaOrmStorage;
use crate::entity::admin_contacts::{ActiveModel, Column, Entity as AdminContacts};
use crate::errors::{FeedbackSysError, Result};
use crate::models::escalations::{
    entities::{AdminContact, EscalationStatus},
    requests::ContactAdminRequest,
};
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建升级请求，初始状态 pending
    pub async fn create_contact_impl(
        &self,
        professor_id: i64,
        contact: ContactAdminRequest,
    ) -> Result<AdminContact> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            professor_id: Set(professor_id),
            student_id: Set(contact.student_id),
            form_name: Set(contact.form_name),
            question: Set(contact.question),
            answer: Set(contact.answer),
            reason: Set(contact.reason),
            status: Set(EscalationStatus::Pending.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| FeedbackSysError::database_operation(format!("创建升级请求失败: {e}")))?;

        Ok(result.into_contact())
    }

    /// 升级请求列表，可按状态筛选
    pub async fn list_contacts_impl(
        &self,
        status: Option<EscalationStatus>,
    ) -> Result<Vec<AdminContact>> {
        let mut select = AdminContacts::find();

        if let Some(status) = status {
            select = select.filter(Column::Status.eq(status.to_string()));
        }

        let results = select
            .order_by_desc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| FeedbackSysError::database_operation(format!("查询升级请求失败: {e}")))?;

        Ok(results.into_iter().map(|m| m.into_contact()).collect())
    }

    /// 通过 ID 获取升级请求
    pub async fn get_contact_by_id_impl(&self, id: i64) -> Result<Option<AdminContact>> {
        let result = AdminContacts::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| FeedbackSysError::database_operation(format!("查询升级请求失败: {e}")))?;

        Ok(result.map(|m| m.into_contact()))
    }

    /// 裁决升级请求
    ///
    /// 条件更新：仅当当前状态为 pending 时迁移。状态不符或不存在时
    /// 不写入并返回 None，由调用方区分两种情况。
    pub async fn resolve_contact_impl(
        &self,
        id: i64,
        status: EscalationStatus,
    ) -> Result<Option<AdminContact>> {
        let now = chrono::Utc::now().timestamp();

        let result = AdminContacts::update_many()
            .col_expr(Column::Status, Expr::value(status.to_string()))
            .col_expr(Column::UpdatedAt, Expr::value(now))
            .filter(Column::Id.eq(id))
            .filter(Column::Status.eq(EscalationStatus::Pending.to_string()))
            .exec(&self.db)
            .await
            .map_err(|e| FeedbackSysError::database_operation(format!("更新升级请求失败: {e}")))?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.get_contact_by_id_impl(id).await
    }
}
