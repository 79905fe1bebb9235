use super::SeaOrmStorage;
use crate::entity::feedback_forms::{ActiveModel, Column, Entity as FeedbackForms};
use crate::errors::{FeedbackSysError, Result};
use crate::models::{
    PaginationInfo,
    forms::{
        entities::{FeedbackForm, Question},
        requests::FormListQuery,
    },
};
use crate::utils::escape_like_pattern;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建表单
    pub async fn create_form_impl(
        &self,
        name: &str,
        questions: &[Question],
        start_time: DateTime<Utc>,
        deadline: DateTime<Utc>,
    ) -> Result<FeedbackForm> {
        let now = chrono::Utc::now().timestamp();
        let questions_json = serde_json::to_string(questions)?;

        let model = ActiveModel {
            name: Set(name.to_string()),
            questions: Set(questions_json),
            start_time: Set(start_time.timestamp()),
            deadline: Set(deadline.timestamp()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| FeedbackSysError::database_operation(format!("创建表单失败: {e}")))?;

        Ok(result.into_form())
    }

    /// 通过名称获取表单
    pub async fn get_form_by_name_impl(&self, name: &str) -> Result<Option<FeedbackForm>> {
        let result = FeedbackForms::find()
            .filter(Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(|e| FeedbackSysError::database_operation(format!("查询表单失败: {e}")))?;

        Ok(result.map(|m| m.into_form()))
    }

    /// 分页列出表单
    pub async fn list_forms_impl(
        &self,
        query: FormListQuery,
    ) -> Result<(Vec<FeedbackForm>, PaginationInfo)> {
        let page = query.page.max(1) as u64;
        let size = query.size.clamp(1, 100) as u64;

        let mut select = FeedbackForms::find();

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(Column::Name.contains(&escaped));
        }

        select = select.order_by_desc(Column::CreatedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| FeedbackSysError::database_operation(format!("查询表单总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| FeedbackSysError::database_operation(format!("查询表单页数失败: {e}")))?;

        let forms = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| FeedbackSysError::database_operation(format!("查询表单列表失败: {e}")))?;

        Ok((
            forms.into_iter().map(|m| m.into_form()).collect(),
            PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        ))
    }

    /// 更新表单。名称不可变，仅问题与时间窗口可改
    pub async fn update_form_impl(
        &self,
        name: &str,
        questions: Option<&[Question]>,
        start_time: Option<DateTime<Utc>>,
        deadline: Option<DateTime<Utc>>,
    ) -> Result<Option<FeedbackForm>> {
        let existing = FeedbackForms::find()
            .filter(Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(|e| FeedbackSysError::database_operation(format!("查询表单失败: {e}")))?;

        let Some(existing) = existing else {
            return Ok(None);
        };

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(existing.id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(questions) = questions {
            model.questions = Set(serde_json::to_string(questions)?);
        }

        if let Some(start_time) = start_time {
            model.start_time = Set(start_time.timestamp());
        }

        if let Some(deadline) = deadline {
            model.deadline = Set(deadline.timestamp());
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| FeedbackSysError::database_operation(format!("更新表单失败: {e}")))?;

        self.get_form_by_name_impl(name).await
    }

    /// 删除表单。回答与通知按名称引用，不受影响
    pub async fn delete_form_impl(&self, name: &str) -> Result<bool> {
        let result = FeedbackForms::delete_many()
            .filter(Column::Name.eq(name))
            .exec(&self.db)
            .await
            .map_err(|e| FeedbackSysError::database_operation(format!("删除表单失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
