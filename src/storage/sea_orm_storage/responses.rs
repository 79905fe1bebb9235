use super::SeaOrmStorage;
use crate::entity::feedback_responses::{ActiveModel, Column, Entity as FeedbackResponses};
use crate::errors::{FeedbackSysError, Result};
use crate::models::responses::entities::FeedbackResponse;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 插入回答
    ///
    /// 依赖 (form_name, student_id) 唯一索引做并发安全的重复判定：
    /// 冲突时不写入并返回 None。
    pub async fn submit_response_impl(
        &self,
        form_name: &str,
        student_id: i64,
        answers: &[String],
    ) -> Result<Option<FeedbackResponse>> {
        let now = chrono::Utc::now().timestamp();
        let answers_json = serde_json::to_string(answers)?;

        let model = ActiveModel {
            form_name: Set(form_name.to_string()),
            student_id: Set(student_id),
            answers: Set(answers_json),
            submitted_at: Set(now),
            ..Default::default()
        };

        let inserted = FeedbackResponses::insert_many([model])
            .on_conflict(
                OnConflict::columns([Column::FormName, Column::StudentId])
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| FeedbackSysError::database_operation(format!("写入回答失败: {e}")))?;

        if inserted == 0 {
            return Ok(None);
        }

        self.get_response_impl(form_name, student_id).await
    }

    /// 获取某学生对某表单的回答
    pub async fn get_response_impl(
        &self,
        form_name: &str,
        student_id: i64,
    ) -> Result<Option<FeedbackResponse>> {
        let result = FeedbackResponses::find()
            .filter(Column::FormName.eq(form_name))
            .filter(Column::StudentId.eq(student_id))
            .one(&self.db)
            .await
            .map_err(|e| FeedbackSysError::database_operation(format!("查询回答失败: {e}")))?;

        Ok(result.map(|m| m.into_response()))
    }

    /// 某表单的全部回答
    pub async fn list_responses_by_form_impl(
        &self,
        form_name: &str,
    ) -> Result<Vec<FeedbackResponse>> {
        let results = FeedbackResponses::find()
            .filter(Column::FormName.eq(form_name))
            .order_by_asc(Column::SubmittedAt)
            .all(&self.db)
            .await
            .map_err(|e| FeedbackSysError::database_operation(format!("查询回答列表失败: {e}")))?;

        Ok(results.into_iter().map(|m| m.into_response()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::SeaOrmStorage;
    use crate::models::forms::entities::{Question, QuestionType};

    async fn storage() -> SeaOrmStorage {
        SeaOrmStorage::new_in_memory()
            .await
            .expect("in-memory storage")
    }

    fn answers(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    // 同一 (表单, 学生) 的第二次提交被拒绝，已存回答保持首次提交的长度
    #[tokio::test]
    async fn test_second_submission_rejected_and_answers_unchanged() {
        let storage = storage().await;

        let first = storage
            .submit_response_impl("CS101_A", 7, &answers(&["A", "B"]))
            .await
            .unwrap();
        assert!(first.is_some());

        let second = storage
            .submit_response_impl("CS101_A", 7, &answers(&["C", "D"]))
            .await
            .unwrap();
        assert!(second.is_none());

        let stored = storage
            .get_response_impl("CS101_A", 7)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.answers.len(), 2);
        assert_eq!(stored.answers, answers(&["A", "B"]));
    }

    #[tokio::test]
    async fn test_other_students_unaffected_by_duplicate_guard() {
        let storage = storage().await;

        storage
            .submit_response_impl("CS101_A", 7, &answers(&["yes"]))
            .await
            .unwrap();
        let other = storage
            .submit_response_impl("CS101_A", 8, &answers(&["no"]))
            .await
            .unwrap();
        assert!(other.is_some());

        let all = storage.list_responses_by_form_impl("CS101_A").await.unwrap();
        assert_eq!(all.len(), 2);
    }

    // 删除表单不级联删除回答，聚合查询仍可取回
    #[tokio::test]
    async fn test_responses_survive_form_deletion() {
        let storage = storage().await;

        let now = chrono::Utc::now();
        let questions = vec![Question {
            question_type: QuestionType::YesNo,
            description: "Was the pace appropriate?".to_string(),
            options: vec![],
        }];
        storage
            .create_form_impl("CS101_B", &questions, now, now + chrono::Duration::hours(2))
            .await
            .unwrap();
        storage
            .submit_response_impl("CS101_B", 3, &answers(&["yes"]))
            .await
            .unwrap();

        assert!(storage.delete_form_impl("CS101_B").await.unwrap());
        assert!(storage.get_form_by_name_impl("CS101_B").await.unwrap().is_none());

        let remaining = storage.list_responses_by_form_impl("CS101_B").await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].student_id, 3);
    }
}
