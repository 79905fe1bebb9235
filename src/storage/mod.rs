use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::models::{
    PaginationInfo,
    escalations::{
        entities::{AdminContact, EscalationStatus},
        requests::ContactAdminRequest,
    },
    forms::{
        entities::{FeedbackForm, Question},
        requests::FormListQuery,
    },
    notifications::entities::Notification,
    replies::{entities::Reply, requests::SubmitReplyRequest},
    responses::entities::FeedbackResponse,
    subjects::{
        entities::Subject,
        requests::NewSubject,
    },
    users::{
        entities::{Admin, Professor, Student},
        requests::{NewAdmin, NewProfessor, NewStudent},
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建管理员（启动播种）
    async fn create_admin(&self, admin: NewAdmin) -> Result<Admin>;
    // 统计管理员数量
    async fn count_admins(&self) -> Result<u64>;
    // 按用户名查找，登录按 admin > professor > student 的顺序逐表尝试
    async fn get_admin_by_username(&self, username: &str) -> Result<Option<Admin>>;
    async fn get_professor_by_username(&self, username: &str) -> Result<Option<Professor>>;
    async fn get_student_by_username(&self, username: &str) -> Result<Option<Student>>;
    // 按 ID 查找
    async fn get_admin_by_id(&self, id: i64) -> Result<Option<Admin>>;
    async fn get_professor_by_id(&self, id: i64) -> Result<Option<Professor>>;
    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>>;
    // 批量插入，重复用户名跳过，返回实际插入数
    async fn insert_students(&self, students: Vec<NewStudent>) -> Result<u64>;
    async fn insert_professors(&self, professors: Vec<NewProfessor>) -> Result<u64>;
    // 全体学生 ID（通知扇出用）
    async fn list_student_ids(&self) -> Result<Vec<i64>>;

    /// 科目管理方法
    // 批量插入，重复科目代码跳过，返回实际插入数
    async fn insert_subjects(&self, subjects: Vec<NewSubject>) -> Result<u64>;
    async fn get_subject_by_code(&self, code: &str) -> Result<Option<Subject>>;
    // 按课程+学期全量重建学生-科目关联，返回关联数
    async fn resync_student_subjects(&self) -> Result<u64>;
    // 学生的科目列表
    async fn list_subjects_for_student(&self, student_id: i64) -> Result<Vec<Subject>>;
    // 教授分配，重复分配跳过，返回实际插入数
    async fn assign_professor_subjects(
        &self,
        professor_id: i64,
        pairs: Vec<(i64, String)>,
    ) -> Result<u64>;

    /// 反馈表单方法
    async fn create_form(
        &self,
        name: &str,
        questions: &[Question],
        start_time: DateTime<Utc>,
        deadline: DateTime<Utc>,
    ) -> Result<FeedbackForm>;
    async fn get_form_by_name(&self, name: &str) -> Result<Option<FeedbackForm>>;
    async fn list_forms(
        &self,
        query: FormListQuery,
    ) -> Result<(Vec<FeedbackForm>, PaginationInfo)>;
    async fn update_form(
        &self,
        name: &str,
        questions: Option<&[Question]>,
        start_time: Option<DateTime<Utc>>,
        deadline: Option<DateTime<Utc>>,
    ) -> Result<Option<FeedbackForm>>;
    // 删除表单。回答与通知按表单名引用，不随之删除
    async fn delete_form(&self, name: &str) -> Result<bool>;

    /// 反馈提交方法
    // 插入回答。同一 (form_name, student_id) 已存在时返回 None
    async fn submit_response(
        &self,
        form_name: &str,
        student_id: i64,
        answers: &[String],
    ) -> Result<Option<FeedbackResponse>>;
    async fn get_response(
        &self,
        form_name: &str,
        student_id: i64,
    ) -> Result<Option<FeedbackResponse>>;
    async fn list_responses_by_form(&self, form_name: &str) -> Result<Vec<FeedbackResponse>>;

    /// 通知方法
    // 单次批量插入扇出，已存在的 (student_id, form_name) 跳过，返回实际插入数
    async fn notify_students(&self, form_name: &str, student_ids: &[i64]) -> Result<u64>;
    async fn list_notifications_by_student(&self, student_id: i64) -> Result<Vec<Notification>>;
    async fn get_notification_by_id(&self, id: i64) -> Result<Option<Notification>>;
    // 置已读标记，幂等
    async fn accept_notification(&self, id: i64) -> Result<Option<Notification>>;

    /// 回复方法
    async fn create_reply(&self, reply: SubmitReplyRequest) -> Result<Reply>;
    async fn list_replies_by_student(&self, student_id: i64) -> Result<Vec<Reply>>;

    /// 升级请求方法
    async fn create_contact(
        &self,
        professor_id: i64,
        contact: ContactAdminRequest,
    ) -> Result<AdminContact>;
    async fn list_contacts(
        &self,
        status: Option<EscalationStatus>,
    ) -> Result<Vec<AdminContact>>;
    async fn get_contact_by_id(&self, id: i64) -> Result<Option<AdminContact>>;
    // 仅允许从 pending 迁移。状态不符时返回 None
    async fn resolve_contact(
        &self,
        id: i64,
        status: EscalationStatus,
    ) -> Result<Option<AdminContact>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
