//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod escalations;
mod forms;
mod notifications;
mod replies;
mod responses;
mod subjects;
mod users;

use crate::config::AppConfig;
use crate::errors::{FeedbackSysError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| FeedbackSysError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// 内存 SQLite 实例，仅供测试。单连接池保证所有操作落在同一个库上
    #[cfg(test)]
    pub(crate) async fn new_in_memory() -> Result<Self> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str("sqlite::memory:")
            .map_err(|e| FeedbackSysError::database_config(format!("SQLite URL 解析失败: {e}")))?;

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .connect_with(opt)
            .await
            .map_err(|e| FeedbackSysError::database_connection(format!("SQLite 连接失败: {e}")))?;

        let db = SqlxSqliteConnector::from_sqlx_sqlite_pool(pool);

        Migrator::up(&db, None)
            .await
            .map_err(|e| FeedbackSysError::database_operation(format!("数据库迁移失败: {e}")))?;

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| FeedbackSysError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| FeedbackSysError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| FeedbackSysError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(FeedbackSysError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
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
    subjects::{entities::Subject, requests::NewSubject},
    users::{
        entities::{Admin, Professor, Student},
        requests::{NewAdmin, NewProfessor, NewStudent},
    },
};
use crate::storage::Storage;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_admin(&self, admin: NewAdmin) -> Result<Admin> {
        self.create_admin_impl(admin).await
    }

    async fn count_admins(&self) -> Result<u64> {
        self.count_admins_impl().await
    }

    async fn get_admin_by_username(&self, username: &str) -> Result<Option<Admin>> {
        self.get_admin_by_username_impl(username).await
    }

    async fn get_professor_by_username(&self, username: &str) -> Result<Option<Professor>> {
        self.get_professor_by_username_impl(username).await
    }

    async fn get_student_by_username(&self, username: &str) -> Result<Option<Student>> {
        self.get_student_by_username_impl(username).await
    }

    async fn get_admin_by_id(&self, id: i64) -> Result<Option<Admin>> {
        self.get_admin_by_id_impl(id).await
    }

    async fn get_professor_by_id(&self, id: i64) -> Result<Option<Professor>> {
        self.get_professor_by_id_impl(id).await
    }

    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>> {
        self.get_student_by_id_impl(id).await
    }

    async fn insert_students(&self, students: Vec<NewStudent>) -> Result<u64> {
        self.insert_students_impl(students).await
    }

    async fn insert_professors(&self, professors: Vec<NewProfessor>) -> Result<u64> {
        self.insert_professors_impl(professors).await
    }

    async fn list_student_ids(&self) -> Result<Vec<i64>> {
        self.list_student_ids_impl().await
    }

    // 科目模块
    async fn insert_subjects(&self, subjects: Vec<NewSubject>) -> Result<u64> {
        self.insert_subjects_impl(subjects).await
    }

    async fn get_subject_by_code(&self, code: &str) -> Result<Option<Subject>> {
        self.get_subject_by_code_impl(code).await
    }

    async fn resync_student_subjects(&self) -> Result<u64> {
        self.resync_student_subjects_impl().await
    }

    async fn list_subjects_for_student(&self, student_id: i64) -> Result<Vec<Subject>> {
        self.list_subjects_for_student_impl(student_id).await
    }

    async fn assign_professor_subjects(
        &self,
        professor_id: i64,
        pairs: Vec<(i64, String)>,
    ) -> Result<u64> {
        self.assign_professor_subjects_impl(professor_id, pairs)
            .await
    }

    // 表单模块
    async fn create_form(
        &self,
        name: &str,
        questions: &[Question],
        start_time: DateTime<Utc>,
        deadline: DateTime<Utc>,
    ) -> Result<FeedbackForm> {
        self.create_form_impl(name, questions, start_time, deadline)
            .await
    }

    async fn get_form_by_name(&self, name: &str) -> Result<Option<FeedbackForm>> {
        self.get_form_by_name_impl(name).await
    }

    async fn list_forms(
        &self,
        query: FormListQuery,
    ) -> Result<(Vec<FeedbackForm>, PaginationInfo)> {
        self.list_forms_impl(query).await
    }

    async fn update_form(
        &self,
        name: &str,
        questions: Option<&[Question]>,
        start_time: Option<DateTime<Utc>>,
        deadline: Option<DateTime<Utc>>,
    ) -> Result<Option<FeedbackForm>> {
        self.update_form_impl(name, questions, start_time, deadline)
            .await
    }

    async fn delete_form(&self, name: &str) -> Result<bool> {
        self.delete_form_impl(name).await
    }

    // 反馈提交模块
    async fn submit_response(
        &self,
        form_name: &str,
        student_id: i64,
        answers: &[String],
    ) -> Result<Option<FeedbackResponse>> {
        self.submit_response_impl(form_name, student_id, answers)
            .await
    }

    async fn get_response(
        &self,
        form_name: &str,
        student_id: i64,
    ) -> Result<Option<FeedbackResponse>> {
        self.get_response_impl(form_name, student_id).await
    }

    async fn list_responses_by_form(&self, form_name: &str) -> Result<Vec<FeedbackResponse>> {
        self.list_responses_by_form_impl(form_name).await
    }

    // 通知模块
    async fn notify_students(&self, form_name: &str, student_ids: &[i64]) -> Result<u64> {
        self.notify_students_impl(form_name, student_ids).await
    }

    async fn list_notifications_by_student(&self, student_id: i64) -> Result<Vec<Notification>> {
        self.list_notifications_by_student_impl(student_id).await
    }

    async fn get_notification_by_id(&self, id: i64) -> Result<Option<Notification>> {
        self.get_notification_by_id_impl(id).await
    }

    async fn accept_notification(&self, id: i64) -> Result<Option<Notification>> {
        self.accept_notification_impl(id).await
    }

    // 回复模块
    async fn create_reply(&self, reply: SubmitReplyRequest) -> Result<Reply> {
        self.create_reply_impl(reply).await
    }

    async fn list_replies_by_student(&self, student_id: i64) -> Result<Vec<Reply>> {
        self.list_replies_by_student_impl(student_id).await
    }

    // 升级请求模块
    async fn create_contact(
        &self,
        professor_id: i64,
        contact: ContactAdminRequest,
    ) -> Result<AdminContact> {
        self.create_contact_impl(professor_id, contact).await
    }

    async fn list_contacts(
        &self,
        status: Option<EscalationStatus>,
    ) -> Result<Vec<AdminContact>> {
        self.list_contacts_impl(status).await
    }

    async fn get_contact_by_id(&self, id: i64) -> Result<Option<AdminContact>> {
        self.get_contact_by_id_impl(id).await
    }

    async fn resolve_contact(
        &self,
        id: i64,
        status: EscalationStatus,
    ) -> Result<Option<AdminContact>> {
        self.resolve_contact_impl(id, status).await
    }
}
