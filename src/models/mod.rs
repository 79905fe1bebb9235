pub mod auth;
pub mod common;
pub mod escalations;
pub mod forms;
pub mod notifications;
pub mod replies;
pub mod responses;
pub mod subjects;
pub mod users;

pub use common::pagination::{PaginatedResponse, PaginationInfo, PaginationQuery};
pub use common::response::ApiResponse;

/// 程序启动时间（注入 app data，用于运行状态上报）
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

/// 业务错误码
///
/// 0 表示成功；1xxx 通用错误；2xxx 认证授权；3xxx 导入；
/// 4xxx 表单；5xxx 反馈提交；6xxx 回复与升级请求。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    BadRequest = 1000,
    NotFound = 1001,
    InternalServerError = 1002,
    RateLimitExceeded = 1003,

    Unauthorized = 2000,
    AuthFailed = 2001,
    PermissionDenied = 2002,
    UserNotFound = 2003,

    FileUploadFailed = 3000,
    ImportFileMissingColumn = 3001,
    ImportFileParseFailed = 3002,
    ImportFileDataInvalid = 3003,
    SubjectNotFound = 3004,

    FormNameInvalid = 4000,
    FormAlreadyExists = 4001,
    FormNotFound = 4002,
    FormWindowInvalid = 4003,
    FormNotActive = 4004,
    QuestionInvalid = 4005,

    AlreadySubmitted = 5000,
    AnswerCountMismatch = 5001,
    ResponseNotFound = 5002,
    NotificationNotFound = 5003,

    EscalationNotFound = 6000,
    EscalationStatusInvalid = 6001,
}
