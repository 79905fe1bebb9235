pub mod auth;
pub mod escalations;
pub mod forms;
pub mod notifications;
pub mod replies;
pub mod responses;
pub mod subjects;
pub mod users;

pub use auth::AuthService;
pub use escalations::EscalationService;
pub use forms::FormService;
pub use notifications::NotificationService;
pub use replies::ReplyService;
pub use responses::ResponseService;
pub use subjects::SubjectService;
pub use users::UserService;

use actix_multipart::Multipart;
use futures_util::StreamExt;

use crate::config::AppConfig;
use crate::models::ErrorCode;

/// CSV 导入解析错误
#[derive(Debug)]
pub(crate) enum ImportParseError {
    MissingColumn(String),
    ParseFailed(String),
}

impl ImportParseError {
    pub(crate) fn error_code(&self) -> ErrorCode {
        match self {
            Self::MissingColumn(_) => ErrorCode::ImportFileMissingColumn,
            Self::ParseFailed(_) => ErrorCode::ImportFileParseFailed,
        }
    }

    pub(crate) fn message(&self) -> String {
        match self {
            Self::MissingColumn(col) => format!("缺少必需列: {col}"),
            Self::ParseFailed(msg) => msg.clone(),
        }
    }
}

/// 从 multipart 请求中读取 file 字段内容
///
/// CSV 导入端点共用。超出配置的 upload.max_size 直接拒绝。
pub(crate) async fn read_file_from_multipart(
    payload: &mut Multipart,
) -> Result<(Vec<u8>, String), String> {
    let max_size = AppConfig::get().upload.max_size;
    let mut file_bytes = Vec::new();
    let mut file_name = String::new();

    while let Some(item) = payload.next().await {
        let mut field = item.map_err(|e| format!("读取字段失败: {e}"))?;

        if field.name().map(|n| n == "file").unwrap_or(false) {
            // 获取文件名
            if let Some(content_disposition) = field.content_disposition() {
                file_name = content_disposition
                    .get_filename()
                    .unwrap_or("upload.csv")
                    .to_string();
            }

            // 读取内容
            while let Some(chunk) = field.next().await {
                let data = chunk.map_err(|e| format!("读取数据失败: {e}"))?;
                if file_bytes.len() + data.len() > max_size {
                    return Err(format!("文件超出大小限制 ({max_size} 字节)"));
                }
                file_bytes.extend_from_slice(&data);
            }
        }
    }

    if file_bytes.is_empty() {
        return Err("未找到文件字段".to_string());
    }

    Ok((file_bytes, file_name))
}
