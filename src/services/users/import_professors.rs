//! 教授导入服务

use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::io::Cursor;
use tracing::error;

use super::UserService;
use crate::config::AppConfig;
use crate::models::users::requests::{NewProfessor, expected_role_matches};
use crate::models::users::responses::{ImportRowError, ImportSummary};
use crate::models::{ApiResponse, ErrorCode, users::entities::UserRole};
use crate::services::{ImportParseError, read_file_from_multipart};
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_password_simple, validate_username};

/// 导入行数据
#[derive(Debug, Clone)]
struct ProfessorRow {
    row_num: usize,
    username: String,
    password: String,
    name: String,
    address: String,
    user_type: String,
}

/// 导入教授
pub async fn import_professors(
    service: &UserService,
    mut payload: Multipart,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let (file_bytes, _file_name) = match read_file_from_multipart(&mut payload).await {
        Ok(result) => result,
        Err(e) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::FileUploadFailed,
                format!("文件读取失败: {e}"),
            )));
        }
    };

    let rows = match parse_csv(&file_bytes) {
        Ok(rows) => rows,
        Err(e) => {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(e.error_code(), e.message())));
        }
    };

    if rows.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ImportFileDataInvalid,
            "文件中没有数据行",
        )));
    }

    let max_rows = AppConfig::get().upload.max_rows;
    if rows.len() > max_rows {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ImportFileDataInvalid,
            format!("单次导入最多支持 {max_rows} 行"),
        )));
    }

    let mut errors: Vec<ImportRowError> = Vec::new();
    let mut failed = 0;
    let mut valid_rows: Vec<ProfessorRow> = Vec::new();

    for row in &rows {
        let mut row_errors = validate_row(row);
        if row_errors.is_empty() {
            valid_rows.push(row.clone());
        } else {
            failed += 1;
            errors.append(&mut row_errors);
        }
    }

    let mut to_insert: Vec<NewProfessor> = Vec::new();

    for row in valid_rows {
        let password = row.password.clone();
        let hashed = match tokio::task::spawn_blocking(move || hash_password(&password)).await {
            Ok(Ok(hash)) => hash,
            Ok(Err(e)) => {
                failed += 1;
                errors.push(ImportRowError {
                    row: row.row_num,
                    field: "password".to_string(),
                    message: format!("密码哈希失败: {e}"),
                });
                continue;
            }
            Err(e) => {
                failed += 1;
                errors.push(ImportRowError {
                    row: row.row_num,
                    field: "password".to_string(),
                    message: format!("密码处理失败: {e}"),
                });
                continue;
            }
        };

        to_insert.push(NewProfessor {
            username: row.username,
            password_hash: hashed,
            name: row.name,
            address: (!row.address.is_empty()).then_some(row.address),
        });
    }

    let attempted = to_insert.len();
    let success = match storage.insert_professors(to_insert).await {
        Ok(inserted) => inserted as usize,
        Err(e) => {
            error!("批量插入教授失败: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("导入失败: {e}"),
                )),
            );
        }
    };
    let skipped = attempted - success;

    let response = ImportSummary {
        total: rows.len(),
        success,
        skipped,
        failed,
        errors,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(response, "导入完成")))
}

fn parse_csv(data: &[u8]) -> Result<Vec<ProfessorRow>, ImportParseError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(Cursor::new(data));

    let headers = rdr
        .headers()
        .map_err(|e| ImportParseError::ParseFailed(format!("读取表头失败: {e}")))?;
    let header_map: std::collections::HashMap<_, _> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| (h.trim().to_lowercase(), i))
        .collect();

    for col in ["username", "password", "name", "type"] {
        if !header_map.contains_key(col) {
            return Err(ImportParseError::MissingColumn(col.to_string()));
        }
    }
    let idx = |name: &str| *header_map.get(name).expect("checked above");
    let address_idx = header_map.get("address").copied();

    let mut rows = Vec::new();

    for (row_num, result) in rdr.records().enumerate() {
        let record = result.map_err(|e| {
            ImportParseError::ParseFailed(format!("第 {} 行解析失败: {e}", row_num + 2))
        })?;

        let get = |i: usize| record.get(i).unwrap_or("").trim().to_string();

        rows.push(ProfessorRow {
            row_num: row_num + 2,
            username: get(idx("username")),
            password: get(idx("password")),
            name: get(idx("name")),
            address: address_idx.map(get).unwrap_or_default(),
            user_type: get(idx("type")),
        });
    }

    Ok(rows)
}

fn validate_row(row: &ProfessorRow) -> Vec<ImportRowError> {
    let mut errors = Vec::new();
    let mut push = |field: &str, message: String| {
        errors.push(ImportRowError {
            row: row.row_num,
            field: field.to_string(),
            message,
        });
    };

    if let Err(msg) = validate_username(&row.username) {
        push("username", msg.to_string());
    }

    if let Err(msg) = validate_password_simple(&row.password) {
        push("password", msg);
    }

    if row.name.is_empty() {
        push("name", "姓名不能为空".to_string());
    }

    if !expected_role_matches(&row.user_type, UserRole::Professor) {
        push(
            "type",
            format!("类型必须为 professor，实际为: {}", row.user_type),
        );
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "username,password,name,address,type\n";

    fn row(line: &str) -> ProfessorRow {
        let csv = format!("{HEADER}{line}\n");
        parse_csv(csv.as_bytes()).unwrap().remove(0)
    }

    #[test]
    fn test_parse_csv() {
        let csv = format!(
            "{HEADER}prof_smith,SecurePass123,Dr. Smith,1 Campus Rd,professor\n\
             prof_jones,SecurePass456,Dr. Jones,,professor\n"
        );
        let rows = parse_csv(csv.as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].username, "prof_smith");
        assert!(rows[1].address.is_empty());
    }

    #[test]
    fn test_validate_row_rejects_wrong_type() {
        let r = row("prof_smith,SecurePass123,Dr. Smith,,student");
        let errors = validate_row(&r);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "type");
    }

    #[test]
    fn test_validate_row_accepts_valid() {
        let r = row("prof_smith,SecurePass123,Dr. Smith,1 Campus Rd,Professor");
        assert!(validate_row(&r).is_empty());
    }
}
