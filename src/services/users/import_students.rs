//! 学生导入服务

use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::io::Cursor;
use tracing::{error, info};

use super::UserService;
use crate::config::AppConfig;
use crate::models::users::requests::{NewStudent, expected_role_matches};
use crate::models::users::responses::{ImportRowError, ImportSummary};
use crate::models::{ApiResponse, ErrorCode, users::entities::UserRole};
use crate::services::{ImportParseError, read_file_from_multipart};
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_password_simple, validate_username};

/// 导入行数据
#[derive(Debug, Clone)]
struct StudentRow {
    row_num: usize,
    username: String,
    password: String,
    name: String,
    course: String,
    address: String,
    user_type: String,
    semester: String,
    section: String,
}

/// 导入学生
pub async fn import_students(
    service: &UserService,
    mut payload: Multipart,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 读取文件内容
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

    // 验证并过滤数据
    let mut errors: Vec<ImportRowError> = Vec::new();
    let mut failed = 0;
    let mut valid_rows: Vec<StudentRow> = Vec::new();

    for row in &rows {
        let mut row_errors = validate_row(row);
        if row_errors.is_empty() {
            valid_rows.push(row.clone());
        } else {
            failed += 1;
            errors.append(&mut row_errors);
        }
    }

    // 哈希密码并组装插入记录
    let mut to_insert: Vec<NewStudent> = Vec::new();

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

        to_insert.push(NewStudent {
            username: row.username,
            password_hash: hashed,
            name: row.name,
            course: row.course,
            semester: row.semester,
            section: row.section,
            address: (!row.address.is_empty()).then_some(row.address),
        });
    }

    // 批量插入，重复用户名由唯一索引跳过
    let attempted = to_insert.len();
    let success = match storage.insert_students(to_insert).await {
        Ok(inserted) => inserted as usize,
        Err(e) => {
            error!("批量插入学生失败: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("导入失败: {e}"),
                )),
            );
        }
    };
    let skipped = attempted - success;

    // 重建学生-科目关联
    match storage.resync_student_subjects().await {
        Ok(links) => info!("学生科目关联已重建，共 {} 条", links),
        Err(e) => error!("重建学生科目关联失败: {}", e),
    }

    let response = ImportSummary {
        total: rows.len(),
        success,
        skipped,
        failed,
        errors,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(response, "导入完成")))
}

fn parse_csv(data: &[u8]) -> Result<Vec<StudentRow>, ImportParseError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(Cursor::new(data));

    // 检查表头
    let headers = rdr
        .headers()
        .map_err(|e| ImportParseError::ParseFailed(format!("读取表头失败: {e}")))?;
    let header_map: std::collections::HashMap<_, _> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| (h.trim().to_lowercase(), i))
        .collect();

    // 必需列
    let required = [
        "username",
        "password",
        "name",
        "course",
        "type",
        "semester",
        "classsection",
    ];
    for col in required {
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

        rows.push(StudentRow {
            row_num: row_num + 2, // 1-based, skip header
            username: get(idx("username")),
            password: get(idx("password")),
            name: get(idx("name")),
            course: get(idx("course")),
            address: address_idx.map(get).unwrap_or_default(),
            user_type: get(idx("type")),
            semester: get(idx("semester")),
            section: get(idx("classsection")),
        });
    }

    Ok(rows)
}

fn validate_row(row: &StudentRow) -> Vec<ImportRowError> {
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

    if row.course.is_empty() {
        push("course", "课程不能为空".to_string());
    }

    if row.semester.is_empty() {
        push("semester", "学期不能为空".to_string());
    }

    if row.section.is_empty() {
        push("classSection", "班级不能为空".to_string());
    }

    if !expected_role_matches(&row.user_type, UserRole::Student) {
        push("type", format!("类型必须为 student，实际为: {}", row.user_type));
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "username,password,name,course,address,type,semester,classSection\n";

    fn row(line: &str) -> StudentRow {
        let csv = format!("{HEADER}{line}\n");
        parse_csv(csv.as_bytes()).unwrap().remove(0)
    }

    #[test]
    fn test_parse_csv_by_header_names() {
        let csv = format!(
            "{HEADER}stu_alice,SecurePass123,Alice,BTech,12 North St,student,5,A\n\
             stu_bob,SecurePass456,Bob,BTech,,student,5,B\n"
        );
        let rows = parse_csv(csv.as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].row_num, 2);
        assert_eq!(rows[0].username, "stu_alice");
        assert_eq!(rows[0].section, "A");
        assert_eq!(rows[1].row_num, 3);
        assert!(rows[1].address.is_empty());
    }

    #[test]
    fn test_parse_csv_missing_column() {
        let csv = "username,password,name\nstu_alice,SecurePass123,Alice\n";
        assert!(matches!(
            parse_csv(csv.as_bytes()),
            Err(ImportParseError::MissingColumn(_))
        ));
    }

    #[test]
    fn test_validate_row_accepts_valid() {
        let r = row("stu_alice,SecurePass123,Alice,BTech,12 North St,student,5,A");
        assert!(validate_row(&r).is_empty());
    }

    #[test]
    fn test_validate_row_reports_field_errors() {
        let r = row("ab,weak,,,addr,professor,,");
        let errors = validate_row(&r);
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert!(fields.contains(&"username"));
        assert!(fields.contains(&"password"));
        assert!(fields.contains(&"name"));
        assert!(fields.contains(&"course"));
        assert!(fields.contains(&"semester"));
        assert!(fields.contains(&"classSection"));
        assert!(fields.contains(&"type"));
        // 行号随错误一并上报
        assert!(errors.iter().all(|e| e.row == 2));
    }

    #[test]
    fn test_type_column_case_insensitive() {
        let r = row("stu_alice,SecurePass123,Alice,BTech,,Student,5,A");
        assert!(validate_row(&r).is_empty());
    }
}
