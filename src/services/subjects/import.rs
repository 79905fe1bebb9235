//! 科目导入服务

use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::io::Cursor;
use tracing::{error, info};

use super::SubjectService;
use crate::config::AppConfig;
use crate::models::subjects::requests::NewSubject;
use crate::models::users::responses::{ImportRowError, ImportSummary};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{ImportParseError, read_file_from_multipart};

/// 导入行数据
#[derive(Debug, Clone)]
struct SubjectRow {
    row_num: usize,
    subject_code: String,
    subject_name: String,
    semester: String,
    course: String,
}

/// 导入科目
///
/// 成功插入后全量重建学生-科目关联，使既有学生立即关联新科目。
pub async fn import_subjects(
    service: &SubjectService,
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
    let mut to_insert: Vec<NewSubject> = Vec::new();

    for row in &rows {
        let mut row_errors = validate_row(row);
        if row_errors.is_empty() {
            to_insert.push(NewSubject {
                subject_code: row.subject_code.clone(),
                subject_name: row.subject_name.clone(),
                semester: row.semester.clone(),
                course: row.course.clone(),
            });
        } else {
            failed += 1;
            errors.append(&mut row_errors);
        }
    }

    let attempted = to_insert.len();
    let success = match storage.insert_subjects(to_insert).await {
        Ok(inserted) => inserted as usize,
        Err(e) => {
            error!("批量插入科目失败: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("导入失败: {e}"),
                )),
            );
        }
    };
    let skipped = attempted - success;

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

fn parse_csv(data: &[u8]) -> Result<Vec<SubjectRow>, ImportParseError> {
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

    for col in ["subjectcode", "subjectname", "semester", "course"] {
        if !header_map.contains_key(col) {
            return Err(ImportParseError::MissingColumn(col.to_string()));
        }
    }
    let idx = |name: &str| *header_map.get(name).expect("checked above");

    let mut rows = Vec::new();

    for (row_num, result) in rdr.records().enumerate() {
        let record = result.map_err(|e| {
            ImportParseError::ParseFailed(format!("第 {} 行解析失败: {e}", row_num + 2))
        })?;

        let get = |i: usize| record.get(i).unwrap_or("").trim().to_string();

        rows.push(SubjectRow {
            row_num: row_num + 2,
            subject_code: get(idx("subjectcode")).to_uppercase(),
            subject_name: get(idx("subjectname")),
            semester: get(idx("semester")),
            course: get(idx("course")),
        });
    }

    Ok(rows)
}

fn validate_row(row: &SubjectRow) -> Vec<ImportRowError> {
    let mut errors = Vec::new();
    let mut push = |field: &str, message: &str| {
        errors.push(ImportRowError {
            row: row.row_num,
            field: field.to_string(),
            message: message.to_string(),
        });
    };

    if row.subject_code.is_empty() {
        push("subjectCode", "科目代码不能为空");
    } else if !row
        .subject_code
        .chars()
        .all(|c| c.is_ascii_alphanumeric())
    {
        push("subjectCode", "科目代码只能包含字母和数字");
    }

    if row.subject_name.is_empty() {
        push("subjectName", "科目名称不能为空");
    }

    if row.semester.is_empty() {
        push("semester", "学期不能为空");
    }

    if row.course.is_empty() {
        push("course", "课程不能为空");
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "subjectCode,subjectName,semester,course\n";

    #[test]
    fn test_parse_csv_uppercases_codes() {
        let csv = format!("{HEADER}cs101,Intro to CS,5,BTech\n");
        let rows = parse_csv(csv.as_bytes()).unwrap();
        assert_eq!(rows[0].subject_code, "CS101");
        assert_eq!(rows[0].subject_name, "Intro to CS");
    }

    #[test]
    fn test_parse_csv_missing_column() {
        let csv = "subjectCode,subjectName\nCS101,Intro\n";
        assert!(matches!(
            parse_csv(csv.as_bytes()),
            Err(ImportParseError::MissingColumn(_))
        ));
    }

    #[test]
    fn test_validate_row_rejects_bad_code() {
        let csv = format!("{HEADER}CS-101,Intro to CS,5,BTech\n");
        let rows = parse_csv(csv.as_bytes()).unwrap();
        let errors = validate_row(&rows[0]);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "subjectCode");
    }

    #[test]
    fn test_validate_row_accepts_valid() {
        let csv = format!("{HEADER}MATH204,Linear Algebra,3,BSc\n");
        let rows = parse_csv(csv.as_bytes()).unwrap();
        assert!(validate_row(&rows[0]).is_empty());
    }
}
