//! 教授-科目分配导入服务

use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::io::Cursor;
use tracing::error;

use super::SubjectService;
use crate::config::AppConfig;
use crate::models::subjects::requests::AssignmentPair;
use crate::models::users::responses::{ImportRowError, ImportSummary};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{ImportParseError, read_file_from_multipart};

/// 分配行：一个教授用户名与若干 `CODE:SECTION` 对
#[derive(Debug, Clone)]
struct AssignmentRow {
    row_num: usize,
    username: String,
    pairs: Vec<AssignmentPair>,
}

/// 导入教授-科目分配
///
/// 每行一个教授，subjectCodes 列为逗号分隔的 `CODE:SECTION` 对。
/// 未知用户名或科目代码让整行失败，已存在的分配计入 skipped。
pub async fn assign_subjects(
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
    let mut success = 0;
    let mut skipped = 0;
    let mut failed = 0;

    for row in &rows {
        let mut row_errors = validate_row(row);

        // 解析通过后逐项解析教授与科目
        let mut resolved: Vec<(i64, String)> = Vec::new();
        let mut professor_id = None;

        if row_errors.is_empty() {
            match storage.get_professor_by_username(&row.username).await {
                Ok(Some(professor)) => professor_id = Some(professor.id),
                Ok(None) => row_errors.push(ImportRowError {
                    row: row.row_num,
                    field: "username".to_string(),
                    message: format!("教授不存在: {}", row.username),
                }),
                Err(e) => {
                    error!("查询教授失败: {}", e);
                    row_errors.push(ImportRowError {
                        row: row.row_num,
                        field: "username".to_string(),
                        message: format!("查询教授失败: {e}"),
                    });
                }
            }

            for pair in &row.pairs {
                match storage.get_subject_by_code(&pair.subject_code).await {
                    Ok(Some(subject)) => resolved.push((subject.id, pair.section.clone())),
                    Ok(None) => row_errors.push(ImportRowError {
                        row: row.row_num,
                        field: "subjectCodes".to_string(),
                        message: format!("科目不存在: {}", pair.subject_code),
                    }),
                    Err(e) => {
                        error!("查询科目失败: {}", e);
                        row_errors.push(ImportRowError {
                            row: row.row_num,
                            field: "subjectCodes".to_string(),
                            message: format!("查询科目失败: {e}"),
                        });
                    }
                }
            }
        }

        if !row_errors.is_empty() {
            failed += 1;
            errors.append(&mut row_errors);
            continue;
        }

        let professor_id = professor_id.expect("set when row has no errors");
        match storage.assign_professor_subjects(professor_id, resolved).await {
            Ok(inserted) if inserted > 0 => success += 1,
            Ok(_) => skipped += 1, // 全部分配已存在
            Err(e) => {
                error!("写入教授分配失败: {}", e);
                failed += 1;
                errors.push(ImportRowError {
                    row: row.row_num,
                    field: "subjectCodes".to_string(),
                    message: format!("写入分配失败: {e}"),
                });
            }
        }
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

fn parse_csv(data: &[u8]) -> Result<Vec<AssignmentRow>, ImportParseError> {
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

    for col in ["username", "subjectcodes"] {
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

        rows.push(AssignmentRow {
            row_num: row_num + 2,
            username: get(idx("username")),
            pairs: parse_pairs(&get(idx("subjectcodes"))),
        });
    }

    Ok(rows)
}

/// 解析 `CODE:SECTION,CODE:SECTION` 形式的分配列表
///
/// 格式不合法的项保留为空 section，由 validate_row 报错。
fn parse_pairs(raw: &str) -> Vec<AssignmentPair> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|item| match item.split_once(':') {
            Some((code, section)) => AssignmentPair {
                subject_code: code.trim().to_uppercase(),
                section: section.trim().to_string(),
            },
            None => AssignmentPair {
                subject_code: item.to_uppercase(),
                section: String::new(),
            },
        })
        .collect()
}

fn validate_row(row: &AssignmentRow) -> Vec<ImportRowError> {
    let mut errors = Vec::new();
    let mut push = |field: &str, message: String| {
        errors.push(ImportRowError {
            row: row.row_num,
            field: field.to_string(),
            message,
        });
    };

    if row.username.is_empty() {
        push("username", "用户名不能为空".to_string());
    }

    if row.pairs.is_empty() {
        push("subjectCodes", "分配列表不能为空".to_string());
    }

    for pair in &row.pairs {
        if pair.subject_code.is_empty() || pair.section.is_empty() {
            push(
                "subjectCodes",
                format!("分配项格式应为 CODE:SECTION，实际为: {}", pair.subject_code),
            );
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pairs() {
        let pairs = parse_pairs("cs101:A, MATH204:B2");
        assert_eq!(
            pairs,
            vec![
                AssignmentPair {
                    subject_code: "CS101".to_string(),
                    section: "A".to_string(),
                },
                AssignmentPair {
                    subject_code: "MATH204".to_string(),
                    section: "B2".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_parse_pairs_without_section() {
        let pairs = parse_pairs("CS101");
        assert_eq!(pairs.len(), 1);
        assert!(pairs[0].section.is_empty());
    }

    #[test]
    fn test_validate_row_rejects_missing_section() {
        let row = AssignmentRow {
            row_num: 2,
            username: "prof_smith".to_string(),
            pairs: parse_pairs("CS101"),
        };
        let errors = validate_row(&row);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "subjectCodes");
    }

    #[test]
    fn test_validate_row_rejects_empty_list() {
        let row = AssignmentRow {
            row_num: 3,
            username: "prof_smith".to_string(),
            pairs: vec![],
        };
        assert!(!validate_row(&row).is_empty());
    }

    #[test]
    fn test_validate_row_accepts_valid() {
        let row = AssignmentRow {
            row_num: 2,
            username: "prof_smith".to_string(),
            pairs: parse_pairs("CS101:A,MATH204:B"),
        };
        assert!(validate_row(&row).is_empty());
    }
}
