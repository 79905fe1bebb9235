use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::users::entities::AuthUser;
use crate::models::{
    ApiResponse, ErrorCode,
    auth::{LoginRequest, LoginResponse},
};
use crate::storage::Storage;
use crate::utils::jwt;
use crate::utils::password::verify_password;

use super::AuthService;

/// 按用户名解析登录主体
///
/// 三张用户表按 admin > professor > student 的优先级逐表尝试，
/// 第一个命中的用户名决定身份，其密码哈希即参与验证的哈希。
async fn find_principal(
    storage: &std::sync::Arc<dyn Storage>,
    username: &str,
) -> crate::errors::Result<Option<(AuthUser, String)>> {
    if let Some(admin) = storage.get_admin_by_username(username).await? {
        return Ok(Some((admin.auth_user(), admin.password_hash)));
    }

    if let Some(professor) = storage.get_professor_by_username(username).await? {
        return Ok(Some((professor.auth_user(), professor.password_hash)));
    }

    if let Some(student) = storage.get_student_by_username(username).await? {
        return Ok(Some((student.auth_user(), student.password_hash)));
    }

    Ok(None)
}

pub async fn handle_login(
    service: &AuthService,
    login_request: LoginRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let config = service.get_config();

    // 1. 解析登录主体
    match find_principal(&storage, &login_request.username).await {
        Ok(Some((user, password_hash))) => {
            // 2. 验证密码
            if verify_password(&login_request.password, &password_hash) {
                // 3. 生成令牌对，角色写入 role claim
                let refresh_expiry = login_request.remember_me.then(|| {
                    chrono::Duration::days(config.jwt.refresh_token_remember_me_expiry)
                });

                match jwt::JwtUtils::generate_token_pair(
                    user.id,
                    &user.role.to_string(),
                    refresh_expiry,
                ) {
                    Ok(token_pair) => {
                        tracing::info!(
                            "User {} logged in successfully as {}",
                            user.username,
                            user.role
                        );

                        let response = LoginResponse {
                            access_token: token_pair.access_token,
                            expires_in: config.jwt.access_token_expiry * 60, // 转换为秒
                            user,
                            created_at: chrono::Utc::now(),
                        };

                        // 4. 创建 refresh token cookie
                        let refresh_cookie =
                            jwt::JwtUtils::create_refresh_token_cookie(&token_pair.refresh_token);

                        Ok(HttpResponse::Ok()
                            .cookie(refresh_cookie)
                            .json(ApiResponse::success(response, "Login successful")))
                    }
                    Err(e) => {
                        tracing::error!("Failed to generate JWT token: {}", e);
                        Ok(
                            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                                ErrorCode::InternalServerError,
                                "Login failed, unable to generate token",
                            )),
                        )
                    }
                }
            } else {
                Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                    ErrorCode::AuthFailed,
                    "Username or password is incorrect",
                )))
            }
        }
        Ok(None) => Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::AuthFailed,
            "Username or password is incorrect",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Login failed: {e}"),
            )),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::find_principal;
    use crate::models::users::entities::UserRole;
    use crate::models::users::requests::{NewAdmin, NewStudent};
    use crate::storage::sea_orm_storage::SeaOrmStorage;
    use std::sync::Arc;

    fn student(username: &str, hash: &str) -> NewStudent {
        NewStudent {
            username: username.to_string(),
            password_hash: hash.to_string(),
            name: "Shared Name".to_string(),
            course: "BSCS".to_string(),
            semester: "3".to_string(),
            section: "A".to_string(),
            address: None,
        }
    }

    // 用户名在多张表中撞名时按 admin > professor > student 解析，
    // 参与验证的哈希属于优先级更高的那条记录
    #[tokio::test]
    async fn test_username_collision_resolved_by_table_priority() {
        let storage = SeaOrmStorage::new_in_memory().await.unwrap();

        storage
            .insert_students_impl(vec![student("jordan", "student-hash")])
            .await
            .unwrap();
        storage
            .create_admin_impl(NewAdmin {
                username: "jordan".to_string(),
                password_hash: "admin-hash".to_string(),
                name: "Shared Name".to_string(),
                address: None,
            })
            .await
            .unwrap();

        let storage: Arc<dyn crate::storage::Storage> = Arc::new(storage);

        let (user, hash) = find_principal(&storage, "jordan")
            .await
            .unwrap()
            .expect("principal resolved");
        assert_eq!(user.role, UserRole::Admin);
        assert_eq!(hash, "admin-hash");
    }

    #[tokio::test]
    async fn test_username_without_collision_falls_through_to_student() {
        let storage = SeaOrmStorage::new_in_memory().await.unwrap();

        storage
            .insert_students_impl(vec![student("casey", "student-hash")])
            .await
            .unwrap();

        let storage: Arc<dyn crate::storage::Storage> = Arc::new(storage);

        let (user, hash) = find_principal(&storage, "casey")
            .await
            .unwrap()
            .expect("principal resolved");
        assert_eq!(user.role, UserRole::Student);
        assert_eq!(hash, "student-hash");

        assert!(find_principal(&storage, "nobody").await.unwrap().is_none());
    }
}
