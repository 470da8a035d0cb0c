use argon2::{Argon2, PasswordHash, PasswordVerifier};
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use tonic::{Request, Response, Status};

use crate::db::users::hash_password;
use crate::error::AppError;
use crate::models::UserModel;
use crate::proto::auth::auth_service_server::AuthService;
use crate::proto::auth::{
    AuthResponse, CreateUserRequest, LoginRequest, UserResponse, ValidateTokenRequest,
    ValidateTokenResponse,
};
use crate::services::authenticated_user;

const MIN_PASSWORD_LEN: usize = 8;
const ROLES: &[&str] = &["admin", "staff"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub email: String,
    pub role: String,
    pub exp: i64,
    pub iat: i64,
}

/// Returns the claims of a valid, unexpired token signed with `secret`.
pub fn decode_token(token: &str, secret: &str) -> Option<Claims> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .ok()
    .map(|data| data.claims)
}

pub fn issue_token(
    user: &UserModel,
    secret: &str,
    ttl_hours: i64,
) -> Result<(String, chrono::DateTime<Utc>), Status> {
    let now = Utc::now();
    let exp = now + chrono::Duration::hours(ttl_hours);
    let claims = Claims {
        sub: user.id.clone(),
        email: user.email.clone(),
        role: user.role.clone(),
        exp: exp.timestamp(),
        iat: now.timestamp(),
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| Status::internal(format!("JWT error: {}", e)))?;
    Ok((token, exp))
}

pub struct AuthServiceImpl {
    pool: PgPool,
    jwt_secret: String,
    ttl_hours: i64,
}

impl AuthServiceImpl {
    pub fn new(pool: PgPool, jwt_secret: String, ttl_hours: i64) -> Self {
        Self {
            pool,
            jwt_secret,
            ttl_hours,
        }
    }
}

#[tonic::async_trait]
impl AuthService for AuthServiceImpl {
    async fn login(
        &self,
        request: Request<LoginRequest>,
    ) -> Result<Response<AuthResponse>, Status> {
        let req = request.into_inner();
        let email = req.email.trim().to_lowercase();

        if email.is_empty() || req.password.is_empty() {
            return Err(Status::invalid_argument("email and password are required"));
        }

        let user: Option<UserModel> = sqlx::query_as(
            "SELECT id::text AS id, email, name, role, password_hash, created_at::text AS created_at \
             FROM users WHERE email = $1",
        )
        .bind(&email)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::from)?;

        let user = user.ok_or_else(|| Status::unauthenticated("Invalid credentials"))?;

        let parsed_hash = PasswordHash::new(&user.password_hash)
            .map_err(|_| Status::internal("Invalid password hash in database"))?;
        Argon2::default()
            .verify_password(req.password.as_bytes(), &parsed_hash)
            .map_err(|_| Status::unauthenticated("Invalid credentials"))?;

        let (token, exp) = issue_token(&user, &self.jwt_secret, self.ttl_hours)?;
        tracing::info!("Login: user={}, role={}", user.email, user.role);

        Ok(Response::new(AuthResponse {
            token,
            expires_at: exp.to_rfc3339(),
            user: Some(user.to_proto()),
        }))
    }

    async fn validate_token(
        &self,
        request: Request<ValidateTokenRequest>,
    ) -> Result<Response<ValidateTokenResponse>, Status> {
        let req = request.into_inner();

        let response = match decode_token(&req.token, &self.jwt_secret) {
            Some(claims) => ValidateTokenResponse {
                valid: true,
                user_id: claims.sub,
                email: claims.email,
                role: claims.role,
            },
            None => ValidateTokenResponse::default(),
        };
        Ok(Response::new(response))
    }

    async fn create_user(
        &self,
        request: Request<CreateUserRequest>,
    ) -> Result<Response<UserResponse>, Status> {
        let caller = authenticated_user(&request)?;
        if !caller.is_admin() {
            return Err(Status::permission_denied("Only admins can create users"));
        }
        let req = request.into_inner();

        let email = req.email.trim().to_lowercase();
        if !email.contains('@') {
            return Err(Status::invalid_argument("a valid email is required"));
        }
        if req.name.trim().is_empty() {
            return Err(Status::invalid_argument("name is required"));
        }
        if req.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(Status::invalid_argument(format!(
                "password must be at least {} characters",
                MIN_PASSWORD_LEN
            )));
        }
        let role = if req.role.trim().is_empty() {
            "staff"
        } else {
            req.role.trim()
        };
        if !ROLES.contains(&role) {
            return Err(Status::invalid_argument("role must be 'admin' or 'staff'"));
        }

        let password_hash = hash_password(&req.password)?;

        let user: UserModel = sqlx::query_as(
            "INSERT INTO users (email, name, role, password_hash) VALUES ($1, $2, $3, $4) \
             RETURNING id::text AS id, email, name, role, password_hash, created_at::text AS created_at",
        )
        .bind(&email)
        .bind(req.name.trim())
        .bind(role)
        .bind(&password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)?;

        tracing::info!("User created: {} ({}) by {}", user.email, user.role, caller.email);

        Ok(Response::new(UserResponse {
            user: Some(user.to_proto()),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> UserModel {
        UserModel {
            id: "00000000-0000-0000-0000-000000000042".into(),
            email: "apoteker@example.com".into(),
            name: "Apoteker".into(),
            role: "staff".into(),
            password_hash: String::new(),
            created_at: String::new(),
        }
    }

    #[test]
    fn test_issue_and_decode_token() {
        let (token, exp) = issue_token(&user(), "secret", 24).unwrap();
        let claims = decode_token(&token, "secret").unwrap();
        assert_eq!(claims.sub, "00000000-0000-0000-0000-000000000042");
        assert_eq!(claims.role, "staff");
        assert_eq!(claims.exp, exp.timestamp());
    }

    #[test]
    fn test_decode_rejects_wrong_secret() {
        let (token, _) = issue_token(&user(), "secret", 24).unwrap();
        assert!(decode_token(&token, "other-secret").is_none());
    }

    #[test]
    fn test_decode_rejects_expired_token() {
        let (token, _) = issue_token(&user(), "secret", -2).unwrap();
        assert!(decode_token(&token, "secret").is_none());
    }
}
