use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHasher, SaltString};
use argon2::Argon2;
use sqlx::PgPool;

use crate::config::BootstrapAdmin;
use crate::error::{AppError, AppResult};

pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(format!("Password hashing failed: {}", e)))
}

/// Creates the configured administrator when no user exists yet.
pub async fn ensure_bootstrap_admin(pool: &PgPool, admin: &BootstrapAdmin) -> AppResult<bool> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        return Ok(false);
    }

    let password_hash = hash_password(&admin.password)?;
    sqlx::query(
        "INSERT INTO users (email, name, role, password_hash) VALUES ($1, $2, 'admin', $3) \
         ON CONFLICT (email) DO NOTHING",
    )
    .bind(admin.email.trim().to_lowercase())
    .bind("Administrator")
    .bind(&password_hash)
    .execute(pool)
    .await?;

    tracing::info!("Bootstrap admin created: {}", admin.email);
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use argon2::{PasswordHash, PasswordVerifier};

    #[test]
    fn test_hash_password_verifies() {
        let hash = hash_password("s3cret-pass").unwrap();
        let parsed = PasswordHash::new(&hash).unwrap();
        assert!(Argon2::default()
            .verify_password(b"s3cret-pass", &parsed)
            .is_ok());
        assert!(Argon2::default().verify_password(b"wrong", &parsed).is_err());
    }
}
