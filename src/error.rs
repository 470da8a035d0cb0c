use thiserror::Error;
use tonic::Status;

use crate::domain::DomainError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(sqlx::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Already exists: {0}")]
    Conflict(String),

    #[error("Still referenced: {0}")]
    InUse(String),

    #[error("Unauthenticated: {0}")]
    Unauthenticated(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Image storage is not configured")]
    StorageDisabled,

    #[error("Internal error: {0}")]
    Internal(String),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        let classified = err.as_database_error().and_then(|db| {
            let code = db.code()?;
            let message = db.message().to_string();
            match code.as_ref() {
                "23505" => Some(AppError::Conflict(message)),
                "23503" => Some(AppError::InUse(message)),
                // check violation, invalid text representation, bad datetime
                "23514" | "22P02" | "22007" | "22008" => Some(AppError::InvalidInput(message)),
                _ => None,
            }
        });
        classified.unwrap_or(AppError::Database(err))
    }
}

impl From<AppError> for Status {
    fn from(err: AppError) -> Self {
        match err {
            AppError::Database(e) => {
                tracing::error!("Database error: {}", e);
                Status::internal(format!("Database error: {}", e))
            }
            AppError::NotFound(msg) => Status::not_found(msg),
            AppError::InvalidInput(msg) => Status::invalid_argument(msg),
            AppError::Conflict(msg) => Status::already_exists(msg),
            AppError::InUse(msg) => Status::failed_precondition(msg),
            AppError::Unauthenticated(msg) => Status::unauthenticated(msg),
            AppError::PermissionDenied(msg) => Status::permission_denied(msg),
            AppError::Storage(msg) => {
                tracing::error!("Storage error: {}", msg);
                Status::internal(format!("Storage error: {}", msg))
            }
            AppError::StorageDisabled => {
                Status::failed_precondition("Image storage is not configured")
            }
            AppError::Internal(msg) => Status::internal(msg),
            AppError::Domain(e) => Status::invalid_argument(e.to_string()),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use tonic::Code;

    #[test]
    fn test_status_codes() {
        let cases = [
            (AppError::NotFound("item".into()), Code::NotFound),
            (AppError::InvalidInput("x".into()), Code::InvalidArgument),
            (AppError::Conflict("dup".into()), Code::AlreadyExists),
            (AppError::InUse("fk".into()), Code::FailedPrecondition),
            (AppError::Unauthenticated("t".into()), Code::Unauthenticated),
            (AppError::PermissionDenied("p".into()), Code::PermissionDenied),
            (AppError::StorageDisabled, Code::FailedPrecondition),
            (AppError::Internal("boom".into()), Code::Internal),
            (
                AppError::Domain(DomainError::UnknownUnit("Box".into())),
                Code::InvalidArgument,
            ),
        ];
        for (err, code) in cases {
            assert_eq!(Status::from(err).code(), code);
        }
    }

    #[test]
    fn test_domain_message_is_preserved() {
        let status = Status::from(AppError::from(DomainError::InvalidQuantity(0)));
        assert_eq!(status.message(), "quantity must be greater than zero (got 0)");
    }

    #[test]
    fn test_non_database_sqlx_error_stays_database() {
        let err = AppError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, AppError::Database(sqlx::Error::RowNotFound)));
    }
}
