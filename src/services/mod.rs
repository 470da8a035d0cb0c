pub mod auth_service;
pub mod dashboard_service;
pub mod doctors_service;
pub mod health_service;
pub mod items_service;
pub mod master_data_service;
pub mod patients_service;
pub mod purchases_service;
pub mod realtime_service;
pub mod suppliers_service;

pub use auth_service::AuthServiceImpl;
pub use dashboard_service::DashboardServiceImpl;
pub use doctors_service::DoctorsServiceImpl;
pub use health_service::HealthServiceImpl;
pub use items_service::ItemsServiceImpl;
pub use master_data_service::MasterDataServiceImpl;
pub use patients_service::PatientsServiceImpl;
pub use purchases_service::PurchasesServiceImpl;
pub use realtime_service::RealtimeServiceImpl;
pub use suppliers_service::SuppliersServiceImpl;

use chrono::NaiveDate;
use tonic::{Request, Status};
use uuid::Uuid;

use crate::middleware::AuthenticatedUser;

/// Trimmed value, or `None` when blank.
pub(crate) fn non_empty(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

pub(crate) fn parse_id(value: &str, field: &str) -> Result<Uuid, Status> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Status::invalid_argument(format!("{} is required", field)));
    }
    Uuid::parse_str(trimmed)
        .map_err(|_| Status::invalid_argument(format!("{} is not a valid id: '{}'", field, trimmed)))
}

/// Like [`parse_id`], but a blank value means "not set".
pub(crate) fn parse_optional_id(value: &str, field: &str) -> Result<Option<Uuid>, Status> {
    match non_empty(value) {
        None => Ok(None),
        Some(v) => parse_id(v, field).map(Some),
    }
}

/// Parses a `YYYY-MM-DD` date. A blank value means "not set".
pub(crate) fn parse_date(value: &str, field: &str) -> Result<Option<NaiveDate>, Status> {
    match non_empty(value) {
        None => Ok(None),
        Some(v) => NaiveDate::parse_from_str(v, "%Y-%m-%d").map(Some).map_err(|_| {
            Status::invalid_argument(format!("{} must be YYYY-MM-DD, got '{}'", field, v))
        }),
    }
}

pub(crate) fn authenticated_user<T>(request: &Request<T>) -> Result<AuthenticatedUser, Status> {
    request
        .extensions()
        .get::<AuthenticatedUser>()
        .cloned()
        .ok_or_else(|| Status::unauthenticated("Authentication required"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tonic::Code;

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty("  "), None);
        assert_eq!(non_empty(" Tablet "), Some("Tablet"));
    }

    #[test]
    fn test_parse_id() {
        let id = Uuid::new_v4();
        assert_eq!(parse_id(&format!(" {} ", id), "id").unwrap(), id);
        assert_eq!(parse_id("", "id").unwrap_err().code(), Code::InvalidArgument);
        assert_eq!(parse_id("42", "id").unwrap_err().code(), Code::InvalidArgument);
        assert_eq!(parse_optional_id(" ", "category_id").unwrap(), None);
        assert_eq!(parse_optional_id(&id.to_string(), "category_id").unwrap(), Some(id));
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("", "birth_date").unwrap(), None);
        assert_eq!(
            parse_date("1990-02-28", "birth_date").unwrap(),
            NaiveDate::from_ymd_opt(1990, 2, 28)
        );
        assert!(parse_date("28/02/1990", "birth_date").is_err());
        assert!(parse_date("1990-02-30", "birth_date").is_err());
    }

    #[test]
    fn test_authenticated_user_from_extensions() {
        let request = Request::new(());
        assert_eq!(
            authenticated_user(&request).unwrap_err().code(),
            Code::Unauthenticated
        );

        let mut request = Request::new(());
        request.extensions_mut().insert(AuthenticatedUser {
            user_id: "u-1".into(),
            email: "admin@example.com".into(),
            role: "admin".into(),
        });
        let user = authenticated_user(&request).unwrap();
        assert_eq!(user.user_id, "u-1");
        assert!(user.is_admin());
    }
}
