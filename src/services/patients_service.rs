use chrono::NaiveDate;
use sqlx::PgPool;
use tonic::{Request, Response, Status};

use crate::db::PageParams;
use crate::error::AppError;
use crate::models::PatientModel;
use crate::proto::common::{Empty, IdRequest};
use crate::proto::directory::patients_service_server::PatientsService;
use crate::proto::directory::{
    CreatePatientRequest, ListPatientsRequest, ListPatientsResponse, PatientInput,
    PatientResponse, UpdatePatientRequest,
};
use crate::services::{non_empty, parse_date, parse_id};

const PATIENT_COLUMNS: &str = "id::text AS id, name, gender, birth_date::text AS birth_date, \
     address, phone, email, created_at::text AS created_at, updated_at::text AS updated_at";

pub struct PatientsServiceImpl {
    pool: PgPool,
}

impl PatientsServiceImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Normalized gender: `male`, `female`, or absent.
fn parse_gender(value: &str) -> Result<Option<&'static str>, Status> {
    match value.trim().to_ascii_lowercase().as_str() {
        "" => Ok(None),
        "male" => Ok(Some("male")),
        "female" => Ok(Some("female")),
        other => Err(Status::invalid_argument(format!(
            "gender must be 'male' or 'female', got '{}'",
            other
        ))),
    }
}

struct PatientFields<'a> {
    name: &'a str,
    gender: Option<&'static str>,
    birth_date: Option<NaiveDate>,
    address: Option<&'a str>,
    phone: Option<&'a str>,
    email: Option<&'a str>,
}

fn patient_fields(input: &PatientInput) -> Result<PatientFields<'_>, Status> {
    Ok(PatientFields {
        name: non_empty(&input.name).ok_or_else(|| Status::invalid_argument("name is required"))?,
        gender: parse_gender(&input.gender)?,
        birth_date: parse_date(&input.birth_date, "birth_date")?,
        address: non_empty(&input.address),
        phone: non_empty(&input.phone),
        email: non_empty(&input.email),
    })
}

#[tonic::async_trait]
impl PatientsService for PatientsServiceImpl {
    async fn list_patients(
        &self,
        request: Request<ListPatientsRequest>,
    ) -> Result<Response<ListPatientsResponse>, Status> {
        let req = request.into_inner();
        let page = PageParams::from_request(req.page.as_ref());
        let filter = "WHERE ($1::text IS NULL OR name ILIKE $1 OR phone ILIKE $1 OR email ILIKE $1)";

        let (count,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM patients {}", filter))
            .bind(&page.search)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::from)?;

        let patients: Vec<PatientModel> = sqlx::query_as(&format!(
            "SELECT {} FROM patients {} ORDER BY name ASC LIMIT $2 OFFSET $3",
            PATIENT_COLUMNS, filter
        ))
        .bind(&page.search)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(Response::new(ListPatientsResponse {
            patients: patients.iter().map(PatientModel::to_proto).collect(),
            page_info: Some(page.page_info(count)),
        }))
    }

    async fn get_patient(
        &self,
        request: Request<IdRequest>,
    ) -> Result<Response<PatientResponse>, Status> {
        let id = parse_id(&request.into_inner().id, "id")?;

        let patient: Option<PatientModel> =
            sqlx::query_as(&format!("SELECT {} FROM patients WHERE id = $1", PATIENT_COLUMNS))
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(AppError::from)?;

        match patient {
            Some(p) => Ok(Response::new(PatientResponse {
                patient: Some(p.to_proto()),
            })),
            None => Err(Status::not_found("Patient not found")),
        }
    }

    async fn create_patient(
        &self,
        request: Request<CreatePatientRequest>,
    ) -> Result<Response<PatientResponse>, Status> {
        let req = request.into_inner();
        let input = req
            .patient
            .ok_or_else(|| Status::invalid_argument("patient is required"))?;
        let fields = patient_fields(&input)?;

        let patient: PatientModel = sqlx::query_as(&format!(
            "INSERT INTO patients (name, gender, birth_date, address, phone, email) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING {}",
            PATIENT_COLUMNS
        ))
        .bind(fields.name)
        .bind(fields.gender)
        .bind(fields.birth_date)
        .bind(fields.address)
        .bind(fields.phone)
        .bind(fields.email)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)?;

        tracing::info!("Created patient: id={}", patient.id);
        Ok(Response::new(PatientResponse {
            patient: Some(patient.to_proto()),
        }))
    }

    async fn update_patient(
        &self,
        request: Request<UpdatePatientRequest>,
    ) -> Result<Response<PatientResponse>, Status> {
        let req = request.into_inner();
        let id = parse_id(&req.id, "id")?;
        let input = req
            .patient
            .ok_or_else(|| Status::invalid_argument("patient is required"))?;
        let fields = patient_fields(&input)?;

        let patient: Option<PatientModel> = sqlx::query_as(&format!(
            "UPDATE patients SET name = $1, gender = $2, birth_date = $3, address = $4, \
             phone = $5, email = $6, updated_at = NOW() WHERE id = $7 RETURNING {}",
            PATIENT_COLUMNS
        ))
        .bind(fields.name)
        .bind(fields.gender)
        .bind(fields.birth_date)
        .bind(fields.address)
        .bind(fields.phone)
        .bind(fields.email)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::from)?;

        match patient {
            Some(p) => Ok(Response::new(PatientResponse {
                patient: Some(p.to_proto()),
            })),
            None => Err(Status::not_found("Patient not found")),
        }
    }

    async fn delete_patient(
        &self,
        request: Request<IdRequest>,
    ) -> Result<Response<Empty>, Status> {
        let id = parse_id(&request.into_inner().id, "id")?;

        let result = sqlx::query("DELETE FROM patients WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected() == 0 {
            return Err(Status::not_found("Patient not found"));
        }

        tracing::info!("Deleted patient: id={}", id);
        Ok(Response::new(Empty {}))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_gender() {
        assert_eq!(parse_gender("").unwrap(), None);
        assert_eq!(parse_gender(" Female ").unwrap(), Some("female"));
        assert_eq!(parse_gender("MALE").unwrap(), Some("male"));
        assert_eq!(
            parse_gender("other").unwrap_err().code(),
            tonic::Code::InvalidArgument
        );
    }

    #[test]
    fn test_patient_fields_requires_name() {
        let input = PatientInput {
            name: "   ".into(),
            ..Default::default()
        };
        assert!(patient_fields(&input).is_err());

        let input = PatientInput {
            name: "Siti".into(),
            phone: " ".into(),
            ..Default::default()
        };
        let fields = patient_fields(&input).unwrap();
        assert_eq!(fields.name, "Siti");
        assert_eq!(fields.phone, None);
    }
}
