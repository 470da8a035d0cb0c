use sqlx::PgPool;
use tonic::{Request, Response, Status};

use crate::db::PageParams;
use crate::error::AppError;
use crate::models::DoctorModel;
use crate::proto::common::{Empty, IdRequest};
use crate::proto::directory::doctors_service_server::DoctorsService;
use crate::proto::directory::{
    CreateDoctorRequest, DoctorInput, DoctorResponse, ListDoctorsRequest, ListDoctorsResponse,
    UpdateDoctorRequest,
};
use crate::services::{non_empty, parse_id};

const DOCTOR_COLUMNS: &str = "id::text AS id, name, specialization, license_number, phone, \
     email, address, created_at::text AS created_at, updated_at::text AS updated_at";

pub struct DoctorsServiceImpl {
    pool: PgPool,
}

impl DoctorsServiceImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn required_name(input: &DoctorInput) -> Result<&str, Status> {
    non_empty(&input.name).ok_or_else(|| Status::invalid_argument("name is required"))
}

#[tonic::async_trait]
impl DoctorsService for DoctorsServiceImpl {
    async fn list_doctors(
        &self,
        request: Request<ListDoctorsRequest>,
    ) -> Result<Response<ListDoctorsResponse>, Status> {
        let req = request.into_inner();
        let page = PageParams::from_request(req.page.as_ref());
        let filter = "WHERE ($1::text IS NULL OR name ILIKE $1 OR specialization ILIKE $1 \
             OR license_number ILIKE $1)";

        let (count,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM doctors {}", filter))
            .bind(&page.search)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::from)?;

        let doctors: Vec<DoctorModel> = sqlx::query_as(&format!(
            "SELECT {} FROM doctors {} ORDER BY name ASC LIMIT $2 OFFSET $3",
            DOCTOR_COLUMNS, filter
        ))
        .bind(&page.search)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(Response::new(ListDoctorsResponse {
            doctors: doctors.iter().map(DoctorModel::to_proto).collect(),
            page_info: Some(page.page_info(count)),
        }))
    }

    async fn get_doctor(
        &self,
        request: Request<IdRequest>,
    ) -> Result<Response<DoctorResponse>, Status> {
        let id = parse_id(&request.into_inner().id, "id")?;

        let doctor: Option<DoctorModel> =
            sqlx::query_as(&format!("SELECT {} FROM doctors WHERE id = $1", DOCTOR_COLUMNS))
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(AppError::from)?;

        doctor
            .map(|d| {
                Response::new(DoctorResponse {
                    doctor: Some(d.to_proto()),
                })
            })
            .ok_or_else(|| Status::not_found("Doctor not found"))
    }

    async fn create_doctor(
        &self,
        request: Request<CreateDoctorRequest>,
    ) -> Result<Response<DoctorResponse>, Status> {
        let input = request
            .into_inner()
            .doctor
            .ok_or_else(|| Status::invalid_argument("doctor is required"))?;
        let name = required_name(&input)?;

        let doctor: DoctorModel = sqlx::query_as(&format!(
            "INSERT INTO doctors (name, specialization, license_number, phone, email, address) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING {}",
            DOCTOR_COLUMNS
        ))
        .bind(name)
        .bind(non_empty(&input.specialization))
        .bind(non_empty(&input.license_number))
        .bind(non_empty(&input.phone))
        .bind(non_empty(&input.email))
        .bind(non_empty(&input.address))
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)?;

        tracing::info!("Created doctor: id={}", doctor.id);
        Ok(Response::new(DoctorResponse {
            doctor: Some(doctor.to_proto()),
        }))
    }

    async fn update_doctor(
        &self,
        request: Request<UpdateDoctorRequest>,
    ) -> Result<Response<DoctorResponse>, Status> {
        let req = request.into_inner();
        let id = parse_id(&req.id, "id")?;
        let input = req
            .doctor
            .ok_or_else(|| Status::invalid_argument("doctor is required"))?;
        let name = required_name(&input)?;

        let doctor: Option<DoctorModel> = sqlx::query_as(&format!(
            "UPDATE doctors SET name = $1, specialization = $2, license_number = $3, \
             phone = $4, email = $5, address = $6, updated_at = NOW() \
             WHERE id = $7 RETURNING {}",
            DOCTOR_COLUMNS
        ))
        .bind(name)
        .bind(non_empty(&input.specialization))
        .bind(non_empty(&input.license_number))
        .bind(non_empty(&input.phone))
        .bind(non_empty(&input.email))
        .bind(non_empty(&input.address))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::from)?;

        doctor
            .map(|d| {
                Response::new(DoctorResponse {
                    doctor: Some(d.to_proto()),
                })
            })
            .ok_or_else(|| Status::not_found("Doctor not found"))
    }

    async fn delete_doctor(
        &self,
        request: Request<IdRequest>,
    ) -> Result<Response<Empty>, Status> {
        let id = parse_id(&request.into_inner().id, "id")?;

        let result = sqlx::query("DELETE FROM doctors WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected() == 0 {
            return Err(Status::not_found("Doctor not found"));
        }

        tracing::info!("Deleted doctor: id={}", id);
        Ok(Response::new(Empty {}))
    }
}
