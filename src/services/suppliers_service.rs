use sqlx::PgPool;
use tonic::{Request, Response, Status};

use crate::db::PageParams;
use crate::error::AppError;
use crate::models::SupplierModel;
use crate::proto::common::{Empty, IdRequest};
use crate::proto::directory::suppliers_service_server::SuppliersService;
use crate::proto::directory::{
    CreateSupplierRequest, SupplierInput, SupplierResponse, ListSuppliersRequest, ListSuppliersResponse,
    UpdateSupplierRequest,
};
use crate::services::{non_empty, parse_id};

const SUPPLIER_COLUMNS: &str = "id::text AS id, name, contact_person, phone, email, address, \
     created_at::text AS created_at, updated_at::text AS updated_at";

pub struct SuppliersServiceImpl {
    pool: PgPool,
}

impl SuppliersServiceImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn required_name(input: &SupplierInput) -> Result<&str, Status> {
    non_empty(&input.name).ok_or_else(|| Status::invalid_argument("name is required"))
}

#[tonic::async_trait]
impl SuppliersService for SuppliersServiceImpl {
    async fn list_suppliers(
        &self,
        request: Request<ListSuppliersRequest>,
    ) -> Result<Response<ListSuppliersResponse>, Status> {
        let req = request.into_inner();
        let page = PageParams::from_request(req.page.as_ref());
        let filter = "WHERE ($1::text IS NULL OR name ILIKE $1 OR contact_person ILIKE $1 \
             OR phone ILIKE $1)";

        let (count,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM suppliers {}", filter))
            .bind(&page.search)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::from)?;

        let suppliers: Vec<SupplierModel> = sqlx::query_as(&format!(
            "SELECT {} FROM suppliers {} ORDER BY name ASC LIMIT $2 OFFSET $3",
            SUPPLIER_COLUMNS, filter
        ))
        .bind(&page.search)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(Response::new(ListSuppliersResponse {
            suppliers: suppliers.iter().map(SupplierModel::to_proto).collect(),
            page_info: Some(page.page_info(count)),
        }))
    }

    async fn get_supplier(
        &self,
        request: Request<IdRequest>,
    ) -> Result<Response<SupplierResponse>, Status> {
        let id = parse_id(&request.into_inner().id, "id")?;

        let supplier: Option<SupplierModel> =
            sqlx::query_as(&format!("SELECT {} FROM suppliers WHERE id = $1", SUPPLIER_COLUMNS))
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(AppError::from)?;

        supplier
            .map(|s| {
                Response::new(SupplierResponse {
                    supplier: Some(s.to_proto()),
                })
            })
            .ok_or_else(|| Status::not_found("Supplier not found"))
    }

    async fn create_supplier(
        &self,
        request: Request<CreateSupplierRequest>,
    ) -> Result<Response<SupplierResponse>, Status> {
        let input = request
            .into_inner()
            .supplier
            .ok_or_else(|| Status::invalid_argument("supplier is required"))?;
        let name = required_name(&input)?;

        let supplier: SupplierModel = sqlx::query_as(&format!(
            "INSERT INTO suppliers (name, contact_person, phone, email, address) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {}",
            SUPPLIER_COLUMNS
        ))
        .bind(name)
        .bind(non_empty(&input.contact_person))
        .bind(non_empty(&input.phone))
        .bind(non_empty(&input.email))
        .bind(non_empty(&input.address))
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)?;

        tracing::info!("Created supplier: id={}", supplier.id);
        Ok(Response::new(SupplierResponse {
            supplier: Some(supplier.to_proto()),
        }))
    }

    async fn update_supplier(
        &self,
        request: Request<UpdateSupplierRequest>,
    ) -> Result<Response<SupplierResponse>, Status> {
        let req = request.into_inner();
        let id = parse_id(&req.id, "id")?;
        let input = req
            .supplier
            .ok_or_else(|| Status::invalid_argument("supplier is required"))?;
        let name = required_name(&input)?;

        let supplier: Option<SupplierModel> = sqlx::query_as(&format!(
            "UPDATE suppliers SET name = $1, contact_person = $2, phone = $3, email = $4, \
             address = $5, updated_at = NOW() WHERE id = $6 RETURNING {}",
            SUPPLIER_COLUMNS
        ))
        .bind(name)
        .bind(non_empty(&input.contact_person))
        .bind(non_empty(&input.phone))
        .bind(non_empty(&input.email))
        .bind(non_empty(&input.address))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::from)?;

        supplier
            .map(|s| {
                Response::new(SupplierResponse {
                    supplier: Some(s.to_proto()),
                })
            })
            .ok_or_else(|| Status::not_found("Supplier not found"))
    }

    async fn delete_supplier(
        &self,
        request: Request<IdRequest>,
    ) -> Result<Response<Empty>, Status> {
        let id = parse_id(&request.into_inner().id, "id")?;

        // Fails with InUse while purchases still reference the supplier.
        let result = sqlx::query("DELETE FROM suppliers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected() == 0 {
            return Err(Status::not_found("Supplier not found"));
        }

        tracing::info!("Deleted supplier: id={}", id);
        Ok(Response::new(Empty {}))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_name_trims() {
        let input = SupplierInput {
            name: "  PT Kimia Farma ".into(),
            ..Default::default()
        };
        assert_eq!(required_name(&input).unwrap(), "PT Kimia Farma");

        let blank = SupplierInput::default();
        assert_eq!(
            required_name(&blank).unwrap_err().code(),
            tonic::Code::InvalidArgument
        );
    }
}
