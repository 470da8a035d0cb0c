use sqlx::PgPool;
use tonic::{Request, Response, Status};

use crate::cache::LookupCache;
use crate::db::PageParams;
use crate::error::{AppError, AppResult};
use crate::models::{table_name, MasterRecordModel};
use crate::proto::common::Empty;
use crate::proto::master_data::master_data_service_server::MasterDataService;
use crate::proto::master_data::{
    CreateRecordRequest, DeleteRecordRequest, ListOptionsRequest, ListOptionsResponse,
    ListRecordsRequest, ListRecordsResponse, MasterTable, RecordResponse, UpdateRecordRequest,
};
use crate::services::{non_empty, parse_id};

const RECORD_COLUMNS: &str =
    "id::text AS id, name, description, created_at::text AS created_at, updated_at::text AS updated_at";

/// CRUD for the lookup tables that share the `{id, name, description}` shape.
pub struct MasterDataServiceImpl {
    pool: PgPool,
    cache: LookupCache,
}

impl MasterDataServiceImpl {
    pub fn new(pool: PgPool, cache: LookupCache) -> Self {
        Self { pool, cache }
    }

    fn resolve(table: MasterTable) -> Result<&'static str, Status> {
        table_name(table).ok_or_else(|| Status::invalid_argument("table is required"))
    }

    async fn load_options(&self, table: &'static str) -> AppResult<Vec<MasterRecordModel>> {
        let sql = format!("SELECT {} FROM {} ORDER BY name ASC", RECORD_COLUMNS, table);
        Ok(sqlx::query_as(&sql).fetch_all(&self.pool).await?)
    }
}

#[tonic::async_trait]
impl MasterDataService for MasterDataServiceImpl {
    async fn list_records(
        &self,
        request: Request<ListRecordsRequest>,
    ) -> Result<Response<ListRecordsResponse>, Status> {
        let req = request.into_inner();
        let table = Self::resolve(req.table())?;
        let page = PageParams::from_request(req.page.as_ref());

        let (count,): (i64,) = sqlx::query_as(&format!(
            "SELECT COUNT(*) FROM {} WHERE ($1::text IS NULL OR name ILIKE $1 OR description ILIKE $1)",
            table
        ))
        .bind(&page.search)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)?;

        let records: Vec<MasterRecordModel> = sqlx::query_as(&format!(
            "SELECT {} FROM {} \
             WHERE ($1::text IS NULL OR name ILIKE $1 OR description ILIKE $1) \
             ORDER BY name ASC LIMIT $2 OFFSET $3",
            RECORD_COLUMNS, table
        ))
        .bind(&page.search)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(Response::new(ListRecordsResponse {
            records: records.iter().map(MasterRecordModel::to_proto).collect(),
            page_info: Some(page.page_info(count)),
        }))
    }

    async fn list_options(
        &self,
        request: Request<ListOptionsRequest>,
    ) -> Result<Response<ListOptionsResponse>, Status> {
        let req = request.into_inner();
        let master_table = req.table();
        let table = Self::resolve(master_table)?;

        let records = self
            .cache
            .get_or_load(master_table, || self.load_options(table))
            .await?;

        Ok(Response::new(ListOptionsResponse {
            records: records.iter().map(MasterRecordModel::to_proto).collect(),
        }))
    }

    async fn create_record(
        &self,
        request: Request<CreateRecordRequest>,
    ) -> Result<Response<RecordResponse>, Status> {
        let req = request.into_inner();
        let master_table = req.table();
        let table = Self::resolve(master_table)?;
        let name = non_empty(&req.name).ok_or_else(|| Status::invalid_argument("name is required"))?;

        let record: MasterRecordModel = sqlx::query_as(&format!(
            "INSERT INTO {} (name, description) VALUES ($1, $2) RETURNING {}",
            table, RECORD_COLUMNS
        ))
        .bind(name)
        .bind(non_empty(&req.description))
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)?;

        self.cache.invalidate(master_table).await;
        tracing::info!("Created {} record: id={}, name={}", table, record.id, record.name);

        Ok(Response::new(RecordResponse {
            record: Some(record.to_proto()),
        }))
    }

    async fn update_record(
        &self,
        request: Request<UpdateRecordRequest>,
    ) -> Result<Response<RecordResponse>, Status> {
        let req = request.into_inner();
        let master_table = req.table();
        let table = Self::resolve(master_table)?;
        let id = parse_id(&req.id, "id")?;
        let name = non_empty(&req.name).ok_or_else(|| Status::invalid_argument("name is required"))?;

        let record: Option<MasterRecordModel> = sqlx::query_as(&format!(
            "UPDATE {} SET name = $1, description = $2, updated_at = NOW() WHERE id = $3 RETURNING {}",
            table, RECORD_COLUMNS
        ))
        .bind(name)
        .bind(non_empty(&req.description))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::from)?;

        let record = record.ok_or_else(|| Status::not_found(format!("{} record not found", table)))?;
        self.cache.invalidate(master_table).await;

        Ok(Response::new(RecordResponse {
            record: Some(record.to_proto()),
        }))
    }

    async fn delete_record(
        &self,
        request: Request<DeleteRecordRequest>,
    ) -> Result<Response<Empty>, Status> {
        let req = request.into_inner();
        let master_table = req.table();
        let table = Self::resolve(master_table)?;
        let id = parse_id(&req.id, "id")?;

        let rows_affected = sqlx::query(&format!("DELETE FROM {} WHERE id = $1", table))
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| match AppError::from(e) {
                AppError::InUse(_) => AppError::InUse(format!(
                    "{} record is still used by items",
                    table
                )),
                other => other,
            })?
            .rows_affected();

        if rows_affected == 0 {
            return Err(Status::not_found(format!("{} record not found", table)));
        }

        self.cache.invalidate(master_table).await;
        tracing::info!("Deleted {} record: id={}", table, id);
        Ok(Response::new(Empty {}))
    }
}
