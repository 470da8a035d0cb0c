use std::sync::Arc;

use rust_decimal::Decimal;
use sqlx::types::Json;
use sqlx::PgPool;
use tonic::{Request, Response, Status};
use uuid::Uuid;

use crate::db::PageParams;
use crate::domain::pricing::{derive_conversions, parse_amount, parse_rate};
use crate::domain::UnitConversion;
use crate::error::{AppError, AppResult};
use crate::models::{conversion_to_proto, ItemModel, ITEM_SELECT};
use crate::proto::common::{Empty, IdRequest};
use crate::proto::items::items_service_server::ItemsService;
use crate::proto::items::{
    CreateItemRequest, ItemInput, ItemResponse, ListItemsRequest, ListItemsResponse,
    PreviewPricingRequest, PreviewPricingResponse, UnitConversion as UnitConversionProto,
    UpdateItemRequest, UploadItemImageRequest,
};
use crate::services::{non_empty, parse_id, parse_optional_id};
use crate::storage::{item_image_key, StorageBackend, MAX_IMAGE_BYTES};

/// Validated item fields, with conversion prices already derived.
struct ItemFields<'a> {
    code: Option<&'a str>,
    barcode: Option<&'a str>,
    name: &'a str,
    category_id: Option<Uuid>,
    type_id: Option<Uuid>,
    base_unit_id: Option<Uuid>,
    base_price: Decimal,
    sell_price: Decimal,
    stock: i64,
    min_stock: i64,
    description: Option<&'a str>,
    unit_conversions: Vec<UnitConversion>,
}

pub struct ItemsServiceImpl {
    pool: PgPool,
    storage: Option<Arc<dyn StorageBackend>>,
}

impl ItemsServiceImpl {
    pub fn new(pool: PgPool, storage: Option<Arc<dyn StorageBackend>>) -> Self {
        Self { pool, storage }
    }

    async fn fetch_item(&self, id: Uuid) -> AppResult<Option<ItemModel>> {
        let sql = format!("{} WHERE i.id = $1", ITEM_SELECT);
        Ok(sqlx::query_as(&sql).bind(id).fetch_optional(&self.pool).await?)
    }

    async fn base_unit_name(&self, base_unit_id: Option<Uuid>) -> AppResult<Option<String>> {
        let Some(id) = base_unit_id else {
            return Ok(None);
        };
        let name: Option<String> = sqlx::query_scalar("SELECT name FROM units WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        name.map(Some)
            .ok_or_else(|| AppError::InvalidInput("base unit not found".to_string()))
    }

    async fn parse_input<'a>(&self, input: &'a ItemInput) -> Result<ItemFields<'a>, Status> {
        let name = non_empty(&input.name).ok_or_else(|| Status::invalid_argument("name is required"))?;
        if input.stock < 0 || input.min_stock < 0 {
            return Err(Status::invalid_argument("stock and min_stock must not be negative"));
        }

        let base_unit_id = parse_optional_id(&input.base_unit_id, "base_unit_id")?;
        let base_price = parse_amount("base_price", &input.base_price).map_err(AppError::from)?;
        let sell_price = parse_amount("sell_price", &input.sell_price).map_err(AppError::from)?;
        let base_unit_name = self.base_unit_name(base_unit_id).await?;
        let unit_conversions = derive_conversions(
            base_price,
            sell_price,
            base_unit_name.as_deref(),
            conversions_from_proto(&input.unit_conversions)?,
        )
        .map_err(AppError::from)?;

        Ok(ItemFields {
            code: non_empty(&input.code),
            barcode: non_empty(&input.barcode),
            name,
            category_id: parse_optional_id(&input.category_id, "category_id")?,
            type_id: parse_optional_id(&input.type_id, "type_id")?,
            base_unit_id,
            base_price,
            sell_price,
            stock: input.stock,
            min_stock: input.min_stock,
            description: non_empty(&input.description),
            unit_conversions,
        })
    }

    async fn delete_image_quietly(&self, key: &str) {
        if let Some(storage) = &self.storage {
            if let Err(e) = storage.delete(key).await {
                tracing::warn!("Failed to delete image {}: {}", key, e);
            }
        }
    }
}

fn conversions_from_proto(conversions: &[UnitConversionProto]) -> Result<Vec<UnitConversion>, Status> {
    conversions
        .iter()
        .map(|c| {
            let rate = parse_rate(&c.unit_name, &c.conversion_rate).map_err(AppError::from)?;
            Ok(UnitConversion {
                unit_name: c.unit_name.clone(),
                to_unit_id: non_empty(&c.to_unit_id).map(str::to_string),
                conversion_rate: rate,
                base_price: Decimal::ZERO,
                sell_price: Decimal::ZERO,
            })
        })
        .collect()
}

fn image_bytes(req: UploadItemImageRequest) -> Result<(Vec<u8>, String), Status> {
    let data = if !req.content.is_empty() {
        req.content
    } else if !req.content_base64.is_empty() {
        base64::Engine::decode(&base64::engine::general_purpose::STANDARD, &req.content_base64)
            .map_err(|e| Status::invalid_argument(format!("Invalid base64: {}", e)))?
    } else {
        return Err(Status::invalid_argument("No content or content_base64 provided"));
    };
    if data.len() > MAX_IMAGE_BYTES {
        return Err(Status::invalid_argument(format!(
            "image exceeds {} bytes",
            MAX_IMAGE_BYTES
        )));
    }
    Ok((data, req.content_type))
}

#[tonic::async_trait]
impl ItemsService for ItemsServiceImpl {
    async fn create_item(
        &self,
        request: Request<CreateItemRequest>,
    ) -> Result<Response<ItemResponse>, Status> {
        let req = request.into_inner();
        let input = req.item.ok_or_else(|| Status::invalid_argument("item is required"))?;
        let fields = self.parse_input(&input).await?;

        let id: Uuid = sqlx::query_scalar(
            "INSERT INTO items (code, barcode, name, category_id, type_id, base_unit_id, \
             base_price, sell_price, stock, min_stock, description, unit_conversions) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12) RETURNING id",
        )
        .bind(fields.code)
        .bind(fields.barcode)
        .bind(fields.name)
        .bind(fields.category_id)
        .bind(fields.type_id)
        .bind(fields.base_unit_id)
        .bind(fields.base_price)
        .bind(fields.sell_price)
        .bind(fields.stock)
        .bind(fields.min_stock)
        .bind(fields.description)
        .bind(Json(&fields.unit_conversions))
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)?;

        tracing::info!(
            "Created item: id={}, name={}, conversions={}",
            id,
            fields.name,
            fields.unit_conversions.len()
        );

        let item = self
            .fetch_item(id)
            .await?
            .ok_or_else(|| Status::internal("Created item could not be read back"))?;
        Ok(Response::new(ItemResponse {
            item: Some(item.to_proto()),
        }))
    }

    async fn get_item(
        &self,
        request: Request<IdRequest>,
    ) -> Result<Response<ItemResponse>, Status> {
        let id = parse_id(&request.into_inner().id, "id")?;

        match self.fetch_item(id).await? {
            Some(item) => Ok(Response::new(ItemResponse {
                item: Some(item.to_proto()),
            })),
            None => Err(Status::not_found("Item not found")),
        }
    }

    async fn update_item(
        &self,
        request: Request<UpdateItemRequest>,
    ) -> Result<Response<ItemResponse>, Status> {
        let req = request.into_inner();
        let id = parse_id(&req.id, "id")?;
        let input = req.item.ok_or_else(|| Status::invalid_argument("item is required"))?;
        let fields = self.parse_input(&input).await?;

        // Stock only moves through purchases; it is not part of the update.
        let rows_affected = sqlx::query(
            "UPDATE items SET code = $1, barcode = $2, name = $3, category_id = $4, type_id = $5, \
             base_unit_id = $6, base_price = $7, sell_price = $8, min_stock = $9, \
             description = $10, unit_conversions = $11, updated_at = NOW() \
             WHERE id = $12",
        )
        .bind(fields.code)
        .bind(fields.barcode)
        .bind(fields.name)
        .bind(fields.category_id)
        .bind(fields.type_id)
        .bind(fields.base_unit_id)
        .bind(fields.base_price)
        .bind(fields.sell_price)
        .bind(fields.min_stock)
        .bind(fields.description)
        .bind(Json(&fields.unit_conversions))
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(AppError::from)?
        .rows_affected();

        if rows_affected == 0 {
            return Err(Status::not_found("Item not found"));
        }

        let item = self
            .fetch_item(id)
            .await?
            .ok_or_else(|| Status::not_found("Item not found"))?;
        Ok(Response::new(ItemResponse {
            item: Some(item.to_proto()),
        }))
    }

    async fn delete_item(
        &self,
        request: Request<IdRequest>,
    ) -> Result<Response<Empty>, Status> {
        let id = parse_id(&request.into_inner().id, "id")?;

        let deleted: Option<(Option<String>,)> =
            sqlx::query_as("DELETE FROM items WHERE id = $1 RETURNING image_key")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(AppError::from)?;

        let (image_key,) = deleted.ok_or_else(|| Status::not_found("Item not found"))?;
        if let Some(key) = image_key {
            self.delete_image_quietly(&key).await;
        }

        tracing::info!("Deleted item: id={}", id);
        Ok(Response::new(Empty {}))
    }

    async fn list_items(
        &self,
        request: Request<ListItemsRequest>,
    ) -> Result<Response<ListItemsResponse>, Status> {
        let req = request.into_inner();
        let page = PageParams::from_request(req.page.as_ref());
        let category_id = parse_optional_id(&req.category_id, "category_id")?;
        let type_id = parse_optional_id(&req.type_id, "type_id")?;

        let filter = "WHERE ($1::text IS NULL OR i.name ILIKE $1 OR i.code ILIKE $1 OR i.barcode ILIKE $1) \
             AND ($2::uuid IS NULL OR i.category_id = $2) \
             AND ($3::uuid IS NULL OR i.type_id = $3) \
             AND (NOT $4 OR i.stock <= i.min_stock)";

        let (count,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM items i {}", filter))
            .bind(&page.search)
            .bind(category_id)
            .bind(type_id)
            .bind(req.low_stock_only)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::from)?;

        let items: Vec<ItemModel> = sqlx::query_as(&format!(
            "{} {} ORDER BY i.name ASC LIMIT $5 OFFSET $6",
            ITEM_SELECT, filter
        ))
        .bind(&page.search)
        .bind(category_id)
        .bind(type_id)
        .bind(req.low_stock_only)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(Response::new(ListItemsResponse {
            items: items.iter().map(ItemModel::to_proto).collect(),
            page_info: Some(page.page_info(count)),
        }))
    }

    async fn preview_pricing(
        &self,
        request: Request<PreviewPricingRequest>,
    ) -> Result<Response<PreviewPricingResponse>, Status> {
        let req = request.into_inner();
        let base_price = parse_amount("base_price", &req.base_price).map_err(AppError::from)?;
        let sell_price = parse_amount("sell_price", &req.sell_price).map_err(AppError::from)?;

        let derived = derive_conversions(
            base_price,
            sell_price,
            non_empty(&req.base_unit_name),
            conversions_from_proto(&req.unit_conversions)?,
        )
        .map_err(AppError::from)?;

        Ok(Response::new(PreviewPricingResponse {
            unit_conversions: derived.iter().map(conversion_to_proto).collect(),
        }))
    }

    async fn upload_item_image(
        &self,
        request: Request<UploadItemImageRequest>,
    ) -> Result<Response<ItemResponse>, Status> {
        let storage = self.storage.clone().ok_or(AppError::StorageDisabled)?;
        let req = request.into_inner();
        let id = parse_id(&req.item_id, "item_id")?;
        let (data, content_type) = image_bytes(req)?;

        let existing: Option<(Option<String>,)> =
            sqlx::query_as("SELECT image_key FROM items WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(AppError::from)?;
        let (old_key,) = existing.ok_or_else(|| Status::not_found("Item not found"))?;

        let key = item_image_key(&id.to_string(), &content_type)?;
        storage.upload(&key, &data, &content_type).await?;
        let url = storage.public_url(&key);

        let updated = sqlx::query(
            "UPDATE items SET image_url = $1, image_key = $2, updated_at = NOW() WHERE id = $3",
        )
        .bind(&url)
        .bind(&key)
        .bind(id)
        .execute(&self.pool)
        .await;

        if let Err(e) = updated {
            self.delete_image_quietly(&key).await;
            return Err(AppError::from(e).into());
        }
        if let Some(old_key) = old_key {
            self.delete_image_quietly(&old_key).await;
        }

        tracing::info!("Item image uploaded: id={}, key={}", id, key);

        let item = self
            .fetch_item(id)
            .await?
            .ok_or_else(|| Status::not_found("Item not found"))?;
        Ok(Response::new(ItemResponse {
            item: Some(item.to_proto()),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions_from_proto_parses_rates() {
        let protos = vec![UnitConversionProto {
            unit_name: "Box".into(),
            to_unit_id: String::new(),
            conversion_rate: "100".into(),
            base_price: "999".into(),
            sell_price: "999".into(),
        }];
        let parsed = conversions_from_proto(&protos).unwrap();
        assert_eq!(parsed[0].conversion_rate, Decimal::from(100));
        assert_eq!(parsed[0].base_price, Decimal::ZERO);
        assert_eq!(parsed[0].to_unit_id, None);
    }

    #[test]
    fn test_conversions_from_proto_rejects_garbage_rate() {
        let protos = vec![UnitConversionProto {
            unit_name: "Box".into(),
            conversion_rate: "ten".into(),
            ..Default::default()
        }];
        let err = conversions_from_proto(&protos).unwrap_err();
        assert_eq!(err.code(), tonic::Code::InvalidArgument);
    }

    #[test]
    fn test_image_bytes_sources() {
        let raw = UploadItemImageRequest {
            item_id: String::new(),
            content: vec![1, 2, 3],
            content_type: "image/png".into(),
            content_base64: String::new(),
        };
        assert_eq!(image_bytes(raw).unwrap().0, vec![1, 2, 3]);

        let encoded = UploadItemImageRequest {
            content_base64: "AQID".into(),
            content_type: "image/png".into(),
            ..Default::default()
        };
        assert_eq!(image_bytes(encoded).unwrap().0, vec![1, 2, 3]);

        let empty = UploadItemImageRequest::default();
        assert_eq!(image_bytes(empty).unwrap_err().code(), tonic::Code::InvalidArgument);
    }
}
