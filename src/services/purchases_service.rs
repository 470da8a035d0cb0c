use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::{PgPool, Postgres, Transaction};
use tonic::{Request, Response, Status};
use uuid::Uuid;

use crate::db::stock::{lock_items, write_stock_changes};
use crate::db::PageParams;
use crate::domain::pricing::{line_subtotal, parse_amount, round_price};
use crate::domain::stock::{aggregate_by_item, apply_receipt, apply_rollback, to_base_quantity};
use crate::error::{AppError, AppResult};
use crate::models::{ItemStockRow, PurchaseLineModel, PurchaseModel, PURCHASE_LINE_SELECT, PURCHASE_SELECT};
use crate::proto::common::IdRequest;
use crate::proto::purchases::purchases_service_server::PurchasesService;
use crate::proto::purchases::{
    CreatePurchaseRequest, DeletePurchaseResponse, ListPurchasesRequest, ListPurchasesResponse,
    PurchaseLineInput, PurchaseResponse, UpdatePurchasePaymentRequest,
};
use crate::services::{authenticated_user, non_empty, parse_date, parse_id, parse_optional_id};

pub const PAYMENT_STATUSES: [&str; 3] = ["unpaid", "partial", "paid"];

/// Sums the stored base quantities to take back out per item. Lines whose
/// item is gone are counted as skipped.
fn plan_rollback(
    lines: &[(Option<Uuid>, i64)],
    locked: &HashMap<Uuid, ItemStockRow>,
) -> (BTreeMap<Uuid, i64>, usize) {
    let mut skipped = 0;
    let returned: Vec<(Uuid, i64)> = lines
        .iter()
        .filter_map(|(item_id, base_quantity)| match item_id {
            Some(id) if locked.contains_key(id) => Some((*id, *base_quantity)),
            _ => {
                skipped += 1;
                None
            }
        })
        .collect();
    (aggregate_by_item(returned), skipped)
}

pub struct PurchasesServiceImpl {
    pool: PgPool,
}

/// A purchase line after field validation, before unit conversion.
#[derive(Debug)]
struct LineInput<'a> {
    item_id: Uuid,
    batch_no: Option<&'a str>,
    expiry_date: Option<NaiveDate>,
    quantity: i64,
    unit_name: &'a str,
    price: Decimal,
    discount: Decimal,
}

struct HeaderInput<'a> {
    supplier_id: Option<Uuid>,
    invoice_number: &'a str,
    purchase_date: Option<NaiveDate>,
    due_date: Option<NaiveDate>,
    payment_status: &'static str,
    payment_method: Option<&'a str>,
    paid_amount: Decimal,
    notes: Option<&'a str>,
    created_by: Option<Uuid>,
}

fn parse_header(
    req: &CreatePurchaseRequest,
    created_by: Option<Uuid>,
) -> Result<HeaderInput<'_>, Status> {
    Ok(HeaderInput {
        supplier_id: parse_optional_id(&req.supplier_id, "supplier_id")?,
        invoice_number: non_empty(&req.invoice_number)
            .ok_or_else(|| Status::invalid_argument("invoice_number is required"))?,
        purchase_date: parse_date(&req.purchase_date, "purchase_date")?,
        due_date: parse_date(&req.due_date, "due_date")?,
        payment_status: parse_payment_status(&req.payment_status, Some("unpaid"))?,
        payment_method: non_empty(&req.payment_method),
        paid_amount: parse_amount("paid_amount", &req.paid_amount).map_err(AppError::from)?,
        notes: non_empty(&req.notes),
        created_by,
    })
}

fn parse_payment_status(value: &str, default: Option<&'static str>) -> Result<&'static str, Status> {
    let normalized = value.trim().to_ascii_lowercase();
    if normalized.is_empty() {
        return default.ok_or_else(|| Status::invalid_argument("payment_status is required"));
    }
    PAYMENT_STATUSES
        .iter()
        .find(|s| **s == normalized)
        .copied()
        .ok_or_else(|| {
            Status::invalid_argument(format!(
                "payment_status must be one of {}, got '{}'",
                PAYMENT_STATUSES.join(", "),
                normalized
            ))
        })
}

fn parse_line(index: usize, line: &PurchaseLineInput) -> Result<LineInput<'_>, Status> {
    let item_id = parse_id(&line.item_id, &format!("lines[{}].item_id", index))?;
    if line.quantity <= 0 {
        return Err(Status::invalid_argument(format!(
            "lines[{}].quantity must be greater than zero",
            index
        )));
    }
    Ok(LineInput {
        item_id,
        batch_no: non_empty(&line.batch_no),
        expiry_date: parse_date(&line.expiry_date, "expiry_date")?,
        quantity: line.quantity,
        unit_name: line.unit_name.trim(),
        price: parse_amount("price", &line.price).map_err(AppError::from)?,
        discount: parse_amount("discount", &line.discount).map_err(AppError::from)?,
    })
}

impl PurchasesServiceImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_purchase(&self, id: Uuid) -> AppResult<Option<PurchaseResponse>> {
        let header: Option<PurchaseModel> =
            sqlx::query_as(&format!("{} WHERE p.id = $1", PURCHASE_SELECT))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        let Some(header) = header else {
            return Ok(None);
        };

        let lines: Vec<PurchaseLineModel> = sqlx::query_as(&format!(
            "{} WHERE pi.purchase_id = $1 ORDER BY pi.created_at ASC, pi.id ASC",
            PURCHASE_LINE_SELECT
        ))
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        let lines = lines.iter().map(PurchaseLineModel::to_proto).collect();
        Ok(Some(PurchaseResponse {
            purchase: Some(header.to_proto(lines)),
        }))
    }

    /// Inserts header and lines and adds the received base quantities to stock.
    async fn insert_purchase(
        tx: &mut Transaction<'_, Postgres>,
        header: &HeaderInput<'_>,
        lines: &[LineInput<'_>],
    ) -> AppResult<Uuid> {
        let item_ids: Vec<Uuid> = lines.iter().map(|l| l.item_id).collect();
        let locked = lock_items(&mut **tx, &item_ids).await?;

        let mut received = Vec::with_capacity(lines.len());
        let mut base_quantities = Vec::with_capacity(lines.len());
        let mut subtotals = Vec::with_capacity(lines.len());
        let mut total = Decimal::ZERO;
        for line in lines {
            let item = locked
                .get(&line.item_id)
                .ok_or_else(|| AppError::NotFound(format!("item {} not found", line.item_id)))?;
            let base_quantity = to_base_quantity(
                line.quantity,
                line.unit_name,
                item.base_unit_name.as_deref(),
                &item.unit_conversions,
            )?;
            let subtotal = line_subtotal(line.quantity, line.price, line.discount)?;
            total += subtotal;
            received.push((line.item_id, base_quantity));
            base_quantities.push(base_quantity);
            subtotals.push(subtotal);
        }

        let purchase_id: Uuid = sqlx::query_scalar(
            "INSERT INTO purchases (supplier_id, invoice_number, purchase_date, due_date, total, \
             payment_status, payment_method, paid_amount, notes, created_by) \
             VALUES ($1, $2, COALESCE($3, CURRENT_DATE), $4, $5, $6, $7, $8, $9, $10) RETURNING id",
        )
        .bind(header.supplier_id)
        .bind(header.invoice_number)
        .bind(header.purchase_date)
        .bind(header.due_date)
        .bind(round_price(total))
        .bind(header.payment_status)
        .bind(header.payment_method)
        .bind(header.paid_amount)
        .bind(header.notes)
        .bind(header.created_by)
        .fetch_one(&mut **tx)
        .await?;

        let rows = lines.iter().zip(&subtotals).zip(&base_quantities);
        for ((line, subtotal), base_quantity) in rows {
            let unit_name = match line.unit_name {
                "" => locked
                    .get(&line.item_id)
                    .and_then(|i| i.base_unit_name.clone())
                    .unwrap_or_default(),
                name => name.to_string(),
            };
            sqlx::query(
                "INSERT INTO purchase_items (purchase_id, item_id, batch_no, expiry_date, \
                 quantity, unit_name, base_quantity, price, discount, subtotal) \
                 VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)",
            )
            .bind(purchase_id)
            .bind(line.item_id)
            .bind(line.batch_no)
            .bind(line.expiry_date)
            .bind(line.quantity)
            .bind(unit_name)
            .bind(base_quantity)
            .bind(line.price)
            .bind(line.discount)
            .bind(subtotal)
            .execute(&mut **tx)
            .await?;
        }

        let deltas = aggregate_by_item(received);
        write_stock_changes(&mut **tx, &locked, &deltas, apply_receipt).await?;
        Ok(purchase_id)
    }

    /// Takes the purchase's base quantities back out of stock and deletes it.
    /// Returns `(items_adjusted, lines_skipped)`.
    async fn remove_purchase(
        tx: &mut Transaction<'_, Postgres>,
        purchase_id: Uuid,
    ) -> AppResult<(usize, usize)> {
        let exists: Option<Uuid> =
            sqlx::query_scalar("SELECT id FROM purchases WHERE id = $1 FOR UPDATE")
                .bind(purchase_id)
                .fetch_optional(&mut **tx)
                .await?;
        if exists.is_none() {
            return Err(AppError::NotFound("Purchase not found".to_string()));
        }

        let lines: Vec<(Option<Uuid>, i64)> = sqlx::query_as(
            "SELECT item_id, base_quantity FROM purchase_items WHERE purchase_id = $1",
        )
        .bind(purchase_id)
        .fetch_all(&mut **tx)
        .await?;

        let item_ids: Vec<Uuid> = lines.iter().filter_map(|(id, _)| *id).collect();
        let locked = lock_items(&mut **tx, &item_ids).await?;

        let (deltas, skipped) = plan_rollback(&lines, &locked);
        if skipped > 0 {
            tracing::warn!(
                "Purchase {}: {} line(s) reference deleted items, stock not adjusted",
                purchase_id,
                skipped
            );
        }
        let adjusted = write_stock_changes(&mut **tx, &locked, &deltas, apply_rollback).await?;

        sqlx::query("DELETE FROM purchase_items WHERE purchase_id = $1")
            .bind(purchase_id)
            .execute(&mut **tx)
            .await?;
        sqlx::query("DELETE FROM purchases WHERE id = $1")
            .bind(purchase_id)
            .execute(&mut **tx)
            .await?;

        Ok((adjusted, skipped))
    }
}

#[tonic::async_trait]
impl PurchasesService for PurchasesServiceImpl {
    async fn create_purchase(
        &self,
        request: Request<CreatePurchaseRequest>,
    ) -> Result<Response<PurchaseResponse>, Status> {
        let created_by = authenticated_user(&request)
            .ok()
            .and_then(|user| Uuid::parse_str(&user.user_id).ok());
        let req = request.into_inner();

        let header = parse_header(&req, created_by)?;
        if req.lines.is_empty() {
            return Err(Status::invalid_argument("at least one line is required"));
        }
        let lines = req
            .lines
            .iter()
            .enumerate()
            .map(|(i, line)| parse_line(i, line))
            .collect::<Result<Vec<_>, Status>>()?;

        let mut tx = self.pool.begin().await.map_err(AppError::from)?;
        let purchase_id = Self::insert_purchase(&mut tx, &header, &lines).await?;
        tx.commit().await.map_err(AppError::from)?;

        tracing::info!(
            "Created purchase: id={}, invoice={}, lines={}",
            purchase_id,
            header.invoice_number,
            lines.len()
        );

        let purchase = self
            .fetch_purchase(purchase_id)
            .await?
            .ok_or_else(|| Status::internal("Created purchase could not be read back"))?;
        Ok(Response::new(purchase))
    }

    async fn get_purchase(
        &self,
        request: Request<IdRequest>,
    ) -> Result<Response<PurchaseResponse>, Status> {
        let id = parse_id(&request.into_inner().id, "id")?;

        match self.fetch_purchase(id).await? {
            Some(purchase) => Ok(Response::new(purchase)),
            None => Err(Status::not_found("Purchase not found")),
        }
    }

    async fn list_purchases(
        &self,
        request: Request<ListPurchasesRequest>,
    ) -> Result<Response<ListPurchasesResponse>, Status> {
        let req = request.into_inner();
        let page = PageParams::from_request(req.page.as_ref());
        let supplier_id = parse_optional_id(&req.supplier_id, "supplier_id")?;
        let payment_status = match req.payment_status.trim() {
            "" => None,
            status => Some(parse_payment_status(status, None)?),
        };

        let filter = "WHERE ($1::text IS NULL OR p.invoice_number ILIKE $1 OR s.name ILIKE $1) \
             AND ($2::uuid IS NULL OR p.supplier_id = $2) \
             AND ($3::text IS NULL OR p.payment_status = $3)";

        let (count,): (i64,) = sqlx::query_as(&format!(
            "SELECT COUNT(*) FROM purchases p LEFT JOIN suppliers s ON s.id = p.supplier_id {}",
            filter
        ))
        .bind(&page.search)
        .bind(supplier_id)
        .bind(payment_status)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)?;

        let purchases: Vec<PurchaseModel> = sqlx::query_as(&format!(
            "{} {} ORDER BY p.purchase_date DESC, p.created_at DESC LIMIT $4 OFFSET $5",
            PURCHASE_SELECT, filter
        ))
        .bind(&page.search)
        .bind(supplier_id)
        .bind(payment_status)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(Response::new(ListPurchasesResponse {
            purchases: purchases.iter().map(|p| p.to_proto(Vec::new())).collect(),
            page_info: Some(page.page_info(count)),
        }))
    }

    async fn update_purchase_payment(
        &self,
        request: Request<UpdatePurchasePaymentRequest>,
    ) -> Result<Response<PurchaseResponse>, Status> {
        let req = request.into_inner();
        let id = parse_id(&req.id, "id")?;
        let status = parse_payment_status(&req.payment_status, None)?;
        let paid_amount = parse_amount("paid_amount", &req.paid_amount).map_err(AppError::from)?;

        let result = sqlx::query(
            "UPDATE purchases SET payment_status = $1, paid_amount = $2, updated_at = NOW() \
             WHERE id = $3",
        )
        .bind(status)
        .bind(paid_amount)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(AppError::from)?;

        if result.rows_affected() == 0 {
            return Err(Status::not_found("Purchase not found"));
        }
        tracing::info!("Purchase payment updated: id={}, status={}", id, status);

        let purchase = self
            .fetch_purchase(id)
            .await?
            .ok_or_else(|| Status::not_found("Purchase not found"))?;
        Ok(Response::new(purchase))
    }

    async fn delete_purchase(
        &self,
        request: Request<IdRequest>,
    ) -> Result<Response<DeletePurchaseResponse>, Status> {
        let id = parse_id(&request.into_inner().id, "id")?;

        let mut tx = self.pool.begin().await.map_err(AppError::from)?;
        let (adjusted, skipped) = Self::remove_purchase(&mut tx, id).await?;
        tx.commit().await.map_err(AppError::from)?;

        tracing::info!(
            "Deleted purchase: id={}, items_adjusted={}, lines_skipped={}",
            id,
            adjusted,
            skipped
        );
        Ok(Response::new(DeletePurchaseResponse {
            items_adjusted: adjusted as i32,
            lines_skipped: skipped as i32,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn line(item_id: &str, quantity: i64) -> PurchaseLineInput {
        PurchaseLineInput {
            item_id: item_id.to_string(),
            quantity,
            unit_name: " Box ".into(),
            price: "12500".into(),
            discount: "5".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_parse_payment_status() {
        assert_eq!(parse_payment_status("", Some("unpaid")).unwrap(), "unpaid");
        assert_eq!(parse_payment_status(" PAID ", None).unwrap(), "paid");
        assert_eq!(parse_payment_status("partial", None).unwrap(), "partial");
        assert_eq!(
            parse_payment_status("", None).unwrap_err().code(),
            tonic::Code::InvalidArgument
        );
        assert_eq!(
            parse_payment_status("refunded", None).unwrap_err().code(),
            tonic::Code::InvalidArgument
        );
    }

    #[test]
    fn test_parse_line_normalizes() {
        let id = Uuid::new_v4();
        let input = line(&id.to_string(), 3);
        let parsed = parse_line(0, &input).unwrap();
        assert_eq!(parsed.item_id, id);
        assert_eq!(parsed.unit_name, "Box");
        assert_eq!(parsed.price, Decimal::from(12500));
        assert_eq!(parsed.discount, Decimal::from_str("5").unwrap());
        assert_eq!(parsed.batch_no, None);
        assert_eq!(parsed.expiry_date, None);
    }

    #[test]
    fn test_parse_line_rejects_bad_fields() {
        let bad_id = line("not-a-uuid", 1);
        assert_eq!(
            parse_line(0, &bad_id).unwrap_err().code(),
            tonic::Code::InvalidArgument
        );

        let zero = line(&Uuid::new_v4().to_string(), 0);
        let err = parse_line(2, &zero).unwrap_err();
        assert!(err.message().contains("lines[2].quantity"));

        let mut bad_date = line(&Uuid::new_v4().to_string(), 1);
        bad_date.expiry_date = "2026-13-01".into();
        assert!(parse_line(0, &bad_date).is_err());
    }

    fn stock_row(id: Uuid, stock: i64) -> ItemStockRow {
        ItemStockRow {
            id,
            name: "Paracetamol".into(),
            stock,
            base_unit_name: Some("Tablet".into()),
            unit_conversions: sqlx::types::Json(vec![]),
        }
    }

    #[test]
    fn test_plan_rollback_skips_deleted_items() {
        let kept = Uuid::new_v4();
        let locked = HashMap::from([(kept, stock_row(kept, 50))]);
        let lines = vec![(None, 10), (Some(kept), 20)];

        let (deltas, skipped) = plan_rollback(&lines, &locked);
        assert_eq!(skipped, 1);
        assert_eq!(deltas, BTreeMap::from([(kept, 20)]));
    }

    #[test]
    fn test_plan_rollback_skips_items_missing_from_lock() {
        let gone = Uuid::new_v4();
        let lines = vec![(Some(gone), 5)];

        let (deltas, skipped) = plan_rollback(&lines, &HashMap::new());
        assert_eq!(skipped, 1);
        assert!(deltas.is_empty());
    }

    #[test]
    fn test_plan_rollback_sums_lines_per_item() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let locked = HashMap::from([(a, stock_row(a, 0)), (b, stock_row(b, 0))]);
        let lines = vec![(Some(a), 200), (Some(b), 3), (Some(a), 10)];

        let (deltas, skipped) = plan_rollback(&lines, &locked);
        assert_eq!(skipped, 0);
        assert_eq!(deltas, BTreeMap::from([(a, 210), (b, 3)]));
    }
}
