use std::collections::HashMap;

use rust_decimal::Decimal;
use sqlx::PgPool;
use tonic::{Request, Response, Status};

use crate::db::PageParams;
use crate::domain::stock::to_base_quantity;
use crate::error::AppError;
use crate::models::{
    ExpiringBatchRow, LowStockRow, MonthlyTotalRow, SaleUnitTotalRow, SummaryRow, TopSellingRow,
};
use crate::proto::common::Empty;
use crate::proto::dashboard::dashboard_service_server::DashboardService;
use crate::proto::dashboard::{
    ExpiringBatchesRequest, ExpiringBatchesResponse, ListLowStockRequest, ListLowStockResponse,
    MonthlyTrendRequest, MonthlyTrendResponse, SummaryResponse, TopSellingRequest,
    TopSellingResponse,
};

const DEFAULT_TOP_LIMIT: i64 = 10;
const DEFAULT_TOP_DAYS: i32 = 30;
const DEFAULT_TREND_MONTHS: i32 = 6;
const MAX_TREND_MONTHS: i32 = 24;
const DEFAULT_EXPIRY_DAYS: i32 = 90;
const DEFAULT_EXPIRY_LIMIT: i64 = 50;

/// `value` when positive, else `default`, capped at `max`.
fn bounded<T: Ord + Default + Copy>(value: T, default: T, max: T) -> T {
    if value <= T::default() {
        default
    } else {
        value.min(max)
    }
}

/// Converts per-unit sales into base units, sums them per item and keeps the
/// `limit` best sellers. Units that no longer resolve are left out.
fn rank_top_selling(rows: Vec<SaleUnitTotalRow>, limit: usize) -> Vec<TopSellingRow> {
    let mut totals: HashMap<String, TopSellingRow> = HashMap::new();
    for row in rows {
        let base_quantity = match to_base_quantity(
            row.quantity,
            &row.unit_name,
            row.base_unit_name.as_deref(),
            &row.unit_conversions,
        ) {
            Ok(q) => q,
            Err(e) => {
                tracing::warn!(
                    "Top selling: skipping {} {} of item {}: {}",
                    row.quantity,
                    row.unit_name,
                    row.item_id,
                    e
                );
                continue;
            }
        };
        let entry = totals
            .entry(row.item_id.clone())
            .or_insert_with(|| TopSellingRow {
                item_id: row.item_id,
                name: row.name,
                base_unit_name: row.base_unit_name,
                quantity_sold: 0,
                revenue: Decimal::ZERO,
            });
        entry.quantity_sold = entry.quantity_sold.saturating_add(base_quantity);
        entry.revenue += row.revenue;
    }

    let mut ranked: Vec<TopSellingRow> = totals.into_values().collect();
    ranked.sort_by(|a, b| {
        b.quantity_sold
            .cmp(&a.quantity_sold)
            .then_with(|| a.name.cmp(&b.name))
    });
    ranked.truncate(limit);
    ranked
}

pub struct DashboardServiceImpl {
    pool: PgPool,
}

impl DashboardServiceImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[tonic::async_trait]
impl DashboardService for DashboardServiceImpl {
    async fn get_summary(
        &self,
        _request: Request<Empty>,
    ) -> Result<Response<SummaryResponse>, Status> {
        let row: SummaryRow = sqlx::query_as(
            "SELECT \
             (SELECT COUNT(*) FROM items) AS item_count, \
             (SELECT COUNT(*) FROM patients) AS patient_count, \
             (SELECT COUNT(*) FROM doctors) AS doctor_count, \
             (SELECT COUNT(*) FROM suppliers) AS supplier_count, \
             (SELECT COUNT(*) FROM items WHERE stock <= min_stock) AS low_stock_count, \
             (SELECT COALESCE(SUM(stock * base_price), 0)::numeric(20, 2) FROM items) AS inventory_value, \
             (SELECT COALESCE(SUM(total), 0)::numeric(20, 2) FROM purchases \
              WHERE purchase_date >= date_trunc('month', CURRENT_DATE)) AS purchases_this_month, \
             (SELECT COALESCE(SUM(total), 0)::numeric(20, 2) FROM sales \
              WHERE sale_date >= date_trunc('month', CURRENT_DATE)) AS sales_this_month",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(Response::new(SummaryResponse {
            item_count: row.item_count,
            patient_count: row.patient_count,
            doctor_count: row.doctor_count,
            supplier_count: row.supplier_count,
            low_stock_count: row.low_stock_count,
            inventory_value: row.inventory_value.to_string(),
            purchases_this_month: row.purchases_this_month.to_string(),
            sales_this_month: row.sales_this_month.to_string(),
        }))
    }

    async fn list_low_stock_items(
        &self,
        request: Request<ListLowStockRequest>,
    ) -> Result<Response<ListLowStockResponse>, Status> {
        let req = request.into_inner();
        let page = PageParams::from_request(req.page.as_ref());

        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM items i \
             WHERE i.stock <= i.min_stock AND ($1::text IS NULL OR i.name ILIKE $1)",
        )
        .bind(&page.search)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)?;

        let rows: Vec<LowStockRow> = sqlx::query_as(
            "SELECT i.id::text AS item_id, i.name, u.name AS base_unit_name, i.stock, i.min_stock \
             FROM items i LEFT JOIN units u ON u.id = i.base_unit_id \
             WHERE i.stock <= i.min_stock AND ($1::text IS NULL OR i.name ILIKE $1) \
             ORDER BY (i.stock - i.min_stock) ASC, i.name ASC \
             LIMIT $2 OFFSET $3",
        )
        .bind(&page.search)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(Response::new(ListLowStockResponse {
            items: rows.iter().map(LowStockRow::to_proto).collect(),
            page_info: Some(page.page_info(count)),
        }))
    }

    async fn list_top_selling_items(
        &self,
        request: Request<TopSellingRequest>,
    ) -> Result<Response<TopSellingResponse>, Status> {
        let req = request.into_inner();
        let limit = bounded(req.limit as i64, DEFAULT_TOP_LIMIT, 100);
        let days = bounded(req.days, DEFAULT_TOP_DAYS, 3650);

        let rows: Vec<SaleUnitTotalRow> = sqlx::query_as(
            "SELECT i.id::text AS item_id, i.name, u.name AS base_unit_name, i.unit_conversions, \
             si.unit_name, SUM(si.quantity)::bigint AS quantity, \
             COALESCE(SUM(si.subtotal), 0)::numeric(20, 2) AS revenue \
             FROM sale_items si \
             JOIN sales s ON s.id = si.sale_id \
             JOIN items i ON i.id = si.item_id \
             LEFT JOIN units u ON u.id = i.base_unit_id \
             WHERE s.sale_date >= CURRENT_DATE - $1::int \
             GROUP BY i.id, u.name, si.unit_name",
        )
        .bind(days)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::from)?;

        let ranked = rank_top_selling(rows, limit as usize);
        Ok(Response::new(TopSellingResponse {
            items: ranked.iter().map(TopSellingRow::to_proto).collect(),
        }))
    }

    async fn get_monthly_trend(
        &self,
        request: Request<MonthlyTrendRequest>,
    ) -> Result<Response<MonthlyTrendResponse>, Status> {
        let months = bounded(request.into_inner().months, DEFAULT_TREND_MONTHS, MAX_TREND_MONTHS);

        // One row per month, oldest first, including months without activity.
        let rows: Vec<MonthlyTotalRow> = sqlx::query_as(
            "WITH months AS ( \
               SELECT generate_series( \
                 date_trunc('month', CURRENT_DATE) - make_interval(months => $1 - 1), \
                 date_trunc('month', CURRENT_DATE), \
                 interval '1 month')::date AS month \
             ) \
             SELECT to_char(m.month, 'YYYY-MM') AS month, \
             COALESCE((SELECT SUM(p.total) FROM purchases p \
                WHERE date_trunc('month', p.purchase_date)::date = m.month), 0)::numeric(20, 2) AS purchases, \
             COALESCE((SELECT SUM(s.total) FROM sales s \
                WHERE date_trunc('month', s.sale_date)::date = m.month), 0)::numeric(20, 2) AS sales \
             FROM months m ORDER BY m.month ASC",
        )
        .bind(months)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(Response::new(MonthlyTrendResponse {
            months: rows.iter().map(MonthlyTotalRow::to_proto).collect(),
        }))
    }

    async fn list_expiring_batches(
        &self,
        request: Request<ExpiringBatchesRequest>,
    ) -> Result<Response<ExpiringBatchesResponse>, Status> {
        let req = request.into_inner();
        let within_days = bounded(req.within_days, DEFAULT_EXPIRY_DAYS, 3650);
        let limit = bounded(req.limit as i64, DEFAULT_EXPIRY_LIMIT, 500);

        // Already-expired batches are included with a negative days_left.
        let rows: Vec<ExpiringBatchRow> = sqlx::query_as(
            "SELECT p.id::text AS purchase_id, p.invoice_number, \
             pi.item_id::text AS item_id, it.name AS item_name, pi.batch_no, \
             pi.expiry_date::text AS expiry_date, pi.quantity, pi.unit_name, \
             (pi.expiry_date - CURRENT_DATE)::int AS days_left \
             FROM purchase_items pi \
             JOIN purchases p ON p.id = pi.purchase_id \
             LEFT JOIN items it ON it.id = pi.item_id \
             WHERE pi.expiry_date IS NOT NULL \
               AND pi.expiry_date <= CURRENT_DATE + $1::int \
             ORDER BY pi.expiry_date ASC, it.name ASC \
             LIMIT $2",
        )
        .bind(within_days)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(Response::new(ExpiringBatchesResponse {
            batches: rows.iter().map(ExpiringBatchRow::to_proto).collect(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UnitConversion;

    #[test]
    fn test_bounded() {
        assert_eq!(bounded(0, DEFAULT_TREND_MONTHS, MAX_TREND_MONTHS), 6);
        assert_eq!(bounded(-3, DEFAULT_TREND_MONTHS, MAX_TREND_MONTHS), 6);
        assert_eq!(bounded(12, DEFAULT_TREND_MONTHS, MAX_TREND_MONTHS), 12);
        assert_eq!(bounded(120, DEFAULT_TREND_MONTHS, MAX_TREND_MONTHS), 24);
        assert_eq!(bounded(0i64, DEFAULT_TOP_LIMIT, 100), 10);
    }

    fn sold(
        item_id: &str,
        name: &str,
        unit_name: &str,
        quantity: i64,
        revenue: i64,
    ) -> SaleUnitTotalRow {
        SaleUnitTotalRow {
            item_id: item_id.into(),
            name: name.into(),
            base_unit_name: Some("Tablet".into()),
            unit_conversions: sqlx::types::Json(vec![
                UnitConversion::new("Strip", Decimal::from(10)),
                UnitConversion::new("Box", Decimal::from(100)),
            ]),
            unit_name: unit_name.into(),
            quantity,
            revenue: Decimal::from(revenue),
        }
    }

    #[test]
    fn test_rank_top_selling_sums_in_base_units() {
        let rows = vec![
            sold("a", "Amoxicillin", "Box", 1, 90000),
            sold("b", "Paracetamol", "Tablet", 50, 25000),
            sold("b", "Paracetamol", "Strip", 3, 15000),
        ];

        let ranked = rank_top_selling(rows, 10);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].item_id, "a");
        assert_eq!(ranked[0].quantity_sold, 100);
        assert_eq!(ranked[1].item_id, "b");
        assert_eq!(ranked[1].quantity_sold, 80);
        assert_eq!(ranked[1].revenue, Decimal::from(40000));
        assert_eq!(ranked[1].base_unit_name.as_deref(), Some("Tablet"));
    }

    #[test]
    fn test_rank_top_selling_skips_unknown_units_and_truncates() {
        let rows = vec![
            sold("a", "Cetirizine", "Tablet", 5, 500),
            sold("b", "Antacid", "Tablet", 5, 500),
            sold("c", "Vitamin C", "Bottle", 40, 4000),
        ];

        let ranked = rank_top_selling(rows, 1);
        assert_eq!(ranked.len(), 1);
        // Ties are broken by name.
        assert_eq!(ranked[0].name, "Antacid");

        let all = rank_top_selling(vec![sold("c", "Vitamin C", "Bottle", 40, 4000)], 10);
        assert!(all.is_empty());
    }
}
