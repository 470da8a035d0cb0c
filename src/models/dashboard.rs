use rust_decimal::Decimal;
use sqlx::types::Json;
use sqlx::FromRow;

use crate::domain::UnitConversion;

use crate::proto::dashboard::{ExpiringBatch, LowStockItem, MonthlyTotal, TopSellingItem};

#[derive(Debug, Clone, FromRow)]
pub struct SummaryRow {
    pub item_count: i64,
    pub patient_count: i64,
    pub doctor_count: i64,
    pub supplier_count: i64,
    pub low_stock_count: i64,
    pub inventory_value: Decimal,
    pub purchases_this_month: Decimal,
    pub sales_this_month: Decimal,
}

#[derive(Debug, Clone, FromRow)]
pub struct LowStockRow {
    pub item_id: String,
    pub name: String,
    pub base_unit_name: Option<String>,
    pub stock: i64,
    pub min_stock: i64,
}

impl LowStockRow {
    pub fn to_proto(&self) -> LowStockItem {
        LowStockItem {
            item_id: self.item_id.clone(),
            name: self.name.clone(),
            base_unit_name: self.base_unit_name.clone().unwrap_or_default(),
            stock: self.stock,
            min_stock: self.min_stock,
        }
    }
}

/// Sales of one item in one declared unit.
#[derive(Debug, Clone, FromRow)]
pub struct SaleUnitTotalRow {
    pub item_id: String,
    pub name: String,
    pub base_unit_name: Option<String>,
    pub unit_conversions: Json<Vec<UnitConversion>>,
    pub unit_name: String,
    pub quantity: i64,
    pub revenue: Decimal,
}

/// Per-item sales total with the quantity in base units.
#[derive(Debug, Clone, PartialEq)]
pub struct TopSellingRow {
    pub item_id: String,
    pub name: String,
    pub base_unit_name: Option<String>,
    pub quantity_sold: i64,
    pub revenue: Decimal,
}

impl TopSellingRow {
    pub fn to_proto(&self) -> TopSellingItem {
        TopSellingItem {
            item_id: self.item_id.clone(),
            name: self.name.clone(),
            quantity_sold: self.quantity_sold,
            revenue: self.revenue.to_string(),
            base_unit_name: self.base_unit_name.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct MonthlyTotalRow {
    pub month: String,
    pub purchases: Decimal,
    pub sales: Decimal,
}

impl MonthlyTotalRow {
    pub fn to_proto(&self) -> MonthlyTotal {
        MonthlyTotal {
            month: self.month.clone(),
            purchases: self.purchases.to_string(),
            sales: self.sales.to_string(),
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct ExpiringBatchRow {
    pub purchase_id: String,
    pub invoice_number: String,
    pub item_id: Option<String>,
    pub item_name: Option<String>,
    pub batch_no: Option<String>,
    pub expiry_date: String,
    pub quantity: i64,
    pub unit_name: String,
    pub days_left: i32,
}

impl ExpiringBatchRow {
    pub fn to_proto(&self) -> ExpiringBatch {
        ExpiringBatch {
            purchase_id: self.purchase_id.clone(),
            invoice_number: self.invoice_number.clone(),
            item_id: self.item_id.clone().unwrap_or_default(),
            item_name: self.item_name.clone().unwrap_or_default(),
            batch_no: self.batch_no.clone().unwrap_or_default(),
            expiry_date: self.expiry_date.clone(),
            quantity: self.quantity,
            unit_name: self.unit_name.clone(),
            days_left: self.days_left,
        }
    }
}
