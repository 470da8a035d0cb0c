use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::domain::pricing::price_per_base_unit;
use crate::proto::purchases::{Purchase, PurchaseLine};

pub const PURCHASE_SELECT: &str = "SELECT p.id::text AS id, p.supplier_id::text AS supplier_id, \
     s.name AS supplier_name, p.invoice_number, p.purchase_date::text AS purchase_date, \
     p.due_date::text AS due_date, p.total, p.payment_status, p.payment_method, \
     p.paid_amount, p.notes, p.created_at::text AS created_at \
     FROM purchases p LEFT JOIN suppliers s ON s.id = p.supplier_id";

pub const PURCHASE_LINE_SELECT: &str = "SELECT pi.id::text AS id, pi.item_id::text AS item_id, \
     it.name AS item_name, pi.batch_no, pi.expiry_date::text AS expiry_date, pi.quantity, \
     pi.unit_name, pi.base_quantity, pi.price, pi.discount, pi.subtotal \
     FROM purchase_items pi LEFT JOIN items it ON it.id = pi.item_id";

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct PurchaseModel {
    pub id: String,
    pub supplier_id: Option<String>,
    pub supplier_name: Option<String>,
    pub invoice_number: String,
    pub purchase_date: String,
    pub due_date: Option<String>,
    pub total: Decimal,
    pub payment_status: String,
    pub payment_method: Option<String>,
    pub paid_amount: Decimal,
    pub notes: Option<String>,
    pub created_at: String,
}

impl PurchaseModel {
    pub fn to_proto(&self, lines: Vec<PurchaseLine>) -> Purchase {
        Purchase {
            id: self.id.clone(),
            supplier_id: self.supplier_id.clone().unwrap_or_default(),
            supplier_name: self.supplier_name.clone().unwrap_or_default(),
            invoice_number: self.invoice_number.clone(),
            purchase_date: self.purchase_date.clone(),
            due_date: self.due_date.clone().unwrap_or_default(),
            total: self.total.to_string(),
            payment_status: self.payment_status.clone(),
            payment_method: self.payment_method.clone().unwrap_or_default(),
            paid_amount: self.paid_amount.to_string(),
            notes: self.notes.clone().unwrap_or_default(),
            created_at: self.created_at.clone(),
            lines,
        }
    }
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct PurchaseLineModel {
    pub id: String,
    pub item_id: Option<String>,
    pub item_name: Option<String>,
    pub batch_no: Option<String>,
    pub expiry_date: Option<String>,
    pub quantity: i64,
    pub unit_name: String,
    pub base_quantity: i64,
    pub price: Decimal,
    pub discount: Decimal,
    pub subtotal: Decimal,
}

impl PurchaseLineModel {
    pub fn to_proto(&self) -> PurchaseLine {
        PurchaseLine {
            id: self.id.clone(),
            item_id: self.item_id.clone().unwrap_or_default(),
            item_name: self.item_name.clone().unwrap_or_default(),
            batch_no: self.batch_no.clone().unwrap_or_default(),
            expiry_date: self.expiry_date.clone().unwrap_or_default(),
            quantity: self.quantity,
            unit_name: self.unit_name.clone(),
            price: self.price.to_string(),
            discount: self.discount.to_string(),
            subtotal: self.subtotal.to_string(),
            base_quantity: self.base_quantity,
            base_unit_cost: price_per_base_unit(self.subtotal, Decimal::from(self.base_quantity))
                .map(|cost| format!("{:.2}", cost))
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn line(base_quantity: i64, subtotal: &str) -> PurchaseLineModel {
        PurchaseLineModel {
            id: "line-1".into(),
            item_id: Some("item-1".into()),
            item_name: Some("Paracetamol 500mg".into()),
            batch_no: None,
            expiry_date: None,
            quantity: 2,
            unit_name: "Box".into(),
            base_quantity,
            price: Decimal::from(50000),
            discount: Decimal::ZERO,
            subtotal: Decimal::from_str(subtotal).unwrap(),
        }
    }

    #[test]
    fn test_line_to_proto_reports_base_unit_cost() {
        let proto = line(200, "100000").to_proto();
        assert_eq!(proto.base_quantity, 200);
        assert_eq!(proto.base_unit_cost, "500.00");
        assert_eq!(proto.item_id, "item-1");

        assert_eq!(line(3, "100").to_proto().base_unit_cost, "33.33");
    }

    #[test]
    fn test_line_to_proto_without_base_quantity() {
        assert_eq!(line(0, "100").to_proto().base_unit_cost, "");
    }
}
