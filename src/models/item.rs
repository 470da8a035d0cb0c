use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

use crate::domain::UnitConversion;
use crate::proto::items::{Item, UnitConversion as UnitConversionProto};

/// Column list for reading items together with their lookup names.
pub const ITEM_SELECT: &str = "SELECT i.id::text AS id, i.code, i.barcode, i.name, \
     i.category_id::text AS category_id, c.name AS category_name, \
     i.type_id::text AS type_id, t.name AS type_name, \
     i.base_unit_id::text AS base_unit_id, u.name AS base_unit_name, \
     i.base_price, i.sell_price, i.stock, i.min_stock, i.description, \
     i.image_url, i.image_key, i.unit_conversions, \
     i.created_at::text AS created_at, i.updated_at::text AS updated_at \
     FROM items i \
     LEFT JOIN categories c ON c.id = i.category_id \
     LEFT JOIN item_types t ON t.id = i.type_id \
     LEFT JOIN units u ON u.id = i.base_unit_id";

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ItemModel {
    pub id: String,
    pub code: Option<String>,
    pub barcode: Option<String>,
    pub name: String,
    pub category_id: Option<String>,
    pub category_name: Option<String>,
    pub type_id: Option<String>,
    pub type_name: Option<String>,
    pub base_unit_id: Option<String>,
    pub base_unit_name: Option<String>,
    pub base_price: Decimal,
    pub sell_price: Decimal,
    pub stock: i64,
    pub min_stock: i64,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub image_key: Option<String>,
    pub unit_conversions: Json<Vec<UnitConversion>>,
    pub created_at: String,
    pub updated_at: String,
}

impl ItemModel {
    pub fn to_proto(&self) -> Item {
        Item {
            id: self.id.clone(),
            code: self.code.clone().unwrap_or_default(),
            barcode: self.barcode.clone().unwrap_or_default(),
            name: self.name.clone(),
            category_id: self.category_id.clone().unwrap_or_default(),
            category_name: self.category_name.clone().unwrap_or_default(),
            type_id: self.type_id.clone().unwrap_or_default(),
            type_name: self.type_name.clone().unwrap_or_default(),
            base_unit_id: self.base_unit_id.clone().unwrap_or_default(),
            base_unit_name: self.base_unit_name.clone().unwrap_or_default(),
            base_price: self.base_price.to_string(),
            sell_price: self.sell_price.to_string(),
            stock: self.stock,
            min_stock: self.min_stock,
            description: self.description.clone().unwrap_or_default(),
            image_url: self.image_url.clone().unwrap_or_default(),
            unit_conversions: self.unit_conversions.iter().map(conversion_to_proto).collect(),
            created_at: self.created_at.clone(),
            updated_at: self.updated_at.clone(),
        }
    }
}

pub fn conversion_to_proto(c: &UnitConversion) -> UnitConversionProto {
    UnitConversionProto {
        unit_name: c.unit_name.clone(),
        to_unit_id: c.to_unit_id.clone().unwrap_or_default(),
        conversion_rate: c.conversion_rate.normalize().to_string(),
        base_price: c.base_price.to_string(),
        sell_price: c.sell_price.to_string(),
    }
}

/// Stock-relevant columns of an item, read under a row lock.
#[derive(Debug, Clone, FromRow)]
pub struct ItemStockRow {
    pub id: uuid::Uuid,
    pub name: String,
    pub stock: i64,
    pub base_unit_name: Option<String>,
    pub unit_conversions: Json<Vec<UnitConversion>>,
}
