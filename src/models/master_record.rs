use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::proto::master_data::{MasterRecord, MasterTable};

/// Row shape shared by `categories`, `item_types` and `units`.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct MasterRecordModel {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl MasterRecordModel {
    pub fn to_proto(&self) -> MasterRecord {
        MasterRecord {
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone().unwrap_or_default(),
            created_at: self.created_at.clone(),
            updated_at: self.updated_at.clone(),
        }
    }
}

/// Physical table behind a `MasterTable` value.
pub fn table_name(table: MasterTable) -> Option<&'static str> {
    match table {
        MasterTable::Categories => Some("categories"),
        MasterTable::Types => Some("item_types"),
        MasterTable::Units => Some("units"),
        MasterTable::Unspecified => None,
    }
}

pub fn table_from_name(name: &str) -> Option<MasterTable> {
    match name {
        "categories" => Some(MasterTable::Categories),
        "item_types" => Some(MasterTable::Types),
        "units" => Some(MasterTable::Units),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_names_round_trip() {
        for table in [MasterTable::Categories, MasterTable::Types, MasterTable::Units] {
            let name = table_name(table).unwrap();
            assert_eq!(table_from_name(name), Some(table));
        }
        assert_eq!(table_name(MasterTable::Unspecified), None);
        assert_eq!(table_from_name("items"), None);
    }
}
