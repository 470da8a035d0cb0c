// Pure pricing and stock arithmetic, independent of the database and gRPC layers.

pub mod pricing;
pub mod stock;

pub use pricing::UnitConversion;

use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("conversion rate for unit '{0}' must be greater than zero")]
    InvalidConversionRate(String),

    #[error("unit name is required for every conversion")]
    EmptyUnitName,

    #[error("unit '{0}' is declared more than once")]
    DuplicateUnit(String),

    #[error("unit '{0}' is the base unit and cannot have a conversion")]
    ConversionUsesBaseUnit(String),

    #[error("unit '{0}' is not defined for this item")]
    UnknownUnit(String),

    #[error("quantity must be greater than zero (got {0})")]
    InvalidQuantity(i64),

    #[error("quantity overflow converting {quantity} {unit} to base units")]
    QuantityOverflow { quantity: i64, unit: String },

    #[error("{quantity} {unit} is {base} base units; only whole base units can be stocked")]
    FractionalQuantity {
        quantity: i64,
        unit: String,
        base: Decimal,
    },

    #[error("{field} must not be negative")]
    NegativeAmount { field: &'static str },

    #[error("discount must be between 0 and 100 (got {0})")]
    InvalidDiscount(Decimal),

    #[error("{field} is not a valid decimal: '{value}'")]
    InvalidDecimal { field: &'static str, value: String },
}

pub type DomainResult<T> = Result<T, DomainError>;
