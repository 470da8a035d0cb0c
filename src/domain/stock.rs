use std::collections::BTreeMap;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use super::{DomainError, DomainResult, UnitConversion};

/// Number of base units in one `unit_name`.
///
/// An empty unit name or the base unit itself has rate 1. Matching is case-insensitive.
pub fn rate_for_unit(
    unit_name: &str,
    base_unit_name: Option<&str>,
    conversions: &[UnitConversion],
) -> DomainResult<Decimal> {
    let unit = unit_name.trim();
    if unit.is_empty() {
        return Ok(Decimal::ONE);
    }
    if base_unit_name.is_some_and(|base| base.trim().eq_ignore_ascii_case(unit)) {
        return Ok(Decimal::ONE);
    }
    conversions
        .iter()
        .find(|c| c.unit_name.trim().eq_ignore_ascii_case(unit))
        .map(|c| c.conversion_rate)
        .ok_or_else(|| DomainError::UnknownUnit(unit.to_string()))
}

pub fn to_base_quantity(
    quantity: i64,
    unit_name: &str,
    base_unit_name: Option<&str>,
    conversions: &[UnitConversion],
) -> DomainResult<i64> {
    if quantity <= 0 {
        return Err(DomainError::InvalidQuantity(quantity));
    }
    let rate = rate_for_unit(unit_name, base_unit_name, conversions)?;
    if rate <= Decimal::ZERO {
        return Err(DomainError::InvalidConversionRate(unit_name.trim().to_string()));
    }

    let base = Decimal::from(quantity)
        .checked_mul(rate)
        .ok_or_else(|| DomainError::QuantityOverflow {
            quantity,
            unit: unit_name.trim().to_string(),
        })?;
    // Stock is counted in whole base units; a partial base unit cannot be received.
    if !base.fract().is_zero() {
        return Err(DomainError::FractionalQuantity {
            quantity,
            unit: unit_name.trim().to_string(),
            base,
        });
    }
    base.to_i64().ok_or_else(|| DomainError::QuantityOverflow {
        quantity,
        unit: unit_name.trim().to_string(),
    })
}

pub fn apply_receipt(current: i64, base_quantity: i64) -> i64 {
    current.saturating_add(base_quantity)
}

/// Stock after removing `base_quantity`, never below zero.
pub fn apply_rollback(current: i64, base_quantity: i64) -> i64 {
    current.saturating_sub(base_quantity).max(0)
}

/// Sums base quantities per item.
///
/// The map is ordered by key, so callers that lock rows while iterating it always
/// lock in the same order.
pub fn aggregate_by_item<K, I>(lines: I) -> BTreeMap<K, i64>
where
    K: Ord,
    I: IntoIterator<Item = (K, i64)>,
{
    let mut totals = BTreeMap::new();
    for (item, quantity) in lines {
        let entry = totals.entry(item).or_insert(0i64);
        *entry = entry.saturating_add(quantity);
    }
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn conversions() -> Vec<UnitConversion> {
        vec![
            UnitConversion::new("Strip", Decimal::from(10)),
            UnitConversion::new("Box", Decimal::from(100)),
            UnitConversion::new("Half", Decimal::from_str("0.5").unwrap()),
        ]
    }

    #[test]
    fn test_base_unit_has_rate_one() {
        let c = conversions();
        assert_eq!(to_base_quantity(7, "tablet", Some("Tablet"), &c).unwrap(), 7);
        assert_eq!(to_base_quantity(7, "", Some("Tablet"), &c).unwrap(), 7);
    }

    #[test]
    fn test_declared_unit_uses_rate() {
        let c = conversions();
        assert_eq!(to_base_quantity(3, "box", Some("Tablet"), &c).unwrap(), 300);
        assert_eq!(to_base_quantity(2, "Strip", Some("Tablet"), &c).unwrap(), 20);
        assert_eq!(to_base_quantity(4, "Half", Some("Tablet"), &c).unwrap(), 2);
    }

    #[test]
    fn test_fractional_base_quantity_is_rejected() {
        let c = conversions();
        assert_eq!(
            to_base_quantity(1, "Half", Some("Tablet"), &c),
            Err(DomainError::FractionalQuantity {
                quantity: 1,
                unit: "Half".to_string(),
                base: Decimal::from_str("0.5").unwrap(),
            })
        );

        let pack = vec![UnitConversion::new("Pack", Decimal::from_str("1.5").unwrap())];
        assert!(matches!(
            to_base_quantity(1, "Pack", Some("Tablet"), &pack),
            Err(DomainError::FractionalQuantity { .. })
        ));
        assert_eq!(to_base_quantity(2, "Pack", Some("Tablet"), &pack).unwrap(), 3);
    }

    #[test]
    fn test_repeated_receipts_match_physical_count() {
        let c = conversions();
        let mut stock = 0;
        for _ in 0..2 {
            stock = apply_receipt(stock, to_base_quantity(2, "Half", Some("Tablet"), &c).unwrap());
        }
        assert_eq!(stock, 2);
    }

    #[test]
    fn test_unknown_unit_is_rejected() {
        let c = conversions();
        assert_eq!(
            to_base_quantity(1, "Bottle", Some("Tablet"), &c),
            Err(DomainError::UnknownUnit("Bottle".to_string()))
        );
    }

    #[test]
    fn test_non_positive_quantity_is_rejected() {
        assert_eq!(
            to_base_quantity(0, "", None, &[]),
            Err(DomainError::InvalidQuantity(0))
        );
    }

    #[test]
    fn test_rollback_clamps_at_zero() {
        assert_eq!(apply_rollback(50, 20), 30);
        assert_eq!(apply_rollback(10, 25), 0);
        assert_eq!(apply_rollback(0, 1), 0);
        assert_eq!(apply_rollback(i64::MIN, 1), 0);
    }

    #[test]
    fn test_receipt_then_rollback_restores_stock() {
        let start = 42;
        let received = apply_receipt(start, 300);
        assert_eq!(received, 342);
        assert_eq!(apply_rollback(received, 300), start);
    }

    #[test]
    fn test_aggregate_by_item_sums_and_orders() {
        let totals = aggregate_by_item(vec![("b", 5), ("a", 1), ("b", 10)]);
        let collected: Vec<_> = totals.into_iter().collect();
        assert_eq!(collected, vec![("a", 1), ("b", 15)]);
    }
}
