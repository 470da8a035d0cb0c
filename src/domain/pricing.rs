use std::collections::HashSet;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::{DomainError, DomainResult};

/// Decimal places kept on every stored price.
pub const PRICE_SCALE: u32 = 2;

/// One entry of `items.unit_conversions`.
///
/// `conversion_rate` is the number of base units contained in one `unit_name`,
/// e.g. `{unit_name: "Box", conversion_rate: 100}` for a tablet-based item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitConversion {
    pub unit_name: String,
    #[serde(default)]
    pub to_unit_id: Option<String>,
    pub conversion_rate: Decimal,
    #[serde(default)]
    pub base_price: Decimal,
    #[serde(default)]
    pub sell_price: Decimal,
}

impl UnitConversion {
    pub fn new(unit_name: impl Into<String>, conversion_rate: Decimal) -> Self {
        Self {
            unit_name: unit_name.into(),
            to_unit_id: None,
            conversion_rate,
            base_price: Decimal::ZERO,
            sell_price: Decimal::ZERO,
        }
    }
}

pub fn round_price(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(PRICE_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Price of one `rate`-sized unit given the price of one base unit.
pub fn derive_unit_price(base_unit_price: Decimal, rate: Decimal) -> Option<Decimal> {
    if rate <= Decimal::ZERO {
        return None;
    }
    base_unit_price.checked_mul(rate).map(round_price)
}

/// Price of one base unit given the price of a `rate`-sized unit.
pub fn price_per_base_unit(unit_price: Decimal, rate: Decimal) -> Option<Decimal> {
    if rate <= Decimal::ZERO {
        return None;
    }
    unit_price.checked_div(rate).map(round_price)
}

/// Checks names and rates of a conversion set against the item's base unit.
pub fn validate_conversions(
    base_unit_name: Option<&str>,
    conversions: &[UnitConversion],
) -> DomainResult<()> {
    let base = base_unit_name.map(|s| s.trim().to_lowercase());
    let mut seen = HashSet::new();

    for conversion in conversions {
        let name = conversion.unit_name.trim();
        if name.is_empty() {
            return Err(DomainError::EmptyUnitName);
        }
        let key = name.to_lowercase();
        if base.as_deref() == Some(key.as_str()) {
            return Err(DomainError::ConversionUsesBaseUnit(name.to_string()));
        }
        if !seen.insert(key) {
            return Err(DomainError::DuplicateUnit(name.to_string()));
        }
        if conversion.conversion_rate <= Decimal::ZERO {
            return Err(DomainError::InvalidConversionRate(name.to_string()));
        }
    }
    Ok(())
}

/// Validates the conversion set and fills in each unit's derived prices.
///
/// Client-supplied `base_price`/`sell_price` on the conversions are discarded.
pub fn derive_conversions(
    base_price: Decimal,
    sell_price: Decimal,
    base_unit_name: Option<&str>,
    conversions: Vec<UnitConversion>,
) -> DomainResult<Vec<UnitConversion>> {
    if base_price < Decimal::ZERO {
        return Err(DomainError::NegativeAmount { field: "base_price" });
    }
    if sell_price < Decimal::ZERO {
        return Err(DomainError::NegativeAmount { field: "sell_price" });
    }
    validate_conversions(base_unit_name, &conversions)?;

    conversions
        .into_iter()
        .map(|c| {
            let name = c.unit_name.trim().to_string();
            let rate = c.conversion_rate;
            let overflow = || DomainError::InvalidConversionRate(name.clone());
            Ok(UnitConversion {
                base_price: derive_unit_price(base_price, rate).ok_or_else(overflow)?,
                sell_price: derive_unit_price(sell_price, rate).ok_or_else(overflow)?,
                unit_name: name.clone(),
                to_unit_id: c.to_unit_id.filter(|id| !id.is_empty()),
                conversion_rate: rate,
            })
        })
        .collect()
}

/// `quantity × price` less a percentage discount, rounded to the price scale.
pub fn line_subtotal(quantity: i64, price: Decimal, discount_percent: Decimal) -> DomainResult<Decimal> {
    if quantity <= 0 {
        return Err(DomainError::InvalidQuantity(quantity));
    }
    if price < Decimal::ZERO {
        return Err(DomainError::NegativeAmount { field: "price" });
    }
    if discount_percent < Decimal::ZERO || discount_percent > Decimal::ONE_HUNDRED {
        return Err(DomainError::InvalidDiscount(discount_percent));
    }

    let gross = Decimal::from(quantity) * price;
    let factor = Decimal::ONE - discount_percent / Decimal::ONE_HUNDRED;
    Ok(round_price(gross * factor))
}

/// Parses a non-negative money value. Empty input is zero.
pub fn parse_amount(field: &'static str, value: &str) -> DomainResult<Decimal> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(Decimal::ZERO);
    }
    let amount = Decimal::from_str(trimmed).map_err(|_| DomainError::InvalidDecimal {
        field,
        value: value.to_string(),
    })?;
    if amount < Decimal::ZERO {
        return Err(DomainError::NegativeAmount { field });
    }
    Ok(round_price(amount))
}

/// Parses a conversion rate without rounding it to the price scale.
pub fn parse_rate(unit_name: &str, value: &str) -> DomainResult<Decimal> {
    Decimal::from_str(value.trim())
        .map_err(|_| DomainError::InvalidConversionRate(unit_name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_derive_unit_price_multiplies_and_rounds() {
        assert_eq!(derive_unit_price(dec("150"), dec("10")), Some(dec("1500")));
        assert_eq!(derive_unit_price(dec("0.333"), dec("3")), Some(dec("1.00")));
        assert_eq!(derive_unit_price(dec("1.005"), dec("1")), Some(dec("1.01")));
    }

    #[test]
    fn test_derive_unit_price_rejects_non_positive_rate() {
        assert_eq!(derive_unit_price(dec("150"), Decimal::ZERO), None);
        assert_eq!(derive_unit_price(dec("150"), dec("-2")), None);
    }

    #[test]
    fn test_price_per_base_unit_divides() {
        assert_eq!(price_per_base_unit(dec("10000"), dec("3")), Some(dec("3333.33")));
        assert_eq!(price_per_base_unit(dec("10000"), Decimal::ZERO), None);
    }

    #[test]
    fn test_derive_conversions_fills_prices() {
        let conversions = vec![
            UnitConversion::new(" Strip ", dec("10")),
            UnitConversion::new("Box", dec("100")),
        ];
        let derived =
            derive_conversions(dec("500"), dec("650"), Some("Tablet"), conversions).unwrap();

        assert_eq!(derived[0].unit_name, "Strip");
        assert_eq!(derived[0].base_price, dec("5000"));
        assert_eq!(derived[0].sell_price, dec("6500"));
        assert_eq!(derived[1].base_price, dec("50000"));
        assert_eq!(derived[1].sell_price, dec("65000"));
    }

    #[test]
    fn test_derive_conversions_ignores_client_prices() {
        let mut strip = UnitConversion::new("Strip", dec("10"));
        strip.base_price = dec("1");
        strip.sell_price = dec("1");
        let derived = derive_conversions(dec("100"), dec("120"), None, vec![strip]).unwrap();
        assert_eq!(derived[0].base_price, dec("1000"));
        assert_eq!(derived[0].sell_price, dec("1200"));
    }

    #[test]
    fn test_validate_rejects_duplicates_case_insensitively() {
        let conversions = vec![
            UnitConversion::new("Box", dec("10")),
            UnitConversion::new("box", dec("20")),
        ];
        assert_eq!(
            validate_conversions(Some("Tablet"), &conversions),
            Err(DomainError::DuplicateUnit("box".to_string()))
        );
    }

    #[test]
    fn test_validate_rejects_base_unit_and_empty_name() {
        let conversions = vec![UnitConversion::new("TABLET", dec("1"))];
        assert!(matches!(
            validate_conversions(Some("Tablet"), &conversions),
            Err(DomainError::ConversionUsesBaseUnit(_))
        ));

        let conversions = vec![UnitConversion::new("  ", dec("1"))];
        assert_eq!(
            validate_conversions(None, &conversions),
            Err(DomainError::EmptyUnitName)
        );
    }

    #[test]
    fn test_validate_rejects_zero_rate() {
        let conversions = vec![UnitConversion::new("Box", Decimal::ZERO)];
        assert_eq!(
            validate_conversions(None, &conversions),
            Err(DomainError::InvalidConversionRate("Box".to_string()))
        );
    }

    #[test]
    fn test_line_subtotal_applies_discount() {
        assert_eq!(line_subtotal(3, dec("1000"), Decimal::ZERO).unwrap(), dec("3000"));
        assert_eq!(line_subtotal(3, dec("1000"), dec("10")).unwrap(), dec("2700"));
        assert_eq!(line_subtotal(1, dec("99.99"), dec("33.3")).unwrap(), dec("66.69"));
    }

    #[test]
    fn test_line_subtotal_rejects_bad_input() {
        assert_eq!(
            line_subtotal(0, dec("1"), Decimal::ZERO),
            Err(DomainError::InvalidQuantity(0))
        );
        assert!(matches!(
            line_subtotal(1, dec("1"), dec("101")),
            Err(DomainError::InvalidDiscount(_))
        ));
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("price", "").unwrap(), Decimal::ZERO);
        assert_eq!(parse_amount("price", " 12.345 ").unwrap(), dec("12.35"));
        assert!(matches!(
            parse_amount("price", "-1"),
            Err(DomainError::NegativeAmount { field: "price" })
        ));
        assert!(matches!(
            parse_amount("price", "abc"),
            Err(DomainError::InvalidDecimal { .. })
        ));
    }

    #[test]
    fn test_conversion_json_accepts_numbers_and_strings() {
        let json = r#"[{"unit_name":"Box","to_unit_id":null,"conversion_rate":10,"base_price":"5000","sell_price":6500.5}]"#;
        let parsed: Vec<UnitConversion> = serde_json::from_str(json).unwrap();
        assert_eq!(parsed[0].conversion_rate, dec("10"));
        assert_eq!(parsed[0].sell_price, dec("6500.5"));
        assert_eq!(parsed[0].to_unit_id, None);
    }
}
