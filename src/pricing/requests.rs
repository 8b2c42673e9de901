//! Request DTOs for pricing API endpoints.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde_json::Value;

use super::models::{InvalidReason, QuotationField, QuotationInput};
use super::services::PricingError;

/// Request to price a single window line.
///
/// Decimal fields accept either JSON strings (`"2765.50"`) or numbers.
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteRequest {
    pub width_mm: Decimal,
    pub height_mm: Decimal,
    pub quantity: i32,
    pub rate_per_sqft: Decimal,
    pub installation_charge: Decimal,
    pub freight_charge: Decimal,
    /// Falls back to the configured default rate when omitted
    pub gst_rate_percent: Option<Decimal>,
}

impl QuoteRequest {
    /// Read a request out of a JSON body.
    ///
    /// Every field is checked individually so that a bad value is reported
    /// against the field it came from. `null` counts as absent.
    pub fn from_json(body: &Value) -> Result<Self, PricingError> {
        Ok(Self {
            width_mm: required_decimal(body, QuotationField::WidthMm)?,
            height_mm: required_decimal(body, QuotationField::HeightMm)?,
            quantity: required_quantity(body)?,
            rate_per_sqft: required_decimal(body, QuotationField::RatePerSqft)?,
            installation_charge: optional_decimal(body, QuotationField::InstallationCharge)?
                .unwrap_or_default(),
            freight_charge: optional_decimal(body, QuotationField::FreightCharge)?
                .unwrap_or_default(),
            gst_rate_percent: optional_decimal(body, QuotationField::GstRatePercent)?,
        })
    }

    pub fn into_input(self, default_gst_rate: Decimal) -> QuotationInput {
        QuotationInput {
            width_mm: self.width_mm,
            height_mm: self.height_mm,
            quantity: self.quantity,
            rate_per_sqft: self.rate_per_sqft,
            installation_charge: self.installation_charge,
            freight_charge: self.freight_charge,
            gst_rate_percent: self.gst_rate_percent.unwrap_or(default_gst_rate),
        }
    }
}

fn present(body: &Value, field: QuotationField) -> Option<&Value> {
    body.get(field.as_str()).filter(|v| !v.is_null())
}

fn required_decimal(body: &Value, field: QuotationField) -> Result<Decimal, PricingError> {
    optional_decimal(body, field)?
        .ok_or_else(|| PricingError::invalid(field, InvalidReason::Missing))
}

fn optional_decimal(body: &Value, field: QuotationField) -> Result<Option<Decimal>, PricingError> {
    let not_a_number = || PricingError::invalid(field, InvalidReason::NotANumber);

    let Some(value) = present(body, field) else {
        return Ok(None);
    };
    let parsed = match value {
        Value::String(s) => Decimal::from_str(s.trim()).ok(),
        // Numbers go through their JSON text so no binary float is involved
        Value::Number(n) => {
            let text = n.to_string();
            Decimal::from_str(&text)
                .or_else(|_| Decimal::from_scientific(&text))
                .ok()
        }
        _ => None,
    };
    parsed.map(Some).ok_or_else(not_a_number)
}

fn required_quantity(body: &Value) -> Result<i32, PricingError> {
    let field = QuotationField::Quantity;
    let value =
        present(body, field).ok_or_else(|| PricingError::invalid(field, InvalidReason::Missing))?;

    match value {
        Value::Number(n) => {
            // Fractional counts have no integer form
            let whole = n
                .as_i64()
                .ok_or_else(|| PricingError::invalid(field, InvalidReason::NotANumber))?;
            i32::try_from(whole).map_err(|_| PricingError::invalid(field, InvalidReason::TooLarge))
        }
        Value::String(s) => s
            .trim()
            .parse::<i32>()
            .map_err(|_| PricingError::invalid(field, InvalidReason::NotANumber)),
        _ => Err(PricingError::invalid(field, InvalidReason::NotANumber)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn minimal() -> Value {
        json!({"width_mm": "1000", "height_mm": "1000", "quantity": 1, "rate_per_sqft": "100"})
    }

    fn rejection(body: Value) -> (QuotationField, InvalidReason) {
        let err = QuoteRequest::from_json(&body).unwrap_err();
        (err.field(), err.reason())
    }

    #[test]
    fn test_quote_request_accepts_strings_and_numbers() {
        let request = QuoteRequest::from_json(&json!({
            "width_mm": 3900,
            "height_mm": "3000",
            "quantity": 2,
            "rate_per_sqft": "2765.50",
            "installation_charge": 25000,
            "freight_charge": "4000.00",
            "gst_rate_percent": 12.5
        }))
        .unwrap();

        let input = request.into_input(dec!(18));
        assert_eq!(input.width_mm, dec!(3900));
        assert_eq!(input.height_mm, dec!(3000));
        assert_eq!(input.quantity, 2);
        assert_eq!(input.rate_per_sqft, dec!(2765.50));
        assert_eq!(input.installation_charge, dec!(25000));
        assert_eq!(input.freight_charge, dec!(4000));
        assert_eq!(input.gst_rate_percent, dec!(12.5));
    }

    #[test]
    fn test_quote_request_defaults() {
        let input = QuoteRequest::from_json(&minimal())
            .unwrap()
            .into_input(dec!(18));

        assert_eq!(input.installation_charge, Decimal::ZERO);
        assert_eq!(input.freight_charge, Decimal::ZERO);
        assert_eq!(input.gst_rate_percent, dec!(18));
    }

    #[test]
    fn test_quote_request_null_means_absent() {
        let mut body = minimal();
        body["gst_rate_percent"] = Value::Null;
        body["freight_charge"] = Value::Null;

        let input = QuoteRequest::from_json(&body).unwrap().into_input(dec!(18));
        assert_eq!(input.gst_rate_percent, dec!(18));
        assert_eq!(input.freight_charge, Decimal::ZERO);
    }

    #[test]
    fn test_quote_request_keeps_invalid_quantity_for_validation() {
        let mut body = minimal();
        body["quantity"] = json!(-2);

        let request = QuoteRequest::from_json(&body).unwrap();
        assert_eq!(request.into_input(dec!(18)).quantity, -2);
    }

    #[test]
    fn test_quote_request_non_numeric_decimal() {
        let mut body = minimal();
        body["width_mm"] = json!("abc");
        assert_eq!(
            rejection(body),
            (QuotationField::WidthMm, InvalidReason::NotANumber)
        );

        let mut body = minimal();
        body["freight_charge"] = json!(true);
        assert_eq!(
            rejection(body),
            (QuotationField::FreightCharge, InvalidReason::NotANumber)
        );
    }

    #[test]
    fn test_quote_request_fractional_quantity() {
        let mut body = minimal();
        body["quantity"] = json!(1.5);
        assert_eq!(
            rejection(body),
            (QuotationField::Quantity, InvalidReason::NotANumber)
        );

        let mut body = minimal();
        body["quantity"] = json!("1.5");
        assert_eq!(
            rejection(body),
            (QuotationField::Quantity, InvalidReason::NotANumber)
        );
    }

    #[test]
    fn test_quote_request_quantity_out_of_range() {
        let mut body = minimal();
        body["quantity"] = json!(5_000_000_000_i64);
        assert_eq!(
            rejection(body),
            (QuotationField::Quantity, InvalidReason::TooLarge)
        );
    }

    #[test]
    fn test_quote_request_missing_fields() {
        let mut body = minimal();
        body.as_object_mut().unwrap().remove("quantity");
        assert_eq!(
            rejection(body),
            (QuotationField::Quantity, InvalidReason::Missing)
        );

        assert_eq!(
            rejection(json!({})),
            (QuotationField::WidthMm, InvalidReason::Missing)
        );
        assert_eq!(
            rejection(json!([1, 2, 3])),
            (QuotationField::WidthMm, InvalidReason::Missing)
        );
    }
}
