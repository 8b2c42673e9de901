//! Response DTOs for pricing API endpoints.

use rust_decimal::Decimal;
use serde::Serialize;

use super::models::{QuotationInput, QuotationResult};
use super::services::PricingError;
use crate::proposal::format::tax_label;

/// Money value for JSON responses
#[derive(Debug, Clone, Serialize)]
pub struct MoneyResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub currency: String,
}

impl MoneyResponse {
    pub fn new(amount: Decimal, currency: &str) -> Self {
        Self {
            amount,
            currency: currency.to_string(),
        }
    }
}

/// Response for a quotation calculation
#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub area_per_unit_sqft: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub total_area_sqft: Decimal,
    pub quantity: i32,
    pub total_material_value: MoneyResponse,
    pub installation_charge: MoneyResponse,
    pub freight_charge: MoneyResponse,
    pub total_value: MoneyResponse,
    #[serde(with = "rust_decimal::serde::str")]
    pub gst_rate_percent: Decimal,
    pub tax_label: String,
    pub gst_amount: MoneyResponse,
    pub net_payable: MoneyResponse,
}

impl QuoteResponse {
    pub fn new(input: &QuotationInput, result: &QuotationResult, currency: &str) -> Self {
        Self {
            area_per_unit_sqft: result.area_per_unit_sqft,
            total_area_sqft: result.total_area_sqft,
            quantity: input.quantity,
            total_material_value: MoneyResponse::new(result.total_material_value, currency),
            installation_charge: MoneyResponse::new(result.installation_charge, currency),
            freight_charge: MoneyResponse::new(result.freight_charge, currency),
            total_value: MoneyResponse::new(result.total_value, currency),
            gst_rate_percent: input.gst_rate_percent,
            tax_label: tax_label(input.gst_rate_percent),
            gst_amount: MoneyResponse::new(result.gst_amount, currency),
            net_payable: MoneyResponse::new(result.net_payable, currency),
        }
    }
}

/// Generic pricing error response
#[derive(Debug, Serialize)]
pub struct PricingErrorResponse {
    pub error_type: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl PricingErrorResponse {
    /// Body that could not be read as JSON at all
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self {
            error_type: "invalid_request".to_string(),
            message: message.into(),
            details: None,
        }
    }
}

impl From<&PricingError> for PricingErrorResponse {
    fn from(err: &PricingError) -> Self {
        match err {
            PricingError::InvalidInput { field, reason } => Self {
                error_type: "invalid_input".to_string(),
                message: err.to_string(),
                details: Some(serde_json::json!({
                    "field": field,
                    "reason": reason,
                })),
            },
        }
    }
}
