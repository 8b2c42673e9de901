//! Value objects for the pricing engine.
//!
//! `QuotationInput` is what the form or API hands in, `QuotationResult` is
//! what the engine hands back. Neither has a lifecycle beyond one call.

use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

/// Inputs for a single-line window quotation.
///
/// Real-valued fields are decimals so that nothing passes through binary
/// floating point. `quantity` is signed so that zero and negative counts
/// reach validation instead of failing deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuotationInput {
    #[serde(with = "rust_decimal::serde::str")]
    pub width_mm: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub height_mm: Decimal,
    pub quantity: i32,
    #[serde(with = "rust_decimal::serde::str")]
    pub rate_per_sqft: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub installation_charge: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub freight_charge: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub gst_rate_percent: Decimal,
}

/// Quotation summary. Every field is quantized to exactly 2 decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuotationResult {
    #[serde(with = "rust_decimal::serde::str")]
    pub area_per_unit_sqft: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub total_area_sqft: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub total_material_value: Decimal,
    /// Charges as summed into `total_value`
    #[serde(with = "rust_decimal::serde::str")]
    pub installation_charge: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub freight_charge: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub total_value: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub gst_amount: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub net_payable: Decimal,
}

/// Input field that failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuotationField {
    WidthMm,
    HeightMm,
    Quantity,
    RatePerSqft,
    InstallationCharge,
    FreightCharge,
    GstRatePercent,
}

impl QuotationField {
    /// Wire name, matching the request and form field names
    pub fn as_str(&self) -> &'static str {
        match self {
            QuotationField::WidthMm => "width_mm",
            QuotationField::HeightMm => "height_mm",
            QuotationField::Quantity => "quantity",
            QuotationField::RatePerSqft => "rate_per_sqft",
            QuotationField::InstallationCharge => "installation_charge",
            QuotationField::FreightCharge => "freight_charge",
            QuotationField::GstRatePercent => "gst_rate_percent",
        }
    }

    /// Human-readable label as shown on the proposal form
    pub fn label(&self) -> &'static str {
        match self {
            QuotationField::WidthMm => "Width (mm)",
            QuotationField::HeightMm => "Height (mm)",
            QuotationField::Quantity => "Qty",
            QuotationField::RatePerSqft => "Rate (per Sqft)",
            QuotationField::InstallationCharge => "Installation / Loading / Unloading",
            QuotationField::FreightCharge => "Freight Charge",
            QuotationField::GstRatePercent => "GST (%)",
        }
    }
}

impl fmt::Display for QuotationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a field was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidReason {
    Negative,
    QuantityBelowOne,
    PercentOutOfRange,
    NotANumber,
    Missing,
    TooLarge,
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            InvalidReason::Negative => "must not be negative",
            InvalidReason::QuantityBelowOne => "must be at least 1",
            InvalidReason::PercentOutOfRange => "must be between 0 and 100",
            InvalidReason::NotANumber => "is not a number",
            InvalidReason::Missing => "is required",
            InvalidReason::TooLarge => "is too large to price",
        };
        f.write_str(text)
    }
}
