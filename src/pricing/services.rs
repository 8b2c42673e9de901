//! Pricing service entry point.
//!
//! Validates a `QuotationInput` and runs the calculators over it. This is
//! the only function the web layer calls to price a quotation.

use rust_decimal::Decimal;

use super::calculators::{calculate_quotation, ONE_HUNDRED};
use super::models::{InvalidReason, QuotationField, QuotationInput, QuotationResult};

/// Pricing error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PricingError {
    #[error("Invalid {}: {reason}", .field.label())]
    InvalidInput {
        field: QuotationField,
        reason: InvalidReason,
    },
}

impl PricingError {
    pub fn invalid(field: QuotationField, reason: InvalidReason) -> Self {
        PricingError::InvalidInput { field, reason }
    }

    pub fn field(&self) -> QuotationField {
        match self {
            PricingError::InvalidInput { field, .. } => *field,
        }
    }

    pub fn reason(&self) -> InvalidReason {
        match self {
            PricingError::InvalidInput { reason, .. } => *reason,
        }
    }
}

/// Reject inputs the engine must never price.
///
/// Checks run in form order so the first offending field is reported.
pub fn validate_input(input: &QuotationInput) -> Result<(), PricingError> {
    let non_negative = [
        (QuotationField::WidthMm, input.width_mm),
        (QuotationField::HeightMm, input.height_mm),
    ];
    for (field, value) in non_negative {
        if value < Decimal::ZERO {
            return Err(PricingError::invalid(field, InvalidReason::Negative));
        }
    }

    if input.quantity < 1 {
        return Err(PricingError::invalid(
            QuotationField::Quantity,
            InvalidReason::QuantityBelowOne,
        ));
    }

    let non_negative = [
        (QuotationField::RatePerSqft, input.rate_per_sqft),
        (QuotationField::InstallationCharge, input.installation_charge),
        (QuotationField::FreightCharge, input.freight_charge),
    ];
    for (field, value) in non_negative {
        if value < Decimal::ZERO {
            return Err(PricingError::invalid(field, InvalidReason::Negative));
        }
    }

    if input.gst_rate_percent < Decimal::ZERO || input.gst_rate_percent > ONE_HUNDRED {
        return Err(PricingError::invalid(
            QuotationField::GstRatePercent,
            InvalidReason::PercentOutOfRange,
        ));
    }

    Ok(())
}

/// Validate and price a quotation.
pub fn generate_quotation(input: &QuotationInput) -> Result<QuotationResult, PricingError> {
    if let Err(e) = validate_input(input) {
        tracing::debug!(field = %e.field(), reason = %e.reason(), "Rejected quotation input");
        return Err(e);
    }

    let result = calculate_quotation(input)?;
    tracing::debug!(
        total_area_sqft = %result.total_area_sqft,
        total_value = %result.total_value,
        net_payable = %result.net_payable,
        "Quotation calculated"
    );
    Ok(result)
}
