//! Core pricing calculation functions.
//!
//! Pure functions for quotation math - no I/O, no shared state.
//!
//! Rounding convention: the area chain (area per unit, total area, material
//! value) is carried at full precision and each value quantized on output.
//! The money chain builds on the quantized material value, charges and total
//! value so that the lines printed on a proposal always add up.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

use super::models::{InvalidReason, QuotationField, QuotationInput, QuotationResult};
use super::services::PricingError;

/// Square millimetres in one square foot (304.8mm x 304.8mm)
pub const SQ_MM_PER_SQFT: Decimal = Decimal::from_parts(9_290_304, 0, 0, false, 2);

pub const ONE_HUNDRED: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// Decimal places for every currency and area output
pub const MONEY_PLACES: u32 = 2;

/// Round to specified decimal places using commercial rounding (ROUND_HALF_UP).
///
/// Midpoints round away from zero, and the result always carries exactly
/// `places` decimal places so `25` renders as `25.00`.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use upvc_proposal::pricing::round_money;
///
/// assert_eq!(round_money(dec!(2.5), 0), dec!(3));
/// assert_eq!(round_money(dec!(10.005), 2), dec!(10.01));
/// assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
/// assert_eq!(round_money(dec!(25), 2).to_string(), "25.00");
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(places);
    rounded
}

/// Area of one window in square feet, at full precision.
///
/// Returns `None` if the product of the dimensions overflows.
pub fn area_sqft(width_mm: Decimal, height_mm: Decimal) -> Option<Decimal> {
    if width_mm.is_zero() || height_mm.is_zero() {
        return Some(Decimal::ZERO);
    }
    width_mm.checked_mul(height_mm)?.checked_div(SQ_MM_PER_SQFT)
}

/// Compute the quotation summary for an already validated input.
///
/// Callers outside this module should go through
/// [`generate_quotation`](super::services::generate_quotation), which
/// validates first.
pub fn calculate_quotation(input: &QuotationInput) -> Result<QuotationResult, PricingError> {
    let too_large = |field| PricingError::invalid(field, InvalidReason::TooLarge);

    let area_per_unit = area_sqft(input.width_mm, input.height_mm)
        .ok_or_else(|| too_large(QuotationField::WidthMm))?;

    let total_area = area_per_unit
        .checked_mul(Decimal::from(input.quantity))
        .ok_or_else(|| too_large(QuotationField::Quantity))?;

    let material = total_area
        .checked_mul(input.rate_per_sqft)
        .ok_or_else(|| too_large(QuotationField::RatePerSqft))?;
    let total_material_value = round_money(material, MONEY_PLACES);

    let installation_charge = round_money(input.installation_charge, MONEY_PLACES);
    let freight_charge = round_money(input.freight_charge, MONEY_PLACES);

    // Every addend is already at 2 dp, so the sum needs no rounding
    let total_value = total_material_value
        .checked_add(installation_charge)
        .ok_or_else(|| too_large(QuotationField::InstallationCharge))?
        .checked_add(freight_charge)
        .ok_or_else(|| too_large(QuotationField::FreightCharge))?;

    let gst = total_value
        .checked_mul(input.gst_rate_percent / ONE_HUNDRED)
        .ok_or_else(|| too_large(QuotationField::GstRatePercent))?;
    let gst_amount = round_money(gst, MONEY_PLACES);

    let net = total_value
        .checked_add(gst_amount)
        .ok_or_else(|| too_large(QuotationField::GstRatePercent))?;

    Ok(QuotationResult {
        area_per_unit_sqft: round_money(area_per_unit, MONEY_PLACES),
        total_area_sqft: round_money(total_area, MONEY_PLACES),
        total_material_value,
        installation_charge,
        freight_charge,
        total_value,
        gst_amount,
        net_payable: round_money(net, MONEY_PLACES),
    })
}
