//! Proposal form input.
//!
//! Browsers submit every field as text. Parsing into decimals happens here,
//! at the boundary, before anything reaches the pricing engine.

use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;

use super::format::format_plain;
use super::models::ProposalDetails;
use crate::config::AppConfig;
use crate::pricing::{InvalidReason, PricingError, QuotationField, QuotationInput};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Form parsing errors
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error(transparent)]
    Pricing(#[from] PricingError),

    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),
}

/// Raw proposal form as submitted. Missing fields deserialize as empty text.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProposalForm {
    pub proposal_no: String,
    pub proposal_date: String,
    pub site_address: String,
    pub contact_no: String,
    pub architect: String,
    pub email: String,
    pub window_design: String,
    pub window_code: String,
    pub location: String,
    pub glass: String,
    pub profile_colour: String,
    pub width_mm: String,
    pub height_mm: String,
    pub quantity: String,
    pub rate_per_sqft: String,
    pub installation_charge: String,
    pub freight_charge: String,
    pub gst_rate_percent: String,
}

impl ProposalForm {
    /// Form pre-filled for a slimline sliding folding partition
    pub fn with_defaults(config: &AppConfig) -> Self {
        let design = "SLIMLINE INTERNAL SLIDING FOLDING PARTITION (0+5)".to_string();
        Self {
            proposal_no: "208".to_string(),
            proposal_date: Local::now().date_naive().format(DATE_FORMAT).to_string(),
            site_address: "C-90 Kavi Nagar, Ghaziabad".to_string(),
            contact_no: String::new(),
            architect: String::new(),
            email: String::new(),
            window_code: design.clone(),
            window_design: design,
            location: "-".to_string(),
            glass: "8MM CLIT".to_string(),
            profile_colour: "MATT BLACK".to_string(),
            width_mm: "3900".to_string(),
            height_mm: "3000".to_string(),
            quantity: "1".to_string(),
            rate_per_sqft: "2765.0".to_string(),
            installation_charge: "25000.0".to_string(),
            freight_charge: "4000.0".to_string(),
            gst_rate_percent: format_plain(config.default_gst_rate),
        }
    }

    /// Split the form into proposal text and a typed quotation input.
    ///
    /// Only parsing happens here; range checks belong to the pricing engine.
    pub fn parse(&self) -> Result<(ProposalDetails, QuotationInput), FormError> {
        let input = QuotationInput {
            width_mm: parse_decimal(QuotationField::WidthMm, &self.width_mm)?,
            height_mm: parse_decimal(QuotationField::HeightMm, &self.height_mm)?,
            quantity: parse_quantity(&self.quantity)?,
            rate_per_sqft: parse_decimal(QuotationField::RatePerSqft, &self.rate_per_sqft)?,
            installation_charge: parse_decimal(
                QuotationField::InstallationCharge,
                &self.installation_charge,
            )?,
            freight_charge: parse_decimal(QuotationField::FreightCharge, &self.freight_charge)?,
            gst_rate_percent: parse_decimal(
                QuotationField::GstRatePercent,
                &self.gst_rate_percent,
            )?,
        };

        let details = ProposalDetails {
            proposal_no: self.proposal_no.trim().to_string(),
            proposal_date: parse_date(&self.proposal_date)?,
            site_address: self.site_address.trim().to_string(),
            contact_no: self.contact_no.trim().to_string(),
            architect: self.architect.trim().to_string(),
            email: self.email.trim().to_string(),
            window_design: self.window_design.trim().to_string(),
            window_code: self.window_code.trim().to_string(),
            location: non_empty_or_dash(&self.location),
            glass: self.glass.trim().to_string(),
            profile_colour: self.profile_colour.trim().to_string(),
        };

        Ok((details, input))
    }
}

/// Parse a decimal field, tolerating surrounding whitespace and `,` grouping.
fn parse_decimal(field: QuotationField, raw: &str) -> Result<Decimal, PricingError> {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() {
        return Err(PricingError::invalid(field, InvalidReason::NotANumber));
    }
    Decimal::from_str(&cleaned).map_err(|_| PricingError::invalid(field, InvalidReason::NotANumber))
}

/// Whole-number count, with the same `,` grouping as decimal fields
fn parse_quantity(raw: &str) -> Result<i32, PricingError> {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();
    cleaned
        .parse::<i32>()
        .map_err(|_| PricingError::invalid(QuotationField::Quantity, InvalidReason::NotANumber))
}

/// An empty date means today
fn parse_date(raw: &str) -> Result<NaiveDate, FormError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(Local::now().date_naive());
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| FormError::InvalidDate(raw.to_string()))
}

fn non_empty_or_dash(raw: &str) -> String {
    match raw.trim() {
        "" => "-".to_string(),
        text => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn default_form() -> ProposalForm {
        ProposalForm::with_defaults(&AppConfig::default())
    }

    #[test]
    fn test_defaults_parse() {
        let (details, input) = default_form().parse().unwrap();

        assert_eq!(details.proposal_no, "208");
        assert_eq!(details.proposal_date, Local::now().date_naive());
        assert_eq!(details.profile_colour, "MATT BLACK");
        assert_eq!(input.width_mm, dec!(3900));
        assert_eq!(input.height_mm, dec!(3000));
        assert_eq!(input.quantity, 1);
        assert_eq!(input.rate_per_sqft, dec!(2765));
        assert_eq!(input.installation_charge, dec!(25000));
        assert_eq!(input.freight_charge, dec!(4000));
        assert_eq!(input.gst_rate_percent, dec!(18));
    }

    #[test]
    fn test_grouped_and_padded_numbers() {
        let form = ProposalForm {
            installation_charge: " 25,000.50 ".to_string(),
            quantity: " 3 ".to_string(),
            ..default_form()
        };
        let (_, input) = form.parse().unwrap();
        assert_eq!(input.installation_charge, dec!(25000.50));
        assert_eq!(input.quantity, 3);

        let form = ProposalForm {
            quantity: "1,000".to_string(),
            ..default_form()
        };
        let (_, input) = form.parse().unwrap();
        assert_eq!(input.quantity, 1000);
    }

    #[test]
    fn test_not_a_number() {
        let form = ProposalForm {
            rate_per_sqft: "abc".to_string(),
            ..default_form()
        };
        match form.parse().unwrap_err() {
            FormError::Pricing(e) => {
                assert_eq!(e.field(), QuotationField::RatePerSqft);
                assert_eq!(e.reason(), InvalidReason::NotANumber);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_empty_number_rejected() {
        let form = ProposalForm {
            width_mm: "".to_string(),
            ..default_form()
        };
        assert!(matches!(
            form.parse().unwrap_err(),
            FormError::Pricing(PricingError::InvalidInput {
                field: QuotationField::WidthMm,
                reason: InvalidReason::NotANumber,
            })
        ));
    }

    #[test]
    fn test_fractional_quantity_rejected() {
        let form = ProposalForm {
            quantity: "1.5".to_string(),
            ..default_form()
        };
        assert!(matches!(
            form.parse().unwrap_err(),
            FormError::Pricing(PricingError::InvalidInput {
                field: QuotationField::Quantity,
                ..
            })
        ));
    }

    #[test]
    fn test_negative_values_pass_through_to_validation() {
        let form = ProposalForm {
            freight_charge: "-10".to_string(),
            quantity: "0".to_string(),
            ..default_form()
        };
        let (_, input) = form.parse().unwrap();
        assert_eq!(input.freight_charge, dec!(-10));
        assert_eq!(input.quantity, 0);
    }

    #[test]
    fn test_dates() {
        let form = ProposalForm {
            proposal_date: "2025-08-13".to_string(),
            ..default_form()
        };
        let (details, _) = form.parse().unwrap();
        assert_eq!(details.proposal_date, NaiveDate::from_ymd_opt(2025, 8, 13).unwrap());

        let form = ProposalForm {
            proposal_date: "13/08/2025".to_string(),
            ..default_form()
        };
        assert!(matches!(form.parse().unwrap_err(), FormError::InvalidDate(_)));
    }

    #[test]
    fn test_blank_location_shows_dash() {
        let form = ProposalForm {
            location: "  ".to_string(),
            ..default_form()
        };
        let (details, _) = form.parse().unwrap();
        assert_eq!(details.location, "-");
    }
}
