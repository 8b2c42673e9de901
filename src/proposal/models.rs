//! Proposal document models

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::pricing::{QuotationInput, QuotationResult};

/// Header and line-item text printed on a proposal. None of it affects pricing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProposalDetails {
    pub proposal_no: String,
    pub proposal_date: NaiveDate,
    pub site_address: String,
    pub contact_no: String,
    pub architect: String,
    pub email: String,
    pub window_design: String,
    pub window_code: String,
    pub location: String,
    pub glass: String,
    pub profile_colour: String,
}

/// A priced proposal ready for rendering or export
#[derive(Debug, Clone, Serialize)]
pub struct Proposal {
    pub id: Uuid,
    pub details: ProposalDetails,
    pub input: QuotationInput,
    pub result: QuotationResult,
    pub generated_at: DateTime<Utc>,
}

impl Proposal {
    pub fn new(details: ProposalDetails, input: QuotationInput, result: QuotationResult) -> Self {
        Self {
            id: Uuid::new_v4(),
            details,
            input,
            result,
            generated_at: Utc::now(),
        }
    }
}
