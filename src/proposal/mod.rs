//! Proposal documents: the customer-facing wrapper around a quotation.

pub mod export;
pub mod form;
pub mod format;
pub mod models;

pub use export::{csv_filename, to_csv};
pub use form::{FormError, ProposalForm};
pub use models::{Proposal, ProposalDetails};
