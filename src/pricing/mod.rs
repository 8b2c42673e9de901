//! Pricing engine module.
//!
//! Turns window dimensions, rate and charges into a quotation summary
//! (area, material value, GST, net payable). The calculators are pure; the
//! routes expose them as a JSON API.

pub mod calculators;
pub mod models;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod services;

// Re-export commonly used items
pub use calculators::round_money;
pub use models::{InvalidReason, QuotationField, QuotationInput, QuotationResult};
pub use routes::router;
pub use services::{generate_quotation, PricingError};
