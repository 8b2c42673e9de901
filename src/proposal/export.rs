//! CSV export of a generated proposal.

use crate::error::{AppError, Result};

use super::format::format_plain;
use super::models::Proposal;

const HEADERS: [&str; 24] = [
    "proposal_no",
    "proposal_date",
    "site_address",
    "contact_no",
    "architect",
    "email",
    "window_design",
    "window_code",
    "location",
    "glass",
    "profile_colour",
    "width_mm",
    "height_mm",
    "quantity",
    "rate_per_sqft",
    "area_per_unit_sqft",
    "total_area_sqft",
    "total_material_value",
    "installation_charge",
    "freight_charge",
    "total_value",
    "gst_rate_percent",
    "gst_amount",
    "net_payable",
];

/// Render a proposal as a header row plus one data row
pub fn to_csv(proposal: &Proposal) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(HEADERS)?;
    writer.write_record(record(proposal))?;

    let bytes = writer
        .into_inner()
        .map_err(|e| AppError::Internal(format!("Failed to flush CSV: {}", e)))?;
    String::from_utf8(bytes).map_err(|e| AppError::Internal(format!("CSV is not UTF-8: {}", e)))
}

/// Download name derived from the proposal number, e.g. `proposal-208.csv`
pub fn csv_filename(proposal: &Proposal) -> String {
    let slug: String = proposal
        .details
        .proposal_no
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect();

    if slug.is_empty() {
        format!("proposal-{}.csv", proposal.id)
    } else {
        format!("proposal-{}.csv", slug)
    }
}

fn record(proposal: &Proposal) -> Vec<String> {
    let details = &proposal.details;
    let input = &proposal.input;
    let result = &proposal.result;

    vec![
        details.proposal_no.clone(),
        details.proposal_date.to_string(),
        details.site_address.clone(),
        details.contact_no.clone(),
        details.architect.clone(),
        details.email.clone(),
        details.window_design.clone(),
        details.window_code.clone(),
        details.location.clone(),
        details.glass.clone(),
        details.profile_colour.clone(),
        format_plain(input.width_mm),
        format_plain(input.height_mm),
        input.quantity.to_string(),
        format_plain(input.rate_per_sqft),
        result.area_per_unit_sqft.to_string(),
        result.total_area_sqft.to_string(),
        result.total_material_value.to_string(),
        result.installation_charge.to_string(),
        result.freight_charge.to_string(),
        result.total_value.to_string(),
        format_plain(input.gst_rate_percent),
        result.gst_amount.to_string(),
        result.net_payable.to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proposal::tests::sample_proposal;

    #[test]
    fn test_csv_header_and_row() {
        let csv = to_csv(&sample_proposal()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("proposal_no,proposal_date,site_address"));
        assert!(lines[0].ends_with("gst_rate_percent,gst_amount,net_payable"));
        assert_eq!(
            lines[1],
            "208,2025-08-13,\"C-90 Kavi Nagar, Ghaziabad\",,,,\
             SLIMLINE INTERNAL SLIDING FOLDING PARTITION (0+5),\
             SLIMLINE INTERNAL SLIDING FOLDING PARTITION (0+5),-,8MM CLIT,MATT BLACK,\
             3900,3000,1,2765,125.94,125.94,348217.88,25000.00,4000.00,377217.88,18,67899.22,445117.10"
        );
    }

    #[test]
    fn test_csv_round_trips_through_reader() {
        let csv = to_csv(&sample_proposal()).unwrap();
        let mut reader = csv::Reader::from_reader(csv.as_bytes());

        let headers = reader.headers().unwrap().clone();
        let row = reader.records().next().unwrap().unwrap();
        let net_idx = headers.iter().position(|h| h == "net_payable").unwrap();
        assert_eq!(&row[net_idx], "445117.10");
        assert_eq!(&row[2], "C-90 Kavi Nagar, Ghaziabad");
    }

    #[test]
    fn test_csv_filename() {
        let mut proposal = sample_proposal();
        assert_eq!(csv_filename(&proposal), "proposal-208.csv");

        proposal.details.proposal_no = "UP/2025/07".to_string();
        assert_eq!(csv_filename(&proposal), "proposal-UP202507.csv");

        proposal.details.proposal_no = "///".to_string();
        assert_eq!(csv_filename(&proposal), format!("proposal-{}.csv", proposal.id));
    }
}
