//! Proposal route handlers

use askama::Template;
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::pricing::generate_quotation;
use crate::proposal::format::{format_money, format_plain};
use crate::proposal::{csv_filename, to_csv, FormError, Proposal, ProposalForm};
use crate::AppState;

/// Proposal input form template
#[derive(Template)]
#[template(path = "proposal/form.html")]
struct ProposalFormTemplate {
    form: ProposalForm,
    currency: String,
    has_error: bool,
    error_message: String,
}

/// Rendered proposal template
#[derive(Template)]
#[template(path = "proposal/show.html")]
struct ProposalTemplate {
    id: String,
    proposal_no: String,
    proposal_date: String,
    site_address: String,
    contact_no: String,
    architect: String,
    email: String,
    window_design: String,
    window_code: String,
    location: String,
    glass: String,
    profile_colour: String,
    dimensions: String,
    area_per_unit: String,
    quantity: i32,
    total_area: String,
    total_material_value: String,
    installation_charge: String,
    freight_charge: String,
    total_value: String,
    gst_rate: String,
    gst_amount: String,
    net_payable: String,
    currency: String,
    generated_at: String,
}

impl ProposalTemplate {
    fn new(proposal: &Proposal, currency: &str) -> Self {
        let details = &proposal.details;
        let input = &proposal.input;
        let result = &proposal.result;

        Self {
            id: proposal.id.to_string(),
            proposal_no: details.proposal_no.clone(),
            proposal_date: details.proposal_date.format("%d-%m-%Y").to_string(),
            site_address: details.site_address.clone(),
            contact_no: details.contact_no.clone(),
            architect: details.architect.clone(),
            email: details.email.clone(),
            window_design: details.window_design.clone(),
            window_code: details.window_code.clone(),
            location: details.location.clone(),
            glass: details.glass.clone(),
            profile_colour: details.profile_colour.clone(),
            dimensions: format!(
                "{} × {}",
                format_plain(input.width_mm),
                format_plain(input.height_mm)
            ),
            area_per_unit: format_money(result.area_per_unit_sqft),
            quantity: input.quantity,
            total_area: format_money(result.total_area_sqft),
            total_material_value: format_money(result.total_material_value),
            installation_charge: format_money(result.installation_charge),
            freight_charge: format_money(result.freight_charge),
            total_value: format_money(result.total_value),
            gst_rate: format_plain(input.gst_rate_percent),
            gst_amount: format_money(result.gst_amount),
            net_payable: format_money(result.net_payable),
            currency: currency.to_string(),
            generated_at: proposal.generated_at.format("%Y-%m-%d %H:%M UTC").to_string(),
        }
    }
}

/// Blank proposal form
pub async fn new_form(State(state): State<AppState>) -> Result<Html<String>> {
    render_form(ProposalForm::with_defaults(&state.config), &state.config.currency, None)
}

/// Price the submitted form and redirect to the generated proposal
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<ProposalForm>,
) -> Result<Response> {
    match build_proposal(&form) {
        Ok(proposal) => {
            let proposal = state.cache.insert(proposal).await;
            tracing::info!(
                id = %proposal.id,
                proposal_no = %proposal.details.proposal_no,
                net_payable = %proposal.result.net_payable,
                "Proposal generated"
            );
            Ok(Redirect::to(&format!("/proposals/{}", proposal.id)).into_response())
        }
        Err(e) => {
            tracing::info!("Proposal form rejected: {}", e);
            let page = render_form(form, &state.config.currency, Some(e.to_string()))?;
            Ok((StatusCode::UNPROCESSABLE_ENTITY, page).into_response())
        }
    }
}

/// Generated proposal page
pub async fn show(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<Html<String>> {
    let proposal = state.cache.get(&id).await.ok_or(AppError::NotFound)?;
    let template = ProposalTemplate::new(&proposal, &state.config.currency);
    Ok(Html(template.render()?))
}

/// Proposal as a CSV download
pub async fn export_csv(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<Response> {
    let proposal = state.cache.get(&id).await.ok_or(AppError::NotFound)?;
    let body = to_csv(&proposal)?;
    tracing::debug!(id = %proposal.id, "Proposal exported as CSV");

    let headers = [
        (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", csv_filename(&proposal)),
        ),
    ];
    Ok((headers, body).into_response())
}

fn build_proposal(form: &ProposalForm) -> std::result::Result<Proposal, FormError> {
    let (details, input) = form.parse()?;
    let result = generate_quotation(&input)?;
    Ok(Proposal::new(details, input, result))
}

fn render_form(form: ProposalForm, currency: &str, error: Option<String>) -> Result<Html<String>> {
    let template = ProposalFormTemplate {
        form,
        currency: currency.to_string(),
        has_error: error.is_some(),
        error_message: error.unwrap_or_default(),
    };
    Ok(Html(template.render()?))
}
