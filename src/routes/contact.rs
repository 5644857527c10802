use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use crate::db;
use crate::error::AppError;
use crate::state::SharedState;

#[derive(Debug, Deserialize)]
pub struct ContactForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub company: Option<String>,
    pub message: Option<String>,
}

/// Process one submission: validate, persist, then the two emails in
/// sequence. Any persist/mail failure aborts the remaining steps; the row
/// written before a mail failure stays in place.
pub async fn submit(
    State(state): State<SharedState>,
    Json(form): Json<ContactForm>,
) -> Result<Json<serde_json::Value>, AppError> {
    let name = form.name.unwrap_or_default();
    let email = form.email.unwrap_or_default();
    let message = form.message.unwrap_or_default();

    if name.is_empty() || email.is_empty() || message.is_empty() {
        return Err(AppError::Validation(
            "Name, email, and message are required.".to_string(),
        ));
    }

    let company = form.company.unwrap_or_default();

    let contact = db::contacts::create(&state.pool, &name, &email, &company, &message).await?;
    tracing::info!(id = %contact.id, "Contact submission stored");

    state
        .mailer
        .send_acknowledgment(&contact)
        .await
        .map_err(AppError::Mail)?;
    tracing::info!(id = %contact.id, "Acknowledgment email sent to submitter");

    state
        .mailer
        .send_operator_notice(&contact)
        .await
        .map_err(AppError::Mail)?;
    tracing::info!(id = %contact.id, "Operator notification email sent");

    Ok(Json(json!({ "message": "Message sent successfully! Thank you." })))
}
