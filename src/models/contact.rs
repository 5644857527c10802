use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One contact-form entry. Written once at submission time, never updated.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Contact {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
    pub submission_date: DateTime<Utc>,
}
