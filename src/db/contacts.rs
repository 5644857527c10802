use sqlx::PgPool;

use crate::models::Contact;

/// Insert one submission. `id` and `submission_date` come from the store.
pub async fn create(
    pool: &PgPool,
    name: &str,
    email: &str,
    company: &str,
    message: &str,
) -> Result<Contact, sqlx::Error> {
    sqlx::query_as::<_, Contact>(
        "INSERT INTO contacts (name, email, company, message)
         VALUES ($1, $2, $3, $4) RETURNING *",
    )
    .bind(name)
    .bind(email)
    .bind(company)
    .bind(message)
    .fetch_one(pool)
    .await
}
