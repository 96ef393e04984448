use sqlx::PgPool;
use uuid::Uuid;

use crate::models::Company;

pub async fn list_all(pool: &PgPool) -> Result<Vec<Company>, sqlx::Error> {
    sqlx::query_as::<_, Company>("SELECT * FROM companies ORDER BY created_at")
        .fetch_all(pool)
        .await
}

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Company>, sqlx::Error> {
    sqlx::query_as::<_, Company>("SELECT * FROM companies WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn insert<'e, E: sqlx::PgExecutor<'e>>(
    executor: E,
    company_name: &str,
    email: Option<&str>,
    user_id: Option<Uuid>,
) -> Result<Company, sqlx::Error> {
    sqlx::query_as::<_, Company>(
        "INSERT INTO companies (company_name, email, user_id)
         VALUES ($1, $2, $3) RETURNING *",
    )
    .bind(company_name)
    .bind(email)
    .bind(user_id)
    .fetch_one(executor)
    .await
}

pub async fn update<'e, E: sqlx::PgExecutor<'e>>(
    executor: E,
    id: Uuid,
    company_name: &str,
) -> Result<Company, sqlx::Error> {
    sqlx::query_as::<_, Company>(
        "UPDATE companies SET company_name = $2 WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(company_name)
    .fetch_one(executor)
    .await
}

pub async fn delete<'e, E: sqlx::PgExecutor<'e>>(executor: E, id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM companies WHERE id = $1")
        .bind(id)
        .execute(executor)
        .await?;
    Ok(())
}
