use sqlx::PgPool;
use uuid::Uuid;

use crate::models::Customer;

pub async fn list_all(pool: &PgPool) -> Result<Vec<Customer>, sqlx::Error> {
    sqlx::query_as::<_, Customer>("SELECT * FROM customers ORDER BY created_at")
        .fetch_all(pool)
        .await
}

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Customer>, sqlx::Error> {
    sqlx::query_as::<_, Customer>("SELECT * FROM customers WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn insert<'e, E: sqlx::PgExecutor<'e>>(
    executor: E,
    first_name: &str,
    last_name: &str,
    email: Option<&str>,
    phone: Option<&str>,
    user_id: Option<Uuid>,
) -> Result<Customer, sqlx::Error> {
    sqlx::query_as::<_, Customer>(
        "INSERT INTO customers (first_name, last_name, email, phone, user_id)
         VALUES ($1, $2, $3, $4, $5) RETURNING *",
    )
    .bind(first_name)
    .bind(last_name)
    .bind(email)
    .bind(phone)
    .bind(user_id)
    .fetch_one(executor)
    .await
}

pub async fn update<'e, E: sqlx::PgExecutor<'e>>(
    executor: E,
    id: Uuid,
    first_name: &str,
    last_name: &str,
    email: Option<&str>,
    phone: Option<&str>,
) -> Result<Customer, sqlx::Error> {
    sqlx::query_as::<_, Customer>(
        "UPDATE customers SET first_name = $2, last_name = $3, email = $4, phone = $5
         WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(first_name)
    .bind(last_name)
    .bind(email)
    .bind(phone)
    .fetch_one(executor)
    .await
}

pub async fn delete<'e, E: sqlx::PgExecutor<'e>>(executor: E, id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM customers WHERE id = $1")
        .bind(id)
        .execute(executor)
        .await?;
    Ok(())
}

/// Count of a customer's appointments attending within [start, end].
pub async fn count_appointments_in_range(
    pool: &PgPool,
    customer_id: Uuid,
    start: chrono::DateTime<chrono::Utc>,
    end: chrono::DateTime<chrono::Utc>,
) -> Result<i64, sqlx::Error> {
    let row: (i64,) = sqlx::query_as(
        "SELECT COUNT(*) FROM appointments
         WHERE customer_id = $1 AND attend_date >= $2 AND attend_date <= $3",
    )
    .bind(customer_id)
    .bind(start)
    .bind(end)
    .fetch_one(pool)
    .await?;
    Ok(row.0)
}
