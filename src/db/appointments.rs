use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{Appointment, Customer};

pub async fn list_all(pool: &PgPool) -> Result<Vec<Appointment>, sqlx::Error> {
    sqlx::query_as::<_, Appointment>("SELECT * FROM appointments ORDER BY booking_date")
        .fetch_all(pool)
        .await
}

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Appointment>, sqlx::Error> {
    sqlx::query_as::<_, Appointment>("SELECT * FROM appointments WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// A customer's appointments that are not soft-deleted.
pub async fn list_active_for_customer(
    pool: &PgPool,
    customer_id: Uuid,
) -> Result<Vec<Appointment>, sqlx::Error> {
    sqlx::query_as::<_, Appointment>(
        "SELECT * FROM appointments
         WHERE customer_id = $1 AND is_deleted = false ORDER BY attend_date",
    )
    .bind(customer_id)
    .fetch_all(pool)
    .await
}

/// Appointments attending within [start, end], for the week/month reports.
pub async fn list_in_range(
    pool: &PgPool,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Result<Vec<Appointment>, sqlx::Error> {
    sqlx::query_as::<_, Appointment>(
        "SELECT * FROM appointments
         WHERE attend_date >= $1 AND attend_date <= $2 ORDER BY attend_date",
    )
    .bind(start)
    .bind(end)
    .fetch_all(pool)
    .await
}

/// Distinct customers holding at least one appointment in [start, end].
pub async fn customers_with_appointments_in_range(
    pool: &PgPool,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Result<Vec<Customer>, sqlx::Error> {
    sqlx::query_as::<_, Customer>(
        "SELECT DISTINCT c.* FROM customers c
         JOIN appointments a ON a.customer_id = c.id
         WHERE a.attend_date >= $1 AND a.attend_date <= $2",
    )
    .bind(start)
    .bind(end)
    .fetch_all(pool)
    .await
}

pub async fn insert<'e, E: sqlx::PgExecutor<'e>>(
    executor: E,
    customer_id: Uuid,
    attend_date: DateTime<Utc>,
) -> Result<Appointment, sqlx::Error> {
    sqlx::query_as::<_, Appointment>(
        "INSERT INTO appointments (customer_id, attend_date)
         VALUES ($1, $2) RETURNING *",
    )
    .bind(customer_id)
    .bind(attend_date)
    .fetch_one(executor)
    .await
}

pub async fn update<'e, E: sqlx::PgExecutor<'e>>(
    executor: E,
    id: Uuid,
    attend_date: DateTime<Utc>,
    is_deleted: bool,
) -> Result<Appointment, sqlx::Error> {
    sqlx::query_as::<_, Appointment>(
        "UPDATE appointments SET attend_date = $2, is_deleted = $3
         WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(attend_date)
    .bind(is_deleted)
    .fetch_one(executor)
    .await
}

pub async fn delete<'e, E: sqlx::PgExecutor<'e>>(executor: E, id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM appointments WHERE id = $1")
        .bind(id)
        .execute(executor)
        .await?;
    Ok(())
}
