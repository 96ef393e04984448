pub mod appointments;
pub mod auth;
pub mod companies;
pub mod customers;
pub mod history;

use axum::routing::{get, post};
use axum::Router;

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        // Auth
        .route("/api/v1/auth/register", post(auth::register))
        .route("/api/v1/auth/login", post(auth::login))
        // Customers
        .route(
            "/api/v1/customers",
            get(customers::list).post(customers::create),
        )
        .route(
            "/api/v1/customers/{id}",
            get(customers::get)
                .put(customers::update)
                .delete(customers::delete),
        )
        .route(
            "/api/v1/customers/{id}/appointments",
            get(customers::appointments),
        )
        .route(
            "/api/v1/customers/{id}/appointments/week/{year}/{week}",
            get(customers::appointments_in_week),
        )
        // Companies
        .route("/api/v1/companies", get(companies::list))
        .route("/api/v1/companies/account", post(companies::create_account))
        .route(
            "/api/v1/companies/bookings/week/{year}/{week}",
            get(companies::bookings_in_week),
        )
        .route(
            "/api/v1/companies/bookings/month/{year}/{month}",
            get(companies::bookings_in_month),
        )
        .route(
            "/api/v1/companies/{id}",
            get(companies::get)
                .put(companies::update)
                .delete(companies::delete),
        )
        // Appointments
        .route(
            "/api/v1/appointments",
            get(appointments::list).post(appointments::create),
        )
        .route(
            "/api/v1/appointments/current-week/customers",
            get(appointments::current_week_customers),
        )
        .route(
            "/api/v1/appointments/{id}",
            get(appointments::get)
                .put(appointments::update)
                .delete(appointments::delete),
        )
        // History
        .route("/api/v1/history", get(history::list))
}
