//! # HTTP Surface
//!
//! axum router over a [`CarRepository`]. Handlers stay thin: extract, call the repository,
//! run the query engine when listing, render JSON. Every failure goes out through
//! [`ApiError`].

pub mod error;
pub mod handlers;
pub mod params;

pub use error::ApiError;
pub use params::ListParams;

use crate::clients::CarRepository;
use axum::routing::get;
use axum::Router;
use chrono::NaiveDate;
use std::sync::Arc;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn CarRepository>,
    pub expiring_window_days: u64,
    /// Evaluation date for validity filters and the statistics window.
    pub today: fn() -> NaiveDate,
}

impl AppState {
    pub fn new(repo: Arc<dyn CarRepository>, expiring_window_days: u64) -> Self {
        Self {
            repo,
            expiring_window_days,
            today: local_today,
        }
    }

    /// Pins "today", for tests and reproducible reports.
    pub fn with_clock(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }
}

fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/cars", get(handlers::list_cars).post(handlers::create_car))
        .route(
            "/api/cars/:id",
            get(handlers::get_car)
                .put(handlers::replace_car)
                .patch(handlers::patch_car)
                .delete(handlers::delete_car),
        )
        .route(
            "/api/statistics/expiring-insurance",
            get(handlers::expiring_insurance),
        )
        .with_state(state)
}
