//! HTTP API module for the Experience Engine.
//!
//! This module provides the JSON endpoints for calculating the duration of
//! a single period and summarizing a list of periods.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationOptions, DurationRequest, PeriodRequest, SummaryRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
