//! Request types for the Experience Engine API.
//!
//! Dates arrive as strings rather than parsed dates so that an unparseable
//! date reaches the calculator, which counts it as zero, instead of failing
//! the whole request at deserialization.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::ExperiencePeriod;

/// Request body for the `/duration` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DurationRequest {
    /// The first day of the period (inclusive).
    pub start_date: String,
    /// The last day of the period (inclusive).
    pub end_date: String,
}

/// One period in a `/summary` request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodRequest {
    /// Optional caller identifier, echoed back in the response.
    #[serde(default)]
    pub id: Option<String>,
    /// The first day of the period (inclusive).
    pub start_date: String,
    /// The last day of the period (inclusive).
    pub end_date: String,
}

/// Request body for the `/summary` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRequest {
    /// The periods to calculate and total.
    #[serde(default)]
    pub periods: Vec<PeriodRequest>,
}

/// Query parameters shared by the calculation endpoints.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CalculationOptions {
    /// Reject invalid periods with an error instead of counting them as zero.
    #[serde(default)]
    pub strict: bool,
}

impl From<ExperiencePeriod> for PeriodRequest {
    fn from(period: ExperiencePeriod) -> Self {
        PeriodRequest {
            id: Some(period.id),
            start_date: iso(period.start_date),
            end_date: iso(period.end_date),
        }
    }
}

fn iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
