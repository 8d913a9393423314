//! Core data models for the Experience Engine.
//!
//! This module contains the value types passed into and produced by the
//! duration calculations.

mod duration;
mod experience_period;
mod experience_summary;

pub use duration::{Duration, DurationLabels};
pub use experience_period::ExperiencePeriod;
pub use experience_summary::{ExperienceSummary, PeriodDuration};
