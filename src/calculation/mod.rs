//! Calculation logic for the Experience Engine.
//!
//! This module contains date parsing and display formatting, the
//! calendar-accurate duration between two dates, the normalized sum of many
//! durations, and the summary built from both.

mod date_parsing;
mod duration_aggregator;
mod duration_calculator;
mod summary;

pub use date_parsing::{
    DEFAULT_DISPLAY_FORMAT, DEFAULT_INPUT_FORMATS, format_display_date, is_valid_format,
    parse_calendar_date, parse_calendar_date_with,
};
pub use duration_aggregator::{DAYS_PER_AGGREGATE_MONTH, MONTHS_PER_YEAR, sum_durations};
pub use duration_calculator::{
    calculate_duration, calculate_duration_from_str, try_calculate_duration,
    try_calculate_duration_from_str, try_calculate_duration_with_formats,
};
pub use summary::{
    calculate_experience_period, calculate_period, summarize_experience, summarize_periods,
};
