//! Experience Engine
//!
//! This crate computes calendar-accurate elapsed time between pairs of dates
//! and aggregates many such periods into a single normalized duration of
//! years, months and days. It also exposes the calculations over a small
//! JSON HTTP API.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
