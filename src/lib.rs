//! Time-series aggregation and trend analytics for personal tracking records

pub mod services;
pub mod types;
