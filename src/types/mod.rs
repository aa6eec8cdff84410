//! Type definitions for trendline

mod config;
mod date;
mod error;
mod record;
mod series;
mod stats;
mod window;

pub use config::*;
pub use date::*;
pub use error::*;
pub use record::*;
pub use series::*;
pub use stats::*;
pub use window::*;
