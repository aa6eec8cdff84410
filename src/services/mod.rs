//! Services for record normalization, bucketing and analytics

pub mod aggregator;
pub mod analytics;
pub mod bucketer;
pub mod comparison;
pub mod granularity;
pub mod normalizer;
pub mod streak;
pub mod top_n;
pub mod trend;

pub use aggregator::Aggregator;
pub use analytics::{Analytics, Report, StreakSummary};
pub use bucketer::Bucketer;
pub use comparison::ComparisonEngine;
pub use normalizer::{normalize_record, normalize_records, normalize_values, NormalizedRecords};
pub use streak::StreakEngine;
pub use top_n::{TopNCollapser, OTHER_CATEGORY};
pub use trend::TrendEngine;
