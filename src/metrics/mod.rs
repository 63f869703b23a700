//! Performance metrics of the published posts.
//!
//! - `performance` - Mock audience figures refreshed on a fixed interval
//! - `trend` - Engagement trend between the two latest windows of posts
//!
//! The rest of the dashboard only reads from this module.

mod performance;
mod trend;

pub use crate::metrics::performance::{MetricsSnapshot, OptimalTime, PerformanceTracker};
pub use crate::metrics::trend::engagement_trend;
