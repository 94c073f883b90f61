pub mod fixed;
pub mod metrics;

pub use fixed::FixedMetricsProvider;
pub use metrics::{GlyphMetrics, MetricsError, MetricsProvider};
