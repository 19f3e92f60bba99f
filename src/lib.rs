//! Retention instrumentation for a log-archive manager: a byte-counting
//! sink decorator, a closed taxonomy of removal reasons, and a metrics
//! emitter that turns deletion events into tagged counter and histogram
//! updates on an injected Prometheus registry.
//!
//! The archive remover itself, the file-name-pattern parser, and metric
//! transport are external collaborators; this crate only measures and
//! records.

pub mod config;
pub mod counting;
pub mod error;
pub mod metrics;
pub mod removal;
pub mod runtime;
pub mod sink;

pub use config::MetricsConfig;
pub use counting::CountingSink;
pub use error::{Error, Result};
pub use metrics::RetentionMetrics;
pub use removal::RemovalReason;
pub use runtime::RuntimeEnv;
pub use sink::ByteSink;
