use prometheus::{HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry};
use tracing::debug;

use crate::config::MetricsConfig;
use crate::error::{Error, Result};
use crate::removal::RemovalReason;
use crate::runtime::RuntimeEnv;

/// Metrics describing archived log files deleted by retention.
///
/// Both metrics are partitioned by the `reason` and `file_name_pattern`
/// labels: events sharing both labels update the same series, anything else
/// is a distinct series. Label values are taken verbatim from
/// [`RemovalReason::as_str`] and the raw pattern string, so callers must
/// supply stable, cardinality-bounded patterns.
///
/// The registry is injected by the caller; this crate owns no global state.
/// Recording never fails and never blocks the deletion it describes — the
/// only loud failure point is construction.
#[derive(Debug)]
pub struct RetentionMetrics {
    deleted_files: IntCounterVec,
    deleted_file_size: HistogramVec,
}

impl RetentionMetrics {
    /// Create and register the retention metrics.
    pub fn new(registry: &Registry, config: &MetricsConfig) -> Result<Self> {
        let deleted_files = IntCounterVec::new(
            Opts::new(
                "log_files_deleted",
                "Number of archived log files deleted by retention",
            )
            .namespace(config.namespace.clone()),
            &["reason", "file_name_pattern"],
        )
        .map_err(|e| {
            Error::MetricsUnavailable(format!("failed to create log_files_deleted metric: {e}"))
        })?;

        let deleted_file_size = HistogramVec::new(
            HistogramOpts::new(
                "deleted_log_file_size",
                "Size in bytes of archived log files deleted by retention",
            )
            .namespace(config.namespace.clone())
            .buckets(config.size_buckets.clone()),
            &["reason", "file_name_pattern"],
        )
        .map_err(|e| {
            Error::MetricsUnavailable(format!(
                "failed to create deleted_log_file_size metric: {e}"
            ))
        })?;

        registry
            .register(Box::new(deleted_files.clone()))
            .map_err(|e| {
                Error::MetricsUnavailable(format!("failed to register log_files_deleted: {e}"))
            })?;
        registry
            .register(Box::new(deleted_file_size.clone()))
            .map_err(|e| {
                Error::MetricsUnavailable(format!("failed to register deleted_log_file_size: {e}"))
            })?;

        let env = RuntimeEnv::current();
        debug!(
            os = env.os(),
            version = env.version(),
            namespace = %config.namespace,
            "retention metrics registered"
        );

        Ok(Self {
            deleted_files,
            deleted_file_size,
        })
    }

    /// Count one deletion of a file matching `file_name_pattern`, removed
    /// for `reason`. First use of a (reason, pattern) pair creates its
    /// series; concurrent first use resolves to the same series.
    pub fn record_deletion(&self, reason: RemovalReason, file_name_pattern: &str) {
        self.deleted_files
            .with_label_values(&[reason.as_str(), file_name_pattern])
            .inc();
    }

    /// Record the size of one deleted file into the size distribution for
    /// (reason, pattern). Independent of the deletion counter.
    pub fn record_deleted_size(
        &self,
        reason: RemovalReason,
        file_name_pattern: &str,
        size_bytes: u64,
    ) {
        self.deleted_file_size
            .with_label_values(&[reason.as_str(), file_name_pattern])
            .observe(size_bytes as f64);
    }
}
