use std::fmt;

/// Why the archive remover deleted an archived log file.
///
/// The set is closed: callers pick the variant for the policy that actually
/// triggered the deletion, and consumers can match exhaustively. Adding a
/// variant is a backward-compatible extension; renaming or removing one
/// breaks every consumer of historical metric series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemovalReason {
    /// The file aged past the configured retention window.
    MaxHistoryExceeded,
    /// Cumulative archive size exceeded the configured cap.
    TotalSizeCapExceeded,
}

impl RemovalReason {
    /// Stable tag value used verbatim in metric labels. These strings are
    /// part of externally stored series identities and must not change
    /// without a coordinated migration.
    pub const fn as_str(&self) -> &'static str {
        match self {
            RemovalReason::MaxHistoryExceeded => "MAX_HISTORY",
            RemovalReason::TotalSizeCapExceeded => "TOTAL_SIZE_CAP",
        }
    }
}

impl fmt::Display for RemovalReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
