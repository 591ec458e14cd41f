use std::fmt;

/// Severity of a log message, ordered by integer rank.
///
/// The scale is open: the host application backs its levels with plain
/// integers, so [`from_rank`](Self::from_rank) accepts any value. Ranks
/// outside the four named levels still flow through the pipeline and are
/// handled by the fallback branches in the formatter and the dispatcher.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LogLevel(i32);

impl LogLevel {
    /// Messages intended purely for debugging during development.
    /// Visible only when the logger runs at its most verbose threshold.
    pub const DEVELOPMENT: LogLevel = LogLevel(-1);
    /// General informational messages about program progress.
    pub const INFO: LogLevel = LogLevel(0);
    /// Potential problems that do not stop execution but may need attention.
    pub const WARNING: LogLevel = LogLevel(1);
    /// Critical failures that require immediate attention.
    pub const ERROR: LogLevel = LogLevel(2);

    /// Builds a level from a raw rank. Total: unmapped ranks are kept as-is.
    #[must_use]
    pub const fn from_rank(rank: i32) -> Self {
        Self(rank)
    }

    /// Integer rank of the level. Higher means more severe.
    #[must_use]
    pub const fn rank(self) -> i32 {
        self.0
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            -1 => write!(f, "Development"),
            0 => write!(f, "Info"),
            1 => write!(f, "Warning"),
            2 => write!(f, "Error"),
            n => write!(f, "{n}"),
        }
    }
}
