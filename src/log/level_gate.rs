use std::sync::atomic::{AtomicI32, Ordering};

use crate::log::log_level::LogLevel;

/// Process-wide minimum-severity threshold.
///
/// A single atomic cell: written by [`set`](Self::set), read on every log
/// call. Relaxed ordering is enough here — the threshold is a standalone
/// value with single-writer-many-reader usage, and the atomic only has to
/// rule out torn reads, not establish happens-before with anything else.
#[derive(Debug)]
pub struct LevelGate {
    threshold: AtomicI32,
}

impl LevelGate {
    /// Gate with the given starting threshold.
    #[must_use]
    pub const fn new(threshold: LogLevel) -> Self {
        Self {
            threshold: AtomicI32::new(threshold.rank()),
        }
    }

    /// Replaces the threshold. Any rank is accepted, mapped or not.
    pub fn set(&self, level: LogLevel) {
        self.threshold.store(level.rank(), Ordering::Relaxed);
    }

    /// Current threshold.
    #[must_use]
    pub fn threshold(&self) -> LogLevel {
        LogLevel::from_rank(self.threshold.load(Ordering::Relaxed))
    }

    /// Whether a message at `level` passes the gate.
    #[must_use]
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level.rank() >= self.threshold.load(Ordering::Relaxed)
    }
}

impl Default for LevelGate {
    fn default() -> Self {
        Self::new(LogLevel::INFO)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::LevelGate;
    use crate::log::log_level::LogLevel;

    #[test]
    fn default_threshold_is_info() {
        let gate = LevelGate::default();
        assert_eq!(gate.threshold(), LogLevel::INFO);
        assert!(!gate.is_enabled(LogLevel::DEVELOPMENT));
        assert!(gate.is_enabled(LogLevel::INFO));
        assert!(gate.is_enabled(LogLevel::WARNING));
        assert!(gate.is_enabled(LogLevel::ERROR));
    }

    #[test]
    fn equal_rank_passes_the_gate() {
        let gate = LevelGate::new(LogLevel::WARNING);
        assert!(gate.is_enabled(LogLevel::WARNING));
        assert!(!gate.is_enabled(LogLevel::INFO));
    }

    #[test]
    fn set_replaces_the_threshold() {
        let gate = LevelGate::default();
        gate.set(LogLevel::ERROR);
        assert_eq!(gate.threshold(), LogLevel::ERROR);
        assert!(!gate.is_enabled(LogLevel::WARNING));
        assert!(gate.is_enabled(LogLevel::ERROR));

        gate.set(LogLevel::DEVELOPMENT);
        assert!(gate.is_enabled(LogLevel::DEVELOPMENT));
    }

    #[test]
    fn unmapped_ranks_are_accepted() {
        let gate = LevelGate::new(LogLevel::from_rank(5));
        assert!(!gate.is_enabled(LogLevel::ERROR));
        assert!(gate.is_enabled(LogLevel::from_rank(5)));
        assert!(gate.is_enabled(LogLevel::from_rank(9)));
    }
}
