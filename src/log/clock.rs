use chrono::NaiveTime;

/// Source of the wall-clock time stamped onto log messages.
///
/// Injected into the formatter so deterministic output can be produced in
/// tests and tooling via [`FixedClock`].
pub trait Clock: Send + Sync {
    /// Current local time of day.
    fn now(&self) -> NaiveTime;
}

/// Reads the local system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveTime {
        chrono::Local::now().time()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveTime {
        self.0
    }
}
