use crate::log::{
    clock::{Clock, SystemClock},
    console_sink::ConsoleSink,
    formatter::format_message,
    level_gate::LevelGate,
    log_level::LogLevel,
    source::{EngineObject, LogSource, name_of},
};

/// Leveled logging facade over a host console sink.
///
/// Every entry point is synchronous and fire-and-forget: the gate is
/// consulted first (suppressed calls touch neither the namer, the formatter
/// nor the sink), then the source is labeled, the record is formatted and
/// the line is dispatched to the channel matching its level. No call can
/// fail or panic, whatever the input.
///
/// The facade announces itself once on construction and announces every
/// threshold change, both at [`LogLevel::INFO`] through the normal gated
/// pipeline — so a threshold above Info silences its own announcement.
pub struct Logger {
    gate: LevelGate,
    clock: Box<dyn Clock>,
    sink: Box<dyn ConsoleSink>,
}

impl Logger {
    /// Facade over `sink`, stamped by the system clock.
    #[must_use]
    pub fn new(sink: Box<dyn ConsoleSink>) -> Self {
        Self::with_clock(sink, Box::new(SystemClock))
    }

    /// Facade over `sink` with an injected clock.
    #[must_use]
    pub fn with_clock(sink: Box<dyn ConsoleSink>, clock: Box<dyn Clock>) -> Self {
        let logger = Self {
            gate: LevelGate::default(),
            clock,
            sink,
        };
        let threshold = logger.gate.threshold();
        logger.log(
            LogLevel::INFO,
            &"Logger",
            &format!("Initialized with log level: {threshold}"),
        );
        logger
    }

    /// Replaces the minimum severity and announces the change.
    ///
    /// The announcement runs through the gate *after* the assignment: raising
    /// the threshold above Info suppresses the announcement itself.
    pub fn set_log_level(&self, level: LogLevel) {
        self.gate.set(level);
        self.log(
            LogLevel::INFO,
            &"Logger",
            &format!("Log level updated to: {level}"),
        );
    }

    /// Current minimum severity.
    #[must_use]
    pub fn log_level(&self) -> LogLevel {
        self.gate.threshold()
    }

    pub fn log_development<S: LogSource>(&self, source: &S, message: &str) {
        self.log(LogLevel::DEVELOPMENT, source, message);
    }

    pub fn log_info<S: LogSource>(&self, source: &S, message: &str) {
        self.log(LogLevel::INFO, source, message);
    }

    pub fn log_warning<S: LogSource>(&self, source: &S, message: &str) {
        self.log(LogLevel::WARNING, source, message);
    }

    pub fn log_error<S: LogSource>(&self, source: &S, message: &str) {
        self.log(LogLevel::ERROR, source, message);
    }

    /// Open-level entry point: the typed entries delegate here, and unmapped
    /// ranks built via [`LogLevel::from_rank`] are accepted too.
    pub fn log<S: LogSource>(&self, level: LogLevel, source: &S, message: &str) {
        if !self.gate.is_enabled(level) {
            return;
        }

        // Engine-native sources double as the context handle for
        // click-to-locate in the host tooling.
        let context = source.as_engine_object();
        let label = name_of(source);
        let formatted = format_message(self.clock.as_ref(), &label, message, level);
        self.dispatch(level, &formatted, context);
    }

    /// Channel dispatch. Formatting already happened, so an unmapped rank
    /// reaches this point carrying the white fallback color; it lands on the
    /// error channel wrapped in a diagnostic instead of being dropped.
    fn dispatch(&self, level: LogLevel, formatted: &str, context: Option<&dyn EngineObject>) {
        match level.rank() {
            -1 | 0 => self.sink.info(formatted, context),
            1 => self.sink.warning(formatted, context),
            2 => self.sink.error(formatted, context),
            rank => self
                .sink
                .error(&format!("[Logger] Unknown log level ({rank}): {formatted}"), None),
        }
    }
}
