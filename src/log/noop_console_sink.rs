use crate::log::{console_sink::ConsoleSink, source::EngineObject};

/// Sink that swallows every record. Useful for headless runs and tests.
#[derive(Debug, Clone, Default)]
pub struct NoopConsoleSink;

impl ConsoleSink for NoopConsoleSink {
    #[inline]
    fn info(&self, _message: &str, _context: Option<&dyn EngineObject>) {}

    #[inline]
    fn warning(&self, _message: &str, _context: Option<&dyn EngineObject>) {}

    #[inline]
    fn error(&self, _message: &str, _context: Option<&dyn EngineObject>) {}
}
