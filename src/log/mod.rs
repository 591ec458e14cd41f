pub mod clock;
pub mod console_sink;
pub mod formatter;
pub mod level_gate;
pub mod log_level;
pub mod log_macros;
pub mod logger;
pub mod noop_console_sink;
pub mod source;
pub use noop_console_sink::NoopConsoleSink;
