//! Richlog provides the two small utilities shared by an engine-hosted
//! application:
//!
//! - a leveled logging facade that stamps, labels and colors messages before
//!   routing them to a host-provided console sink;
//! - a generic value wrapper used to disambiguate identical types when
//!   registering them in a dependency-injection container.
//!
//! The facade never fails and never blocks: a call either passes the
//! severity gate and reaches the sink, or returns without doing any work.

/// Leveled logging facade routed to a host console sink.
pub mod log;
/// Value wrapper for dependency-injection disambiguation.
pub mod wrapper;

pub use log::clock::{Clock, FixedClock, SystemClock};
pub use log::console_sink::ConsoleSink;
pub use log::log_level::LogLevel;
pub use log::logger::Logger;
pub use log::noop_console_sink::NoopConsoleSink;
pub use log::source::{EngineObject, LogSource, NamedService, TypeDescriptor};
pub use wrapper::Wrapped;
