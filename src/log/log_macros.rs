//! Leveled logging macros over a [`Logger`](crate::log::logger::Logger).
//!
//! # Feature Flag
//! Call sites are controlled by the `logging` cargo feature (on by default).
//! With the feature disabled, every macro expands to `()`, removing all
//! formatting and allocation overhead at compile time — disabled logging
//! costs nothing at the call site, it is not merely suppressed at runtime.

#[cfg(feature = "logging")]
#[macro_export]
macro_rules! log_message {
    ($logger:expr, $lvl:expr, $src:expr, $($arg:tt)*) => {{
        let __msg = format!($($arg)*);
        $logger.log($lvl, $src, &__msg);
    }};
}

#[cfg(not(feature = "logging"))]
#[macro_export]
macro_rules! log_message {
    ($($arg:tt)*) => {
        ()
    };
}

#[cfg(feature = "logging")]
#[macro_export]
macro_rules! log_development { ($logger:expr, $src:expr, $($arg:tt)*) => { $crate::log_message!($logger, $crate::log::log_level::LogLevel::DEVELOPMENT, $src, $($arg)*) } }

#[cfg(not(feature = "logging"))]
#[macro_export]
macro_rules! log_development {
    ($($arg:tt)*) => {
        ()
    };
}

#[cfg(feature = "logging")]
#[macro_export]
macro_rules! log_info { ($logger:expr, $src:expr, $($arg:tt)*) => { $crate::log_message!($logger, $crate::log::log_level::LogLevel::INFO, $src, $($arg)*) } }

#[cfg(not(feature = "logging"))]
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        ()
    };
}

#[cfg(feature = "logging")]
#[macro_export]
macro_rules! log_warning { ($logger:expr, $src:expr, $($arg:tt)*) => { $crate::log_message!($logger, $crate::log::log_level::LogLevel::WARNING, $src, $($arg)*) } }

#[cfg(not(feature = "logging"))]
#[macro_export]
macro_rules! log_warning {
    ($($arg:tt)*) => {
        ()
    };
}

#[cfg(feature = "logging")]
#[macro_export]
macro_rules! log_error { ($logger:expr, $src:expr, $($arg:tt)*) => { $crate::log_message!($logger, $crate::log::log_level::LogLevel::ERROR, $src, $($arg)*) } }

#[cfg(not(feature = "logging"))]
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        ()
    };
}
