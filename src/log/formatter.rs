use crate::log::clock::Clock;
use crate::log::log_level::LogLevel;

/// Display color for a level in the host console's rich-text markup.
///
/// Unmapped ranks fall back to white; the dispatcher deals with them later,
/// after formatting.
#[must_use]
pub const fn color_for_level(level: LogLevel) -> &'static str {
    match level.rank() {
        -1 => "#87CEEB",
        0 => "lime",
        1 => "yellow",
        2 => "red",
        _ => "white",
    }
}

/// Renders one log record for the host console.
///
/// Output shape: `<color={color}>[{HH:mm:ss.mmm}] [{source}]: {message}</color> `
/// with a trailing space, matching the host's established console output.
/// The markup is opaque text to this layer: neither `source` nor `message`
/// is escaped, so markup-breaking characters pass through unmodified.
#[must_use]
pub fn format_message(clock: &dyn Clock, source: &str, message: &str, level: LogLevel) -> String {
    let time_stamp = clock.now().format("%H:%M:%S%.3f");
    let color = color_for_level(level);
    format!("<color={color}>[{time_stamp}] [{source}]: {message}</color> ")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::{color_for_level, format_message};
    use crate::log::clock::FixedClock;
    use crate::log::log_level::LogLevel;
    use chrono::NaiveTime;

    fn noon_ish() -> FixedClock {
        FixedClock(NaiveTime::from_hms_milli_opt(12, 34, 56, 789).unwrap())
    }

    #[test]
    fn color_table_matches_the_host_palette() {
        assert_eq!(color_for_level(LogLevel::DEVELOPMENT), "#87CEEB");
        assert_eq!(color_for_level(LogLevel::INFO), "lime");
        assert_eq!(color_for_level(LogLevel::WARNING), "yellow");
        assert_eq!(color_for_level(LogLevel::ERROR), "red");
    }

    #[test]
    fn unmapped_ranks_render_white() {
        assert_eq!(color_for_level(LogLevel::from_rank(3)), "white");
        assert_eq!(color_for_level(LogLevel::from_rank(-2)), "white");
    }

    #[test]
    fn format_produces_the_exact_console_shape() {
        let out = format_message(&noon_ish(), "Svc", "hello", LogLevel::WARNING);
        assert_eq!(out, "<color=yellow>[12:34:56.789] [Svc]: hello</color> ");
    }

    #[test]
    fn trailing_space_is_preserved() {
        let out = format_message(&noon_ish(), "Svc", "hello", LogLevel::INFO);
        assert!(out.ends_with("</color> "));
    }

    #[test]
    fn timestamp_is_zero_padded_to_millisecond_precision() {
        let clock = FixedClock(NaiveTime::from_hms_milli_opt(1, 2, 3, 4).unwrap());
        let out = format_message(&clock, "Svc", "hello", LogLevel::INFO);
        assert_eq!(out, "<color=lime>[01:02:03.004] [Svc]: hello</color> ");
    }

    #[test]
    fn message_and_source_are_not_escaped() {
        let out = format_message(
            &noon_ish(),
            "a]b",
            "</color> broken <color=red>",
            LogLevel::ERROR,
        );
        assert_eq!(
            out,
            "<color=red>[12:34:56.789] [a]b]: </color> broken <color=red></color> "
        );
    }

    #[test]
    fn identical_inputs_at_the_same_instant_format_identically() {
        let clock = noon_ish();
        let a = format_message(&clock, "Svc", "hello", LogLevel::WARNING);
        let b = format_message(&clock, "Svc", "hello", LogLevel::WARNING);
        assert_eq!(a, b);
    }

    #[test]
    fn unknown_levels_still_format_before_dispatch() {
        let out = format_message(&noon_ish(), "Svc", "hello", LogLevel::from_rank(7));
        assert_eq!(out, "<color=white>[12:34:56.789] [Svc]: hello</color> ");
    }
}
