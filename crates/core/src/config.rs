//! Settings shared by both server binaries.

use tracing::Level;

/// Maps a `LOG_LEVEL` value to a tracing level.
///
/// Accepts `trace`, `debug`, `info`, `warn` and `error` in any case; anything
/// else, numeric levels included, falls back to `INFO`.
pub fn parse_log_level(value: &str) -> Level {
    match value.trim().to_ascii_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("trace", Level::TRACE)]
    #[case("debug", Level::DEBUG)]
    #[case("INFO", Level::INFO)]
    #[case(" warn ", Level::WARN)]
    #[case("error", Level::ERROR)]
    #[case("verbose", Level::INFO)]
    #[case("", Level::INFO)]
    #[case("1", Level::INFO)]
    #[case("5", Level::INFO)]
    fn test_parse_log_level(#[case] value: &str, #[case] expected: Level) {
        assert_eq!(parse_log_level(value), expected);
    }
}
