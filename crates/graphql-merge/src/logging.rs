const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

/// Environment variable consulted for the log level when `--verbose` isn't
/// passed.
const LOG_LEVEL_ENV_VAR: &str = "LOG_LEVEL";

/// Map a `LOG_LEVEL` value to a [`tracing::Level`], or `None` if the value
/// isn't recognized.
pub(crate) fn parse_log_level(value: &str) -> Option<tracing::Level> {
    match value.trim() {
        "DEBUG" | "debug" => Some(tracing::Level::DEBUG),
        "INFO" | "info" => Some(tracing::Level::INFO),
        "TRACE" | "trace" => Some(tracing::Level::TRACE),
        "VERBOSE" | "verbose" => Some(tracing::Level::DEBUG),
        "WARN" | "warn" => Some(tracing::Level::WARN),
        "ERROR" | "error" => Some(tracing::Level::ERROR),
        _ => None,
    }
}

pub(crate) fn setup_logger(verbose: bool) {
    let mut log_level_warnings: Vec<String> = vec![];
    let log_level =
        if verbose {
            tracing::Level::DEBUG
        } else {
            match std::env::var(LOG_LEVEL_ENV_VAR) {
                Ok(value) => parse_log_level(&value).unwrap_or_else(|| {
                    log_level_warnings.push(format!(
                        "Invalid `{LOG_LEVEL_ENV_VAR}` environment variable \
                        value: `{}`",
                        value.trim(),
                    ));
                    DEFAULT_LOG_LEVEL
                }),
                Err(_) => DEFAULT_LOG_LEVEL,
            }
        };

    // stdout is reserved for the merged document.
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Initial logging level set to `{log_level}`.");

    for warning in log_level_warnings.drain(..) {
        log::warn!("{warning}");
    }
}

#[cfg(test)]
mod tests {
    use super::parse_log_level;

    #[test]
    fn known_levels_parse_in_either_case() {
        assert_eq!(parse_log_level("debug"), Some(tracing::Level::DEBUG));
        assert_eq!(parse_log_level("TRACE"), Some(tracing::Level::TRACE));
        assert_eq!(parse_log_level(" info "), Some(tracing::Level::INFO));
        assert_eq!(parse_log_level("warn"), Some(tracing::Level::WARN));
    }

    #[test]
    fn verbose_is_an_alias_for_debug() {
        assert_eq!(parse_log_level("verbose"), Some(tracing::Level::DEBUG));
    }

    #[test]
    fn unknown_levels_are_rejected() {
        assert_eq!(parse_log_level("loud"), None);
        assert_eq!(parse_log_level(""), None);
    }
}
