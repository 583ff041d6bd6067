// ⚙️ Configuration - environment driven, every value has a default

use std::time::Duration;

pub const DEFAULT_CURRENCY_DELAY_MS: u64 = 500;
pub const DEFAULT_PASSWORD_LENGTH: usize = 12;
pub const DEFAULT_SERVER_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Artificial latency applied to every currency rate lookup
    pub currency_delay: Duration,

    /// Initial length shown by the password generator
    pub password_length: usize,

    /// Bind address for the HTTP API
    pub server_addr: String,

    /// tracing filter directive (e.g. "info", "toolbox=debug")
    pub log_filter: String,

    /// Where the TUI writes its log; None disables logging while the TUI owns the terminal
    pub log_file: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            currency_delay: Duration::from_millis(DEFAULT_CURRENCY_DELAY_MS),
            password_length: DEFAULT_PASSWORD_LENGTH,
            server_addr: DEFAULT_SERVER_ADDR.to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_file: None,
        }
    }
}

impl Config {
    /// Load configuration from `TOOLBOX_*` environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, but with an injectable lookup so tests don't touch the process env
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let delay_ms = parse_or(&lookup, "TOOLBOX_CURRENCY_DELAY_MS", DEFAULT_CURRENCY_DELAY_MS);
        let password_length = parse_or(&lookup, "TOOLBOX_PASSWORD_LENGTH", DEFAULT_PASSWORD_LENGTH);

        Config {
            currency_delay: Duration::from_millis(delay_ms),
            password_length: crate::password::clamp_length(password_length),
            server_addr: lookup("TOOLBOX_SERVER_ADDR")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.server_addr),
            log_filter: lookup("TOOLBOX_LOG")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.log_filter),
            log_file: lookup("TOOLBOX_LOG_FILE").filter(|v| !v.trim().is_empty()),
        }
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    lookup(key)
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config, Config::default());
        assert_eq!(config.currency_delay, Duration::from_millis(500));
        assert_eq!(config.password_length, 12);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("TOOLBOX_CURRENCY_DELAY_MS", "25"),
            ("TOOLBOX_PASSWORD_LENGTH", "20"),
            ("TOOLBOX_SERVER_ADDR", "0.0.0.0:8080"),
            ("TOOLBOX_LOG_FILE", "toolbox.log"),
        ]));

        assert_eq!(config.currency_delay, Duration::from_millis(25));
        assert_eq!(config.password_length, 20);
        assert_eq!(config.server_addr, "0.0.0.0:8080");
        assert_eq!(config.log_file.as_deref(), Some("toolbox.log"));
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = Config::from_lookup(lookup_from(&[
            ("TOOLBOX_CURRENCY_DELAY_MS", "soon"),
            ("TOOLBOX_PASSWORD_LENGTH", "999"),
            ("TOOLBOX_LOG", "  "),
        ]));

        assert_eq!(config.currency_delay, Duration::from_millis(500));
        assert_eq!(config.password_length, 50); // clamped
        assert_eq!(config.log_filter, "info");
    }
}
