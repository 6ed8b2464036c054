//! Configuration types and presets

use serde::{Deserialize, Serialize};

/// Filter variable, checked before `RUST_LOG`.
pub const ENV_LOG: &str = "WARDEN_LOG";

/// Output format variable: `pretty`, `compact` or `json`.
pub const ENV_LOG_FORMAT: &str = "WARDEN_LOG_FORMAT";

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Filter directives (e.g. `"info"`, `"warden_poll=trace,info"`)
    pub level: String,

    /// Output format
    pub format: Format,

    /// Where formatted events go
    pub writer: Writer,

    /// Display configuration
    pub display: DisplayConfig,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Human-readable, multi-line
    Pretty,
    /// Single-line
    #[default]
    Compact,
    /// Structured JSON, one object per line
    Json,
}

/// Output destination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Writer {
    #[default]
    Stderr,
    Stdout,
    /// Captured by the test harness
    Test,
}

/// Display configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Show timestamps
    pub time: bool,
    /// Show source location (file:line)
    pub source: bool,
    /// Show target module
    pub target: bool,
    /// Use ANSI colors (ignored for JSON)
    pub colors: bool,
    /// Flatten event fields into the top-level JSON object
    pub flatten: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: Format::Compact,
            writer: Writer::Stderr,
            display: DisplayConfig::default(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            time: true,
            source: cfg!(debug_assertions),
            target: true,
            colors: std::io::IsTerminal::is_terminal(&std::io::stderr()),
            flatten: true,
        }
    }
}

impl Format {
    fn parse_lossy(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "pretty" => Self::Pretty,
            "json" => Self::Json,
            _ => Self::Compact,
        }
    }
}

impl Config {
    /// Create configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Like [`from_env`](Self::from_env) with a custom variable source.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(level) = lookup(ENV_LOG).or_else(|| lookup("RUST_LOG")) {
            config.level = level;
        }

        if let Some(format) = lookup(ENV_LOG_FORMAT) {
            config.format = Format::parse_lossy(&format);
        }

        config.display.parse_env(&lookup);
        config
    }

    /// Development configuration (pretty, debug level)
    #[must_use]
    pub fn development() -> Self {
        Self {
            level: "debug".to_owned(),
            format: Format::Pretty,
            display: DisplayConfig {
                colors: true,
                source: true,
                ..DisplayConfig::default()
            },
            ..Self::default()
        }
    }

    /// Production configuration (JSON, info level)
    #[must_use]
    pub fn production() -> Self {
        Self {
            level: "info".to_owned(),
            format: Format::Json,
            display: DisplayConfig {
                colors: false,
                source: false,
                flatten: true,
                ..DisplayConfig::default()
            },
            ..Self::default()
        }
    }

    /// Test configuration (trace level, captured output, no timestamps)
    #[must_use]
    pub fn test() -> Self {
        Self {
            level: "trace".to_owned(),
            format: Format::Compact,
            writer: Writer::Test,
            display: DisplayConfig {
                colors: false,
                time: false,
                ..DisplayConfig::default()
            },
        }
    }
}

impl DisplayConfig {
    fn parse_env<F>(&mut self, lookup: &F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let flag = |name: &str| lookup(name).map(|v| v != "0" && v != "false");

        if let Some(time) = flag("WARDEN_LOG_TIME") {
            self.time = time;
        }
        if let Some(source) = flag("WARDEN_LOG_SOURCE") {
            self.source = source;
        }
        if let Some(colors) = flag("WARDEN_LOG_COLORS") {
            self.colors = colors;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: Vec<(String, String)> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |name| vars.iter().find(|(k, _)| k == name).map(|(_, v)| v.clone())
    }

    #[test]
    fn test_warden_log_wins_over_rust_log() {
        let config = Config::from_lookup(lookup_from(&[
            ("RUST_LOG", "warn"),
            (ENV_LOG, "warden_poll=trace"),
        ]));
        assert_eq!(config.level, "warden_poll=trace");

        let config = Config::from_lookup(lookup_from(&[("RUST_LOG", "warn")]));
        assert_eq!(config.level, "warn");
    }

    #[rstest]
    #[case("pretty", Format::Pretty)]
    #[case("JSON", Format::Json)]
    #[case("compact", Format::Compact)]
    #[case("logfmt", Format::Compact)]
    fn test_format_from_env(#[case] raw: &str, #[case] expected: Format) {
        let config = Config::from_lookup(lookup_from(&[(ENV_LOG_FORMAT, raw)]));
        assert_eq!(config.format, expected);
    }

    #[test]
    fn test_display_flags() {
        let config = Config::from_lookup(lookup_from(&[
            ("WARDEN_LOG_TIME", "0"),
            ("WARDEN_LOG_SOURCE", "true"),
            ("WARDEN_LOG_COLORS", "false"),
        ]));
        assert!(!config.display.time);
        assert!(config.display.source);
        assert!(!config.display.colors);
    }

    #[test]
    fn test_presets() {
        assert_eq!(Config::development().format, Format::Pretty);
        assert_eq!(Config::production().format, Format::Json);
        assert!(!Config::production().display.colors);

        let test = Config::test();
        assert_eq!(test.level, "trace");
        assert_eq!(test.writer, Writer::Test);
        assert!(!test.display.time);
    }

    #[test]
    fn test_deserialize_partial() {
        let config: Config =
            serde_json::from_str(r#"{ "level": "debug", "format": "json" }"#).unwrap();
        assert_eq!(config.level, "debug");
        assert_eq!(config.format, Format::Json);
        assert_eq!(config.writer, Writer::Stderr);
    }
}
