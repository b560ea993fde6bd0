use std::str::FromStr;

/// Env var selecting the output format (`json` or `pretty`).
pub const LOG_FORMAT_VAR: &str = "GRIDPACK_LOG_FORMAT";

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info";

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" | "text" => Ok(LogFormat::Pretty),
            other => Err(format!("unknown log format: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ObservabilityConfig {
    pub format: LogFormat,
    /// `RUST_LOG`-style directive string.
    pub filter: Option<String>,
}

impl ObservabilityConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (tests pass a closure over a map).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let format = lookup(LOG_FORMAT_VAR)
            .and_then(|v| v.parse().ok())
            .unwrap_or_default();
        let filter = lookup("RUST_LOG").filter(|v| !v.trim().is_empty());
        Self { format, filter }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_to_json_without_filter() {
        assert_eq!(
            ObservabilityConfig::from_lookup(lookup(&[])),
            ObservabilityConfig::default()
        );
    }

    #[test]
    fn reads_format_and_filter() {
        let cfg = ObservabilityConfig::from_lookup(lookup(&[
            (LOG_FORMAT_VAR, "Pretty"),
            ("RUST_LOG", "gridpack_inventory=debug"),
        ]));
        assert_eq!(cfg.format, LogFormat::Pretty);
        assert_eq!(cfg.filter.as_deref(), Some("gridpack_inventory=debug"));
    }

    #[test]
    fn unknown_format_falls_back_to_json() {
        let cfg =
            ObservabilityConfig::from_lookup(lookup(&[(LOG_FORMAT_VAR, "xml"), ("RUST_LOG", " ")]));
        assert_eq!(cfg.format, LogFormat::Json);
        assert_eq!(cfg.filter, None);
    }
}
