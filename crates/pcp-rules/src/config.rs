//! Rules configuration
//!
//! TOML file with a `[logging]` section and any number of `[[machines]]` rule
//! sets. Environment variables override the logging settings after loading.

use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

use crate::error::{RulesError, RulesResult};
use crate::machines::ConfiguredRules;
use crate::resolvers::fields::PROCESS;

pub const DEFAULT_CONFIG_PATH: &str = "pcp.toml";
pub const CONFIG_PATH_ENV: &str = "PCP_CONFIG_PATH";

#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_filter")]
    pub filter: String,
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { filter: default_log_filter(), format: LogFormat::default() }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct KeywordEntry {
    pub keyword: String,
    pub value: f64,
}

/// A machine model declared in configuration.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct MachineRulesConfig {
    pub key: String,
    pub speed: f64,
    #[serde(default = "default_field")]
    pub setup_field: String,
    /// Checked in declaration order
    #[serde(default)]
    pub setup_keywords: Vec<KeywordEntry>,
    #[serde(default)]
    pub default_setup: Option<f64>,
    #[serde(default)]
    pub parse_durations: bool,
    #[serde(default = "default_field")]
    pub speed_field: String,
    /// Checked in declaration order
    #[serde(default)]
    pub speed_keywords: Vec<KeywordEntry>,
}

impl MachineRulesConfig {
    pub fn to_rules(&self) -> ConfiguredRules {
        let rules = ConfiguredRules::new(&self.key, self.speed)
            .with_setup_field(&self.setup_field)
            .with_default_setup(self.default_setup)
            .with_duration_parsing(self.parse_durations)
            .with_speed_field(&self.speed_field);
        let rules = self
            .setup_keywords
            .iter()
            .fold(rules, |rules, entry| rules.with_setup_keyword(&entry.keyword, entry.value));
        self.speed_keywords
            .iter()
            .fold(rules, |rules, entry| rules.with_speed_keyword(&entry.keyword, entry.value))
    }
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct RulesConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub machines: Vec<MachineRulesConfig>,
}

impl RulesConfig {
    /// Load configuration.
    ///
    /// An explicit `path` (or `PCP_CONFIG_PATH`) must exist. When neither is
    /// given, a missing `pcp.toml` falls back to the defaults.
    pub fn load(path: Option<&Path>) -> RulesResult<Self> {
        let explicit = path
            .map(|p| p.to_string_lossy().into_owned())
            .or_else(|| std::env::var(CONFIG_PATH_ENV).ok());
        Ok(Self::load_file(explicit.as_deref(), DEFAULT_CONFIG_PATH)?.apply_profile())
    }

    fn load_file(explicit: Option<&str>, default_path: &str) -> RulesResult<Self> {
        let config_path = explicit.unwrap_or(default_path);
        let config_str = match fs::read_to_string(config_path) {
            Ok(contents) => contents,
            Err(err) if explicit.is_none() && err.kind() == std::io::ErrorKind::NotFound => {
                warn!(
                    "Configuration file '{}' not found. Using default configuration.",
                    config_path
                );
                return Ok(Self::default());
            }
            Err(source) => return Err(RulesError::Io { path: config_path.to_string(), source }),
        };

        info!(path = %config_path, "Loading rules configuration");
        Self::from_toml_str(&config_str, config_path)
    }

    /// Parse and validate a TOML document. `origin` names it in errors.
    pub fn from_toml_str(contents: &str, origin: &str) -> RulesResult<Self> {
        let mut config: Self = toml::from_str(contents)
            .map_err(|source| RulesError::Parse { path: origin.to_string(), source })?;
        config.validate()?;
        Ok(config)
    }

    /// Apply environment variable overrides
    pub fn apply_profile(self) -> Self {
        self.apply_overrides(|name| std::env::var(name).ok())
    }

    pub fn apply_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(filter) = lookup("PCP_LOG_FILTER") {
            self.logging.filter = filter;
        }
        if let Some(format) = lookup("PCP_LOG_FORMAT") {
            match format.to_ascii_lowercase().as_str() {
                "json" => self.logging.format = LogFormat::Json,
                "text" => self.logging.format = LogFormat::Text,
                other => warn!(format = other, "Ignoring unknown PCP_LOG_FORMAT"),
            }
        }
        self
    }

    fn validate(&mut self) -> RulesResult<()> {
        let mut seen = HashSet::new();
        for (index, machine) in self.machines.iter_mut().enumerate() {
            let setting = format!("machines[{index}]");
            if machine.key.trim().is_empty() {
                return Err(RulesError::configuration(setting, "machine key must not be empty"));
            }
            if !seen.insert(machine.key.clone()) {
                return Err(RulesError::configuration(
                    setting,
                    format!("machine '{}' is declared twice", machine.key),
                ));
            }
            check_positive(&setting, "speed", machine.speed)?;
            if let Some(minutes) = machine.default_setup {
                check_non_negative(&setting, "default_setup", minutes)?;
            }
            for entry in &mut machine.setup_keywords {
                normalize_keyword(&setting, &machine.key, entry)?;
                check_non_negative(&setting, "setup_keywords.value", entry.value)?;
            }
            for entry in &mut machine.speed_keywords {
                normalize_keyword(&setting, &machine.key, entry)?;
                check_positive(&setting, "speed_keywords.value", entry.value)?;
            }
        }
        Ok(())
    }
}

// Fields are lower-cased before matching, so an upper-case keyword could never hit.
fn normalize_keyword(setting: &str, machine: &str, entry: &mut KeywordEntry) -> RulesResult<()> {
    if entry.keyword.is_empty() {
        return Err(RulesError::configuration(setting, "keywords must not be empty"));
    }
    let lowered = entry.keyword.to_lowercase();
    if lowered != entry.keyword {
        warn!(machine, keyword = %entry.keyword, "Lower-casing configured keyword");
        entry.keyword = lowered;
    }
    Ok(())
}

fn check_positive(setting: &str, name: &str, value: f64) -> RulesResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(RulesError::configuration(setting, format!("{name} must be positive, got {value}")))
    }
}

fn check_non_negative(setting: &str, name: &str, value: f64) -> RulesResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(RulesError::configuration(
            setting,
            format!("{name} must not be negative, got {value}"),
        ))
    }
}

fn default_log_filter() -> String {
    "pcp_rules=info,pcp_cli=info".to_string()
}

fn default_field() -> String {
    PROCESS.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::machines::MachineRules;
    use pcp_types::Record;

    const SAMPLE: &str = r#"
[logging]
filter = "pcp_rules=debug"

[[machines]]
key = "cv_guangya"
speed = 3500
parse_durations = true
default_setup = 40

[[machines.setup_keywords]]
keyword = "Hot Stamping"
value = 120

[[machines.setup_keywords]]
keyword = "faca"
value = 60

[[machines.speed_keywords]]
keyword = "micro ondulado"
value = 1800
"#;

    #[test]
    fn parses_machines_in_declaration_order() {
        let config = RulesConfig::from_toml_str(SAMPLE, "sample").unwrap();
        assert_eq!(config.logging.filter, "pcp_rules=debug");
        assert_eq!(config.logging.format, LogFormat::Text);

        let machine = &config.machines[0];
        assert_eq!(machine.setup_field, PROCESS);
        let keywords: Vec<_> = machine.setup_keywords.iter().map(|e| e.keyword.as_str()).collect();
        assert_eq!(keywords, ["hot stamping", "faca"]);
    }

    #[test]
    fn configured_rules_follow_the_table() {
        let config = RulesConfig::from_toml_str(SAMPLE, "sample").unwrap();
        let rules = config.machines[0].to_rules();

        let record = Record::new().with(PROCESS, "HOT STAMPING + faca");
        assert_eq!(rules.machine_type(), "cv_guangya");
        assert_eq!(rules.setup_time(&record), Some(120.0));
        assert_eq!(rules.production_speed(&record), 3500.0);
        assert_eq!(rules.setup_time(&Record::new()), Some(40.0));
    }

    #[test]
    fn rejects_non_positive_speed() {
        let err = RulesConfig::from_toml_str("[[machines]]\nkey = \"x\"\nspeed = 0\n", "bad")
            .unwrap_err();
        assert!(matches!(err, RulesError::Configuration { .. }));
    }

    #[test]
    fn rejects_duplicate_keys() {
        let doc = "[[machines]]\nkey = \"x\"\nspeed = 1\n[[machines]]\nkey = \"x\"\nspeed = 2\n";
        assert!(RulesConfig::from_toml_str(doc, "dup").is_err());
    }

    #[test]
    fn rejects_empty_keywords() {
        let doc = "[[machines]]\nkey = \"x\"\nspeed = 1\n[[machines.setup_keywords]]\nkeyword = \"\"\nvalue = 5\n";
        assert!(RulesConfig::from_toml_str(doc, "empty").is_err());
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = RulesConfig::from_toml_str("machines = [", "broken").unwrap_err();
        assert_eq!(err.category(), "parse");
    }

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("pcp-rules-{}-{name}", std::process::id()))
    }

    #[test]
    fn missing_default_file_uses_defaults() {
        let default_path = temp_path("absent-default.toml");
        let config = RulesConfig::load_file(None, default_path.to_str().unwrap()).unwrap();
        assert_eq!(config, RulesConfig::default());
    }

    #[test]
    fn missing_explicit_file_is_an_io_error() {
        let path = temp_path("absent-explicit.toml");
        let err = RulesConfig::load_file(path.to_str(), DEFAULT_CONFIG_PATH).unwrap_err();
        assert!(matches!(err, RulesError::Io { .. }));
        assert_eq!(err.category(), "io");
    }

    #[test]
    fn explicit_file_is_parsed() {
        let path = temp_path("sample.toml");
        fs::write(&path, SAMPLE).unwrap();

        let config = RulesConfig::load_file(path.to_str(), DEFAULT_CONFIG_PATH).unwrap();
        assert_eq!(config.machines.len(), 1);
        assert_eq!(config.machines[0].key, "cv_guangya");

        let loaded = RulesConfig::load(Some(path.as_path())).unwrap();
        assert_eq!(loaded.machines, config.machines);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn environment_overrides_logging() {
        let config = RulesConfig::default().apply_overrides(|name| match name {
            "PCP_LOG_FILTER" => Some("debug".to_string()),
            "PCP_LOG_FORMAT" => Some("JSON".to_string()),
            _ => None,
        });
        assert_eq!(config.logging.filter, "debug");
        assert_eq!(config.logging.format, LogFormat::Json);
    }
}
