//! Rule sets declared in configuration rather than code.
//!
//! Same resolution order as the built-in models: setup keywords first, then an
//! optional duration parse, then the default setup (which may be absent).

use pcp_types::Record;

use super::MachineRules;
use crate::resolvers::fields::PROCESS;
use crate::resolvers::{resolve_average, resolve_by_keyword, resolve_duration};

#[derive(Debug, Clone, PartialEq)]
pub struct ConfiguredRules {
    machine_type: String,
    setup_field: String,
    setup_keywords: Vec<(String, Option<f64>)>,
    default_setup: Option<f64>,
    parse_durations: bool,
    speed_field: String,
    speed_keywords: Vec<(String, f64)>,
    speed: f64,
}

impl ConfiguredRules {
    /// A rule set with a fixed speed and no setup information.
    pub fn new(machine_type: impl Into<String>, speed: f64) -> Self {
        Self {
            machine_type: machine_type.into(),
            setup_field: PROCESS.to_string(),
            setup_keywords: Vec::new(),
            default_setup: None,
            parse_durations: false,
            speed_field: PROCESS.to_string(),
            speed_keywords: Vec::new(),
            speed,
        }
    }

    /// Field searched for setup keywords and durations (default `Processo`).
    pub fn with_setup_field(mut self, field: impl Into<String>) -> Self {
        self.setup_field = field.into();
        self
    }

    /// Append a setup keyword. Earlier keywords take priority.
    pub fn with_setup_keyword(mut self, keyword: impl Into<String>, minutes: f64) -> Self {
        self.setup_keywords.push((keyword.into(), Some(minutes)));
        self
    }

    /// Setup minutes when neither a keyword nor a duration matches.
    pub fn with_default_setup(mut self, minutes: Option<f64>) -> Self {
        self.default_setup = minutes;
        self
    }

    /// Read written durations such as `1h 30 min` after the keyword table.
    pub fn with_duration_parsing(mut self, enabled: bool) -> Self {
        self.parse_durations = enabled;
        self
    }

    /// Field searched for speed keywords.
    pub fn with_speed_field(mut self, field: impl Into<String>) -> Self {
        self.speed_field = field.into();
        self
    }

    /// Append a speed keyword. Earlier keywords take priority.
    pub fn with_speed_keyword(mut self, keyword: impl Into<String>, speed: f64) -> Self {
        self.speed_keywords.push((keyword.into(), speed));
        self
    }
}

impl MachineRules for ConfiguredRules {
    fn machine_type(&self) -> &str {
        &self.machine_type
    }

    fn setup_time(&self, record: &Record) -> Option<f64> {
        resolve_by_keyword(record, &self.setup_field, &self.setup_keywords, None)
            .or_else(|| {
                self.parse_durations
                    .then(|| resolve_duration(record, &self.setup_field).map(f64::from))
                    .flatten()
            })
            .or(self.default_setup)
    }

    fn production_speed(&self, record: &Record) -> f64 {
        resolve_by_keyword(record, &self.speed_field, &self.speed_keywords, self.speed)
    }

    fn production_average(&self, record: &Record) -> f64 {
        resolve_average(record, self.production_speed(record))
    }
}
