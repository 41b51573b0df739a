use serde::{Deserialize, Serialize};

/// A registered industrial machine and its stored production parameters.
///
/// `machine_type` is the key used to pick the machine's rule set. `speed` and
/// `setup_time` are only meaningful for machines whose rules are built from
/// stored parameters rather than fixed tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Machine {
    /// Database identifier, absent until persisted
    #[serde(default)]
    pub id: Option<i64>,
    /// Unique display name
    pub name: String,
    /// Rule set key
    #[serde(rename = "type")]
    pub machine_type: String,
    /// Standard speed in pieces per hour
    #[serde(default)]
    pub speed: Option<f64>,
    /// Standard setup time in minutes
    #[serde(default)]
    pub setup_time: Option<f64>,
    /// Free-form notes
    #[serde(default)]
    pub description: Option<String>,
}

impl Machine {
    /// Create an unsaved machine without stored parameters
    #[must_use]
    pub fn new(name: impl Into<String>, machine_type: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            machine_type: machine_type.into(),
            speed: None,
            setup_time: None,
            description: None,
        }
    }

    /// Set the standard speed (pieces per hour)
    #[must_use]
    pub const fn with_speed(mut self, speed: f64) -> Self {
        self.speed = Some(speed);
        self
    }

    /// Set the standard setup time (minutes)
    #[must_use]
    pub const fn with_setup_time(mut self, setup_time: f64) -> Self {
        self.setup_time = Some(setup_time);
        self
    }
}
