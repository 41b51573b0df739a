//! Built-in machine rule sets.
//!
//! One module per machine model. Each exposes the same three estimates through
//! [`MachineRules`]; tables and constants are the plant's standard values.

use pcp_types::Record;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

// Folding and cutting
pub mod cv_manual;
pub mod sbl;
pub mod speed;

// Printing
pub mod komori;
pub mod samkoon;

// Lamination and finishing
pub mod laminadora;
pub mod sakurai;

// Rules declared in configuration
pub mod configured;

pub use configured::ConfiguredRules;
pub use cv_manual::CvManualRules;
pub use komori::KomoriRules;
pub use laminadora::LaminadoraRules;
pub use sakurai::SakuraiRules;
pub use samkoon::SamkoonRules;
pub use sbl::SblRules;
pub use speed::SpeedRules;

/// The three estimates every machine model provides.
/// Rule sets are stateless and thread-safe.
pub trait MachineRules: Send + Sync + Debug {
    /// Registry key of the machine model.
    fn machine_type(&self) -> &str;

    /// Setup time in minutes, or `None` when the record does not state one.
    fn setup_time(&self, record: &Record) -> Option<f64>;

    /// Standard production speed in units per hour.
    fn production_speed(&self, record: &Record) -> f64;

    /// Recorded average production, defaulting to the record's standard speed.
    fn production_average(&self, record: &Record) -> f64;

    /// All three estimates for one record.
    fn estimate(&self, record: &Record) -> Estimate {
        Estimate {
            machine_type: self.machine_type().to_string(),
            setup_minutes: self.setup_time(record),
            speed: self.production_speed(record),
            average: self.production_average(record),
        }
    }
}

/// Estimates produced for one record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    pub machine_type: String,
    /// `None` when the setup time could not be determined from the record
    pub setup_minutes: Option<f64>,
    pub speed: f64,
    pub average: f64,
}
