//! Speed / HCD folder-gluers.
//!
//! A new die (`nova`) has a known setup; otherwise the setup is read from a
//! duration in the process text, and is not found when there is none.

use pcp_types::Record;

use super::MachineRules;
use crate::resolvers::fields::PROCESS;
use crate::resolvers::{resolve_average, resolve_by_keyword, resolve_duration};

pub const SPEED_SPEED: f64 = 5000.0;

pub const SETUP_KEYWORDS: &[(&str, Option<f64>)] = &[("nova", Some(90.0))];

#[derive(Debug, Default, Clone, Copy)]
pub struct SpeedRules;

impl MachineRules for SpeedRules {
    fn machine_type(&self) -> &str {
        "speed"
    }

    fn setup_time(&self, record: &Record) -> Option<f64> {
        resolve_by_keyword(record, PROCESS, SETUP_KEYWORDS, None)
            .or_else(|| resolve_duration(record, PROCESS).map(f64::from))
    }

    fn production_speed(&self, _record: &Record) -> f64 {
        SPEED_SPEED
    }

    fn production_average(&self, record: &Record) -> f64 {
        resolve_average(record, SPEED_SPEED)
    }
}
