//! Samkoon: fixed setup and speed, no record inspection.

use pcp_types::Record;

use super::MachineRules;
use crate::resolvers::resolve_average;

pub const SAMKOON_SPEED: f64 = 1000.0;
pub const SAMKOON_SETUP: f64 = 120.0;

#[derive(Debug, Default, Clone, Copy)]
pub struct SamkoonRules;

impl MachineRules for SamkoonRules {
    fn machine_type(&self) -> &str {
        "samkoon"
    }

    fn setup_time(&self, _record: &Record) -> Option<f64> {
        Some(SAMKOON_SETUP)
    }

    fn production_speed(&self, _record: &Record) -> f64 {
        SAMKOON_SPEED
    }

    fn production_average(&self, record: &Record) -> f64 {
        resolve_average(record, SAMKOON_SPEED)
    }
}
