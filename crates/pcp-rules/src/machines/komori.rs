//! Komori: offset press.
//!
//! The setup is only known when the process text states a duration
//! (`"1h 30 min"`, `"45 min"`). There is no keyword table and no silent
//! fallback; callers wanting one use [`KOMORI_DEFAULT_SETUP`].

use pcp_types::Record;

use super::MachineRules;
use crate::resolvers::fields::PROCESS;
use crate::resolvers::{resolve_average, resolve_duration};

pub const KOMORI_SPEED: f64 = 6000.0;
pub const KOMORI_DEFAULT_SETUP: f64 = 45.0;

#[derive(Debug, Default, Clone, Copy)]
pub struct KomoriRules;

impl MachineRules for KomoriRules {
    fn machine_type(&self) -> &str {
        "komori"
    }

    fn setup_time(&self, record: &Record) -> Option<f64> {
        resolve_duration(record, PROCESS).map(f64::from)
    }

    fn production_speed(&self, _record: &Record) -> f64 {
        KOMORI_SPEED
    }

    fn production_average(&self, record: &Record) -> f64 {
        resolve_average(record, KOMORI_SPEED)
    }
}
