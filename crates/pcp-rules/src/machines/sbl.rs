//! SBL: automatic die-cutter.
//!
//! Micro-flute board (`micro ondulado`) runs at half speed, and the average
//! falls back to whichever speed applies to the record.

use pcp_types::Record;

use super::MachineRules;
use crate::resolvers::fields::PROCESS;
use crate::resolvers::{resolve_average, resolve_by_keyword};

pub const SBL_SPEED: f64 = 4000.0;
pub const SBL_MICRO_FLUTE_SPEED: f64 = 2000.0;
pub const SBL_DEFAULT_SETUP: f64 = 60.0;

/// Setup minutes by process keyword, in priority order
pub const SETUP_KEYWORDS: &[(&str, f64)] = &[
    ("destaque", 180.0),
    ("relevo + corte", 120.0),
    ("hot stamping", 120.0),
    ("nova", 90.0),
];

pub const SPEED_KEYWORDS: &[(&str, f64)] = &[("micro ondulado", SBL_MICRO_FLUTE_SPEED)];

#[derive(Debug, Default, Clone, Copy)]
pub struct SblRules;

impl MachineRules for SblRules {
    fn machine_type(&self) -> &str {
        "sbl"
    }

    fn setup_time(&self, record: &Record) -> Option<f64> {
        Some(resolve_by_keyword(record, PROCESS, SETUP_KEYWORDS, SBL_DEFAULT_SETUP))
    }

    fn production_speed(&self, record: &Record) -> f64 {
        resolve_by_keyword(record, PROCESS, SPEED_KEYWORDS, SBL_SPEED)
    }

    fn production_average(&self, record: &Record) -> f64 {
        resolve_average(record, self.production_speed(record))
    }
}
