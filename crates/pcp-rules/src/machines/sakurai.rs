//! Sakurai: screen press.

use pcp_types::Record;

use super::MachineRules;
use crate::resolvers::fields::EVENT;
use crate::resolvers::{resolve_average, resolve_by_keyword};

pub const SAKURAI_SPEED: f64 = 1800.0;

// 2h50
pub const SETUP_KEYWORDS: &[(&str, f64)] = &[("acerto", 170.0)];

#[derive(Debug, Default, Clone, Copy)]
pub struct SakuraiRules;

impl MachineRules for SakuraiRules {
    fn machine_type(&self) -> &str {
        "sakurai"
    }

    fn setup_time(&self, record: &Record) -> Option<f64> {
        Some(resolve_by_keyword(record, EVENT, SETUP_KEYWORDS, 0.0))
    }

    fn production_speed(&self, _record: &Record) -> f64 {
        SAKURAI_SPEED
    }

    fn production_average(&self, record: &Record) -> f64 {
        resolve_average(record, SAKURAI_SPEED)
    }
}
