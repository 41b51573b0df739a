//! Laminadora: film laminator. Setup is read from the event column.

use pcp_types::Record;

use super::MachineRules;
use crate::resolvers::fields::EVENT;
use crate::resolvers::{resolve_average, resolve_by_keyword};

pub const LAMINADORA_SPEED: f64 = 4000.0;

pub const SETUP_KEYWORDS: &[(&str, f64)] = &[("acerto", 45.0)];

#[derive(Debug, Default, Clone, Copy)]
pub struct LaminadoraRules;

impl MachineRules for LaminadoraRules {
    fn machine_type(&self) -> &str {
        "laminadora"
    }

    fn setup_time(&self, record: &Record) -> Option<f64> {
        Some(resolve_by_keyword(record, EVENT, SETUP_KEYWORDS, 0.0))
    }

    fn production_speed(&self, _record: &Record) -> f64 {
        LAMINADORA_SPEED
    }

    fn production_average(&self, record: &Record) -> f64 {
        resolve_average(record, LAMINADORA_SPEED)
    }
}
