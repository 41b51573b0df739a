//! CV Manual: manual die-cutter.

use pcp_types::Record;

use super::MachineRules;
use crate::resolvers::fields::PROCESS;
use crate::resolvers::{resolve_average, resolve_by_keyword};

pub const CV_MANUAL_SPEED: f64 = 900.0;
pub const CV_MANUAL_DEFAULT_SETUP: f64 = 30.0;

/// Setup minutes by process keyword
pub const SETUP_KEYWORDS: &[(&str, f64)] = &[
    ("hot stamping", 120.0),
    ("faca nova", 90.0),
    ("faca", 60.0),
];

#[derive(Debug, Default, Clone, Copy)]
pub struct CvManualRules;

impl MachineRules for CvManualRules {
    fn machine_type(&self) -> &str {
        "cv_manual"
    }

    fn setup_time(&self, record: &Record) -> Option<f64> {
        Some(resolve_by_keyword(record, PROCESS, SETUP_KEYWORDS, CV_MANUAL_DEFAULT_SETUP))
    }

    fn production_speed(&self, _record: &Record) -> f64 {
        CV_MANUAL_SPEED
    }

    fn production_average(&self, record: &Record) -> f64 {
        resolve_average(record, CV_MANUAL_SPEED)
    }
}
