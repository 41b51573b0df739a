//! Rules built from stored machine parameters (Bobst).
//!
//! Unlike the table-driven models, speed and setup time come from the machine's
//! persisted configuration and the estimates are plain arithmetic over them.

use pcp_types::{Machine, Record};
use tracing::debug;

use crate::error::{RulesError, RulesResult};
use crate::machines::MachineRules;
use crate::resolvers::resolve_average;

pub const BOBST: &str = "bobst";

/// Production in units for `operating_hours` at `speed` units/hour.
pub fn production(speed: f64, operating_hours: f64) -> f64 {
    speed * operating_hours
}

/// Hours to produce `quantity` at `speed`, including `setup_time_minutes`.
pub fn total_time(speed: f64, setup_time_minutes: f64, quantity: f64) -> f64 {
    quantity / speed + setup_time_minutes / 60.0
}

/// Stored speed (units/hour) and setup time (minutes) of one machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MachineParameters {
    pub speed: f64,
    pub setup_time: f64,
}

impl MachineParameters {
    /// Validated parameters; speed must be a positive finite number.
    pub fn new(speed: f64, setup_time: f64) -> RulesResult<Self> {
        Self::validated("unnamed machine", speed, setup_time)
    }

    /// Read the parameters off a stored machine.
    pub fn from_machine(machine: &Machine) -> RulesResult<Self> {
        let speed = machine.speed.ok_or_else(|| RulesError::MissingParameter {
            machine: machine.name.clone(),
            parameter: "speed",
        })?;
        let setup_time = machine.setup_time.ok_or_else(|| RulesError::MissingParameter {
            machine: machine.name.clone(),
            parameter: "setup_time",
        })?;
        Self::validated(&machine.name, speed, setup_time)
    }

    fn validated(machine: &str, speed: f64, setup_time: f64) -> RulesResult<Self> {
        if !speed.is_finite() || speed <= 0.0 {
            return Err(RulesError::InvalidParameter {
                machine: machine.to_string(),
                parameter: "speed",
                message: format!("expected a positive number, got {speed}"),
            });
        }
        if !setup_time.is_finite() || setup_time < 0.0 {
            return Err(RulesError::InvalidParameter {
                machine: machine.to_string(),
                parameter: "setup_time",
                message: format!("expected a non-negative number, got {setup_time}"),
            });
        }
        Ok(Self { speed, setup_time })
    }
}

/// Constructor stored in the registry for parameterized machine types.
pub type ParameterizedConstructor = fn(MachineParameters) -> ParameterizedRules;

/// Rules of one parameterized machine instance.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterizedRules {
    machine_type: String,
    params: MachineParameters,
}

impl ParameterizedRules {
    pub fn new(machine_type: &str, params: MachineParameters) -> Self {
        debug!(
            machine_type,
            speed = params.speed,
            setup_time = params.setup_time,
            "Built parameterized rules"
        );
        Self { machine_type: machine_type.to_string(), params }
    }

    /// Bobst rules for the given parameters.
    pub fn bobst(params: MachineParameters) -> Self {
        Self::new(BOBST, params)
    }

    /// Units produced over `operating_hours`.
    pub fn production(&self, operating_hours: f64) -> f64 {
        production(self.params.speed, operating_hours)
    }

    /// Hours to produce `quantity`, setup included.
    pub fn total_time(&self, quantity: f64) -> f64 {
        total_time(self.params.speed, self.params.setup_time, quantity)
    }
}

impl MachineRules for ParameterizedRules {
    fn machine_type(&self) -> &str {
        &self.machine_type
    }

    fn setup_time(&self, _record: &Record) -> Option<f64> {
        Some(self.params.setup_time)
    }

    fn production_speed(&self, _record: &Record) -> f64 {
        self.params.speed
    }

    fn production_average(&self, record: &Record) -> f64 {
        resolve_average(record, self.params.speed)
    }
}
