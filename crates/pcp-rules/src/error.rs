//! Error types for rule lookup, machine parameters and configuration.

use thiserror::Error;

/// Error type for production rule operations
#[derive(Error, Debug)]
pub enum RulesError {
    /// No rule set is registered under the machine type
    #[error("Unknown machine type: '{machine_type}'")]
    UnknownMachineType { machine_type: String },

    /// The machine type builds its rules from stored parameters, none were supplied
    #[error("Machine type '{machine_type}' requires stored machine parameters")]
    ParametersRequired { machine_type: String },

    /// A stored machine lacks a parameter its rules need
    #[error("Machine '{machine}' has no {parameter} configured")]
    MissingParameter { machine: String, parameter: &'static str },

    /// A parameter is present but unusable
    #[error("Invalid {parameter} for '{machine}': {message}")]
    InvalidParameter { machine: String, parameter: &'static str, message: String },

    /// Configuration could not be validated
    #[error("Configuration error in '{setting}': {message}")]
    Configuration { setting: String, message: String },

    /// Configuration file could not be read
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be parsed
    #[error("Failed to parse '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

impl RulesError {
    /// Get the error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            RulesError::UnknownMachineType { .. } => "unknown_machine_type",
            RulesError::ParametersRequired { .. } => "parameters_required",
            RulesError::MissingParameter { .. } => "missing_parameter",
            RulesError::InvalidParameter { .. } => "invalid_parameter",
            RulesError::Configuration { .. } => "configuration",
            RulesError::Io { .. } => "io",
            RulesError::Parse { .. } => "parse",
        }
    }

    /// Check if the caller can recover by fixing its input rather than the deployment
    pub fn is_recoverable(&self) -> bool {
        match self {
            RulesError::UnknownMachineType { .. } => true,
            RulesError::ParametersRequired { .. } => true,
            RulesError::MissingParameter { .. } => true,
            RulesError::InvalidParameter { .. } => true,
            RulesError::Configuration { .. } => false, // Config errors need fixing
            RulesError::Io { .. } => false,
            RulesError::Parse { .. } => false,
        }
    }

    /// Create an unknown machine type error
    pub fn unknown_machine_type(machine_type: impl Into<String>) -> Self {
        Self::UnknownMachineType { machine_type: machine_type.into() }
    }

    /// Create a configuration error
    pub fn configuration(setting: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Configuration { setting: setting.into(), message: message.into() }
    }
}

/// Result type alias for rule operations
pub type RulesResult<T> = Result<T, RulesError>;
