//! Production rules for the PCP machine park.
//!
//! Each machine model estimates three numbers from one row of production data:
//! setup time (minutes), standard speed and average production (units/hour).
//! Models are looked up by machine-type key in a [`RulesRegistry`] built once
//! at startup; most are tables of keywords and constants, while Bobst machines
//! are parameterized by their stored speed and setup time.
//!
//! ```
//! use pcp_rules::RulesRegistry;
//! use pcp_types::Record;
//!
//! let registry = RulesRegistry::builtin();
//! let record = Record::new().with("Processo", "faca nova");
//! let estimate = registry.estimate("cv_manual", &record).unwrap();
//! assert_eq!(estimate.setup_minutes, Some(90.0));
//! assert_eq!(estimate.speed, 900.0);
//! ```

pub mod config;
pub mod error;
pub mod machines;
pub mod parameterized;
pub mod registry;
pub mod resolvers;

pub use config::{LogFormat, RulesConfig};
pub use error::{RulesError, RulesResult};
pub use machines::{Estimate, MachineRules};
pub use parameterized::{MachineParameters, ParameterizedRules};
pub use registry::{RuleEntry, RulesRegistry};
pub use pcp_types::{FieldValue, Machine, Record};
