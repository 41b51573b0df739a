//! PCP Types
//!
//! This crate defines the data shared between the production rules and their
//! callers: the cell values of an uploaded production sheet, the row-shaped
//! `Record` the rules read from, and the persisted `Machine` configuration.

#![deny(missing_docs)]

mod machine;
mod record;
mod value;

pub use machine::Machine;
pub use record::Record;
pub use value::FieldValue;
