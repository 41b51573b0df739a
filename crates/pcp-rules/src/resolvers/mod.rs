//! Resolvers shared by the machine rule sets.
//!
//! Each resolver reads one field of a [`Record`](pcp_types::Record) and turns it
//! into a number. None of them fail: missing fields fall through to the
//! configured default (keywords, averages) or to "not found" (durations).

pub mod average;
pub mod duration;
pub mod keyword;

pub use average::resolve_average;
pub use duration::resolve_duration;
pub use keyword::resolve_by_keyword;

/// Column headers of the uploaded production sheets.
pub mod fields {
    /// Process description
    pub const PROCESS: &str = "Processo";
    /// Event description
    pub const EVENT: &str = "Evento";
    /// Recorded average production
    pub const AVERAGE_PRODUCTION: &str = "Média Produção";
    /// English header accepted when the Portuguese one is absent
    pub const AVERAGE_PRODUCTION_ALIAS: &str = "Average Production";
}
