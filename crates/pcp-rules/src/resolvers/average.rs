//! Average Resolver

use super::fields::{AVERAGE_PRODUCTION, AVERAGE_PRODUCTION_ALIAS};
use pcp_types::Record;
use tracing::warn;

/// Recorded average production of the record, or `default`.
///
/// Falsy values (absent, null, zero, empty text) fall back to `default`, so a
/// recorded average of exactly zero is indistinguishable from a missing one.
/// The alias header is read when the primary one is absent or falsy. Text that
/// does not parse to a finite number also falls back, with a warning.
pub fn resolve_average(record: &Record, default: f64) -> f64 {
    let value = [AVERAGE_PRODUCTION, AVERAGE_PRODUCTION_ALIAS]
        .iter()
        .filter_map(|field| record.get(field))
        .find(|value| value.is_truthy());

    match value {
        Some(value) => value.as_float().filter(|average| average.is_finite()).unwrap_or_else(|| {
            warn!(value = %value, "Non-numeric average production, using default");
            default
        }),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pcp_types::FieldValue;

    #[test]
    fn recorded_average_is_echoed() {
        let record = Record::new().with(AVERAGE_PRODUCTION, 1234.5);
        assert_eq!(resolve_average(&record, 900.0), 1234.5);
    }

    #[test]
    fn null_and_zero_fall_back() {
        let null = Record::new().with(AVERAGE_PRODUCTION, FieldValue::Null);
        let zero = Record::new().with(AVERAGE_PRODUCTION, 0_i64);
        assert_eq!(resolve_average(&null, 900.0), 900.0);
        assert_eq!(resolve_average(&zero, 900.0), 900.0);
    }

    #[test]
    fn alias_header_is_read() {
        let record = Record::new().with(AVERAGE_PRODUCTION_ALIAS, "1500");
        assert_eq!(resolve_average(&record, 900.0), 1500.0);
    }

    #[test]
    fn non_numeric_text_falls_back() {
        let record = Record::new().with(AVERAGE_PRODUCTION, "n/a");
        assert_eq!(resolve_average(&record, 900.0), 900.0);
    }

    #[test]
    fn non_finite_text_falls_back() {
        for text in ["NaN", "inf", "-infinity"] {
            let record = Record::new().with(AVERAGE_PRODUCTION, text);
            assert_eq!(resolve_average(&record, 900.0), 900.0, "{text}");
        }
    }

    #[test]
    fn falsy_primary_reads_the_alias() {
        let record = Record::new()
            .with(AVERAGE_PRODUCTION, FieldValue::Null)
            .with(AVERAGE_PRODUCTION_ALIAS, 1500_i64);
        assert_eq!(resolve_average(&record, 900.0), 1500.0);
    }
}
