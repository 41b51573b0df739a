//! Keyword Resolver
//!
//! Picks a value from an ordered `(keyword, value)` table by case-insensitive
//! substring search. The first declared keyword found in the field wins, even
//! when a later, longer keyword would also match.

use pcp_types::Record;
use tracing::trace;

/// Resolve `record[field]` against `table`, falling back to `default`.
///
/// The field is lower-cased before matching; keywords are expected to be lower
/// case already. Absent and `Null` fields are matched as the empty string.
pub fn resolve_by_keyword<K, V>(record: &Record, field: &str, table: &[(K, V)], default: V) -> V
where
    K: AsRef<str>,
    V: Clone,
{
    let value = record.lowercase_text(field);
    table
        .iter()
        .find(|(keyword, _)| value.contains(keyword.as_ref()))
        .map_or(default, |(keyword, outcome)| {
            trace!(field, keyword = keyword.as_ref(), "keyword matched");
            outcome.clone()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &[(&str, u32)] = &[("stamping", 60), ("hot stamping", 120)];

    #[test]
    fn first_declared_keyword_wins() {
        let record = Record::new().with("Processo", "Hot Stamping");
        assert_eq!(resolve_by_keyword(&record, "Processo", TABLE, 30), 60);
    }

    #[test]
    fn missing_field_gives_default() {
        assert_eq!(resolve_by_keyword(&Record::new(), "Processo", TABLE, 30), 30);
    }

    #[test]
    fn absent_default_is_preserved() {
        let table: &[(&str, Option<u32>)] = &[("nova", Some(90))];
        let record = Record::new().with("Processo", "reimpressão");
        assert_eq!(resolve_by_keyword(&record, "Processo", table, None), None);
    }

    #[test]
    fn owned_keywords_are_supported() {
        let table = vec![("acerto".to_string(), 45.0)];
        let record = Record::new().with("Evento", "ACERTO de cor");
        assert_eq!(resolve_by_keyword(&record, "Evento", &table, 0.0), 45.0);
    }
}
