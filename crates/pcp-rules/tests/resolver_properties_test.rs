use pcp_rules::resolvers::fields::PROCESS;
use pcp_rules::resolvers::{resolve_average, resolve_by_keyword, resolve_duration};
use pcp_rules::{FieldValue, Record};
use proptest::prelude::*;

const OVERLAPPING: &[(&str, u32)] = &[("stamping", 1), ("hot stamping", 2), ("hot", 3)];

proptest! {
    #[test]
    fn absent_or_null_field_gives_default(default in any::<u32>()) {
        let null = Record::new().with(PROCESS, FieldValue::Null);
        prop_assert_eq!(resolve_by_keyword(&Record::new(), PROCESS, OVERLAPPING, default), default);
        prop_assert_eq!(resolve_by_keyword(&null, PROCESS, OVERLAPPING, default), default);
    }

    #[test]
    fn single_keyword_is_found_anywhere(prefix in "[0-9 ]{0,8}", suffix in "[0-9 ]{0,8}") {
        let table: &[(&str, u32)] = &[("faca nova", 90), ("destaque", 180)];
        let record = Record::new().with(PROCESS, format!("{prefix}DESTAQUE{suffix}"));
        prop_assert_eq!(resolve_by_keyword(&record, PROCESS, table, 60), 180);
    }

    #[test]
    fn overlapping_keywords_resolve_to_first_declared(prefix in "[a-z ]{0,6}") {
        let record = Record::new().with(PROCESS, format!("{prefix}hot stamping"));
        // "stamping" is declared first, so it beats the longer "hot stamping"
        prop_assert_eq!(resolve_by_keyword(&record, PROCESS, OVERLAPPING, 0), 1);
    }

    #[test]
    fn hours_and_minutes_add_up(hours in 0u32..100, minutes in 0u32..100) {
        let record = Record::new().with(PROCESS, format!("{hours}h {minutes} min"));
        prop_assert_eq!(resolve_duration(&record, PROCESS), Some(hours * 60 + minutes));
    }

    #[test]
    fn recorded_positive_average_is_echoed(average in 1u32..1_000_000, default in 1.0f64..10_000.0) {
        let record = Record::new().with("Média Produção", i64::from(average));
        prop_assert_eq!(resolve_average(&record, default), f64::from(average));
        prop_assert_eq!(resolve_average(&Record::new(), default), default);
    }
}

#[test]
fn text_without_a_duration_is_not_found() {
    let record = Record::new().with(PROCESS, "troca de faca");
    assert_eq!(resolve_duration(&record, PROCESS), None);
    assert_eq!(resolve_duration(&Record::new(), PROCESS), None);
}
