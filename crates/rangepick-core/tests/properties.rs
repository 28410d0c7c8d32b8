//! Property tests for date arithmetic, preset resolution and selection state.

use chrono::NaiveDate;
use proptest::prelude::*;
use rangepick_core::{
    DateValue, Granularity, PerGranularity, PresetDef, PresetList, PresetResolver, PresetToken,
    SelectionState, Unit,
};

fn any_day() -> impl Strategy<Value = NaiveDate> {
    (1970i32..2470, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

fn any_granularity() -> impl Strategy<Value = Granularity> {
    prop_oneof![
        Just(Granularity::Day),
        Just(Granularity::Month),
        Just(Granularity::Year),
    ]
}

proptest! {
    #[test]
    fn test_day_format_parses_back(day in any_day()) {
        let text = DateValue::parse(day).format(Granularity::Day);
        prop_assert_eq!(DateValue::parse(text.as_str()).day(), Some(day));
    }

    #[test]
    fn test_period_bounds_contain_the_day(day in any_day()) {
        let value = DateValue::parse(day);
        for unit in [Unit::Week, Unit::Month, Unit::Year] {
            let first = value.first_of(unit).day().unwrap();
            let last = value.last_of(unit).day().unwrap();
            prop_assert!(first <= day && day <= last, "{unit:?}: {first} {day} {last}");
        }
    }

    #[test]
    fn test_resolved_presets_are_stable(
        today in any_day(),
        g in any_granularity(),
        start in -400i64..400,
        len in 0i64..400,
    ) {
        let resolver = PresetResolver::new(g, DateValue::parse(today));
        let end = PresetToken::Offset(start + len);
        let (s, e) = resolver.resolve(Some(&PresetToken::Offset(start)), Some(&end));
        // Re-reading a resolved value at its granularity returns it unchanged.
        prop_assert_eq!(DateValue::parse(s.as_str()).format(g), s.clone());
        prop_assert_eq!(DateValue::parse(e.as_str()).format(g), e.clone());
        prop_assert!(s <= e);
    }

    #[test]
    fn test_resolving_twice_gives_identical_pairs(
        today in any_day(),
        g in any_granularity(),
        offsets in proptest::collection::vec((-400i64..400, 0i64..400), 0..8),
    ) {
        let mut defs = PresetDef::defaults(g);
        for (i, (start, len)) in offsets.into_iter().enumerate() {
            defs.push(PresetDef::new(format!("custom {i}"), start, start + len));
        }
        let today = DateValue::parse(today);
        let first = PresetList::resolve(g, today.clone(), &defs);
        let second = PresetList::resolve(g, today, &defs);

        prop_assert_eq!(first.items().len(), second.items().len());
        for (a, b) in first.items().iter().zip(second.items()) {
            prop_assert_ne!(a.id, b.id);
            prop_assert_eq!(&a.label, &b.label);
            prop_assert_eq!(&a.resolved_start, &b.resolved_start);
            prop_assert_eq!(&a.resolved_end, &b.resolved_end);
        }
    }

    #[test]
    fn test_switching_never_touches_stored_pairs(
        switches in proptest::collection::vec(any_granularity(), 1..20),
    ) {
        let mut spans = PerGranularity::default();
        spans.day = rangepick_core::DateSpan::new(Some("2024-06-03"), Some("2024-06-10"));
        spans.year = rangepick_core::DateSpan::new(Some("2020"), None);
        let mut state = SelectionState::new(Granularity::Day, spans.clone());

        for g in switches {
            state.switch_to(g);
            prop_assert_eq!(state.spans(), &spans);
            prop_assert_eq!(state.is_valid(), spans[g].is_complete());
        }
    }
}
