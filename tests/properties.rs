use chrono::TimeDelta;
use jdatetime::{JalaliDate, JalaliDateTime, Locale, MAX_ORDINAL, ordinal::LAST_DAY_ORDINAL};
use proptest::prelude::*;

fn any_date() -> impl Strategy<Value = JalaliDate> {
    (1..=LAST_DAY_ORDINAL).prop_map(|n| JalaliDate::from_ordinal(n).unwrap())
}

fn arithmetic_date() -> impl Strategy<Value = JalaliDate> {
    (1..=MAX_ORDINAL).prop_map(|n| JalaliDate::from_ordinal(n).unwrap())
}

proptest! {
    #[test]
    fn gregorian_round_trip(date in any_date()) {
        prop_assert_eq!(JalaliDate::from_gregorian(date.to_gregorian()), Ok(date));
    }

    #[test]
    fn order_follows_ordinal(a in any_date(), b in any_date()) {
        prop_assert_eq!(a.cmp(&b), a.to_ordinal().cmp(&b.to_ordinal()));
        prop_assert_eq!(a == b, a.to_ordinal() == b.to_ordinal());
    }

    #[test]
    fn week_repeats(date in arithmetic_date()) {
        if let Ok(later) = date.checked_add_days(7) {
            prop_assert_eq!(later.weekday(), date.weekday());
        }
    }

    #[test]
    fn add_then_subtract(date in arithmetic_date(), days in -4_000_000i64..4_000_000) {
        match date.checked_add_days(days) {
            Ok(moved) => {
                prop_assert_eq!(moved - date, TimeDelta::days(days));
                prop_assert_eq!(moved.checked_sub_days(days), Ok(date));
            }
            Err(_) => {
                let target = date.to_ordinal() + days;
                prop_assert!(!(1..=MAX_ORDINAL).contains(&target));
            }
        }
    }

    #[test]
    fn iso_format_parses_back(date in any_date(), fa in any::<bool>()) {
        let locale = if fa { Locale::Fa } else { Locale::En };
        let text = date.with_locale(locale).to_string();
        prop_assert_eq!(text.parse::<JalaliDate>(), Ok(date));
    }

    #[test]
    fn state_round_trip(date in any_date()) {
        prop_assert_eq!(JalaliDate::from_state(&date.to_state()), Ok(date));
    }

    #[test]
    fn week_of_year_is_consistent(date in any_date()) {
        let week = date.week_of_year();
        prop_assert!((1..=54).contains(&week));
        if let Ok(next) = date.checked_add_days(1) {
            if next.year() == date.year() {
                let step = next.week_of_year() - week;
                prop_assert_eq!(step == 1, next.weekday() == 0);
            }
        }
    }

    #[test]
    fn datetime_add_then_subtract(
        date in arithmetic_date(),
        seconds in 0u32..86_400,
        micros in -1_000_000_000_000i64..1_000_000_000_000,
    ) {
        let dt = JalaliDateTime::new(
            date,
            (seconds / 3600) as u8,
            (seconds / 60 % 60) as u8,
            (seconds % 60) as u8,
            0,
        )
        .unwrap();
        let delta = TimeDelta::microseconds(micros);
        if let Ok(moved) = dt.checked_add_signed(delta) {
            prop_assert_eq!(moved.signed_duration_since(&dt), Ok(delta));
            prop_assert_eq!(moved.checked_sub_signed(delta), Ok(dt));
        }
    }
}
