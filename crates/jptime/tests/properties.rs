use chrono::{Days, NaiveDate};
use jptime::{fmt_int, fmt_int_kanji, fmt_int_kanji_meisuu, Era, HolidayKind, JpTime};
use proptest::prelude::*;

const KANJI_DIGITS: [char; 10] = ['〇', '一', '二', '三', '四', '五', '六', '七', '八', '九'];

/// Any day from 1900 to 2120, at midnight Japan time.
fn any_date() -> impl Strategy<Value = JpTime> {
    (0u64..80_000).prop_map(|offset| {
        let base = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap();
        JpTime::from_date(base + Days::new(offset)).unwrap()
    })
}

proptest! {
    #[test]
    fn positional_kanji_mirrors_decimal_digits(n in 1i64..10_000_000_000) {
        let kanji = fmt_int_kanji(n);
        let digits = fmt_int(n);
        prop_assert_eq!(kanji.chars().count(), digits.len());
        for (k, d) in kanji.chars().zip(digits.bytes()) {
            prop_assert_eq!(k, KANJI_DIGITS[(d - b'0') as usize]);
        }
        prop_assert_eq!(digits, n.to_string());
    }

    #[test]
    fn meisuu_defined_exactly_on_its_domain(n in -1_000_000i64..1_000_000) {
        let rendered = fmt_int_kanji_meisuu(n);
        prop_assert_eq!(rendered.is_empty(), !(0..100_000).contains(&n));
    }

    #[test]
    fn meisuu_never_starts_with_one_before_a_unit(n in 10i64..100_000) {
        let rendered: Vec<char> = fmt_int_kanji_meisuu(n).chars().collect();
        let leading_one_unit = rendered.len() >= 2
            && rendered[0] == '一'
            && matches!(rendered[1], '十' | '百' | '千' | '万');
        prop_assert!(!leading_one_unit, "{}", n);
    }

    #[test]
    fn lookups_are_deterministic(t in any_date()) {
        prop_assert_eq!(t.holiday(), t.holiday());
        prop_assert_eq!(t.wareki(), t.wareki());
        prop_assert_eq!(t.sekki24().map(|s| s.name), t.sekki24().map(|s| s.name));
        prop_assert_eq!(t.calendar(), t.calendar());
    }

    #[test]
    fn derived_holidays_never_fall_on_sunday(t in any_date()) {
        if let Some(h) = t.holiday() {
            if h.kind != HolidayKind::National {
                prop_assert_ne!(t.weekday(), 0);
            }
        }
    }

    #[test]
    fn substitute_holiday_follows_a_holiday(t in any_date()) {
        if t.holiday().map(|h| h.kind) == Some(HolidayKind::Substitute) {
            prop_assert!(t.add_days(-1).is_holiday());
        }
    }

    #[test]
    fn citizens_holiday_is_sandwiched(t in any_date()) {
        if t.holiday().map(|h| h.kind) == Some(HolidayKind::Citizens) {
            prop_assert!(t.add_days(-1).is_holiday());
            prop_assert!(t.add_days(1).is_holiday());
        }
    }

    #[test]
    fn at_most_one_solar_term_per_date(t in any_date()) {
        let month = t.month();
        let hits = jptime::sekki::SOLAR_TERMS
            .iter()
            .filter(|term| term.month == month)
            .filter(|term| {
                let solar_year = if month <= 2 { t.year() - 1 } else { t.year() };
                term.day_in(solar_year) == i32::from(t.day())
            })
            .count();
        prop_assert!(hits <= 1);
    }

    #[test]
    fn era_years_are_positive_and_monotonic(t in any_date()) {
        let today = t.wareki();
        prop_assert!(today.era.is_some());
        prop_assert!(today.year >= 1);

        let tomorrow = t.add_days(1).wareki();
        if tomorrow.era == today.era {
            prop_assert!(tomorrow.year == today.year || tomorrow.year == today.year + 1);
        } else {
            prop_assert!(tomorrow.era > today.era);
            prop_assert_eq!(tomorrow.year, 1);
        }
    }
}

#[test]
fn era_starts_resolve_to_first_year() {
    for era in [Era::Taisho, Era::Showa, Era::Heisei] {
        let start = era.start().unwrap();
        let t = JpTime::from_ymd_hms(start.year, start.month.into(), start.day.into(), 0, 0, 0)
            .unwrap();
        let w = t.wareki();
        assert_eq!(w.era, Some(era));
        assert_eq!(w.year, 1);

        // One second earlier is still the previous era
        let before = JpTime::new(t.datetime() - chrono::Duration::seconds(1)).wareki();
        assert_ne!(before.era, Some(era));
    }
}
