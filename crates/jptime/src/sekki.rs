//! The 24 solar terms (二十四節気).
//!
//! Each term's day of month is approximated by
//! `d + a * (Y - 1900) - (Y - 1900) / 4`, where `Y` is the solar year. The
//! coefficients are only valid up to 2099.
//!
//! Terms in January and February belong to the solar cycle that started in
//! the previous calendar year, so `Y` is the calendar year minus one there.

use serde::Serialize;

use crate::time::JpTime;

/// First calendar year the approximation no longer covers.
pub const SEKKI_YEAR_LIMIT: i32 = 2100;

const BASE_YEAR: i32 = 1900;

/// One solar term and its approximation coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SolarTerm {
    pub name: &'static str,
    pub month: u8,
    pub d: f64,
    pub a: f64,
}

const fn term(name: &'static str, month: u8, d: f64, a: f64) -> SolarTerm {
    SolarTerm { name, month, d, a }
}

/// Ordered by month, then by day within the month.
pub static SOLAR_TERMS: [SolarTerm; 24] = [
    term("小寒", 1, 6.3811, 0.242778),
    term("大寒", 1, 21.1046, 0.242765),
    term("立春", 2, 4.8693, 0.242713),
    term("雨水", 2, 19.7062, 0.242627),
    term("啓蟄", 3, 6.3968, 0.242512),
    term("春分", 3, 21.4471, 0.242377),
    term("清明", 4, 5.6280, 0.242231),
    term("穀雨", 4, 20.9375, 0.242083),
    term("立夏", 5, 6.3771, 0.241945),
    term("小満", 5, 21.9300, 0.241825),
    term("芒種", 6, 6.5733, 0.241731),
    term("夏至", 6, 22.2747, 0.241669),
    term("小暑", 7, 8.0091, 0.241642),
    term("大暑", 7, 23.7317, 0.241654),
    term("立秋", 8, 8.4102, 0.241703),
    term("処暑", 8, 24.0125, 0.241786),
    term("白露", 9, 8.5186, 0.241898),
    term("秋分", 9, 23.8896, 0.242032),
    term("寒露", 10, 9.1414, 0.242179),
    term("霜降", 10, 24.2487, 0.242328),
    term("立冬", 11, 8.2396, 0.242469),
    term("小雪", 11, 23.1189, 0.242592),
    term("大雪", 12, 7.9152, 0.242689),
    term("冬至", 12, 22.6587, 0.242752),
];

impl SolarTerm {
    /// Day of month on which this term falls in `solar_year`.
    ///
    /// Both the leap-day correction and the final conversion truncate
    /// toward zero.
    pub fn day_in(&self, solar_year: i32) -> i32 {
        let elapsed = solar_year - BASE_YEAR;
        let leap_days = elapsed / 4;
        (self.d + self.a * f64::from(elapsed) - f64::from(leap_days)) as i32
    }
}

/// The solar year a date in `month` of `year` belongs to.
fn solar_year(year: i32, month: u8) -> i32 {
    if month <= 2 {
        year - 1
    } else {
        year
    }
}

impl JpTime {
    /// The solar term falling on this date, if any.
    ///
    /// Always `None` from 2100 onward.
    ///
    /// # Examples
    ///
    /// ```
    /// use jptime::JpTime;
    ///
    /// let t = JpTime::parse("2016-03-20").unwrap();
    /// assert_eq!(t.sekki24().map(|s| s.name), Some("春分"));
    /// ```
    pub fn sekki24(&self) -> Option<&'static SolarTerm> {
        let year = self.year();
        if year >= SEKKI_YEAR_LIMIT {
            return None;
        }
        let (month, day) = (self.month(), i32::from(self.day()));
        let solar = solar_year(year, month);
        SOLAR_TERMS
            .iter()
            .filter(|term| term.month == month)
            .find(|term| term.day_in(solar) == day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::jp;

    fn sekki_name(year: i32, month: u32, day: u32) -> Option<&'static str> {
        jp(year, month, day).sekki24().map(|s| s.name)
    }

    #[test]
    fn test_all_terms_2016() {
        let expected = [
            (1, 6, "小寒"),
            (1, 21, "大寒"),
            (2, 4, "立春"),
            (2, 19, "雨水"),
            (3, 5, "啓蟄"),
            (3, 20, "春分"),
            (4, 4, "清明"),
            (4, 20, "穀雨"),
            (5, 5, "立夏"),
            (5, 20, "小満"),
            (6, 5, "芒種"),
            (6, 21, "夏至"),
            (7, 7, "小暑"),
            (7, 22, "大暑"),
            (8, 7, "立秋"),
            (8, 23, "処暑"),
            (9, 7, "白露"),
            (9, 22, "秋分"),
            (10, 8, "寒露"),
            (10, 23, "霜降"),
            (11, 7, "立冬"),
            (11, 22, "小雪"),
            (12, 7, "大雪"),
            (12, 21, "冬至"),
        ];
        for (month, day, name) in expected {
            assert_eq!(
                sekki_name(2016, month, day),
                Some(name),
                "2016-{month:02}-{day:02}"
            );
        }
    }

    #[test]
    fn test_exactly_24_matches_per_year() {
        let start = jp(2016, 1, 1);
        let matches = (0..366)
            .filter(|&i| start.add_days(i).sekki24().is_some())
            .count();
        assert_eq!(matches, 24);
    }

    #[test]
    fn test_non_term_day() {
        assert_eq!(sekki_name(2016, 1, 1), None);
        assert_eq!(sekki_name(2016, 3, 21), None);
    }

    #[test]
    fn test_cutoff_year() {
        assert_eq!(sekki_name(2100, 1, 1), None);
        assert_eq!(sekki_name(2100, 3, 20), None);
        assert_eq!(sekki_name(2100, 3, 21), None);
        // Last covered year still resolves
        assert!((0..365).any(|i| jp(2099, 1, 1).add_days(i).sekki24().is_some()));
    }

    #[test]
    fn test_january_uses_previous_solar_year() {
        assert_eq!(solar_year(2016, 1), 2015);
        assert_eq!(solar_year(2016, 2), 2015);
        assert_eq!(solar_year(2016, 3), 2016);
        assert_eq!(SOLAR_TERMS[0].day_in(2015), 6);
    }

    #[test]
    fn test_table_order() {
        assert!(SOLAR_TERMS.windows(2).all(|w| w[0].month <= w[1].month));
        assert_eq!(SOLAR_TERMS.iter().filter(|t| t.month == 3).count(), 2);
    }
}
