//! National holidays (祝日) and the two derived holidays.
//!
//! Resolution is layered:
//!
//! 1. **National**: the fixed-date, "happy Monday" and equinox rules of the
//!    Act on National Holidays, with each historical amendment keyed on the
//!    year it took effect.
//! 2. **Substitute** (振替休日): a weekday following a Sunday holiday.
//! 3. **Citizens'** (国民の休日): a weekday sandwiched between two holidays.
//!
//! Layers 2 and 3 inspect neighbouring days through layer 1 only, so a lookup
//! touches at most six dates and never recurses.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use tracing::debug;

use crate::error::{JpTimeError, Result};
use crate::time::JpTime;

/// The Act on National Holidays took effect in July 1948.
const NATIONAL_HOLIDAY_ACT: i32 = 1948;
/// Substitute holidays were introduced in April 1973.
const SUBSTITUTE_SINCE: i32 = 1973;
/// From 2007 a substitute holiday follows a whole run of holidays, not just the Sunday.
const SUBSTITUTE_RUN_SINCE: i32 = 2007;
/// Longest run of consecutive holidays a substitute holiday can trail.
const SUBSTITUTE_MAX_LOOKBACK: i64 = 5;
/// Citizens' holidays were introduced in 1988.
const CITIZENS_SINCE: i32 = 1988;

const SUNDAY: u8 = 0;
const MONDAY: u8 = 1;

/// How a holiday was derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HolidayKind {
    /// A holiday named by the national holiday law.
    National,
    /// 振替休日.
    Substitute,
    /// 国民の休日.
    Citizens,
}

/// A resolved holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Holiday {
    pub name: &'static str,
    pub kind: HolidayKind,
}

/// A holiday together with the date it falls on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HolidayDate {
    pub date: NaiveDate,
    pub name: &'static str,
    pub kind: HolidayKind,
}

impl Holiday {
    fn national(name: &'static str) -> Option<Holiday> {
        Some(Holiday {
            name,
            kind: HolidayKind::National,
        })
    }
}

impl JpTime {
    /// The holiday observed on this date, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use jptime::{HolidayKind, JpTime};
    ///
    /// let h = JpTime::parse("2015-05-06").unwrap().holiday().unwrap();
    /// assert_eq!(h.name, "振替休日");
    /// assert_eq!(h.kind, HolidayKind::Substitute);
    /// ```
    pub fn holiday(&self) -> Option<Holiday> {
        national_holiday(self)
            .or_else(|| substitute_holiday(self))
            .or_else(|| citizens_holiday(self))
    }

    /// Whether [`JpTime::holiday`] names a holiday on this date.
    pub fn is_holiday(&self) -> bool {
        self.holiday().is_some()
    }
}

/// Every holiday of a calendar year, in date order.
///
/// # Errors
///
/// Returns [`JpTimeError::InvalidYear`] if midnight of any day of the year
/// lies outside the range chrono can represent.
pub fn holidays_in_year(year: i32) -> Result<Vec<HolidayDate>> {
    let first = NaiveDate::from_ymd_opt(year, 1, 1).ok_or(JpTimeError::InvalidYear(year))?;

    let mut holidays = Vec::new();
    for date in first.iter_days().take_while(|date| date.year() == year) {
        let t = JpTime::from_date(date).map_err(|_| JpTimeError::InvalidYear(year))?;
        if let Some(h) = t.holiday() {
            holidays.push(HolidayDate {
                date,
                name: h.name,
                kind: h.kind,
            });
        }
    }

    debug!(year, count = holidays.len(), "resolved holidays for year");
    Ok(holidays)
}

// ── National holidays ───────────────────────────────────────────────────────

fn national_holiday(t: &JpTime) -> Option<Holiday> {
    let (year, day) = (t.year(), t.day());
    if year < NATIONAL_HOLIDAY_ACT {
        return None;
    }

    match t.month() {
        1 => {
            if day == 1 {
                return Holiday::national("元日");
            }
            if (year >= 2000 && happy_monday(t, 2)) || (year < 2000 && day == 15) {
                return Holiday::national("成人の日");
            }
        }
        2 => {
            if day == 11 {
                return Holiday::national("建国記念の日");
            }
        }
        3 => {
            if is_solar_term(t, "春分") {
                return Holiday::national("春分の日");
            }
        }
        4 => {
            if day == 29 {
                return Holiday::national(if year >= 2007 {
                    "昭和の日"
                } else if year >= 1989 {
                    "みどりの日"
                } else {
                    "天皇誕生日"
                });
            }
        }
        5 => match day {
            3 => return Holiday::national("憲法記念日"),
            4 if year >= 2007 => return Holiday::national("みどりの日"),
            5 => return Holiday::national("こどもの日"),
            _ => {}
        },
        7 => {
            if (year >= 2003 && happy_monday(t, 3)) || ((1995..2003).contains(&year) && day == 20)
            {
                return Holiday::national("海の日");
            }
        }
        8 => {
            if year >= 2016 && day == 11 {
                return Holiday::national("山の日");
            }
        }
        9 => {
            if (year >= 2003 && happy_monday(t, 3)) || ((1966..2003).contains(&year) && day == 15)
            {
                return Holiday::national("敬老の日");
            }
            if is_solar_term(t, "秋分") {
                return Holiday::national("秋分の日");
            }
        }
        10 => {
            if (year >= 2003 && happy_monday(t, 2)) || ((1966..2003).contains(&year) && day == 10)
            {
                return Holiday::national("体育の日");
            }
        }
        11 => match day {
            3 => return Holiday::national("文化の日"),
            23 => return Holiday::national("勤労感謝の日"),
            _ => {}
        },
        12 => {
            if year >= 1989 && day == 23 {
                return Holiday::national("天皇誕生日");
            }
        }
        _ => {}
    }
    None
}

/// Whether `t` is the `nth` Monday of its month.
fn happy_monday(t: &JpTime, nth: u8) -> bool {
    t.weekday() == MONDAY && week_of_month(t) == nth
}

/// 1-based week of the month, counting from the 1st.
fn week_of_month(t: &JpTime) -> u8 {
    (t.day() - 1) / 7 + 1
}

fn is_solar_term(t: &JpTime, name: &str) -> bool {
    t.sekki24().is_some_and(|term| term.name == name)
}

// ── Derived holidays ────────────────────────────────────────────────────────

fn substitute_holiday(t: &JpTime) -> Option<Holiday> {
    let year = t.year();
    if year < SUBSTITUTE_SINCE || t.weekday() == SUNDAY {
        return None;
    }

    for offset in 1..=SUBSTITUTE_MAX_LOOKBACK {
        let Some(prev) = t.checked_add_days(-offset) else {
            break;
        };
        if national_holiday(&prev).is_none() {
            break;
        }
        if prev.weekday() == SUNDAY {
            return Some(Holiday {
                name: "振替休日",
                kind: HolidayKind::Substitute,
            });
        }
        // Before 2007 only the day right after the Sunday qualified.
        if year < SUBSTITUTE_RUN_SINCE {
            break;
        }
    }
    None
}

fn citizens_holiday(t: &JpTime) -> Option<Holiday> {
    if t.year() < CITIZENS_SINCE || t.weekday() == SUNDAY {
        return None;
    }

    let is_national = |days| {
        t.checked_add_days(days)
            .is_some_and(|n| national_holiday(&n).is_some())
    };
    let sandwiched = is_national(-1) && is_national(1);
    sandwiched.then_some(Holiday {
        name: "国民の休日",
        kind: HolidayKind::Citizens,
    })
}
