//! The Japan-normalized instant and its calendar fields.
//!
//! [`JpTime`] wraps a `chrono::DateTime` pinned to the fixed `+09:00` offset.
//! Every calendar computation in this crate reads its fields from that
//! normalized view, so the same instant always yields the same era, holiday
//! and solar term no matter which offset it was constructed in.
//!
//! There is no timezone database involved: Japan has observed a single fixed
//! offset for the whole modern era.

use std::fmt;
use std::fmt::Write as _;

use chrono::{
    DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeZone,
    Timelike, Utc,
};
use serde::Serialize;

use crate::error::{JpTimeError, Result};
use crate::numeral::{fmt_int_kanji, fmt_int_kanji_meisuu};

/// Offset of Japan Standard Time from UTC, in seconds.
pub const JST_OFFSET_SECS: i32 = 9 * 60 * 60;

/// Weekday glyphs, indexed from Sunday.
const WEEKDAY_GLYPHS: [&str; 7] = ["日", "月", "火", "水", "木", "金", "土"];

/// The fixed `+09:00` offset.
pub fn jst() -> FixedOffset {
    FixedOffset::east_opt(JST_OFFSET_SECS).unwrap_or(Utc.fix())
}

// ── JpTime ──────────────────────────────────────────────────────────────────

/// An instant viewed on the Japanese wall clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JpTime(DateTime<FixedOffset>);

/// Read-only projection of a [`JpTime`] onto calendar fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarFields {
    /// Proleptic Gregorian year; 0 is 1 BC, -1 is 2 BC.
    pub year: i32,
    /// Month of the year (1-12).
    pub month: u8,
    /// Day of the month (1-31).
    pub day: u8,
    /// Day of the week, 0 = Sunday through 6 = Saturday.
    pub weekday: u8,
    /// Hour of the day (0-23).
    pub hour: u8,
    /// Minute of the hour (0-59).
    pub minute: u8,
    /// Second of the minute (0-59).
    pub second: u8,
}

impl JpTime {
    /// Normalize any chrono instant to Japan time.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use jptime::JpTime;
    ///
    /// let t = JpTime::new(Utc.with_ymd_and_hms(2015, 12, 31, 15, 0, 0).unwrap());
    /// assert_eq!((t.year(), t.month(), t.day(), t.hour()), (2016, 1, 1, 0));
    /// ```
    pub fn new<Tz: TimeZone>(dt: DateTime<Tz>) -> Self {
        JpTime(dt.with_timezone(&jst()))
    }

    /// Build an instant from Japanese wall-clock fields.
    ///
    /// # Errors
    ///
    /// Returns [`JpTimeError::InvalidDatetime`] if the fields do not name a
    /// real date and time (e.g. February 30th or hour 24).
    pub fn from_ymd_hms(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self> {
        jst()
            .with_ymd_and_hms(year, month, day, hour, minute, second)
            .single()
            .map(JpTime)
            .ok_or_else(|| {
                JpTimeError::InvalidDatetime(format!(
                    "{year:04}-{month:02}-{day:02}T{hour:02}:{minute:02}:{second:02} does not exist"
                ))
            })
    }

    /// Midnight (Japan time) at the start of `date`.
    ///
    /// # Errors
    ///
    /// Returns [`JpTimeError::InvalidDatetime`] if that midnight precedes the
    /// earliest instant chrono can represent (the first hours of
    /// [`NaiveDate::MIN`]).
    pub fn from_date(date: NaiveDate) -> Result<Self> {
        JpTime::from_local(date.and_time(NaiveTime::MIN))
    }

    /// Parse machine-readable input.
    ///
    /// Accepted forms:
    /// - RFC 3339 with any offset: `"2006-01-02T06:04:05Z"`
    /// - Japan wall-clock datetime: `"2006-01-02T15:04:05"`
    /// - Japan wall-clock date (midnight): `"2006-01-02"`
    ///
    /// # Errors
    ///
    /// Returns [`JpTimeError::InvalidDatetime`] for anything else.
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(JpTime::new(dt));
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
            return JpTime::from_local(naive);
        }
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|e| JpTimeError::InvalidDatetime(format!("'{}': {}", s, e)))
            .and_then(JpTime::from_date)
    }

    // A fixed offset maps every local time to exactly one instant, unless that
    // instant falls before chrono's minimum.
    fn from_local(naive: NaiveDateTime) -> Result<Self> {
        naive
            .checked_sub_signed(chrono::Duration::seconds(JST_OFFSET_SECS.into()))
            .map(|utc| JpTime(DateTime::from_naive_utc_and_offset(utc, jst())))
            .ok_or_else(|| {
                JpTimeError::InvalidDatetime(format!("{naive} is out of range in Japan time"))
            })
    }

    /// The underlying chrono value (offset `+09:00`).
    pub fn datetime(&self) -> DateTime<FixedOffset> {
        self.0
    }

    /// The calendar date in Japan.
    pub fn date_naive(&self) -> NaiveDate {
        self.0.date_naive()
    }

    /// The same wall-clock time `days` days later (earlier when negative).
    ///
    /// # Panics
    ///
    /// Panics if the result leaves chrono's range; see [`JpTime::checked_add_days`].
    pub fn add_days(&self, days: i64) -> Self {
        JpTime(self.0 + chrono::Duration::days(days))
    }

    /// Like [`JpTime::add_days`], returning `None` outside chrono's range.
    pub fn checked_add_days(&self, days: i64) -> Option<Self> {
        self.0
            .checked_add_signed(chrono::Duration::days(days))
            .map(JpTime)
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u8 {
        self.0.month() as u8
    }

    pub fn day(&self) -> u8 {
        self.0.day() as u8
    }

    /// Day of the week, 0 = Sunday.
    pub fn weekday(&self) -> u8 {
        self.0.weekday().num_days_from_sunday() as u8
    }

    pub fn hour(&self) -> u8 {
        self.0.hour() as u8
    }

    pub fn minute(&self) -> u8 {
        self.0.minute() as u8
    }

    pub fn second(&self) -> u8 {
        self.0.second() as u8
    }

    pub fn fields(&self) -> CalendarFields {
        CalendarFields {
            year: self.year(),
            month: self.month(),
            day: self.day(),
            weekday: self.weekday(),
            hour: self.hour(),
            minute: self.minute(),
            second: self.second(),
        }
    }

    /// Render with a chrono strftime pattern.
    ///
    /// A pattern chrono cannot interpret renders as `""`.
    pub fn strftime(&self, pattern: &str) -> String {
        let mut out = String::new();
        match write!(out, "{}", self.0.format(pattern)) {
            Ok(()) => out,
            Err(_) => String::new(),
        }
    }

    pub fn jp_year(&self) -> JpYear {
        JpYear(self.year())
    }

    pub fn jp_month(&self) -> JpMonth {
        JpMonth(self.month())
    }

    pub fn jp_day(&self) -> JpDay {
        JpDay(self.day())
    }

    pub fn jp_weekday(&self) -> JpWeekday {
        JpWeekday(self.weekday())
    }

    pub fn jp_hour(&self) -> JpHour {
        JpHour(self.hour())
    }

    pub fn jp_minute(&self) -> JpMinute {
        JpMinute(self.minute())
    }

    pub fn jp_second(&self) -> JpSecond {
        JpSecond(self.second())
    }
}

impl fmt::Display for JpTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_rfc3339())
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for JpTime {
    fn from(dt: DateTime<Tz>) -> Self {
        JpTime::new(dt)
    }
}

// ── Display newtypes ────────────────────────────────────────────────────────

/// A calendar year rendered in positional kanji (`二〇一六年`).
///
/// Years at or before 0 are rendered as years before the epoch:
/// year 0 is `紀元前一年`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JpYear(pub i32);

impl fmt::Display for JpYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let year = i64::from(self.0);
        if year <= 0 {
            write!(f, "紀元前{}年", fmt_int_kanji(1 - year))
        } else {
            write!(f, "{}年", fmt_int_kanji(year))
        }
    }
}

/// Month of the year (`十二月`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JpMonth(pub u8);

impl fmt::Display for JpMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}月", fmt_int_kanji_meisuu(self.0.into()))
    }
}

/// Day of the month (`十一日`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JpDay(pub u8);

impl fmt::Display for JpDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}日", fmt_int_kanji_meisuu(self.0.into()))
    }
}

/// Day of the week as a single glyph (`月`), 0 = Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JpWeekday(pub u8);

impl JpWeekday {
    pub fn glyph(&self) -> &'static str {
        WEEKDAY_GLYPHS[usize::from(self.0 % 7)]
    }
}

impl fmt::Display for JpWeekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

/// Hour of the day (`十五時`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JpHour(pub u8);

impl fmt::Display for JpHour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}時", fmt_int_kanji_meisuu(self.0.into()))
    }
}

/// Minute of the hour (`四分`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JpMinute(pub u8);

impl fmt::Display for JpMinute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}分", fmt_int_kanji_meisuu(self.0.into()))
    }
}

/// Second of the minute (`五秒`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JpSecond(pub u8);

impl fmt::Display for JpSecond {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}秒", fmt_int_kanji_meisuu(self.0.into()))
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
pub(crate) fn jp(year: i32, month: u32, day: u32) -> JpTime {
    JpTime::from_ymd_hms(year, month, day, 0, 0, 0).unwrap()
}
