//! Japanese textual layouts.
//!
//! Named layouts are identified by an exemplar: the layout rendered for
//! 2006-01-02 15:04:05 JST (a Monday in Heisei 18). Any other string is
//! treated as a chrono strftime pattern.
//!
//! | Exemplar | Layout |
//! |---|---|
//! | `H18.01.02` | JIS X 0301 with the era code |
//! | `平18.01.02` | JIS X 0301 with the first glyph of the era name |
//! | `二〇〇六年一月二日` | kanji date |
//! | `一五時四分五秒` | kanji time |
//! | `平成18年1月2日` | wareki date |
//! | `平成一八年一月二日` | wareki date in kanji |
//! | `（月）` | weekday in brackets |
//! | `月曜日` | weekday word |

use std::fmt;

use crate::numeral::{fmt_int, fmt_int_kanji_meisuu};
use crate::time::JpTime;

/// strftime pattern for an RFC 3339 style timestamp with offset.
pub const ISO8601: &str = "%Y-%m-%dT%H:%M:%S%:z";
pub const JIS_X0301: &str = "H18.01.02";
pub const JIS_X0301_JP: &str = "平18.01.02";
pub const KANJI_DATE: &str = "二〇〇六年一月二日";
pub const KANJI_TIME: &str = "一五時四分五秒";
pub const WAREKI_DATE: &str = "平成18年1月2日";
pub const WAREKI_KANJI_DATE: &str = "平成一八年一月二日";
pub const WEEKDAY_BRACKETS: &str = "（月）";
pub const WEEKDAY_STRING: &str = "月曜日";

/// An output layout for [`JpTime::jp_format`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JpLayout<'a> {
    Iso8601,
    JisX0301,
    JisX0301Jp,
    KanjiDate,
    KanjiTime,
    WarekiDate,
    WarekiKanjiDate,
    WeekdayBrackets,
    WeekdayString,
    /// Pass-through to chrono's strftime.
    Strftime(&'a str),
}

impl JpLayout<'static> {
    /// Every named layout, in documentation order.
    pub const ALL: [JpLayout<'static>; 9] = [
        JpLayout::Iso8601,
        JpLayout::JisX0301,
        JpLayout::JisX0301Jp,
        JpLayout::KanjiDate,
        JpLayout::KanjiTime,
        JpLayout::WarekiDate,
        JpLayout::WarekiKanjiDate,
        JpLayout::WeekdayBrackets,
        JpLayout::WeekdayString,
    ];
}

impl<'a> JpLayout<'a> {
    /// Stable kebab-case identifier of a named layout (`"wareki-date"`).
    pub fn name(&self) -> &'static str {
        match self {
            JpLayout::Iso8601 => "iso8601",
            JpLayout::JisX0301 => "jisx0301",
            JpLayout::JisX0301Jp => "jisx0301-jp",
            JpLayout::KanjiDate => "kanji-date",
            JpLayout::KanjiTime => "kanji-time",
            JpLayout::WarekiDate => "wareki-date",
            JpLayout::WarekiKanjiDate => "wareki-kanji-date",
            JpLayout::WeekdayBrackets => "weekday-brackets",
            JpLayout::WeekdayString => "weekday-string",
            JpLayout::Strftime(_) => "strftime",
        }
    }

    /// The layout string this variant is recognized from.
    pub fn as_str(&self) -> &'a str {
        match self {
            JpLayout::Iso8601 => ISO8601,
            JpLayout::JisX0301 => JIS_X0301,
            JpLayout::JisX0301Jp => JIS_X0301_JP,
            JpLayout::KanjiDate => KANJI_DATE,
            JpLayout::KanjiTime => KANJI_TIME,
            JpLayout::WarekiDate => WAREKI_DATE,
            JpLayout::WarekiKanjiDate => WAREKI_KANJI_DATE,
            JpLayout::WeekdayBrackets => WEEKDAY_BRACKETS,
            JpLayout::WeekdayString => WEEKDAY_STRING,
            JpLayout::Strftime(pattern) => *pattern,
        }
    }
}

impl<'a> From<&'a str> for JpLayout<'a> {
    fn from(layout: &'a str) -> Self {
        match layout {
            JIS_X0301 => JpLayout::JisX0301,
            JIS_X0301_JP => JpLayout::JisX0301Jp,
            KANJI_DATE => JpLayout::KanjiDate,
            KANJI_TIME => JpLayout::KanjiTime,
            WAREKI_DATE => JpLayout::WarekiDate,
            WAREKI_KANJI_DATE => JpLayout::WarekiKanjiDate,
            WEEKDAY_BRACKETS => JpLayout::WeekdayBrackets,
            WEEKDAY_STRING => JpLayout::WeekdayString,
            ISO8601 => JpLayout::Iso8601,
            other => JpLayout::Strftime(other),
        }
    }
}

impl fmt::Display for JpLayout<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl JpTime {
    /// Render this instant in a Japanese layout.
    ///
    /// The JIS X 0301 layouts render as `""` for the pseudo-eras (before
    /// Meiji 6), since they have no single-character era code.
    ///
    /// # Examples
    ///
    /// ```
    /// use jptime::{JpLayout, JpTime};
    ///
    /// let t = JpTime::parse("2006-01-02T15:04:05+09:00").unwrap();
    /// assert_eq!(t.jp_format(JpLayout::WarekiKanjiDate), "平成十八年一月二日");
    /// assert_eq!(t.jp_format("月曜日"), "月曜日");
    /// assert_eq!(t.jp_format("%Y/%m/%d"), "2006/01/02");
    /// ```
    pub fn jp_format<'a>(&self, layout: impl Into<JpLayout<'a>>) -> String {
        match layout.into() {
            JpLayout::Iso8601 => self.strftime(ISO8601),
            JpLayout::JisX0301 => {
                let wareki = self.wareki();
                if !wareki.has_single_initial() {
                    return String::new();
                }
                format!(
                    "{}{}{}",
                    wareki.initial,
                    fmt_int(wareki.year.into()),
                    self.strftime(".%m.%d")
                )
            }
            JpLayout::JisX0301Jp => {
                let wareki = self.wareki();
                if !wareki.has_single_initial() {
                    return String::new();
                }
                let head: String = wareki.name.chars().take(1).collect();
                format!(
                    "{}{}{}",
                    head,
                    fmt_int(wareki.year.into()),
                    self.strftime(".%m.%d")
                )
            }
            JpLayout::KanjiDate => self.kanji_date(),
            JpLayout::KanjiTime => {
                format!("{}{}{}", self.jp_hour(), self.jp_minute(), self.jp_second())
            }
            JpLayout::WarekiDate => {
                let wareki = self.wareki();
                format!(
                    "{}{}年{}",
                    wareki.name,
                    fmt_int(wareki.year.into()),
                    self.strftime("%-m月%-d日")
                )
            }
            JpLayout::WarekiKanjiDate => {
                let wareki = self.wareki();
                if !wareki.has_single_initial() {
                    return self.kanji_date();
                }
                format!(
                    "{}{}年{}{}",
                    wareki.name,
                    fmt_int_kanji_meisuu(wareki.year.into()),
                    self.jp_month(),
                    self.jp_day()
                )
            }
            JpLayout::WeekdayBrackets => format!("（{}）", self.jp_weekday()),
            JpLayout::WeekdayString => format!("{}曜日", self.jp_weekday()),
            JpLayout::Strftime(pattern) => self.strftime(pattern),
        }
    }

    fn kanji_date(&self) -> String {
        format!("{}{}{}", self.jp_year(), self.jp_month(), self.jp_day())
    }
}
