//! # jptime
//!
//! Japanese calendar computation over a standard timestamp.
//!
//! Every instant is normalized to Japan time (`+09:00`) and then projected
//! onto the Japanese calendar: era names and years (wareki), national
//! holidays including substitute and citizens' holidays, the 24 solar terms,
//! the five seasonal festivals, lunar month names, the zodiac, and kanji
//! renderings of dates and times. All computation is pure and deterministic.
//!
//! ## Modules
//!
//! - [`numeral`] - positional and natural (meisuu) kanji numerals
//! - [`time`] - the Japan-normalized instant and its calendar fields
//! - [`wareki`] - era resolution
//! - [`sekki`] - the 24 solar terms
//! - [`occasion`] - lunar months, zodiac and seasonal festivals
//! - [`holiday`] - national, substitute and citizens' holidays
//! - [`format`] - named Japanese layouts
//! - [`calendar`] - aggregate snapshot of all of the above
//! - [`error`] - Error types
//!
//! ## Quick Start
//!
//! ```
//! use jptime::{JpLayout, JpTime};
//!
//! let t = JpTime::parse("2006-01-02T15:04:05+09:00").unwrap();
//! assert_eq!(t.jp_format(JpLayout::WarekiKanjiDate), "平成十八年一月二日");
//! assert_eq!(t.jp_format(JpLayout::WeekdayString), "月曜日");
//!
//! let new_year = JpTime::parse("2016-01-01").unwrap();
//! assert_eq!(new_year.holiday().map(|h| h.name), Some("元日"));
//! ```

pub mod calendar;
pub mod error;
pub mod format;
pub mod holiday;
pub mod numeral;
pub mod occasion;
pub mod sekki;
pub mod time;
pub mod wareki;

pub use calendar::JpCalendar;
pub use error::{JpTimeError, Result};
pub use format::JpLayout;
pub use holiday::{holidays_in_year, Holiday, HolidayDate, HolidayKind};
pub use numeral::{fmt_int, fmt_int_kanji, fmt_int_kanji_meisuu};
pub use occasion::Sekku;
pub use sekki::SolarTerm;
pub use time::{
    CalendarFields, JpDay, JpHour, JpMinute, JpMonth, JpSecond, JpTime, JpWeekday, JpYear,
};
pub use wareki::{Era, EraStart, Wareki};
