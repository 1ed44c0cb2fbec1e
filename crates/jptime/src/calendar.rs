//! Aggregate snapshot of everything the crate knows about an instant.

use serde::Serialize;

use crate::format::JpLayout;
use crate::holiday::Holiday;
use crate::occasion::Sekku;
use crate::time::{CalendarFields, JpTime};
use crate::wareki::Wareki;

/// Japanese calendar metadata for one instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JpCalendar {
    /// RFC 3339 timestamp with the `+09:00` offset.
    pub datetime: String,
    pub fields: CalendarFields,
    pub wareki: Wareki,
    /// e.g. `平成十八年一月二日`
    pub wareki_date: String,
    /// e.g. `二〇〇六年一月二日`
    pub kanji_date: String,
    /// e.g. `十五時四分五秒`
    pub kanji_time: String,
    pub weekday: &'static str,
    pub kyuureki_month: &'static str,
    pub eto: &'static str,
    pub sekku: Option<Sekku>,
    pub sekki24: Option<&'static str>,
    pub holiday: Option<Holiday>,
}

impl JpTime {
    /// Collect every calendar attribute of this instant.
    pub fn calendar(&self) -> JpCalendar {
        JpCalendar {
            datetime: self.to_string(),
            fields: self.fields(),
            wareki: self.wareki(),
            wareki_date: self.jp_format(JpLayout::WarekiKanjiDate),
            kanji_date: self.jp_format(JpLayout::KanjiDate),
            kanji_time: self.jp_format(JpLayout::KanjiTime),
            weekday: self.jp_weekday().glyph(),
            kyuureki_month: self.kyuureki_month(),
            eto: self.eto(),
            sekku: self.sekku(),
            sekki24: self.sekki24().map(|term| term.name),
            holiday: self.holiday(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::holiday::HolidayKind;

    #[test]
    fn test_calendar_snapshot() {
        let cal = JpTime::from_ymd_hms(2016, 3, 20, 9, 30, 0).unwrap().calendar();
        assert_eq!(cal.datetime, "2016-03-20T09:30:00+09:00");
        assert_eq!(cal.wareki.name, "平成");
        assert_eq!(cal.wareki.year, 28);
        assert_eq!(cal.wareki_date, "平成二十八年三月二十日");
        assert_eq!(cal.kanji_date, "二〇一六年三月二十日");
        assert_eq!(cal.kanji_time, "九時三十分零秒");
        assert_eq!(cal.weekday, "日");
        assert_eq!(cal.kyuureki_month, "弥生");
        assert_eq!(cal.eto, "申");
        assert_eq!(cal.sekku, None);
        assert_eq!(cal.sekki24, Some("春分"));
        assert_eq!(
            cal.holiday,
            Some(Holiday {
                name: "春分の日",
                kind: HolidayKind::National
            })
        );
    }

    #[test]
    fn test_calendar_serializes() {
        let cal = JpTime::from_ymd_hms(2015, 5, 6, 0, 0, 0).unwrap().calendar();
        let json = serde_json::to_value(&cal).unwrap();
        assert_eq!(json["holiday"]["name"], "振替休日");
        assert_eq!(json["holiday"]["kind"], "substitute");
        assert_eq!(json["wareki"]["era"], "Heisei");
        assert_eq!(json["fields"]["weekday"], 3);
        assert!(json["sekku"].is_null());
    }
}
