//! Fixed lookup tables: lunar month names, the zodiac, and seasonal festivals.

use serde::Serialize;

use crate::time::JpTime;

/// Traditional month names (旧暦), January first.
pub static KYUUREKI_MONTHS: [&str; 12] = [
    "睦月", "如月", "弥生", "卯月", "皐月", "水無月", "文月", "葉月", "長月", "神無月", "霜月",
    "師走",
];

/// The twelve earthly branches (干支), starting from 子.
pub static ETO: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];

/// One of the five seasonal festivals (五節句).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Sekku {
    /// Formal name (`端午`).
    pub name: &'static str,
    /// Popular name (`菖蒲の節句`).
    pub alias: &'static str,
}

static SEKKU: [(u8, u8, Sekku); 5] = [
    (1, 7, Sekku { name: "人日", alias: "七草の節句" }),
    (3, 3, Sekku { name: "上巳", alias: "桃の節句" }),
    (5, 5, Sekku { name: "端午", alias: "菖蒲の節句" }),
    (7, 7, Sekku { name: "七夕", alias: "笹の節句" }),
    (9, 9, Sekku { name: "重陽", alias: "菊の節句" }),
];

impl JpTime {
    /// Traditional name of this date's month.
    pub fn kyuureki_month(&self) -> &'static str {
        KYUUREKI_MONTHS[usize::from(self.month() - 1)]
    }

    /// Zodiac sign of this date's calendar year.
    pub fn eto(&self) -> &'static str {
        ETO[(self.year() + 8).rem_euclid(12) as usize]
    }

    /// The seasonal festival held on this date, if any.
    pub fn sekku(&self) -> Option<Sekku> {
        let (month, day) = (self.month(), self.day());
        SEKKU
            .iter()
            .find(|(m, d, _)| *m == month && *d == day)
            .map(|(_, _, sekku)| *sekku)
    }
}
