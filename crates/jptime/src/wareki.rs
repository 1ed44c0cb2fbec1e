//! Era (wareki, 和暦) resolution.
//!
//! Maps a date to one of a fixed, ordered list of eras and computes the year
//! within that era. The two outermost entries are pseudo-eras: 紀元前 (years
//! before the common epoch, no lower bound) and 西暦 (the common era up to
//! the adoption of the Gregorian calendar in Japan).

use serde::Serialize;

use crate::time::JpTime;

/// Wall-clock date (Japan time) at which an era begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct EraStart {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

/// The eras known to the resolver, in chronological order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Era {
    /// 紀元前: before year 1.
    Kigenzen,
    /// 西暦: year 1 until Meiji 6.
    Seireki,
    Meiji,
    Taisho,
    Showa,
    Heisei,
}

struct EraEntry {
    era: Era,
    name: &'static str,
    initial: &'static str,
    start: Option<EraStart>,
}

const fn start(year: i32, month: u8, day: u8) -> Option<EraStart> {
    Some(EraStart { year, month, day })
}

/// Strictly increasing by start date after the first entry.
static ERAS: [EraEntry; 6] = [
    EraEntry {
        era: Era::Kigenzen,
        name: "紀元前",
        initial: "B.C.",
        start: None,
    },
    EraEntry {
        era: Era::Seireki,
        name: "西暦",
        initial: "A.D.",
        start: start(1, 1, 1),
    },
    EraEntry {
        era: Era::Meiji,
        name: "明治",
        initial: "M",
        start: start(1873, 1, 1),
    },
    EraEntry {
        era: Era::Taisho,
        name: "大正",
        initial: "T",
        start: start(1912, 7, 30),
    },
    EraEntry {
        era: Era::Showa,
        name: "昭和",
        initial: "S",
        start: start(1926, 12, 25),
    },
    EraEntry {
        era: Era::Heisei,
        name: "平成",
        initial: "H",
        start: start(1989, 1, 8),
    },
];

/// Years of the lunar calendar counted in Meiji before the switch to the
/// Gregorian calendar on Meiji 6-01-01.
const MEIJI_LUNAR_YEARS: i32 = 5;

impl Era {
    pub const ALL: [Era; 6] = [
        Era::Kigenzen,
        Era::Seireki,
        Era::Meiji,
        Era::Taisho,
        Era::Showa,
        Era::Heisei,
    ];

    fn entry(self) -> &'static EraEntry {
        &ERAS[self as usize]
    }

    /// Display name (`平成`).
    pub fn name(self) -> &'static str {
        self.entry().name
    }

    /// Short code (`H`); the pseudo-eras use `B.C.` and `A.D.`.
    pub fn initial(self) -> &'static str {
        self.entry().initial
    }

    /// First day of the era, or `None` for an era with no lower bound.
    pub fn start(self) -> Option<EraStart> {
        self.entry().start
    }

    /// Whether the short code is a single character, i.e. a real Japanese
    /// era rather than one of the pseudo-eras.
    pub fn has_single_initial(self) -> bool {
        self.initial().chars().count() == 1
    }
}

/// The result of resolving a date to its era.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Wareki {
    /// `None` only in the unreachable no-match state.
    pub era: Option<Era>,
    pub name: &'static str,
    pub initial: &'static str,
    /// Year within the era, counted from 1. For 紀元前 it is the number of
    /// years before year 1.
    pub year: i32,
}

impl Wareki {
    /// Whether the era code is a single character (see [`Era::has_single_initial`]).
    pub fn has_single_initial(&self) -> bool {
        self.era.is_some_and(Era::has_single_initial)
    }
}

impl JpTime {
    /// Resolve the era and in-era year of this date.
    ///
    /// Era starts are inclusive and the next era's start is exclusive.
    ///
    /// # Examples
    ///
    /// ```
    /// use jptime::JpTime;
    ///
    /// let w = JpTime::parse("1989-01-07").unwrap().wareki();
    /// assert_eq!((w.name, w.initial, w.year), ("昭和", "S", 64));
    /// let w = JpTime::parse("1989-01-08").unwrap().wareki();
    /// assert_eq!((w.name, w.initial, w.year), ("平成", "H", 1));
    /// ```
    pub fn wareki(&self) -> Wareki {
        let date = EraStart {
            year: self.year(),
            month: self.month(),
            day: self.day(),
        };
        let last = ERAS.len() - 1;

        for (i, entry) in ERAS.iter().enumerate() {
            let after_start = entry.start.is_none_or(|start| date >= start);
            let before_next = i == last || ERAS[i + 1].start.is_some_and(|next| date < next);
            if !(after_start && before_next) {
                continue;
            }

            let year = match (entry.era, entry.start) {
                (Era::Kigenzen, _) | (_, None) => 1 - date.year,
                (Era::Meiji, Some(start)) => date.year - start.year + MEIJI_LUNAR_YEARS + 1,
                (_, Some(start)) => date.year - start.year + 1,
            };
            return Wareki {
                era: Some(entry.era),
                name: entry.name,
                initial: entry.initial,
                year,
            };
        }

        Wareki {
            era: None,
            name: "",
            initial: "",
            year: 0,
        }
    }
}
