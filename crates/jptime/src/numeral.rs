//! Kanji numeral formatting.
//!
//! Two conventions are supported:
//!
//! - **Positional** (記数法): every decimal digit maps to its own glyph, so
//!   2016 → `二〇一六`. Used for calendar years.
//! - **Natural** (命数法, *meisuu*): digits are read with unit glyphs
//!   (十, 百, 千, 万), so 2016 → `二千十六`. Used for months, days and times.
//!
//! Out-of-domain input yields an empty string rather than an error.

/// Digit glyphs, indexed by value.
const KANJI_DIGITS: [char; 10] = ['〇', '一', '二', '三', '四', '五', '六', '七', '八', '九'];

/// Unit glyphs, indexed by decimal position (ones through ten-thousands).
const KANJI_UNITS: [char; 5] = ['一', '十', '百', '千', '万'];

/// Upper bound (exclusive) of [`fmt_int_kanji_meisuu`].
pub const MEISUU_LIMIT: i64 = 100_000;

/// Render `n` with ASCII digits. Non-positive input renders as `""`.
///
/// ```
/// assert_eq!(jptime::fmt_int(2016), "2016");
/// assert_eq!(jptime::fmt_int(0), "");
/// ```
pub fn fmt_int(n: i64) -> String {
    positional(n, |d| char::from(b'0' + d))
}

/// Render `n` with positional kanji digits. Non-positive input renders as `""`.
///
/// ```
/// assert_eq!(jptime::fmt_int_kanji(2016), "二〇一六");
/// ```
pub fn fmt_int_kanji(n: i64) -> String {
    positional(n, |d| KANJI_DIGITS[d as usize])
}

/// Render `n` in natural (meisuu) kanji, for `n` in `[0, 99999]`.
///
/// A leading 一 is omitted before any unit glyph (10 → `十`, 100 → `百`).
/// Anything outside the range renders as `""`.
///
/// ```
/// assert_eq!(jptime::fmt_int_kanji_meisuu(99), "九十九");
/// assert_eq!(jptime::fmt_int_kanji_meisuu(100_000), "");
/// ```
pub fn fmt_int_kanji_meisuu(n: i64) -> String {
    if !(0..MEISUU_LIMIT).contains(&n) {
        return String::new();
    }
    if n == 0 {
        return "零".to_string();
    }

    // Built least-significant first, reversed at the end.
    let mut glyphs = Vec::with_capacity(10);
    let mut rest = n;
    let mut position = 0;
    while rest > 0 {
        let digit = (rest % 10) as usize;
        if digit > 0 {
            if position > 0 {
                glyphs.push(KANJI_UNITS[position]);
            }
            if position == 0 || digit > 1 {
                glyphs.push(KANJI_DIGITS[digit]);
            }
        }
        rest /= 10;
        position += 1;
    }
    glyphs.iter().rev().collect()
}

fn positional(n: i64, glyph: impl Fn(u8) -> char) -> String {
    if n <= 0 {
        return String::new();
    }
    let mut glyphs = Vec::with_capacity(20);
    let mut rest = n;
    while rest > 0 {
        glyphs.push(glyph((rest % 10) as u8));
        rest /= 10;
    }
    glyphs.iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_int() {
        assert_eq!(fmt_int(1), "1");
        assert_eq!(fmt_int(10), "10");
        assert_eq!(fmt_int(2000), "2000");
        assert_eq!(fmt_int(2016), "2016");
    }

    #[test]
    fn test_fmt_int_non_positive_is_empty() {
        assert_eq!(fmt_int(0), "");
        assert_eq!(fmt_int(-5), "");
        assert_eq!(fmt_int_kanji(0), "");
        assert_eq!(fmt_int_kanji(-2016), "");
    }

    #[test]
    fn test_fmt_int_kanji() {
        assert_eq!(fmt_int_kanji(1), "一");
        assert_eq!(fmt_int_kanji(10), "一〇");
        assert_eq!(fmt_int_kanji(2000), "二〇〇〇");
        assert_eq!(fmt_int_kanji(2016), "二〇一六");
    }

    #[test]
    fn test_meisuu_small_values() {
        assert_eq!(fmt_int_kanji_meisuu(0), "零");
        assert_eq!(fmt_int_kanji_meisuu(1), "一");
        assert_eq!(fmt_int_kanji_meisuu(10), "十");
        assert_eq!(fmt_int_kanji_meisuu(11), "十一");
        assert_eq!(fmt_int_kanji_meisuu(20), "二十");
        assert_eq!(fmt_int_kanji_meisuu(99), "九十九");
    }

    #[test]
    fn test_meisuu_omits_leading_one_before_units() {
        assert_eq!(fmt_int_kanji_meisuu(100), "百");
        assert_eq!(fmt_int_kanji_meisuu(1000), "千");
        assert_eq!(fmt_int_kanji_meisuu(10000), "万");
        assert_eq!(fmt_int_kanji_meisuu(11111), "万千百十一");
    }

    #[test]
    fn test_meisuu_skips_zero_digits() {
        assert_eq!(fmt_int_kanji_meisuu(2016), "二千十六");
        assert_eq!(fmt_int_kanji_meisuu(10001), "万一");
        assert_eq!(fmt_int_kanji_meisuu(30500), "三万五百");
    }

    #[test]
    fn test_meisuu_upper_bound() {
        assert_eq!(fmt_int_kanji_meisuu(99999), "九万九千九百九十九");
        assert_eq!(fmt_int_kanji_meisuu(100_000), "");
        assert_eq!(fmt_int_kanji_meisuu(-1), "");
    }
}
