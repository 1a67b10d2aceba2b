//! Transliteration between ASCII, Persian (U+06F0..) and Arabic-Indic (U+0660..) digits.
//!
//! Everything that is not a digit of the source script passes through untouched.

const EN_ZERO: u32 = '0' as u32;
const FA_ZERO: u32 = '۰' as u32;
const AR_ZERO: u32 = '٠' as u32;

fn shift(c: char, from: u32, to: u32) -> char {
    let code = c as u32;
    if (from..from + 10).contains(&code) {
        char::from_u32(code - from + to).unwrap_or(c)
    } else {
        c
    }
}

fn map(s: &str, from: u32, to: u32) -> String {
    s.chars().map(|c| shift(c, from, to)).collect()
}

/// Replace ASCII digits with Persian digits.
pub fn en_to_fa(s: &str) -> String {
    map(s, EN_ZERO, FA_ZERO)
}

/// Replace Persian digits with ASCII digits.
pub fn fa_to_en(s: &str) -> String {
    map(s, FA_ZERO, EN_ZERO)
}

/// Replace Arabic-Indic digits with Persian digits.
pub fn ar_to_fa(s: &str) -> String {
    map(s, AR_ZERO, FA_ZERO)
}

/// Replace Persian digits with Arabic-Indic digits.
pub fn fa_to_ar(s: &str) -> String {
    map(s, FA_ZERO, AR_ZERO)
}

/// Replace both Persian and Arabic-Indic digits with ASCII digits.
pub fn to_ascii(s: &str) -> String {
    s.chars()
        .map(|c| shift(shift(c, FA_ZERO, EN_ZERO), AR_ZERO, EN_ZERO))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_en_to_fa() {
        assert_eq!(en_to_fa("0123456789"), "۰۱۲۳۴۵۶۷۸۹");
        assert_eq!(en_to_fa("1398-10-05 abc"), "۱۳۹۸-۱۰-۰۵ abc");
        assert_eq!(en_to_fa(""), "");
    }

    #[test]
    fn test_fa_to_en() {
        assert_eq!(fa_to_en("۰۱۲۳۴۵۶۷۸۹"), "0123456789");
        assert_eq!(fa_to_en("۱۳۹۷-۱۲-۰۹"), "1397-12-09");
    }

    #[test]
    fn test_arabic() {
        assert_eq!(ar_to_fa("٠١٢٣٤٥٦٧٨٩"), "۰۱۲۳۴۵۶۷۸۹");
        assert_eq!(fa_to_ar("۰۱۲۳۴۵۶۷۸۹"), "٠١٢٣٤٥٦٧٨٩");
    }

    #[test]
    fn test_to_ascii_mixed() {
        assert_eq!(to_ascii("۱۴٠٣/01"), "1403/01");
    }

    #[test]
    fn test_non_digits_pass_through() {
        assert_eq!(en_to_fa("Farvardin"), "Farvardin");
        assert_eq!(fa_to_en("خرداد"), "خرداد");
    }
}
