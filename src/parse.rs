//! Reading dates from text: ISO 8601 and `strptime`.
//!
//! Parsers only split text into components. Range checks are left to the constructors of
//! [`JalaliDate`](crate::JalaliDate) and [`JalaliDateTime`](crate::JalaliDateTime), so a string
//! like `1400-12-30` reaches the date validation and fails there.

use chrono::FixedOffset;

use crate::{Dom, Error, Locale, Month, Result, Year, digits, tz::fixed_offset};

/// Components read from an ISO datetime string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DateTimeParts {
    pub year: Year,
    pub month: Month,
    pub day: Dom,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub microsecond: u32,
    pub offset: Option<FixedOffset>,
}

fn ascii_number(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// `YYYY-MM-DD`, with ASCII, Persian or Arabic-Indic digits.
pub(crate) fn iso_date(input: &str) -> Result<(Year, Month, Dom)> {
    let s = digits::to_ascii(input);
    split_iso_date(&s).ok_or_else(|| Error::parse(input, "expected YYYY-MM-DD"))
}

fn split_iso_date(s: &str) -> Option<(Year, Month, Dom)> {
    if s.len() != 10 || s.as_bytes()[4] != b'-' || s.as_bytes()[7] != b'-' {
        return None;
    }
    let year = ascii_number(s.get(0..4)?)?;
    let month = ascii_number(s.get(5..7)?)?;
    let day = ascii_number(s.get(8..10)?)?;
    Some((year as Year, month as Month, day as Dom))
}

/// `HH[:MM[:SS[.ffffff]]]` or the same without colons; fractions of 1 to 6 digits scale to
/// microseconds and longer ones are truncated.
fn hh_mm_ss_ff(s: &str) -> Option<(u8, u8, u8, u32)> {
    let b = s.as_bytes();
    let mut comps = [0u8; 3];
    let mut pos = 0;
    let mut has_sep = false;
    for (i, comp) in comps.iter_mut().enumerate() {
        *comp = ascii_number(s.get(pos..pos + 2)?)? as u8;
        pos += 2;
        if i == 0 {
            has_sep = b.get(pos) == Some(&b':');
        }
        if pos >= b.len() || i == 2 {
            break;
        }
        if has_sep {
            if b[pos] != b':' {
                return None;
            }
            pos += 1;
        }
    }

    let mut microsecond = 0;
    if pos < b.len() {
        if b[pos] != b'.' && b[pos] != b',' {
            return None;
        }
        let frac = &s[pos + 1..];
        if frac.is_empty() || !frac.bytes().all(|c| c.is_ascii_digit()) {
            return None;
        }
        let kept = &frac[..frac.len().min(6)];
        microsecond = ascii_number(kept)? * 10u32.pow(6 - kept.len() as u32);
    }
    Some((comps[0], comps[1], comps[2], microsecond))
}

/// `YYYY-MM-DD[*HH[:MM[:SS[.ffffff]]][Z|±HH[:MM[:SS[.ffffff]]]]]` where `*` is any single
/// character.
pub(crate) fn iso_datetime(input: &str) -> Result<DateTimeParts> {
    let s = digits::to_ascii(input);
    split_iso_datetime(&s).ok_or_else(|| Error::parse(input, "not an ISO 8601 datetime"))?
}

fn split_iso_datetime(s: &str) -> Option<Result<DateTimeParts>> {
    let (year, month, day) = split_iso_date(s.get(0..10)?)?;
    let mut parts = DateTimeParts {
        year,
        month,
        day,
        hour: 0,
        minute: 0,
        second: 0,
        microsecond: 0,
        offset: None,
    };
    let mut rest = s[10..].chars();
    if rest.next().is_none() {
        return Some(Ok(parts));
    }
    let time = rest.as_str();
    if time.len() < 2 {
        return None;
    }

    let (clock, zone) = match time.find(['+', '-', 'Z']) {
        Some(at) => (&time[..at], Some(&time[at..])),
        None => (time, None),
    };
    (parts.hour, parts.minute, parts.second, parts.microsecond) = hh_mm_ss_ff(clock)?;

    if let Some(zone) = zone {
        parts.offset = Some(if zone == "Z" {
            FixedOffset::east_opt(0)?
        } else {
            let (sign, body) = zone.split_at(1);
            if sign == "Z" || matches!(body.len(), 0 | 1 | 3) {
                return None;
            }
            let (h, m, sec, us) = hh_mm_ss_ff(body)?;
            if us != 0 {
                return None;
            }
            let seconds = i32::from(h) * 3600 + i32::from(m) * 60 + i32::from(sec);
            match fixed_offset(if sign == "-" { -seconds } else { seconds }) {
                Ok(offset) => offset,
                Err(err) => return Some(Err(err)),
            }
        });
    }
    Some(Ok(parts))
}

/// Components collected while matching a `strptime` format.
#[derive(Debug, Clone, Copy, Default)]
struct Captured {
    year: Option<u32>,
    month: Option<u32>,
    month_name: Option<u32>,
    day: Option<u32>,
    hour: Option<u32>,
    hour12: Option<u32>,
    pm: Option<bool>,
    minute: Option<u32>,
    second: Option<u32>,
    microsecond: Option<u32>,
    offset: Option<FixedOffset>,
    utc: bool,
}

/// Result of `strptime`, before validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct StrptimeParts {
    pub parts: DateTimeParts,
    /// `%Z` named UTC and no `%z` was given.
    pub utc: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Literal(char),
    Directive(char),
}

/// Expansion of a composite directive; the date-only `%c` has no time part.
fn composite(directive: char, with_time: bool) -> Option<&'static str> {
    match directive {
        'c' if with_time => Some("%A %d %B %Y %H:%M:%S"),
        'c' => Some("%a %b %d %Y"),
        'x' => Some("%Y/%m/%d"),
        'X' => Some("%H:%M:%S"),
        _ => None,
    }
}

fn tokenize(fmt: &str, with_time: bool) -> Vec<Token> {
    let mut tokens = Vec::with_capacity(fmt.len());
    let mut chars = fmt.chars();
    while let Some(c) = chars.next() {
        match (c, chars.clone().next()) {
            ('%', Some('%')) => {
                chars.next();
                tokens.push(Token::Literal('%'));
            }
            ('%', Some(d)) => {
                chars.next();
                match composite(d, with_time) {
                    Some(expansion) => tokens.extend(tokenize(expansion, with_time)),
                    None => tokens.push(Token::Directive(d)),
                }
            }
            _ => tokens.push(Token::Literal(c)),
        }
    }
    tokens
}

/// Two-digit year: above 70 is in the 1300s, the rest in the 1400s.
const fn pivot_year(yy: u32) -> u32 {
    if yy > 70 { 1300 + yy } else { 1400 + yy }
}

/// Two-digit value in `min..=max`, or a single digit in `min..=9`, the longer one first.
fn numeric(s: &str, min: u32, max: u32) -> Vec<(u32, usize)> {
    let mut out = Vec::with_capacity(2);
    for len in [2, 1] {
        match s.get(..len).and_then(ascii_number) {
            Some(v) if (min..=max).contains(&v) => out.push((v, len)),
            _ => {}
        }
    }
    out
}

/// Names matching the start of `s`, ignoring ASCII case, longest first.
fn names(s: &str, table: &[&str]) -> Vec<(u32, usize)> {
    let mut out: Vec<(u32, usize)> = table
        .iter()
        .enumerate()
        .filter(|(_, name)| {
            s.get(..name.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(name))
        })
        .map(|(i, name)| (i as u32, name.len()))
        .collect();
    out.sort_by(|a, b| b.1.cmp(&a.1));
    out
}

/// `±HHMM` or `±HH:MM`, optionally followed by seconds in the same style.
fn utc_offset(s: &str) -> Option<(FixedOffset, usize)> {
    let b = s.as_bytes();
    let sign = match b.first()? {
        b'+' => 1,
        b'-' => -1,
        _ => return None,
    };
    let hours = ascii_number(s.get(1..3)?)?;
    let colon = b.get(3) == Some(&b':');
    let at = if colon { 4 } else { 3 };
    let minutes = ascii_number(s.get(at..at + 2)?)?;
    let mut len = at + 2;
    let mut seconds = 0;
    let sec_at = if colon { len + 1 } else { len };
    if !colon || b.get(len) == Some(&b':') {
        if let Some(v) = s.get(sec_at..sec_at + 2).and_then(ascii_number) {
            seconds = v;
            len = sec_at + 2;
        }
    }
    if hours > 23 || minutes > 59 || seconds > 59 {
        return None;
    }
    let total = (hours * 3600 + minutes * 60 + seconds) as i32;
    Some((FixedOffset::east_opt(sign * total)?, len))
}

fn match_tokens(tokens: &[Token], s: &str, cap: Captured, locale: Locale) -> Option<Captured> {
    let Some((&token, rest)) = tokens.split_first() else {
        return s.is_empty().then_some(cap);
    };

    let directive = match token {
        Token::Literal(c) => {
            let mut chars = s.chars();
            let next = chars.next()?;
            if next == c || next.eq_ignore_ascii_case(&c) {
                return match_tokens(rest, chars.as_str(), cap, locale);
            }
            return None;
        }
        Token::Directive(d) => d,
    };

    let candidates: Vec<(u32, usize)> = match directive {
        'Y' => s
            .get(..4)
            .and_then(ascii_number)
            .map(|v| vec![(v, 4)])
            .unwrap_or_default(),
        'y' => s
            .get(..2)
            .and_then(ascii_number)
            .map(|yy| vec![(pivot_year(yy), 2)])
            .unwrap_or_default(),
        'm' => numeric(s, 1, 12),
        'd' => {
            let mut out = numeric(s, 1, 31);
            let padded = s.strip_prefix(' ').and_then(|t| t.get(..1));
            if let Some(v) = padded.and_then(ascii_number).filter(|&v| v > 0) {
                out.push((v, 2));
            }
            out
        }
        'H' => numeric(s, 0, 23),
        'I' => numeric(s, 1, 12),
        'M' => numeric(s, 0, 59),
        'S' => numeric(s, 0, 61),
        'f' => (1..=6)
            .rev()
            .filter_map(|len| {
                let v = s.get(..len).and_then(ascii_number)?;
                Some((v * 10u32.pow(6 - len as u32), len))
            })
            .collect(),
        'a' => names(s, locale.weekday_abbrs()),
        'A' => names(s, locale.weekday_names()),
        'b' => names(s, locale.month_abbrs()),
        'B' => names(s, locale.month_names()),
        'p' => names(s, locale.periods()),
        'z' => {
            let (offset, len) = utc_offset(s)?;
            let mut next = cap;
            next.offset = Some(offset);
            return match_tokens(rest, &s[len..], next, locale);
        }
        'Z' => names(s, &["UTC", "GMT"]),
        _ => return None,
    };

    candidates.into_iter().find_map(|(value, len)| {
        let mut next = cap;
        match directive {
            'Y' | 'y' => next.year = Some(value),
            'm' => next.month = Some(value),
            'd' => next.day = Some(value),
            'H' => next.hour = Some(value),
            'I' => next.hour12 = Some(value),
            'M' => next.minute = Some(value),
            'S' => next.second = Some(value),
            'f' => next.microsecond = Some(value),
            'b' | 'B' => next.month_name = Some(value + 1),
            'p' => next.pm = Some(value == 1),
            'Z' => next.utc = true,
            _ => {}
        }
        match_tokens(rest, s.get(len..)?, next, locale)
    })
}

/// Read `data` according to `fmt`.
///
/// See [`JalaliDateTime::strptime`](crate::JalaliDateTime::strptime).
pub(crate) fn strptime(data: &str, fmt: &str, locale: Locale) -> Result<StrptimeParts> {
    parse_format(data, fmt, locale, true)
}

/// Like [`strptime`], with `%c` read as `%a %b %d %Y`.
pub(crate) fn strptime_date(data: &str, fmt: &str, locale: Locale) -> Result<StrptimeParts> {
    parse_format(data, fmt, locale, false)
}

#[tracing::instrument(level = "trace", skip(locale))]
fn parse_format(data: &str, fmt: &str, locale: Locale, with_time: bool) -> Result<StrptimeParts> {
    let text = match locale {
        Locale::Fa => digits::to_ascii(data),
        Locale::En => data.to_owned(),
    };
    let tokens = tokenize(fmt, with_time);
    if let Some(Token::Directive(d)) = tokens
        .iter()
        .find(|t| matches!(t, Token::Directive(d) if !"YymdHIMSfaAbBpzZ".contains(*d)))
    {
        tracing::debug!(directive = %d, "unsupported strptime directive");
        return Err(Error::parse(data, "unsupported directive in format"));
    }

    let cap = match_tokens(&tokens, &text, Captured::default(), locale)
        .ok_or_else(|| Error::parse(data, "data string and format are not matched"))?;

    let hour = match (cap.pm, cap.hour12) {
        (Some(pm), Some(h)) => h % 12 + if pm { 12 } else { 0 },
        (Some(_), None) => {
            return Err(Error::parse(data, "%p requires %I"));
        }
        (None, Some(h)) => h,
        (None, None) => cap.hour.unwrap_or(0),
    };

    Ok(StrptimeParts {
        parts: DateTimeParts {
            year: cap.year.unwrap_or(1) as Year,
            month: cap.month.or(cap.month_name).unwrap_or(1) as Month,
            day: cap.day.unwrap_or(1) as Dom,
            hour: hour as u8,
            minute: cap.minute.unwrap_or(0) as u8,
            second: cap.second.unwrap_or(0) as u8,
            microsecond: cap.microsecond.unwrap_or(0),
            offset: cap.offset,
        },
        utc: cap.utc && cap.offset.is_none(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offset(seconds: i32) -> Option<FixedOffset> {
        FixedOffset::east_opt(seconds)
    }

    fn clock(p: &StrptimeParts) -> (Year, Month, Dom, u8, u8, u8) {
        let p = p.parts;
        (p.year, p.month, p.day, p.hour, p.minute, p.second)
    }

    #[test]
    fn test_iso_date() {
        assert_eq!(iso_date("1397-12-09"), Ok((1397, 12, 9)));
        assert_eq!(iso_date("۱۳۹۷-۱۲-۰۹"), Ok((1397, 12, 9)));
        assert!(iso_date("1397/12/09").is_err());
        assert!(iso_date("1397-12-9").is_err());
        assert!(iso_date("13971209").is_err());
        assert!(iso_date("1397-1a-09").is_err());
        assert!(iso_date("").is_err());
    }

    #[test]
    fn test_iso_datetime_forms() {
        let p = iso_datetime("1367-02-14T04:30:00.000001+00:00").unwrap();
        assert_eq!(
            (p.year, p.month, p.day, p.hour, p.minute, p.second, p.microsecond),
            (1367, 2, 14, 4, 30, 0, 1)
        );
        assert_eq!(p.offset, offset(0));

        let p = iso_datetime("1398-10-05 12:30").unwrap();
        assert_eq!((p.hour, p.minute, p.second, p.offset), (12, 30, 0, None));

        let p = iso_datetime("1403-04-10T16:15:00-04:45").unwrap();
        assert_eq!(p.offset, offset(-(4 * 3600 + 45 * 60)));

        let p = iso_datetime("1403-04-10T161500Z").unwrap();
        assert_eq!((p.hour, p.minute, p.offset), (16, 15, offset(0)));

        let p = iso_datetime("1403-04-10T16:15:00.5").unwrap();
        assert_eq!(p.microsecond, 500_000);

        let p = iso_datetime("1403-04-10").unwrap();
        assert_eq!((p.hour, p.offset), (0, None));
    }

    #[test]
    fn test_iso_datetime_rejects() {
        assert!(iso_datetime("1403-04-10T1").is_err());
        assert!(iso_datetime("1403-04-10T16:15:00+4").is_err());
        assert!(iso_datetime("1403-04-10T16:15:00.").is_err());
        assert!(iso_datetime("1403-04-10T16:15:00x").is_err());
        assert!(iso_datetime("1403-04").is_err());
        assert!(matches!(
            iso_datetime("1403-04-10T16:15:00+24:00"),
            Err(Error::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_strptime_basic() {
        let p = strptime("1400-01-01 12:30:45", "%Y-%m-%d %H:%M:%S", Locale::En).unwrap();
        assert_eq!(clock(&p), (1400, 1, 1, 12, 30, 45));
        assert!(!p.utc);
    }

    #[test]
    fn test_strptime_short_fields() {
        let p = strptime("1374/4/8 13:45:10", "%x %X", Locale::En).unwrap();
        assert_eq!((p.parts.month, p.parts.day, p.parts.hour), (4, 8, 13));
    }

    #[test]
    fn test_strptime_period() {
        let p = strptime("1400-06-23 01:04:01 am", "%Y-%m-%d %I:%M:%S %p", Locale::En).unwrap();
        assert_eq!(p.parts.hour, 1);
        let p = strptime("1400-06-23 12:04 AM", "%Y-%m-%d %I:%M %p", Locale::En).unwrap();
        assert_eq!(p.parts.hour, 0);
        let p = strptime("1400-06-23 12:04 PM", "%Y-%m-%d %I:%M %p", Locale::En).unwrap();
        assert_eq!(p.parts.hour, 12);
        assert!(strptime("1400-06-23 PM", "%Y-%m-%d %p", Locale::En).is_err());
    }

    #[test]
    fn test_strptime_fraction_is_scaled() {
        let p = strptime("02:00:10.000553 PM", "%I:%M:%S.%f %p", Locale::En).unwrap();
        assert_eq!((p.parts.hour, p.parts.microsecond), (14, 553));
        let p = strptime("10.5", "%S.%f", Locale::En).unwrap();
        assert_eq!(p.parts.microsecond, 500_000);
    }

    #[test]
    fn test_strptime_fa() {
        let p = strptime(
            "1 اسفند 1379 11:16 ب.ظ 37",
            "%d %B %Y %I:%M %p %S",
            Locale::Fa,
        )
        .unwrap();
        assert_eq!(clock(&p), (1379, 12, 1, 23, 16, 37));

        let p = strptime("چهارشنبه ۱۴ اردیبهشت ۱۳۶۷ ۱۰:۱۰:۱۰", "%c", Locale::Fa).unwrap();
        assert_eq!(
            (p.parts.year, p.parts.month, p.parts.day, p.parts.hour),
            (1367, 2, 14, 10)
        );
    }

    #[test]
    fn test_strptime_backtracks() {
        // "%m" first takes "11", which leaves an invalid day "0"
        let p = strptime("1400110", "%Y%m%d", Locale::En).unwrap();
        assert_eq!((p.parts.month, p.parts.day), (1, 10));
        let p = strptime("1400111", "%Y%m%d", Locale::En).unwrap();
        assert_eq!((p.parts.month, p.parts.day), (11, 1));
        let p = strptime("140019", "%Y%m%d", Locale::En).unwrap();
        assert_eq!((p.parts.month, p.parts.day), (1, 9));
    }

    #[test]
    fn test_hh_mm_ss_ff() {
        assert_eq!(hh_mm_ss_ff("12"), Some((12, 0, 0, 0)));
        assert_eq!(hh_mm_ss_ff("12:30"), Some((12, 30, 0, 0)));
        assert_eq!(hh_mm_ss_ff("123015,25"), Some((12, 30, 15, 250_000)));
        assert_eq!(hh_mm_ss_ff("12:30:15.1234567"), Some((12, 30, 15, 123_456)));
        assert_eq!(hh_mm_ss_ff("12:30.5"), None);
        assert_eq!(hh_mm_ss_ff("1230:15"), None);
        assert_eq!(hh_mm_ss_ff("1"), None);
    }

    #[test]
    fn test_strptime_z_valid() {
        let fmt = "%Y-%m-%d %H:%M:%S %z";
        for (z, seconds) in [
            ("+0330", 12_600),
            ("-0500", -18_000),
            ("-0715", -26_100),
            ("+0000", 0),
            ("-0000", 0),
            ("+1400", 50_400),
            ("-1400", -50_400),
            ("+0059", 3_540),
            ("+05:45", 20_700),
        ] {
            let p = strptime(&format!("1400-01-01 10:00:00 {z}"), fmt, Locale::En)
                .unwrap_or_else(|e| panic!("{z}: {e}"));
            assert_eq!(p.parts.offset, offset(seconds), "{z}");
            assert_eq!(p.parts.hour, 10);
        }
    }

    #[test]
    fn test_strptime_z_invalid() {
        let fmt = "%Y-%m-%d %H:%M:%S %z";
        for z in [
            "0330", "+330", "+033", "+03:3", "+03-30", "03:30", "+03:300", "+030:30", "+0A30",
            "+03B0", "+2500", "+2400", "-2400", "+0360", "-0360", "+03:60", " +0330", "+0330 ",
            "GMT+0330", "+", "+03",
        ] {
            assert!(
                strptime(&format!("1400-01-01 10:00:00 {z}"), fmt, Locale::En).is_err(),
                "{z:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_strptime_z_name() {
        let p = strptime("1374-04-08 UTC", "%Y-%m-%d %Z", Locale::En).unwrap();
        assert!(p.utc);
        let p = strptime("1374-04-08 +0000 UTC", "%Y-%m-%d %z %Z", Locale::En).unwrap();
        assert!(!p.utc);
        assert_eq!(p.parts.offset, offset(0));
    }

    #[test]
    fn test_strptime_mismatch() {
        assert!(strptime("1400/01/01", "%Y-%m-%d", Locale::En).is_err());
        assert!(strptime("140/01/01", "%Y/%m/%d", Locale::En).is_err());
        assert!(matches!(
            strptime("1400-01-01", "%Y-%m-%e", Locale::En),
            Err(Error::Parse { .. })
        ));
    }

    #[test]
    fn test_strptime_two_digit_year() {
        for (data, year) in [
            ("99-01-01", 1399),
            ("71-01-01", 1371),
            ("70-10-10", 1470),
            ("00-01-01", 1400),
            ("04-01-01", 1404),
        ] {
            let p = strptime(data, "%y-%m-%d", Locale::En).unwrap();
            assert_eq!(p.parts.year, year, "{data}");
        }
        assert!(strptime("1-01-01", "%y-%m-%d", Locale::En).is_err());
        assert!(strptime("1399-01-01", "%y-%m-%d", Locale::En).is_err());
    }

    #[test]
    fn test_strptime_escaped_composite() {
        let p = strptime("1400 %c", "%Y %%c", Locale::En).unwrap();
        assert_eq!(p.parts.year, 1400);
        let p = strptime("%x 1374/4/8", "%%x %x", Locale::En).unwrap();
        assert_eq!((p.parts.year, p.parts.month, p.parts.day), (1374, 4, 8));
        assert!(strptime("1400 Sha Far 01 1380", "%Y %c", Locale::En).is_err());
    }

    #[test]
    fn test_strptime_date_composite() {
        let p = strptime_date("Sha Far 01 1380", "%c", Locale::En).unwrap();
        assert_eq!((p.parts.year, p.parts.month, p.parts.day), (1380, 1, 1));
        let p = strptime_date("ش فرو ۰۱ ۱۳۸۰", "%c", Locale::Fa).unwrap();
        assert_eq!((p.parts.year, p.parts.month, p.parts.day), (1380, 1, 1));
        assert!(strptime_date("Shanbeh 01 Farvardin 1380 00:00:00", "%c", Locale::En).is_err());
    }
}
