//! `strftime` for Jalali dates and datetimes.
//!
//! | Directive | Meaning |
//! |-----------|---------|
//! | `%a` `%A` | weekday name, abbreviated and full |
//! | `%w` | weekday number, 0 is Shanbeh |
//! | `%d` `%m` `%y` `%Y` | day, month, two and four digit year |
//! | `%b` `%B` | month name, abbreviated and full |
//! | `%j` | day of year, three digits |
//! | `%U` `%W` | week of year (weeks start on Shanbeh) |
//! | `%H` `%I` `%p` | 24-hour, 12-hour (`00` for a plain date), period marker |
//! | `%M` `%S` `%f` | minute, second, microsecond |
//! | `%z` `%Z` | UTC offset as `+HHMM`, zone name (empty when naive) |
//! | `%c` `%x` `%X` | locale date and time, `%y/%m/%d`, `%H:%M:%S` |
//! | `%%` | a literal `%` |
//!
//! Unknown directives are copied through. With [`Locale::Fa`] every ASCII digit of the result,
//! including literal ones from the format, is written in Persian.

use chrono::FixedOffset;

use crate::{JalaliDate, Locale, tz::format_offset};

/// Everything a directive can read.
pub(crate) struct Fields {
    pub date: JalaliDate,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub microsecond: u32,
    pub offset: Option<FixedOffset>,
    pub tz_name: Option<String>,
    /// `%c` includes the time only for datetimes.
    pub has_time: bool,
}

impl Fields {
    pub fn date(date: JalaliDate) -> Self {
        Self {
            date,
            hour: 0,
            minute: 0,
            second: 0,
            microsecond: 0,
            offset: None,
            tz_name: None,
            has_time: false,
        }
    }
}

pub(crate) fn strftime(fields: &Fields, fmt: &str, locale: Locale) -> String {
    let mut out = String::with_capacity(fmt.len() * 2);
    write_format(&mut out, fields, fmt, locale);
    locale.localize_digits(out)
}

fn write_format(out: &mut String, f: &Fields, fmt: &str, locale: Locale) {
    let date = &f.date;
    let mut chars = fmt.chars();
    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        let Some(directive) = chars.next() else {
            out.push('%');
            break;
        };
        match directive {
            'a' => out.push_str(locale.weekday_abbr(date.weekday())),
            'A' => out.push_str(locale.weekday_name(date.weekday())),
            'w' => out.push_str(&date.weekday().to_string()),
            'd' => out.push_str(&format!("{:02}", date.day())),
            'b' => out.push_str(locale.month_abbr(date.month())),
            'B' => out.push_str(locale.month_name(date.month())),
            'm' => out.push_str(&format!("{:02}", date.month())),
            'y' => out.push_str(&format!("{:02}", date.year() % 100)),
            'Y' => out.push_str(&format!("{:04}", date.year())),
            'j' => out.push_str(&format!("{:03}", date.day_of_year())),
            'U' | 'W' => out.push_str(&format!("{:02}", date.week_of_year())),
            'H' => out.push_str(&format!("{:02}", f.hour)),
            'I' if !f.has_time => out.push_str("00"),
            'I' => out.push_str(&format!("{:02}", hour12(f.hour))),
            'p' => out.push_str(locale.period(f.hour)),
            'M' => out.push_str(&format!("{:02}", f.minute)),
            'S' => out.push_str(&format!("{:02}", f.second)),
            'f' => out.push_str(&format!("{:06}", f.microsecond)),
            'z' => {
                if let Some(offset) = f.offset {
                    out.push_str(&format_offset(offset, false));
                }
            }
            'Z' => {
                if let Some(name) = &f.tz_name {
                    out.push_str(name);
                }
            }
            'X' => out.push_str(&format!("{:02}:{:02}:{:02}", f.hour, f.minute, f.second)),
            'x' => write_format(out, f, "%y/%m/%d", locale),
            'c' if f.has_time => write_format(out, f, "%A %d %B %Y %X", locale),
            'c' => write_format(out, f, "%A %d %B %Y", locale),
            '%' => out.push('%'),
            other => {
                out.push('%');
                out.push(other);
            }
        }
    }
}

/// Hour on a 12-hour clock, midnight and noon are 12.
pub(crate) const fn hour12(hour: u8) -> u8 {
    match hour % 12 {
        0 => 12,
        h => h,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(y: i32, m: u8, d: u8) -> Fields {
        Fields::date(JalaliDate::new(y, m, d).unwrap())
    }

    #[test]
    fn test_date_directives() {
        let f = fields(1395, 3, 1);
        assert_eq!(strftime(&f, "%d %b %B", Locale::En), "01 Kho Khordad");
        assert_eq!(strftime(&f, "%m %m %y %Y", Locale::En), "03 03 95 1395");
        assert_eq!(strftime(&f, "%p %j %j %U %W %%", Locale::En), "AM 063 063 10 10 %");
        assert_eq!(strftime(&f, "%c", Locale::En), "Shanbeh 01 Khordad 1395");
        assert_eq!(strftime(&f, "%x", Locale::En), "95/03/01");
        assert_eq!(strftime(&f, "%H %I %M %S %p", Locale::En), "00 00 00 00 AM");
        assert_eq!(strftime(&f, "%I", Locale::Fa), "۰۰");
    }

    #[test]
    fn test_date_directives_fa() {
        let f = fields(1395, 3, 1);
        assert_eq!(strftime(&f, "%d %b %B", Locale::Fa), "۰۱ خرد خرداد");
        assert_eq!(strftime(&f, "%c", Locale::Fa), "شنبه ۰۱ خرداد ۱۳۹۵");
        let f = fields(1367, 2, 14);
        assert_eq!(strftime(&f, "%a %A %w", Locale::En), "Cha Chaharshanbeh 4");
        assert_eq!(strftime(&f, "%a %A %w", Locale::Fa), "چ چهارشنبه ۴");
    }

    #[test]
    fn test_time_directives() {
        let f = Fields {
            hour: 14,
            second: 10,
            microsecond: 553,
            has_time: true,
            ..fields(1400, 1, 1)
        };
        assert_eq!(
            strftime(&f, "%I:%M:%S.%f %p", Locale::En),
            "02:00:10.000553 PM"
        );
        assert_eq!(strftime(&f, "%H:%M %X", Locale::En), "14:00 14:00:10");
        assert_eq!(strftime(&f, "%z%Z", Locale::En), "");
    }

    #[test]
    fn test_offset_directives() {
        let f = Fields {
            offset: FixedOffset::east_opt(12_600),
            tz_name: Some("+03:30".into()),
            has_time: true,
            ..fields(1400, 1, 1)
        };
        assert_eq!(strftime(&f, "%z %Z", Locale::En), "+0330 +03:30");
    }

    #[test]
    fn test_unknown_and_trailing() {
        let f = fields(1400, 1, 1);
        assert_eq!(strftime(&f, "%q %", Locale::En), "%q %");
        assert_eq!(strftime(&f, "no directives", Locale::En), "no directives");
    }

    #[test]
    fn test_hour12() {
        assert_eq!(hour12(0), 12);
        assert_eq!(hour12(1), 1);
        assert_eq!(hour12(12), 12);
        assert_eq!(hour12(23), 11);
    }
}
