//! Names of months, weekdays and day periods in English transliteration and Persian.

use core::{fmt, str::FromStr};

use crate::Error;

/// Presentation language of a date.
///
/// The locale only changes how a date is written; it takes no part in equality, ordering or
/// hashing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// Latin transliteration and ASCII digits.
    #[default]
    En,
    /// Persian script and Persian digits.
    Fa,
}

const MONTH_NAMES_EN: [&str; 12] = [
    "Farvardin",
    "Ordibehesht",
    "Khordad",
    "Tir",
    "Mordad",
    "Shahrivar",
    "Mehr",
    "Aban",
    "Azar",
    "Dey",
    "Bahman",
    "Esfand",
];

const MONTH_NAMES_ABBR_EN: [&str; 12] = [
    "Far", "Ord", "Kho", "Tir", "Mor", "Sha", "Meh", "Aba", "Aza", "Dey", "Bah", "Esf",
];

const MONTH_NAMES_FA: [&str; 12] = [
    "فروردین",
    "اردیبهشت",
    "خرداد",
    "تیر",
    "مرداد",
    "شهریور",
    "مهر",
    "آبان",
    "آذر",
    "دی",
    "بهمن",
    "اسفند",
];

const MONTH_NAMES_ABBR_FA: [&str; 12] = [
    "فرو", "ارد", "خرد", "تیر", "مرد", "شهر", "مهر", "آبا", "آذر", "دی", "بهم", "اسف",
];

const WEEKDAY_NAMES_EN: [&str; 7] = [
    "Shanbeh",
    "Yekshanbeh",
    "Doshanbeh",
    "Seshanbeh",
    "Chaharshanbeh",
    "Panjshanbeh",
    "Jomeh",
];

const WEEKDAY_NAMES_ABBR_EN: [&str; 7] = ["Sha", "Yek", "Dos", "Ses", "Cha", "Pan", "Jom"];

const WEEKDAY_NAMES_FA: [&str; 7] = [
    "شنبه",
    "یکشنبه",
    "دوشنبه",
    "سه\u{200c}شنبه",
    "چهارشنبه",
    "پنجشنبه",
    "جمعه",
];

const WEEKDAY_NAMES_ABBR_FA: [&str; 7] = ["ش", "ی", "د", "س", "چ", "پ", "ج"];

const PERIODS_EN: [&str; 2] = ["AM", "PM"];

const PERIODS_FA: [&str; 2] = ["ق.ظ", "ب.ظ"];

impl Locale {
    /// The tag this locale parses from.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fa => "fa",
        }
    }

    /// Full month names, Farvardin first.
    pub const fn month_names(&self) -> &'static [&'static str; 12] {
        match self {
            Self::En => &MONTH_NAMES_EN,
            Self::Fa => &MONTH_NAMES_FA,
        }
    }

    /// Abbreviated month names, Farvardin first.
    pub const fn month_abbrs(&self) -> &'static [&'static str; 12] {
        match self {
            Self::En => &MONTH_NAMES_ABBR_EN,
            Self::Fa => &MONTH_NAMES_ABBR_FA,
        }
    }

    /// Full weekday names, Shanbeh (Saturday) first.
    pub const fn weekday_names(&self) -> &'static [&'static str; 7] {
        match self {
            Self::En => &WEEKDAY_NAMES_EN,
            Self::Fa => &WEEKDAY_NAMES_FA,
        }
    }

    /// Abbreviated weekday names, Shanbeh (Saturday) first.
    pub const fn weekday_abbrs(&self) -> &'static [&'static str; 7] {
        match self {
            Self::En => &WEEKDAY_NAMES_ABBR_EN,
            Self::Fa => &WEEKDAY_NAMES_ABBR_FA,
        }
    }

    /// Before-noon and after-noon markers.
    pub const fn periods(&self) -> &'static [&'static str; 2] {
        match self {
            Self::En => &PERIODS_EN,
            Self::Fa => &PERIODS_FA,
        }
    }

    /// Name of `month` (1..=12).
    ///
    /// # Panics
    ///
    /// On a month outside 1..=12; dates never hold one.
    pub fn month_name(&self, month: u8) -> &'static str {
        self.month_names()[usize::from(month) - 1]
    }

    /// Abbreviated name of `month` (1..=12).
    ///
    /// # Panics
    ///
    /// On a month outside 1..=12.
    pub fn month_abbr(&self, month: u8) -> &'static str {
        self.month_abbrs()[usize::from(month) - 1]
    }

    /// Name of `weekday` (0 is Shanbeh).
    ///
    /// # Panics
    ///
    /// On a weekday outside 0..=6.
    pub fn weekday_name(&self, weekday: u8) -> &'static str {
        self.weekday_names()[usize::from(weekday)]
    }

    /// Abbreviated name of `weekday` (0 is Shanbeh).
    ///
    /// # Panics
    ///
    /// On a weekday outside 0..=6.
    pub fn weekday_abbr(&self, weekday: u8) -> &'static str {
        self.weekday_abbrs()[usize::from(weekday)]
    }

    /// Marker for `hour` (0..=23).
    pub fn period(&self, hour: u8) -> &'static str {
        self.periods()[usize::from(hour >= 12)]
    }

    /// Write `s` in this locale's digits.
    pub fn localize_digits(&self, s: String) -> String {
        match self {
            Self::En => s,
            Self::Fa => crate::digits::en_to_fa(&s),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Self::En),
            "fa" => Ok(Self::Fa),
            _ => Err(Error::InvalidLocale {
                locale: s.to_owned(),
            }),
        }
    }
}
