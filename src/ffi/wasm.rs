//! JavaScript bindings through `wasm-bindgen`.

use wasm_bindgen::prelude::*;

use crate::{Error, GregorianDate, JalaliDate, Locale, leap, month};

fn js_error(err: Error) -> JsError {
    JsError::new(&err.to_string())
}

/// A Jalali date, exported to JavaScript as `JalaliDate`.
#[wasm_bindgen(js_name = JalaliDate)]
#[derive(Debug, Clone, Copy)]
pub struct JsJalaliDate(JalaliDate);

#[wasm_bindgen(js_class = JalaliDate)]
impl JsJalaliDate {
    #[wasm_bindgen(constructor)]
    pub fn new(year: i32, month: u8, day: u8) -> Result<JsJalaliDate, JsError> {
        JalaliDate::new(year, month, day).map(Self).map_err(js_error)
    }

    #[wasm_bindgen(js_name = fromGregorian)]
    pub fn from_gregorian(year: i32, month: u8, day: u8) -> Result<JsJalaliDate, JsError> {
        GregorianDate::new(year, month, day)
            .and_then(JalaliDate::from_gregorian)
            .map(Self)
            .map_err(js_error)
    }

    #[wasm_bindgen(js_name = fromOrdinal)]
    pub fn from_ordinal(n: i64) -> Result<JsJalaliDate, JsError> {
        JalaliDate::from_ordinal(n).map(Self).map_err(js_error)
    }

    #[wasm_bindgen(getter)]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    #[wasm_bindgen(getter)]
    pub fn month(&self) -> u8 {
        self.0.month()
    }

    #[wasm_bindgen(getter)]
    pub fn day(&self) -> u8 {
        self.0.day()
    }

    /// Gregorian date as `YYYY-MM-DD`, readable by `new Date(...)`.
    #[wasm_bindgen(js_name = toGregorian)]
    pub fn to_gregorian(&self) -> String {
        self.0.to_gregorian().to_string()
    }

    #[wasm_bindgen(js_name = toOrdinal)]
    pub fn to_ordinal(&self) -> i64 {
        self.0.to_ordinal()
    }

    pub fn weekday(&self) -> u8 {
        self.0.weekday()
    }

    #[wasm_bindgen(js_name = addDays)]
    pub fn add_days(&self, days: i32) -> Result<JsJalaliDate, JsError> {
        self.0
            .checked_add_days(days.into())
            .map(Self)
            .map_err(js_error)
    }

    /// Format in `locale` (`"en"` or `"fa"`).
    pub fn strftime(&self, fmt: &str, locale: &str) -> Result<String, JsError> {
        let locale: Locale = locale.parse().map_err(js_error)?;
        Ok(self.0.strftime_with(fmt, locale))
    }

    #[wasm_bindgen(js_name = toString)]
    pub fn to_iso_string(&self) -> String {
        self.0.iso_format()
    }
}

#[wasm_bindgen(js_name = isLeap)]
pub fn is_leap(year: i32) -> Result<bool, JsError> {
    leap::is_leap(year).map_err(js_error)
}

#[wasm_bindgen(js_name = daysInMonth)]
pub fn days_in_month(month: u8, year: i32) -> Result<u8, JsError> {
    month::days_in_month(month, year).map_err(js_error)
}
