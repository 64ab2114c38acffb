//! Number of fractional digits used when results are printed.
//!
//! The text coming from the user is read the way C's `atoi` reads it: leading
//! whitespace, an optional sign, then as many digits as there are. Anything that is
//! not a number reads as 0. Only a missing or empty field gives the default.

use std::fmt;

pub const DEFAULT_PRECISION: usize = 4;
pub const MAX_PRECISION: usize = 15;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Precision(usize);

impl Default for Precision {
    fn default() -> Self {
        Precision(DEFAULT_PRECISION)
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Precision {
    /// clamp any integer into [0, 15]
    pub fn new(digits: i64) -> Self {
        Precision(digits.clamp(0, MAX_PRECISION as i64) as usize)
    }

    pub fn from_text(text: Option<&str>) -> Self {
        match text {
            None => Precision::default(),
            Some("") => Precision::default(),
            Some(text) => Precision::new(atoi(text)),
        }
    }

    pub fn digits(&self) -> usize {
        self.0
    }

    /// fixed-point text with exactly `digits` fractional digits
    pub fn format(&self, value: f64) -> String {
        format!("{:.*}", self.0, value)
    }
}

/// best-effort integer prefix of a string, saturating instead of overflowing
fn atoi(text: &str) -> i64 {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let mut value: i64 = 0;
    for c in digits.chars() {
        match c.to_digit(10) {
            Some(d) => value = value.saturating_mul(10).saturating_add(d as i64),
            None => break,
        }
    }
    if negative { -value } else { value }
}
