//! Exact decimal numbers and their canonical encoding.
//!
//! Numbers arrive as their literal text and never go through floating
//! point. A [`Decimal`] is kept in minimal form: `value = unscaled ×
//! 10^exponent` where `unscaled` has no leading or trailing zero digits.
//! Zero has exactly one representation regardless of sign or scale in the
//! source text.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// An exact decimal value in minimal `(unscaled, exponent)` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Decimal {
    negative: bool,
    /// ASCII digits of the unscaled value, no leading or trailing zeros.
    /// Empty for zero.
    digits: String,
    exponent: i64,
}

impl Decimal {
    /// The canonical zero.
    pub fn zero() -> Self {
        Self {
            negative: false,
            digits: String::new(),
            exponent: 0,
        }
    }

    fn from_integer(negative: bool, magnitude: u64) -> Self {
        if magnitude == 0 {
            return Self::zero();
        }
        let text = magnitude.to_string();
        let digits = text.trim_end_matches('0');
        Self {
            negative,
            exponent: (text.len() - digits.len()) as i64,
            digits: digits.to_string(),
        }
    }

    /// Normalize `±int.frac × 10^exponent` into minimal form.
    ///
    /// Returns `None` if the adjusted exponent overflows.
    fn from_parts(negative: bool, int_digits: &str, frac_digits: &str, exponent: i64) -> Option<Self> {
        let mut digits = String::with_capacity(int_digits.len() + frac_digits.len());
        digits.push_str(int_digits);
        digits.push_str(frac_digits);

        let significant = digits.trim_start_matches('0');
        if significant.is_empty() {
            return Some(Self::zero());
        }

        let trimmed = significant.trim_end_matches('0');
        let stripped = (significant.len() - trimmed.len()) as i64;
        let exponent = exponent
            .checked_sub(frac_digits.len() as i64)?
            .checked_add(stripped)?;

        Some(Self {
            negative,
            digits: trimmed.to_string(),
            exponent,
        })
    }

    pub fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Decimal text of the unscaled value, with a leading `-` if negative.
    pub fn unscaled(&self) -> String {
        if self.is_zero() {
            return "0".to_string();
        }
        if self.negative {
            format!("-{}", self.digits)
        } else {
            self.digits.clone()
        }
    }

    /// Power of ten the unscaled value is multiplied by (the negated scale).
    pub fn exponent(&self) -> i64 {
        self.exponent
    }

    /// The canonical byte encoding: `<unscaled>e<exponent>`.
    ///
    /// `2`, `2.0`, `20e-1` all encode as `2e0`; `100` encodes as `1e2`;
    /// every spelling of zero encodes as `0e0`.
    pub fn canonical_bytes(&self) -> Vec<u8> {
        self.to_string().into_bytes()
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}e{}", self.unscaled(), self.exponent)
    }
}

impl From<u64> for Decimal {
    fn from(value: u64) -> Self {
        Self::from_integer(false, value)
    }
}

impl From<i64> for Decimal {
    fn from(value: i64) -> Self {
        Self::from_integer(value < 0, value.unsigned_abs())
    }
}

impl FromStr for Decimal {
    type Err = Error;

    /// Read number text: `-? digits (. digits)? ([eE] [+-]? digits)?`.
    ///
    /// Leading zeros are tolerated here; the JSON parser has already
    /// rejected them in documents.
    fn from_str(text: &str) -> Result<Self> {
        let invalid = || Error::InvalidNumber(text.to_string());

        let (negative, unsigned) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };
        let (mantissa, exponent) = match unsigned.find(|c: char| matches!(c, 'e' | 'E')) {
            Some(at) => {
                let (exp_negative, exp_digits) = match &unsigned[at + 1..] {
                    e if e.starts_with('-') => (true, &e[1..]),
                    e if e.starts_with('+') => (false, &e[1..]),
                    e => (false, e),
                };
                if !all_digits(exp_digits) {
                    return Err(invalid());
                }
                let exponent = parse_exponent(exp_digits, exp_negative).ok_or_else(invalid)?;
                (&unsigned[..at], exponent)
            }
            None => (unsigned, 0),
        };
        let (int_digits, frac_digits) = match mantissa.split_once('.') {
            Some((int, frac)) if all_digits(frac) => (int, frac),
            Some(_) => return Err(invalid()),
            None => (mantissa, ""),
        };
        if !all_digits(int_digits) {
            return Err(invalid());
        }

        Self::from_parts(negative, int_digits, frac_digits, exponent).ok_or_else(invalid)
    }
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Parse exponent digits into an `i64`, `None` on overflow.
fn parse_exponent(digits: &str, negative: bool) -> Option<i64> {
    digits.bytes().try_fold(0i64, |acc, b| {
        let d = i64::from(b - b'0');
        let acc = acc.checked_mul(10)?;
        if negative {
            acc.checked_sub(d)
        } else {
            acc.checked_add(d)
        }
    })
}
