//! # Reading rational numbers from text
//!
//! Input layers hand over numbers as text. Accepted are integers (`-3`), fractions (`7/2`) and
//! finite decimals (`0.25`, `-1.5`).
use std::str::FromStr;

use num::{BigInt, BigRational, Zero};
use thiserror::Error;

use crate::data::number_types::rational::ExactRational;

/// A text could not be read as a rational number.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum ParseRationalError {
    /// The text is not an integer, fraction or decimal.
    #[error("\"{0}\" is not a number")]
    Invalid(String),
    /// The text is a fraction with a zero denominator.
    #[error("\"{0}\" has a zero denominator")]
    ZeroDenominator(String),
}

impl FromStr for ExactRational {
    type Err = ParseRationalError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let text = text.trim();
        let invalid = || ParseRationalError::Invalid(text.to_string());

        if let Some((numer, denom)) = text.split_once('/') {
            let numer = parse_integer(numer.trim()).ok_or_else(invalid)?;
            let denom = parse_integer(denom.trim()).ok_or_else(invalid)?;
            if denom.is_zero() {
                return Err(ParseRationalError::ZeroDenominator(text.to_string()));
            }

            return Ok(Self(BigRational::new(numer, denom)));
        }

        let (negative, unsigned) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text.strip_prefix('+').unwrap_or(text)),
        };
        let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
        let all_digits = |part: &str| part.bytes().all(|byte| byte.is_ascii_digit());
        if whole.len() + fraction.len() == 0 || !all_digits(whole) || !all_digits(fraction) {
            return Err(invalid());
        }

        let digits = format!("{whole}{fraction}");
        let numer = BigInt::from_str(&digits).map_err(|_| invalid())?;
        let exponent = u32::try_from(fraction.len()).map_err(|_| invalid())?;
        let denom = BigInt::from(10).pow(exponent);
        let value = BigRational::new(numer, denom);

        Ok(Self(if negative { -value } else { value }))
    }
}

/// Parse an optionally signed sequence of decimal digits.
fn parse_integer(text: &str) -> Option<BigInt> {
    let digits = text.strip_prefix(['-', '+']).unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }

    BigInt::from_str(text).ok()
}
