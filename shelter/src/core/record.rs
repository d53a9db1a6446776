//! Record type plus the name and fee validation rules.

use serde::Deserialize;

use crate::core::error::ShelterError;

/// A stored (animal name, adoption fee) pair.
///
/// `name` is always trimmed and non-empty; `fee` is never NaN and never
/// negative. Both are enforced by [`crate::core::store::RecordStore`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Record {
    pub name: String,
    pub fee: f64,
}

/// Trim `raw` and reject it if nothing remains.
///
/// `reason` selects the message the caller wants users to see, since `add`
/// and `fee` word the blank-name error differently.
pub fn validate_name<'a>(raw: &'a str, reason: &'static str) -> Result<&'a str, ShelterError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ShelterError::InvalidName(reason));
    }
    Ok(trimmed)
}

/// Accept only fees that are real numbers and not below zero.
pub fn validate_fee(fee: f64) -> Result<f64, ShelterError> {
    if fee.is_nan() || fee < 0.0 {
        return Err(ShelterError::InvalidFee);
    }
    Ok(fee)
}

/// Parse raw fee text typed at the prompt, with `Number()` text semantics.
///
/// - Surrounding whitespace is ignored; blank text is `0`.
/// - Decimal literals (`15`, `.5`, `1e3`, `+2`, `-5`) parse as usual.
/// - `Infinity` (optionally signed, exact case) is positive/negative infinity.
/// - Unsigned `0x`, `0o` and `0b` literals are integers in that radix.
///
/// Anything else is [`ShelterError::InvalidFee`]. Negative numbers parse
/// successfully; the store rejects them.
pub fn parse_fee(raw: &str) -> Result<f64, ShelterError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    if let Some(fee) = parse_infinity(trimmed) {
        return Ok(fee);
    }
    if let Some(fee) = parse_radix_literal(trimmed) {
        return fee;
    }
    if !is_decimal_literal(trimmed) {
        return Err(ShelterError::InvalidFee);
    }
    trimmed.parse().map_err(|_| ShelterError::InvalidFee)
}

fn parse_infinity(text: &str) -> Option<f64> {
    match text {
        "Infinity" | "+Infinity" => Some(f64::INFINITY),
        "-Infinity" => Some(f64::NEG_INFINITY),
        _ => None,
    }
}

/// `Some` when `text` carries a radix prefix, whether or not the digits are valid.
fn parse_radix_literal(text: &str) -> Option<Result<f64, ShelterError>> {
    let bytes = text.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return None;
    }
    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };
    let digits = &text[2..];
    if digits.is_empty() {
        return Some(Err(ShelterError::InvalidFee));
    }
    let value = digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix)
            .map(|digit| acc * f64::from(radix) + f64::from(digit))
    });
    Some(value.ok_or(ShelterError::InvalidFee))
}

/// Sign, digits with at most one point, optional exponent. Excludes the
/// `inf`/`nan` spellings that `str::parse::<f64>` would also accept.
fn is_decimal_literal(text: &str) -> bool {
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    let (mantissa, exponent) = match unsigned.find(['e', 'E']) {
        Some(at) => (&unsigned[..at], Some(&unsigned[at + 1..])),
        None => (unsigned, None),
    };
    let mut digits = 0;
    let mut points = 0;
    for c in mantissa.chars() {
        match c {
            '0'..='9' => digits += 1,
            '.' => points += 1,
            _ => return false,
        }
    }
    if digits == 0 || points > 1 {
        return false;
    }
    match exponent {
        None => true,
        Some(exp) => {
            let exp = exp.strip_prefix(['+', '-']).unwrap_or(exp);
            !exp.is_empty() && exp.chars().all(|c| c.is_ascii_digit())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::{ADD_NAME_REASON, LOOKUP_NAME_REASON};

    #[test]
    fn validate_name_trims_surrounding_whitespace() {
        assert_eq!(validate_name("  parrot \t", ADD_NAME_REASON), Ok("parrot"));
    }

    #[test]
    fn validate_name_rejects_blank_with_requested_reason() {
        assert_eq!(
            validate_name("", ADD_NAME_REASON),
            Err(ShelterError::InvalidName(ADD_NAME_REASON))
        );
        assert_eq!(
            validate_name(" \t ", LOOKUP_NAME_REASON),
            Err(ShelterError::InvalidName(LOOKUP_NAME_REASON))
        );
    }

    #[test]
    fn validate_fee_rejects_nan_and_negative() {
        assert_eq!(validate_fee(f64::NAN), Err(ShelterError::InvalidFee));
        assert_eq!(validate_fee(-0.01), Err(ShelterError::InvalidFee));
        assert_eq!(validate_fee(0.0), Ok(0.0));
        assert_eq!(validate_fee(1e12), Ok(1e12));
    }

    #[test]
    fn parse_fee_accepts_decimal_text() {
        assert_eq!(parse_fee("15"), Ok(15.0));
        assert_eq!(parse_fee(" 12.50 \n"), Ok(12.5));
        assert_eq!(parse_fee("-5"), Ok(-5.0));
        assert_eq!(parse_fee("+2"), Ok(2.0));
        assert_eq!(parse_fee("1e3"), Ok(1000.0));
        assert_eq!(parse_fee(".5"), Ok(0.5));
        assert_eq!(parse_fee("5."), Ok(5.0));
        assert_eq!(parse_fee("2.5E-1"), Ok(0.25));
    }

    #[test]
    fn parse_fee_treats_blank_as_zero() {
        assert_eq!(parse_fee(""), Ok(0.0));
        assert_eq!(parse_fee("   "), Ok(0.0));
        assert_eq!(parse_fee("\t\r"), Ok(0.0));
    }

    #[test]
    fn parse_fee_rejects_garbage() {
        for raw in ["abc", "12abc", "$15", "1,000", ".", "1e", "e5", "1.2.3", "- 5", "0x", "0xZZ"] {
            assert_eq!(parse_fee(raw), Err(ShelterError::InvalidFee), "{raw:?}");
        }
    }

    #[test]
    fn parse_fee_accepts_exact_infinity_spelling() {
        assert_eq!(parse_fee("Infinity"), Ok(f64::INFINITY));
        assert_eq!(parse_fee(" +Infinity "), Ok(f64::INFINITY));
        assert_eq!(parse_fee("-Infinity"), Ok(f64::NEG_INFINITY));
        assert_eq!(parse_fee("1e400"), Ok(f64::INFINITY));
    }

    #[test]
    fn parse_fee_rejects_other_non_finite_spellings() {
        for raw in ["NaN", "nan", "inf", "-inf", "infinity", "INFINITY"] {
            assert_eq!(parse_fee(raw), Err(ShelterError::InvalidFee), "{raw:?}");
        }
    }

    #[test]
    fn parse_fee_accepts_unsigned_radix_literals() {
        assert_eq!(parse_fee("0x1F"), Ok(31.0));
        assert_eq!(parse_fee("0o17"), Ok(15.0));
        assert_eq!(parse_fee("0B101"), Ok(5.0));
        assert_eq!(parse_fee("-0x10"), Err(ShelterError::InvalidFee));
        assert_eq!(parse_fee("0b102"), Err(ShelterError::InvalidFee));
    }

    #[test]
    fn infinite_fee_passes_validation() {
        let fee = parse_fee("Infinity").expect("parse");
        assert_eq!(validate_fee(fee), Ok(f64::INFINITY));
        let fee = parse_fee("-Infinity").expect("parse");
        assert_eq!(validate_fee(fee), Err(ShelterError::InvalidFee));
    }
}
