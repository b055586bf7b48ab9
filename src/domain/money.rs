//! Locale decimal strings to integer cents and back.

use thiserror::Error;

use super::entities::Cents;

const MAX_FRACTION_DIGITS: usize = 2;
const MAX_INTEGER_DIGITS: usize = 20;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid money format: {0:?}")]
    InvalidFormat(String),
    #[error("money amount out of range: {0:?}")]
    OutOfRange(String),
}

/// Parses `"-1 234,5"`, `"12.05"`, `"7"` and friends into cents.
///
/// All whitespace is removed first, so blank input is zero. Either `,` or `.`
/// separates up to two fractional digits; a third fractional digit is an error
/// rather than a truncation.
pub fn parse_cents(input: &str) -> Result<Cents, ParseError> {
    let cleaned: String = input.chars().filter(|ch| !ch.is_whitespace()).collect();
    if cleaned.is_empty() {
        return Ok(0);
    }

    let invalid = || ParseError::InvalidFormat(input.to_string());

    let (negative, body) = match cleaned.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, cleaned.as_str()),
    };

    let (integer, fraction) = match body.find([',', '.']) {
        Some(idx) => (&body[..idx], &body[idx + 1..]),
        None => (body, ""),
    };

    if integer.is_empty() || !is_digits(integer) || !is_digits(fraction) {
        return Err(invalid());
    }
    if fraction.len() > MAX_FRACTION_DIGITS {
        return Err(invalid());
    }
    if integer.len() > MAX_INTEGER_DIGITS {
        return Err(ParseError::OutOfRange(input.to_string()));
    }

    let whole = digits_value(integer);
    let minor = match fraction.len() {
        0 => 0,
        1 => digits_value(fraction) * 10,
        _ => digits_value(fraction),
    };

    let magnitude = whole * 100 + minor;
    let signed = if negative { -magnitude } else { magnitude };

    Cents::try_from(signed).map_err(|_| ParseError::OutOfRange(input.to_string()))
}

/// Renders cents as `<sign><integer>,<two digits>`, e.g. `-12,05`.
pub fn format_cents(amount: Cents) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    let magnitude = amount.unsigned_abs();
    format!("{sign}{},{:02}", magnitude / 100, magnitude % 100)
}

fn is_digits(value: &str) -> bool {
    value.bytes().all(|b| b.is_ascii_digit())
}

fn digits_value(value: &str) -> i128 {
    value
        .bytes()
        .fold(0_i128, |acc, b| acc * 10 + i128::from(b - b'0'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_separators() {
        assert_eq!(parse_cents("12,05"), Ok(1205));
        assert_eq!(parse_cents("12.05"), Ok(1205));
        assert_eq!(parse_cents("12,5"), Ok(1250));
        assert_eq!(parse_cents("12,"), Ok(1200));
        assert_eq!(parse_cents("12"), Ok(1200));
    }

    #[test]
    fn strips_whitespace_and_handles_sign() {
        assert_eq!(parse_cents("  -1 234,50 "), Ok(-123_450));
        assert_eq!(parse_cents("-0,05"), Ok(-5));
        assert_eq!(parse_cents("   "), Ok(0));
        assert_eq!(parse_cents(""), Ok(0));
    }

    #[test]
    fn rejects_malformed_input() {
        for input in ["abc", "-", "1,234,5", "1.2.3", ",50", "1,005", "+5", "1e3", "--1"] {
            assert!(
                matches!(parse_cents(input), Err(ParseError::InvalidFormat(_))),
                "expected {input:?} to be rejected"
            );
        }
    }

    #[test]
    fn rejects_amounts_beyond_i64() {
        assert!(matches!(
            parse_cents("999999999999999999"),
            Err(ParseError::OutOfRange(_))
        ));
        assert_eq!(parse_cents("92233720368547758,07"), Ok(i64::MAX));
        assert_eq!(parse_cents("-92233720368547758,08"), Ok(i64::MIN));
    }

    #[test]
    fn formats_with_comma_and_two_digits() {
        assert_eq!(format_cents(-1205), "-12,05");
        assert_eq!(format_cents(5), "0,05");
        assert_eq!(format_cents(-5), "-0,05");
        assert_eq!(format_cents(0), "0,00");
        assert_eq!(format_cents(i64::MIN), "-92233720368547758,08");
    }

    #[test]
    fn parse_inverts_format() {
        for amount in [0, 1, -1, 99, 100, -12_345, 1_000_000_07, i64::MAX, i64::MIN] {
            assert_eq!(parse_cents(&format_cents(amount)), Ok(amount));
        }
    }
}
