use std::fmt::Display;

use itertools::Itertools;

const FRACTION_DIGITS: usize = 3;

/// Round the shortest decimal form of a non-negative number to `FRACTION_DIGITS`,
/// ties away from zero. Returns the integer and fraction digits.
fn round_half_expand(value: f64) -> (String, String) {
    let repr = value.to_string();
    let (int_part, frac_part) = repr.split_once('.').unwrap_or((repr.as_str(), ""));
    if frac_part.len() <= FRACTION_DIGITS {
        return (int_part.to_string(), frac_part.to_string());
    }

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(FRACTION_DIGITS))
        .map(|b| b - b'0')
        .collect();
    if frac_part.as_bytes()[FRACTION_DIGITS] >= b'5' {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == 9 {
                *digit = 0;
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, 1);
        }
    }

    let split = digits.len() - FRACTION_DIGITS;
    let to_text = |digits: &[u8]| digits.iter().map(|d| char::from(b'0' + d)).collect::<String>();
    (to_text(&digits[..split]), to_text(&digits[split..]))
}

/// Format a number the way an en-US locale does:
/// digits grouped by thousands, at most three fraction digits, no trailing zeros
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".into();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞".into() } else { "-∞".into() };
    }

    let (int_part, frac_part) = round_half_expand(value.abs());
    let frac_part = frac_part.trim_end_matches('0');

    let digits: Vec<char> = int_part.chars().collect();
    let grouped = digits
        .rchunks(3)
        .rev()
        .map(|chunk| chunk.iter().collect::<String>())
        .join(",");

    // -0.0004 rounds to 0, which carries no sign
    let is_zero = grouped.chars().all(|c| c == '0' || c == ',') && frac_part.is_empty();
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };

    if frac_part.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac_part}")
    }
}

#[derive(Debug)]
pub struct FootprintCliError {
    msg: String,
}

impl From<String> for FootprintCliError {
    fn from(msg: String) -> Self {
        FootprintCliError { msg }
    }
}

impl From<FootprintCliError> for String {
    fn from(value: FootprintCliError) -> String {
        value.msg
    }
}

impl From<&str> for FootprintCliError {
    fn from(msg: &str) -> Self {
        FootprintCliError { msg: msg.into() }
    }
}

impl From<std::io::Error> for FootprintCliError {
    fn from(err: std::io::Error) -> Self {
        FootprintCliError {
            msg: format!("i/o error: {err}"),
        }
    }
}

impl From<serde_json::Error> for FootprintCliError {
    fn from(err: serde_json::Error) -> Self {
        FootprintCliError {
            msg: format!("json error: {err}"),
        }
    }
}

impl Display for FootprintCliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.msg)
    }
}

impl std::error::Error for FootprintCliError {}
