use ember_core::ValidationError;
use ember_core::config::{MAX_QUANTITY, MIN_QUANTITY};

/// A number spotted in free text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Number<'a> {
    /// Saturates at the `i64` bounds.
    Whole(i64),
    /// Decimal or exponent notation, kept as written.
    Fractional(&'a str),
}

/// Resolve how many people a free-text request asks for.
///
/// The first number in `raw` wins and must be a whole number in
/// `MIN_QUANTITY..=MAX_QUANTITY`. Text without any number (or no text at all)
/// falls back to `default`.
pub fn parse_quantity(raw: Option<&str>, default: u8) -> Result<u8, ValidationError> {
    let value = match raw.and_then(first_number) {
        None => return Ok(default),
        Some(Number::Whole(value)) => value,
        Some(Number::Fractional(literal)) => {
            return Err(ValidationError::NotWholeNumber {
                literal: literal.to_owned(),
            });
        }
    };

    u8::try_from(value)
        .ok()
        .filter(|quantity| (MIN_QUANTITY..=MAX_QUANTITY).contains(quantity))
        .ok_or(ValidationError::QuantityOutOfRange {
            value,
            min: MIN_QUANTITY,
            max: MAX_QUANTITY,
        })
}

/// Find the first number embedded in `text`.
///
/// A `-` counts as a sign only at the start of the text or after whitespace,
/// so `top-5` reads as `5`. A digit run continued by `.`, `e` or `E` and more
/// digits is reported as [`Number::Fractional`].
pub fn first_number(text: &str) -> Option<Number<'_>> {
    let bytes = text.as_bytes();
    let start = bytes.iter().position(u8::is_ascii_digit)?;
    let end = digit_run_end(bytes, start);

    let negative = start > 0
        && bytes[start - 1] == b'-'
        && (start == 1 || bytes[start - 2].is_ascii_whitespace());
    let literal_start = if negative { start - 1 } else { start };

    if let Some(fraction_end) = continuation_end(bytes, end) {
        return Some(Number::Fractional(&text[literal_start..fraction_end]));
    }

    let magnitude = text[start..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(Number::Whole(if negative { -magnitude } else { magnitude }))
}

fn digit_run_end(bytes: &[u8], from: usize) -> usize {
    bytes[from..]
        .iter()
        .position(|byte| !byte.is_ascii_digit())
        .map_or(bytes.len(), |offset| from + offset)
}

/// End of a `.123`, `e3` or `e-3` tail starting at `at`, if there is one.
fn continuation_end(bytes: &[u8], at: usize) -> Option<usize> {
    let digits_from = match bytes.get(at)? {
        b'.' => at + 1,
        b'e' | b'E' => match bytes.get(at + 1) {
            Some(b'+' | b'-') => at + 2,
            _ => at + 1,
        },
        _ => return None,
    };

    bytes
        .get(digits_from)
        .filter(|byte| byte.is_ascii_digit())
        .map(|_| digit_run_end(bytes, digits_from))
}
