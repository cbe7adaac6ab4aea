//! Keystroke-level phone normalization.

const MAX_DIGITS: usize = 10;

/// Keeps the digits of `input` and regroups them as `NNN NNN NNNN`.
///
/// Separators appear once the digit count passes 3 and 6; anything past ten
/// digits is dropped. Formatting a formatted value is a no-op.
#[must_use]
pub fn format_phone(input: &str) -> String {
    let digits: Vec<char> = input.chars().filter(char::is_ascii_digit).take(MAX_DIGITS).collect();

    let mut formatted = String::with_capacity(MAX_DIGITS + 2);
    for (i, digit) in digits.into_iter().enumerate() {
        if i == 3 || i == 6 {
            formatted.push(' ');
        }
        formatted.push(digit);
    }
    formatted
}

/// Whether `value` is a complete grouped number.
#[must_use]
pub fn is_complete(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 12
        && bytes.iter().enumerate().all(|(i, b)| match i {
            3 | 7 => *b == b' ',
            _ => b.is_ascii_digit(),
        })
}
