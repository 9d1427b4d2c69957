/// Smallest magnitude printed in positional notation.
pub const MIN_POSITIONAL: f64 = 1e-6;
/// Magnitude from which numbers are printed in exponent notation.
pub const MAX_POSITIONAL: f64 = 1e21;

/// Formats a number the way the calculator displays results.
///
/// Uses the shortest digit string that round-trips to the same `f64`.
/// Magnitudes in `[1e-6, 1e21)` are printed positionally; anything else uses
/// exponent notation with an explicit sign (`1e+21`, `1.5e-7`). Negative
/// zero prints as `0`. The output is always valid calculator input.
///
/// ## Example
/// ```
/// use calcrs::util::num::format_number;
///
/// assert_eq!(format_number(14.0), "14");
/// assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
/// assert_eq!(format_number(1e21), "1e+21");
/// assert_eq!(format_number(-1.5e-7), "-1.5e-7");
/// assert_eq!(format_number(-0.0), "0");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }

    let magnitude = value.abs();
    if (MIN_POSITIONAL..MAX_POSITIONAL).contains(&magnitude) {
        return value.to_string();
    }

    let text = format!("{value:e}");
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        },
        _ => text,
    }
}

/// Reads the longest numeric prefix of `text`.
///
/// Leading whitespace is skipped. The prefix may carry a sign, a fractional
/// part and an exponent; an exponent marker without digits is not part of
/// the prefix. Returns `None` when `text` does not start with a number.
///
/// ## Example
/// ```
/// use calcrs::util::num::leading_number;
///
/// assert_eq!(leading_number("12+3"), Some(12.0));
/// assert_eq!(leading_number("  -2.5e3x"), Some(-2500.0));
/// assert_eq!(leading_number("3e"), Some(3.0));
/// assert_eq!(leading_number("sin(3)"), None);
/// ```
#[must_use]
pub fn leading_number(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        end += 1 + frac_digits;
    }

    if int_digits + frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    text[..end].parse().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_range_boundaries() {
        assert_eq!(format_number(1e-6), "0.000001");
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert_eq!(format_number(-2.5e22), "-2.5e+22");
    }

    #[test]
    fn formatted_results_reparse() {
        for x in [14.0, 200.1, -0.5, 1.0 / 3.0, 6.02e23, 1.6e-19] {
            assert_eq!(leading_number(&format_number(x)), Some(x));
        }
    }

    #[test]
    fn leading_number_edge_cases() {
        assert_eq!(leading_number(""), None);
        assert_eq!(leading_number("-"), None);
        assert_eq!(leading_number("."), None);
        assert_eq!(leading_number(".5"), Some(0.5));
        assert_eq!(leading_number("5."), Some(5.0));
        assert_eq!(leading_number("+7"), Some(7.0));
        assert_eq!(leading_number("1e+"), Some(1.0));
        assert_eq!(leading_number("Error"), None);
    }
}
