//! Digit grouping for locale-aware number rendering.
//!
//! Operates on plain decimal strings as produced by `Decimal::to_string`
//! (`"1234.5"`, never exponent notation). Separators are chosen by the caller.

/// Inserts `separator` between every group of three digits, counted from the right.
pub fn group_thousands(integer: &str, separator: char) -> String {
    let digits: Vec<char> = integer.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(*c);
    }

    grouped
}

/// Trims trailing zeros from a fraction, then pads back up to `min_digits`.
pub fn normalize_fraction(fraction: &str, min_digits: usize) -> String {
    let mut trimmed = fraction.trim_end_matches('0').to_string();
    while trimmed.len() < min_digits {
        trimmed.push('0');
    }
    trimmed
}

/// Renders an unsigned plain decimal string with locale separators.
///
/// The fraction is kept as given apart from trailing-zero normalization.
pub fn localize_unsigned(
    plain: &str,
    group_separator: char,
    decimal_separator: char,
    min_fraction_digits: usize,
) -> String {
    let (integer, fraction) = plain.split_once('.').unwrap_or((plain, ""));
    let fraction = normalize_fraction(fraction, min_fraction_digits);
    let integer = group_thousands(integer, group_separator);

    if fraction.is_empty() {
        integer
    } else {
        format!("{}{}{}", integer, decimal_separator, fraction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands_small_numbers_untouched() {
        assert_eq!(group_thousands("0", ','), "0");
        assert_eq!(group_thousands("12", ','), "12");
        assert_eq!(group_thousands("123", ','), "123");
    }

    #[test]
    fn test_group_thousands_separator() {
        assert_eq!(group_thousands("1000", ','), "1,000");
        assert_eq!(group_thousands("12345", ','), "12,345");
        assert_eq!(group_thousands("123456", ','), "123,456");
        assert_eq!(group_thousands("1234567", '.'), "1.234.567");
        assert_eq!(group_thousands("1234567890", ','), "1,234,567,890");
    }

    #[test]
    fn test_normalize_fraction_trims_then_pads() {
        assert_eq!(normalize_fraction("500000", 2), "50");
        assert_eq!(normalize_fraction("5", 2), "50");
        assert_eq!(normalize_fraction("", 2), "00");
        assert_eq!(normalize_fraction("123456", 2), "123456");
    }

    #[test]
    fn test_localize_unsigned() {
        assert_eq!(localize_unsigned("1234.5", ',', '.', 2), "1,234.50");
        assert_eq!(localize_unsigned("1234.5", '.', ',', 2), "1.234,50");
        assert_eq!(localize_unsigned("1000000", ',', '.', 2), "1,000,000.00");
        assert_eq!(localize_unsigned("7", ',', '.', 0), "7");
    }
}
