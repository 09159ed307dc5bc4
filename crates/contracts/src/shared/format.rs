//! Display formatting for money and phone numbers.
//!
//! Money follows the `en-KE` grouping used on every page: comma thousands
//! separator, dot decimal separator, exactly two fraction digits.

/// Currency prefix used when no configuration overrides it.
pub const DEFAULT_CURRENCY: &str = "KES";

/// Parses a leading decimal number the way the browser's `parseFloat` does.
///
/// Leading whitespace is skipped and the longest numeric prefix wins, so
/// `"12.5 units"` is `12.5`. Anything without a numeric prefix is NaN.
///
/// ```
/// use contracts::shared::format::parse_float;
/// assert_eq!(parse_float("  1234.5abc"), 1234.5);
/// assert!(parse_float("abc").is_nan());
/// ```
pub fn parse_float(text: &str) -> f64 {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }
    if s[end..].starts_with("Infinity") {
        let negative = bytes.first() == Some(&b'-');
        return if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return f64::NAN;
    }

    // Exponent only counts when at least one digit follows it.
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().unwrap_or(f64::NAN)
}

/// Groups the integer part with commas and keeps two decimals.
///
/// Non-finite values render the way the browser renders them: `NaN`, `∞`, `-∞`.
pub fn format_amount(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let (integer_part, decimal_part) = round_to_cents(value.abs());

    let mut grouped = String::with_capacity(integer_part.len() + integer_part.len() / 3);
    for (i, c) in integer_part.chars().enumerate() {
        if i > 0 && (integer_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if value.is_sign_negative() { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, decimal_part)
}

/// Rounds a finite, non-negative value to two decimals, half away from zero,
/// working on its shortest decimal form so `1.005` becomes `1.01`.
fn round_to_cents(value: f64) -> (String, String) {
    let repr = value.to_string();
    let (integer_part, fraction) = repr.split_once('.').unwrap_or((repr.as_str(), ""));

    let mut digits: Vec<u8> = integer_part
        .bytes()
        .chain(fraction.bytes().chain(std::iter::repeat(b'0')).take(2))
        .map(|b| b - b'0')
        .collect();

    if fraction.as_bytes().get(2).is_some_and(|d| *d >= b'5') {
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

    let text: String = digits.iter().map(|d| char::from(b'0' + d)).collect();
    let (int_digits, cents) = text.split_at(text.len() - 2);
    (int_digits.to_string(), cents.to_string())
}

/// Formats an amount as `"KES 1,234.50"`.
pub fn format_currency(amount: f64) -> String {
    format_currency_with(DEFAULT_CURRENCY, amount)
}

/// Formats an amount with an explicit currency prefix.
pub fn format_currency_with(currency: &str, amount: f64) -> String {
    format!("{} {}", currency, format_amount(amount))
}

/// Parses `text` first; non-numeric input yields `"KES NaN"`.
pub fn format_currency_str(text: &str) -> String {
    format_currency(parse_float(text))
}

/// Normalizes a phone number to the `254XXXXXXXXX` form expected by M-Pesa.
///
/// Whitespace is removed, a leading `0` becomes `254` and a leading `+` is
/// dropped. Length and digits are not validated.
pub fn format_phone_number(phone: &str) -> String {
    let phone: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    if let Some(rest) = phone.strip_prefix('0') {
        format!("254{}", rest)
    } else if let Some(rest) = phone.strip_prefix('+') {
        rest.to_string()
    } else {
        phone
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(1234.5), "KES 1,234.50");
        assert_eq!(format_currency(0.0), "KES 0.00");
        assert_eq!(format_currency(999.999), "KES 1,000.00");
        assert_eq!(format_currency(1234567.891), "KES 1,234,567.89");
        assert_eq!(format_currency(-1234.5), "KES -1,234.50");
        assert_eq!(format_currency(-0.001), "KES -0.00");
    }

    #[test]
    fn test_format_currency_rounds_half_away_from_zero() {
        assert_eq!(format_currency(1.005), "KES 1.01");
        assert_eq!(format_currency(10.125), "KES 10.13");
        assert_eq!(format_currency(0.125), "KES 0.13");
        assert_eq!(format_currency(2.675), "KES 2.68");
        assert_eq!(format_currency(-10.125), "KES -10.13");
        assert_eq!(format_currency(99.995), "KES 100.00");
        assert_eq!(format_currency(0.004), "KES 0.00");
    }

    #[test]
    fn test_format_currency_non_numeric() {
        assert_eq!(format_currency(f64::NAN), "KES NaN");
        assert_eq!(format_currency_str("abc"), "KES NaN");
        assert_eq!(format_currency_str("2500"), "KES 2,500.00");
        assert_eq!(format_currency(f64::INFINITY), "KES ∞");
    }

    #[test]
    fn test_format_currency_with_prefix() {
        assert_eq!(format_currency_with("USD", 100.0), "USD 100.00");
    }

    #[test]
    fn test_parse_float_prefix() {
        assert_eq!(parse_float("1234.5"), 1234.5);
        assert_eq!(parse_float("  42 items"), 42.0);
        assert_eq!(parse_float("-3.25"), -3.25);
        assert_eq!(parse_float(".5"), 0.5);
        assert_eq!(parse_float("5."), 5.0);
        assert_eq!(parse_float("1e3"), 1000.0);
        assert_eq!(parse_float("1e"), 1.0);
        assert_eq!(parse_float("-Infinity"), f64::NEG_INFINITY);
        assert!(parse_float("").is_nan());
        assert!(parse_float("KES 100").is_nan());
        assert!(parse_float(".").is_nan());
        assert!(parse_float("-").is_nan());
    }

    #[test]
    fn test_format_phone_number() {
        assert_eq!(format_phone_number("0712345678"), "254712345678");
        assert_eq!(format_phone_number("+254712345678"), "254712345678");
        assert_eq!(format_phone_number("712345678"), "712345678");
        assert_eq!(format_phone_number("0712 345 678"), "254712345678");
        assert_eq!(format_phone_number(" +254 712 345678 "), "254712345678");
        assert_eq!(format_phone_number(""), "");
    }
}
