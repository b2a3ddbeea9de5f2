//! Locale-aware display formatting for prices and publication dates.

use chrono::NaiveDate;

use crate::config::LocaleConfig;

/// Space placed between the currency symbol and the amount.
pub const CURRENCY_SPACE: char = '\u{a0}';

/// Format a raw price string as currency with exactly two decimals and grouping.
///
/// The leading numeric portion of `raw` is used (`"15.99 USD"` formats as `15.99`).
/// A missing or non-numeric price formats as the locale's "not a number" text
/// rather than failing.
pub fn format_currency(raw: &str, locale: &LocaleConfig) -> String {
    let Some(value) = parse_leading_float(raw).filter(|v| v.is_finite()) else {
        return format!(
            "{}{CURRENCY_SPACE}{}",
            locale.currency_symbol, locale.not_a_number
        );
    };

    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    // Negative amounts keep their sign even when they round to zero.
    let negative = value.is_sign_negative();

    format!(
        "{sign}{symbol}{CURRENCY_SPACE}{int}{dec}{frac}",
        sign = if negative { "-" } else { "" },
        symbol = locale.currency_symbol,
        int = group_digits(int_part, locale.group_separator),
        dec = locale.decimal_separator,
        frac = frac_part,
    )
}

/// Reformat an ISO `YYYY-MM-DD` date with the locale's date format.
///
/// The string is read as a plain calendar date, so the result never shifts by a
/// day with the local timezone.
pub fn format_date(iso: &str, locale: &LocaleConfig) -> String {
    match NaiveDate::parse_from_str(iso.trim(), "%Y-%m-%d") {
        Ok(date) => date.format(&locale.date_format).to_string(),
        Err(_) => locale.invalid_date.clone(),
    }
}

/// Parse the longest numeric prefix of `input` (after leading whitespace):
/// optional sign, digits, optional fraction, optional exponent.
fn parse_leading_float(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        if digits > 0 || frac_end > frac_start {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}

fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt_br() -> LocaleConfig {
        LocaleConfig::default()
    }

    #[test]
    fn currency_two_decimals() {
        assert_eq!(format_currency("15.99", &pt_br()), "R$\u{a0}15,99");
        assert_eq!(format_currency("0.00", &pt_br()), "R$\u{a0}0,00");
        assert_eq!(format_currency("7", &pt_br()), "R$\u{a0}7,00");
        assert_eq!(format_currency("2.5", &pt_br()), "R$\u{a0}2,50");
    }

    #[test]
    fn currency_grouping() {
        assert_eq!(format_currency("1234567.891", &pt_br()), "R$\u{a0}1.234.567,89");
        assert_eq!(format_currency("1000", &pt_br()), "R$\u{a0}1.000,00");
        assert_eq!(format_currency("999.999", &pt_br()), "R$\u{a0}1.000,00");
    }

    #[test]
    fn currency_invalid_is_not_a_number() {
        assert_eq!(format_currency("", &pt_br()), "R$\u{a0}NaN");
        assert_eq!(format_currency("free", &pt_br()), "R$\u{a0}NaN");
        assert_eq!(format_currency(".", &pt_br()), "R$\u{a0}NaN");
        assert_eq!(format_currency("-", &pt_br()), "R$\u{a0}NaN");
    }

    #[test]
    fn currency_uses_numeric_prefix() {
        assert_eq!(format_currency("  12.5 USD", &pt_br()), "R$\u{a0}12,50");
        assert_eq!(format_currency(".5", &pt_br()), "R$\u{a0}0,50");
        assert_eq!(format_currency("1e3", &pt_br()), "R$\u{a0}1.000,00");
        assert_eq!(format_currency("3e", &pt_br()), "R$\u{a0}3,00");
    }

    #[test]
    fn currency_negative() {
        assert_eq!(format_currency("-4.2", &pt_br()), "-R$\u{a0}4,20");
        assert_eq!(format_currency("-0.001", &pt_br()), "-R$\u{a0}0,00");
        assert_eq!(format_currency("-0", &pt_br()), "-R$\u{a0}0,00");
    }

    #[test]
    fn currency_other_locale() {
        let en_us = LocaleConfig {
            currency_symbol: "$".to_string(),
            decimal_separator: '.',
            group_separator: ',',
            ..LocaleConfig::default()
        };
        assert_eq!(format_currency("26000.5", &en_us), "$\u{a0}26,000.50");
    }

    #[test]
    fn date_is_day_month_year() {
        assert_eq!(format_date("2024-03-10", &pt_br()), "10/03/2024");
        assert_eq!(format_date("2008-06-08", &pt_br()), "08/06/2008");
    }

    #[test]
    fn date_has_no_timezone_shift_at_boundaries() {
        assert_eq!(format_date("2024-01-01", &pt_br()), "01/01/2024");
        assert_eq!(format_date("2023-12-31", &pt_br()), "31/12/2023");
    }

    #[test]
    fn date_invalid() {
        assert_eq!(format_date("", &pt_br()), "Invalid Date");
        assert_eq!(format_date("2024-02-30", &pt_br()), "Invalid Date");
        assert_eq!(format_date("10/03/2024", &pt_br()), "Invalid Date");
    }
}
