//! Value-level formatting helpers.
//!
//! Monetary amounts are integer cents everywhere inside the crate; the
//! decimal (reais) representation exists only at the form-input boundary.
//! CPF masking reproduces the input component's behavior exactly.

/// Format a CPF input as `###.###.###-##`.
///
/// Strips non-digits, truncates to 11 digits and re-inserts `.` after
/// digits 3 and 6 and `-` after digit 9. Partial input yields a partial
/// mask with no trailing separator.
pub fn format_cpf(input: &str) -> String {
    let digits: Vec<char> = input
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(11)
        .collect();

    let mut out = String::with_capacity(14);
    for (i, c) in digits.iter().enumerate() {
        match i {
            3 | 6 => out.push('.'),
            9 => out.push('-'),
            _ => {}
        }
        out.push(*c);
    }
    out
}

/// Whether a string is a fully masked, 11-digit CPF.
pub fn is_complete_cpf(value: &str) -> bool {
    let digits = value.chars().filter(|c| c.is_ascii_digit()).count();
    digits == 11 && format_cpf(value) == value
}

/// Convert a major-unit (reais) amount to integer cents, rounding.
pub fn reais_to_cents(value: f64) -> i64 {
    (value * 100.0).round() as i64
}

/// Convert integer cents to a major-unit (reais) amount.
pub fn cents_to_reais(cents: i64) -> f64 {
    cents as f64 / 100.0
}

/// Parse a reais amount typed by the user.
///
/// Accepts both `1234.56` and the pt-BR form `1.234,56` (with `R$` prefix
/// tolerated). Returns `None` when the input is not a number.
pub fn parse_reais(input: &str) -> Option<f64> {
    let trimmed = input.trim().trim_start_matches("R$").trim();
    if trimmed.is_empty() {
        return None;
    }
    let normalized = if trimmed.contains(',') {
        // pt-BR: '.' is the thousands separator, ',' the decimal mark
        trimmed.replace('.', "").replace(',', ".")
    } else {
        trimmed.to_string()
    };
    normalized.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Display integer cents as `R$ 12,50`.
pub fn format_cents_brl(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.abs();
    format!("{}R$ {},{:02}", sign, abs / 100, abs % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_cpf_full() {
        assert_eq!(format_cpf("12345678901"), "123.456.789-01");
    }

    #[test]
    fn test_format_cpf_strips_non_digits() {
        assert_eq!(format_cpf("123.456.789-01"), "123.456.789-01");
        assert_eq!(format_cpf("abc123def456"), "123.456");
    }

    #[test]
    fn test_format_cpf_truncates_to_eleven_digits() {
        assert_eq!(format_cpf("123456789012345"), "123.456.789-01");
    }

    #[test]
    fn test_format_cpf_partial_has_no_trailing_separator() {
        assert_eq!(format_cpf("123"), "123");
        assert_eq!(format_cpf("1234"), "123.4");
        assert_eq!(format_cpf("123456789"), "123.456.789");
        assert_eq!(format_cpf("1234567890"), "123.456.789-0");
    }

    #[test]
    fn test_is_complete_cpf() {
        assert!(is_complete_cpf("123.456.789-01"));
        assert!(!is_complete_cpf("123.456.789"));
        assert!(!is_complete_cpf("12345678901"));
    }

    #[test]
    fn test_reais_to_cents() {
        assert_eq!(reais_to_cents(12.5), 1250);
        assert_eq!(reais_to_cents(0.01), 1);
        assert_eq!(reais_to_cents(0.0), 0);
    }

    #[test]
    fn test_cents_to_reais() {
        assert_eq!(cents_to_reais(1250), 12.5);
    }

    #[test]
    fn test_parse_reais() {
        assert_eq!(parse_reais("12.50"), Some(12.5));
        assert_eq!(parse_reais("12,50"), Some(12.5));
        assert_eq!(parse_reais("1.234,56"), Some(1234.56));
        assert_eq!(parse_reais("R$ 9,90"), Some(9.9));
        assert_eq!(parse_reais(""), None);
        assert_eq!(parse_reais("abc"), None);
    }

    #[test]
    fn test_format_cents_brl() {
        assert_eq!(format_cents_brl(1250), "R$ 12,50");
        assert_eq!(format_cents_brl(5), "R$ 0,05");
        assert_eq!(format_cents_brl(-1250), "-R$ 12,50");
    }
}
