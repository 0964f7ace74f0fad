//! Number formatting for stat cards and fact lists.

use crate::country::Country;

const THOUSAND: f64 = 1_000.0;
const MILLION: f64 = 1_000_000.0;
const BILLION: f64 = 1_000_000_000.0;

/// Compact form for headline totals: `4.6B`, `746M`, `12K`, `950`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn abbreviate(value: u64) -> String {
    let n = value as f64;
    if n >= BILLION {
        format!("{:.1}B", n / BILLION)
    } else if n >= MILLION {
        format!("{:.0}M", n / MILLION)
    } else if n >= THOUSAND {
        format!("{:.0}K", n / THOUSAND)
    } else {
        value.to_string()
    }
}

/// Spelled-out form for a single country: `1.4 billion`, `83.2 million`, `12 thousand`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn describe_population(value: u64) -> String {
    let n = value as f64;
    if n >= BILLION {
        format!("{:.1} billion", n / BILLION)
    } else if n >= MILLION {
        format!("{:.1} million", n / MILLION)
    } else if n >= THOUSAND {
        format!("{:.0} thousand", n / THOUSAND)
    } else {
        group_thousands(value)
    }
}

/// `1234567` -> `"1,234,567"`.
#[must_use]
pub fn group_thousands(value: u64) -> String {
    group_digits(&value.to_string())
}

/// Area with grouped digits and at most three decimals: `"357,114 km²"`, `"0.44 km²"`.
#[must_use]
pub fn format_area(km2: f64) -> String {
    let fixed = format!("{:.3}", km2.abs());
    let (int_part, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let sign = if km2 < 0.0 && fixed.bytes().any(|b| matches!(b, b'1'..=b'9')) { "-" } else { "" };
    let grouped = group_digits(int_part);

    if fraction.is_empty() {
        format!("{sign}{grouped} km²")
    } else {
        format!("{sign}{grouped}.{fraction} km²")
    }
}

/// Combined population of a country list.
#[must_use]
pub fn total_population(countries: &[Country]) -> u64 {
    countries.iter().map(|c| c.population).sum()
}

fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_digits_boundaries() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(123_456_789), "123,456,789");
    }

    #[test]
    fn test_area_trims_trailing_zeros() {
        assert_eq!(format_area(357_114.0), "357,114 km²");
        assert_eq!(format_area(0.44), "0.44 km²");
        assert_eq!(format_area(2.5), "2.5 km²");
    }
}
