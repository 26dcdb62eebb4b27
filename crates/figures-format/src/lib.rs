//! Figures Format - display formatting for control-figure amounts
//!
//! Turns raw numeric figures into the strings shown on summary cards:
//! - Exactly two decimal places
//! - Comma thousands grouping on the integer part only
//! - No currency symbol (callers prepend their own prefix)
//!
//! # Example
//!
//! ```rust
//! use figures_format::format_amount;
//!
//! assert_eq!(format_amount(452_300.75).unwrap(), "452,300.75");
//! assert_eq!(format_amount(1200.0).unwrap(), "1,200.00");
//! ```

#![warn(unreachable_pub)]

/// Thousands separator inserted into the integer part
pub const GROUP_SEPARATOR: char = ',';

/// Number of decimal places in every formatted amount
pub const DECIMAL_PLACES: usize = 2;

/// Formatting errors
#[derive(Debug, Clone, Copy, thiserror::Error)]
pub enum FormatError {
    /// NaN or infinite input
    #[error("cannot format non-finite value: {value}")]
    NonFinite {
        /// The rejected value
        value: f64,
    },
}

/// Format an amount with two fixed decimals and comma thousands grouping.
///
/// Negative values keep a leading `-`; anything that rounds to zero is
/// rendered unsigned.
///
/// # Errors
/// - `FormatError::NonFinite` for NaN and infinities
pub fn format_amount(value: f64) -> Result<String, FormatError> {
    if !value.is_finite() {
        return Err(FormatError::NonFinite { value });
    }

    let fixed = fixed_two_places(value.abs());
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let negative = value < 0.0 && fixed.bytes().any(|b| matches!(b, b'1'..=b'9'));

    let mut out = String::with_capacity(fixed.len() + fixed.len() / 3 + 1);
    if negative {
        out.push('-');
    }
    out.push_str(&group_thousands(integer));
    out.push('.');
    out.push_str(fraction);
    Ok(out)
}

/// Render a finite, non-negative magnitude with exactly two decimals.
///
/// `{:.2}` resolves an exact half-cent to the even digit; display amounts
/// resolve it upwards instead, so `0.125` becomes `0.13`. Only values whose
/// scaled form is exactly representable can be ties, which the fused
/// multiply-add residual confirms.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn fixed_two_places(magnitude: f64) -> String {
    let scaled = magnitude * 100.0;
    let exact_tie = scaled.fract() == 0.5 && magnitude.mul_add(100.0, -scaled) == 0.0;
    if !exact_tie {
        return format!("{:.*}", DECIMAL_PLACES, magnitude);
    }

    // A fractional part of one half implies scaled < 2^52.
    let cents = scaled.trunc() as u64 + 1;
    format!("{}.{:02}", cents / 100, cents % 100)
}

/// Format an amount and prepend a display prefix such as `"Q "` or `"$"`.
///
/// # Errors
/// - `FormatError::NonFinite` for NaN and infinities
#[inline]
pub fn format_prefixed(prefix: &str, value: f64) -> Result<String, FormatError> {
    Ok(format!("{prefix}{}", format_amount(value)?))
}

/// Insert a separator every three digits, counting from the right.
///
/// Expects a plain run of ASCII digits (no sign, no decimal point).
#[must_use]
pub fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_reference_amounts() {
        assert_eq!(format_amount(452_300.75).unwrap(), "452,300.75");
        assert_eq!(format_amount(0.0).unwrap(), "0.00");
        assert_eq!(format_amount(1200.0).unwrap(), "1,200.00");
        assert_eq!(format_amount(54_321.12).unwrap(), "54,321.12");
        assert_eq!(format_amount(128.0).unwrap(), "128.00");
    }

    #[test]
    fn groups_only_the_integer_part() {
        assert_eq!(format_amount(1_234_567.891).unwrap(), "1,234,567.89");
        assert_eq!(format_amount(999.999).unwrap(), "1,000.00");
        assert_eq!(format_amount(100.5).unwrap(), "100.50");
    }

    #[test]
    fn exact_half_cents_round_up() {
        assert_eq!(format_amount(0.125).unwrap(), "0.13");
        assert_eq!(format_amount(1234.125).unwrap(), "1,234.13");
        assert_eq!(format_amount(0.375).unwrap(), "0.38");
        assert_eq!(format_amount(999_999.875).unwrap(), "999,999.88");
        assert_eq!(format_amount(-0.125).unwrap(), "-0.13");
        assert_eq!(format_amount(0.005).unwrap(), "0.01");
    }

    #[test]
    fn inexact_half_cents_follow_the_stored_value() {
        // 1.005 is stored just below the midpoint
        assert_eq!(format_amount(1.005).unwrap(), "1.00");
        assert_eq!(format_amount(2.675).unwrap(), "2.67");
    }

    #[test]
    fn negative_amounts_keep_their_sign() {
        assert_eq!(format_amount(-1234.5).unwrap(), "-1,234.50");
        assert_eq!(format_amount(-0.5).unwrap(), "-0.50");
    }

    #[test]
    fn negative_zero_is_unsigned() {
        assert_eq!(format_amount(-0.0).unwrap(), "0.00");
        assert_eq!(format_amount(-0.001).unwrap(), "0.00");
    }

    #[test]
    fn non_finite_is_rejected() {
        assert!(matches!(
            format_amount(f64::NAN),
            Err(FormatError::NonFinite { .. })
        ));
        assert!(format_amount(f64::INFINITY).is_err());
        assert!(format_amount(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn prefix_is_plain_concatenation() {
        assert_eq!(format_prefixed("Q ", 800.0).unwrap(), "Q 800.00");
        assert_eq!(format_prefixed("", 800.0).unwrap(), "800.00");
        assert!(format_prefixed("$", f64::NAN).is_err());
    }

    #[test]
    fn group_thousands_boundaries() {
        assert_eq!(group_thousands(""), "");
        assert_eq!(group_thousands("7"), "7");
        assert_eq!(group_thousands("123"), "123");
        assert_eq!(group_thousands("1234"), "1,234");
        assert_eq!(group_thousands("123456"), "123,456");
        assert_eq!(group_thousands("1234567"), "1,234,567");
    }

    #[test]
    fn error_display() {
        let err = format_amount(f64::INFINITY).unwrap_err();
        assert!(err.to_string().contains("non-finite"));
    }
}
