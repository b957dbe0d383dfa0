//! ETH amount validation and unit conversion.
//!
//! The entered amount is kept as the raw string the user typed. Validation
//! happens on every action, before any external call: the input must be
//! non-empty, numeric, and strictly positive. No other normalization is
//! performed.

use crate::errors::CoreError;
use crate::types::{Wei, WEI_PER_ETH};

/// Validates an entered ETH amount, returning the parsed value.
pub fn validate(input: &str) -> Result<f64, CoreError> {
    if input.is_empty() {
        return Err(CoreError::InvalidAmount(
            "Please enter a valid ETH amount".to_string(),
        ));
    }

    let value: f64 = input.parse().map_err(|_| {
        CoreError::InvalidAmount("Please enter a valid ETH amount".to_string())
    })?;

    if !value.is_finite() || value <= 0.0 {
        return Err(CoreError::InvalidAmount(
            "Please enter a valid ETH amount".to_string(),
        ));
    }

    Ok(value)
}

/// Converts an entered ETH amount to wei by exact decimal scaling.
///
/// Used for transaction values. Rejects inputs with more than 18 fractional
/// digits rather than rounding them.
pub fn to_wei(input: &str) -> Result<Wei, CoreError> {
    validate(input)?;

    // Exact conversion only accepts plain decimal form.
    let (whole, frac) = match input.split_once('.') {
        Some((whole, frac)) => (whole, frac),
        None => (input, ""),
    };

    if !whole.chars().all(|c| c.is_ascii_digit())
        || !frac.chars().all(|c| c.is_ascii_digit())
    {
        return Err(CoreError::InvalidAmount(format!(
            "Not a plain decimal amount: {}",
            input
        )));
    }

    if frac.len() > 18 {
        return Err(CoreError::InvalidAmount(format!(
            "More than 18 decimal places: {}",
            input
        )));
    }

    let whole: Wei = if whole.is_empty() {
        0
    } else {
        whole.parse().map_err(|e| {
            CoreError::InvalidAmount(format!("Invalid amount {}: {}", input, e))
        })?
    };

    let frac_wei: Wei = if frac.is_empty() {
        0
    } else {
        let padded = format!("{:0<18}", frac);
        padded.parse().map_err(|e| {
            CoreError::InvalidAmount(format!("Invalid amount {}: {}", input, e))
        })?
    };

    whole
        .checked_mul(WEI_PER_ETH)
        .and_then(|w| w.checked_add(frac_wei))
        .ok_or_else(|| CoreError::InvalidAmount(format!("Amount too large: {}", input)))
}

/// Converts an entered ETH amount to the quoting API's base-unit integer,
/// computed as `floor(parsed * 1e18)`.
///
/// This truncating float conversion is what the quoting endpoint receives;
/// transaction values use [`to_wei`] instead.
pub fn to_quote_units(input: &str) -> Result<Wei, CoreError> {
    let value = validate(input)?;
    let scaled = (value * 1e18).floor();

    if scaled >= u128::MAX as f64 {
        return Err(CoreError::InvalidAmount(format!(
            "Amount too large: {}",
            input
        )));
    }

    Ok(scaled as Wei)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty() {
        assert!(matches!(validate(""), Err(CoreError::InvalidAmount(_))));
    }

    #[test]
    fn test_rejects_non_numeric() {
        for input in ["abc", "1.2.3", "one", "0x10", " "] {
            assert!(
                matches!(validate(input), Err(CoreError::InvalidAmount(_))),
                "accepted {:?}",
                input
            );
        }
    }

    #[test]
    fn test_rejects_non_positive() {
        for input in ["0", "0.0", "-1", "-0.5"] {
            assert!(
                matches!(validate(input), Err(CoreError::InvalidAmount(_))),
                "accepted {:?}",
                input
            );
        }
    }

    #[test]
    fn test_rejects_non_finite() {
        for input in ["NaN", "inf", "infinity"] {
            assert!(
                matches!(validate(input), Err(CoreError::InvalidAmount(_))),
                "accepted {:?}",
                input
            );
        }
    }

    #[test]
    fn test_accepts_positive_amounts() {
        assert_eq!(validate("1").unwrap(), 1.0);
        assert_eq!(validate("0.25").unwrap(), 0.25);
    }

    #[test]
    fn test_to_wei_exact() {
        assert_eq!(to_wei("1").unwrap(), WEI_PER_ETH);
        assert_eq!(to_wei("2.5").unwrap(), 2_500_000_000_000_000_000);
        assert_eq!(to_wei("0.000000000000000001").unwrap(), 1);
        assert_eq!(to_wei(".5").unwrap(), 500_000_000_000_000_000);
    }

    #[test]
    fn test_to_wei_rejects_too_many_decimals() {
        assert!(matches!(
            to_wei("1.0000000000000000001"),
            Err(CoreError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_to_wei_rejects_exponent_form() {
        assert!(matches!(to_wei("1e2"), Err(CoreError::InvalidAmount(_))));
    }

    #[test]
    fn test_quote_units_floor_semantics() {
        assert_eq!(to_quote_units("1").unwrap(), (1f64 * 1e18).floor() as u128);
        assert_eq!(
            to_quote_units("2.5").unwrap(),
            (2.5f64 * 1e18).floor() as u128
        );
        assert_eq!(
            to_quote_units("0.1").unwrap(),
            (0.1f64 * 1e18).floor() as u128
        );
    }

    #[test]
    fn test_quote_units_rejects_invalid() {
        assert!(to_quote_units("").is_err());
        assert!(to_quote_units("-3").is_err());
    }
}
