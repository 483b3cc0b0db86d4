//! Numeric keys as JavaScript sees them.
//!
//! Node ids double as DOM `data-id` values, so a key must print exactly
//! like `String(number)` does in the browser: `-0` is `"0"`, infinities
//! are `"Infinity"`, and magnitudes outside `[1e-6, 1e21)` use exponent
//! notation with an explicit sign.

use std::fmt;

/// A number key ordered by `PartialOrd` and labelled like a JS number.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct NumberKey(pub f64);

impl NumberKey {
    /// The wrapped value.
    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for NumberKey {
    fn from(value: f64) -> Self {
        NumberKey(value)
    }
}

impl fmt::Display for NumberKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        if value == 0.0 {
            return f.write_str("0");
        }
        if value.is_nan() {
            return f.write_str("NaN");
        }
        if value.is_infinite() {
            return f.write_str(if value > 0.0 { "Infinity" } else { "-Infinity" });
        }
        if (1e-6..1e21).contains(&value.abs()) {
            return write!(f, "{value}");
        }

        // `{:e}` already yields the shortest round-trip digits.
        let scientific = format!("{value:e}");
        match scientific.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                write!(f, "{mantissa}e+{exponent}")
            }
            _ => f.write_str(&scientific),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(value: f64) -> String {
        NumberKey(value).to_string()
    }

    #[test]
    fn test_integers_and_fractions() {
        assert_eq!(label(10.0), "10");
        assert_eq!(label(-7.0), "-7");
        assert_eq!(label(2.5), "2.5");
        assert_eq!(label(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn test_negative_zero_is_zero() {
        assert_eq!(label(-0.0), "0");
        assert_eq!(label(0.0), "0");
    }

    #[test]
    fn test_large_magnitudes_use_signed_exponent() {
        assert_eq!(label(1e20), "100000000000000000000");
        assert_eq!(label(1e21), "1e+21");
        assert_eq!(label(-1.23e22), "-1.23e+22");
    }

    #[test]
    fn test_small_magnitudes() {
        assert_eq!(label(0.000001), "0.000001");
        assert_eq!(label(1e-7), "1e-7");
        assert_eq!(label(-1.5e-9), "-1.5e-9");
    }

    #[test]
    fn test_infinities() {
        assert_eq!(label(f64::INFINITY), "Infinity");
        assert_eq!(label(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn test_orders_like_f64() {
        assert!(NumberKey(-0.0) == NumberKey(0.0));
        assert!(NumberKey(3.0) < NumberKey(4.0));
        assert!(NumberKey(f64::NAN).partial_cmp(&NumberKey(f64::NAN)).is_none());
    }
}
