//! Numeric guards shared by the score transforms.

use hotnet_common::{HeatError, Result};

/// `-log10(value)` for a p/q-value of `gene`.
///
/// Zero, negative and NaN values are rejected instead of producing
/// infinities or NaN heat.
pub fn neg_log10(gene: &str, value: f64) -> Result<f64> {
    if value > 0.0 && value.is_finite() {
        // -log10(1) is -0.0; heat is reported as +0.0
        Ok(-value.log10() + 0.0)
    } else {
        Err(HeatError::InvalidScore { gene: gene.to_string(), value })
    }
}

/// Median of three values.
pub fn median3(a: f64, b: f64, c: f64) -> f64 {
    a.max(b).min(a.min(b).max(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neg_log10() {
        assert!((neg_log10("G", 0.001).unwrap() - 3.0).abs() < 1e-12);
        assert_eq!(neg_log10("G", 1.0).unwrap().to_bits(), 0.0f64.to_bits());
    }

    #[test]
    fn test_neg_log10_rejects_non_positive() {
        assert!(matches!(neg_log10("TP53", 0.0), Err(HeatError::InvalidScore { .. })));
        assert!(neg_log10("TP53", -0.1).is_err());
        assert!(neg_log10("TP53", f64::NAN).is_err());
    }

    #[test]
    fn test_median3() {
        assert_eq!(median3(1.0, 2.0, 3.0), 2.0);
        assert_eq!(median3(3.0, 1.0, 2.0), 2.0);
        assert_eq!(median3(2.0, 3.0, 1.0), 2.0);
        assert_eq!(median3(0.0, 0.0, 0.5), 0.0);
        assert_eq!(median3(0.2, 0.2, 0.2), 0.2);
    }
}
