use statrs::distribution::{ContinuousCDF, Normal};

/// Quantile (inverse CDF) of the standard normal distribution. Probabilities
/// are validated where the user hands them over, at parameter construction,
/// so out-of-range arguments here are a programming error and assert.
pub fn std_normal_quantile(p: f64) -> f64 {
    assert!(p > 0.0 && p < 1.0, "p must be in (0,1)");
    let std_normal = Normal::new(0.0, 1.0).unwrap();
    std_normal.inverse_cdf(p)
}
