use crate::error::AbpowerErr;
use crate::params::error::ParameterError;
use crate::stats::std_normal::std_normal_quantile;

/// Validated inputs for one power analysis, plus the two standard normal
/// critical values derived from them. Fields are private so the critical
/// values can never drift out of sync with `alpha` and `power`; changing a
/// parameter means constructing a new set.
#[derive(Debug, Clone, Copy)]
pub struct ParameterSet {
    baseline_rate: f64,
    monthly_population: f64,
    num_variants: usize,
    power: f64,
    alpha: f64,
    z_alpha_2: f64,
    z_beta: f64,
}

impl ParameterSet {
    /// Validates the five inputs and freezes the derived critical values
    /// `z_alpha_2 = quantile(1 - alpha / 2)` and `z_beta = quantile(power)`.
    pub fn new(
        baseline_rate: f64,
        monthly_population: f64,
        num_variants: usize,
        power: f64,
        alpha: f64,
    ) -> Result<Self, AbpowerErr> {
        if !(baseline_rate > 0.0 && baseline_rate < 1.0) {
            return Err(ParameterError::BaselineRateOutOfBounds(baseline_rate).into());
        }
        if !(alpha > 0.0 && alpha < 1.0) {
            return Err(ParameterError::AlphaOutOfBounds(alpha).into());
        }
        if !(power > 0.0 && power < 1.0) {
            return Err(ParameterError::PowerOutOfBounds(power).into());
        }
        if num_variants < 2 {
            return Err(ParameterError::TooFewVariants(num_variants).into());
        }
        if !(monthly_population > 0.0 && monthly_population.is_finite()) {
            return Err(ParameterError::MonthlyPopulationOutOfBounds(monthly_population).into());
        }

        // Two-tailed test
        let z_alpha_2 = std_normal_quantile(1.0 - alpha / 2.0);
        let z_beta = std_normal_quantile(power);

        Ok(ParameterSet {
            baseline_rate,
            monthly_population,
            num_variants,
            power,
            alpha,
            z_alpha_2,
            z_beta,
        })
    }

    pub fn baseline_rate(&self) -> f64 {
        self.baseline_rate
    }

    pub fn monthly_population(&self) -> f64 {
        self.monthly_population
    }

    pub fn num_variants(&self) -> usize {
        self.num_variants
    }

    pub fn power(&self) -> f64 {
        self.power
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn z_alpha_2(&self) -> f64 {
        self.z_alpha_2
    }

    pub fn z_beta(&self) -> f64 {
        self.z_beta
    }
}
