//----------------------------------------
// Parameter errors
//----------------------------------------

use crate::error::AbpowerErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParameterError {
    #[error("baseline conversion rate should be in (0, 1); got {0}")]
    BaselineRateOutOfBounds(f64),
    #[error("significance level should be in (0, 1); got {0}")]
    AlphaOutOfBounds(f64),
    #[error("statistical power should be in (0, 1); got {0}")]
    PowerOutOfBounds(f64),
    #[error("number of variants should be at least 2, control included; got {0}")]
    TooFewVariants(usize),
    #[error("monthly population should be positive and finite; got {0}")]
    MonthlyPopulationOutOfBounds(f64),
}

impl Into<AbpowerErr> for ParameterError {
    fn into(self) -> AbpowerErr {
        AbpowerErr::InvalidParameter(self)
    }
}
