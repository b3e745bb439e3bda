//----------------------------------------
// Sample size errors
//----------------------------------------

use crate::error::AbpowerErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MdeError {
    #[error("minimum detectable effect should be positive; got {0}")]
    NonPositive(f64),
}

impl Into<AbpowerErr> for MdeError {
    fn into(self) -> AbpowerErr {
        AbpowerErr::InvalidMde(self)
    }
}
