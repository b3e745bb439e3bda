//----------------------------------------
// Crate error type
//----------------------------------------
use crate::params::error::*;
use crate::sample_size::error::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AbpowerErr {
    #[error("invalid parameter: {0}")]
    InvalidParameter(ParameterError),
    #[error("invalid MDE: {0}")]
    InvalidMde(MdeError),
}
