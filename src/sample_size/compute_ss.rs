use crate::error::AbpowerErr;
use crate::params::types::ParameterSet;
use crate::sample_size::error::MdeError;

/// Computes the sample size per variant needed to detect an absolute lift of
/// `mde_decimal` over the baseline conversion rate:
///
/// ```text
/// n = ceil( 2 * (z_alpha_2 + z_beta)^2 * p * (1 - p) / mde^2 )
/// ```
///
/// This is the standard two-proportion z-test formula under equal allocation,
/// with the baseline rate `p` approximating the variance of both arms. The
/// result is rounded up; undershooting the required size is the failure mode
/// worth avoiding.
pub fn compute_sample_size(params: &ParameterSet, mde_decimal: f64) -> Result<usize, AbpowerErr> {
    // mde appears squared in a denominator, so zero and negative effects are
    // meaningless; NaN fails this check too
    if !(mde_decimal > 0.0) {
        return Err(MdeError::NonPositive(mde_decimal).into());
    }

    let p = params.baseline_rate();
    let theta = params.z_alpha_2() + params.z_beta();
    let n = 2.0 * theta.powi(2) * p * (1.0 - p) / mde_decimal.powi(2);
    Ok(n.ceil() as usize)
}
