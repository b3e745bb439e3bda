use crate::error::AbpowerErr;
use crate::params::types::ParameterSet;
use crate::sample_size::compute_ss::compute_sample_size;
use crate::sample_size::error::MdeError;
use crate::sweep::types::{Feasibility, ResultRecord, TrafficAssessment};

/// Days assumed per month when converting monthly traffic into a daily rate.
const DAYS_PER_MONTH: f64 = 30.0;

/// Runs the sample size calculation across a range of MDEs, given in whole
/// percentage points, and derives the duration and traffic figures for each.
/// `None` sweeps the default 1% through 30%. Records come back in the order
/// of the input range, one per MDE, each independent of the others.
///
/// The whole range is validated before anything is computed, so a bad entry
/// anywhere means no partial table.
pub fn compute_sweep(
    params: &ParameterSet,
    maybe_mde_range: Option<&Vec<u32>>,
) -> Result<Vec<ResultRecord>, AbpowerErr> {
    let default_range: Vec<u32>;
    let mde_range: &[u32] = match maybe_mde_range {
        Some(range) => range,
        None => {
            default_range = (1..=30).collect();
            &default_range
        }
    };

    if mde_range.iter().any(|&mde_percent| mde_percent == 0) {
        return Err(MdeError::NonPositive(0.0).into());
    }

    let mut records = Vec::with_capacity(mde_range.len());
    for &mde_percent in mde_range {
        let mde_decimal = mde_percent as f64 / 100.0;
        let sample_size_per_variant = compute_sample_size(params, mde_decimal)?;
        let total_sample_size = sample_size_per_variant * params.num_variants();

        let population_split_percent =
            100.0 * total_sample_size as f64 / params.monthly_population();
        let daily_population = params.monthly_population() / DAYS_PER_MONTH;
        let duration_days = total_sample_size as f64 / daily_population;
        let duration_weeks = duration_days / 7.0;

        // Classify from the unrounded figures, then round once for display
        records.push(ResultRecord {
            mde_percent,
            mde_decimal,
            sample_size_per_variant,
            total_sample_size,
            population_split_percent: round2(population_split_percent),
            duration_days: round2(duration_days),
            duration_weeks: round2(duration_weeks),
            feasibility: Feasibility::from_duration_days(duration_days),
            traffic_assessment: TrafficAssessment::from_population_split(
                population_split_percent,
            ),
        });
    }

    Ok(records)
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
