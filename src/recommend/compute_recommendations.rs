use crate::recommend::types::{Recommendation, RecommendationSet};
use crate::sweep::types::ResultRecord;

/// Longest duration a recommended test may run.
const MAX_FEASIBLE_DURATION_DAYS: f64 = 30.0;
/// Largest share of monthly traffic a recommended test may take.
const MAX_FEASIBLE_SPLIT_PERCENT: f64 = 50.0;
/// A quick test wraps up within a week.
const QUICK_MAX_DURATION_DAYS: f64 = 7.0;
/// A standard test runs between one and three weeks.
const STANDARD_MAX_DURATION_DAYS: f64 = 21.0;

/// Picks up to three representative scenarios from an analysis table: the
/// fastest acceptable test (quick), a mid-sensitivity one-to-three week test
/// (standard), and the most sensitive test still worth running (sensitive).
///
/// The picks are positional over the table's order, which by convention runs
/// from smallest MDE to largest: quick takes the last sub-week row, standard
/// the middle row of its bucket, sensitive the first feasible row. All three
/// are absent when nothing is feasible; quick and standard can be absent on
/// their own when their buckets are empty. Filters apply to the rounded
/// figures stored in the records.
pub fn compute_recommendations(records: &[ResultRecord]) -> RecommendationSet {
    let feasible: Vec<ResultRecord> = records
        .iter()
        .copied()
        .filter(|r| {
            r.duration_days <= MAX_FEASIBLE_DURATION_DAYS
                && r.population_split_percent <= MAX_FEASIBLE_SPLIT_PERCENT
        })
        .collect();

    let quick = feasible
        .iter()
        .filter(|r| r.duration_days <= QUICK_MAX_DURATION_DAYS)
        .last()
        .map(to_recommendation);

    let standard_bucket: Vec<&ResultRecord> = feasible
        .iter()
        .filter(|r| {
            r.duration_days > QUICK_MAX_DURATION_DAYS
                && r.duration_days <= STANDARD_MAX_DURATION_DAYS
        })
        .collect();
    let standard = standard_bucket
        .get(standard_bucket.len() / 2)
        .map(|r| to_recommendation(r));

    let sensitive = feasible.first().map(to_recommendation);

    RecommendationSet {
        quick,
        standard,
        sensitive,
    }
}

fn to_recommendation(record: &ResultRecord) -> Recommendation {
    Recommendation {
        mde_percent: record.mde_percent,
        duration_days: record.duration_days,
        total_sample_size: record.total_sample_size,
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::params::types::ParameterSet;
    use crate::sweep::compute_sweep::compute_sweep;
    use crate::sweep::types::{Feasibility, TrafficAssessment};

    fn record(
        mde_percent: u32,
        duration_days: f64,
        split_percent: f64,
        total_sample_size: usize,
    ) -> ResultRecord {
        ResultRecord {
            mde_percent,
            mde_decimal: mde_percent as f64 / 100.0,
            sample_size_per_variant: total_sample_size / 2,
            total_sample_size,
            population_split_percent: split_percent,
            duration_days,
            duration_weeks: duration_days / 7.0,
            feasibility: Feasibility::from_duration_days(duration_days),
            traffic_assessment: TrafficAssessment::from_population_split(split_percent),
        }
    }

    #[test]
    fn empty_table_gives_no_recommendations() {
        assert_eq!(compute_recommendations(&[]), RecommendationSet::default());
    }

    #[test]
    fn nothing_feasible_gives_no_recommendations() {
        let records = vec![record(1, 60.0, 40.0, 50_000), record(2, 45.0, 20.0, 12_000)];
        assert_eq!(
            compute_recommendations(&records),
            RecommendationSet::default()
        );
    }

    #[test]
    fn heavy_traffic_share_is_not_feasible() {
        // Short enough, but takes 80% of monthly traffic
        let records = vec![record(1, 5.0, 80.0, 40_000)];
        assert_eq!(
            compute_recommendations(&records),
            RecommendationSet::default()
        );
    }

    #[test]
    fn quick_takes_last_sub_week_row() {
        let records = vec![
            record(1, 20.0, 30.0, 20_000),
            record(5, 6.0, 10.0, 6_000),
            record(10, 2.0, 3.0, 2_000),
        ];
        let recommendations = compute_recommendations(&records);
        assert_eq!(
            recommendations.quick,
            Some(Recommendation {
                mde_percent: 10,
                duration_days: 2.0,
                total_sample_size: 2_000,
            })
        );
    }

    #[test]
    fn lone_sub_week_row_is_quick() {
        let records = vec![record(5, 6.0, 10.0, 6_000)];
        let recommendations = compute_recommendations(&records);
        assert_eq!(
            recommendations.quick.expect("no quick pick").mde_percent,
            5
        );
        assert_eq!(recommendations.standard, None);
        assert_eq!(recommendations.quick, recommendations.sensitive);
    }

    #[test]
    fn standard_takes_middle_of_three() {
        let records = vec![
            record(2, 8.0, 20.0, 8_000),
            record(3, 14.0, 15.0, 14_000),
            record(4, 20.0, 10.0, 20_000),
        ];
        let recommendations = compute_recommendations(&records);
        assert_eq!(
            recommendations.standard.expect("no standard pick").mde_percent,
            3
        );
    }

    #[test]
    fn standard_takes_upper_middle_of_four() {
        let records = vec![
            record(2, 8.0, 20.0, 8_000),
            record(3, 10.0, 15.0, 10_000),
            record(4, 12.0, 12.0, 12_000),
            record(5, 14.0, 10.0, 14_000),
        ];
        let recommendations = compute_recommendations(&records);
        assert_eq!(
            recommendations.standard.expect("no standard pick").mde_percent,
            4
        );
    }

    #[test]
    fn sensitive_takes_first_feasible_row() {
        let records = vec![
            record(1, 45.0, 60.0, 45_000),
            record(2, 25.0, 30.0, 25_000),
            record(3, 10.0, 12.0, 10_000),
        ];
        let recommendations = compute_recommendations(&records);
        assert_eq!(
            recommendations.sensitive.expect("no sensitive pick").mde_percent,
            2
        );
    }

    #[test]
    fn sensitive_can_stand_alone() {
        // One feasible row, too slow for quick and standard alike
        let records = vec![record(1, 25.0, 30.0, 25_000)];
        let recommendations = compute_recommendations(&records);
        assert_eq!(recommendations.quick, None);
        assert_eq!(recommendations.standard, None);
        assert_eq!(
            recommendations.sensitive.expect("no sensitive pick").mde_percent,
            1
        );
    }

    #[test]
    fn high_traffic_sweep_recommendations() {
        // 3% baseline with 50k monthly users; even the 1 point MDE finishes
        // inside a week, so the one-to-three-week window is empty
        let params = ParameterSet::new(0.03, 50_000.0, 2, 0.8, 0.05)
            .expect("failed to construct parameter set");
        let records = compute_sweep(&params, None).expect("failed to compute sweep");
        let recommendations = compute_recommendations(&records);

        assert_eq!(
            recommendations.quick,
            Some(Recommendation {
                mde_percent: 30,
                duration_days: 0.01,
                total_sample_size: 12,
            })
        );
        assert_eq!(recommendations.standard, None);
        assert_eq!(
            recommendations.sensitive,
            Some(Recommendation {
                mde_percent: 1,
                duration_days: 5.48,
                total_sample_size: 9_138,
            })
        );
    }

    #[test]
    fn moderate_traffic_sweep_recommendations() {
        // 5% baseline with 30k monthly users; the 1 point MDE lands in the
        // standard window and is also the most sensitive feasible row
        let params = ParameterSet::new(0.05, 30_000.0, 2, 0.8, 0.05)
            .expect("failed to construct parameter set");
        let records = compute_sweep(&params, None).expect("failed to compute sweep");
        let recommendations = compute_recommendations(&records);

        assert_eq!(
            recommendations.quick,
            Some(Recommendation {
                mde_percent: 30,
                duration_days: 0.02,
                total_sample_size: 18,
            })
        );
        assert_eq!(
            recommendations.standard,
            Some(Recommendation {
                mde_percent: 1,
                duration_days: 14.91,
                total_sample_size: 14_914,
            })
        );
        assert_eq!(recommendations.standard, recommendations.sensitive);
    }
}
