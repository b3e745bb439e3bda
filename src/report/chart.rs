use crate::sweep::types::{Feasibility, ResultRecord};

/// Series for the four standard power-analysis panels: sample size per
/// variant against MDE, duration against MDE, traffic share against MDE, and
/// a feasibility score per MDE for coloring a feasibility map. Plain
/// parallel vectors in table order, so any plotting surface can consume
/// them; nothing in this crate draws.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub mde_percents: Vec<u32>,
    pub sample_sizes_per_variant: Vec<usize>,
    pub duration_days: Vec<f64>,
    pub population_split_percents: Vec<f64>,
    pub feasibility_scores: Vec<u8>,
}

/// Extracts chart-ready series from an analysis table.
pub fn chart_series(records: &[ResultRecord]) -> ChartSeries {
    ChartSeries {
        mde_percents: records.iter().map(|r| r.mde_percent).collect(),
        sample_sizes_per_variant: records.iter().map(|r| r.sample_size_per_variant).collect(),
        duration_days: records.iter().map(|r| r.duration_days).collect(),
        population_split_percents: records
            .iter()
            .map(|r| r.population_split_percent)
            .collect(),
        feasibility_scores: records
            .iter()
            .map(|r| feasibility_score(r.feasibility))
            .collect(),
    }
}

/// Color scale for the feasibility map; more feasible scores higher.
fn feasibility_score(feasibility: Feasibility) -> u8 {
    match feasibility {
        Feasibility::VeryShort => 4,
        Feasibility::Short => 3,
        Feasibility::Moderate => 2,
        Feasibility::Long => 1,
    }
}
