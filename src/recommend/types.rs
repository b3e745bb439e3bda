/// One suggested test design, lifted straight from an analysis table row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Recommendation {
    pub mde_percent: u32,
    pub duration_days: f64,
    pub total_sample_size: usize,
}

/// The three representative scenarios picked out of an analysis table. Any
/// of them can be absent when no row qualifies.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RecommendationSet {
    pub quick: Option<Recommendation>,
    pub standard: Option<Recommendation>,
    pub sensitive: Option<Recommendation>,
}
