use std::fmt;

/// How long a test would have to run before reaching its required sample
/// size, bucketed for quick reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feasibility {
    VeryShort,
    Short,
    Moderate,
    Long,
}

impl Feasibility {
    /// Classifies an unrounded duration in days. Boundary values land in the
    /// lower bucket: exactly 14 days is Short, not Moderate.
    pub fn from_duration_days(duration_days: f64) -> Self {
        if duration_days <= 7.0 {
            Feasibility::VeryShort
        } else if duration_days <= 14.0 {
            Feasibility::Short
        } else if duration_days <= 30.0 {
            Feasibility::Moderate
        } else {
            Feasibility::Long
        }
    }
}

impl fmt::Display for Feasibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Feasibility::VeryShort => "Very Short",
            Feasibility::Short => "Short",
            Feasibility::Moderate => "Moderate",
            Feasibility::Long => "Long",
        };
        write!(f, "{label}")
    }
}

/// How much of the available monthly traffic the test would consume.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrafficAssessment {
    Excellent,
    Good,
    Challenging,
    InsufficientTraffic,
}

impl TrafficAssessment {
    /// Classifies an unrounded share of monthly traffic, in percent. Exactly
    /// 50% is still Good, exactly 75% still Challenging.
    pub fn from_population_split(split_percent: f64) -> Self {
        if split_percent <= 25.0 {
            TrafficAssessment::Excellent
        } else if split_percent <= 50.0 {
            TrafficAssessment::Good
        } else if split_percent <= 75.0 {
            TrafficAssessment::Challenging
        } else {
            TrafficAssessment::InsufficientTraffic
        }
    }
}

impl fmt::Display for TrafficAssessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TrafficAssessment::Excellent => "Excellent",
            TrafficAssessment::Good => "Good",
            TrafficAssessment::Challenging => "Challenging",
            TrafficAssessment::InsufficientTraffic => "Insufficient Traffic",
        };
        write!(f, "{label}")
    }
}

/// One row of the analysis table: everything derived for a single MDE. The
/// float fields hold display-rounded values (two decimals); classifications
/// are made from the unrounded figures before rounding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResultRecord {
    pub mde_percent: u32,
    pub mde_decimal: f64,
    pub sample_size_per_variant: usize,
    pub total_sample_size: usize,
    pub population_split_percent: f64,
    pub duration_days: f64,
    pub duration_weeks: f64,
    pub feasibility: Feasibility,
    pub traffic_assessment: TrafficAssessment,
}
