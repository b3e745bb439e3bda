use std::io;
use std::path::Path;

use itertools::Itertools;

use crate::sweep::types::ResultRecord;

/// Column order follows the record's fields.
const CSV_HEADER: [&str; 9] = [
    "mde_percent",
    "mde_decimal",
    "sample_size_per_variant",
    "total_sample_size",
    "population_split_percent",
    "duration_days",
    "duration_weeks",
    "feasibility",
    "traffic_assessment",
];

/// Serializes records as comma separated rows under a header line. Numeric
/// columns carry the rounded display values stored in the records; the two
/// classification columns carry their human readable labels. No field ever
/// contains a comma, so no quoting is needed.
pub fn csv_string(records: &[ResultRecord]) -> String {
    let header = CSV_HEADER.iter().join(",");
    let rows = records.iter().map(csv_row).join("\n");
    if rows.is_empty() {
        format!("{header}\n")
    } else {
        format!("{header}\n{rows}\n")
    }
}

/// Writes the CSV for an analysis table to disk.
pub fn write_csv<P: AsRef<Path>>(path: P, records: &[ResultRecord]) -> io::Result<()> {
    std::fs::write(path, csv_string(records))
}

fn csv_row(record: &ResultRecord) -> String {
    [
        record.mde_percent.to_string(),
        record.mde_decimal.to_string(),
        record.sample_size_per_variant.to_string(),
        record.total_sample_size.to_string(),
        record.population_split_percent.to_string(),
        record.duration_days.to_string(),
        record.duration_weeks.to_string(),
        record.feasibility.to_string(),
        record.traffic_assessment.to_string(),
    ]
    .iter()
    .join(",")
}
