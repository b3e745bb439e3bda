//----------------------------------------
// report mod
//----------------------------------------
pub mod chart;
pub mod csv;
pub mod table;

pub use crate::report::chart::{chart_series, ChartSeries};
pub use crate::report::csv::{csv_string, write_csv};
pub use crate::report::table::{render_recommendations, render_table};
