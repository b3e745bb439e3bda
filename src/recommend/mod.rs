//----------------------------------------
// recommend mod
//----------------------------------------
pub mod compute_recommendations;
pub mod types;
