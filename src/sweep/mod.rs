//----------------------------------------
// sweep mod
//----------------------------------------
pub mod compute_sweep;
pub mod types;
