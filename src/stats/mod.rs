//----------------------------------------
// stats mod
//----------------------------------------
pub(crate) mod std_normal;
