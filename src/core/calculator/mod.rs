pub mod duration;
pub mod membership;
pub mod totals;
