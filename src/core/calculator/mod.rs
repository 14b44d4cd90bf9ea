pub mod projection;
pub mod totals;
