use crate::core::calculator::projection::Projection;
use crate::core::calculator::totals::DayTotals;

/// Reporting view of one entry: final totals once sealed, a projection while open.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DaySummary {
    Sealed(DayTotals),
    Open(Projection),
}

impl DaySummary {
    /// Net hours worked, final or so far.
    pub fn net_hours(&self) -> f64 {
        match self {
            DaySummary::Sealed(t) => t.net_hours(),
            DaySummary::Open(p) => p.hours_so_far(),
        }
    }

    pub fn break_minutes(&self) -> i64 {
        match self {
            DaySummary::Sealed(t) => t.break_minutes,
            DaySummary::Open(p) => p.break_minutes,
        }
    }
}
