//! Post-hoc summary of a production plan.

use std::fmt;

use super::merit_order::round_output;
use super::types::AllocationPlan;

/// Aggregate figures derived from a plan and the load it was asked to cover.
///
/// Computed from the published (rounded) entries, so figures match what
/// the caller receives.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanSummary {
    /// Load requested (MW).
    pub load_mw: f64,
    /// Sum of assigned outputs (MW).
    pub total_mw: f64,
    /// Load left uncovered (MW, >= 0).
    pub shortfall_mw: f64,
    /// Output above the load, only possible through wind (MW, >= 0).
    pub surplus_mw: f64,
    /// Plants in the plan with non-zero output.
    pub committed: usize,
    /// Plants in the plan, committed or not.
    pub considered: usize,
}

impl PlanSummary {
    /// Summarizes `plan` against `load`.
    pub fn new(load: f64, plan: &AllocationPlan) -> Self {
        let total = plan.total_power();
        Self {
            load_mw: load,
            total_mw: round_output(total),
            shortfall_mw: round_output((load - total).max(0.0)),
            surplus_mw: round_output((total - load).max(0.0)),
            committed: plan.iter().filter(|e| e.p > 0.0).count(),
            considered: plan.len(),
        }
    }

    /// Whether the plan covers the load (to one decimal).
    pub fn is_covered(&self) -> bool {
        self.shortfall_mw == 0.0
    }
}

impl fmt::Display for PlanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Plan Summary ---")?;
        writeln!(f, "Load:              {:>8.1} MW", self.load_mw)?;
        writeln!(f, "Assigned:          {:>8.1} MW", self.total_mw)?;
        writeln!(f, "Shortfall:         {:>8.1} MW", self.shortfall_mw)?;
        writeln!(f, "Surplus:           {:>8.1} MW", self.surplus_mw)?;
        write!(
            f,
            "Plants committed:  {:>8} of {} considered",
            self.committed, self.considered
        )
    }
}
