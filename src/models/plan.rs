//! Dispatch plan (solution) model.
//!
//! A solved request yields a [`DispatchPlan`]: one [`CarAssignment`] per
//! used car, the rendered message, and the participant summary table.
//! An unsolvable request yields a [`FailureReport`] so the caller can
//! show why the day does not fit (demand vs. declared seats).

use serde::{Deserialize, Serialize};

use super::{Group, Preference};

/// One used car: its driver, the group it serves, and everyone riding in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarAssignment {
    /// Driver name.
    pub driver: String,
    /// The single group this car serves.
    pub group: Group,
    /// Rider names, driver first, no duplicates.
    pub riders: Vec<String>,
}

impl CarAssignment {
    /// Creates an assignment, placing the driver at the head of the
    /// rider list and dropping a duplicate driver entry if present.
    pub fn new(driver: impl Into<String>, group: Group, riders: Vec<String>) -> Self {
        let driver = driver.into();
        let mut ordered = Vec::with_capacity(riders.len() + 1);
        ordered.push(driver.clone());
        ordered.extend(riders.into_iter().filter(|r| *r != driver));
        Self {
            driver,
            group,
            riders: ordered,
        }
    }

    /// Number of people in the car, driver included.
    pub fn occupancy(&self) -> usize {
        self.riders.len()
    }
}

/// One row of the participant summary table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantEntry {
    /// Person name.
    pub name: String,
    /// Their preference for the day.
    pub preference: Preference,
    /// Seat capacity for drivers, `None` (rendered blank) otherwise.
    pub capacity: Option<u32>,
}

/// A feasible, solved dispatch for the day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchPlan {
    /// Used cars in display order: groups as fixed, drivers in roster order.
    pub assignments: Vec<CarAssignment>,
    /// Rendered dispatch message, ready to post.
    pub message: String,
    /// Attending people sorted by preference priority.
    pub participants: Vec<ParticipantEntry>,
    /// Solved objective value, for comparing runs.
    pub objective_value: f64,
}

/// Diagnostics for an unsolvable day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailureReport {
    /// Fixed failure message.
    pub message: String,
    /// How many people needed a seat.
    pub total_participants: usize,
    /// Seats declared by attending drivers.
    pub total_capacity: u32,
    /// Attending people sorted by preference priority.
    pub participants: Vec<ParticipantEntry>,
}

/// Terminal outcome of one optimization request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum DispatchOutcome {
    /// The solver found an optimal assignment.
    Solved(DispatchPlan),
    /// The model was infeasible or the solver otherwise failed.
    Failed(FailureReport),
}

impl DispatchOutcome {
    /// Whether this outcome carries a plan.
    pub fn is_solved(&self) -> bool {
        matches!(self, DispatchOutcome::Solved(_))
    }

    /// The plan, if solved.
    pub fn plan(&self) -> Option<&DispatchPlan> {
        match self {
            DispatchOutcome::Solved(plan) => Some(plan),
            DispatchOutcome::Failed(_) => None,
        }
    }

    /// The failure report, if failed.
    pub fn failure(&self) -> Option<&FailureReport> {
        match self {
            DispatchOutcome::Solved(_) => None,
            DispatchOutcome::Failed(report) => Some(report),
        }
    }
}
