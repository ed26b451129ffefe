//! Dispatch domain models.
//!
//! Core data types for one travel day: the people on the roster, the
//! closed preference/group vocabulary, and the solution shapes produced
//! by the optimizer.

mod person;
mod plan;
mod roster;

pub use person::{Group, Person, Preference};
pub use plan::{CarAssignment, DispatchOutcome, DispatchPlan, FailureReport, ParticipantEntry};
pub use roster::{Roster, RosterRow};
