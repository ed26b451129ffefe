//! Car assignment for a single travel day.
//!
//! Given a roster of people — home area, car capacity, and a departure
//! preference for the day — this crate builds a binary integer program,
//! solves it with `good_lp`, and turns the solution into grouped
//! driver/passenger assignments plus a posting-ready dispatch message.
//! An unsolvable day produces a demand-vs-capacity diagnostic instead.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Person`, `Roster`, `Group`,
//!   `Preference`, and the `DispatchOutcome` solution shapes
//! - **`validation`**: Roster parsing and integrity checks
//! - **`solver`**: The MILP model builder and solver adapter
//! - **`report`**: Message rendering and participant summaries
//!
//! # Usage
//!
//! ```no_run
//! use std::collections::HashMap;
//! use car_dispatch::models::{Person, Preference, Roster};
//! use car_dispatch::run_dispatch;
//!
//! let roster = Roster::new(vec![
//!     Person::new("Akira", "north", Preference::EarlyDeparture).with_capacity(4),
//!     Person::new("Ben", "north", Preference::EarlyDeparture),
//! ]);
//! let outcome = run_dispatch(&roster, &HashMap::new());
//! if let Some(plan) = outcome.plan() {
//!     println!("{}", plan.message);
//! }
//! ```

pub mod models;
pub mod report;
pub mod solver;
pub mod validation;

pub use solver::run_dispatch;
