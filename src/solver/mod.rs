//! MILP formulation of the car assignment problem.
//!
//! Bridges the roster domain model to `good_lp`. Builds a binary
//! integer program from the day's roster, solves it in a single call,
//! and decodes the solution into grouped car assignments.
//!
//! # Model
//!
//! Variables (all binary), keyed by indices into the roster:
//! - `ride[(m, c)]` — participant `m` rides with driver `c`
//! - `serves[(c, g)]` — driver `c`'s car serves group `g`
//! - `use_car[c]` — driver `c`'s car is dispatched at all
//! - `occupancy_bonus[c]` — car `c` carries the efficient 3-4 load
//! - `first_departure_bonus[c]` — tuning lever, see DESIGN.md
//!
//! Objective (minimized): cars used
//! + 0.01 × cross-area rider/driver pairings
//! − 5 × occupancy bonuses + 5 × first-departure bonuses.
//!
//! An infeasible model is a normal outcome, not an error: it maps to
//! [`DispatchOutcome::Failed`] with demand-vs-capacity diagnostics.

use std::collections::HashMap;

use good_lp::{
    default_solver, variable, variables, Expression, ResolutionError, Solution, SolverModel,
    Variable,
};

use crate::models::{CarAssignment, DispatchOutcome, DispatchPlan, Group, Preference, Roster};
use crate::report;

/// A solved binary variable is read as "set" above this value, so
/// backends returning near-0/near-1 floats decode the same as exact ones.
const BINARY_THRESHOLD: f64 = 0.5;

/// The built but unsolved assignment model.
///
/// Holds the decision variables, constraints, and objective, plus the
/// participant/driver index sets needed to decode a solution.
pub struct DispatchModel {
    vars: good_lp::ProblemVariables,
    objective: Expression,
    constraints: Vec<good_lp::Constraint>,
    /// (participant index, driver index) → ride variable.
    ride: HashMap<(usize, usize), Variable>,
    /// (driver index, group) → serves variable.
    serves: HashMap<(usize, Group), Variable>,
    /// Indices of attending people, roster order.
    participants: Vec<usize>,
    /// Indices of attending drivers, roster order.
    drivers: Vec<usize>,
}

impl DispatchModel {
    /// Total number of decision variables.
    pub fn variable_count(&self) -> usize {
        // ride + serves + use_car, occupancy bonus, and departure bonus per driver
        self.ride.len() + self.serves.len() + 3 * self.drivers.len()
    }

    /// Total number of constraints.
    pub fn constraint_count(&self) -> usize {
        self.constraints.len()
    }
}

/// Builds and solves the assignment model for one roster snapshot.
///
/// # Example
/// ```no_run
/// use car_dispatch::models::{Person, Preference, Roster};
/// use car_dispatch::solver::DispatchModelBuilder;
///
/// let roster = Roster::new(vec![
///     Person::new("Akira", "north", Preference::EarlyDeparture).with_capacity(4),
///     Person::new("Ben", "north", Preference::EarlyDeparture),
/// ]);
/// let outcome = DispatchModelBuilder::new(&roster).solve();
/// ```
pub struct DispatchModelBuilder<'a> {
    roster: &'a Roster,
}

impl<'a> DispatchModelBuilder<'a> {
    /// Creates a builder over a roster snapshot.
    pub fn new(roster: &'a Roster) -> Self {
        Self { roster }
    }

    /// Builds the full binary program: variables, constraints, objective.
    pub fn build(&self) -> DispatchModel {
        let people = &self.roster.people;
        let drivers: Vec<usize> = (0..people.len())
            .filter(|&i| people[i].is_driver())
            .collect();
        let participants: Vec<usize> = (0..people.len())
            .filter(|&i| people[i].is_participant())
            .collect();

        let mut vars = variables!();

        let mut ride = HashMap::new();
        for &m in &participants {
            for &c in &drivers {
                ride.insert((m, c), vars.add(variable().binary()));
            }
        }

        let mut serves = HashMap::new();
        for &c in &drivers {
            for g in Group::DISPLAY_ORDER {
                serves.insert((c, g), vars.add(variable().binary()));
            }
        }

        let mut use_car = HashMap::new();
        let mut occupancy_bonus = HashMap::new();
        let mut first_departure_bonus = HashMap::new();
        for &c in &drivers {
            use_car.insert(c, vars.add(variable().binary()));
            occupancy_bonus.insert(c, vars.add(variable().binary()));
            first_departure_bonus.insert(c, vars.add(variable().binary()));
        }

        let mut constraints = Vec::new();

        // Every participant rides in exactly one car.
        for &m in &participants {
            let mut seat = Expression::default();
            for &c in &drivers {
                seat.add_mul(1.0, ride[&(m, c)]);
            }
            constraints.push(seat.eq(1.0));
        }

        // A used car serves exactly one group; an unused car serves none.
        for &c in &drivers {
            let mut served = Expression::default();
            for g in Group::DISPLAY_ORDER {
                served.add_mul(1.0, serves[&(c, g)]);
            }
            constraints.push((served - use_car[&c]).eq(0.0));
        }

        // Preference compliance: a seat only counts in a car serving the
        // wanted group; "either is fine" accepts any served group.
        for &m in &participants {
            match people[m].preference.group() {
                Some(g) => {
                    for &c in &drivers {
                        constraints.push((ride[&(m, c)] - serves[&(c, g)]).leq(0.0));
                    }
                }
                None => {
                    for &c in &drivers {
                        let mut served = Expression::default();
                        for g in Group::DISPLAY_ORDER {
                            served.add_mul(1.0, serves[&(c, g)]);
                        }
                        constraints.push((ride[&(m, c)] - served).leq(0.0));
                    }
                }
            }
        }

        // A driver whose car is used rides in it. Drivers are always
        // participants (attending by definition), so ride[(c, c)] exists.
        for &c in &drivers {
            constraints.push((ride[&(c, c)] - use_car[&c]).geq(0.0));
        }

        // Seat capacity per car.
        for &c in &drivers {
            let mut load = Expression::default();
            for &m in &participants {
                load.add_mul(1.0, ride[&(m, c)]);
            }
            constraints.push(load.leq(f64::from(people[c].capacity)));
        }

        // Occupancy bonus linkage: load >= 3*bonus and load <= 4*bonus.
        // Jointly these admit per-car loads of 0 (bonus 0) or 3-4
        // (bonus 1) only; see DESIGN.md.
        for &c in &drivers {
            let mut load = Expression::default();
            for &m in &participants {
                load.add_mul(1.0, ride[&(m, c)]);
            }
            constraints.push((load.clone() - 3.0 * occupancy_bonus[&c]).geq(0.0));
            constraints.push((load - 4.0 * occupancy_bonus[&c]).leq(0.0));
        }

        // Objective: fewest cars, softly grouped by home area, rewarding
        // efficient loads. The first-departure term is an inert tuning
        // lever: minimization drives it to zero until a linking
        // constraint gives it meaning.
        let mut objective = Expression::default();
        for &c in &drivers {
            objective.add_mul(1.0, use_car[&c]);
            objective.add_mul(-5.0, occupancy_bonus[&c]);
            objective.add_mul(5.0, first_departure_bonus[&c]);
            for &m in &participants {
                if people[m].area != people[c].area {
                    objective.add_mul(0.01, ride[&(m, c)]);
                }
            }
        }

        log::debug!(
            "built dispatch model: {} participants, {} drivers, {} variables, {} constraints",
            participants.len(),
            drivers.len(),
            ride.len() + serves.len() + 3 * drivers.len(),
            constraints.len(),
        );

        DispatchModel {
            vars,
            objective,
            constraints,
            ride,
            serves,
            participants,
            drivers,
        }
    }

    /// Builds the model, solves it once, and shapes the outcome.
    ///
    /// Optimal solutions become a [`DispatchPlan`]; infeasible or
    /// otherwise failed solves become a [`FailureReport`]. Degenerate
    /// rosters never reach the solver: no participants is trivially
    /// solved, participants without any driver is immediately failed.
    ///
    /// [`FailureReport`]: crate::models::FailureReport
    pub fn solve(&self) -> DispatchOutcome {
        if self.roster.participants().is_empty() {
            return DispatchOutcome::Solved(DispatchPlan {
                assignments: Vec::new(),
                message: report::dispatch_message(&[]),
                participants: Vec::new(),
                objective_value: 0.0,
            });
        }
        if self.roster.drivers().is_empty() {
            log::info!("no attending drivers; dispatch failed before solving");
            return DispatchOutcome::Failed(report::failure_report(self.roster));
        }

        let DispatchModel {
            vars,
            objective,
            constraints,
            ride,
            serves,
            participants,
            drivers,
        } = self.build();

        let objective_expr = objective.clone();
        let mut problem = vars.minimise(objective).using(default_solver);
        for constraint in constraints {
            problem = problem.with(constraint);
        }

        match problem.solve() {
            Ok(solution) => {
                let objective_value = objective_expr.eval_with(&solution);
                log::info!("dispatch solved, objective {objective_value}");
                DispatchOutcome::Solved(self.decode(
                    &solution,
                    &ride,
                    &serves,
                    &participants,
                    &drivers,
                    objective_value,
                ))
            }
            Err(ResolutionError::Infeasible) => {
                log::info!("dispatch model infeasible");
                DispatchOutcome::Failed(report::failure_report(self.roster))
            }
            Err(err) => {
                // Unbounded or backend error: same outcome shape as
                // infeasible, distinction kept in the log only.
                log::warn!("solver did not reach an optimal solution: {err}");
                DispatchOutcome::Failed(report::failure_report(self.roster))
            }
        }
    }

    /// Decodes a feasible solution into grouped car assignments.
    ///
    /// Groups iterate in display order and drivers in roster order, so a
    /// fixed solution always renders the same plan.
    fn decode(
        &self,
        solution: &impl Solution,
        ride: &HashMap<(usize, usize), Variable>,
        serves: &HashMap<(usize, Group), Variable>,
        participants: &[usize],
        drivers: &[usize],
        objective_value: f64,
    ) -> DispatchPlan {
        let people = &self.roster.people;
        let mut assignments = Vec::new();

        for group in Group::DISPLAY_ORDER {
            for &c in drivers {
                if solution.value(serves[&(c, group)]) > BINARY_THRESHOLD {
                    let riders: Vec<String> = participants
                        .iter()
                        .filter(|&&m| solution.value(ride[&(m, c)]) > BINARY_THRESHOLD)
                        .map(|&m| people[m].name.clone())
                        .collect();
                    assignments.push(CarAssignment::new(people[c].name.clone(), group, riders));
                }
            }
        }

        let message = report::dispatch_message(&assignments);
        let participant_table = report::participant_summary(self.roster);
        DispatchPlan {
            assignments,
            message,
            participants: participant_table,
            objective_value,
        }
    }
}

/// Runs one full optimization request: applies submitted preference
/// overrides to a fresh roster snapshot, then builds and solves.
///
/// Override names that match nobody are ignored; the base roster is
/// never mutated.
pub fn run_dispatch(
    roster: &Roster,
    overrides: &HashMap<String, Preference>,
) -> DispatchOutcome {
    let today = roster.with_overrides(overrides);
    DispatchModelBuilder::new(&today).solve()
}
