//! Dispatch output shaping.
//!
//! Renders the posting-ready dispatch message from solved car
//! assignments and builds the participant summary tables shared by the
//! solved and failed outcomes.
//!
//! # Message format
//!
//! ```text
//! Today's car assignments
//!
//! (Direct return)
//! Chie, Emi
//!
//! (Early departure)
//! Akira, Ben, Dai
//! ```
//!
//! Groups always render in the fixed display order and empty groups are
//! skipped; within a group, cars keep driver roster order.

use crate::models::{CarAssignment, FailureReport, Group, ParticipantEntry, Roster};

/// First line of every dispatch message.
pub const DISPATCH_HEADER: &str = "Today's car assignments";

/// Message returned whenever the solver does not reach an optimal solution.
pub const FAILURE_MESSAGE: &str = "Optimization failed!";

/// Separator between names on a car line.
const NAME_DELIMITER: &str = ", ";

/// Renders the dispatch message for a solved assignment.
pub fn dispatch_message(assignments: &[CarAssignment]) -> String {
    let mut message = String::from(DISPATCH_HEADER);
    message.push_str("\n\n");

    for group in Group::DISPLAY_ORDER {
        let cars: Vec<&CarAssignment> =
            assignments.iter().filter(|a| a.group == group).collect();
        if cars.is_empty() {
            continue;
        }

        message.push_str(&format!("({})\n", group.label()));
        for car in cars {
            message.push_str(&car.riders.join(NAME_DELIMITER));
            message.push('\n');
        }
        message.push('\n');
    }

    message.trim_end().to_string()
}

/// Builds the participant summary table: attending people only, sorted
/// by the fixed preference priority, roster order preserved within a
/// priority. Drivers show their seat count; everyone else shows blank.
pub fn participant_summary(roster: &Roster) -> Vec<ParticipantEntry> {
    let mut entries: Vec<ParticipantEntry> = roster
        .participants()
        .into_iter()
        .map(|p| ParticipantEntry {
            name: p.name.clone(),
            preference: p.preference,
            capacity: if p.is_driver() { Some(p.capacity) } else { None },
        })
        .collect();
    entries.sort_by_key(|e| e.preference.sort_priority());
    entries
}

/// Builds the diagnostic payload for an unsolvable day.
pub fn failure_report(roster: &Roster) -> FailureReport {
    FailureReport {
        message: FAILURE_MESSAGE.to_string(),
        total_participants: roster.participants().len(),
        total_capacity: roster.total_capacity(),
        participants: participant_summary(roster),
    }
}
