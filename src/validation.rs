//! Roster validation.
//!
//! Turns untyped [`RosterRow`]s into a typed [`Roster`], rejecting
//! malformed input before any model is built. Detects:
//! - Empty or duplicate names
//! - Negative car capacity
//! - Preference tags outside the fixed set
//!
//! All problems are collected and reported together rather than failing
//! on the first one.

use std::collections::HashSet;

use thiserror::Error;

use crate::models::{Person, Preference, Roster, RosterRow};

/// A problem found while parsing the roster.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("row {row}: name is empty")]
    EmptyName { row: usize },
    #[error("duplicate person name '{name}'")]
    DuplicateName { name: String },
    #[error("'{name}' has negative car capacity {capacity}")]
    NegativeCapacity { name: String, capacity: i64 },
    #[error("'{name}' has unrecognized preference tag '{tag}'")]
    UnknownPreference { name: String, tag: String },
}

/// Parses and validates roster rows into a [`Roster`].
///
/// Returns every detected problem at once; a roster is only produced
/// when all rows are clean.
pub fn parse_roster(rows: &[RosterRow]) -> Result<Roster, Vec<RosterError>> {
    let mut errors = Vec::new();
    let mut seen_names = HashSet::new();
    let mut people = Vec::with_capacity(rows.len());

    for (row_idx, row) in rows.iter().enumerate() {
        let name = row.name.trim();
        if name.is_empty() {
            errors.push(RosterError::EmptyName { row: row_idx });
            continue;
        }
        if !seen_names.insert(name.to_string()) {
            errors.push(RosterError::DuplicateName {
                name: name.to_string(),
            });
        }

        if row.capacity < 0 {
            errors.push(RosterError::NegativeCapacity {
                name: name.to_string(),
                capacity: row.capacity,
            });
        }

        let Some(preference) = Preference::from_tag(row.preference.trim()) else {
            errors.push(RosterError::UnknownPreference {
                name: name.to_string(),
                tag: row.preference.clone(),
            });
            continue;
        };

        if row.capacity >= 0 {
            people.push(
                Person::new(name, row.area.trim(), preference)
                    .with_capacity(row.capacity as u32),
            );
        }
    }

    if errors.is_empty() {
        Ok(Roster::new(people))
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, area: &str, capacity: i64, preference: &str) -> RosterRow {
        RosterRow {
            name: name.to_string(),
            area: area.to_string(),
            capacity,
            preference: preference.to_string(),
        }
    }

    #[test]
    fn test_valid_rows() {
        let rows = vec![
            row("Akira", "north", 4, "early-departure"),
            row("Ben", "north", 0, "either-is-fine"),
            row("Chie", "south", 3, "not-attending"),
        ];

        let roster = parse_roster(&rows).unwrap();
        assert_eq!(roster.len(), 3);
        assert_eq!(roster.person("Akira").unwrap().capacity, 4);
        assert_eq!(roster.person("Ben").unwrap().preference, Preference::Either);
        assert!(!roster.person("Chie").unwrap().is_driver());
    }

    #[test]
    fn test_duplicate_name() {
        let rows = vec![
            row("Akira", "north", 4, "early-departure"),
            row("Akira", "south", 0, "late-departure"),
        ];

        let errors = parse_roster(&rows).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, RosterError::DuplicateName { name } if name == "Akira")));
    }

    #[test]
    fn test_unknown_preference_tag() {
        let rows = vec![row("Akira", "north", 4, "whenever")];

        let errors = parse_roster(&rows).unwrap_err();
        assert_eq!(
            errors,
            vec![RosterError::UnknownPreference {
                name: "Akira".to_string(),
                tag: "whenever".to_string(),
            }]
        );
    }

    #[test]
    fn test_negative_capacity() {
        let rows = vec![row("Akira", "north", -1, "early-departure")];

        let errors = parse_roster(&rows).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, RosterError::NegativeCapacity { capacity: -1, .. })));
    }

    #[test]
    fn test_empty_name() {
        let rows = vec![row("  ", "north", 0, "either-is-fine")];

        let errors = parse_roster(&rows).unwrap_err();
        assert_eq!(errors, vec![RosterError::EmptyName { row: 0 }]);
    }

    #[test]
    fn test_multiple_errors_reported_together() {
        let rows = vec![
            row("", "north", 0, "either-is-fine"),
            row("Ben", "north", -2, "early-departure"),
            row("Ben", "north", 0, "sometime"),
        ];

        let errors = parse_roster(&rows).unwrap_err();
        assert!(errors.len() >= 3);
    }

    #[test]
    fn test_rows_deserialize_from_json() {
        let json = r#"[
            {"name": "Akira", "area": "north", "capacity": 4, "preference": "direct-return"},
            {"name": "Ben", "area": "south", "capacity": 0, "preference": "not-attending"}
        ]"#;
        let rows: Vec<RosterRow> = serde_json::from_str(json).unwrap();
        let roster = parse_roster(&rows).unwrap();
        assert_eq!(roster.len(), 2);
        assert_eq!(roster.participants().len(), 1);
    }
}
