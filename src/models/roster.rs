//! Roster model.
//!
//! A roster is the day's snapshot of people: who is attending, who
//! brings a car, and which departure group each person wants. Submitted
//! preference overrides never mutate the base roster — [`Roster::with_overrides`]
//! produces a fresh snapshot, so concurrent requests cannot contaminate
//! each other.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{Person, Preference};

/// An untyped roster row as it arrives from the outside world
/// (CSV upload, form post). Validated into a [`Person`] by
/// [`crate::validation::parse_roster`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterRow {
    /// Unique person name.
    pub name: String,
    /// Home area tag.
    pub area: String,
    /// Declared car capacity; 0 means non-driver. Signed: negative
    /// values are reported by validation instead of failing to parse.
    pub capacity: i64,
    /// Preference wire tag for the day.
    pub preference: String,
}

/// The day's roster: an immutable snapshot of people.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    /// People in upload order. Order is preserved: it fixes driver
    /// iteration order during solution decoding.
    pub people: Vec<Person>,
}

impl Roster {
    /// Creates a roster from already-validated people.
    pub fn new(people: Vec<Person>) -> Self {
        Self { people }
    }

    /// People offering a car today (capacity > 0 and attending).
    pub fn drivers(&self) -> Vec<&Person> {
        self.people.iter().filter(|p| p.is_driver()).collect()
    }

    /// People needing a seat today (attending; drivers included).
    pub fn participants(&self) -> Vec<&Person> {
        self.people.iter().filter(|p| p.is_participant()).collect()
    }

    /// Total seats declared by attending drivers. Cars of people who are
    /// not attending do not count, whatever their capacity says.
    pub fn total_capacity(&self) -> u32 {
        self.people
            .iter()
            .filter(|p| p.is_driver())
            .map(|p| p.capacity)
            .sum()
    }

    /// Name and preference pairs in roster order, for the review screen
    /// shown before preferences are submitted.
    pub fn roll_call(&self) -> impl Iterator<Item = (&str, Preference)> {
        self.people.iter().map(|p| (p.name.as_str(), p.preference))
    }

    /// Finds a person by name.
    pub fn person(&self, name: &str) -> Option<&Person> {
        self.people.iter().find(|p| p.name == name)
    }

    /// Returns a new roster with submitted preferences applied.
    ///
    /// Names absent from `overrides` keep their base preference; override
    /// names that match nobody are ignored. `self` is left untouched.
    pub fn with_overrides(&self, overrides: &HashMap<String, Preference>) -> Roster {
        let people = self
            .people
            .iter()
            .map(|p| {
                let mut person = p.clone();
                if let Some(&pref) = overrides.get(&p.name) {
                    person.preference = pref;
                }
                person
            })
            .collect();
        Roster { people }
    }

    /// Number of people on the roster (attending or not).
    pub fn len(&self) -> usize {
        self.people.len()
    }

    /// Whether the roster has no people.
    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_roster() -> Roster {
        Roster::new(vec![
            Person::new("Akira", "north", Preference::EarlyDeparture).with_capacity(4),
            Person::new("Ben", "north", Preference::EarlyDeparture),
            Person::new("Chie", "south", Preference::DirectReturn).with_capacity(3),
            Person::new("Dai", "south", Preference::Absent).with_capacity(5),
            Person::new("Emi", "north", Preference::Either),
        ])
    }

    #[test]
    fn test_driver_participant_partition() {
        let roster = sample_roster();
        let driver_names: Vec<&str> = roster.drivers().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(driver_names, vec!["Akira", "Chie"]); // Dai is absent

        let participant_names: Vec<&str> = roster
            .participants()
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(participant_names, vec!["Akira", "Ben", "Chie", "Emi"]);
    }

    #[test]
    fn test_total_capacity_excludes_absent_drivers() {
        let roster = sample_roster();
        // Dai's 5 seats do not count.
        assert_eq!(roster.total_capacity(), 7);
    }

    #[test]
    fn test_overrides_produce_fresh_snapshot() {
        let roster = sample_roster();
        let overrides = HashMap::from([
            ("Ben".to_string(), Preference::Absent),
            ("Nobody".to_string(), Preference::DirectReturn),
        ]);

        let today = roster.with_overrides(&overrides);
        assert_eq!(today.person("Ben").unwrap().preference, Preference::Absent);
        assert_eq!(today.participants().len(), 3);

        // Base roster untouched.
        assert_eq!(
            roster.person("Ben").unwrap().preference,
            Preference::EarlyDeparture
        );
        assert_eq!(roster.participants().len(), 4);
    }

    #[test]
    fn test_roll_call_preserves_roster_order() {
        let roster = sample_roster();
        let names: Vec<&str> = roster.roll_call().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Akira", "Ben", "Chie", "Dai", "Emi"]);
    }

    #[test]
    fn test_empty_roster() {
        let roster = Roster::default();
        assert!(roster.is_empty());
        assert!(roster.drivers().is_empty());
        assert_eq!(roster.total_capacity(), 0);
    }
}
