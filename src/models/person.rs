//! Person model and the closed preference/group vocabulary.
//!
//! Dispatch groups are a fixed three-element set; a person's daily
//! preference adds two pseudo-tags on top ("either is fine" and
//! "not attending"). Unrecognized tags are rejected when the roster
//! is parsed, never at solve time.

use serde::{Deserialize, Serialize};

/// One of the three dispatch categories a car can serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Group {
    /// Leaves the event and drives straight home.
    #[serde(rename = "direct-return")]
    DirectReturn,
    /// First wave to depart.
    #[serde(rename = "early-departure")]
    EarlyDeparture,
    /// Second wave to depart.
    #[serde(rename = "late-departure")]
    LateDeparture,
}

impl Group {
    /// Fixed rendering order for results and messages.
    pub const DISPLAY_ORDER: [Group; 3] = [
        Group::DirectReturn,
        Group::EarlyDeparture,
        Group::LateDeparture,
    ];

    /// Wire tag for this group.
    pub fn tag(self) -> &'static str {
        match self {
            Group::DirectReturn => "direct-return",
            Group::EarlyDeparture => "early-departure",
            Group::LateDeparture => "late-departure",
        }
    }

    /// Human-readable label used in the dispatch message.
    pub fn label(self) -> &'static str {
        match self {
            Group::DirectReturn => "Direct return",
            Group::EarlyDeparture => "Early departure",
            Group::LateDeparture => "Late departure",
        }
    }
}

/// A person's preference for the day.
///
/// The first three variants name a concrete [`Group`]; `Either` accepts
/// any group; `Absent` opts out of the day entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Preference {
    #[serde(rename = "direct-return")]
    DirectReturn,
    #[serde(rename = "early-departure")]
    EarlyDeparture,
    #[serde(rename = "late-departure")]
    LateDeparture,
    /// Any of the three groups is acceptable.
    #[serde(rename = "either-is-fine")]
    Either,
    /// Not attending today.
    #[serde(rename = "not-attending")]
    Absent,
}

impl Preference {
    /// The concrete group this preference names, if any.
    pub fn group(self) -> Option<Group> {
        match self {
            Preference::DirectReturn => Some(Group::DirectReturn),
            Preference::EarlyDeparture => Some(Group::EarlyDeparture),
            Preference::LateDeparture => Some(Group::LateDeparture),
            Preference::Either | Preference::Absent => None,
        }
    }

    /// Whether the person takes part in the day at all.
    pub fn is_attending(self) -> bool {
        self != Preference::Absent
    }

    /// Wire tag for this preference.
    pub fn tag(self) -> &'static str {
        match self {
            Preference::DirectReturn => "direct-return",
            Preference::EarlyDeparture => "early-departure",
            Preference::LateDeparture => "late-departure",
            Preference::Either => "either-is-fine",
            Preference::Absent => "not-attending",
        }
    }

    /// Parses a wire tag. Returns `None` for anything outside the fixed set.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "direct-return" => Some(Preference::DirectReturn),
            "early-departure" => Some(Preference::EarlyDeparture),
            "late-departure" => Some(Preference::LateDeparture),
            "either-is-fine" => Some(Preference::Either),
            "not-attending" => Some(Preference::Absent),
            _ => None,
        }
    }

    /// Fixed ordering key for the participant summary table:
    /// direct-return, early-departure, late-departure, either-is-fine.
    pub fn sort_priority(self) -> usize {
        match self {
            Preference::DirectReturn => 0,
            Preference::EarlyDeparture => 1,
            Preference::LateDeparture => 2,
            Preference::Either => 3,
            Preference::Absent => 4,
        }
    }
}

/// A roster member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Unique name (the natural key).
    pub name: String,
    /// Home area tag, used for the cross-area objective penalty.
    pub area: String,
    /// Seat capacity of this person's car; 0 means they cannot drive.
    pub capacity: u32,
    /// Today's preference.
    pub preference: Preference,
}

impl Person {
    /// Creates a person with no car.
    pub fn new(
        name: impl Into<String>,
        area: impl Into<String>,
        preference: Preference,
    ) -> Self {
        Self {
            name: name.into(),
            area: area.into(),
            capacity: 0,
            preference,
        }
    }

    /// Sets the car capacity (seats including the driver).
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Whether this person offers a car today.
    pub fn is_driver(&self) -> bool {
        self.capacity > 0 && self.preference.is_attending()
    }

    /// Whether this person needs a seat today.
    pub fn is_participant(&self) -> bool {
        self.preference.is_attending()
    }
}
