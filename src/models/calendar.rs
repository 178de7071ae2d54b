//! Calendar and TournamentError.

use crate::models::fixture::Participant;
use crate::models::group::{Group, PlayoffRound};
use serde::{Deserialize, Serialize};

/// Errors that can occur while building calendars or reading results.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// Category uses sub-groups but no sub-group roster was given.
    NoSubgroups,
    /// A configured sub-group has no roster entry.
    UnknownSubgroup(String),
    /// The same team is listed twice in one category.
    DuplicateParticipant(Participant),
    /// A template cannot be filled with this many participants without reshaping.
    ShapeMismatch { expected: Vec<usize>, actual: Vec<usize> },
    /// A result row could not be parsed.
    InvalidResultRow { line: u64, message: String },
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::NoSubgroups => {
                write!(f, "Category uses sub-groups but none were given")
            }
            TournamentError::UnknownSubgroup(name) => {
                write!(f, "Sub-group {} has no roster", name)
            }
            TournamentError::DuplicateParticipant(name) => {
                write!(f, "Team {} is listed more than once", name)
            }
            TournamentError::ShapeMismatch { expected, actual } => write!(
                f,
                "Template has {} rounds but the roster needs {}",
                expected.len(),
                actual.len()
            ),
            TournamentError::InvalidResultRow { line, message } => {
                write!(f, "Invalid result on line {}: {}", line, message)
            }
        }
    }
}

impl std::error::Error for TournamentError {}

/// Full calendar of one category: its groups and, optionally, a playoff template.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Calendar {
    pub category: String,
    pub uses_subgroups: bool,
    pub groups: Vec<Group>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub playoff_rounds: Option<Vec<PlayoffRound>>,
}

impl Calendar {
    /// Look up a group by name.
    pub fn group(&self, name: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.name == name)
    }
}
