//! Group ("poule") and PlayoffRound.

use crate::models::fixture::{Fixture, Participant, Round};
use serde::{Deserialize, Serialize};

/// A set of participants playing a single round-robin among themselves.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub name: String,
    pub participants: Vec<Participant>,
    pub rounds: Vec<Round>,
}

impl Group {
    /// All fixtures of the group, round by round.
    pub fn fixtures(&self) -> impl Iterator<Item = &Fixture> {
        self.rounds.iter().flat_map(|r| r.fixtures.iter())
    }

    /// Fixtures with a final result, in calendar order.
    pub fn completed_fixtures(&self) -> impl Iterator<Item = &Fixture> {
        self.fixtures().filter(|f| f.is_completed())
    }

    /// True when every fixture slot is still unassigned (drafted calendar).
    pub fn is_template(&self) -> bool {
        self.fixtures().all(Fixture::is_empty_slot)
    }

    /// Number of fixtures per round, in round order.
    pub fn shape(&self) -> Vec<usize> {
        self.rounds.iter().map(|r| r.fixtures.len()).collect()
    }
}

/// One stage of the elimination bracket (quarterfinals, semifinals, final).
///
/// Sides are either literal participants or winner references such as
/// `"Winner QF1"`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayoffRound {
    pub name: String,
    pub fixtures: Vec<Fixture>,
}
