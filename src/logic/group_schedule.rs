//! Group construction: filled round-robin groups and empty template drafts.

use crate::logic::round_robin::{generate_round_robin, pairings};
use crate::models::{Fixture, Group, Participant, Round, TournamentError};

/// Name of the single group of a category played without poules.
pub const FULL_GROUP_PHASE: &str = "Full group phase";

/// Display name of a poule from its identifier ("A" -> "Group A").
pub fn subgroup_name(id: &str) -> String {
    let id = id.trim();
    if id.starts_with("Group ") {
        id.to_string()
    } else {
        format!("Group {}", id)
    }
}

/// Build a group for `participants`.
///
/// With `template` set, rounds have the exact shape of the real round-robin
/// (same round count, same fixtures per round) but every slot is empty, so
/// teams can be filled in later without reshaping.
pub fn build_group(name: &str, participants: &[Participant], template: bool) -> Group {
    let rounds = if template {
        template_rounds(participants.len())
    } else {
        generate_round_robin(participants)
    };
    Group {
        name: name.to_string(),
        participants: participants.to_vec(),
        rounds,
    }
}

fn template_rounds(n: usize) -> Vec<Round> {
    pairings(n)
        .into_iter()
        .zip(1u32..)
        .map(|(pairing, index)| Round {
            index,
            fixtures: vec![Fixture::empty_slot(); pairing.fixtures.len()],
            exempt: None,
        })
        .collect()
}

impl Group {
    /// Assign `participants` to a template group's slots.
    ///
    /// Fails with `ShapeMismatch` if the roster would need a different number
    /// of rounds or fixtures per round than the drafted template.
    pub fn fill(&mut self, participants: &[Participant]) -> Result<(), TournamentError> {
        let rounds = generate_round_robin(participants);
        let actual: Vec<usize> = rounds.iter().map(|r| r.fixtures.len()).collect();
        let expected = self.shape();
        if actual != expected {
            return Err(TournamentError::ShapeMismatch { expected, actual });
        }
        self.participants = participants.to_vec();
        self.rounds = rounds;
        Ok(())
    }
}
