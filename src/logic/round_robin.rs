//! Single round-robin schedule using the circle method.

use crate::models::{Fixture, Participant, Round};

/// Pairings of one round, as indices into the participant list.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct RoundPairing {
    /// (home, away) index pairs.
    pub fixtures: Vec<(usize, usize)>,
    /// Index of the participant paired with the bye, if any.
    pub exempt: Option<usize>,
}

/// Circle-method pairings for `n` participants.
///
/// Index `0` stays anchored; every round the last slot moves to position 1
/// and the rest shift one place right. For odd `n` a bye (index `n`) is
/// appended and whoever meets it is exempt for that round.
pub(crate) fn pairings(n: usize) -> Vec<RoundPairing> {
    if n < 2 {
        return Vec::new();
    }
    let bye = n;
    let mut slots: Vec<usize> = (0..n).collect();
    if n % 2 == 1 {
        slots.push(bye);
    }
    let size = slots.len();
    let per_round = size / 2;

    let mut rounds = Vec::with_capacity(size - 1);
    for _ in 0..size - 1 {
        let mut fixtures = Vec::with_capacity(per_round);
        let mut exempt = None;
        for i in 0..per_round {
            let (home, away) = (slots[i], slots[size - 1 - i]);
            if home == bye {
                exempt = Some(away);
            } else if away == bye {
                exempt = Some(home);
            } else {
                fixtures.push((home, away));
            }
        }
        rounds.push(RoundPairing { fixtures, exempt });
        slots[1..].rotate_right(1);
    }
    rounds
}

/// Generate every round of a single round-robin between `participants`.
///
/// Fewer than two participants yield no rounds. Output depends only on the
/// input order. Duplicate names are the caller's problem: pairing is then
/// undefined.
pub fn generate_round_robin(participants: &[Participant]) -> Vec<Round> {
    let rounds: Vec<Round> = pairings(participants.len())
        .into_iter()
        .zip(1u32..)
        .map(|(pairing, index)| Round {
            index,
            fixtures: pairing
                .fixtures
                .iter()
                .map(|&(h, a)| Fixture::new(participants[h].clone(), participants[a].clone()))
                .collect(),
            exempt: pairing.exempt.map(|i| participants[i].clone()),
        })
        .collect();
    log::debug!(
        "Generated {} rounds for {} participants",
        rounds.len(),
        participants.len()
    );
    rounds
}
