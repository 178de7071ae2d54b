//! Playoff bracket template: quarterfinals, semifinals and final.

use crate::models::{Fixture, Group, Participant, PlayoffRound, Standing};

/// Qualifiers taken from each of the two seeding groups.
pub const QUALIFIERS_PER_GROUP: usize = 4;

pub const QUARTERFINALS: &str = "Quarterfinals";
pub const SEMIFINALS: &str = "Semifinals";
pub const FINAL: &str = "Final";

/// Quarterfinal crossings as (group, seed) pairs, 0-based: A1-B4, A2-B3, B1-A4, B2-A3.
const QUARTERFINAL_PAIRS: [((usize, usize), (usize, usize)); 4] = [
    ((0, 0), (1, 3)),
    ((0, 1), (1, 2)),
    ((1, 0), (0, 3)),
    ((1, 1), (0, 2)),
];

/// Placeholder for the winner of a bracket match, e.g. "Winner QF1".
pub fn winner_of(stage: &str, number: usize) -> String {
    format!("Winner {}{}", stage, number)
}

/// Bracket seeded from the first two groups' participant lists.
///
/// Each list is taken as already rank-ordered; the first four of each group
/// qualify. Returns no rounds unless there are at least two groups with four
/// participants each.
pub fn generate_playoffs(groups: &[Group]) -> Vec<PlayoffRound> {
    let seeds: Vec<Vec<Participant>> = groups.iter().map(|g| g.participants.clone()).collect();
    generate_playoffs_from_seeds(&seeds)
}

/// Bracket from explicit, rank-ordered seed lists (one per group).
pub fn generate_playoffs_from_seeds(seeds: &[Vec<Participant>]) -> Vec<PlayoffRound> {
    if seeds.len() < 2 {
        log::debug!("Skipping playoffs: {} group(s), need 2", seeds.len());
        return Vec::new();
    }
    let (a, b) = (&seeds[0], &seeds[1]);
    if a.len() < QUALIFIERS_PER_GROUP || b.len() < QUALIFIERS_PER_GROUP {
        log::debug!(
            "Skipping playoffs: groups have {} and {} qualifiers, need {}",
            a.len(),
            b.len(),
            QUALIFIERS_PER_GROUP
        );
        return Vec::new();
    }
    let pools = [a, b];

    let quarterfinals = QUARTERFINAL_PAIRS
        .iter()
        .map(|&((home_pool, home_seed), (away_pool, away_seed))| {
            Fixture::new(
                pools[home_pool][home_seed].clone(),
                pools[away_pool][away_seed].clone(),
            )
        })
        .collect();
    let semifinals = vec![
        Fixture::new(winner_of("QF", 1), winner_of("QF", 2)),
        Fixture::new(winner_of("QF", 3), winner_of("QF", 4)),
    ];
    let final_match = vec![Fixture::new(winner_of("SF", 1), winner_of("SF", 2))];

    vec![
        PlayoffRound {
            name: QUARTERFINALS.to_string(),
            fixtures: quarterfinals,
        },
        PlayoffRound {
            name: SEMIFINALS.to_string(),
            fixtures: semifinals,
        },
        PlayoffRound {
            name: FINAL.to_string(),
            fixtures: final_match,
        },
    ]
}

/// Seed list from a ranked standings table (best first).
pub fn seeds_from_standings(standings: &[Standing]) -> Vec<Participant> {
    let mut ranked: Vec<&Standing> = standings.iter().collect();
    ranked.sort_by_key(|s| s.position);
    ranked.into_iter().map(|s| s.participant.clone()).collect()
}
