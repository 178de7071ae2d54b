//! Calendar logic: round-robin scheduling, groups, playoffs, standings.

mod calendar;
mod group_schedule;
mod import;
mod names;
mod playoffs;
mod round_robin;
mod standings;

pub use calendar::{compose, compose_calendar, validate_participants, CategoryConfig};
pub use group_schedule::{build_group, subgroup_name, FULL_GROUP_PHASE};
pub use import::read_results_csv;
pub use names::{AliasTable, IdentityResolver, NameResolver};
pub use playoffs::{
    generate_playoffs, generate_playoffs_from_seeds, seeds_from_standings, winner_of, FINAL,
    QUALIFIERS_PER_GROUP, QUARTERFINALS, SEMIFINALS,
};
pub use round_robin::generate_round_robin;
pub use standings::{compute_group_standings, compute_standings, compute_standings_with};
