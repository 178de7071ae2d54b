//! League calendar engine: library with models and scheduling/standings logic.

pub mod logic;
pub mod models;

pub use logic::{
    build_group, compose, compose_calendar, compute_group_standings, compute_standings,
    compute_standings_with, generate_playoffs, generate_playoffs_from_seeds, generate_round_robin,
    read_results_csv, seeds_from_standings, subgroup_name, validate_participants, winner_of,
    AliasTable, CategoryConfig, IdentityResolver, NameResolver, FULL_GROUP_PHASE,
};
pub use models::{
    Calendar, Fixture, Group, Participant, PlayoffRound, ResultMark, Round, ScoringRules, Side,
    Standing, TournamentError,
};
