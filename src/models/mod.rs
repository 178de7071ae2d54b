//! Data structures for league calendars: fixtures, rounds, groups, standings.

mod calendar;
mod fixture;
mod group;
mod standing;

pub use calendar::{Calendar, TournamentError};
pub use fixture::{Fixture, Participant, Round, Side};
pub use group::{Group, PlayoffRound};
pub use standing::{ResultMark, ScoringRules, Standing, RECENT_RESULTS};
