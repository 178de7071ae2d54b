//! Standing, ResultMark and ScoringRules.

use crate::models::fixture::Participant;
use serde::{Deserialize, Serialize};

/// Maximum number of entries kept in `Standing::recent_results`.
pub const RECENT_RESULTS: usize = 5;

/// Outcome of one game for one participant.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultMark {
    Win,
    Loss,
}

/// One row of a standings table.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Standing {
    /// 1-based rank after sorting (0 until ranked).
    pub position: usize,
    pub participant: Participant,
    pub played: u32,
    pub wins: u32,
    pub losses: u32,
    pub points_for: u64,
    pub points_against: u64,
    pub points_difference: i64,
    pub points: u32,
    /// Most recent first, at most `RECENT_RESULTS`.
    pub recent_results: Vec<ResultMark>,
}

impl Standing {
    /// Zeroed entry for a roster participant.
    pub fn new(participant: impl Into<Participant>) -> Self {
        Self {
            participant: participant.into(),
            ..Self::default()
        }
    }

    /// Add one game's raw score to the totals.
    pub fn add_score(&mut self, scored: u32, conceded: u32) {
        self.points_for = self.points_for.saturating_add(u64::from(scored));
        self.points_against = self.points_against.saturating_add(u64::from(conceded));
        self.points_difference = signed(self.points_for).saturating_sub(signed(self.points_against));
    }

    pub fn record_win(&mut self, points: u32) {
        self.played = self.played.saturating_add(1);
        self.wins = self.wins.saturating_add(1);
        self.points = self.points.saturating_add(points);
        self.push_mark(ResultMark::Win);
    }

    pub fn record_loss(&mut self, points: u32) {
        self.played = self.played.saturating_add(1);
        self.losses = self.losses.saturating_add(1);
        self.points = self.points.saturating_add(points);
        self.push_mark(ResultMark::Loss);
    }

    /// Level score with no forfeit: counts as played, no mark.
    pub fn record_draw(&mut self, points: u32) {
        self.played = self.played.saturating_add(1);
        self.points = self.points.saturating_add(points);
    }

    fn push_mark(&mut self, mark: ResultMark) {
        self.recent_results.insert(0, mark);
        self.recent_results.truncate(RECENT_RESULTS);
    }
}

fn signed(total: u64) -> i64 {
    i64::try_from(total).unwrap_or(i64::MAX)
}

/// Championship points awarded per game.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScoringRules {
    pub win: u32,
    pub loss: u32,
    pub draw: u32,
    /// Awarded to the opponent of a forfeiting side.
    pub forfeit_win: u32,
    /// Awarded to the forfeiting side.
    pub forfeit_loss: u32,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            win: 2,
            loss: 1,
            draw: 0,
            forfeit_win: 2,
            forfeit_loss: 0,
        }
    }
}
