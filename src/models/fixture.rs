//! Participant, Fixture and Round: the building blocks of a group calendar.

use serde::{Deserialize, Serialize};

/// Opaque team identifier (the team name as entered by the organiser).
pub type Participant = String;

/// One side of a fixture.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Home,
    Away,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Home => Side::Away,
            Side::Away => Side::Home,
        }
    }
}

/// A single game between two participants.
///
/// `home`/`away` are `None` only for template slots that have not been
/// assigned a team yet. Scores are written by result entry, never by the
/// scheduler.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fixture {
    pub home: Option<Participant>,
    pub away: Option<Participant>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_score: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub away_score: Option<u32>,
    /// Side that defaulted, if the game was forfeited.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forfeit: Option<Side>,
}

impl Fixture {
    /// Pending fixture between two known participants.
    pub fn new(home: impl Into<Participant>, away: impl Into<Participant>) -> Self {
        Self {
            home: Some(home.into()),
            away: Some(away.into()),
            ..Self::default()
        }
    }

    /// Template slot with no participants assigned.
    pub fn empty_slot() -> Self {
        Self::default()
    }

    /// Record a final score.
    pub fn with_score(mut self, home_score: u32, away_score: u32) -> Self {
        self.home_score = Some(home_score);
        self.away_score = Some(away_score);
        self
    }

    /// Record a forfeit by the given side.
    pub fn with_forfeit(mut self, side: Side) -> Self {
        self.forfeit = Some(side);
        self
    }

    /// Both scores are present, or a forfeit was recorded.
    pub fn is_completed(&self) -> bool {
        self.forfeit.is_some() || (self.home_score.is_some() && self.away_score.is_some())
    }

    pub fn is_empty_slot(&self) -> bool {
        self.home.is_none() && self.away.is_none()
    }
}

/// One round ("journée") of a round-robin.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    /// 1-based round number.
    pub index: u32,
    pub fixtures: Vec<Fixture>,
    /// Participant sitting out this round (odd participant count only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exempt: Option<Participant>,
}
