//! Result import from CSV sheets (`home,away,home_score,away_score,forfeit`).

use crate::models::{Fixture, Side, TournamentError};
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize)]
struct ResultRow {
    home: String,
    away: String,
    #[serde(default)]
    home_score: Option<u32>,
    #[serde(default)]
    away_score: Option<u32>,
    #[serde(default)]
    forfeit: Option<String>,
}

impl ResultRow {
    fn into_fixture(self, line: u64) -> Result<Fixture, TournamentError> {
        let invalid = |message: String| TournamentError::InvalidResultRow { line, message };
        if self.home.is_empty() || self.away.is_empty() {
            return Err(invalid("both teams are required".to_string()));
        }
        if self.home == self.away {
            return Err(invalid(format!("{} cannot play itself", self.home)));
        }
        let forfeit = match self.forfeit.as_deref().map(str::to_ascii_lowercase).as_deref() {
            None | Some("") => None,
            Some("home") => Some(Side::Home),
            Some("away") => Some(Side::Away),
            Some(other) => return Err(invalid(format!("unknown forfeit side '{}'", other))),
        };
        Ok(Fixture {
            home: Some(self.home),
            away: Some(self.away),
            home_score: self.home_score,
            away_score: self.away_score,
            forfeit,
        })
    }
}

/// Read fixture results from CSV with a header row.
///
/// Scores may be left blank for games not played yet; `forfeit` is blank,
/// `home` or `away`.
pub fn read_results_csv<R: Read>(reader: R) -> Result<Vec<Fixture>, TournamentError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = rdr.headers().map_err(csv_error)?.clone();

    let mut fixtures = Vec::new();
    for record in rdr.records() {
        let record = record.map_err(csv_error)?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let row: ResultRow = record
            .deserialize(Some(&headers))
            .map_err(|e| TournamentError::InvalidResultRow {
                line,
                message: e.to_string(),
            })?;
        fixtures.push(row.into_fixture(line)?);
    }
    log::debug!("Imported {} result row(s)", fixtures.len());
    Ok(fixtures)
}

fn csv_error(e: csv::Error) -> TournamentError {
    TournamentError::InvalidResultRow {
        line: e.position().map(|p| p.line()).unwrap_or(0),
        message: e.to_string(),
    }
}
