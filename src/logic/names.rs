//! Team-name resolution between result entry and the roster.
//!
//! Result sheets often spell a team differently from the roster. Standings go
//! through a `NameResolver` so alias tables stay out of the scoring code.

use crate::models::Participant;
use std::collections::HashMap;

/// Maps a team name as it appears in a result to a roster participant.
pub trait NameResolver {
    fn resolve(&self, raw: &str) -> Participant;
}

/// Uses names as entered, minus surrounding whitespace.
#[derive(Clone, Copy, Debug, Default)]
pub struct IdentityResolver;

impl NameResolver for IdentityResolver {
    fn resolve(&self, raw: &str) -> Participant {
        raw.trim().to_string()
    }
}

/// Case-insensitive alias -> canonical name table. Unknown names pass through.
#[derive(Clone, Debug, Default)]
pub struct AliasTable {
    aliases: HashMap<String, Participant>,
}

impl AliasTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from (alias, canonical) pairs.
    pub fn from_pairs<I, A, C>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (A, C)>,
        A: AsRef<str>,
        C: Into<Participant>,
    {
        let mut table = Self::new();
        for (alias, canonical) in pairs {
            table.insert(alias.as_ref(), canonical);
        }
        table
    }

    pub fn insert(&mut self, alias: &str, canonical: impl Into<Participant>) {
        self.aliases.insert(normalize(alias), canonical.into());
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

impl NameResolver for AliasTable {
    fn resolve(&self, raw: &str) -> Participant {
        self.aliases
            .get(&normalize(raw))
            .cloned()
            .unwrap_or_else(|| raw.trim().to_string())
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}
