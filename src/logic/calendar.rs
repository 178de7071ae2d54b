//! Category calendars: one or more groups plus an optional playoff template.

use crate::logic::group_schedule::{build_group, subgroup_name, FULL_GROUP_PHASE};
use crate::logic::playoffs::generate_playoffs;
use crate::models::{Calendar, Group, Participant, TournamentError};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Category metadata driving calendar composition.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CategoryConfig {
    #[serde(alias = "category")]
    pub name: String,
    pub uses_subgroups: bool,
    /// Poule identifiers in display order; empty means roster key order.
    pub subgroup_names: Vec<String>,
    /// Draft with empty fixture slots instead of assigned teams.
    pub template: bool,
    /// Add a playoff bracket when the poules allow one.
    pub playoffs: bool,
}

impl Default for CategoryConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            uses_subgroups: false,
            subgroup_names: Vec::new(),
            template: false,
            playoffs: true,
        }
    }
}

/// Calendar for a category from its roster (poule id -> teams).
pub fn compose_calendar(
    category: &str,
    uses_subgroups: bool,
    roster_by_subgroup: &BTreeMap<String, Vec<Participant>>,
) -> Result<Calendar, TournamentError> {
    let config = CategoryConfig {
        name: category.to_string(),
        uses_subgroups,
        ..CategoryConfig::default()
    };
    compose(&config, roster_by_subgroup)
}

/// Calendar for a category described by `config`.
///
/// Without poules every team goes into a single "full group phase" group and
/// no playoffs are drawn. With poules, each poule becomes its own group and
/// the bracket is seeded from the first two.
pub fn compose(
    config: &CategoryConfig,
    roster_by_subgroup: &BTreeMap<String, Vec<Participant>>,
) -> Result<Calendar, TournamentError> {
    validate_participants(roster_by_subgroup.values().flatten())?;

    let groups: Vec<Group> = if config.uses_subgroups {
        let order: Vec<&String> = if config.subgroup_names.is_empty() {
            roster_by_subgroup.keys().collect()
        } else {
            config.subgroup_names.iter().collect()
        };
        if order.is_empty() {
            return Err(TournamentError::NoSubgroups);
        }
        order
            .into_iter()
            .map(|id| {
                let teams = roster_by_subgroup
                    .get(id)
                    .ok_or_else(|| TournamentError::UnknownSubgroup(id.clone()))?;
                Ok(build_group(&subgroup_name(id), teams, config.template))
            })
            .collect::<Result<_, TournamentError>>()?
    } else {
        let teams: Vec<Participant> = roster_by_subgroup.values().flatten().cloned().collect();
        vec![build_group(FULL_GROUP_PHASE, &teams, config.template)]
    };

    let playoff_rounds = if config.uses_subgroups && config.playoffs {
        Some(generate_playoffs(&groups)).filter(|rounds| !rounds.is_empty())
    } else {
        None
    };

    log::info!(
        "Composed calendar for {}: {} group(s), playoffs: {}",
        config.name,
        groups.len(),
        playoff_rounds.is_some()
    );
    Ok(Calendar {
        category: config.name.clone(),
        uses_subgroups: config.uses_subgroups,
        groups,
        playoff_rounds,
    })
}

/// Reject a roster listing the same team twice.
///
/// Identifiers are compared exactly; spelling variants are a name-resolution concern.
pub fn validate_participants<'a, I>(participants: I) -> Result<(), TournamentError>
where
    I: IntoIterator<Item = &'a Participant>,
{
    let mut seen = HashSet::new();
    for p in participants {
        if !seen.insert(p.as_str()) {
            return Err(TournamentError::DuplicateParticipant(p.clone()));
        }
    }
    Ok(())
}
