//! Standings: points, score differential and ranking from completed fixtures.

use crate::logic::names::{IdentityResolver, NameResolver};
use crate::models::{Fixture, Group, Participant, ScoringRules, Side, Standing};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Ranked standings for `roster` with the default scoring rules.
pub fn compute_standings(roster: &[Participant], fixtures: &[Fixture]) -> Vec<Standing> {
    compute_standings_with(roster, fixtures, &IdentityResolver, &ScoringRules::default())
}

/// Ranked standings for a group, from its own completed fixtures.
pub fn compute_group_standings(group: &Group) -> Vec<Standing> {
    let fixtures: Vec<Fixture> = group.completed_fixtures().cloned().collect();
    compute_standings(&group.participants, &fixtures)
}

/// Ranked standings with an explicit name resolver and scoring rules.
///
/// Every roster participant gets exactly one row. Pending fixtures are
/// ignored; fixtures naming a team that does not resolve to the roster are
/// skipped. Rows are ordered by points, then score differential, then points
/// scored; remaining ties keep roster order.
pub fn compute_standings_with(
    roster: &[Participant],
    fixtures: &[Fixture],
    resolver: &dyn NameResolver,
    rules: &ScoringRules,
) -> Vec<Standing> {
    let mut table: Vec<Standing> = roster.iter().map(Standing::new).collect();
    let mut index: HashMap<&str, usize> = HashMap::with_capacity(roster.len());
    for (i, p) in roster.iter().enumerate() {
        index.entry(p.as_str()).or_insert(i);
    }

    for fixture in fixtures.iter().filter(|f| f.is_completed()) {
        let (Some(home), Some(away)) = (fixture.home.as_deref(), fixture.away.as_deref()) else {
            log::debug!("Skipping completed fixture without both teams");
            continue;
        };
        let (home_name, away_name) = (resolver.resolve(home), resolver.resolve(away));
        let (Some(&h), Some(&a)) = (index.get(home_name.as_str()), index.get(away_name.as_str()))
        else {
            log::warn!("Skipping result {} vs {}: team not in roster", home, away);
            continue;
        };
        if h == a {
            log::warn!("Skipping result {} vs {}: same team on both sides", home, away);
            continue;
        }
        apply_result(&mut table, h, a, fixture, rules);
    }

    rank(&mut table);
    table
}

/// Apply one completed fixture to the home (`h`) and away (`a`) rows.
fn apply_result(table: &mut [Standing], h: usize, a: usize, fixture: &Fixture, rules: &ScoringRules) {
    if let (Some(home_score), Some(away_score)) = (fixture.home_score, fixture.away_score) {
        table[h].add_score(home_score, away_score);
        table[a].add_score(away_score, home_score);
    }

    let row = |side: Side| match side {
        Side::Home => h,
        Side::Away => a,
    };

    if let Some(forfeiting) = fixture.forfeit {
        table[row(forfeiting)].record_loss(rules.forfeit_loss);
        table[row(forfeiting.opponent())].record_win(rules.forfeit_win);
        return;
    }

    let (Some(home_score), Some(away_score)) = (fixture.home_score, fixture.away_score) else {
        return;
    };
    match home_score.cmp(&away_score) {
        Ordering::Greater => {
            table[h].record_win(rules.win);
            table[a].record_loss(rules.loss);
        }
        Ordering::Less => {
            table[a].record_win(rules.win);
            table[h].record_loss(rules.loss);
        }
        Ordering::Equal => {
            table[h].record_draw(rules.draw);
            table[a].record_draw(rules.draw);
        }
    }
}

/// Stable sort by points, differential, points scored (all descending), then number positions.
fn rank(table: &mut [Standing]) {
    table.sort_by(|x, y| {
        y.points
            .cmp(&x.points)
            .then_with(|| y.points_difference.cmp(&x.points_difference))
            .then_with(|| y.points_for.cmp(&x.points_for))
    });
    for (i, s) in table.iter_mut().enumerate() {
        s.position = i + 1;
    }
}
