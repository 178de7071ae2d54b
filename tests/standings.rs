//! Integration tests for standings: scoring, forfeits, ranking and name resolution.

use league_calendar::{
    build_group, compute_group_standings, compute_standings, compute_standings_with, AliasTable,
    Fixture, IdentityResolver, Participant, ResultMark, ScoringRules, Side, Standing,
};

fn names(list: &[&str]) -> Vec<Participant> {
    list.iter().map(|s| s.to_string()).collect()
}

fn row<'a>(table: &'a [Standing], name: &str) -> &'a Standing {
    table.iter().find(|s| s.participant == name).unwrap()
}

fn order(table: &[Standing]) -> Vec<&str> {
    table.iter().map(|s| s.participant.as_str()).collect()
}

#[test]
fn win_and_forfeit_scenario() {
    let roster = names(&["A", "B", "C"]);
    let fixtures = vec![
        Fixture::new("A", "B").with_score(70, 60),
        Fixture::new("A", "C").with_forfeit(Side::Away),
    ];
    let table = compute_standings(&roster, &fixtures);

    let a = row(&table, "A");
    assert_eq!((a.played, a.wins, a.losses), (2, 2, 0));
    assert_eq!(a.points, 4);
    assert_eq!((a.points_for, a.points_against, a.points_difference), (70, 60, 10));

    let b = row(&table, "B");
    assert_eq!((b.played, b.wins, b.losses, b.points), (1, 0, 1, 1));
    assert_eq!(b.points_difference, -10);

    let c = row(&table, "C");
    assert_eq!((c.played, c.wins, c.losses, c.points), (1, 0, 1, 0));
    assert_eq!((c.points_for, c.points_against), (0, 0));

    assert_eq!(order(&table), ["A", "B", "C"]);
    assert_eq!(
        table.iter().map(|s| s.position).collect::<Vec<_>>(),
        [1, 2, 3]
    );
}

#[test]
fn forfeit_with_score_counts_raw_points() {
    let roster = names(&["A", "B"]);
    let fixtures = vec![Fixture::new("A", "B").with_score(0, 20).with_forfeit(Side::Home)];
    let table = compute_standings(&roster, &fixtures);
    let a = row(&table, "A");
    let b = row(&table, "B");
    assert_eq!((a.points, a.losses, a.points_for, a.points_against), (0, 1, 0, 20));
    assert_eq!((b.points, b.wins, b.points_for), (2, 1, 20));
}

#[test]
fn pending_fixtures_are_ignored() {
    let roster = names(&["A", "B"]);
    let mut half_scored = Fixture::new("A", "B");
    half_scored.home_score = Some(50);
    let fixtures = vec![Fixture::new("A", "B"), half_scored];
    let table = compute_standings(&roster, &fixtures);
    assert!(table.iter().all(|s| s.played == 0 && s.points == 0));
    assert_eq!(order(&table), ["A", "B"]);
}

#[test]
fn every_roster_member_appears_once_and_wins_match_decisive_games() {
    let roster = names(&["A", "B", "C", "D", "E"]);
    let fixtures = vec![
        Fixture::new("A", "B").with_score(50, 40),
        Fixture::new("C", "D").with_score(30, 45),
        Fixture::new("A", "C").with_score(60, 60),
        Fixture::new("B", "D").with_forfeit(Side::Home),
        Fixture::new("A", "D"),
    ];
    let table = compute_standings(&roster, &fixtures);
    assert_eq!(table.len(), roster.len());
    for p in &roster {
        assert_eq!(table.iter().filter(|s| &s.participant == p).count(), 1);
    }
    assert_eq!(table.iter().map(|s| s.wins).sum::<u32>(), 3);
    assert_eq!(table.iter().map(|s| s.losses).sum::<u32>(), 3);
    let e = row(&table, "E");
    assert_eq!((e.played, e.position), (0, 5));
}

#[test]
fn level_score_counts_as_played_without_result() {
    let roster = names(&["A", "B"]);
    let table = compute_standings(&roster, &[Fixture::new("A", "B").with_score(55, 55)]);
    for s in &table {
        assert_eq!((s.played, s.wins, s.losses, s.points), (1, 0, 0, 0));
        assert!(s.recent_results.is_empty());
    }
}

#[test]
fn ranking_uses_points_then_differential_then_points_for() {
    let roster = names(&["A", "B", "C", "D"]);
    let fixtures = vec![
        // Everyone ends up with one win and one loss (3 points).
        Fixture::new("A", "B").with_score(60, 50),
        Fixture::new("C", "D").with_score(80, 60),
        Fixture::new("B", "C").with_score(70, 69),
        Fixture::new("D", "A").with_score(90, 89),
    ];
    let table = compute_standings(&roster, &fixtures);
    assert!(table.iter().all(|s| s.points == 3));
    // Differentials: A +9, B -9, C +19, D -19.
    assert_eq!(order(&table), ["C", "A", "B", "D"]);
}

#[test]
fn points_for_breaks_equal_differential() {
    let roster = names(&["A", "B", "C", "D"]);
    let fixtures = vec![
        Fixture::new("A", "C").with_score(50, 40),
        Fixture::new("B", "D").with_score(90, 80),
    ];
    let table = compute_standings(&roster, &fixtures);
    assert_eq!(order(&table), ["B", "A", "D", "C"]);
}

#[test]
fn full_ties_keep_roster_order() {
    let roster = names(&["Delta", "Alpha", "Charlie", "Bravo"]);
    let fixtures = vec![
        Fixture::new("Delta", "Alpha").with_score(50, 50),
        Fixture::new("Charlie", "Bravo").with_score(50, 50),
    ];
    let table = compute_standings(&roster, &fixtures);
    assert_eq!(order(&table), ["Delta", "Alpha", "Charlie", "Bravo"]);
}

#[test]
fn recent_results_keep_last_five_most_recent_first() {
    let roster = names(&["A", "B"]);
    let mut fixtures = Vec::new();
    for _ in 0..4 {
        fixtures.push(Fixture::new("A", "B").with_score(10, 5));
    }
    for _ in 0..2 {
        fixtures.push(Fixture::new("A", "B").with_score(5, 10));
    }
    let table = compute_standings(&roster, &fixtures);
    let a = row(&table, "A");
    assert_eq!(a.played, 6);
    assert_eq!(
        a.recent_results,
        [
            ResultMark::Loss,
            ResultMark::Loss,
            ResultMark::Win,
            ResultMark::Win,
            ResultMark::Win
        ]
    );
}

#[test]
fn unknown_teams_are_skipped() {
    let roster = names(&["Lions", "Tigers"]);
    let fixtures = vec![
        Fixture::new("Lions", "Bears").with_score(70, 50),
        Fixture::new("lions", "Tigers").with_score(70, 50),
    ];
    let table = compute_standings(&roster, &fixtures);
    assert!(table.iter().all(|s| s.played == 0));
}

#[test]
fn alias_table_resolves_alternate_spellings() {
    let roster = names(&["Lions BC", "Tigers"]);
    let aliases = AliasTable::from_pairs([("lions", "Lions BC"), ("LIONS B.C.", "Lions BC")]);
    assert_eq!(aliases.len(), 2);
    assert!(!aliases.is_empty());
    assert!(AliasTable::new().is_empty());
    let fixtures = vec![
        Fixture::new("Lions", "Tigers").with_score(70, 50),
        Fixture::new("Tigers", " lions b.c. ").with_score(40, 60),
    ];
    let table = compute_standings_with(&roster, &fixtures, &aliases, &ScoringRules::default());
    let lions = row(&table, "Lions BC");
    assert_eq!((lions.wins, lions.points, lions.points_for), (2, 4, 130));

    let plain = compute_standings_with(&roster, &fixtures, &IdentityResolver, &ScoringRules::default());
    assert!(plain.iter().all(|s| s.played == 0));
}

#[test]
fn custom_scoring_rules_apply() {
    let roster = names(&["A", "B"]);
    let rules = ScoringRules {
        win: 3,
        loss: 0,
        ..ScoringRules::default()
    };
    let table = compute_standings_with(
        &roster,
        &[Fixture::new("A", "B").with_score(3, 1)],
        &IdentityResolver,
        &rules,
    );
    assert_eq!(row(&table, "A").points, 3);
    assert_eq!(row(&table, "B").points, 0);
}

#[test]
fn group_standings_read_the_group_calendar() {
    let roster = names(&["A", "B", "C", "D"]);
    let mut group = build_group("Group A", &roster, false);
    // Home side wins every game of the first round.
    for f in &mut group.rounds[0].fixtures {
        f.home_score = Some(60);
        f.away_score = Some(50);
    }
    let table = compute_group_standings(&group);
    assert_eq!(table.iter().map(|s| s.played).sum::<u32>(), 4);
    assert_eq!(order(&table), ["A", "B", "C", "D"]);
    assert_eq!(row(&table, "D").points, 1);
}

#[test]
fn standings_are_deterministic() {
    let roster = names(&["A", "B", "C"]);
    let fixtures = vec![
        Fixture::new("A", "B").with_score(1, 2),
        Fixture::new("B", "C").with_score(3, 2),
    ];
    assert_eq!(
        compute_standings(&roster, &fixtures),
        compute_standings(&roster, &fixtures)
    );
}

#[test]
fn huge_scores_do_not_overflow_totals() {
    let roster = names(&["A", "B"]);
    let fixtures = vec![
        Fixture::new("A", "B").with_score(u32::MAX, 0),
        Fixture::new("A", "B").with_score(1, 0),
        Fixture::new("B", "A").with_score(u32::MAX, u32::MAX - 1),
    ];
    let table = compute_standings(&roster, &fixtures);
    let a = row(&table, "A");
    let b = row(&table, "B");
    assert_eq!(a.points_for, 2 * u64::from(u32::MAX));
    assert_eq!(a.points_against, u64::from(u32::MAX));
    assert_eq!(a.points_difference, i64::from(u32::MAX));
    assert_eq!(b.points_difference, -i64::from(u32::MAX));
    assert_eq!((a.wins, b.wins), (2, 1));
    assert_eq!(order(&table), ["A", "B"]);
}
