use super::rules::evaluate_score;
use super::types::{BetSide, FixtureResult, LeaderboardEntry, Player, Prediction, ScoreArgs};

/// Compute every player's point total across all decided fixtures.
///
/// Entries come back in the same order as the input players; ranking
/// for display is the caller's concern.
pub fn compute_leaderboard(
    players: &[Player],
    fixtures: &[FixtureResult],
    predictions: &[Prediction],
) -> Vec<LeaderboardEntry> {
    players
        .iter()
        .map(|player| LeaderboardEntry {
            name: player.display_name(),
            total: total_for_player(player, fixtures, predictions),
        })
        .collect()
}

fn total_for_player(
    player: &Player,
    fixtures: &[FixtureResult],
    predictions: &[Prediction],
) -> u32 {
    fixtures
        .iter()
        .filter(|fixture| fixture.is_decided())
        .map(|fixture| fixture_points(player, fixture, predictions))
        .sum()
}

fn fixture_points(player: &Player, fixture: &FixtureResult, predictions: &[Prediction]) -> u32 {
    let bet_home = find_prediction(predictions, player, fixture, BetSide::Home)
        .and_then(|prediction| prediction.value);
    let bet_away = find_prediction(predictions, player, fixture, BetSide::Away)
        .and_then(|prediction| prediction.value);

    // A missing record, or a record without a value, contributes nothing
    // and the evaluator is never called.
    let (bet_home, bet_away) = match (bet_home, bet_away) {
        (Some(home), Some(away)) => (home, away),
        _ => return 0,
    };

    // A decided fixture with a side the provider never filled in counts
    // as 0 goals. This default applies here only, never in the evaluator.
    let result = fixture.result_pair();
    evaluate_score(&ScoreArgs {
        result_home: Some(result.home.unwrap_or(0)),
        result_away: Some(result.away.unwrap_or(0)),
        bet_home: Some(bet_home),
        bet_away: Some(bet_away),
    })
}

fn find_prediction<'a>(
    predictions: &'a [Prediction],
    player: &Player,
    fixture: &FixtureResult,
    side: BetSide,
) -> Option<&'a Prediction> {
    predictions.iter().find(|prediction| {
        prediction.member_id == player.member_id
            && prediction.fixture_id == fixture.fixture_id
            && prediction.side == side
    })
}

#[cfg(test)]
mod tests {
    use super::super::types::ScorePair;
    use super::*;

    fn player(member_id: i64, email: &str) -> Player {
        Player {
            member_id,
            username: None,
            email: email.to_string(),
        }
    }

    fn fixture(fixture_id: &str, status: &str, home: Option<i32>, away: Option<i32>) -> FixtureResult {
        FixtureResult {
            fixture_id: fixture_id.to_string(),
            status: status.to_string(),
            fulltime: ScorePair { home, away },
            halftime: ScorePair::default(),
        }
    }

    fn prediction(member_id: i64, fixture_id: &str, side: BetSide, value: Option<i32>) -> Prediction {
        Prediction {
            member_id,
            fixture_id: fixture_id.to_string(),
            side,
            value,
        }
    }

    fn full_bet(member_id: i64, fixture_id: &str, home: i32, away: i32) -> Vec<Prediction> {
        vec![
            prediction(member_id, fixture_id, BetSide::Home, Some(home)),
            prediction(member_id, fixture_id, BetSide::Away, Some(away)),
        ]
    }

    #[test]
    fn no_players_means_no_entries() {
        let fixtures = vec![fixture("1", "FT", Some(2), Some(0))];
        let predictions = full_bet(1, "1", 2, 0);

        let entries = compute_leaderboard(&[], &fixtures, &predictions);

        assert!(entries.is_empty());
    }

    #[test]
    fn no_fixtures_means_zero_totals() {
        let players = vec![player(1, "ana@example.com")];

        let entries = compute_leaderboard(&players, &[], &[]);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].total, 0);
    }

    #[test]
    fn single_finished_fixture_sums_one_evaluation() {
        let players = vec![player(1, "ana@example.com")];
        let fixtures = vec![fixture("1", "FT", Some(2), Some(0))];
        let predictions = full_bet(1, "1", 2, 0);

        let entries = compute_leaderboard(&players, &fixtures, &predictions);

        assert_eq!(entries[0].total, 200);
    }

    #[test]
    fn totals_accumulate_across_fixtures() {
        let players = vec![player(1, "ana@example.com")];
        let fixtures = vec![
            fixture("1", "FT", Some(2), Some(0)),
            fixture("2", "FT", Some(1), Some(1)),
        ];
        let mut predictions = full_bet(1, "1", 2, 0);
        predictions.extend(full_bet(1, "2", 0, 0));

        let entries = compute_leaderboard(&players, &fixtures, &predictions);

        // 200 for the exact result plus 150 for the non-perfect draw
        assert_eq!(entries[0].total, 350);
    }

    #[test]
    fn undecided_fixtures_never_score() {
        let players = vec![player(1, "ana@example.com")];
        let fixtures = vec![
            fixture("1", "NS", Some(2), Some(0)),
            fixture("2", "1H", Some(2), Some(0)),
            fixture("3", "ABD", Some(2), Some(0)),
        ];
        let mut predictions = full_bet(1, "1", 2, 0);
        predictions.extend(full_bet(1, "2", 2, 0));
        predictions.extend(full_bet(1, "3", 2, 0));

        let entries = compute_leaderboard(&players, &fixtures, &predictions);

        assert_eq!(entries[0].total, 0);
    }

    #[test]
    fn valueless_prediction_contributes_zero() {
        let players = vec![player(1, "ana@example.com")];
        let fixtures = vec![fixture("1", "FT", Some(2), Some(0))];
        let predictions = vec![
            prediction(1, "1", BetSide::Home, Some(2)),
            prediction(1, "1", BetSide::Away, None),
        ];

        let entries = compute_leaderboard(&players, &fixtures, &predictions);

        assert_eq!(entries[0].total, 0);
    }

    #[test]
    fn missing_prediction_record_contributes_zero() {
        let players = vec![player(1, "ana@example.com")];
        let fixtures = vec![fixture("1", "FT", Some(2), Some(0))];
        let predictions = vec![prediction(1, "1", BetSide::Home, Some(2))];

        let entries = compute_leaderboard(&players, &fixtures, &predictions);

        assert_eq!(entries[0].total, 0);
    }

    #[test]
    fn unreported_result_counts_as_goalless_draw() {
        let players = vec![player(1, "ana@example.com")];
        let fixtures = vec![fixture("1", "FT", None, None)];
        let predictions = full_bet(1, "1", 0, 0);

        let entries = compute_leaderboard(&players, &fixtures, &predictions);

        assert_eq!(entries[0].total, 200);
    }

    #[test]
    fn duplicate_predictions_use_the_first_record() {
        let players = vec![player(1, "ana@example.com")];
        let fixtures = vec![fixture("1", "FT", Some(2), Some(0))];
        let predictions = vec![
            prediction(1, "1", BetSide::Home, Some(2)),
            prediction(1, "1", BetSide::Home, Some(5)),
            prediction(1, "1", BetSide::Away, Some(0)),
        ];

        let entries = compute_leaderboard(&players, &fixtures, &predictions);

        assert_eq!(entries[0].total, 200);
    }

    #[test]
    fn entries_keep_player_order_and_names() {
        let players = vec![
            player(2, "bruno@example.com"),
            Player {
                member_id: 1,
                username: Some("ana".to_string()),
                email: "ana.silva@example.com".to_string(),
            },
        ];
        let fixtures = vec![fixture("1", "FT", Some(1), Some(0))];
        let predictions = full_bet(1, "1", 1, 0);

        let entries = compute_leaderboard(&players, &fixtures, &predictions);

        assert_eq!(entries[0].name, "bruno");
        assert_eq!(entries[0].total, 0);
        assert_eq!(entries[1].name, "ana");
        assert_eq!(entries[1].total, 200);
    }
}
