use super::types::ScoreArgs;

/// A scoring rule: rule precedence is encoded by table position,
/// the first rule whose predicate matches wins.
struct ScoreRule {
    name: &'static str,
    points: u32,
    applies: fn(&Settled) -> bool,
}

const RULES: &[ScoreRule] = &[
    ScoreRule {
        name: "perfect score",
        points: 200,
        applies: perfect_score,
    },
    ScoreRule {
        name: "winner's exact score",
        points: 150,
        applies: winners_exact_score,
    },
    ScoreRule {
        name: "draw",
        points: 150,
        applies: predicted_draw,
    },
    ScoreRule {
        name: "winner and goal difference",
        points: 100,
        applies: winner_and_goal_difference,
    },
    ScoreRule {
        name: "winner and loser's exact score",
        points: 120,
        applies: winner_and_losers_exact_score,
    },
    ScoreRule {
        name: "winner only",
        points: 80,
        applies: winner_only,
    },
];

/// Score one prediction against one result.
///
/// Returns 0 when any field is missing: a prediction cannot be scored
/// against an incomplete result or an incomplete bet.
pub fn evaluate_score(args: &ScoreArgs) -> u32 {
    let settled = match settle(args) {
        Some(settled) => settled,
        None => return 0,
    };

    match RULES.iter().find(|rule| (rule.applies)(&settled)) {
        Some(rule) => {
            log::debug!("prediction matched rule '{}' for {} points", rule.name, rule.points);
            rule.points
        }
        None => 0,
    }
}

/// A fully-known result/bet pair, safe for the rule predicates
struct Settled {
    result_home: i32,
    result_away: i32,
    bet_home: i32,
    bet_away: i32,
}

fn settle(args: &ScoreArgs) -> Option<Settled> {
    Some(Settled {
        result_home: args.result_home?,
        result_away: args.result_away?,
        bet_home: args.bet_home?,
        bet_away: args.bet_away?,
    })
}

impl Settled {
    fn has_winner(&self) -> bool {
        self.result_home != self.result_away
    }

    /// Both comparisons strict and pointing the same way. A draw never
    /// has a winner, so this is false for any drawn result.
    fn winner_matches(&self) -> bool {
        (self.result_home > self.result_away && self.bet_home > self.bet_away)
            || (self.result_home < self.result_away && self.bet_home < self.bet_away)
    }

    fn winning_score_matches(&self) -> bool {
        if self.result_home > self.result_away {
            self.bet_home == self.result_home
        } else {
            self.bet_away == self.result_away
        }
    }

    fn losing_score_matches(&self) -> bool {
        if self.result_home > self.result_away {
            self.bet_away == self.result_away
        } else {
            self.bet_home == self.result_home
        }
    }

    fn goal_difference_matches(&self) -> bool {
        (self.result_home - self.result_away).abs() == (self.bet_home - self.bet_away).abs()
    }
}

fn perfect_score(s: &Settled) -> bool {
    s.bet_home == s.result_home && s.bet_away == s.result_away
}

fn winners_exact_score(s: &Settled) -> bool {
    s.has_winner() && s.winner_matches() && s.winning_score_matches()
}

fn predicted_draw(s: &Settled) -> bool {
    s.result_home == s.result_away && s.bet_home == s.bet_away
}

fn winner_and_goal_difference(s: &Settled) -> bool {
    s.has_winner() && s.winner_matches() && s.goal_difference_matches()
}

fn winner_and_losers_exact_score(s: &Settled) -> bool {
    s.has_winner() && s.winner_matches() && s.losing_score_matches()
}

fn winner_only(s: &Settled) -> bool {
    s.has_winner() && s.winner_matches()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(result_home: i32, result_away: i32, bet_home: i32, bet_away: i32) -> ScoreArgs {
        ScoreArgs {
            result_home: Some(result_home),
            result_away: Some(result_away),
            bet_home: Some(bet_home),
            bet_away: Some(bet_away),
        }
    }

    #[test]
    fn missing_result_is_worth_nothing() {
        let incomplete = ScoreArgs {
            result_home: None,
            result_away: Some(1),
            bet_home: Some(1),
            bet_away: Some(1),
        };

        assert_eq!(evaluate_score(&incomplete), 0);
    }

    #[test]
    fn missing_bet_is_worth_nothing() {
        let incomplete = ScoreArgs {
            result_home: Some(2),
            result_away: Some(0),
            bet_home: Some(2),
            bet_away: None,
        };

        assert_eq!(evaluate_score(&incomplete), 0);
    }

    #[test]
    fn perfect_score_wins_200() {
        assert_eq!(evaluate_score(&args(2, 0, 2, 0)), 200);
    }

    #[test]
    fn perfect_draw_is_a_perfect_score() {
        // 0-0 predicted and played must hit the perfect rule, not the draw rule
        assert_eq!(evaluate_score(&args(0, 0, 0, 0)), 200);
    }

    #[test]
    fn winners_exact_score_wins_150() {
        assert_eq!(evaluate_score(&args(3, 0, 3, 1)), 150);
    }

    #[test]
    fn non_perfect_draw_wins_150() {
        assert_eq!(evaluate_score(&args(1, 1, 0, 0)), 150);
    }

    #[test]
    fn winner_with_goal_difference_wins_100() {
        assert_eq!(evaluate_score(&args(2, 1, 1, 0)), 100);
    }

    #[test]
    fn winner_with_losers_exact_score_wins_120() {
        assert_eq!(evaluate_score(&args(3, 1, 2, 1)), 120);
    }

    #[test]
    fn winner_only_wins_80() {
        assert_eq!(evaluate_score(&args(3, 0, 2, 1)), 80);
    }

    #[test]
    fn wrong_winner_wins_nothing() {
        assert_eq!(evaluate_score(&args(3, 1, 0, 2)), 0);
    }

    #[test]
    fn predicted_draw_on_decided_match_wins_nothing() {
        assert_eq!(evaluate_score(&args(2, 1, 1, 1)), 0);
    }

    #[test]
    fn away_winner_mirrors_home_rules() {
        assert_eq!(evaluate_score(&args(0, 3, 1, 3)), 150);
        assert_eq!(evaluate_score(&args(1, 3, 0, 2)), 100);
        assert_eq!(evaluate_score(&args(1, 3, 1, 2)), 120);
        assert_eq!(evaluate_score(&args(0, 3, 1, 2)), 80);
    }

    #[test]
    fn evaluation_is_idempotent() {
        let sample = args(3, 1, 2, 1);

        assert_eq!(evaluate_score(&sample), evaluate_score(&sample));
    }
}
