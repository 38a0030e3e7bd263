#[cfg(test)]
mod tests {
    use crate::arena::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn answers(correct: bool, elapsed_ms: u64, n: usize) -> Vec<PlayerAnswer> {
        vec![
            PlayerAnswer {
                correct,
                elapsed_ms
            };
            n
        ]
    }

    #[test]
    fn test_same_seed_same_match() {
        let player = answers(true, 4_000, 8);
        let a = simulate_match(
            &mut StdRng::seed_from_u64(42),
            "me",
            &player,
            3,
            DEFAULT_TIME_LIMIT_MS,
        );
        let b = simulate_match(
            &mut StdRng::seed_from_u64(42),
            "me",
            &player,
            3,
            DEFAULT_TIME_LIMIT_MS,
        );
        assert_eq!(a, b);
        assert_eq!(a.standings.len(), 4);
    }

    #[test]
    fn test_standings_sorted_and_placement_consistent() {
        let result = simulate_match(
            &mut StdRng::seed_from_u64(7),
            "me",
            &answers(true, 9_000, 10),
            4,
            DEFAULT_TIME_LIMIT_MS,
        );

        for pair in result.standings.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
        assert!(result.standings[result.placement - 1].is_player);
        assert_eq!(result.xp, placement_xp(result.placement));
        assert_eq!(result.won, result.placement == 1);
    }

    #[test]
    fn test_ties_favour_player() {
        let result = simulate_match(
            &mut StdRng::seed_from_u64(1),
            "me",
            &[],
            3,
            DEFAULT_TIME_LIMIT_MS,
        );
        assert_eq!(result.placement, 1);
        assert!(result.won);
        assert_eq!(result.xp, 50);
    }

    #[test]
    fn test_no_opponents_always_wins() {
        let result = simulate_match(
            &mut StdRng::seed_from_u64(3),
            "me",
            &answers(false, 1_000, 5),
            0,
            DEFAULT_TIME_LIMIT_MS,
        );
        assert_eq!(result.standings.len(), 1);
        assert_eq!(result.placement, 1);
    }

    #[test]
    fn test_answer_points() {
        assert_eq!(answer_points(false, 0, 10_000), 0);
        assert_eq!(answer_points(true, 0, 10_000), 150);
        assert_eq!(answer_points(true, 5_000, 10_000), 125);
        assert_eq!(answer_points(true, 10_000, 10_000), 100);
        // Late answers still count, without speed bonus
        assert_eq!(answer_points(true, 60_000, 10_000), 100);
    }

    #[test]
    fn test_oversized_time_limit() {
        assert_eq!(answer_points(true, 0, 1_000_000_000_000_000_000), 150);
        assert_eq!(answer_points(true, 0, u64::MAX), 150);
        assert_eq!(answer_points(true, u64::MAX, u64::MAX), 100);

        // The match itself caps the limit, so opponents stay within a sane window
        let played = answers(true, 0, 5);
        let capped = simulate_match(&mut StdRng::seed_from_u64(3), "me", &played, 3, u64::MAX);
        let sane = simulate_match(
            &mut StdRng::seed_from_u64(3),
            "me",
            &played,
            3,
            MAX_TIME_LIMIT_MS,
        );
        assert_eq!(capped, sane);
        assert!(capped.standings.iter().all(|s| s.score <= 150 * 5));
    }

    #[test]
    fn test_placement_xp() {
        assert_eq!(placement_xp(1), 50);
        assert_eq!(placement_xp(2), 30);
        assert_eq!(placement_xp(3), 20);
        assert_eq!(placement_xp(4), 10);
        assert_eq!(placement_xp(9), 10);
    }

    #[test]
    fn test_opponents_have_distinct_names() {
        let opponents = generate_opponents(&mut StdRng::seed_from_u64(9), 10);
        assert_eq!(opponents.len(), 10);

        let mut names: Vec<_> = opponents.iter().map(|o| o.name.clone()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 10);

        for opponent in &opponents {
            assert!(opponent.skill >= 0.35 && opponent.skill < 0.9);
        }
    }
}
