#[cfg(test)]
mod tests {
    use crate::quiz::*;

    fn answer(difficulty: Difficulty, correct: bool) -> QuizAnswer {
        QuizAnswer {
            difficulty,
            correct,
        }
    }

    #[test]
    fn test_empty_quiz_scores_nothing() {
        let score = score_quiz(&[]);
        assert_eq!(score.xp, 0);
        assert!(!score.perfect);
    }

    #[test]
    fn test_xp_scales_with_difficulty() {
        let score = score_quiz(&[
            answer(Difficulty::Easy, true),
            answer(Difficulty::Medium, true),
            answer(Difficulty::Hard, false),
        ]);
        assert_eq!(score.correct, 2);
        assert_eq!(score.total, 3);
        assert!(!score.perfect);
        assert_eq!(score.xp, 25);
    }

    #[test]
    fn test_perfect_quiz_adds_bonus() {
        let score = score_quiz(&[answer(Difficulty::Hard, true), answer(Difficulty::Easy, true)]);
        assert!(score.perfect);
        assert_eq!(score.xp, 20 + 10 + PERFECT_BONUS_XP);
    }

    #[test]
    fn test_all_wrong() {
        let score = score_quiz(&[answer(Difficulty::Hard, false); 4]);
        assert_eq!(score.correct, 0);
        assert_eq!(score.xp, 0);
    }

    #[test]
    fn test_well_formed_question() {
        let mut question = QuizQuestion {
            id: "q".to_string(),
            topic: "saving".to_string(),
            prompt: "Pick one".to_string(),
            options: vec!["a".to_string(), "b".to_string()],
            correct_index: 1,
            explanation: None,
            difficulty: Difficulty::Easy,
        };
        assert!(question.is_well_formed());

        question.correct_index = 2;
        assert!(!question.is_well_formed());

        question.correct_index = 0;
        question.options.truncate(1);
        assert!(!question.is_well_formed());
    }

    #[test]
    fn test_answer_difficulty_defaults_to_easy() {
        let parsed: QuizAnswer = serde_json::from_str(r#"{"correct":true}"#).unwrap();
        assert_eq!(parsed.difficulty, Difficulty::Easy);
    }
}
