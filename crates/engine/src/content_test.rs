#[cfg(test)]
mod tests {
    use crate::content::*;
    use crate::fallback;
    use crate::quiz::Difficulty;
    use common::models::ProfileKind;
    use std::time::Duration;

    #[tokio::test]
    async fn test_offline_service_uses_fallback() {
        let service = QuizService::offline();
        let set = service.questions(Some("saving"), ProfileKind::Adult, 5).await;

        assert_eq!(set.source, QuestionSource::Fallback);
        assert_eq!(set.questions.len(), 3);
        assert!(set.questions.iter().all(|q| q.topic == "saving"));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_falls_back() {
        let client =
            ContentClient::new("http://127.0.0.1:9", None, Duration::from_millis(500)).unwrap();
        let service = QuizService::new(Some(client));

        let set = service.questions(Some("credit"), ProfileKind::Adult, 2).await;
        assert_eq!(set.source, QuestionSource::Fallback);
        assert_eq!(set.questions.len(), 2);
    }

    #[tokio::test]
    async fn test_junior_never_gets_hard_questions() {
        let set = QuizService::offline()
            .questions(None, ProfileKind::Junior, 50)
            .await;

        assert!(!set.questions.is_empty());
        assert!(set
            .questions
            .iter()
            .all(|q| q.difficulty != Difficulty::Hard));
    }

    #[tokio::test]
    async fn test_count_is_at_least_one() {
        let set = QuizService::offline()
            .questions(Some("budgeting"), ProfileKind::Adult, 0)
            .await;
        assert_eq!(set.questions.len(), 1);
    }

    #[test]
    fn test_unknown_topic_returns_whole_bank() {
        assert_eq!(
            fallback::questions_for(Some("crypto")).len(),
            fallback::all_questions().len()
        );
    }

    #[test]
    fn test_topic_match_ignores_case() {
        let questions = fallback::questions_for(Some(" Investing "));
        assert!(!questions.is_empty());
        assert!(questions.iter().all(|q| q.topic == "investing"));
    }

    #[test]
    fn test_fallback_bank_is_well_formed() {
        let questions = fallback::all_questions();
        assert!(questions.iter().all(|q| q.is_well_formed()));
        assert_eq!(fallback::topics(), vec!["budgeting", "saving", "investing", "credit"]);
    }
}
