//! Generated quiz content with a static fallback

use std::time::Duration;

use common::models::ProfileKind;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::fallback;
use crate::quiz::{Difficulty, QuizQuestion};

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Content API error: {status} - {message}")]
    Api { status: u16, message: String },
    #[error("Malformed content response: {0}")]
    Malformed(String),
    #[error("Content API returned no usable questions")]
    Empty,
}

impl ContentError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, ContentError::Http(e) if e.is_timeout())
    }
}

#[derive(Serialize)]
struct QuestionRequest<'a> {
    topic: Option<&'a str>,
    audience: ProfileKind,
    count: usize,
}

#[derive(Deserialize)]
struct QuestionResponse {
    questions: Vec<QuizQuestion>,
}

/// Client for the question-generation service
pub struct ContentClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl ContentClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, ContentError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent("coin-quest")
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
        })
    }

    /// Ask the service for `count` questions
    pub async fn fetch_questions(
        &self,
        topic: Option<&str>,
        audience: ProfileKind,
        count: usize,
    ) -> Result<Vec<QuizQuestion>, ContentError> {
        let url = format!("{}/questions", self.base_url);
        debug!("Requesting {} questions from {}", count, url);

        let mut request = self.client.post(&url).json(&QuestionRequest {
            topic,
            audience,
            count,
        });
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ContentError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: QuestionResponse = response
            .json()
            .await
            .map_err(|e| ContentError::Malformed(e.to_string()))?;

        let questions: Vec<_> = body
            .questions
            .into_iter()
            .filter(QuizQuestion::is_well_formed)
            .collect();

        if questions.is_empty() {
            return Err(ContentError::Empty);
        }
        Ok(questions)
    }
}

/// Where a question set came from
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum QuestionSource {
    Generated,
    Fallback,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionSet {
    pub source: QuestionSource,
    pub questions: Vec<QuizQuestion>,
}

/// Hands out quiz questions, preferring generated content
pub struct QuizService {
    client: Option<ContentClient>,
}

impl QuizService {
    pub fn new(client: Option<ContentClient>) -> Self {
        Self { client }
    }

    /// Static questions only
    pub fn offline() -> Self {
        Self { client: None }
    }

    pub async fn questions(
        &self,
        topic: Option<&str>,
        audience: ProfileKind,
        count: usize,
    ) -> QuestionSet {
        let count = count.max(1);

        if let Some(client) = &self.client {
            match client.fetch_questions(topic, audience, count).await {
                Ok(questions) => {
                    let questions = for_audience(questions, audience, count);
                    if !questions.is_empty() {
                        info!("Serving {} generated questions", questions.len());
                        return QuestionSet {
                            source: QuestionSource::Generated,
                            questions,
                        };
                    }
                    warn!("No generated questions suit a {} profile", audience.as_str());
                }
                Err(e) if e.is_timeout() => {
                    warn!("Content API timed out, using static questions");
                }
                Err(e) => {
                    warn!("Content API failed, using static questions: {}", e);
                }
            }
        }

        QuestionSet {
            source: QuestionSource::Fallback,
            questions: for_audience(fallback::questions_for(topic), audience, count),
        }
    }
}

/// Junior profiles never see hard questions
fn for_audience(
    questions: Vec<QuizQuestion>,
    audience: ProfileKind,
    count: usize,
) -> Vec<QuizQuestion> {
    questions
        .into_iter()
        .filter(|q| audience == ProfileKind::Adult || q.difficulty != Difficulty::Hard)
        .take(count)
        .collect()
}
