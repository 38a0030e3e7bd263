//! Application state

use std::sync::Arc;
use std::time::Duration;

use common::Config;
use engine::{ContentClient, EngineConfig, ProgressTracker, QuizService};
use sqlx::PgPool;
use tracing::info;

/// Shared application state
pub struct AppState {
    pub config: Config,
    pub pool: PgPool,
    pub engine: Arc<EngineConfig>,
    pub tracker: ProgressTracker,
    pub quiz: QuizService,
}

impl AppState {
    pub fn new(config: Config, pool: PgPool, engine: EngineConfig) -> anyhow::Result<Self> {
        let engine = Arc::new(engine);
        let tracker = ProgressTracker::new(pool.clone(), engine.clone(), config.utc_offset_minutes);

        let client = match &config.content_api_url {
            Some(url) => {
                info!("🧠 Quiz content from {}", url);
                Some(ContentClient::new(
                    url.clone(),
                    config.content_api_key.clone(),
                    Duration::from_secs(config.content_timeout_secs),
                )?)
            }
            None => {
                info!("🧠 No CONTENT_API_URL set, serving static quiz questions");
                None
            }
        };

        Ok(Self {
            config,
            pool,
            engine,
            tracker,
            quiz: QuizService::new(client),
        })
    }
}
