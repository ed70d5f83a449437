use std::sync::Arc;

use bond_recommender_core::{
    collections::CollectionRegistry, fetch::FetchService, recommender::RecommenderService,
    search::SearchService, store::Store, suggest::SuggestService,
};
use bond_recommender_exchange::{ExchangeProvider, IssClient};
use bond_recommender_storage_sqlite::SqliteStore;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;

pub struct AppState {
    pub store: Arc<dyn Store>,
    pub recommender: Arc<RecommenderService>,
    pub suggest_service: Arc<SuggestService>,
    pub search_service: Arc<SearchService>,
    pub fetch_service: Arc<FetchService>,
    /// Cancelled on shutdown; stops background jobs and running fetches.
    pub shutdown: CancellationToken,
}

pub fn init_tracing() {
    let log_format = std::env::var("BR_LOG_FORMAT").unwrap_or_else(|_| "json".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("text") {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    } else {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let provider: Arc<dyn ExchangeProvider> = Arc::new(IssClient::with_url(&config.iss_url)?);
    tracing::info!("Exchange endpoint: {}", config.iss_url);
    build_state_with_provider(config, provider).await
}

/// Wires storage and services around an exchange provider.
pub async fn build_state_with_provider(
    config: &Config,
    provider: Arc<dyn ExchangeProvider>,
) -> anyhow::Result<Arc<AppState>> {
    let db_path = config.db_path.clone();
    let sqlite = tokio::task::spawn_blocking(move || SqliteStore::open(&db_path)).await??;
    tracing::info!("Database path in use: {}", config.db_path);
    let store: Arc<dyn Store> = Arc::new(sqlite);

    let registry = Arc::new(CollectionRegistry::standard());
    let recommender = Arc::new(RecommenderService::new(store.clone(), registry.clone()));
    let suggest_service = Arc::new(SuggestService::new(store.clone(), registry));
    let search_service = Arc::new(SearchService::new(store.clone()));

    let shutdown = CancellationToken::new();
    let fetch_service = Arc::new(FetchService::new(
        store.clone(),
        provider,
        recommender.clone(),
        shutdown.child_token(),
    ));

    Ok(Arc::new(AppState {
        store,
        recommender,
        suggest_service,
        search_service,
        fetch_service,
        shutdown,
    }))
}
