use crate::{
    adapters::{http::app_state::AppState, persistence::PostgresPersistence},
    infra::{config::AppConfig, db::run_migrations, error::InfraError, postgres_persistence},
    use_cases::waitlist::{WaitlistRepo, WaitlistUseCases},
};
use std::fs::File;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Opens the pool once for the whole process and brings the schema up to date.
pub async fn init_persistence(config: &AppConfig) -> Result<PostgresPersistence, InfraError> {
    let persistence =
        postgres_persistence(&config.database_url, config.database_max_connections).await?;

    if config.run_migrations {
        run_migrations(persistence.pool()).await?;
    }

    Ok(persistence)
}

pub fn init_app_state(config: AppConfig, persistence: Arc<PostgresPersistence>) -> AppState {
    let waitlist_repo_arc = persistence as Arc<dyn WaitlistRepo>;
    let waitlist_use_cases = WaitlistUseCases::new(waitlist_repo_arc);

    AppState {
        config: Arc::new(config),
        waitlist_use_cases: Arc::new(waitlist_use_cases),
    }
}

pub fn init_tracing(log_file: &str) -> Result<(), InfraError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "waitlist=debug,tower_http=debug".into());

    // Console (pretty logs)
    let console_layer = fmt::layer()
        .with_target(false) // don't show target (module path)
        .with_level(true)
        .pretty();

    // File (structured JSON logs)
    let file = File::create(log_file).map_err(InfraError::LogFile)?;
    let json_layer = fmt::layer()
        .json()
        .with_writer(file)
        .with_current_span(true)
        .with_span_list(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(json_layer)
        .try_init()
        .map_err(InfraError::Tracing)
}
