use dotenvy::dotenv;
use std::sync::Arc;
use tracing::info;

use waitlist::infra::{
    app::create_app,
    config::AppConfig,
    error::InfraError,
    setup::{init_app_state, init_persistence, init_tracing},
    shutdown::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = AppConfig::from_env();
    init_tracing(&config.log_file)?;

    // One pool for the whole process, closed explicitly after the server drains.
    let persistence = Arc::new(init_persistence(&config).await?);

    let bind_addr = config.bind_addr;
    let app_state = init_app_state(config, persistence.clone());
    let app = create_app(app_state);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .map_err(InfraError::TcpBind)?;

    info!("Backend listening at {}", &listener.local_addr()?);

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(InfraError::Server);

    persistence.close().await;
    served?;

    Ok(())
}
