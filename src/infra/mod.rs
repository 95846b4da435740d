use secrecy::SecretString;

use crate::{adapters::persistence::PostgresPersistence, infra::db::init_db, infra::error::InfraError};

pub mod app;
pub mod config;
pub mod db;
pub mod error;
pub mod setup;
pub mod shutdown;

pub async fn postgres_persistence(
    database_url: &SecretString,
    max_connections: u32,
) -> Result<PostgresPersistence, InfraError> {
    let pool = init_db(database_url, max_connections).await?;
    let persistence = PostgresPersistence::new(pool);
    Ok(persistence)
}
