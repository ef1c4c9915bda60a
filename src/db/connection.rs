use sea_orm::DatabaseConnection;
use tracing::info;

use super::{
    entities::{board, element},
    providers,
};
use crate::config::DatabaseConfig;

/// Opens a pool through the provider matching the URL scheme and brings the
/// schema in line with the entity definitions.
pub async fn connect(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let registry = providers::default_registry()?;
    let provider = registry.provider_for_url(&cfg.url)?;
    info!(provider = provider.id().as_str(), "connecting to database");

    let db = provider.connect(cfg).await?;
    provider.post_connect(&db, cfg).await?;
    sync_schema(&db).await?;
    Ok(db)
}

/// Creates missing tables, columns and indexes for `boards` and `elements`.
pub async fn sync_schema(db: &DatabaseConnection) -> anyhow::Result<()> {
    info!("syncing database schema from entities");
    db.get_schema_builder()
        .register(board::Entity)
        .register(element::Entity)
        .sync(db)
        .await?;
    Ok(())
}
