//! Database migration utilities

use sqlx::SqlitePool;
use sqlx_migrator::{Migrate, Plan};

/// Apply every pending catalog migration
pub async fn migrate(pool: &SqlitePool) -> anyhow::Result<()> {
    tracing::info!("Migrating catalog database");

    let mut conn = pool.acquire().await?;
    grocer_db::migrator()?
        .run(&mut conn, &Plan::apply_all())
        .await?;

    tracing::info!("Catalog database migrated");

    Ok(())
}
