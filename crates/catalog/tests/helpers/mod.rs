use std::{path::PathBuf, str::FromStr};

use grocer_catalog::Repository;
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use sqlx_migrator::{Migrate, Plan};

pub async fn setup_repository(path: PathBuf) -> anyhow::Result<Repository> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    let mut conn = pool.acquire().await?;
    grocer_db::migrator()?
        .run(&mut conn, &Plan::apply_all())
        .await?;

    Ok(Repository(pool))
}
