use std::time::Duration;

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tracing::{info, warn};

use crate::infra::config::AppConfig;

/// Connects once at boot, retrying up to `db.connect_retries` times.
pub async fn init_db(config: &AppConfig) -> anyhow::Result<PgPool> {
    let delay = Duration::from_secs(config.db.retry_delay_secs);
    let mut attempt = 1;
    loop {
        let result = PgPoolOptions::new()
            .max_connections(config.db.max_connections as u32)
            .connect(config.db.url.as_str())
            .await;
        match result {
            Ok(pool) => {
                info!("Connected to database!");
                return Ok(pool);
            }
            Err(e) if attempt < config.db.connect_retries => {
                warn!(
                    error = %e,
                    retries_left = config.db.connect_retries - attempt,
                    "Database connection failed, retrying in {}s",
                    delay.as_secs()
                );
                attempt += 1;
                tokio::time::sleep(delay).await;
            }
            Err(e) => return Err(e.into()),
        }
    }
}

