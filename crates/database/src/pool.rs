use deadpool_postgres::{ManagerConfig, Pool, RecyclingMethod, Runtime};
use tokio_postgres::NoTls;

/// Connection pool type alias
pub type DbPool = Pool;

/// Create a connection pool from database configuration.
///
/// Checks out one connection before returning so a bad address or bad
/// credentials fail at startup instead of on the first request.
pub async fn create_pool(config: &config::DatabaseConfig) -> anyhow::Result<DbPool> {
    let mut cfg = deadpool_postgres::Config::new();
    cfg.user = Some(config.user.clone());
    cfg.password = Some(config.pass.clone());
    cfg.host = Some(config.host.clone());
    cfg.port = Some(config.port);
    cfg.dbname = Some(config.name.clone());
    cfg.manager = Some(ManagerConfig {
        recycling_method: RecyclingMethod::Fast,
    });
    cfg.pool = Some(deadpool_postgres::PoolConfig::new(
        config.max_connections as usize,
    ));

    let pool = cfg
        .create_pool(Some(Runtime::Tokio1), NoTls)
        .map_err(|e| anyhow::anyhow!("Failed to create connection pool: {e}"))?;

    // Verify the database is reachable before handing the pool out
    let client = pool.get().await?;
    client.simple_query("SELECT 1").await?;

    tracing::info!(
        "Connected to database {} at {}:{}",
        config.name,
        config.host,
        config.port
    );

    Ok(pool)
}
