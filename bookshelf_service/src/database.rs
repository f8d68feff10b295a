use std::time::Duration;

use deadpool_postgres::{Manager, ManagerConfig, Pool, RecyclingMethod, Runtime};
use tokio_postgres::NoTls;
use tracing::info;

use crate::{config::PostgresConfig, error::AppResult};

const DEFAULT_MAX_SIZE: usize = 16;

/// Creates the connection pool for a `PostgreSQL` database.
///
/// Connections are opened lazily, on first use.
///
/// # Errors
///
/// Returns an error if the pool cannot be built.
pub fn create_pool(config: &PostgresConfig) -> AppResult<Pool> {
    let manager = Manager::from_config(
        connection_config(config),
        NoTls,
        ManagerConfig {
            recycling_method: RecyclingMethod::Fast,
        },
    );

    let max_size = config.pool.max_size.unwrap_or(DEFAULT_MAX_SIZE);
    let pool = Pool::builder(manager)
        .max_size(max_size)
        .wait_timeout(config.pool.wait_timeout_ms.map(Duration::from_millis))
        .runtime(Runtime::Tokio1)
        .build()?;

    info!(
        "PostgreSQL pool created for {} (max size {})",
        config.connection_string(),
        max_size
    );
    Ok(pool)
}

/// Sets the connection parameters one by one, so credentials are taken
/// verbatim and never go through URL decoding.
fn connection_config(config: &PostgresConfig) -> tokio_postgres::Config {
    let mut pg_config = tokio_postgres::Config::new();
    pg_config
        .host(&config.host)
        .port(config.port)
        .user(&config.user)
        .password(&config.password)
        .dbname(&config.name);
    pg_config
}

#[cfg(test)]
mod tests {
    use tokio_postgres::config::Host;

    use super::*;
    use crate::config::PoolConfig;

    fn config(password: &str) -> PostgresConfig {
        PostgresConfig {
            host: "db.local".into(),
            port: 5433,
            user: "reader".into(),
            password: password.into(),
            name: "catalog".into(),
            pool: PoolConfig {
                max_size: Some(2),
                wait_timeout_ms: Some(100),
            },
        }
    }

    #[test]
    fn connection_parameters() {
        let pg_config = connection_config(&config("p@ss/w%rd:1"));
        assert_eq!(pg_config.get_hosts(), &[Host::Tcp("db.local".into())]);
        assert_eq!(pg_config.get_ports(), &[5433]);
        assert_eq!(pg_config.get_user(), Some("reader"));
        assert_eq!(pg_config.get_password(), Some(b"p@ss/w%rd:1".as_slice()));
        assert_eq!(pg_config.get_dbname(), Some("catalog"));
    }

    #[tokio::test]
    async fn creates_pool_lazily() {
        let pool = create_pool(&config("p@ss/w%rd")).unwrap();
        assert_eq!(pool.status().max_size, 2);
        assert_eq!(pool.status().size, 0);
        pool.close();
        assert!(pool.is_closed());
    }
}
