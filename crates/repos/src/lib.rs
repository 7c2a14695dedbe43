pub mod annotation;
pub mod error;
pub mod image;

use sqlx::pool::PoolConnection;
use sqlx::{PgPool, Postgres};
use tracing::error;

use crate::error::RepoError;

/// Wraps the connection pool. Operations on the per-entity repositories take
/// an explicit executor, acquired here by the caller and released when it
/// goes out of scope on any exit path.
#[derive(Debug, Clone)]
pub struct Repo {
    pub pool: PgPool,
}

impl Repo {
    pub fn new(pool: PgPool) -> Repo {
        Repo { pool }
    }

    pub async fn acquire(&self) -> Result<PoolConnection<Postgres>, RepoError> {
        self.pool.acquire().await.map_err(|err| {
            error!("Failed to acquire connection: {}", err);
            RepoError::ConnectionError()
        })
    }
}
