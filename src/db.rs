//! Database query provider for the sample application.
//!
//! Routes only see the [`DatabaseService`] trait. The PostgreSQL
//! implementation runs plain sqlx queries against the pool built in `main`.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::Sampletable1;

/// Type alias for the application database pool.
pub type AppDb = PgPool;

/// Queries backing `GET /sample/database`.
#[async_trait]
pub trait DatabaseService: Send + Sync {
    /// Every `sampletable1` row, ordered by id.
    async fn sample1(&self) -> anyhow::Result<Vec<Sampletable1>>;
}

/// [`DatabaseService`] over a PostgreSQL pool.
#[derive(Clone)]
pub struct PgDatabaseService {
    pool: AppDb,
}

impl PgDatabaseService {
    pub fn new(pool: AppDb) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DatabaseService for PgDatabaseService {
    async fn sample1(&self) -> anyhow::Result<Vec<Sampletable1>> {
        let rows: Vec<Sampletable1> =
            sqlx::query_as("SELECT * FROM sampletable1 ORDER BY id")
                .fetch_all(&self.pool)
                .await?;
        Ok(rows)
    }
}
