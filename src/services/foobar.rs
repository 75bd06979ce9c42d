//! Foobar business service.
//!
//! A foobar is any `sampletable1` row whose title starts with `foo`.

use async_trait::async_trait;

use crate::db::AppDb;
use crate::models::Sampletable1;

#[async_trait]
pub trait FoobarService: Send + Sync {
    async fn get_foobars(&self) -> anyhow::Result<Vec<Sampletable1>>;
}

/// [`FoobarService`] over a PostgreSQL pool.
#[derive(Clone)]
pub struct PgFoobarService {
    pool: AppDb,
}

impl PgFoobarService {
    pub fn new(pool: AppDb) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FoobarService for PgFoobarService {
    async fn get_foobars(&self) -> anyhow::Result<Vec<Sampletable1>> {
        let rows: Vec<Sampletable1> =
            sqlx::query_as("SELECT * FROM sampletable1 WHERE title LIKE $1 ORDER BY id")
                .bind("foo%")
                .fetch_all(&self.pool)
                .await?;
        Ok(rows)
    }
}
