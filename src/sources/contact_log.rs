use async_trait::async_trait;
use log::info;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;

use crate::error::CheckError;

/// Calls already worked in the current contest.
#[async_trait]
pub trait CallHistory: Send + Sync {
    /// Distinct logged calls containing `partial`. Empty input gives an
    /// empty list.
    async fn like_calls(&self, partial: &str) -> Result<Vec<String>, CheckError>;
}

/// The logging program's contact database, read only. Contacts live in the
/// `DXLOG` table keyed by `ContestNR`.
#[derive(Debug, Clone)]
pub struct ContactLog {
    pool: SqlitePool,
    contest: i64,
}

impl ContactLog {
    pub async fn open(path: &Path, contest: i64) -> Result<Self, CheckError> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .read_only(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;
        info!("Opened contact log {:?} (contest {})", path, contest);
        Ok(Self::from_pool(pool, contest))
    }

    pub fn from_pool(pool: SqlitePool, contest: i64) -> Self {
        Self { pool, contest }
    }
}

#[async_trait]
impl CallHistory for ContactLog {
    async fn like_calls(&self, partial: &str) -> Result<Vec<String>, CheckError> {
        if partial.is_empty() {
            return Ok(Vec::new());
        }
        let calls = sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT Call FROM DXLOG WHERE Call LIKE ? AND ContestNR = ? ORDER BY Call",
        )
        .bind(format!("%{}%", partial))
        .bind(self.contest)
        .fetch_all(&self.pool)
        .await?;
        Ok(calls)
    }
}
