use crate::domain::autopost::{CategoryWeight, WeightRepository};
use crate::error::AppResult;
use crate::infrastructure::db::DbPool;
use async_trait::async_trait;
use std::sync::Arc;

pub struct PgWeightRepository {
    pool: Arc<DbPool>,
}

impl PgWeightRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WeightRepository for PgWeightRepository {
    /// Positive-weight category assignments for an account. Ordered by row
    /// id so the cumulative ranges are the same on every load.
    async fn find_positive_weights(&self, account_id: i64) -> AppResult<Vec<CategoryWeight>> {
        let pool = self.pool.as_ref();
        let weights = sqlx::query_as::<_, CategoryWeight>(
            r#"
            SELECT social_media_category_id AS category_id, weight
            FROM social_media_account_category_weights
            WHERE account_id = $1 AND weight > 0
            ORDER BY id
            "#,
        )
        .bind(account_id)
        .fetch_all(pool)
        .await?;

        Ok(weights)
    }
}
