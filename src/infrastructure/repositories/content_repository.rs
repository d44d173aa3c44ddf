use crate::domain::autopost::{ContentItem, ContentRepository};
use crate::error::AppResult;
use crate::infrastructure::db::DbPool;
use async_trait::async_trait;
use std::sync::Arc;

pub struct PgContentRepository {
    pool: Arc<DbPool>,
}

impl PgContentRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContentRepository for PgContentRepository {
    /// One random content item in the category with no post and no schedule
    /// recorded against it.
    async fn find_available(
        &self,
        account_id: i64,
        category_id: i64,
    ) -> AppResult<Option<ContentItem>> {
        let pool = self.pool.as_ref();
        let content = sqlx::query_as::<_, ContentItem>(
            r#"
            SELECT
                c.id,
                c.account_id,
                c.social_media_category_id AS category_id,
                c.title,
                c.content,
                c.created_at
            FROM social_media_contents c
            WHERE c.account_id = $1
              AND c.social_media_category_id = $2
              AND NOT EXISTS (
                  SELECT 1 FROM social_media_posts p
                  WHERE p.social_media_content_id = c.id
              )
              AND NOT EXISTS (
                  SELECT 1 FROM social_media_schedules s
                  WHERE s.social_media_content_id = c.id
              )
            ORDER BY RANDOM()
            LIMIT 1
            "#,
        )
        .bind(account_id)
        .bind(category_id)
        .fetch_optional(pool)
        .await?;

        Ok(content)
    }
}
