use crate::error::AppResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

pub mod error;
pub mod picker;
pub mod service;
pub mod tracer;

pub use error::AutopostServiceError;
pub use picker::{pick_category, CategoryPick};
pub use service::{AutopostService, AutopostServiceApi};
pub use tracer::{SelectionEvent, SelectionTracer, TracingSelectionTracer};

/// One category weight assignment for an account.
///
/// Entries with `weight == 0` are configured but never participate in
/// selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct CategoryWeight {
    pub category_id: i64,
    pub weight: i64,
}

/// A content item eligible for autopost (not yet posted, not yet scheduled).
///
/// Selection treats this as a read-only handle; recording a post against it
/// is the caller's job.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ContentItem {
    pub id: i64,
    pub account_id: i64,
    pub category_id: i64,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Response for the autopost endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct ContentResponse {
    pub id: i64,
    pub account_id: i64,
    pub category_id: i64,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl From<ContentItem> for ContentResponse {
    fn from(item: ContentItem) -> Self {
        Self {
            id: item.id,
            account_id: item.account_id,
            category_id: item.category_id,
            title: item.title,
            content: item.content,
            created_at: item.created_at,
        }
    }
}

/// Repository trait for the account's category weight assignments
#[async_trait]
pub trait WeightRepository: Send + Sync {
    /// Positive-weight category assignments for the account, in a stable
    /// order. Cumulative ranges are only reproducible if the order does not
    /// change between calls.
    async fn find_positive_weights(&self, account_id: i64) -> AppResult<Vec<CategoryWeight>>;
}

/// Repository trait for eligible content lookup
#[async_trait]
pub trait ContentRepository: Send + Sync {
    /// One content item in the category with no post and no schedule
    /// recorded against it, or `None`. Which eligible item comes back is
    /// repository's choice (random in production).
    async fn find_available(
        &self,
        account_id: i64,
        category_id: i64,
    ) -> AppResult<Option<ContentItem>>;
}
