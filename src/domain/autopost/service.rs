use super::error::AutopostServiceError;
use super::picker::pick_category;
use super::tracer::{SelectionEvent, SelectionTracer};
use super::{ContentItem, ContentRepository, WeightRepository};
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub struct AutopostService {
    weight_repo: Arc<dyn WeightRepository>,
    content_repo: Arc<dyn ContentRepository>,
    tracer: Arc<dyn SelectionTracer>,
}

impl AutopostService {
    pub fn new(
        weight_repo: Arc<dyn WeightRepository>,
        content_repo: Arc<dyn ContentRepository>,
        tracer: Arc<dyn SelectionTracer>,
    ) -> Self {
        Self {
            weight_repo,
            content_repo,
            tracer,
        }
    }
}

#[async_trait]
pub trait AutopostServiceApi: Send + Sync {
    /// Select one content item to auto-publish for the account.
    ///
    /// Picks a category by cumulative weight distribution, then looks for an
    /// available (unposted and unscheduled) item in it. A category with
    /// nothing available is removed from the working set and the pick is
    /// retried with the same draw against the remaining weights, until a
    /// category yields content or the set runs dry.
    ///
    /// `Ok(None)` means no eligible content exists; it is a normal outcome,
    /// not a failure. Repository errors propagate without retry.
    ///
    /// `random_value` overrides the generated draw, primarily for testing.
    /// Each call emits a trace of its decisions under one fresh selection
    /// id.
    async fn select_content(
        &self,
        account_id: i64,
        random_value: Option<i64>,
    ) -> Result<Option<ContentItem>, AutopostServiceError>;
}

#[async_trait]
impl AutopostServiceApi for AutopostService {
    async fn select_content(
        &self,
        account_id: i64,
        random_value: Option<i64>,
    ) -> Result<Option<ContentItem>, AutopostServiceError> {
        let selection_id = Uuid::new_v4();

        let mut weights = self
            .weight_repo
            .find_positive_weights(account_id)
            .await
            .map_err(|e| AutopostServiceError::Dependency(e.to_string()))?;

        // The repository contract already excludes zero weights; filtering
        // again keeps the invariant local.
        weights.retain(|w| w.weight > 0);

        if weights.is_empty() {
            self.tracer
                .emit(selection_id, &SelectionEvent::NoWeights { account_id });
            return Ok(None);
        }

        while !weights.is_empty() {
            let total_weight: i64 = weights.iter().map(|w| w.weight).sum();
            self.tracer.emit(
                selection_id,
                &SelectionEvent::WeightsLoaded {
                    account_id,
                    total_weight,
                    category_count: weights.len(),
                },
            );

            let Some(pick) = pick_category(&weights, random_value) else {
                break;
            };
            self.tracer.emit(
                selection_id,
                &SelectionEvent::CategoryPicked {
                    category_id: pick.category_id,
                    random_value: pick.random_value,
                    total_weight: pick.total_weight,
                    cumulative_at_pick: pick.cumulative_at_pick,
                },
            );

            let content = self
                .content_repo
                .find_available(account_id, pick.category_id)
                .await
                .map_err(|e| AutopostServiceError::Dependency(e.to_string()))?;

            if let Some(content) = content {
                self.tracer.emit(
                    selection_id,
                    &SelectionEvent::ContentSelected {
                        account_id,
                        content_id: content.id,
                        category_id: pick.category_id,
                    },
                );
                return Ok(Some(content));
            }

            // Nothing available in the picked category: drop it and rerun
            // the pick with the same draw over what is left.
            weights.retain(|w| w.category_id != pick.category_id);
            self.tracer.emit(
                selection_id,
                &SelectionEvent::CategorySkipped {
                    account_id,
                    category_id: pick.category_id,
                    remaining_categories: weights.len(),
                },
            );

            if weights.is_empty() {
                self.tracer.emit(
                    selection_id,
                    &SelectionEvent::AllCategoriesExhausted { account_id },
                );
                return Ok(None);
            }
        }

        Ok(None)
    }
}
