use uuid::Uuid;

/// One decision made during a selection run.
///
/// Fixed fields per event kind, so a trace consumer gets compile-time
/// checked context instead of an open map. `name()` gives the stable
/// snake_case identifier used for aggregation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEvent {
    NoWeights {
        account_id: i64,
    },
    WeightsLoaded {
        account_id: i64,
        total_weight: i64,
        category_count: usize,
    },
    CategoryPicked {
        category_id: i64,
        random_value: i64,
        total_weight: i64,
        cumulative_at_pick: i64,
    },
    ContentSelected {
        account_id: i64,
        content_id: i64,
        category_id: i64,
    },
    CategorySkipped {
        account_id: i64,
        category_id: i64,
        remaining_categories: usize,
    },
    AllCategoriesExhausted {
        account_id: i64,
    },
}

impl SelectionEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::NoWeights { .. } => "no_weights",
            Self::WeightsLoaded { .. } => "weights_loaded",
            Self::CategoryPicked { .. } => "category_picked",
            Self::ContentSelected { .. } => "content_selected",
            Self::CategorySkipped { .. } => "category_skipped",
            Self::AllCategoriesExhausted { .. } => "all_categories_exhausted",
        }
    }
}

/// Sink for selection trace events.
///
/// Every event emitted during one selection run carries the same
/// `selection_id`. Emission is fire-and-forget: implementations must not
/// fail or block the selection.
pub trait SelectionTracer: Send + Sync {
    fn emit(&self, selection_id: Uuid, event: &SelectionEvent);
}

/// Production tracer writing one structured log record per event, with the
/// event name as the message so records aggregate by name and selection id.
pub struct TracingSelectionTracer;

impl SelectionTracer for TracingSelectionTracer {
    fn emit(&self, selection_id: Uuid, event: &SelectionEvent) {
        match *event {
            SelectionEvent::NoWeights { account_id } => tracing::info!(
                target: "autopost",
                selection_id = %selection_id,
                account_id,
                reason = "no category weights configured for account",
                "no_weights"
            ),
            SelectionEvent::WeightsLoaded {
                account_id,
                total_weight,
                category_count,
            } => tracing::info!(
                target: "autopost",
                selection_id = %selection_id,
                account_id,
                total_weight,
                category_count,
                "weights_loaded"
            ),
            SelectionEvent::CategoryPicked {
                category_id,
                random_value,
                total_weight,
                cumulative_at_pick,
            } => tracing::info!(
                target: "autopost",
                selection_id = %selection_id,
                category_id,
                random_value,
                total_weight,
                cumulative_at_pick,
                "category_picked"
            ),
            SelectionEvent::ContentSelected {
                account_id,
                content_id,
                category_id,
            } => tracing::info!(
                target: "autopost",
                selection_id = %selection_id,
                account_id,
                content_id,
                category_id,
                "content_selected"
            ),
            SelectionEvent::CategorySkipped {
                account_id,
                category_id,
                remaining_categories,
            } => tracing::info!(
                target: "autopost",
                selection_id = %selection_id,
                account_id,
                category_id,
                remaining_categories,
                reason = "no available content in category",
                "category_skipped"
            ),
            SelectionEvent::AllCategoriesExhausted { account_id } => tracing::info!(
                target: "autopost",
                selection_id = %selection_id,
                account_id,
                reason = "all weighted categories exhausted with no available content",
                "all_categories_exhausted"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_names_are_stable() {
        let events = [
            (SelectionEvent::NoWeights { account_id: 1 }, "no_weights"),
            (
                SelectionEvent::WeightsLoaded {
                    account_id: 1,
                    total_weight: 10,
                    category_count: 3,
                },
                "weights_loaded",
            ),
            (
                SelectionEvent::CategoryPicked {
                    category_id: 2,
                    random_value: 4,
                    total_weight: 10,
                    cumulative_at_pick: 5,
                },
                "category_picked",
            ),
            (
                SelectionEvent::ContentSelected {
                    account_id: 1,
                    content_id: 9,
                    category_id: 2,
                },
                "content_selected",
            ),
            (
                SelectionEvent::CategorySkipped {
                    account_id: 1,
                    category_id: 2,
                    remaining_categories: 1,
                },
                "category_skipped",
            ),
            (
                SelectionEvent::AllCategoriesExhausted { account_id: 1 },
                "all_categories_exhausted",
            ),
        ];

        for (event, name) in events {
            assert_eq!(event.name(), name);
        }
    }
}
