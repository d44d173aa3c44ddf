use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::domain::autopost::{AutopostService, AutopostServiceApi, ContentResponse};
use crate::error::{AppError, AppResult};

pub struct AutopostController {
    autopost_service: Arc<AutopostService>,
}

impl AutopostController {
    pub fn new(autopost_service: Arc<AutopostService>) -> Self {
        Self { autopost_service }
    }

    /// GET /api/accounts/{accountId}/autopost - Select content to auto-publish
    ///
    /// 404 when the account has no weights configured or every weighted
    /// category is out of available content.
    pub async fn select(
        State(controller): State<Arc<AutopostController>>,
        Path(account_id): Path<i64>,
    ) -> AppResult<Json<ContentResponse>> {
        let content = controller
            .autopost_service
            .select_content(account_id, None)
            .await
            .map_err(AppError::from)?;

        match content {
            Some(content) => Ok(Json(ContentResponse::from(content))),
            None => Err(AppError::NotFound(
                "No available content found for autopost".to_string(),
            )),
        }
    }
}
