use std::sync::Arc;

use axum::{
    Json,
    body::Bytes,
    extract::State as AxumState,
    http::{Method, StatusCode},
    response::IntoResponse,
};
use payloads::{FeedbackRequest, SuccessBody};
#[cfg(feature = "verbose")]
use tracing::info;
use tracing::{debug, warn};

use crate::{
    analytics::AnalyticsLogger,
    error::AppError::{self, MethodNotAllowed, SaveFailed},
    state::State,
    utils::get_feedback_from_body,
};

/// `received -> validated -> persisted -> responded`, with analytics detached
/// after the write succeeds.
pub async fn feedback_handler(
    AxumState(state): AxumState<Arc<State>>,
    method: Method,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    if method != Method::POST {
        return Err(MethodNotAllowed);
    }

    let FeedbackRequest {
        recipe_id,
        feedback,
    } = get_feedback_from_body(&body)?;

    #[cfg(feature = "verbose")]
    info!("Feedback received for recipe {recipe_id}: {feedback:?}");

    state
        .store
        .append(&recipe_id, &feedback)
        .await
        .map_err(|e| {
            warn!("Failed to save feedback for recipe {recipe_id}: {e}");
            SaveFailed(e)
        })?;

    debug!("Feedback saved for recipe {recipe_id}");

    fire_analytics(state.analytics.clone(), recipe_id, feedback);

    Ok((StatusCode::CREATED, Json(SuccessBody { success: true })))
}

/// Detached; the handle is dropped so nothing ever joins it.
fn fire_analytics(analytics: Arc<dyn AnalyticsLogger>, recipe_id: String, feedback: String) {
    tokio::spawn(async move {
        if let Err(e) = analytics.log(&recipe_id, &feedback).await {
            warn!("[Analytics error] recipe {recipe_id}: {e}");
        }
    });
}
