//! # Payloads
//!
//! JSON bodies exchanged between the widget and the feedback endpoint.
//!
//! ## Request
//! - `POST /api/feedback`
//! - `{ "recipeId": string, "feedback": string }`
//!
//! ## Responses
//! - `201` + `{ "success": true }`
//! - `4xx`/`5xx` + `{ "error": string }`
use serde::{Deserialize, Serialize};

pub const FEEDBACK_ROUTE: &str = "/api/feedback";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRequest {
    pub recipe_id: String,
    pub feedback: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SuccessBody {
    pub success: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}
