use axum::body::Bytes;
use payloads::FeedbackRequest;
use serde_json::Value;

use crate::error::AppError::{self, InvalidInput};

/// Strings are taken as-is; trimming is the caller's job, but empty is still rejected.
pub fn get_feedback_from_body(body: &Bytes) -> Result<FeedbackRequest, AppError> {
    let payload: Value = serde_json::from_slice(body).map_err(|_| InvalidInput)?;

    Ok(FeedbackRequest {
        recipe_id: non_empty_string(&payload, "recipeId")?,
        feedback: non_empty_string(&payload, "feedback")?,
    })
}

fn non_empty_string(payload: &Value, field: &str) -> Result<String, AppError> {
    payload
        .get(field)
        .and_then(Value::as_str)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .ok_or(InvalidInput)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> Result<FeedbackRequest, AppError> {
        get_feedback_from_body(&Bytes::from(body.to_string()))
    }

    #[test]
    fn test_valid() {
        let request = parse(r#"{"recipeId":"r1","feedback":"tasty"}"#).unwrap();

        assert_eq!(request.recipe_id, "r1");
        assert_eq!(request.feedback, "tasty");
    }

    #[test]
    fn test_missing_fields() {
        assert!(matches!(parse(r#"{"recipeId":"r1"}"#), Err(InvalidInput)));
        assert!(matches!(parse(r#"{"feedback":"tasty"}"#), Err(InvalidInput)));
        assert!(matches!(parse("{}"), Err(InvalidInput)));
    }

    #[test]
    fn test_empty_strings() {
        assert!(matches!(parse(r#"{"recipeId":"","feedback":"tasty"}"#), Err(InvalidInput)));
        assert!(matches!(parse(r#"{"recipeId":"r1","feedback":""}"#), Err(InvalidInput)));
    }

    #[test]
    fn test_wrong_types() {
        assert!(matches!(parse(r#"{"recipeId":7,"feedback":"tasty"}"#), Err(InvalidInput)));
        assert!(matches!(parse(r#"{"recipeId":"r1","feedback":["tasty"]}"#), Err(InvalidInput)));
        assert!(matches!(parse(r#"["r1","tasty"]"#), Err(InvalidInput)));
    }

    #[test]
    fn test_garbage_body() {
        assert!(matches!(parse(""), Err(InvalidInput)));
        assert!(matches!(parse("recipeId=r1&feedback=tasty"), Err(InvalidInput)));
    }

    #[test]
    fn test_whitespace_is_kept() {
        let request = parse(r#"{"recipeId":"r1","feedback":"  "}"#).unwrap();

        assert_eq!(request.feedback, "  ");
    }
}
