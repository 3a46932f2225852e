use axum::{
    Json,
    http::{HeaderValue, StatusCode, header::ALLOW},
    response::{IntoResponse, Response},
};
use payloads::ErrorBody;
use thiserror::Error;

use crate::database::StoreError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Method Not Allowed")]
    MethodNotAllowed,

    #[error("Invalid input")]
    InvalidInput,

    #[error("Failed to save feedback")]
    SaveFailed(#[source] StoreError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::InvalidInput => StatusCode::BAD_REQUEST,
            AppError::SaveFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(ErrorBody {
            error: self.to_string(),
        });

        let mut response = (status, body).into_response();

        if let AppError::MethodNotAllowed = self {
            response
                .headers_mut()
                .insert(ALLOW, HeaderValue::from_static("POST"));
        }

        response
    }
}
