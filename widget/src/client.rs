use async_trait::async_trait;
use payloads::{FEEDBACK_ROUTE, FeedbackRequest};
use reqwest::{Client, StatusCode};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected status {0}")]
    Status(StatusCode),
}

#[async_trait]
pub trait FeedbackApi: Send + Sync {
    async fn submit(&self, request: &FeedbackRequest) -> Result<(), ClientError>;
}

pub struct HttpFeedbackApi {
    client: Client,
    endpoint: String,
}

impl HttpFeedbackApi {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            endpoint: endpoint(base_url),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl FeedbackApi for HttpFeedbackApi {
    async fn submit(&self, request: &FeedbackRequest) -> Result<(), ClientError> {
        let res = self.client.post(&self.endpoint).json(request).send().await?;

        if !res.status().is_success() {
            return Err(ClientError::Status(res.status()));
        }

        Ok(())
    }
}

fn endpoint(base_url: &str) -> String {
    format!("{}{FEEDBACK_ROUTE}", base_url.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use tokio::{
        io::{AsyncReadExt, AsyncWriteExt},
        net::TcpListener,
    };

    use super::*;

    #[test]
    fn test_endpoint() {
        assert_eq!(
            endpoint("http://localhost:1111"),
            "http://localhost:1111/api/feedback"
        );
        assert_eq!(
            endpoint("http://localhost:1111/"),
            "http://localhost:1111/api/feedback"
        );
    }

    /// Answers one request with `status_line` after reading the whole JSON body.
    async fn respond_once(status_line: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut received = Vec::new();
            let mut buf = [0u8; 1024];

            while !received.ends_with(b"}") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                received.extend_from_slice(&buf[..n]);
            }

            let response =
                format!("{status_line}\r\ncontent-length: 0\r\nconnection: close\r\n\r\n");
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });

        format!("http://{address}")
    }

    fn request() -> FeedbackRequest {
        FeedbackRequest {
            recipe_id: "soup".to_string(),
            feedback: "good".to_string(),
        }
    }

    #[tokio::test]
    async fn test_server_error_is_status_error() {
        let api = HttpFeedbackApi::new(&respond_once("HTTP/1.1 500 Internal Server Error").await);

        assert!(matches!(
            api.submit(&request()).await,
            Err(ClientError::Status(status)) if status == StatusCode::INTERNAL_SERVER_ERROR
        ));
    }

    #[tokio::test]
    async fn test_bad_request_is_status_error() {
        let api = HttpFeedbackApi::new(&respond_once("HTTP/1.1 400 Bad Request").await);

        assert!(matches!(
            api.submit(&request()).await,
            Err(ClientError::Status(status)) if status == StatusCode::BAD_REQUEST
        ));
    }

    #[tokio::test]
    async fn test_created_is_ok() {
        let api = HttpFeedbackApi::new(&respond_once("HTTP/1.1 201 Created").await);

        assert!(api.submit(&request()).await.is_ok());
    }

    #[tokio::test]
    async fn test_unreachable_server_is_transport_error() {
        let api = HttpFeedbackApi::new("http://127.0.0.1:1");

        assert!(matches!(
            api.submit(&request()).await,
            Err(ClientError::Transport(_))
        ));
    }
}
