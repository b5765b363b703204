use async_trait::async_trait;
use sentiment_form::api::{Prediction, PredictionClient, ServiceError};
use std::io;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use tokio::io::AsyncWrite;

/// Mock prediction client for testing
#[derive(Debug, Clone)]
pub struct MockPredictionClient {
    pub responses: Arc<Mutex<Vec<Result<Prediction, ServiceError>>>>,
    pub requests: Arc<Mutex<Vec<String>>>,
}

impl MockPredictionClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_responses(self, responses: Vec<Result<Prediction, ServiceError>>) -> Self {
        *self.responses.lock().unwrap() = responses;
        self
    }

    pub fn get_requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl PredictionClient for MockPredictionClient {
    async fn predict(&self, text: &str) -> Result<Prediction, ServiceError> {
        self.requests.lock().unwrap().push(text.to_string());

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(ServiceError::Transport(
                "No more mock responses available".to_string(),
            ));
        }

        responses.remove(0)
    }
}

impl Default for MockPredictionClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Output sink whose writes always fail, like a closed terminal
#[derive(Debug, Default)]
pub struct BrokenOutput;

impl AsyncWrite for BrokenOutput {
    fn poll_write(
        self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
        _buf: &[u8],
    ) -> Poll<io::Result<usize>> {
        Poll::Ready(Err(io::Error::new(io::ErrorKind::BrokenPipe, "output closed")))
    }

    fn poll_flush(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Poll::Ready(Ok(()))
    }

    fn poll_shutdown(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Poll::Ready(Ok(()))
    }
}
