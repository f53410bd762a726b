//! HTTP-backed receipt scanner.
//!
//! Posts the raw image to an external recognition endpoint and expects the
//! structured guess back as JSON. Every failure becomes a recoverable
//! [`EngineError::Recognition`].

use engine::{EngineError, ReceiptGuess, ReceiptScanner, ScanFuture};
use reqwest::Client;

#[derive(Clone, Debug)]
pub struct HttpScanner {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl HttpScanner {
    pub fn new(endpoint: String, api_key: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            api_key,
        }
    }
}

impl ReceiptScanner for HttpScanner {
    fn extract<'a>(&'a self, image: &'a [u8], mime_type: &'a str) -> ScanFuture<'a> {
        Box::pin(async move {
            let response = self
                .client
                .post(&self.endpoint)
                .bearer_auth(&self.api_key)
                .header(reqwest::header::CONTENT_TYPE, mime_type)
                .body(image.to_vec())
                .send()
                .await
                .map_err(|err| EngineError::Recognition(format!("request failed: {err}")))?;

            let status = response.status();
            if !status.is_success() {
                return Err(EngineError::Recognition(format!(
                    "scanner answered {status}"
                )));
            }

            response
                .json::<ReceiptGuess>()
                .await
                .map_err(|err| EngineError::Recognition(format!("unreadable answer: {err}")))
        })
    }
}
