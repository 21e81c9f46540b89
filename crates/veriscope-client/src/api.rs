//! HTTP client for the investigation backend.

use bytes::Bytes;
use futures::{Stream, TryStreamExt};
use serde::Serialize;
use tracing::info;

use veriscope_core::InvestigationInput;

use crate::error::ClientError;

/// Client for the backend's `/investigate` endpoint.
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

/// JSON body for URL-mode submissions.
#[derive(Serialize)]
struct InvestigateRequest<'a> {
    image_url: &'a str,
    claim_text: &'a str,
}

impl ApiClient {
    /// Create a client for the given backend base URL.
    ///
    /// `base_url` should be like `http://localhost:5000` (no trailing slash).
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Quick reachability probe against the backend's status document.
    pub async fn health(&self) -> Result<(), ClientError> {
        let resp = self.client.get(&self.base_url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ClientError::Server {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }

    /// Submit an investigation and return its NDJSON byte stream.
    ///
    /// URL submissions go as a JSON body; uploads as a multipart form with
    /// a binary `file` part and a `claim_text` text part (the boundary and
    /// content type are transport-assigned).
    pub async fn investigate(
        &self,
        input: &InvestigationInput,
    ) -> Result<impl Stream<Item = Result<Bytes, ClientError>> + use<>, ClientError> {
        let url = format!("{}/investigate", self.base_url);

        let request = match input {
            InvestigationInput::Url { value, claim } => {
                info!(url = %url, mode = "url", "submitting investigation");
                self.client.post(&url).json(&InvestigateRequest {
                    image_url: value,
                    claim_text: claim,
                })
            }
            InvestigationInput::Upload {
                file_name,
                bytes,
                claim,
            } => {
                info!(url = %url, mode = "upload", file = %file_name, "submitting investigation");
                let form = reqwest::multipart::Form::new()
                    .part(
                        "file",
                        reqwest::multipart::Part::bytes(bytes.clone())
                            .file_name(file_name.clone()),
                    )
                    .text("claim_text", claim.clone());
                self.client.post(&url).multipart(form)
            }
        };

        let resp = request.send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ClientError::Server {
                status: status.as_u16(),
                body,
            });
        }

        Ok(resp.bytes_stream().map_err(ClientError::from))
    }
}
