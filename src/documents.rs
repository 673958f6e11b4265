//! Thin client for the service's document endpoints.

use once_cell::sync::Lazy;
use serde::Deserialize;
use thiserror::Error;

use crate::types::DocumentInfo;

static HTTP: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    /// Non-2xx upload answered with a `detail` payload.
    #[error("{0}")]
    Rejected(String),
}

pub async fn list_documents(api_base_url: &str) -> Result<Vec<DocumentInfo>, DocumentError> {
    let documents = HTTP
        .get(format!("{api_base_url}/documents"))
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;
    Ok(documents)
}

#[derive(Deserialize)]
struct UploadAccepted {
    filename: String,
}

#[derive(Deserialize)]
struct UploadRejected {
    detail: String,
}

/// Multipart upload of one document; returns the stored filename.
pub async fn upload_document(
    api_base_url: &str,
    filename: &str,
    bytes: Vec<u8>,
) -> Result<String, DocumentError> {
    let part = reqwest::multipart::Part::bytes(bytes).file_name(filename.to_string());
    let form = reqwest::multipart::Form::new().part("file", part);

    let response = HTTP
        .post(format!("{api_base_url}/upload"))
        .multipart(form)
        .send()
        .await?;

    if response.status().is_success() {
        Ok(response.json::<UploadAccepted>().await?.filename)
    } else {
        let detail = match response.json::<UploadRejected>().await {
            Ok(rejected) => rejected.detail,
            Err(err) => err.to_string(),
        };
        Err(DocumentError::Rejected(detail))
    }
}
