use thiserror::Error;

/// Failure talking to one of the external market services
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("invalid JSON body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("missing field `{0}`")]
    MissingField(&'static str),
    #[error("invalid number: {0}")]
    InvalidNumber(String),
}

const MAX_ERROR_BODY: usize = 256;

/// Read a response as JSON, mapping non-2xx statuses to [`FetchError::Status`].
pub async fn read_json(response: reqwest::Response) -> Result<serde_json::Value, FetchError> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(FetchError::Status {
            status: status.as_u16(),
            body: truncate(body),
        });
    }

    Ok(serde_json::from_str(&body)?)
}

fn truncate(mut body: String) -> String {
    if body.len() > MAX_ERROR_BODY {
        let mut cut = MAX_ERROR_BODY;
        while !body.is_char_boundary(cut) {
            cut -= 1;
        }
        body.truncate(cut);
    }
    body
}
