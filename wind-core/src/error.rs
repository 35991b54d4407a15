use thiserror::Error;

/// Faults that prevent a fetch from producing any [`crate::WindOutcome`].
#[derive(Debug, Error)]
pub enum WindError {
    #[error("Network request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Response body is not valid JSON")]
    Decode(#[source] serde_json::Error),
}
