use contracts::domain::a001_catalog::{CatalogDocument, CatalogError};
use gloo_net::http::Request;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("HTTP error: {0}")]
    Status(u16),
    #[error("failed to parse catalog: {0}")]
    Parse(String),
    #[error("invalid catalog: {0}")]
    Invalid(#[from] CatalogError),
}

/// Fetches and parses the catalog document. Single attempt, no timeout.
pub async fn fetch_catalog(url: &str) -> Result<CatalogDocument, LoadError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| LoadError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(LoadError::Status(response.status()));
    }

    let text = response
        .text()
        .await
        .map_err(|e| LoadError::Network(e.to_string()))?;

    CatalogDocument::from_json(&text).map_err(|e| LoadError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_error_messages() {
        assert_eq!(LoadError::Status(404).to_string(), "HTTP error: 404");
        let invalid: LoadError = CatalogError::InvalidPrice { id: 3, price: -1.0 }.into();
        assert_eq!(
            invalid.to_string(),
            "invalid catalog: product 3 has an invalid price: -1"
        );
    }
}
