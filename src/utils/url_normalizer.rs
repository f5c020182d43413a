//! URL normalization and sanitization.
//!
//! Submitted URLs are stored in a canonical form: http(s) only, lowercase
//! host, default ports and fragments stripped, path and query preserved.

use url::Url;

/// Errors that can occur during URL normalization.
#[derive(Debug, thiserror::Error)]
pub enum UrlNormalizationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("Failed to normalize URL: {0}")]
    NormalizationFailed(String),
}

/// Normalizes a URL to a canonical form.
///
/// Rejects non-HTTP(S) schemes (`javascript:`, `data:`, `file:`, ...) so a
/// stored link can never redirect into a dangerous protocol.
///
/// # Errors
///
/// Returns [`UrlNormalizationError::InvalidFormat`] for malformed URLs and
/// [`UrlNormalizationError::UnsupportedProtocol`] for non-HTTP(S) schemes.
pub fn normalize_url(input: &str) -> Result<String, UrlNormalizationError> {
    let mut url =
        Url::parse(input).map_err(|e| UrlNormalizationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlNormalizationError::UnsupportedProtocol),
    }

    if let Some(host) = url.host_str() {
        let host_lowercase = host.to_ascii_lowercase();
        url.set_host(Some(&host_lowercase)).map_err(|_| {
            UrlNormalizationError::NormalizationFailed("Failed to set normalized host".to_string())
        })?;
    }

    url.set_fragment(None);

    let is_default_port = matches!(
        (url.scheme(), url.port()),
        ("http", Some(80)) | ("https", Some(443))
    );
    if is_default_port {
        url.set_port(None).map_err(|_| {
            UrlNormalizationError::NormalizationFailed("Failed to remove default port".to_string())
        })?;
    }

    Ok(url.to_string())
}
