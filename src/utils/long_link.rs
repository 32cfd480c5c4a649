//! Validation and canonicalization of the long links aliases point at.

use url::Url;

/// Longest long link accepted, in bytes.
pub const LONG_LINK_MAX_LENGTH: usize = 2048;

/// Reasons a long link is rejected.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LongLinkError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS links can be shortened")]
    UnsupportedProtocol,

    #[error("Link has no host")]
    MissingHost,

    #[error("Link is longer than {LONG_LINK_MAX_LENGTH} bytes")]
    TooLong,
}

/// Checks that `input` is an absolute http(s) URL and returns its canonical form.
///
/// The hostname is lowercased and a default port (80 for HTTP, 443 for HTTPS)
/// is dropped. Path, query and fragment are kept as given.
///
/// # Errors
///
/// See [`LongLinkError`].
///
/// # Examples
///
/// ```
/// use short::utils::long_link::normalize_long_link;
///
/// assert_eq!(
///     normalize_long_link("HTTPS://WWW.Google.com:443/search?q=x").unwrap(),
///     "https://www.google.com/search?q=x"
/// );
/// assert!(normalize_long_link("javascript:alert(1)").is_err());
/// ```
pub fn normalize_long_link(input: &str) -> Result<String, LongLinkError> {
    let trimmed = input.trim();
    if trimmed.len() > LONG_LINK_MAX_LENGTH {
        return Err(LongLinkError::TooLong);
    }

    // Parsing lowercases the host and drops the scheme's default port.
    let url = Url::parse(trimmed).map_err(|e| LongLinkError::InvalidFormat(e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(LongLinkError::UnsupportedProtocol);
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(LongLinkError::MissingHost);
    }

    Ok(url.to_string())
}
