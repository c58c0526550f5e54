use url::{ParseError, Url};

/// Builds the URL of a backend endpoint.
///
/// Appends `path` to whatever path the base URL already has, so backends mounted under a
/// prefix keep that prefix. `Url::join` would replace it for absolute paths.
///
/// # Arguments
/// - `base` - Backend base URL, with or without a trailing slash
/// - `path` - Endpoint path starting with `/`
///
/// # Returns
/// - `Ok(Url)` - Endpoint URL
/// - `Err(ParseError)` - The combined string is not a valid URL
pub fn backend_endpoint(base: &Url, path: &str) -> Result<Url, ParseError> {
    Url::parse(&format!("{}{}", base.as_str().trim_end_matches('/'), path))
}
