/// Version prefix of every pricing API route.
pub const API_PREFIX: &str = "api/v1";

/// Join `base_url`, the API prefix and the given path segments.
/// Segments are percent-encoded, so a region id can never add path components.
pub fn api_url(base_url: &str, segments: &[&str]) -> String {
    let mut url = format!("{}/{}", base_url.trim_end_matches('/'), API_PREFIX);
    for segment in segments {
        url.push('/');
        url.push_str(&urlencoding::encode(segment));
    }
    url
}
