/// Everything after the last `/` in `url`.
///
/// A URL ending in `/` yields an empty string. Query strings and fragments are
/// kept as-is.
pub fn filename_from_url(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or_default()
}
