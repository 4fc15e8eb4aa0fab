//! URL authority extraction for domain matching.

use url::Url;

/// Returns `host[:port]` of `url`, or an empty string when the URL does not
/// parse or has no host (`about:blank`, `file:///…`, scheme-less text).
///
/// The port is kept only when it is explicit and not the scheme default.
pub fn url_authority(url: &str) -> String {
    let parsed = match Url::parse(url) {
        Ok(u) => u,
        Err(_) => return String::new(),
    };
    match (parsed.host_str(), parsed.port()) {
        (Some(host), Some(port)) => format!("{host}:{port}"),
        (Some(host), None) => host.to_string(),
        (None, _) => String::new(),
    }
}
