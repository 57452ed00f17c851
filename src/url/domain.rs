use crate::{UrlError, UrlResult};
use url::Url;

/// Extracts the domain (host plus explicit port) from a URL
///
/// The port is only included when it differs from the scheme's default,
/// so `https://example.com:443/` and `https://example.com/` share a domain.
///
/// # Arguments
///
/// * `url` - The URL to extract the domain from
///
/// # Returns
///
/// * `Some(String)` - The host, with `:port` appended when present
/// * `None` - If the URL has no host
///
/// # Examples
///
/// ```
/// use url::Url;
/// use sitecopy::url::extract_domain;
///
/// let url = Url::parse("https://example.com/path").unwrap();
/// assert_eq!(extract_domain(&url), Some("example.com".to_string()));
///
/// let url = Url::parse("http://127.0.0.1:8080/").unwrap();
/// assert_eq!(extract_domain(&url), Some("127.0.0.1:8080".to_string()));
/// ```
pub fn extract_domain(url: &Url) -> Option<String> {
    let host = url.host_str()?;
    match url.port() {
        Some(port) => Some(format!("{}:{}", host, port)),
        None => Some(host.to_string()),
    }
}

/// Determines the site domain from the final URL of the initial fetch
///
/// This is fixed once per crawl; every later scope decision compares
/// against it.
pub fn site_domain(final_url: &str) -> UrlResult<String> {
    let url = Url::parse(final_url).map_err(|e| UrlError::Parse(e.to_string()))?;
    extract_domain(&url).ok_or(UrlError::MissingDomain)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_simple_domain() {
        let url = Url::parse("https://example.com/").unwrap();
        assert_eq!(extract_domain(&url), Some("example.com".to_string()));
    }

    #[test]
    fn test_extract_subdomain() {
        let url = Url::parse("https://blog.example.com/post").unwrap();
        assert_eq!(extract_domain(&url), Some("blog.example.com".to_string()));
    }

    #[test]
    fn test_extract_with_port() {
        let url = Url::parse("https://example.com:8080/").unwrap();
        assert_eq!(extract_domain(&url), Some("example.com:8080".to_string()));
    }

    #[test]
    fn test_default_port_omitted() {
        let url = Url::parse("https://example.com:443/").unwrap();
        assert_eq!(extract_domain(&url), Some("example.com".to_string()));
    }

    #[test]
    fn test_extract_with_path_and_query() {
        let url = Url::parse("https://example.com/path/to/page?query=value").unwrap();
        assert_eq!(extract_domain(&url), Some("example.com".to_string()));
    }

    #[test]
    fn test_no_host() {
        let url = Url::parse("mailto:someone@example.com").unwrap();
        assert_eq!(extract_domain(&url), None);
    }

    #[test]
    fn test_site_domain_from_final_url() {
        assert_eq!(
            site_domain("https://www.example.com/landing").unwrap(),
            "www.example.com"
        );
    }

    #[test]
    fn test_site_domain_malformed() {
        assert!(matches!(site_domain("not a url"), Err(UrlError::Parse(_))));
    }

    #[test]
    fn test_site_domain_missing_host() {
        assert!(matches!(
            site_domain("data:text/plain,hi"),
            Err(UrlError::MissingDomain)
        ));
    }
}
