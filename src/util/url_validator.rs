use std::net::IpAddr;
use thiserror::Error;
use url::{Host, Url};

/// Errors from validating a URL before handing it to the system browser.
#[derive(Error, Debug, PartialEq)]
pub enum UrlValidationError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("Unsupported scheme: {0} (only http/https allowed)")]
    UnsupportedScheme(String),
    #[error("Private address not allowed: {0}")]
    PrivateAddress(String),
    #[error("URL has no host")]
    MissingHost,
}

/// Turn a shop's website field into an absolute URL.
///
/// Catalog data lists sites as bare hosts (`"bellavista.com"`); those get
/// `https://` prepended. Anything with a scheme is left alone.
pub fn website_url(raw: &str) -> String {
    let raw = raw.trim();
    if raw.contains("://") {
        raw.to_string()
    } else {
        format!("https://{raw}")
    }
}

/// Validate a URL before passing it to `open::that`.
///
/// Only http(s) to a public host is allowed, so catalog data cannot make us
/// launch `file://` paths or poke at services on the local network.
///
/// ```
/// use cityguide::util::validate_url_for_open;
///
/// assert!(validate_url_for_open("https://bellavista.com").is_ok());
/// assert!(validate_url_for_open("file:///etc/passwd").is_err());
/// assert!(validate_url_for_open("http://192.168.1.1/admin").is_err());
/// ```
pub fn validate_url_for_open(url_str: &str) -> Result<Url, UrlValidationError> {
    let url = Url::parse(url_str)?;

    match url.scheme() {
        "http" | "https" => {}
        scheme => return Err(UrlValidationError::UnsupportedScheme(scheme.to_owned())),
    }

    let ip = match url.host() {
        None => return Err(UrlValidationError::MissingHost),
        Some(Host::Domain(domain)) => {
            if domain.eq_ignore_ascii_case("localhost") {
                return Err(UrlValidationError::PrivateAddress(domain.to_owned()));
            }
            return Ok(url);
        }
        Some(Host::Ipv4(v4)) => IpAddr::V4(v4),
        Some(Host::Ipv6(v6)) => IpAddr::V6(v6),
    };

    if is_private_ip(&ip) {
        return Err(UrlValidationError::PrivateAddress(ip.to_string()));
    }
    Ok(url)
}

fn is_private_ip(ip: &IpAddr) -> bool {
    match ip {
        IpAddr::V4(v4) => {
            v4.is_private() || v4.is_loopback() || v4.is_link_local() || v4.is_unspecified()
        }
        IpAddr::V6(v6) => {
            let first = v6.segments()[0];
            v6.is_loopback()
                || v6.is_unspecified()
                // fc00::/7 unique local, fe80::/10 link local
                || (first & 0xfe00) == 0xfc00
                || (first & 0xffc0) == 0xfe80
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_website_url_adds_scheme() {
        assert_eq!(website_url("bellavista.com"), "https://bellavista.com");
        assert_eq!(website_url(" http://a.example "), "http://a.example");
    }

    #[test]
    fn test_public_sites_accepted() {
        let url = validate_url_for_open("https://techhubstore.com").unwrap();
        assert_eq!(url.host_str(), Some("techhubstore.com"));
        assert!(validate_url_for_open("http://example.org:8080/menu").is_ok());
    }

    #[test]
    fn test_non_http_schemes_rejected() {
        assert_eq!(
            validate_url_for_open("file:///etc/passwd"),
            Err(UrlValidationError::UnsupportedScheme("file".to_string()))
        );
        assert!(validate_url_for_open("javascript:alert(1)").is_err());
    }

    #[test]
    fn test_local_addresses_rejected() {
        for url in [
            "http://localhost/",
            "http://127.0.0.1/",
            "http://10.0.0.1/",
            "http://172.16.0.1/",
            "http://192.168.1.1:8080/",
            "http://169.254.1.1/",
            "http://0.0.0.0/",
            "http://[::1]/",
            "http://[fe80::1]/",
            "http://[fd00::1]/",
        ] {
            assert!(
                matches!(
                    validate_url_for_open(url),
                    Err(UrlValidationError::PrivateAddress(_))
                ),
                "{url} should be rejected"
            );
        }
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(matches!(
            validate_url_for_open("not a url"),
            Err(UrlValidationError::InvalidUrl(_))
        ));
    }
}
