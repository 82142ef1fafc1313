//! URL validation: scheme and host must both be present.

use thiserror::Error;
use url::Url;

/// Reason a URL failed validation.
///
/// Not surfaced through [`validate_url`]; exists so callers that want to
/// explain a rejection (e.g. the CLI) can print one.
#[derive(Debug, Error)]
pub enum InvalidUrl {
    /// The parser rejected the input outright.
    #[error("unparseable: {0}")]
    Unparseable(#[from] url::ParseError),
    /// Parsed, but no authority/host component is present.
    #[error("missing host")]
    MissingHost,
}

/// Checks that a URL parses and carries both a scheme and a host.
///
/// A successful parse always yields a scheme, so the host check is the
/// only post-parse condition. File-style URLs with an empty host string
/// count as missing.
pub fn check_url(url: &str) -> Result<(), InvalidUrl> {
    let parsed = Url::parse(url)?;
    if parsed.host_str().map_or(true, |h| h.is_empty()) {
        return Err(InvalidUrl::MissingHost);
    }
    Ok(())
}

/// Boolean validation surface: every failure kind collapses to `false`.
pub fn validate_url(url: &str) -> bool {
    check_url(url).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_scheme_and_host() {
        assert!(validate_url("https://example.com"));
        assert!(validate_url("http://user:pw@example.com:8080/a?b=c#d"));
        assert!(validate_url("ftp://ftp.example.com/pub"));
    }

    #[test]
    fn rejects_free_text() {
        assert!(!validate_url("not a url"));
    }

    #[test]
    fn rejects_empty_input() {
        assert!(!validate_url(""));
    }

    #[test]
    fn rejects_missing_host() {
        assert!(!validate_url("mailto:user@example.com"));
        assert!(!validate_url("file:///etc/hosts"));
    }

    #[test]
    fn rejects_relative_reference() {
        assert!(!validate_url("/path/only"));
        assert!(!validate_url("example.com/path"));
    }

    #[test]
    fn check_url_reports_reason() {
        assert!(matches!(check_url("not a url"), Err(InvalidUrl::Unparseable(_))));
        assert!(matches!(
            check_url("mailto:user@example.com"),
            Err(InvalidUrl::MissingHost)
        ));
        assert!(check_url("https://example.com").is_ok());
    }
}
