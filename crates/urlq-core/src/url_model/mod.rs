//! URL decomposition into the six classic components.
//!
//! Splits a URL string into scheme, netloc, path, params, query, and
//! fragment, with the legacy `;params` segment separated from the last
//! path segment only.

mod netloc;
mod params;
mod process;
mod validate;

pub use process::process_urls;
pub use validate::{check_url, validate_url, InvalidUrl};

use serde::{Deserialize, Serialize};
use url::Url;

use netloc::netloc_of;
use params::split_params;

/// Flat record of the six classic URL components.
///
/// Every field is a plain string, empty when the component is absent.
/// Records are constructed fresh per call and carry no state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlParts {
    /// URL scheme, lowercased by the parser.
    pub scheme: String,
    /// Authority: `user[:password]@host[:port]`, default ports elided.
    pub netloc: String,
    /// Path portion with the params segment removed.
    pub path: String,
    /// Legacy `;params` of the last path segment only.
    pub params: String,
    /// Query string without the leading `?`.
    pub query: String,
    /// Fragment without the leading `#`.
    pub fragment: String,
}

/// Decomposes a URL string into a [`UrlParts`] record.
///
/// Never fails: input the parser rejects yields a record with all fields
/// empty. Normalizations performed by the parser (lowercased scheme and
/// host, elided default ports, `/` path for empty paths of special
/// schemes) flow through untouched.
///
/// # Examples
///
/// - `handle_url("https://example.com/path?query=value")` → scheme
///   `"https"`, netloc `"example.com"`, path `"/path"`, query
///   `"query=value"`, empty params and fragment
pub fn handle_url(url: &str) -> UrlParts {
    let parsed = match Url::parse(url) {
        Ok(u) => u,
        Err(err) => {
            tracing::debug!("unparseable url {:?}: {}", url, err);
            return UrlParts::default();
        }
    };

    let (path, params) = split_params(parsed.path());

    UrlParts {
        scheme: parsed.scheme().to_string(),
        netloc: netloc_of(&parsed),
        path,
        params,
        query: parsed.query().unwrap_or("").to_string(),
        fragment: parsed.fragment().unwrap_or("").to_string(),
    }
}
