//! Batch filtering and decomposition of URL lists.

use super::validate::check_url;
use super::{handle_url, UrlParts};

/// Filters a list of URLs and decomposes the valid ones.
///
/// Input order is preserved; entries failing validation are dropped and
/// reported at debug level. No deduplication.
pub fn process_urls<S: AsRef<str>>(urls: &[S]) -> Vec<UrlParts> {
    let mut results = Vec::with_capacity(urls.len());
    for url in urls {
        let url = url.as_ref();
        match check_url(url) {
            Ok(()) => results.push(handle_url(url)),
            Err(err) => tracing::debug!("skipping {:?}: {}", url, err),
        }
    }
    results
}
