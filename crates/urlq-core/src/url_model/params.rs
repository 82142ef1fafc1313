//! Legacy `;params` splitting.

/// Splits the legacy params segment off a URL path.
///
/// Only the last path segment participates: the path is cut at the first
/// `;` that appears after the final `/`. Returns `(path, params)`, with
/// params empty when the last segment carries none.
pub(super) fn split_params(path: &str) -> (String, String) {
    let last_segment_start = path.rfind('/').unwrap_or(0);
    match path[last_segment_start..].find(';') {
        Some(offset) => {
            let cut = last_segment_start + offset;
            (path[..cut].to_string(), path[cut + 1..].to_string())
        }
        None => (path.to_string(), String::new()),
    }
}
