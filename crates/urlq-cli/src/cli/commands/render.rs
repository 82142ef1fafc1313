//! Shared rendering for decomposed URL records.

use anyhow::Result;
use urlq_core::url_model::UrlParts;

/// Prints one record: an aligned text table, or one JSON object per line.
pub(super) fn print_parts(parts: &UrlParts, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(parts)?);
        return Ok(());
    }

    println!("{:<10} {}", "scheme", parts.scheme);
    println!("{:<10} {}", "netloc", parts.netloc);
    println!("{:<10} {}", "path", parts.path);
    println!("{:<10} {}", "params", parts.params);
    println!("{:<10} {}", "query", parts.query);
    println!("{:<10} {}", "fragment", parts.fragment);
    Ok(())
}
