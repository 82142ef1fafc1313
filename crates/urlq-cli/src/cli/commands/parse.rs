//! `urlq parse <url>` – decompose a URL into its components.

use anyhow::Result;
use urlq_core::url_model::handle_url;

use super::render::print_parts;

pub fn run_parse(url: &str, json: bool) -> Result<()> {
    let parts = handle_url(url);
    print_parts(&parts, json)
}
