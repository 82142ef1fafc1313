//! `urlq process <url>...` – filter a URL list and decompose the survivors.

use anyhow::Result;
use urlq_core::url_model::process_urls;

use super::render::print_parts;

pub fn run_process(urls: &[String], json: bool) -> Result<()> {
    let records = process_urls(urls);
    tracing::info!("kept {} of {} urls", records.len(), urls.len());

    if records.is_empty() {
        println!("No valid URLs.");
        return Ok(());
    }

    for (i, parts) in records.iter().enumerate() {
        if !json && i > 0 {
            println!();
        }
        print_parts(parts, json)?;
    }
    Ok(())
}
