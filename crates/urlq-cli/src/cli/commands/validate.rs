//! `urlq validate <url>` – check that a URL has a scheme and a host.

use anyhow::Result;
use urlq_core::url_model::check_url;

pub fn run_validate(url: &str) -> Result<()> {
    match check_url(url) {
        Ok(()) => println!("valid"),
        Err(err) => println!("invalid: {}", err),
    }
    Ok(())
}
