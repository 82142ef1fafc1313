//! `urlq demo` – fixed demonstration of both library surfaces.

use anyhow::Result;
use urlq_core::startup;
use urlq_core::url_model::handle_url;

use super::render::print_parts;

pub fn run_demo(demo_url: &str) -> Result<()> {
    startup::start_handler();
    startup::initialize_system();

    let parts = handle_url(demo_url);
    print_parts(&parts, false)
}
