//! Integration test: startup handlers followed by a batch URL pass,
//! mirroring the demo flow end to end.

use urlq_core::startup::{self, SystemStatus};
use urlq_core::url_model::{handle_url, process_urls, validate_url};

#[test]
fn startup_then_batch_decomposition() {
    assert!(startup::start_handler());
    assert_eq!(startup::initialize_system(), SystemStatus::ready());

    let urls = [
        "https://a.com".to_string(),
        "not a url".to_string(),
        "https://b.com/x".to_string(),
    ];
    let records = process_urls(&urls);

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].netloc, "a.com");
    assert_eq!(records[1].netloc, "b.com");
    assert_eq!(records[1].path, "/x");
}

#[test]
fn batch_records_match_single_decomposition() {
    let urls = ["https://example.com/path?query=value".to_string()];
    let records = process_urls(&urls);
    assert_eq!(records, vec![handle_url(&urls[0])]);
}

#[test]
fn validation_agrees_with_batch_filtering() {
    let urls = [
        "https://example.com",
        "",
        "not a url",
        "https://user@example.com:9090/y;p=1?q#f",
    ];
    let kept = process_urls(&urls).len();
    let valid = urls.iter().filter(|u| validate_url(u)).count();
    assert_eq!(kept, valid);
    assert_eq!(kept, 2);
}
