//! Authority reassembly from parsed URL pieces.

use url::Url;

/// Rebuilds the authority (netloc) string from a parsed URL.
///
/// Format is `user[:password]@host[:port]`. The userinfo block is omitted
/// when both username and password are absent; the parser never reports a
/// scheme-default port, so default ports are elided.
pub(super) fn netloc_of(url: &Url) -> String {
    let mut out = String::new();

    let user = url.username();
    let password = url.password();
    if !user.is_empty() || password.is_some() {
        out.push_str(user);
        if let Some(password) = password {
            out.push(':');
            out.push_str(password);
        }
        out.push('@');
    }

    if let Some(host) = url.host_str() {
        out.push_str(host);
    }

    if let Some(port) = url.port() {
        out.push(':');
        out.push_str(&port.to_string());
    }

    out
}
