//! Composite views derived from primitive URL components.

/// `[username[:password]@]host[:port]`
///
/// The password is only written when a username is present.
pub fn derive_authority(username: &str, password: &str, host: &str, port: Option<u16>) -> String {
    let mut out = String::with_capacity(username.len() + password.len() + host.len() + 7);
    if !username.is_empty() {
        out.push_str(username);
        if !password.is_empty() {
            out.push(':');
            out.push_str(password);
        }
        out.push('@');
    }
    out.push_str(host);
    push_port(&mut out, port);
    out
}

/// `[scheme:][//host][:port]`. User-info never appears here.
pub fn derive_base(scheme: &str, host: &str, port: Option<u16>) -> String {
    let mut out = String::with_capacity(scheme.len() + host.len() + 9);
    if !scheme.is_empty() {
        out.push_str(scheme);
        out.push(':');
    }
    if !host.is_empty() {
        out.push_str("//");
        out.push_str(host);
    }
    push_port(&mut out, port);
    out
}

/// `#fragment`, or `""` when there is no fragment.
pub fn derive_hash(fragment: &str) -> String {
    if fragment.is_empty() {
        String::new()
    } else {
        format!("#{fragment}")
    }
}

/// Port 0 is never written.
fn push_port(out: &mut String, port: Option<u16>) {
    if let Some(port) = port.filter(|&p| p != 0) {
        out.push(':');
        out.push_str(&port.to_string());
    }
}
