//! Ambient request context used to synthesize the "current" URL.

use serde::{Deserialize, Serialize};

/// Ports left out of a synthesized URL.
const DEFAULT_PORTS: [&str; 2] = ["80", "443"];

/// Read-only request data supplied by the caller.
///
/// Only consulted when no explicit URL is given. How the caller obtains the
/// values (CGI variables, a framework request, config) is up to the caller;
/// [`AmbientContext::from_env`] covers the CGI case.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AmbientContext {
    /// Request path, possibly with a query string (e.g. `/docs?page=2`).
    pub request_path: String,
    /// Server port as reported by the server (e.g. `"8080"`).
    pub server_port: String,
    /// Server host name.
    pub server_name: String,
    /// Whether the request arrived over a secure transport.
    pub https: bool,
}

impl AmbientContext {
    pub fn new(
        request_path: impl Into<String>,
        server_port: impl Into<String>,
        server_name: impl Into<String>,
        https: bool,
    ) -> Self {
        Self {
            request_path: request_path.into(),
            server_port: server_port.into(),
            server_name: server_name.into(),
            https,
        }
    }

    /// Context from CGI-style process environment variables.
    pub fn from_env() -> Self {
        Self::default().overlay_vars(|name| std::env::var(name).ok())
    }

    /// Context from an arbitrary variable lookup (same names as [`Self::from_env`]).
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::default().overlay_vars(lookup)
    }

    /// Replaces each value for which `lookup` yields something.
    ///
    /// Reads `REQUEST_URI` (falling back to `REQUEST_URL`), `SERVER_PORT`,
    /// `SERVER_NAME` and `HTTPS` (`on` means secure).
    pub fn overlay_vars<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup("REQUEST_URI").or_else(|| lookup("REQUEST_URL")) {
            self.request_path = path;
        }
        if let Some(port) = lookup("SERVER_PORT") {
            self.server_port = port;
        }
        if let Some(name) = lookup("SERVER_NAME") {
            self.server_name = name;
        }
        if let Some(https) = lookup("HTTPS") {
            self.https = https.trim().eq_ignore_ascii_case("on");
        }
        self
    }

    /// `scheme:[//host][:port]path` for the current request.
    ///
    /// Scheme and host are lower-cased. The port is left out when it is empty,
    /// 80 or 443.
    pub fn current_url(&self) -> String {
        let scheme = if self.https { "https:" } else { "http:" };
        let host = self.server_name.trim().to_ascii_lowercase();
        let port = self.server_port.trim();

        let mut url = String::from(scheme);
        if !host.is_empty() {
            url.push_str("//");
            url.push_str(&host);
        }
        if !port.is_empty() && !DEFAULT_PORTS.contains(&port) {
            url.push(':');
            url.push_str(port);
        }
        url.push_str(&self.request_path);
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn current_url_keeps_custom_port() {
        let ctx = AmbientContext::new("/docs/index.html", "8080", "example.com", true);
        assert_eq!(ctx.current_url(), "https://example.com:8080/docs/index.html");
    }

    #[test]
    fn current_url_drops_common_ports() {
        let ctx = AmbientContext::new("/x", "80", "example.com", false);
        assert_eq!(ctx.current_url(), "http://example.com/x");
        let ctx = AmbientContext::new("/x", "443", "example.com", true);
        assert_eq!(ctx.current_url(), "https://example.com/x");
        let ctx = AmbientContext::new("/x", "", "example.com", true);
        assert_eq!(ctx.current_url(), "https://example.com/x");
    }

    #[test]
    fn current_url_lowercases_host() {
        let ctx = AmbientContext::new("/Path", "", "Example.COM", false);
        assert_eq!(ctx.current_url(), "http://example.com/Path");
    }

    #[test]
    fn current_url_without_host() {
        assert_eq!(AmbientContext::default().current_url(), "http:");
    }

    #[test]
    fn from_vars_reads_cgi_names() {
        let ctx = AmbientContext::from_vars(vars(&[
            ("REQUEST_URI", "/search?q=rust"),
            ("SERVER_PORT", "8443"),
            ("SERVER_NAME", "localhost"),
            ("HTTPS", "on"),
        ]));
        assert_eq!(ctx.request_path, "/search?q=rust");
        assert_eq!(ctx.server_port, "8443");
        assert_eq!(ctx.server_name, "localhost");
        assert!(ctx.https);
    }

    #[test]
    fn request_url_is_fallback() {
        let ctx = AmbientContext::from_vars(vars(&[("REQUEST_URL", "/legacy")]));
        assert_eq!(ctx.request_path, "/legacy");
        let ctx = AmbientContext::from_vars(vars(&[
            ("REQUEST_URI", "/new"),
            ("REQUEST_URL", "/legacy"),
        ]));
        assert_eq!(ctx.request_path, "/new");
    }

    #[test]
    fn overlay_keeps_missing_values() {
        let base = AmbientContext::new("/", "8080", "config.host", true);
        let ctx = base.overlay_vars(vars(&[("HTTPS", "off")]));
        assert_eq!(ctx.server_name, "config.host");
        assert_eq!(ctx.server_port, "8080");
        assert!(!ctx.https);
    }
}
