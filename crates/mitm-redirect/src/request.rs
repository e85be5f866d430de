use http::header;
use http::{HeaderMap, Method};

/// One client-originated request or CONNECT establishment, as produced by the
/// external HTTP parser.
///
/// The request is exclusively owned by its in-flight connection: the
/// gatekeeper mutates it in place, downstream collaborators consume it, and
/// it is discarded when the connection ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TunnelRequest {
    pub method: Method,
    /// Target hostname from the request line; may be absent and recoverable
    /// from the `Host` header.
    pub host: Option<String>,
    /// Path plus query string, preserved verbatim across a rewrite.
    pub url_path: String,
    pub headers: HeaderMap,
    /// Pre-rewrite host identity, set only by the rewrite path. Consumed by
    /// the TLS subsystem when minting the interception certificate and by
    /// origin-aware upstream routing.
    pub original_host: Option<String>,
}

impl TunnelRequest {
    pub fn new(method: Method, host: Option<String>, url_path: impl Into<String>) -> Self {
        Self {
            method,
            host,
            url_path: url_path.into(),
            headers: HeaderMap::new(),
            original_host: None,
        }
    }

    /// Host value used for decision-making: the request's host field when
    /// non-empty, otherwise the `Host` header. Header values that are not
    /// visible ASCII cannot name a host and yield `None`.
    pub fn effective_host(&self) -> Option<String> {
        match &self.host {
            Some(host) if !host.is_empty() => Some(host.clone()),
            _ => self
                .headers
                .get(header::HOST)
                .and_then(|value| value.to_str().ok())
                .map(str::to_owned),
        }
    }

    /// Destination as dialed by the upstream connector: host plus the
    /// preserved path and query.
    pub fn url(&self) -> String {
        match &self.host {
            Some(host) => format!("{host}{}", self.url_path),
            None => self.url_path.clone(),
        }
    }
}
