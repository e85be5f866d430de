use http::header;
use http::{HeaderValue, Method};

use crate::errors::RedirectError;
use crate::request::TunnelRequest;
use crate::tables::{AllowTable, RewriteTable};

/// Successful outcome of one gatekeeper decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// The request proceeds unmodified: either a non-CONNECT request that
    /// bypasses the policy entirely, or an allow-listed host.
    Passthrough,
    /// The destination was remapped; the request now points at `mapped_host`
    /// while carrying the caller's pre-rewrite identity.
    Rewritten {
        original_host: String,
        mapped_host: String,
    },
}

/// Host-remapping and allow/deny decision stage, applied at
/// connection-establishment time.
///
/// The two tables are injected at construction and never change afterwards,
/// so a shared gatekeeper is trivially reentrant across concurrently handled
/// connections. The gatekeeper itself performs no I/O and holds no other
/// state; decisions are recomputed per request.
#[derive(Debug, Clone, Default)]
pub struct RedirectGatekeeper {
    rewrite: RewriteTable,
    allow: AllowTable,
}

impl RedirectGatekeeper {
    pub fn new(rewrite: RewriteTable, allow: AllowTable) -> Self {
        if rewrite.is_empty() && allow.is_empty() {
            tracing::warn!("gatekeeper constructed with empty tables; every CONNECT will be rejected");
        } else {
            tracing::debug!(
                rewrite_entries = rewrite.len(),
                allow_entries = allow.len(),
                "gatekeeper constructed"
            );
        }
        Self { rewrite, allow }
    }

    /// Decide the fate of one request, mutating it in place on a rewrite.
    ///
    /// Non-CONNECT requests always pass through untouched: plain requests are
    /// assumed to go through a different control point, and this stage
    /// deliberately does not extend the policy to them.
    ///
    /// Mutation and decision are atomic: a returned error guarantees no field
    /// of the request was touched.
    pub fn decide(&self, request: &mut TunnelRequest) -> Result<Decision, RedirectError> {
        if request.method != Method::CONNECT {
            tracing::debug!(
                method = %request.method,
                path = %request.url_path,
                "passing non-CONNECT request through unmodified"
            );
            return Ok(Decision::Passthrough);
        }

        let Some(host) = request.effective_host() else {
            tracing::info!(method = %request.method, "rejecting CONNECT without a determinable host");
            return Err(RedirectError::NoHost);
        };

        if let Some(mapped) = self.rewrite.lookup(&host) {
            let mapped = mapped.to_string();
            // The host came from a parsed request line or an existing header
            // value; a host that cannot be re-encoded as a header value is
            // treated as undeterminable. Checked before any mutation.
            let host_header =
                HeaderValue::from_str(&host).map_err(|_| RedirectError::NoHost)?;

            tracing::info!(
                method = %request.method,
                host = %host,
                mapped = %mapped,
                "remapping tunnel destination"
            );

            // Preserve the pre-rewrite identity for MITM certificate minting.
            request.original_host = Some(host.clone());
            request.host = Some(mapped.clone());
            // The backend behind the rewrite routes on the caller's intended
            // virtual host, so the Host header carries the original value.
            request.headers.remove(header::HOST);
            request.headers.insert(header::HOST, host_header);

            return Ok(Decision::Rewritten {
                original_host: host,
                mapped_host: mapped,
            });
        }

        if self.allow.contains(&host) {
            tracing::debug!(method = %request.method, host = %host, "allowing tunnel to listed host");
            return Ok(Decision::Passthrough);
        }

        tracing::info!(method = %request.method, host = %host, "rejecting tunnel to unlisted host");
        Err(RedirectError::HostNotAllowed { host })
    }
}
