use bytes::Bytes;

use crate::errors::RedirectError;
use crate::gatekeeper::{Decision, RedirectGatekeeper};
use crate::request::TunnelRequest;

/// Structural contract between a policy stage and the host proxy pipeline.
///
/// The pipeline invokes `before_upstream_connection` ahead of dialing the
/// upstream for a CONNECT tunnel and `handle_client_request` for plain
/// requests; both may mutate the request in place or reject it. The remaining
/// hooks observe an active tunnel and default to no-ops.
pub trait TunnelHooks: Send + Sync {
    /// Invoked before the proxy opens an upstream connection for a
    /// CONNECT/TLS tunnel.
    fn before_upstream_connection(
        &self,
        _request: &mut TunnelRequest,
    ) -> Result<Decision, RedirectError> {
        Ok(Decision::Passthrough)
    }

    /// Invoked for plain, non-tunneled requests.
    fn handle_client_request(
        &self,
        _request: &mut TunnelRequest,
    ) -> Result<Decision, RedirectError> {
        Ok(Decision::Passthrough)
    }

    /// Invoked once per upstream response chunk during an active tunnel.
    /// Implementations must return the chunk unchanged: no buffering,
    /// transformation, or dropping.
    fn handle_upstream_chunk(&self, chunk: Bytes) -> Bytes {
        chunk
    }

    /// Invoked once when the upstream connection closes. Must not panic and
    /// must not retain the request or any buffers past this call.
    fn on_upstream_connection_close(&self) {}
}

impl TunnelHooks for RedirectGatekeeper {
    fn before_upstream_connection(
        &self,
        request: &mut TunnelRequest,
    ) -> Result<Decision, RedirectError> {
        self.decide(request)
    }

    fn handle_client_request(
        &self,
        request: &mut TunnelRequest,
    ) -> Result<Decision, RedirectError> {
        self.decide(request)
    }
}

#[derive(Debug, Default)]
pub struct NoopTunnelHooks;

impl TunnelHooks for NoopTunnelHooks {}
