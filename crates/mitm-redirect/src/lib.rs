mod config;
mod errors;
mod gatekeeper;
mod hooks;
mod rejection;
mod request;
mod tables;

pub use config::{RedirectConfig, RedirectConfigError};
pub use errors::RedirectError;
pub use gatekeeper::{Decision, RedirectGatekeeper};
pub use hooks::{NoopTunnelHooks, TunnelHooks};
pub use rejection::Rejection;
pub use request::TunnelRequest;
pub use tables::{AllowTable, RewriteTable};
