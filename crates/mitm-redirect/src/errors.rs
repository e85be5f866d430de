use thiserror::Error;

/// Terminal rejection outcomes of the gatekeeper.
///
/// The two variants are distinct, user-visible rejections with different
/// status signaling and must never be collapsed into one kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RedirectError {
    #[error("no host could be determined from the request or its Host header")]
    NoHost,
    #[error("host '{host}' is neither remapped nor allow-listed")]
    HostNotAllowed { host: String },
}
