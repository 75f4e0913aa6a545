//! Error kinds surfaced by the grant workflow agent.

use thiserror::Error;

/// Failures the agent can report to its caller.
///
/// There are deliberately only two kinds: construction fails when no
/// credential can be found, and every remote failure is reported the same
/// way regardless of cause. Transient and permanent provider errors are not
/// distinguished.
#[derive(Debug, Error)]
pub enum Error {
    /// No usable provider credential at construction time.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The remote chat call failed (connect, auth, status, or decode).
    #[error("remote call failed: {0}")]
    RemoteCall(String),
}
