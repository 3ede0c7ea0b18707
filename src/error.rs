//! Error types for the bridge's process-level surface.

use thiserror::Error;

/// Errors from installing or reaching the process registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BridgeError {
    /// A registry was already installed for this process.
    #[error("a process registry is already installed")]
    AlreadyInstalled,

    /// No registry has been installed yet.
    #[error("no process registry installed")]
    NotInstalled,
}

/// Result alias for bridge operations.
pub type BridgeResult<T> = Result<T, BridgeError>;
