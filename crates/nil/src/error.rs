//! Error types for null-object resolution

use thiserror::Error;
use vigil_guard::GuardError;

/// Failure raised by the null-object registry.
///
/// [`NoNilObject`](NilError::NoNilObject) is the only error the registry
/// raises on its own: it signals a configuration gap - a type that needs
/// resolution but has neither a convention declaration nor an explicit
/// registration - and should be fixed by registering a factory, not handled
/// defensively at every call site. Guard failures from internal checks pass
/// through unchanged.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NilError {
    /// No strategy produced a neutral instance for the type.
    #[error("no nil object is available for type `{type_name}`")]
    NoNilObject {
        /// Name of the type that failed to resolve.
        type_name: &'static str,
    },

    /// An internal precondition check failed.
    #[error(transparent)]
    Guard(#[from] GuardError),
}

/// Result alias for resolution operations.
pub type NilResult<T> = Result<T, NilError>;
