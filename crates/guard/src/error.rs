//! Error types for guard failures
//!
//! Every guard reports a violation through [`GuardError`]. The three kinds
//! mirror the three ways a precondition can fail: the value is absent, the
//! value is present but structurally unacceptable, or the value is present
//! and well-formed but outside the accepted domain.
//!
//! Message fields use `Cow<'static, str>` for zero-allocation in the common
//! case of static reasons.

use std::borrow::Cow;

use thiserror::Error;

/// A precondition violation raised by a guard.
///
/// Guards represent programmer/contract errors, not recoverable runtime
/// conditions: callers are expected to let these propagate rather than
/// handle them defensively at every call site. The offending parameter name
/// is always embedded for diagnosability.
///
/// # Examples
///
/// ```rust,ignore
/// use vigil_guard::{GuardError, positive};
///
/// let err = positive("retries", -1).unwrap_err();
/// assert!(matches!(err, GuardError::OutOfRange { .. }));
/// assert_eq!(err.param(), "retries");
/// ```
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GuardError {
    /// A required value was absent.
    #[error("argument `{param}` must not be null")]
    NullArgument {
        /// Name of the offending parameter.
        param: Cow<'static, str>,
    },

    /// A value was present but structurally unacceptable (default value,
    /// empty collection/string/identifier, wrong runtime type).
    #[error("argument `{param}` is invalid: {reason}")]
    InvalidArgument {
        /// Name of the offending parameter.
        param: Cow<'static, str>,
        /// What made the value unacceptable.
        reason: Cow<'static, str>,
    },

    /// A value was present and of the right shape, but outside the accepted
    /// numeric/membership/enum domain.
    #[error("argument `{param}` is out of range: {reason}")]
    OutOfRange {
        /// Name of the offending parameter.
        param: Cow<'static, str>,
        /// Which bound or domain was violated.
        reason: Cow<'static, str>,
    },
}

impl GuardError {
    /// Creates a [`GuardError::NullArgument`].
    pub fn null(param: impl Into<Cow<'static, str>>) -> Self {
        Self::NullArgument {
            param: param.into(),
        }
    }

    /// Creates a [`GuardError::InvalidArgument`].
    pub fn invalid(
        param: impl Into<Cow<'static, str>>,
        reason: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::InvalidArgument {
            param: param.into(),
            reason: reason.into(),
        }
    }

    /// Creates a [`GuardError::OutOfRange`].
    pub fn out_of_range(
        param: impl Into<Cow<'static, str>>,
        reason: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::OutOfRange {
            param: param.into(),
            reason: reason.into(),
        }
    }

    /// Name of the parameter that failed the guard.
    #[must_use]
    pub fn param(&self) -> &str {
        match self {
            Self::NullArgument { param }
            | Self::InvalidArgument { param, .. }
            | Self::OutOfRange { param, .. } => param,
        }
    }
}

/// Result alias used by every guard: the validated value, or the violation.
pub type GuardResult<T> = Result<T, GuardError>;
