//! Presence guards for `Option` inputs
//!
//! # Guards
//!
//! - [`not_null`] - the value must be present
//! - [`has_value`] - the value must be present (invalid-argument flavor)
//! - [`not_default`] - the value must differ from the type's default
//!
//! # Examples
//!
//! ```rust,ignore
//! use vigil_guard::prelude::*;
//!
//! let port = not_null("port", config.port)?;
//! let limit = not_default("limit", limit)?;
//! ```

use crate::error::{GuardError, GuardResult};

/// Passes a present value through; fails with
/// [`NullArgument`](GuardError::NullArgument) on `None`.
///
/// # Examples
///
/// ```rust,ignore
/// use vigil_guard::not_null;
///
/// assert_eq!(not_null("id", Some(7)).unwrap(), 7);
/// assert!(not_null("id", None::<i32>).is_err());
/// ```
pub fn not_null<T>(param: &'static str, value: Option<T>) -> GuardResult<T> {
    value.ok_or_else(|| GuardError::null(param))
}

/// Unwraps an optional that is contractually expected to hold a value.
///
/// Unlike [`not_null`], absence here is an
/// [`InvalidArgument`](GuardError::InvalidArgument): the optional itself was
/// supplied, it just does not carry the value it must.
pub fn has_value<T>(param: &'static str, value: Option<T>) -> GuardResult<T> {
    value.ok_or_else(|| GuardError::invalid(param, "must have a value"))
}

/// Rejects the type's default value.
///
/// Accepts both plain values and optionals; an absent optional counts as
/// default and fails before any equality check is made.
///
/// # Examples
///
/// ```rust,ignore
/// use vigil_guard::not_default;
///
/// assert_eq!(not_default("limit", 10u32).unwrap(), 10);
/// assert!(not_default("limit", 0u32).is_err());
/// assert!(not_default("limit", None::<u32>).is_err());
/// ```
pub fn not_default<T>(param: &'static str, value: impl Into<Option<T>>) -> GuardResult<T>
where
    T: Default + PartialEq,
{
    match value.into() {
        Some(value) if value != T::default() => Ok(value),
        _ => Err(GuardError::invalid(param, "is the default value")),
    }
}
