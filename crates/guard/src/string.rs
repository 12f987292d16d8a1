//! String guards

use crate::error::{GuardError, GuardResult};
use crate::nullable::not_null;

/// Rejects absent and empty text.
///
/// Absence is a [`NullArgument`](GuardError::NullArgument); zero length is an
/// [`InvalidArgument`](GuardError::InvalidArgument). Anything with an `str`
/// view works: `&str`, `String`, `Cow<str>`.
///
/// # Examples
///
/// ```rust,ignore
/// use vigil_guard::not_null_or_empty;
///
/// assert_eq!(not_null_or_empty("name", "alice").unwrap(), "alice");
/// assert!(not_null_or_empty("name", "").is_err());
/// assert!(not_null_or_empty("name", None::<&str>).is_err());
/// ```
pub fn not_null_or_empty<S>(param: &'static str, text: impl Into<Option<S>>) -> GuardResult<S>
where
    S: AsRef<str>,
{
    let text = not_null(param, text.into())?;
    if text.as_ref().is_empty() {
        return Err(GuardError::invalid(param, "empty string"));
    }
    Ok(text)
}
