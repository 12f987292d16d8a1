//! Identifier guards

use uuid::Uuid;

use crate::error::{GuardError, GuardResult};

/// Rejects absent and all-zero identifiers.
///
/// Both failure modes are [`InvalidArgument`](GuardError::InvalidArgument):
/// an absent optional "must have a value", the nil UUID is an "empty
/// identifier".
///
/// # Examples
///
/// ```rust,ignore
/// use uuid::Uuid;
/// use vigil_guard::not_empty;
///
/// let id = Uuid::new_v4();
/// assert_eq!(not_empty("id", id).unwrap(), id);
/// assert!(not_empty("id", Uuid::nil()).is_err());
/// ```
pub fn not_empty(param: &'static str, id: impl Into<Option<Uuid>>) -> GuardResult<Uuid> {
    match id.into() {
        None => Err(GuardError::invalid(param, "nullable must have a value")),
        Some(id) if id.is_nil() => Err(GuardError::invalid(param, "empty identifier")),
        Some(id) => Ok(id),
    }
}
