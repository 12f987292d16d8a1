//! Filesystem guards
//!
//! The only guard that touches I/O: a bounded, synchronous stat-style
//! existence check. Never retried.

use std::path;
use std::path::Path;

use crate::error::{GuardError, GuardResult};
use crate::nullable::not_null;

/// Requires the referenced file to be present on the filesystem at check
/// time.
///
/// Absence of the reference itself is a
/// [`NullArgument`](GuardError::NullArgument); a missing file is an
/// [`InvalidArgument`](GuardError::InvalidArgument) embedding the resolved
/// (absolutized) path.
///
/// # Examples
///
/// ```rust,ignore
/// use vigil_guard::exists;
///
/// let config = exists("config", Some("/etc/app/config.toml"))?;
/// ```
pub fn exists<P>(param: &'static str, path: Option<P>) -> GuardResult<P>
where
    P: AsRef<Path>,
{
    let path = not_null(param, path)?;
    let candidate = path.as_ref();
    if candidate.is_file() {
        return Ok(path);
    }
    let resolved = path::absolute(candidate).unwrap_or_else(|_| candidate.to_path_buf());
    Err(GuardError::invalid(
        param,
        format!("file does not exist: {}", resolved.display()),
    ))
}
