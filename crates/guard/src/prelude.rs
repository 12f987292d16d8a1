//! Prelude module for convenient imports.
//!
//! A single `use vigil_guard::prelude::*;` brings in every guard, the
//! error type, and the supporting traits.
//!
//! # Examples
//!
//! ```rust,ignore
//! use vigil_guard::prelude::*;
//!
//! fn connect(host: Option<&str>, port: u16, retries: i32) -> GuardResult<()> {
//!     let host = not_null_or_empty("host", host)?;
//!     let port = not_default("port", port)?;
//!     let retries = not_negative("retries", retries)?;
//!     Ok(())
//! }
//! ```

pub use crate::collection::has_any;
pub use crate::error::{GuardError, GuardResult};
pub use crate::fs::exists;
pub use crate::identifier::not_empty;
pub use crate::membership::{in_set, not_in_set};
pub use crate::nullable::{has_value, not_default, not_null};
pub use crate::numeric::{Float, Zero, finite, not_negative, positive};
pub use crate::string::not_null_or_empty;
pub use crate::typecheck::{EnumDomain, defined_enum, is_instance_of};
