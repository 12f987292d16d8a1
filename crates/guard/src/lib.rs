//! # vigil-guard
//!
//! Precondition guards: each function validates one input against one
//! predicate and returns the value unchanged on success, or a typed
//! [`GuardError`] on violation.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use vigil_guard::prelude::*;
//!
//! fn start(name: Option<&str>, workers: usize, ratio: f64) -> GuardResult<()> {
//!     let name = not_null_or_empty("name", name)?;
//!     let workers = positive("workers", workers)?;
//!     let ratio = finite("ratio", ratio)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Built-in Guards
//!
//! - **Presence**: [`not_null`], [`has_value`], [`not_default`]
//! - **Text**: [`not_null_or_empty`]
//! - **Collections**: [`has_any`]
//! - **Identifiers**: [`not_empty`]
//! - **Numbers**: [`finite`], [`positive`], [`not_negative`]
//! - **Membership**: [`in_set`], [`not_in_set`]
//! - **Types**: [`is_instance_of`], [`defined_enum`]
//! - **Filesystem**: [`exists`]
//!
//! Guards are pure pass/fail checks: no retries, no side effects beyond the
//! returned error, and no logging - presentation is the caller's concern.

pub mod collection;
pub mod error;
pub mod fs;
pub mod identifier;
pub mod membership;
pub mod nullable;
pub mod numeric;
pub mod prelude;
pub mod string;
pub mod typecheck;

pub use collection::has_any;
pub use error::{GuardError, GuardResult};
pub use fs::exists;
pub use identifier::not_empty;
pub use membership::{in_set, not_in_set};
pub use nullable::{has_value, not_default, not_null};
pub use numeric::{Float, Zero, finite, not_negative, positive};
pub use string::not_null_or_empty;
pub use typecheck::{EnumDomain, defined_enum, is_instance_of};
