//! # vigil-nil
//!
//! Null-object resolution: for any type, resolve a "neutral" substitute
//! instance to use where a caller would otherwise special-case an absent
//! value.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use vigil_nil::prelude::*;
//!
//! let registry = NilRegistry::new();
//!
//! // Types that follow no convention self-register once.
//! registry.register(|| Connection::unbound());
//!
//! // Types with an alias-named member declare it instead.
//! nil_conventions! {
//!     Cursor {
//!         field Nil = Cursor::DETACHED,
//!     }
//! }
//! registry.declare::<Cursor>();
//!
//! let conn: Connection = registry.get_instance()?;
//! let name: String = registry.or_nil_object(maybe_name)?; // "" when absent
//! ```
//!
//! ## Resolution
//!
//! `get_instance::<T>()` consults, in order: the factory map (built-ins,
//! explicit registrations, memoized discoveries), then `T`'s declared
//! conventions (fields before properties before methods; `Nil` > `None` >
//! `Default` > `Empty` within each kind), memoizing the winner. Neither
//! succeeding is a [`NilError::NoNilObject`] - a configuration gap, fixed
//! by registering, not handled defensively.

pub mod conventions;
pub mod error;
mod macros;
pub mod prelude;
pub mod registry;

pub use conventions::{Alias, Member, MemberKind, NilConventions};
pub use error::{NilError, NilResult};
pub use registry::{FactorySource, NilRegistry, RegisteredType};
