//! Prelude module for convenient imports.
//!
//! A single `use vigil_nil::prelude::*;` brings in the registry, the
//! convention types, the error type, and the declaration macro.
//!
//! # Examples
//!
//! ```rust,ignore
//! use vigil_nil::prelude::*;
//!
//! let registry = NilRegistry::new();
//! registry.register(|| Connection::unbound());
//! let conn: Connection = registry.get_instance()?;
//! ```

pub use crate::conventions::{Alias, Member, MemberKind, NilConventions};
pub use crate::error::{NilError, NilResult};
pub use crate::nil_conventions;
pub use crate::registry::{FactorySource, NilRegistry, RegisteredType};
