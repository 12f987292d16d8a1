//! The `nil_conventions!` declaration macro.
//!
//! Rust has no runtime reflection to enumerate a type's static members by
//! name, so convention discovery is an opt-in declaration step: the macro
//! maps alias-named members to a [`NilConventions`](crate::NilConventions)
//! impl, and the registry's discovery scan does the rest.

/// Declares a type's alias-named neutral-instance members.
///
/// Each line is `<kind> <alias> = <expression>`:
///
/// - `kind` is `field` (a constant), `property` (an accessor), or `method`
///   (a zero-argument constructor); kinds are searched in that order.
/// - `alias` is `Nil`, `None`, `Default`, or `Empty` in any casing
///   (`nil`/`NIL`/... all map to the same alias); within a kind, aliases
///   are searched in that priority order.
/// - the expression is re-evaluated on every resolution and may produce
///   any type convertible `Into` the declared type.
///
/// Declaration order does not matter; the fixed search order does.
///
/// # Examples
///
/// ```rust,ignore
/// use vigil_nil::{NilRegistry, nil_conventions};
///
/// struct Connection {
///     endpoint: Option<String>,
/// }
///
/// impl Connection {
///     fn unbound() -> Self {
///         Self { endpoint: None }
///     }
/// }
///
/// nil_conventions! {
///     Connection {
///         method Nil = Connection::unbound(),
///     }
/// }
///
/// let registry = NilRegistry::new();
/// registry.declare::<Connection>();
/// let conn: Connection = registry.get_instance()?;
/// ```
#[macro_export]
macro_rules! nil_conventions {
    // ── internal: kind keywords ──────────────────────────────────────────
    (@kind field) => { $crate::MemberKind::Field };
    (@kind property) => { $crate::MemberKind::Property };
    (@kind method) => { $crate::MemberKind::Method };

    // ── internal: alias spellings, matched case-insensitively ────────────
    (@alias Nil) => { $crate::Alias::Nil };
    (@alias nil) => { $crate::Alias::Nil };
    (@alias NIL) => { $crate::Alias::Nil };
    (@alias None) => { $crate::Alias::None };
    (@alias none) => { $crate::Alias::None };
    (@alias NONE) => { $crate::Alias::None };
    (@alias Default) => { $crate::Alias::Default };
    (@alias default) => { $crate::Alias::Default };
    (@alias DEFAULT) => { $crate::Alias::Default };
    (@alias Empty) => { $crate::Alias::Empty };
    (@alias empty) => { $crate::Alias::Empty };
    (@alias EMPTY) => { $crate::Alias::Empty };

    // ── entry: one or more type blocks ───────────────────────────────────
    (
        $(
            $ty:ty {
                $( $kind:ident $alias:ident = $expr:expr ),+ $(,)?
            }
        )+
    ) => {
        $(
            impl $crate::NilConventions for $ty {
                fn members() -> ::std::vec::Vec<$crate::Member<Self>> {
                    ::std::vec![
                        $(
                            $crate::Member::new(
                                $crate::nil_conventions!(@kind $kind),
                                $crate::nil_conventions!(@alias $alias),
                                || ::std::convert::Into::into($expr),
                            )
                        ),+
                    ]
                }
            }
        )+
    };
}
