//! The null-object registry
//!
//! Maps type identity to a zero-argument factory producing that type's
//! neutral instance. Factories come from three places: built-ins installed
//! at construction, explicit registration, and convention discovery
//! memoized on first resolution.
//!
//! The registry is an explicitly constructed value: build one at the
//! composition root and inject it where neutral instances are needed
//! (tests construct their own isolated registries the same way). There is
//! no hidden process-global.

use std::any::{self, Any, TypeId};
use std::future::Future;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;

use dashmap::DashMap;
use futures::FutureExt;
use futures::future::{self, BoxFuture};

use crate::conventions::{ConventionEntry, ErasedFactory, NilConventions};
use crate::error::{NilError, NilResult};

/// Where a registry entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FactorySource {
    /// Installed at registry construction.
    Builtin,
    /// Explicitly registered by the caller.
    Registered,
    /// Memoized from a convention-declared member on first resolution.
    Discovered,
}

struct FactoryEntry {
    type_name: &'static str,
    source: FactorySource,
    produce: ErasedFactory,
}

/// Snapshot row returned by [`NilRegistry::registered_types`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredType {
    type_id: TypeId,
    type_name: &'static str,
    source: FactorySource,
}

impl RegisteredType {
    /// Identity of the registered type.
    #[must_use]
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Name of the registered type.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Provenance of the registered factory.
    #[must_use]
    pub fn source(&self) -> FactorySource {
        self.source
    }
}

/// Thread-safe registry of neutral ("nil object") instances per type.
///
/// Resolution order is fixed: an existing factory wins outright; otherwise
/// the type's declared conventions are scanned (member-kind-major, alias
/// priority within each kind) and the first match is memoized; otherwise
/// resolution fails with [`NilError::NoNilObject`].
///
/// `get_instance` may race with `register` and with other `get_instance`
/// calls discovering the same type: redundant discovery is harmless, the
/// first memoized factory keeps its slot, and explicit registration always
/// takes precedence once written.
///
/// # Examples
///
/// ```rust,ignore
/// use vigil_nil::NilRegistry;
///
/// let registry = NilRegistry::new();
/// registry.register(|| Connection::unbound());
///
/// let conn: Connection = registry.get_instance()?;
/// let name: String = registry.or_nil_object(maybe_name)?;
/// ```
pub struct NilRegistry {
    factories: DashMap<TypeId, FactoryEntry>,
    conventions: DashMap<TypeId, ConventionEntry>,
}

impl NilRegistry {
    /// Creates a registry pre-populated with the built-in neutral
    /// instances: the unspecified IP address, the empty string, and an
    /// already-completed unit future.
    #[must_use]
    pub fn new() -> Self {
        let registry = Self {
            factories: DashMap::new(),
            conventions: DashMap::new(),
        };
        registry.install_builtins();
        registry
    }

    fn install_builtins(&self) {
        self.insert_factory(FactorySource::Builtin, || {
            IpAddr::V4(Ipv4Addr::UNSPECIFIED)
        });
        self.insert_factory(FactorySource::Builtin, String::new);
        self.insert_factory(FactorySource::Builtin, || -> BoxFuture<'static, ()> {
            future::ready(()).boxed()
        });
    }

    fn insert_factory<T, F>(&self, source: FactorySource, factory: F)
    where
        T: 'static,
        F: Fn() -> T + Send + Sync + 'static,
    {
        let entry = FactoryEntry {
            type_name: any::type_name::<T>(),
            source,
            produce: Arc::new(move || Box::new(factory()) as Box<dyn Any>),
        };
        self.factories.insert(TypeId::of::<T>(), entry);
    }

    /// Registers a factory for `T`, replacing any existing entry.
    ///
    /// Last registration wins, including over a previously memoized
    /// convention discovery: explicit registration always takes precedence
    /// for all subsequent resolutions.
    pub fn register<T, F>(&self, factory: F)
    where
        T: 'static,
        F: Fn() -> T + Send + Sync + 'static,
    {
        tracing::info!(
            type_name = any::type_name::<T>(),
            "registered nil object factory"
        );
        self.insert_factory(FactorySource::Registered, factory);
    }

    /// Registers one shared value as the neutral instance for `T`,
    /// cloned per resolution.
    pub fn register_value<T>(&self, value: T)
    where
        T: Clone + Send + Sync + 'static,
    {
        self.register(move || value.clone());
    }

    /// Registers a factory whose product type is assignable to `T`.
    ///
    /// The covariance escape hatch: a subtype's neutral instance may
    /// satisfy a supertype request when a conversion exists.
    pub fn register_into<T, U, F>(&self, factory: F)
    where
        T: 'static,
        U: Into<T> + 'static,
        F: Fn() -> U + Send + Sync + 'static,
    {
        self.register(move || factory().into());
    }

    /// Installs `T`'s declared candidate members, replacing any prior
    /// declaration.
    ///
    /// Resolution stays lazy: nothing is scanned or memoized until the
    /// first `get_instance::<T>()`.
    pub fn declare<T: NilConventions>(&self) {
        self.conventions
            .insert(TypeId::of::<T>(), ConventionEntry::of::<T>());
    }

    /// Resolves the neutral instance of `T`.
    ///
    /// Strict order, short-circuiting on first success:
    ///
    /// 1. factory lookup by type identity (built-in, registered, or
    ///    previously discovered);
    /// 2. convention discovery over `T`'s declared members, memoizing the
    ///    winner as the factory for future calls;
    /// 3. failure with [`NilError::NoNilObject`] naming `T`.
    pub fn get_instance<T: 'static>(&self) -> NilResult<T> {
        let type_id = TypeId::of::<T>();

        // Clone the factory out of the map so user code never runs under a
        // shard lock; a factory may itself resolve other types.
        let existing = self
            .factories
            .get(&type_id)
            .map(|entry| Arc::clone(&entry.produce));
        if let Some(produce) = existing {
            return Ok(produced::<T>(produce()));
        }

        if let Some(discovered) = self.discover(type_id) {
            return Ok(produced::<T>(discovered()));
        }

        Err(NilError::NoNilObject {
            type_name: any::type_name::<T>(),
        })
    }

    fn discover(&self, type_id: TypeId) -> Option<ErasedFactory> {
        let (type_name, kind, alias, read) = {
            let entry = self.conventions.get(&type_id)?;
            let member = entry.select()?;
            (
                entry.type_name,
                member.kind,
                member.alias,
                Arc::clone(&member.read),
            )
        };
        tracing::debug!(
            type_name,
            kind = %kind,
            alias = %alias,
            "memoized nil object factory via convention discovery"
        );
        // First resolution wins; an explicit registration or a concurrent
        // discovery that got there first keeps its slot.
        self.factories.entry(type_id).or_insert_with(|| FactoryEntry {
            type_name,
            source: FactorySource::Discovered,
            produce: Arc::clone(&read),
        });
        Some(read)
    }

    /// The value if present, else the neutral instance of `T`.
    pub fn or_nil_object<T: 'static>(&self, value: Option<T>) -> NilResult<T> {
        match vigil_guard::has_value("value", value) {
            Ok(present) => Ok(present),
            // Absence is the fallback trigger, not a failure.
            Err(_) => self.get_instance(),
        }
    }

    /// [`or_nil_object`](Self::or_nil_object) over an asynchronous
    /// computation.
    ///
    /// A `None` handle - a computation that was never started - yields the
    /// neutral instance directly. Otherwise the computation is awaited
    /// first, then the same presence check and fallback applies to its
    /// output. The fallback itself never suspends.
    pub async fn or_nil_object_future<T, F>(&self, pending: Option<F>) -> NilResult<T>
    where
        T: 'static,
        F: Future<Output = Option<T>>,
    {
        match pending {
            Some(computation) => {
                let value = computation.await;
                self.or_nil_object(value)
            }
            None => self.get_instance(),
        }
    }

    /// Whether a factory for `T` is currently present.
    #[must_use]
    pub fn contains<T: 'static>(&self) -> bool {
        self.factories.contains_key(&TypeId::of::<T>())
    }

    /// Owned snapshot of every type currently carrying a factory:
    /// built-ins, explicit registrations, and memoized discoveries.
    ///
    /// Never a live view of internal state.
    #[must_use]
    pub fn registered_types(&self) -> Vec<RegisteredType> {
        self.factories
            .iter()
            .map(|entry| RegisteredType {
                type_id: *entry.key(),
                type_name: entry.type_name,
                source: entry.source,
            })
            .collect()
    }

    /// Number of types currently carrying a factory.
    #[must_use]
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Whether no factory is present at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl Default for NilRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn produced<T: 'static>(boxed: Box<dyn Any>) -> T {
    match boxed.downcast::<T>() {
        Ok(value) => *value,
        // Entries are only ever stored under the TypeId of the type their
        // factory produces.
        Err(_) => unreachable!("nil object factory produced a foreign type"),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::conventions::{Alias, Member};

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Token(&'static str);

    impl NilConventions for Token {
        fn members() -> Vec<Member<Self>> {
            vec![Member::field(Alias::Nil, || Token("nil"))]
        }
    }

    #[test]
    fn register_and_get() {
        let registry = NilRegistry::new();
        registry.register(|| Token("neutral"));

        assert!(registry.contains::<Token>());
        assert_eq!(registry.get_instance::<Token>().unwrap(), Token("neutral"));
    }

    #[test]
    fn missing_type_fails_with_no_nil_object() {
        let registry = NilRegistry::new();
        let err = registry.get_instance::<Token>().unwrap_err();
        assert!(matches!(err, NilError::NoNilObject { .. }));
        assert!(err.to_string().contains("Token"));
    }

    #[test]
    fn register_replaces_existing() {
        let registry = NilRegistry::new();
        registry.register(|| Token("first"));
        registry.register(|| Token("second"));

        assert_eq!(registry.get_instance::<Token>().unwrap(), Token("second"));
    }

    #[test]
    fn registration_overrides_memoized_discovery() {
        let registry = NilRegistry::new();
        registry.declare::<Token>();
        assert_eq!(registry.get_instance::<Token>().unwrap(), Token("nil"));

        registry.register(|| Token("explicit"));
        assert_eq!(registry.get_instance::<Token>().unwrap(), Token("explicit"));
    }

    #[test]
    fn discovery_memoizes_with_discovered_source() {
        let registry = NilRegistry::new();
        registry.declare::<Token>();

        assert!(!registry.contains::<Token>());
        registry.get_instance::<Token>().unwrap();
        assert!(registry.contains::<Token>());

        let row = registry
            .registered_types()
            .into_iter()
            .find(|row| row.type_id() == TypeId::of::<Token>())
            .unwrap();
        assert_eq!(row.source(), FactorySource::Discovered);
    }

    #[test]
    fn builtins_are_present() {
        let registry = NilRegistry::new();

        assert_eq!(registry.get_instance::<String>().unwrap(), "");
        assert_eq!(
            registry.get_instance::<IpAddr>().unwrap(),
            IpAddr::V4(Ipv4Addr::UNSPECIFIED)
        );
        assert!(registry.contains::<BoxFuture<'static, ()>>());
        assert_eq!(registry.len(), 3);
        assert!(!registry.is_empty());
    }

    #[test]
    fn registered_types_is_an_owned_snapshot() {
        let registry = NilRegistry::new();
        let snapshot = registry.registered_types();

        registry.register(|| Token("later"));
        assert_eq!(snapshot.len(), 3);
        assert_eq!(registry.registered_types().len(), 4);
    }

    #[test]
    fn register_value_clones_one_shared_value() {
        let registry = NilRegistry::new();
        registry.register_value(Token("shared"));

        let a = registry.get_instance::<Token>().unwrap();
        let b = registry.get_instance::<Token>().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn register_into_satisfies_a_wider_type() {
        #[derive(Debug, Clone, PartialEq, Eq)]
        struct Narrow;

        #[derive(Debug, Clone, PartialEq, Eq)]
        struct Wide(&'static str);

        impl From<Narrow> for Wide {
            fn from(_: Narrow) -> Self {
                Wide("from-narrow")
            }
        }

        let registry = NilRegistry::new();
        registry.register_into::<Wide, _, _>(|| Narrow);

        assert_eq!(
            registry.get_instance::<Wide>().unwrap(),
            Wide("from-narrow")
        );
    }

    #[test]
    fn or_nil_object_prefers_the_present_value() {
        let registry = NilRegistry::new();
        assert_eq!(
            registry.or_nil_object(Some("kept".to_owned())).unwrap(),
            "kept"
        );
        assert_eq!(registry.or_nil_object(None::<String>).unwrap(), "");
    }

    #[test]
    fn or_nil_object_fails_for_unresolvable_types() {
        let registry = NilRegistry::new();
        let err = registry.or_nil_object(None::<Token>).unwrap_err();
        assert!(matches!(err, NilError::NoNilObject { .. }));
    }
}
