//! Builds and caches identity key accessors, once per target type.
//!
//! The cache maps each target type to its binding: either the typed accessor
//! for its identity property or the shared `MissingIdentityKey`. Lookups take
//! a read lock; a miss takes the write lock, checks again, then resolves and
//! binds before inserting. A failed resolution inserts nothing, so the next
//! request for the same type resolves again. Entries live as long as the
//! generator.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use log::{debug, trace};
use parking_lot::RwLock;

use crate::config::GeneratorConfig;
use crate::errors::{IdentityError, IdentityResult};
use crate::keys::{BoundKey, MissingIdentityKey, TypedIdentityKey};
use crate::metadata::KeyType;
use crate::resolve::find_identity_property;
use crate::traits::{IdentityKey, Reflect};

static GLOBAL: LazyLock<IdentityKeyGenerator> = LazyLock::new(IdentityKeyGenerator::default);

/// The process-wide generator.
pub fn global() -> &'static IdentityKeyGenerator {
    &GLOBAL
}

/// `global().accessor::<T>()`.
pub fn identity_key<T: Reflect + ?Sized>() -> IdentityResult<Arc<dyn IdentityKey<T>>> {
    global().accessor::<T>()
}

/// `global().typed_accessor::<T, IK>()`.
pub fn typed_identity_key<T, IK>() -> IdentityResult<Arc<TypedIdentityKey<T, IK>>>
where
    T: Reflect + ?Sized,
    IK: 'static,
{
    global().typed_accessor::<T, IK>()
}

enum Binding<T: ?Sized + 'static> {
    Missing(Arc<MissingIdentityKey<T>>),
    Bound {
        key_name: &'static str,
        key_type: KeyType,
        key: BoundKey<T>,
    },
}

impl<T: ?Sized + 'static> Clone for Binding<T> {
    fn clone(&self) -> Self {
        match self {
            Binding::Missing(missing) => Binding::Missing(Arc::clone(missing)),
            Binding::Bound {
                key_name,
                key_type,
                key,
            } => Binding::Bound {
                key_name: *key_name,
                key_type: *key_type,
                key: key.clone(),
            },
        }
    }
}

struct CacheEntry {
    generated_name: String,
    binding: Box<dyn Any + Send + Sync>,
}

/// Resolves identity properties and caches one accessor binding per type.
///
/// Use [`global()`] for the process-wide instance, or build one with its own
/// [`GeneratorConfig`]:
///
/// ```
/// use object_identity::{AmbiguityPolicy, GeneratorConfig, IdentityKeyGenerator};
///
/// let generator = IdentityKeyGenerator::new(
///     GeneratorConfig::builder()
///         .ambiguity(AmbiguityPolicy::FirstFound)
///         .build(),
/// );
/// assert!(generator.is_empty());
/// ```
pub struct IdentityKeyGenerator {
    config: GeneratorConfig,
    cache: RwLock<HashMap<TypeId, CacheEntry>>,
}

impl Default for IdentityKeyGenerator {
    fn default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}

impl IdentityKeyGenerator {
    /// Creates an empty generator using `config`.
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// The configuration this generator resolves with.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Returns `T`'s accessor, or a `MissingIdentityKey<T>` when `T` has no
    /// identity key.
    pub fn accessor<T: Reflect + ?Sized>(&self) -> IdentityResult<Arc<dyn IdentityKey<T>>> {
        Ok(match self.binding::<T>()? {
            Binding::Missing(missing) => missing as Arc<dyn IdentityKey<T>>,
            Binding::Bound { key, .. } => key.untyped(),
        })
    }

    /// Returns `T`'s accessor typed by its key.
    ///
    /// Fails with `IdentityNotDefined` when `T` has no identity key and with
    /// `IdentityTypeMismatch` when the key is not declared as `IK`.
    pub fn typed_accessor<T, IK>(&self) -> IdentityResult<Arc<TypedIdentityKey<T, IK>>>
    where
        T: Reflect + ?Sized,
        IK: 'static,
    {
        match self.binding::<T>()? {
            Binding::Missing(_) => Err(IdentityError::not_defined::<T>()),
            Binding::Bound {
                key_name,
                key_type,
                key,
            } => {
                if !key_type.is::<IK>() {
                    return Err(IdentityError::IdentityTypeMismatch {
                        type_name: T::type_name(),
                        key_name,
                        declared: key_type.name(),
                        requested: std::any::type_name::<IK>(),
                    });
                }
                key.typed::<IK>().ok_or_else(|| IdentityError::Generation {
                    type_name: T::type_name(),
                    reason: format!("accessor for `{key_name}` is not typed by {key_type}"),
                })
            }
        }
    }

    /// Reads `instance`'s identity key, typed as `IK`.
    pub fn key<T, IK>(&self, instance: &T) -> IdentityResult<IK>
    where
        T: Reflect + ?Sized,
        IK: 'static,
    {
        Ok(self.typed_accessor::<T, IK>()?.key(instance))
    }

    /// Reads `instance`'s identity key as an untyped value.
    pub fn untyped_key<T: Reflect + ?Sized>(&self, instance: &T) -> IdentityResult<Box<dyn Any>> {
        self.accessor::<T>()?.untyped_key(instance)
    }

    /// Deterministic name of the accessor generated for `T`, built from
    /// `Reflect::type_name` and the configured suffix.
    pub fn generated_name<T: Reflect + ?Sized>(&self) -> String {
        format!("{}{}", T::type_name(), self.config.name_suffix)
    }

    /// Names of every accessor generated so far, sorted.
    pub fn generated_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .cache
            .read()
            .values()
            .map(|entry| entry.generated_name.clone())
            .collect();
        names.sort();
        names
    }

    /// Whether a binding for `T` is cached.
    pub fn contains<T: ?Sized + 'static>(&self) -> bool {
        self.cache.read().contains_key(&TypeId::of::<T>())
    }

    /// Number of cached bindings, including missing-key ones.
    pub fn len(&self) -> usize {
        self.cache.read().len()
    }

    /// Whether nothing has been generated yet.
    pub fn is_empty(&self) -> bool {
        self.cache.read().is_empty()
    }

    fn binding<T: Reflect + ?Sized>(&self) -> IdentityResult<Binding<T>> {
        if let Some(binding) = Self::cached::<T>(&self.cache.read()) {
            trace!("identity key cache hit for {}", T::type_name());
            return Ok(binding);
        }

        let mut cache = self.cache.write();
        if let Some(binding) = Self::cached::<T>(&cache) {
            return Ok(binding);
        }

        let generated_name = self.generated_name::<T>();
        let binding = match find_identity_property::<T>(self.config.ambiguity)? {
            None => {
                debug!("{generated_name}: no identity key, using MissingIdentityKey");
                Binding::Missing(Arc::new(MissingIdentityKey::new()))
            }
            Some(property) => {
                let key = property.bind()?;
                debug!(
                    "{generated_name}: bound identity key `{}` of type {} declared on {}",
                    property.name(),
                    property.value_type(),
                    property.declared_on()
                );
                Binding::Bound {
                    key_name: property.name(),
                    key_type: property.value_type(),
                    key,
                }
            }
        };

        cache.insert(
            TypeId::of::<T>(),
            CacheEntry {
                generated_name,
                binding: Box::new(binding.clone()),
            },
        );
        Ok(binding)
    }

    fn cached<T: ?Sized + 'static>(cache: &HashMap<TypeId, CacheEntry>) -> Option<Binding<T>> {
        cache
            .get(&TypeId::of::<T>())
            .and_then(|entry| entry.binding.downcast_ref::<Binding<T>>())
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::{Projection, PropertyInfo};

    struct Ticket {
        code: String,
    }

    impl Reflect for Ticket {
        fn properties_via<O: ?Sized + 'static>(project: Projection<O, Self>) -> Vec<PropertyInfo<O>> {
            vec![PropertyInfo::new::<String, _>("code", "Ticket", true, move |o: &O| {
                project.get(o).code.clone()
            })]
        }
    }

    struct Anonymous;

    impl Reflect for Anonymous {
        fn properties_via<O: ?Sized + 'static>(_: Projection<O, Self>) -> Vec<PropertyInfo<O>> {
            Vec::new()
        }
    }

    struct Renamed {
        code: u16,
    }

    impl Reflect for Renamed {
        fn properties_via<O: ?Sized + 'static>(project: Projection<O, Self>) -> Vec<PropertyInfo<O>> {
            vec![PropertyInfo::new::<u16, _>("code", "Renamed", true, move |o: &O| {
                project.get(o).code
            })]
        }

        fn type_name() -> &'static str {
            "Renamed"
        }
    }

    #[test]
    fn caches_one_binding_per_type() {
        let generator = IdentityKeyGenerator::default();
        assert!(generator.is_empty());

        let first = generator.accessor::<Ticket>().unwrap();
        let second = generator.accessor::<Ticket>().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(generator.len(), 1);
        assert!(generator.contains::<Ticket>());

        let typed = generator.typed_accessor::<Ticket, String>().unwrap();
        assert_eq!(generator.len(), 1);
        assert_eq!(
            typed.key(&Ticket {
                code: "T-1".into()
            }),
            "T-1"
        );
    }

    #[test]
    fn missing_binding_is_shared() {
        let generator = IdentityKeyGenerator::default();
        let first = generator.accessor::<Anonymous>().unwrap();
        let second = generator.accessor::<Anonymous>().unwrap();
        assert!(!first.has_key());
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(
            generator.typed_accessor::<Anonymous, u8>().unwrap_err(),
            IdentityError::not_defined::<Anonymous>()
        );
    }

    #[test]
    fn names_generated_accessors() {
        let generator = IdentityKeyGenerator::default();
        generator.accessor::<Ticket>().unwrap();
        generator.accessor::<Anonymous>().unwrap();
        let names = generator.generated_names();
        assert_eq!(names.len(), 2);
        assert!(names.iter().all(|n| n.ends_with("IdentityKey")));
        assert_eq!(
            generator.generated_name::<Ticket>(),
            format!("{}IdentityKey", std::any::type_name::<Ticket>())
        );
    }

    #[test]
    fn generated_name_follows_reflect_type_name() {
        let generator = IdentityKeyGenerator::default();
        assert_eq!(generator.generated_name::<Renamed>(), "RenamedIdentityKey");
        generator.accessor::<Renamed>().unwrap();
        assert_eq!(generator.generated_names(), vec!["RenamedIdentityKey".to_string()]);

        let err = generator.typed_accessor::<Renamed, u8>().unwrap_err();
        assert!(err.to_string().contains("Renamed"));
        assert_eq!(generator.key::<Renamed, u16>(&Renamed { code: 4 }).unwrap(), 4);
    }
}
