use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::errors::{IdentityError, IdentityResult};
use crate::keys::{BoundKey, TypedIdentityKey};
use crate::metadata::KeyType;

/// Shared, typed read access to one property of `O`.
pub type Getter<O, V> = Arc<dyn Fn(&O) -> V + Send + Sync>;

/// A readable property of `O`, either declared on `O` itself or inherited
/// from one of its ancestors.
pub struct PropertyInfo<O: ?Sized + 'static> {
    name: &'static str,
    declared_on: &'static str,
    value_type: KeyType,
    identity_key: bool,
    getter: Arc<dyn Any + Send + Sync>,
    bind: fn(&PropertyInfo<O>) -> IdentityResult<BoundKey<O>>,
}

impl<O: ?Sized + 'static> PropertyInfo<O> {
    pub fn new<V, F>(
        name: &'static str,
        declared_on: &'static str,
        identity_key: bool,
        getter: F,
    ) -> Self
    where
        V: 'static,
        F: Fn(&O) -> V + Send + Sync + 'static,
    {
        let getter: Getter<O, V> = Arc::new(getter);
        Self {
            name,
            declared_on,
            value_type: KeyType::of::<V>(),
            identity_key,
            getter: Arc::new(getter),
            bind: bind_accessor::<O, V>,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Readable name of the type that declares the property.
    pub fn declared_on(&self) -> &'static str {
        self.declared_on
    }

    pub fn value_type(&self) -> KeyType {
        self.value_type
    }

    /// Whether the property carries the `#[identity_key]` marker.
    pub fn is_identity_key(&self) -> bool {
        self.identity_key
    }

    /// The typed getter, when `V` is the property's declared type.
    pub fn getter<V: 'static>(&self) -> Option<Getter<O, V>> {
        self.getter.downcast_ref::<Getter<O, V>>().cloned()
    }

    pub fn read<V: 'static>(&self, owner: &O) -> Option<V> {
        self.getter::<V>().map(|getter| getter(owner))
    }

    /// Instantiates the concrete `TypedIdentityKey<O, V>` for this property.
    pub(crate) fn bind(&self) -> IdentityResult<BoundKey<O>> {
        (self.bind)(self)
    }
}

fn bind_accessor<O: ?Sized + 'static, V: 'static>(
    property: &PropertyInfo<O>,
) -> IdentityResult<BoundKey<O>> {
    let getter = property
        .getter::<V>()
        .ok_or_else(|| IdentityError::Generation {
            type_name: std::any::type_name::<O>(),
            reason: format!(
                "getter for `{}` does not produce {}",
                property.name,
                std::any::type_name::<V>()
            ),
        })?;
    let accessor = Arc::new(TypedIdentityKey::<O, V>::new(property.name, getter));
    Ok(BoundKey::new(accessor))
}

impl<O: ?Sized + 'static> Clone for PropertyInfo<O> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            declared_on: self.declared_on,
            value_type: self.value_type,
            identity_key: self.identity_key,
            getter: Arc::clone(&self.getter),
            bind: self.bind,
        }
    }
}

impl<O: ?Sized + 'static> fmt::Debug for PropertyInfo<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyInfo")
            .field("name", &self.name)
            .field("declared_on", &self.declared_on)
            .field("value_type", &self.value_type)
            .field("identity_key", &self.identity_key)
            .finish()
    }
}
