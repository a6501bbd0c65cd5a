use std::any::Any;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::errors::IdentityResult;
use crate::keys::KeyDescriptor;
use crate::metadata::Getter;
use crate::traits::IdentityKey;

/// The accessor bound to `T`'s identity property of type `IK`.
///
/// One instantiation exists per `(T, IK)` pair; the generator builds it
/// once per `T` and hands out shared references.
pub struct TypedIdentityKey<T: ?Sized + 'static, IK: 'static> {
    descriptor: KeyDescriptor,
    getter: Getter<T, IK>,
}

impl<T: ?Sized + 'static, IK: 'static> TypedIdentityKey<T, IK> {
    pub fn new(key_name: &'static str, getter: Getter<T, IK>) -> Self {
        Self {
            descriptor: KeyDescriptor::new::<IK>(key_name),
            getter,
        }
    }

    /// Reads `instance`'s identity key.
    pub fn key(&self, instance: &T) -> IK {
        (self.getter)(instance)
    }

    pub fn name(&self) -> &'static str {
        self.descriptor.key_name().unwrap_or_default()
    }
}

impl<T: ?Sized + 'static, IK: 'static> IdentityKey<T> for TypedIdentityKey<T, IK> {
    fn descriptor(&self) -> &KeyDescriptor {
        &self.descriptor
    }

    fn untyped_key(&self, instance: &T) -> IdentityResult<Box<dyn Any>> {
        Ok(Box::new(self.key(instance)))
    }
}

// T and IK already agree, so naming the same property is enough.
impl<T: ?Sized + 'static, IK: 'static> PartialEq for TypedIdentityKey<T, IK> {
    fn eq(&self, other: &Self) -> bool {
        self.descriptor.key_name() == other.descriptor.key_name()
    }
}

impl<T: ?Sized + 'static, IK: 'static> Eq for TypedIdentityKey<T, IK> {}

impl<T: ?Sized + 'static, IK: 'static> Hash for TypedIdentityKey<T, IK> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::any::type_name::<Self>().hash(state);
        self.descriptor.key_name().hash(state);
    }
}

impl<T: ?Sized + 'static, IK: 'static> fmt::Debug for TypedIdentityKey<T, IK> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedIdentityKey")
            .field("owner", &std::any::type_name::<T>())
            .field("descriptor", &self.descriptor)
            .finish()
    }
}
