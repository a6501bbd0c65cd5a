use std::any::Any;
use std::fmt;
use std::marker::PhantomData;

use crate::errors::{IdentityError, IdentityResult};
use crate::keys::KeyDescriptor;
use crate::traits::IdentityKey;

/// Accessor for types that don't declare an identity key; extraction
/// always fails with `IdentityNotDefined`.
pub struct MissingIdentityKey<T: ?Sized> {
    descriptor: KeyDescriptor,
    _owner: PhantomData<fn(&T)>,
}

impl<T: ?Sized> MissingIdentityKey<T> {
    pub const fn new() -> Self {
        Self {
            descriptor: KeyDescriptor::missing(),
            _owner: PhantomData,
        }
    }
}

impl<T: ?Sized> Default for MissingIdentityKey<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized + 'static> IdentityKey<T> for MissingIdentityKey<T> {
    fn descriptor(&self) -> &KeyDescriptor {
        &self.descriptor
    }

    fn untyped_key(&self, _instance: &T) -> IdentityResult<Box<dyn Any>> {
        Err(IdentityError::not_defined::<T>())
    }
}

impl<T: ?Sized> fmt::Debug for MissingIdentityKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MissingIdentityKey")
            .field("owner", &std::any::type_name::<T>())
            .finish()
    }
}
