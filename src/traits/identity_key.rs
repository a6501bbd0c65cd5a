use std::any::Any;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::errors::IdentityResult;
use crate::keys::KeyDescriptor;
use crate::metadata::KeyType;

/// Uniform access to the identity of `T` instances without naming the key type.
pub trait IdentityKey<T: ?Sized>: Send + Sync {
    fn descriptor(&self) -> &KeyDescriptor;

    /// Indicates whether `T` has an identity key.
    fn has_key(&self) -> bool {
        self.descriptor().has_key()
    }

    fn key_type(&self) -> Option<KeyType> {
        self.descriptor().key_type()
    }

    fn key_name(&self) -> Option<&'static str> {
        self.descriptor().key_name()
    }

    /// Reads `instance`'s identity key as an untyped value.
    ///
    /// Fails with `IdentityNotDefined` when `T` has no identity key.
    fn untyped_key(&self, instance: &T) -> IdentityResult<Box<dyn Any>>;
}

impl<T: ?Sized + 'static> PartialEq for dyn IdentityKey<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key_name() == other.key_name()
    }
}

impl<T: ?Sized + 'static> Eq for dyn IdentityKey<T> {}

impl<T: ?Sized + 'static> Hash for dyn IdentityKey<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::any::type_name::<dyn IdentityKey<T>>().hash(state);
        self.key_name().hash(state);
    }
}

impl<T: ?Sized + 'static> fmt::Debug for dyn IdentityKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdentityKey")
            .field("owner", &std::any::type_name::<T>())
            .field("descriptor", self.descriptor())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::sync::Arc;

    use crate::keys::{MissingIdentityKey, TypedIdentityKey};

    struct Order {
        id: u32,
    }

    struct Invoice {
        id: u32,
    }

    fn hash_of<K: Hash + ?Sized>(key: &K) -> u64 {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        hasher.finish()
    }

    fn order_key() -> Arc<dyn IdentityKey<Order>> {
        Arc::new(TypedIdentityKey::<Order, u32>::new("id", Arc::new(|o: &Order| o.id)))
    }

    #[test]
    fn equal_accessors_hash_equal() {
        let first = order_key();
        let second = order_key();
        assert!(*first == *second);
        assert_eq!(hash_of(&*first), hash_of(&*second));

        let missing: Arc<dyn IdentityKey<Order>> = Arc::new(MissingIdentityKey::new());
        assert!(*first != *missing);
    }

    #[test]
    fn hash_is_seeded_by_the_owner_type() {
        let invoice: Arc<dyn IdentityKey<Invoice>> = Arc::new(
            TypedIdentityKey::<Invoice, u32>::new("id", Arc::new(|i: &Invoice| i.id)),
        );
        assert_eq!(order_key().key_name(), invoice.key_name());
        assert_ne!(hash_of(&*order_key()), hash_of(&*invoice));
    }
}
