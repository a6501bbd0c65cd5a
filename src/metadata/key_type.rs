use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Runtime identity of a key's value type.
///
/// Two `KeyType`s are equal when they describe the same Rust type; the
/// readable name only exists for diagnostics.
#[derive(Clone, Copy)]
pub struct KeyType {
    id: TypeId,
    name: &'static str,
}

impl KeyType {
    pub fn of<V: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<V>(),
            name: std::any::type_name::<V>(),
        }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is<V: ?Sized + 'static>(&self) -> bool {
        self.id == TypeId::of::<V>()
    }
}

impl PartialEq for KeyType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for KeyType {}

impl Hash for KeyType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("KeyType").field(&self.name).finish()
    }
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
