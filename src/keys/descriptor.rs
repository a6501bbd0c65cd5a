use crate::metadata::KeyType;

/// Whether a type has an identity key and, if so, its value type and name.
///
/// A descriptor either carries both a key type and a key name or neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyDescriptor {
    key_type: Option<KeyType>,
    key_name: Option<&'static str>,
}

impl KeyDescriptor {
    pub const fn missing() -> Self {
        Self {
            key_type: None,
            key_name: None,
        }
    }

    pub fn new<IK: ?Sized + 'static>(key_name: &'static str) -> Self {
        Self {
            key_type: Some(KeyType::of::<IK>()),
            key_name: Some(key_name),
        }
    }

    pub fn has_key(&self) -> bool {
        self.key_type.is_some()
    }

    pub fn key_type(&self) -> Option<KeyType> {
        self.key_type
    }

    pub fn key_name(&self) -> Option<&'static str> {
        self.key_name
    }
}

impl Default for KeyDescriptor {
    fn default() -> Self {
        Self::missing()
    }
}
