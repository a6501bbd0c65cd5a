pub mod identity_key;
pub mod reflect;

pub use identity_key::IdentityKey;
pub use reflect::Reflect;
