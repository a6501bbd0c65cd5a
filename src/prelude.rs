//! Prelude module for convenient imports.
//!
//! ```rust
//! use object_identity::prelude::*;
//! ```
//!
//! Brings in the `Reflect` derive and trait, the `identity_interface`
//! attribute, the accessor types, the generator and its free functions,
//! and the error types.

pub use crate::config::{AmbiguityPolicy, GeneratorConfig};
pub use crate::errors::{IdentityError, IdentityResult};
pub use crate::generator::{IdentityKeyGenerator, identity_key, typed_identity_key};
pub use crate::keys::{KeyDescriptor, MissingIdentityKey, TypedIdentityKey};
pub use crate::metadata::KeyType;
pub use crate::traits::{IdentityKey, Reflect};
pub use object_identity_macros::{Reflect, identity_interface};
