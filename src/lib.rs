//! # Object Identity
//!
//! Uniform "get the identity of this instance" access for Rust types.
//!
//! A type marks at most one property as its identity key. The key may be a
//! field of the type itself, a field of an embedded base, or a getter on an
//! interface trait the type implements, however deeply interfaces extend
//! one another. [`IdentityKeyGenerator`] discovers the key on first use,
//! binds a typed accessor to it, and caches that accessor for every later
//! request.
//!
//! ## Quick Start
//!
//! ```rust
//! use object_identity::prelude::*;
//!
//! #[derive(Reflect, Clone)]
//! pub struct My {
//!     pub name: String,
//!     #[identity_key]
//!     pub tag: String,
//! }
//!
//! let key = typed_identity_key::<My, String>()?;
//! assert!(key.has_key());
//! assert_eq!(key.key_name(), Some("tag"));
//!
//! let my = My { name: "a".into(), tag: "42".into() };
//! assert_eq!(key.key(&my), "42");
//! # Ok::<(), IdentityError>(())
//! ```
//!
//! ## Interfaces
//!
//! ```rust
//! use object_identity::prelude::*;
//!
//! #[identity_interface]
//! pub trait IMy {
//!     fn name(&self) -> String;
//!     #[identity_key]
//!     fn tag(&self) -> String;
//! }
//!
//! #[identity_interface(extends(IMy))]
//! pub trait IDerived: IMy {
//!     fn description(&self) -> String;
//! }
//!
//! let key = identity_key::<dyn IDerived>()?;
//! assert_eq!(key.key_name(), Some("tag"));
//! # Ok::<(), IdentityError>(())
//! ```
//!
//! ## Types without a key
//!
//! Asking generically for an accessor degrades to a [`MissingIdentityKey`];
//! asking for a typed key fails.
//!
//! ```rust
//! use object_identity::prelude::*;
//!
//! #[derive(Reflect)]
//! pub struct NoKey {}
//!
//! let key = identity_key::<NoKey>()?;
//! assert!(!key.has_key());
//! assert!(key.untyped_key(&NoKey {}).is_err());
//! assert!(typed_identity_key::<NoKey, u64>().is_err());
//! # Ok::<(), IdentityError>(())
//! ```

pub mod config;
pub mod errors;
pub mod generator;
pub mod keys;
pub mod metadata;
pub mod prelude;
pub mod resolve;
pub mod traits;

pub use config::{AmbiguityPolicy, GeneratorConfig};
pub use errors::{IdentityError, IdentityResult};
pub use generator::{IdentityKeyGenerator, global, identity_key, typed_identity_key};
pub use keys::{KeyDescriptor, MissingIdentityKey, TypedIdentityKey};
pub use metadata::{Getter, KeyType, Projection, PropertyInfo};
pub use object_identity_macros::{Reflect, identity_interface};
pub use resolve::find_identity_property;
pub use traits::{IdentityKey, Reflect};
