//! Reflection metadata published by `#[derive(Reflect)]` and
//! `#[identity_interface]`: readable properties, their value types, and the
//! projections that make inherited properties readable from an owner.

pub mod key_type;
pub mod projection;
pub mod property;

pub use key_type::KeyType;
pub use projection::Projection;
pub use property::{Getter, PropertyInfo};
