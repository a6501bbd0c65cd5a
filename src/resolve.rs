//! Identity property discovery over a type's full hierarchy.

use log::warn;

use crate::config::AmbiguityPolicy;
use crate::errors::{IdentityError, IdentityResult};
use crate::metadata::PropertyInfo;
use crate::traits::Reflect;

/// Finds the property of `T` carrying `#[identity_key]`.
///
/// The walk covers `T`'s own properties, then embedded bases and implemented
/// or extended interfaces in declaration order, depth first. Marked
/// properties sharing a name are one logical property and the closest
/// declaration is kept. Absence is `Ok(None)`; more than one distinct marked
/// property is resolved by `policy`.
pub fn find_identity_property<T>(policy: AmbiguityPolicy) -> IdentityResult<Option<PropertyInfo<T>>>
where
    T: Reflect + ?Sized,
{
    let mut candidates: Vec<PropertyInfo<T>> = Vec::new();
    for property in T::properties().into_iter().filter(PropertyInfo::is_identity_key) {
        if !candidates.iter().any(|c| c.name() == property.name()) {
            candidates.push(property);
        }
    }

    if candidates.len() > 1 {
        let names: Vec<&'static str> = candidates.iter().map(PropertyInfo::name).collect();
        match policy {
            AmbiguityPolicy::Reject => {
                return Err(IdentityError::AmbiguousIdentityKey {
                    type_name: T::type_name(),
                    candidates: names,
                });
            }
            AmbiguityPolicy::FirstFound => {
                warn!(
                    "{} exposes identity keys {:?}; using `{}`",
                    T::type_name(),
                    names,
                    names[0]
                );
            }
        }
    }

    Ok(candidates.into_iter().next())
}
