//! Generator configuration.
//!
//! Built with `typed-builder`; every option has a default so
//! `GeneratorConfig::default()` matches `GeneratorConfig::builder().build()`.

use strum::{AsRefStr, Display, EnumString};
use typed_builder::TypedBuilder;

/// What to do when more than one distinctly named property in a type's
/// hierarchy carries `#[identity_key]`.
///
/// Parses from its snake_case name:
///
/// ```
/// use object_identity::config::AmbiguityPolicy;
///
/// let policy: AmbiguityPolicy = "first_found".parse().unwrap();
/// assert_eq!(policy, AmbiguityPolicy::FirstFound);
/// assert_eq!(AmbiguityPolicy::Reject.to_string(), "reject");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum AmbiguityPolicy {
    /// Fail with `AmbiguousIdentityKey`.
    #[default]
    Reject,
    /// Use the first marked property in hierarchy walk order: own
    /// properties, then ancestors in declaration order, depth first.
    FirstFound,
}

/// Configuration for an `IdentityKeyGenerator`.
///
/// # Examples
///
/// ```
/// use object_identity::config::{AmbiguityPolicy, GeneratorConfig};
///
/// let config = GeneratorConfig::builder()
///     .ambiguity(AmbiguityPolicy::FirstFound)
///     .build();
/// assert_eq!(config.name_suffix, "IdentityKey");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, TypedBuilder)]
#[builder(doc)]
pub struct GeneratorConfig {
    /// How conflicting identity markers are handled
    #[builder(default)]
    pub ambiguity: AmbiguityPolicy,

    /// Appended to a type's name to form its generated accessor name
    #[builder(default = "IdentityKey")]
    pub name_suffix: &'static str,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_reject_ambiguity() {
        let config = GeneratorConfig::default();
        assert_eq!(config.ambiguity, AmbiguityPolicy::Reject);
        assert_eq!(config.name_suffix, "IdentityKey");
    }

    #[test]
    fn policy_round_trips_through_strings() {
        assert_eq!("reject".parse::<AmbiguityPolicy>().unwrap(), AmbiguityPolicy::Reject);
        assert_eq!(AmbiguityPolicy::FirstFound.as_ref(), "first_found");
        assert!("newest".parse::<AmbiguityPolicy>().is_err());
    }
}
