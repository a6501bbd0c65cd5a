use thiserror::Error;

pub type IdentityResult<T> = Result<T, IdentityError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentityError {
    #[error("Identity key not defined for type: {type_name}.")]
    IdentityNotDefined { type_name: &'static str },

    #[error(
        "Identity key type mismatch. {type_name} declares an identity key on property `{key_name}` of type `{declared}` which doesn't agree with the requested type: {requested}."
    )]
    IdentityTypeMismatch {
        type_name: &'static str,
        key_name: &'static str,
        declared: &'static str,
        requested: &'static str,
    },

    #[error("Ambiguous identity key. {type_name} exposes more than one identity key: {candidates:?}.")]
    AmbiguousIdentityKey {
        type_name: &'static str,
        candidates: Vec<&'static str>,
    },

    #[error("Accessor generation failed for {type_name}: {reason}")]
    Generation {
        type_name: &'static str,
        reason: String,
    },
}

impl IdentityError {
    pub fn not_defined<T: ?Sized>() -> Self {
        IdentityError::IdentityNotDefined {
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Name of the type the failing request targeted.
    pub fn type_name(&self) -> &'static str {
        match self {
            IdentityError::IdentityNotDefined { type_name }
            | IdentityError::IdentityTypeMismatch { type_name, .. }
            | IdentityError::AmbiguousIdentityKey { type_name, .. }
            | IdentityError::Generation { type_name, .. } => type_name,
        }
    }
}
