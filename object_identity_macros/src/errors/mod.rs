use proc_macro2::Span;
use quote::ToTokens;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MacroError {
    #[error("There was an error deriving Reflect: {0}")]
    Derive(#[from] ReflectDeriveError),
    #[error("There was an error expanding identity_interface: {0}")]
    Interface(#[from] InterfaceError),
}

#[derive(Error, Debug)]
pub enum ReflectDeriveError {
    #[error("Reflect can only be derived for structs")]
    IncorrectModelType,
    #[error("Tuple structs are not supported; name the fields")]
    TupleStruct,
    #[error("Generic structs are not supported")]
    GenericModel,
    #[error(
        "Multiple identity keys found. A type must have at most one field marked with #[identity_key]"
    )]
    MultipleIdentityKeys,
    #[error("#[identity_key] cannot be combined with #[reflect({0})]")]
    ConflictingRole(&'static str),
    #[error("Unknown reflect option `{0}`; expected `base`, `skip` or `implements(...)`")]
    UnknownOption(String),
    #[error("#[identity_key] takes no arguments")]
    MarkerArguments,
}

#[derive(Error, Debug)]
pub enum InterfaceError {
    #[error("Generic traits are not supported")]
    GenericTrait,
    #[error(
        "Multiple identity keys found. An interface must have at most one method marked with #[identity_key]"
    )]
    MultipleIdentityKeys,
    #[error("An identity key method must take only `&self` and return an owned value: {0}")]
    IneligibleKeyMethod(&'static str),
    #[error("`{0}` is listed in extends(...) but is not a supertrait")]
    NotASupertrait(String),
    #[error("Unknown identity_interface option; expected `extends(...)`")]
    UnknownOption,
    #[error("#[identity_key] takes no arguments")]
    MarkerArguments,
}

impl MacroError {
    pub fn spanned<T: ToTokens>(self, tokens: T) -> syn::Error {
        syn::Error::new_spanned(tokens, self)
    }

    pub fn at(self, span: Span) -> syn::Error {
        syn::Error::new(span, self)
    }
}

/// Folds collected errors into one so every problem is reported at once.
pub fn combine(errors: Vec<syn::Error>) -> Option<syn::Error> {
    errors.into_iter().reduce(|mut acc, e| {
        acc.combine(e);
        acc
    })
}
