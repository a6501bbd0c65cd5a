use syn::{Field, Ident, Path, Token, Type, punctuated::Punctuated};

use crate::{
    errors::{MacroError, ReflectDeriveError},
    util::{REFLECT, is_identity_key},
};

/// How a struct field takes part in the reflected hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRole {
    Property { identity_key: bool },
    Base,
    Skip,
}

pub struct ModelFieldInfo<'ast> {
    pub ident: &'ast Ident,
    pub ty: &'ast Type,
    pub role: FieldRole,
}

impl<'a> ModelFieldInfo<'a> {
    pub fn from_field(field: &'a Field) -> syn::Result<Self> {
        let ident = field
            .ident
            .as_ref()
            .ok_or_else(|| MacroError::from(ReflectDeriveError::TupleStruct).spanned(field))?;

        let mut identity_key = false;
        let mut role = None;
        for attr in &field.attrs {
            if is_identity_key(attr) {
                attr.meta
                    .require_path_only()
                    .map_err(|_| MacroError::from(ReflectDeriveError::MarkerArguments).spanned(attr))?;
                identity_key = true;
            } else if attr.path().is_ident(REFLECT) {
                attr.parse_nested_meta(|meta| {
                    if meta.path.is_ident("base") {
                        role = Some(FieldRole::Base);
                        Ok(())
                    } else if meta.path.is_ident("skip") {
                        role = Some(FieldRole::Skip);
                        Ok(())
                    } else {
                        let option = meta
                            .path
                            .get_ident()
                            .map(Ident::to_string)
                            .unwrap_or_default();
                        Err(MacroError::from(ReflectDeriveError::UnknownOption(option))
                            .spanned(&meta.path))
                    }
                })?;
            }
        }

        let role = match (identity_key, role) {
            (true, Some(FieldRole::Base)) => {
                return Err(MacroError::from(ReflectDeriveError::ConflictingRole("base")).spanned(field));
            }
            (true, Some(FieldRole::Skip)) => {
                return Err(MacroError::from(ReflectDeriveError::ConflictingRole("skip")).spanned(field));
            }
            (_, Some(role)) => role,
            (identity_key, None) => FieldRole::Property { identity_key },
        };

        Ok(ModelFieldInfo {
            ident,
            ty: &field.ty,
            role,
        })
    }

    pub fn is_identity_key(&self) -> bool {
        matches!(self.role, FieldRole::Property { identity_key: true })
    }
}

/// Parses `#[reflect(implements(A, B))]` on the struct itself.
pub fn parse_implements(attrs: &[syn::Attribute]) -> syn::Result<Vec<Path>> {
    let mut implements = Vec::new();
    for attr in attrs.iter().filter(|a| a.path().is_ident(REFLECT)) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("implements") {
                let content;
                syn::parenthesized!(content in meta.input);
                let list = Punctuated::<Path, Token![,]>::parse_terminated(&content)?;
                implements.extend(list);
                Ok(())
            } else {
                let option = meta
                    .path
                    .get_ident()
                    .map(Ident::to_string)
                    .unwrap_or_default();
                Err(MacroError::from(ReflectDeriveError::UnknownOption(option)).spanned(&meta.path))
            }
        })?;
    }
    Ok(implements)
}
