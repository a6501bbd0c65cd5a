use syn::{Attribute, DeriveInput, Fields, Ident, Type, visit::Visit};

use crate::errors::{MacroError, ReflectDeriveError};

pub const IDENTITY_KEY: &str = "identity_key";
pub const REFLECT: &str = "reflect";

pub fn extract_fields(input: &DeriveInput) -> Result<&Fields, syn::Error> {
    if let syn::Data::Struct(data_struct) = &input.data {
        Ok(&data_struct.fields)
    } else {
        Err(MacroError::from(ReflectDeriveError::IncorrectModelType).spanned(&input.ident))
    }
}

pub fn is_identity_key(attr: &Attribute) -> bool {
    attr.path().is_ident(IDENTITY_KEY)
}

pub fn prefixed_ident(prefix: &str, ident: &Ident) -> Ident {
    Ident::new(&format!("{prefix}{ident}"), proc_macro2::Span::call_site())
}

/// Whether a return type borrows or names `Self`; such values cannot be
/// handed out as owned property values.
pub fn borrows_or_mentions_self(ty: &Type) -> bool {
    #[derive(Default)]
    struct Finder {
        found: bool,
    }

    impl<'ast> Visit<'ast> for Finder {
        fn visit_type_reference(&mut self, reference: &'ast syn::TypeReference) {
            match &reference.lifetime {
                Some(lifetime) if lifetime.ident == "static" => {
                    syn::visit::visit_type(self, &reference.elem);
                }
                _ => self.found = true,
            }
        }

        fn visit_lifetime(&mut self, lifetime: &'ast syn::Lifetime) {
            if lifetime.ident != "static" {
                self.found = true;
            }
        }

        fn visit_type_impl_trait(&mut self, _: &'ast syn::TypeImplTrait) {
            self.found = true;
        }

        fn visit_path(&mut self, path: &'ast syn::Path) {
            if path.segments.iter().any(|s| s.ident == "Self") {
                self.found = true;
            }
            syn::visit::visit_path(self, path);
        }
    }

    let mut finder = Finder::default();
    finder.visit_type(ty);
    finder.found
}
