use syn::{Fields, Ident, Path, visit::Visit};

use crate::{
    errors::{MacroError, ReflectDeriveError, combine},
    item_info::reflect_model::{ModelFieldInfo, parse_implements},
    util::extract_fields,
};

#[derive(Default)]
pub struct ModelVisitor<'ast> {
    pub name: Option<&'ast Ident>,
    pub fields: Vec<ModelFieldInfo<'ast>>,
    pub implements: Vec<Path>,
    pub errors: Vec<syn::Error>,
}

impl<'a> Visit<'a> for ModelVisitor<'a> {
    fn visit_derive_input(&mut self, i: &'a syn::DeriveInput) {
        self.name = Some(&i.ident);
        if !i.generics.params.is_empty() {
            self.errors
                .push(MacroError::from(ReflectDeriveError::GenericModel).spanned(&i.generics));
        }
        match extract_fields(i) {
            Ok(Fields::Unnamed(unnamed)) => self
                .errors
                .push(MacroError::from(ReflectDeriveError::TupleStruct).spanned(unnamed)),
            Ok(fields) => self.visit_model_fields(fields),
            Err(e) => self.errors.push(e),
        }
        match parse_implements(&i.attrs) {
            Ok(implements) => self.implements = implements,
            Err(e) => self.errors.push(e),
        }
    }
}

impl<'a> ModelVisitor<'a> {
    fn visit_model_fields(&mut self, fields: &'a Fields) {
        for field in fields {
            match ModelFieldInfo::from_field(field) {
                Ok(info) => {
                    if info.is_identity_key() && self.fields.iter().any(|f| f.is_identity_key()) {
                        self.errors.push(
                            MacroError::from(ReflectDeriveError::MultipleIdentityKeys)
                                .at(info.ident.span()),
                        );
                    }
                    self.fields.push(info);
                }
                Err(e) => self.errors.push(e),
            }
        }
    }

    pub fn validate(&mut self) -> syn::Result<()> {
        match combine(std::mem::take(&mut self.errors)) {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::{DeriveInput, parse_quote};

    #[test]
    fn collects_fields_and_interfaces() {
        let input: DeriveInput = parse_quote! {
            #[reflect(implements(IMy))]
            struct My {
                name: String,
                #[identity_key]
                tag: String,
            }
        };
        let mut visitor = ModelVisitor::default();
        visitor.visit_derive_input(&input);
        assert!(visitor.validate().is_ok());
        assert_eq!(visitor.fields.len(), 2);
        assert_eq!(visitor.implements.len(), 1);
    }

    #[test]
    fn reports_multiple_identity_keys() {
        let input: DeriveInput = parse_quote! {
            struct My {
                #[identity_key]
                name: String,
                #[identity_key]
                tag: String,
            }
        };
        let mut visitor = ModelVisitor::default();
        visitor.visit_derive_input(&input);
        let err = visitor.validate().unwrap_err();
        assert!(err.to_string().contains("Multiple identity keys"));
    }

    #[test]
    fn rejects_enums_and_generics() {
        let input: DeriveInput = parse_quote! { enum E { A } };
        let mut visitor = ModelVisitor::default();
        visitor.visit_derive_input(&input);
        assert!(visitor.validate().is_err());

        let input: DeriveInput = parse_quote! { struct G<T> { value: T } };
        let mut visitor = ModelVisitor::default();
        visitor.visit_derive_input(&input);
        assert!(visitor.validate().is_err());
    }
}
