use syn::{FnArg, Ident, ReturnType, TraitItemFn, Type};

use crate::{
    errors::{InterfaceError, MacroError},
    util::{borrows_or_mentions_self, is_identity_key},
};

/// A trait method readable as a property: `fn name(&self) -> Owned`.
pub struct InterfaceMethodInfo<'ast> {
    pub ident: &'ast Ident,
    pub ty: &'ast Type,
    pub identity_key: bool,
}

impl<'a> InterfaceMethodInfo<'a> {
    /// Returns `Ok(None)` for methods that are not readable properties.
    pub fn from_method(method: &'a TraitItemFn) -> syn::Result<Option<Self>> {
        let mut identity_key = false;
        for attr in method.attrs.iter().filter(|a| is_identity_key(a)) {
            attr.meta
                .require_path_only()
                .map_err(|_| MacroError::from(InterfaceError::MarkerArguments).spanned(attr))?;
            identity_key = true;
        }

        match Self::readable(method) {
            Ok(ty) => Ok(Some(InterfaceMethodInfo {
                ident: &method.sig.ident,
                ty,
                identity_key,
            })),
            Err(reason) if identity_key => {
                Err(MacroError::from(InterfaceError::IneligibleKeyMethod(reason)).spanned(&method.sig))
            }
            Err(_) => Ok(None),
        }
    }

    fn readable(method: &'a TraitItemFn) -> Result<&'a Type, &'static str> {
        let sig = &method.sig;
        if !sig.generics.params.is_empty() || sig.generics.where_clause.is_some() {
            return Err("generic or constrained method");
        }
        if sig.asyncness.is_some() || sig.unsafety.is_some() {
            return Err("async or unsafe method");
        }
        let mut inputs = sig.inputs.iter();
        match inputs.next() {
            Some(FnArg::Receiver(receiver))
                if receiver.reference.is_some() && receiver.mutability.is_none() => {}
            _ => return Err("receiver is not `&self`"),
        }
        if inputs.next().is_some() {
            return Err("method takes arguments");
        }
        match &sig.output {
            ReturnType::Type(_, ty) if !borrows_or_mentions_self(ty) => Ok(&**ty),
            ReturnType::Type(..) => Err("return type borrows or names Self"),
            ReturnType::Default => Err("method returns nothing"),
        }
    }
}
