use proc_macro::TokenStream;
use quote::quote;
use syn::{
    DeriveInput, ItemTrait, Path, Token, parse_macro_input, punctuated::Punctuated, visit::Visit,
    visit_mut::VisitMut,
};

use crate::{
    errors::{InterfaceError, MacroError},
    visitors::{
        interface_visitor::{InterfaceVisitor, MarkerStripper},
        model_visitor::ModelVisitor,
    },
};

mod errors;
mod generators;
mod item_info;
mod util;
mod visitors;

/// Derives `Reflect` for a struct, publishing its readable properties and
/// ancestors so `IdentityKeyGenerator` can discover the identity key.
///
/// # Attributes
///
/// - `#[identity_key]` - **Optional**. Marks at most one field as the identity key
/// - `#[reflect(base)]` - Treats the field as an embedded ancestor; its properties are inherited
/// - `#[reflect(skip)]` - Leaves the field out of the property list
/// - `#[reflect(implements(Trait, ...))]` - On the struct. Lists `#[identity_interface]`
///   traits the struct implements; their properties are inherited
///
/// Readable fields must be `Clone`, since property values are handed out owned.
///
/// # Example
///
/// ```
/// use object_identity::Reflect;
///
/// #[derive(Reflect, Clone)]
/// pub struct My {
///     pub name: String,
///     #[identity_key]
///     pub tag: String,
/// }
/// ```
#[proc_macro_derive(Reflect, attributes(identity_key, reflect))]
pub fn reflect_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let mut visitor = ModelVisitor::default();
    visitor.visit_derive_input(&input);
    if let Err(e) = visitor.validate() {
        return e.into_compile_error().into();
    }
    visitor.generate_reflect_impl().into()
}

/// Makes a trait usable as an interface in the identity hierarchy.
///
/// Every `fn name(&self) -> Owned` method is a readable property, and
/// `#[identity_key]` on one of them marks the key. `extends(...)` lists
/// supertraits whose properties are inherited.
///
/// ```
/// use object_identity::identity_interface;
///
/// #[identity_interface]
/// pub trait IMy {
///     fn name(&self) -> String;
///     #[identity_key]
///     fn tag(&self) -> String;
/// }
///
/// #[identity_interface(extends(IMy))]
/// pub trait IDerived: IMy {
///     fn description(&self) -> String;
/// }
/// ```
#[proc_macro_attribute]
pub fn identity_interface(args: TokenStream, input: TokenStream) -> TokenStream {
    let mut extends: Vec<Path> = Vec::new();
    let parser = syn::meta::parser(|meta| {
        if meta.path.is_ident("extends") {
            let content;
            syn::parenthesized!(content in meta.input);
            extends.extend(Punctuated::<Path, Token![,]>::parse_terminated(&content)?);
            Ok(())
        } else {
            Err(MacroError::from(InterfaceError::UnknownOption).spanned(&meta.path))
        }
    });
    parse_macro_input!(args with parser);

    let mut item = parse_macro_input!(input as ItemTrait);
    let reflect_impl = {
        let mut visitor = InterfaceVisitor::new(extends);
        visitor.visit_item_trait(&item);
        if let Err(e) = visitor.validate() {
            return e.into_compile_error().into();
        }
        visitor.generate_reflect_impl()
    };
    MarkerStripper.visit_item_trait_mut(&mut item);

    quote! {
        #item
        #reflect_impl
    }
    .into()
}
