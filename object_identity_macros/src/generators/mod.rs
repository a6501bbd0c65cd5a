use proc_macro2::TokenStream;
use quote::quote;

pub mod interface_impl;
pub mod reflect_impl;

/// Absolute path to the runtime crate, used by every generated item.
pub fn runtime() -> TokenStream {
    quote!(::object_identity)
}
