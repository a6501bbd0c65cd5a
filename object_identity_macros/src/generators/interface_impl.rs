use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use crate::{generators::runtime, visitors::interface_visitor::InterfaceVisitor};

impl InterfaceVisitor<'_> {
    /// Emits `impl Reflect for dyn Trait`: getters first, then the
    /// properties of every extended interface reached by upcasting.
    pub fn generate_reflect_impl(&self) -> TokenStream {
        let rt = runtime();
        let Some(name) = self.name else {
            return TokenStream::new();
        };

        let properties = self.methods.iter().map(|method| {
            let ident = method.ident;
            let ty = method.ty;
            let identity_key = method.identity_key;
            let key_name = ident.to_string();
            quote! {
                properties.push({
                    let project = ::core::clone::Clone::clone(&project);
                    #rt::PropertyInfo::new::<#ty, _>(
                        #key_name,
                        ::core::any::type_name::<dyn #name>(),
                        #identity_key,
                        move |owner: &__O| #name::#ident(project.get(owner)),
                    )
                });
            }
        });

        let parents = self.extends.iter().enumerate().map(|(index, parent)| {
            let step = format_ident!("__reflect_extends_{}", index);
            quote! {
                fn #step<'__a>(this: &'__a (dyn #name + 'static)) -> &'__a (dyn #parent + 'static) {
                    this
                }
                properties.extend(
                    <dyn #parent as #rt::Reflect>::properties_via(
                        project.then::<dyn #parent>(#step),
                    ),
                );
            }
        });

        quote! {
            #[automatically_derived]
            impl #rt::Reflect for dyn #name {
                #[allow(unused_mut, unused_variables)]
                fn properties_via<__O: ?::core::marker::Sized + 'static>(
                    project: #rt::Projection<__O, Self>,
                ) -> ::std::vec::Vec<#rt::PropertyInfo<__O>> {
                    let mut properties = ::std::vec::Vec::new();
                    #(#properties)*
                    #(#parents)*
                    properties
                }
            }
        }
    }
}
