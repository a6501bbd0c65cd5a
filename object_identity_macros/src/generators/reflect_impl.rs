use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use crate::{
    generators::runtime,
    item_info::reflect_model::FieldRole,
    util::prefixed_ident,
    visitors::model_visitor::ModelVisitor,
};

impl ModelVisitor<'_> {
    /// Emits `impl Reflect for Model`.
    ///
    /// Own readable fields come first, then embedded bases, then implemented
    /// interfaces, each in declaration order.
    pub fn generate_reflect_impl(&self) -> TokenStream {
        let rt = runtime();
        let Some(name) = self.name else {
            return TokenStream::new();
        };

        let properties = self.fields.iter().filter_map(|field| {
            let FieldRole::Property { identity_key } = field.role else {
                return None;
            };
            let ident = field.ident;
            let ty = field.ty;
            let key_name = ident.to_string();
            Some(quote! {
                properties.push({
                    let project = ::core::clone::Clone::clone(&project);
                    #rt::PropertyInfo::new::<#ty, _>(
                        #key_name,
                        ::core::any::type_name::<#name>(),
                        #identity_key,
                        move |owner: &__O| ::core::clone::Clone::clone(&project.get(owner).#ident),
                    )
                });
            })
        });

        let bases = self
            .fields
            .iter()
            .filter(|field| field.role == FieldRole::Base)
            .map(|field| {
                let ident = field.ident;
                let ty = field.ty;
                let step = prefixed_ident("__reflect_base_", ident);
                quote! {
                    fn #step(this: &#name) -> &#ty {
                        &this.#ident
                    }
                    properties.extend(<#ty as #rt::Reflect>::properties_via(project.then::<#ty>(#step)));
                }
            });

        let interfaces = self.implements.iter().enumerate().map(|(index, interface)| {
            let step = format_ident!("__reflect_implements_{}", index);
            quote! {
                fn #step(this: &#name) -> &(dyn #interface + 'static) {
                    this
                }
                properties.extend(
                    <dyn #interface as #rt::Reflect>::properties_via(
                        project.then::<dyn #interface>(#step),
                    ),
                );
            }
        });

        quote! {
            #[automatically_derived]
            impl #rt::Reflect for #name {
                #[allow(unused_mut, unused_variables)]
                fn properties_via<__O: ?::core::marker::Sized + 'static>(
                    project: #rt::Projection<__O, Self>,
                ) -> ::std::vec::Vec<#rt::PropertyInfo<__O>> {
                    let mut properties = ::std::vec::Vec::new();
                    #(#properties)*
                    #(#bases)*
                    #(#interfaces)*
                    properties
                }
            }
        }
    }
}
