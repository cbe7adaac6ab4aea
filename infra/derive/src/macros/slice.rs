use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::ItemStruct;

pub fn expand(input: ItemStruct) -> TokenStream {
    let handle = &input.ident;
    let inner = format_ident!("{handle}Inner");
    let vis = &input.vis;
    let attrs = &input.attrs;
    let fields = &input.fields;
    // Unit and tuple structs need a trailing semicolon after the field list.
    let terminator = match fields {
        syn::Fields::Named(_) => quote! {},
        _ => quote! { ; },
    };

    quote! {
        #(#attrs)*
        #[derive(Debug)]
        #vis struct #inner #fields #terminator

        #[derive(Debug, Clone)]
        #vis struct #handle {
            inner: std::sync::Arc<#inner>,
        }

        impl #handle {
            #[must_use]
            pub fn new(inner: #inner) -> Self {
                Self { inner: std::sync::Arc::new(inner) }
            }
        }

        impl std::ops::Deref for #handle {
            type Target = #inner;

            fn deref(&self) -> &Self::Target {
                &self.inner
            }
        }

        impl ::gway_domain::registry::FeatureSlice for #handle {
            fn as_any(&self) -> &dyn std::any::Any {
                self
            }
        }
    }
}
