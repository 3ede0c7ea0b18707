//! Implementation of the `#[derive(Interface)]` macro.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

use crate::attrs::InterfaceAttrs;

pub fn derive_interface_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_interface_inner(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_interface_inner(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let attrs = InterfaceAttrs::from_attrs(&input.attrs)?;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    // Object handles are named after the entry, falling back to the Rust ident
    let object_name = match attrs.name.as_deref() {
        Some(entry) if !entry.is_empty() => entry.to_string(),
        _ => name.to_string(),
    };

    let entry_tokens = match &attrs.name {
        Some(entry) => quote! { ::std::option::Option::Some(#entry) },
        None => quote! { ::std::option::Option::None },
    };

    Ok(quote! {
        impl #impl_generics ::nativebridge_core::InterfaceEntry
            for #name #ty_generics #where_clause
        {
            fn interface_entry() -> ::std::option::Option<&'static str> {
                #entry_tokens
            }
        }

        impl #impl_generics ::nativebridge_core::NativeType for #name #ty_generics #where_clause {
            fn descriptor() -> ::nativebridge_core::TypeDescriptor {
                ::nativebridge_core::TypeDescriptor::object(#object_name)
            }
        }
    })
}
