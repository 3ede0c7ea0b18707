//! Implementation of the `#[methods]` attribute macro.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::visit_mut::{self, VisitMut};
use syn::{
    FnArg, GenericParam, ImplItem, ImplItemFn, ItemImpl, Lifetime, ReturnType, Type,
    parse_macro_input,
};

use crate::attrs::{ExposeAttrs, is_expose};

pub fn methods_impl(attr: TokenStream, item: TokenStream) -> TokenStream {
    let attr = TokenStream2::from(attr);
    let mut input = parse_macro_input!(item as ItemImpl);

    match methods_inner(attr, &mut input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn methods_inner(attr: TokenStream2, input: &mut ItemImpl) -> syn::Result<TokenStream2> {
    if !attr.is_empty() {
        return Err(syn::Error::new_spanned(attr, "#[methods] takes no arguments"));
    }
    if let Some((_, path, _)) = &input.trait_ {
        return Err(syn::Error::new_spanned(
            path,
            "#[methods] must be placed on an inherent impl block",
        ));
    }

    let mut rows = Vec::new();
    for item in &mut input.items {
        if let ImplItem::Fn(method) = item {
            rows.push(method_row(method)?);
            // #[expose] is inert; strip it from the re-emitted block
            method.attrs.retain(|attr| !is_expose(attr));
        }
    }

    let self_ty = &input.self_ty;
    let (impl_generics, _, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        #input

        impl #impl_generics ::nativebridge_core::MethodTable for #self_ty #where_clause {
            fn method_table() -> ::std::vec::Vec<::nativebridge_core::MethodMeta> {
                ::std::vec![#(#rows),*]
            }
        }
    })
}

/// Generate the `MethodMeta` row for one method.
///
/// Descriptors are only computed for exposed methods, so unmarked helpers may
/// use types that do not implement `NativeType`.
fn method_row(method: &ImplItemFn) -> syn::Result<TokenStream2> {
    let name = method.sig.ident.to_string();

    let Some(expose) = ExposeAttrs::from_attrs(&method.attrs)? else {
        return Ok(quote! {
            ::nativebridge_core::MethodMeta::new(
                #name,
                ::std::vec::Vec::new(),
                ::nativebridge_core::TypeDescriptor::Void,
            )
        });
    };

    if let Some(param) = method
        .sig
        .generics
        .params
        .iter()
        .find(|param| !matches!(param, GenericParam::Lifetime(_)))
    {
        return Err(syn::Error::new_spanned(
            param,
            "exposed methods cannot have type or const parameters",
        ));
    }

    let params = method
        .sig
        .inputs
        .iter()
        .filter_map(|arg| match arg {
            FnArg::Receiver(_) => None,
            FnArg::Typed(pat_type) => Some(pat_type.ty.as_ref()),
        })
        .map(descriptor_tokens)
        .collect::<syn::Result<Vec<_>>>()?;

    let returns = match &method.sig.output {
        ReturnType::Default => quote! { ::nativebridge_core::TypeDescriptor::Void },
        ReturnType::Type(_, ty) => descriptor_tokens(ty)?,
    };

    let exposure_name = match &expose.name {
        Some(exposed) => quote! { ::std::option::Option::Some(#exposed) },
        None => quote! { ::std::option::Option::None },
    };

    Ok(quote! {
        ::nativebridge_core::MethodMeta::new(#name, ::std::vec![#(#params),*], #returns)
            .exposed(::nativebridge_core::Exposure { name: #exposure_name })
    })
}

/// `<T as NativeType>::descriptor()` for a parameter or return type.
///
/// References are looked through and lifetimes are widened to `'static`, since
/// the method table is built outside the method's generic scope.
fn descriptor_tokens(ty: &Type) -> syn::Result<TokenStream2> {
    let mut ty = strip_references(ty).clone();
    if let Type::ImplTrait(_) | Type::Infer(_) | Type::Macro(_) = ty {
        return Err(syn::Error::new_spanned(
            ty,
            "unsupported type in exposed method signature",
        ));
    }
    StaticLifetimes.visit_type_mut(&mut ty);
    Ok(quote! { <#ty as ::nativebridge_core::NativeType>::descriptor() })
}

fn strip_references(ty: &Type) -> &Type {
    match ty {
        Type::Reference(reference) => strip_references(&reference.elem),
        Type::Paren(paren) => strip_references(&paren.elem),
        Type::Group(group) => strip_references(&group.elem),
        other => other,
    }
}

struct StaticLifetimes;

impl VisitMut for StaticLifetimes {
    fn visit_lifetime_mut(&mut self, lifetime: &mut Lifetime) {
        if lifetime.ident != "static" {
            *lifetime = Lifetime::new("'static", lifetime.apostrophe);
        }
        visit_mut::visit_lifetime_mut(self, lifetime);
    }
}
