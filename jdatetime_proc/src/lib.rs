//! Attribute helpers for the `jdatetime` Python bindings.
//!
//! PyO3 reads its helper attributes (`#[staticmethod]`, `#[getter]`, ...) only when they are
//! written literally under the block macro. Read the descriptions on [`py_attr()`].

use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::quote;
use syn::{ImplItem, ItemImpl, Meta, Token, parse::Parser, punctuated::Punctuated};

/// Wrap an `impl` block in a PyO3 block attribute and tag every method with the rest.
///
/// The first argument is the block attribute (only `pymethods` is supported). Every following
/// argument is pushed onto each method of the block unless the method already carries it.
///
/// ```rust,ignore
/// #[py_attr(pymethods, staticmethod)]
/// impl PyJalaliDate {
///     fn fromordinal(n: i64) -> PyResult<Self> { todo!() }
///     fn fromisoformat(s: &str) -> PyResult<Self> { todo!() }
/// }
/// ```
#[proc_macro_attribute]
pub fn py_attr(args: TokenStream, tokens: TokenStream) -> TokenStream {
    expand(args.into(), tokens.into())
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(args: TokenStream2, tokens: TokenStream2) -> syn::Result<TokenStream2> {
    let mut metas = Punctuated::<Meta, Token![,]>::parse_terminated
        .parse2(args)?
        .into_iter();

    let parent = metas.next().ok_or_else(|| {
        syn::Error::new(
            Span::call_site(),
            "expected a block attribute such as `pymethods`",
        )
    })?;
    if !parent.path().is_ident("pymethods") {
        return Err(syn::Error::new_spanned(
            parent,
            "unsupported block attribute, expected `pymethods`",
        ));
    }
    let helpers: Vec<Meta> = metas.collect();

    let mut item_impl: ItemImpl = syn::parse2(tokens)?;
    for item in item_impl.items.iter_mut() {
        let ImplItem::Fn(method) = item else {
            continue;
        };
        for meta in &helpers {
            let ident = meta.path().get_ident();
            if method.attrs.iter().any(|a| a.path().get_ident() == ident) {
                continue;
            }
            method.attrs.push(syn::parse_quote!(#[#meta]));
        }
    }

    Ok(quote! {
        #[#parent]
        #item_impl
    })
}
