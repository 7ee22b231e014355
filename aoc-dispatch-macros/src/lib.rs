//! Procedural macros for the aoc-dispatch library

use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, Lit, parse_macro_input};

/// Derive macro for automatically registering a year with the plugin system
///
/// This macro submits the type to the inventory as an
/// `aoc_dispatch::YearPlugin`, so `CalendarBuilder::register_all_plugins`
/// discovers it without any hand-written registration list.
///
/// # Attributes
///
/// - `year`: Required. The Advent of Code year (e.g., 2015)
/// - `tags`: Optional. Array of string literals for filtering (e.g., ["intcode"])
///
/// # Requirements
///
/// The type must be a unit struct implementing the `Year` trait. If the trait
/// is not implemented you get a compile-time error pointing at the struct:
///
/// ```text
/// error[E0277]: the trait bound `Year2015: Year` is not satisfied
/// ```
///
/// # Example
///
/// ```ignore
/// use aoc_dispatch::{AdventYear, Year, YearTable};
///
/// #[derive(AdventYear)]
/// #[aoc(year = 2015, tags = ["classic"])]
/// pub struct Year2015;
///
/// impl Year for Year2015 {
///     fn table(&self) -> &'static YearTable {
///         &TABLE
///     }
/// }
/// ```
#[proc_macro_derive(AdventYear, attributes(aoc))]
pub fn derive_advent_year(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    expand_advent_year(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand_advent_year(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;

    let aoc_attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("aoc"))
        .ok_or_else(|| {
            syn::Error::new_spanned(name, "AdventYear derive macro requires #[aoc(...)] attribute")
        })?;

    let mut year: Option<u16> = None;
    let mut tags: Vec<String> = Vec::new();

    aoc_attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("year") {
            let value: Lit = meta.value()?.parse()?;
            match value {
                Lit::Int(lit_int) => year = Some(lit_int.base10_parse()?),
                other => return Err(syn::Error::new_spanned(other, "year must be an integer")),
            }
        } else if meta.path.is_ident("tags") {
            // tags = ["a", "b"]
            let _ = meta.value()?;
            let content;
            syn::bracketed!(content in meta.input);
            while !content.is_empty() {
                let lit: Lit = content.parse()?;
                match lit {
                    Lit::Str(lit_str) => tags.push(lit_str.value()),
                    other => return Err(syn::Error::new_spanned(other, "tags must be strings")),
                }
                if content.peek(syn::Token![,]) {
                    let _: syn::Token![,] = content.parse()?;
                }
            }
        } else {
            return Err(meta.error("unsupported aoc attribute, expected `year` or `tags`"));
        }
        Ok(())
    })?;

    let year = year.ok_or_else(|| syn::Error::new_spanned(aoc_attr, "missing required `year`"))?;

    let tags_array = if tags.is_empty() {
        quote! { &[] }
    } else {
        let tag_strs = tags.iter().map(|s| s.as_str());
        quote! { &[#(#tag_strs),*] }
    };

    Ok(quote! {
        const _: () = {
            trait MustImplementYear: ::aoc_dispatch::Year {}
            impl MustImplementYear for #name {}
        };

        ::aoc_dispatch::inventory::submit! {
            ::aoc_dispatch::YearPlugin {
                year: #year,
                registry: &#name,
                tags: #tags_array,
            }
        }
    })
}
