//! Derive macro for `sensitive-logging`.
//!
//! This crate generates the code behind `#[derive(LogFields)]`. It:
//! - reads `#[log_field(...)]` and `#[sensitive]` field attributes
//! - emits a `LogFields` implementation that splits a struct into plain log
//!   fields and explicitly sensitive data, in declaration order
//!
//! It does **not** decide what happens to those values afterwards. Redaction,
//! relocation, and rendering live in the main `sensitive-logging` crate.

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::default_trait_access,
    clippy::doc_markdown,
    clippy::if_not_else,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::needless_ifs,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::enum_glob_use,
    clippy::struct_excessive_bools,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::result_large_err,
    clippy::future_not_send,
    clippy::option_if_let_else,
    clippy::from_over_into,
    clippy::manual_inspect
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

#[allow(unused_extern_crates)]
extern crate proc_macro;

use proc_macro2::TokenStream;
use proc_macro_crate::{crate_name, FoundCrate};
use quote::{format_ident, quote};
use syn::{parse_macro_input, spanned::Spanned, Data, DeriveInput, Result};

mod derive_struct;
mod generics;
mod strategy;
use derive_struct::derive_struct;
use generics::add_serialize_bounds;

/// Derives `sensitive_logging::LogFields` for structs with named fields.
///
/// # Field Attributes
///
/// - **No annotation**: the field becomes a plain log field named after the
///   Rust field.
///
/// - `#[sensitive]`: the field goes to the explicit sensitive data of the log
///   call, never to the plain fields.
///
/// - `#[log_field(...)]` takes a comma-separated list of:
///   - `sensitive`: same as `#[sensitive]`
///   - `rename = "name"`: use `name` as the key
///   - `skip`: leave the field out entirely (cannot be combined)
///
/// Every included field must implement `serde::Serialize`; values that fail to
/// serialize are logged as a placeholder string. Generic parameters used by
/// included fields get a `Serialize` bound.
///
/// Tuple structs, unit structs, enums, and unions are rejected at compile time.
#[proc_macro_derive(LogFields, attributes(log_field, sensitive))]
pub fn derive_log_fields(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}

/// Returns the token stream to reference the sensitive-logging crate root.
///
/// Handles crate renaming (e.g., `logs = { package = "sensitive-logging", ... }`).
/// Inside the crate itself it relies on `extern crate self as sensitive_logging`.
fn crate_root() -> TokenStream {
    match crate_name("sensitive-logging") {
        Ok(FoundCrate::Name(name)) => {
            let ident = format_ident!("{}", name);
            quote! { ::#ident }
        }
        Ok(FoundCrate::Itself) | Err(_) => quote! { ::sensitive_logging },
    }
}

fn crate_path(item: &str) -> TokenStream {
    let root = crate_root();
    let item_path =
        syn::parse_str::<syn::Path>(item).expect("sensitive-logging crate path should parse");
    quote! { #root::#item_path }
}

fn expand(input: DeriveInput) -> Result<TokenStream> {
    let DeriveInput {
        ident,
        generics,
        data,
        ..
    } = input;

    let output = match data {
        Data::Struct(data) => derive_struct(data, &generics)?,
        Data::Enum(e) => {
            return Err(syn::Error::new(
                e.enum_token.span(),
                "`LogFields` cannot be derived for enums",
            ));
        }
        Data::Union(u) => {
            return Err(syn::Error::new(
                u.union_token.span(),
                "`LogFields` cannot be derived for unions",
            ));
        }
    };

    let bounded = add_serialize_bounds(generics, &output.used_generics);
    let (impl_generics, ty_generics, where_clause) = bounded.split_for_impl();
    let trait_path = crate_path("LogFields");
    let fields_path = crate_path("Fields");
    let sensitive_path = crate_path("SensitiveData");
    let body = &output.body;

    Ok(quote! {
        impl #impl_generics #trait_path for #ident #ty_generics #where_clause {
            #[allow(unused_variables)]
            fn log_fields(
                &self,
                fields: &mut #fields_path,
                sensitive: &mut #sensitive_path,
            ) {
                #body
            }
        }
    })
}
