//! Struct-specific `LogFields` derivation.
//!
//! Generates one insert per logged field, in declaration order, and collects
//! the generic parameters that need a `Serialize` bound.

use proc_macro2::{Ident, TokenStream};
use quote::quote_spanned;
use syn::{ext::IdentExt, spanned::Spanned, DataStruct, Fields, Result};

use crate::{
    crate_path,
    generics::collect_generics_from_type,
    strategy::{parse_field_options, Strategy},
};

pub(crate) struct StructDeriveOutput {
    pub(crate) body: TokenStream,
    pub(crate) used_generics: Vec<Ident>,
}

pub(crate) fn derive_struct(data: DataStruct, generics: &syn::Generics) -> Result<StructDeriveOutput> {
    let fields = match data.fields {
        Fields::Named(fields) => fields,
        Fields::Unnamed(fields) => {
            return Err(syn::Error::new(
                fields.span(),
                "`LogFields` needs named fields to use as log keys",
            ));
        }
        Fields::Unit => {
            return Err(syn::Error::new(
                data.struct_token.span(),
                "`LogFields` needs named fields to use as log keys",
            ));
        }
    };

    let to_value = crate_path("__private::to_field_value");
    let mut statements = Vec::new();
    let mut used_generics = Vec::new();

    for field in fields.named {
        let span = field.span();
        let options = parse_field_options(&field.attrs)?;
        let ident = field.ident.expect("named field should have an identifier");
        let key = options.rename.unwrap_or_else(|| ident.unraw().to_string());

        let target = match options.strategy {
            Strategy::Skip => continue,
            Strategy::Plain => quote_spanned! { span => fields },
            Strategy::Sensitive => quote_spanned! { span => sensitive },
        };
        collect_generics_from_type(&field.ty, generics, &mut used_generics);
        statements.push(quote_spanned! { span =>
            #target.insert(#key, #to_value(&self.#ident));
        });
    }

    Ok(StructDeriveOutput {
        body: quote::quote! { #(#statements)* },
        used_generics,
    })
}
