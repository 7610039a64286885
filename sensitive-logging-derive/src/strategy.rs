//! Parsing of `#[sensitive]` and `#[log_field(...)]` field attributes.
//!
//! This module maps attribute syntax to routing decisions and produces
//! structured errors for invalid forms.

use proc_macro2::Span;
use syn::{spanned::Spanned, Attribute, LitStr, Meta, Result};

/// Where a field's value goes.
///
/// | Attribute | Strategy | Behavior |
/// |-----------|----------|----------|
/// | None | `Plain` | Plain log field |
/// | `#[sensitive]` / `#[log_field(sensitive)]` | `Sensitive` | Explicit sensitive data |
/// | `#[log_field(skip)]` | `Skip` | Not logged |
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Strategy {
    Plain,
    Sensitive,
    Skip,
}

/// Options parsed from one field's attributes.
#[derive(Clone, Debug)]
pub(crate) struct FieldOptions {
    pub(crate) strategy: Strategy,
    /// Key to log under instead of the field name.
    pub(crate) rename: Option<String>,
}

#[derive(Default)]
struct Parsed {
    sensitive: Option<Span>,
    skip: Option<Span>,
    rename: Option<LitStr>,
}

fn mark(target: &mut Option<Span>, span: Span, what: &str) -> Result<()> {
    if target.is_some() {
        return Err(syn::Error::new(
            span,
            format!("`{what}` specified more than once on the same field"),
        ));
    }
    *target = Some(span);
    Ok(())
}

pub(crate) fn parse_field_options(attrs: &[Attribute]) -> Result<FieldOptions> {
    let mut parsed = Parsed::default();

    for attr in attrs {
        if attr.path().is_ident("sensitive") {
            match &attr.meta {
                Meta::Path(_) => mark(&mut parsed.sensitive, attr.span(), "sensitive")?,
                _ => {
                    return Err(syn::Error::new(
                        attr.span(),
                        "#[sensitive] takes no arguments; use #[log_field(...)] for options",
                    ));
                }
            }
            continue;
        }

        if !attr.path().is_ident("log_field") {
            continue;
        }

        match &attr.meta {
            Meta::List(list) => {
                list.parse_nested_meta(|meta| {
                    if meta.path.is_ident("sensitive") {
                        mark(&mut parsed.sensitive, meta.path.span(), "sensitive")
                    } else if meta.path.is_ident("skip") {
                        mark(&mut parsed.skip, meta.path.span(), "skip")
                    } else if meta.path.is_ident("rename") {
                        if parsed.rename.is_some() {
                            return Err(meta.error("`rename` specified more than once on the same field"));
                        }
                        let name: LitStr = meta.value()?.parse()?;
                        if name.value().is_empty() {
                            return Err(syn::Error::new(name.span(), "`rename` cannot be empty"));
                        }
                        parsed.rename = Some(name);
                        Ok(())
                    } else {
                        Err(meta.error(format!(
                            "unknown field option `{}`; expected `sensitive`, `skip`, or `rename`",
                            meta.path
                                .get_ident()
                                .map_or_else(|| "?".to_string(), ToString::to_string)
                        )))
                    }
                })?;
            }
            Meta::Path(_) => {
                return Err(syn::Error::new(
                    attr.span(),
                    "expected options, e.g. #[log_field(sensitive)]",
                ));
            }
            Meta::NameValue(_) => {
                return Err(syn::Error::new(
                    attr.span(),
                    "name-value syntax is not supported for #[log_field]",
                ));
            }
        }
    }

    if let Some(skip) = parsed.skip {
        if parsed.sensitive.is_some() || parsed.rename.is_some() {
            return Err(syn::Error::new(
                skip,
                "`skip` cannot be combined with other field options",
            ));
        }
        return Ok(FieldOptions {
            strategy: Strategy::Skip,
            rename: None,
        });
    }

    let strategy = if parsed.sensitive.is_some() {
        Strategy::Sensitive
    } else {
        Strategy::Plain
    };
    Ok(FieldOptions {
        strategy,
        rename: parsed.rename.map(|name| name.value()),
    })
}
