//! Attribute parsing utilities for the bridge macros.

use syn::{Attribute, LitStr, Meta};

/// Parsed `#[interface(...)]` attributes on a type.
#[derive(Debug, Default)]
pub struct InterfaceAttrs {
    /// Interface entry name. Absent means not dispatch-reachable.
    pub name: Option<String>,
}

/// Parsed `#[expose]` / `#[expose(...)]` attribute on a method.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ExposeAttrs {
    /// Override for the exposed name.
    pub name: Option<String>,
}

impl InterfaceAttrs {
    /// Parse attributes from a list of `#[interface(...)]` attributes.
    pub fn from_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut result = Self::default();

        for attr in attrs {
            if !attr.path().is_ident("interface") {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("name") {
                    let value: LitStr = meta.value()?.parse()?;
                    result.name = Some(value.value());
                } else {
                    return Err(meta.error(format!(
                        "unknown interface attribute: {}",
                        meta.path.get_ident().map(|i| i.to_string()).unwrap_or_default()
                    )));
                }
                Ok(())
            })?;
        }

        Ok(result)
    }
}

impl ExposeAttrs {
    /// Find and parse the `#[expose]` marker, if present.
    ///
    /// More than one marker on the same method is an error.
    pub fn from_attrs(attrs: &[Attribute]) -> syn::Result<Option<Self>> {
        let mut found: Option<Self> = None;

        for attr in attrs {
            if !is_expose(attr) {
                continue;
            }
            if found.is_some() {
                return Err(syn::Error::new_spanned(attr, "duplicate #[expose] marker"));
            }

            let mut result = Self::default();
            match &attr.meta {
                Meta::Path(_) => {}
                Meta::List(_) => {
                    attr.parse_nested_meta(|meta| {
                        if meta.path.is_ident("name") {
                            let value: LitStr = meta.value()?.parse()?;
                            result.name = Some(value.value());
                            Ok(())
                        } else {
                            Err(meta.error(format!(
                                "unknown expose attribute: {}",
                                meta.path.get_ident().map(|i| i.to_string()).unwrap_or_default()
                            )))
                        }
                    })?;
                }
                Meta::NameValue(_) => {
                    return Err(syn::Error::new_spanned(
                        attr,
                        "expected #[expose] or #[expose(name = \"...\")]",
                    ));
                }
            }
            found = Some(result);
        }

        Ok(found)
    }
}

/// Whether `attr` is the inert `#[expose]` marker.
pub fn is_expose(attr: &Attribute) -> bool {
    attr.path().is_ident("expose")
}
