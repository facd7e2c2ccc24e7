use syn::{
    Attribute, Ident, Lit, Meta, Result, Token,
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
};

use crate::support::diag;

/// Parsed attribute arguments container.
#[derive(Debug, Clone)]
pub struct AttrArgs {
    pub items: Vec<AttrItem>,
}

/// A single attribute item.
#[derive(Debug, Clone)]
pub enum AttrItem {
    /// A flag like `skip`
    Flag(Ident),
    /// Key-value pair like `rename = "value"`
    KeyValue { key: Ident, value: Lit },
}

impl AttrItem {
    /// The key or flag name.
    pub fn key(&self) -> &Ident {
        match self {
            AttrItem::Flag(key) | AttrItem::KeyValue { key, .. } => key,
        }
    }
}

impl AttrArgs {
    /// Get a string value by key.
    ///
    /// A key given a non-string literal is an error.
    pub fn get_string(&self, key: &str) -> Result<Option<syn::LitStr>> {
        for item in &self.items {
            if let AttrItem::KeyValue { key: k, value } = item
                && k == key
            {
                return match value {
                    Lit::Str(s) => Ok(Some(s.clone())),
                    other => Err(diag::error_spanned(
                        other,
                        format!("expected a string for `{key}`"),
                    )),
                };
            }
        }
        Ok(None)
    }

    /// Check if a flag is present.
    pub fn has_flag(&self, flag: &str) -> bool {
        self.items
            .iter()
            .any(|item| matches!(item, AttrItem::Flag(f) if f == flag))
    }

    /// Reject every key not in `known`.
    pub fn deny_unknown(&self, known: &[&str]) -> Result<()> {
        let errors = self
            .items
            .iter()
            .map(AttrItem::key)
            .filter(|key| !known.iter().any(|k| *key == k))
            .map(|key| {
                diag::error_spanned(
                    key,
                    format!("unknown attribute `{key}`, expected one of: {}", known.join(", ")),
                )
            })
            .collect();
        diag::combine(errors)
    }
}

/// Parse attribute like `#[record(...)]` (the whole Attribute, not only args).
pub fn parse_attr(attr: &Attribute, expected: &str) -> Result<Option<AttrArgs>> {
    if !attr.path().is_ident(expected) {
        return Ok(None);
    }

    match &attr.meta {
        Meta::Path(_) => Ok(Some(AttrArgs { items: vec![] })),
        Meta::List(list) => {
            let args = syn::parse2::<AttrArgsParser>(list.tokens.clone())?;
            Ok(Some(args.0))
        }
        Meta::NameValue(nv) => Err(diag::error_spanned(
            nv,
            format!("#[{expected}] must be #[{expected}(...)] (not name-value)"),
        )),
    }
}

/// Parse all attributes of a given type and merge them.
pub fn parse_attrs(attrs: &[Attribute], name: &str) -> Result<AttrArgs> {
    let mut result = AttrArgs { items: vec![] };

    for attr in attrs {
        if let Some(args) = parse_attr(attr, name)? {
            result.items.extend(args.items);
        }
    }

    Ok(result)
}

struct AttrArgsParser(AttrArgs);

impl Parse for AttrArgsParser {
    fn parse(input: ParseStream) -> Result<Self> {
        let items = Punctuated::<AttrItemParser, Token![,]>::parse_terminated(input)?
            .into_iter()
            .map(|x| x.0)
            .collect();
        Ok(Self(AttrArgs { items }))
    }
}

struct AttrItemParser(AttrItem);

impl Parse for AttrItemParser {
    fn parse(input: ParseStream) -> Result<Self> {
        let key: Ident = input.parse()?;

        if input.peek(Token![=]) {
            input.parse::<Token![=]>()?;
            let value: Lit = input.parse()?;
            return Ok(Self(AttrItem::KeyValue { key, value }));
        }

        Ok(Self(AttrItem::Flag(key)))
    }
}
