use std::collections::HashMap;

use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, parse_macro_input};

use crate::support::{attrs, diag};

const FIELD_ATTRS: &[&str] = &["rename", "skip"];

pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand(input) {
        Ok(ts) => ts.into(),
        Err(e) => diag::to_compile_error(e),
    }
}

/// A field that takes part in the accessor table.
struct Entry {
    ident: syn::Ident,
    ty: syn::Type,
    name: String,
}

fn entries(input: &DeriveInput) -> syn::Result<Vec<Entry>> {
    let fields = match &input.data {
        Data::Struct(s) => match &s.fields {
            Fields::Named(named) => &named.named,
            Fields::Unnamed(_) | Fields::Unit => {
                return Err(diag::error_spanned(
                    &input.ident,
                    "Record derive requires a struct with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new(
                input.ident.span(),
                "Record derive can only be used on structs",
            ));
        }
    };

    let mut entries = Vec::new();
    let mut errors = Vec::new();
    let mut seen: HashMap<String, &syn::Ident> = HashMap::new();

    for field in fields {
        let Some(ident) = &field.ident else { continue };

        let args = attrs::parse_attrs(&field.attrs, "record")?;
        args.deny_unknown(FIELD_ATTRS)?;
        if args.has_flag("skip") {
            continue;
        }

        let name = match args.get_string("rename")? {
            Some(lit) if lit.value().is_empty() => {
                errors.push(diag::error_spanned(&lit, "`rename` must not be empty"));
                continue;
            }
            Some(lit) => lit.value(),
            None => ident.to_string(),
        };

        if let Some(first) = seen.get(&name) {
            errors.push(diag::error_spanned(
                ident,
                format!("field name `{name}` is already used by `{first}`"),
            ));
            continue;
        }
        seen.insert(name.clone(), ident);

        entries.push(Entry {
            ident: ident.clone(),
            ty: field.ty.clone(),
            name,
        });
    }

    diag::combine(errors)?;
    Ok(entries)
}

fn expand(input: DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let entries = entries(&input)?;
    let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
    let idents: Vec<&syn::Ident> = entries.iter().map(|e| &e.ident).collect();
    let tys: Vec<&syn::Type> = entries.iter().map(|e| &e.ty).collect();

    Ok(quote! {
        impl #impl_generics ::fieldguard::foundation::Record for #struct_name #ty_generics #where_clause {
            const FIELDS: &'static [&'static str] = &[#(#names),*];

            fn read_field(
                &self,
                name: &str,
            ) -> ::core::option::Option<::fieldguard::foundation::FieldValue> {
                match name {
                    #(
                        #names => ::core::option::Option::Some(
                            ::fieldguard::foundation::FieldType::to_field_value(&self.#idents),
                        ),
                    )*
                    _ => ::core::option::Option::None,
                }
            }

            #[allow(unused_variables)]
            fn check_field(
                &self,
                name: &str,
                value: &::fieldguard::foundation::FieldValue,
            ) -> ::core::result::Result<(), ::fieldguard::foundation::RecordError> {
                match name {
                    #(
                        #names => <#tys as ::fieldguard::foundation::FieldType>::from_field_value(
                            ::core::clone::Clone::clone(value),
                        )
                        .map(|_| ())
                        .map_err(|source| {
                            ::fieldguard::foundation::RecordError::type_mismatch(name, source)
                        }),
                    )*
                    _ => ::core::result::Result::Err(
                        ::fieldguard::foundation::RecordError::unreadable(name),
                    ),
                }
            }

            #[allow(unused_variables)]
            fn write_field(
                &mut self,
                name: &str,
                value: ::fieldguard::foundation::FieldValue,
            ) -> ::core::result::Result<(), ::fieldguard::foundation::RecordError> {
                match name {
                    #(
                        #names => {
                            self.#idents = ::fieldguard::foundation::FieldType::from_field_value(value)
                                .map_err(|source| {
                                    ::fieldguard::foundation::RecordError::type_mismatch(name, source)
                                })?;
                            ::core::result::Result::Ok(())
                        }
                    )*
                    _ => ::core::result::Result::Err(
                        ::fieldguard::foundation::RecordError::unreadable(name),
                    ),
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(input: DeriveInput) -> syn::Result<Vec<String>> {
        Ok(entries(&input)?.into_iter().map(|e| e.name).collect())
    }

    #[test]
    fn test_rename_and_skip() {
        let input: DeriveInput = syn::parse_quote! {
            struct Signup {
                name: String,
                #[record(rename = "passwordValidation")]
                password_confirmation: String,
                #[record(skip)]
                internal: u8,
            }
        };
        assert_eq!(names(input).unwrap(), vec!["name", "passwordValidation"]);
    }

    #[test]
    fn test_rejects_tuple_struct() {
        let input: DeriveInput = syn::parse_quote! { struct Pair(u8, u8); };
        let err = names(input).unwrap_err();
        assert!(err.to_string().contains("named fields"));
    }

    #[test]
    fn test_rejects_enum() {
        let input: DeriveInput = syn::parse_quote! { enum Kind { A, B } };
        assert!(names(input).unwrap_err().to_string().contains("only be used on structs"));
    }

    #[test]
    fn test_rejects_duplicate_names() {
        let input: DeriveInput = syn::parse_quote! {
            struct Clash {
                email: String,
                #[record(rename = "email")]
                email_address: String,
            }
        };
        let err = names(input).unwrap_err();
        assert!(err.to_string().contains("already used by `email`"));
    }

    #[test]
    fn test_rejects_unknown_attribute() {
        let input: DeriveInput = syn::parse_quote! {
            struct Odd {
                #[record(flatten)]
                inner: String,
            }
        };
        assert!(names(input).is_err());
    }

    #[test]
    fn test_expand_lists_fields() {
        let input: DeriveInput = syn::parse_quote! {
            struct Login { user: String, pin: u32 }
        };
        let out = expand(input).unwrap().to_string();
        assert!(out.contains("const FIELDS"));
        assert!(out.contains("\"user\""));
        assert!(out.contains("\"pin\""));
    }

    #[test]
    fn test_expand_checks_with_field_types() {
        let input: DeriveInput = syn::parse_quote! {
            struct Order { quantity: u32, discount: Option<f64> }
        };
        let out = expand(input).unwrap().to_string();
        assert!(out.contains("fn check_field"));
        assert_eq!(out.matches("from_field_value").count(), 4);
        assert!(out.contains("f64"));
    }
}
