//! Implementation of the `#[derive(BaseObject)]` macro.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Field, Fields, Index, parse_macro_input, parse_quote};

/// Main implementation of the `BaseObject` derive macro.
pub fn derive_base_object_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let expanded = match &input.data {
        Data::Struct(data_struct) => generate_equals(&input, &data_struct.fields)
            .unwrap_or_else(syn::Error::into_compile_error),
        Data::Enum(_) => syn::Error::new_spanned(
            &input.ident,
            "BaseObject can only be derived for structs, not enums.",
        )
        .to_compile_error(),
        Data::Union(_) => {
            syn::Error::new_spanned(&input.ident, "BaseObject cannot be derived for unions.")
                .to_compile_error()
        }
    };

    TokenStream::from(expanded)
}

/// Generates the `BaseObject` impl comparing every non-skipped field.
fn generate_equals(input: &DeriveInput, fields: &Fields) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let mut generics = input.generics.clone();

    let mut comparisons = Vec::new();
    for (position, field) in fields.iter().enumerate() {
        if is_skipped(&field.attrs)? {
            continue;
        }
        let accessor = field_accessor(position, field);
        let field_type = &field.ty;
        generics
            .make_where_clause()
            .predicates
            .push(parse_quote!(#field_type: ::core::cmp::PartialEq));
        comparisons.push(quote! { && self.#accessor == other.#accessor });
    }

    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::fnkit::util::BaseObject for #name #type_generics #where_clause {
            #[allow(clippy::nonminimal_bool)]
            fn equals(&self, other: &Self) -> bool {
                true #(#comparisons)*
            }
        }
    })
}

/// Returns the tokens naming a field: its ident, or its index for tuple structs.
fn field_accessor(position: usize, field: &Field) -> TokenStream2 {
    field.ident.as_ref().map_or_else(
        || {
            let index = Index::from(position);
            quote! { #index }
        },
        |ident| quote! { #ident },
    )
}

/// Checks for `#[base_object(skip)]`.
fn is_skipped(attributes: &[Attribute]) -> syn::Result<bool> {
    let mut skipped = false;
    for attribute in attributes {
        if !attribute.path().is_ident("base_object") {
            continue;
        }
        attribute.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                skipped = true;
                Ok(())
            } else {
                Err(meta.error("unsupported base_object attribute, expected `skip`"))
            }
        })?;
    }
    Ok(skipped)
}
