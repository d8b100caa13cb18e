extern crate proc_macro;

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, Attribute, Data, DataEnum, DeriveInput, Fields, LitStr};

/// Derives `Kind` for a struct or an enum.
///
/// A struct reports its own type name. An enum reports `Type::Variant` for whichever
/// variant the value currently is. Either may be overridden with `#[kind("Name")]` on
/// the type, in which case `Name` takes the place of the type name (enums then report
/// `Name::Variant`). Generic types are supported.
#[proc_macro_derive(Kind, attributes(kind))]
pub fn kind(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(input: DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let label = match pinned_name(&input.attrs)? {
        Some(pinned) => pinned,
        None => name.to_string(),
    };
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let body = match &input.data {
        Data::Struct(_) => quote!(#label.to_string()),
        Data::Enum(DataEnum { variants, .. }) => {
            let arms = variants.iter().map(|variant| {
                let v = &variant.ident;
                let text = format!("{}::{}", label, v);
                match variant.fields {
                    Fields::Unnamed(_) => quote!(#name::#v(..) => #text.to_string()),
                    Fields::Named(_) => quote!(#name::#v { .. } => #text.to_string()),
                    Fields::Unit => quote!(#name::#v => #text.to_string()),
                }
            });
            quote!(
                match self {
                    #(#arms),*
                }
            )
        }
        // Unions carry no tag to report, so there is nothing sensible to derive.
        Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                name,
                "Kind cannot be derived for unions, implement it by hand instead",
            ))
        }
    };
    Ok(quote!(
        impl #impl_generics Kind for #name #ty_generics #where_clause {
            fn kind(&self) -> String {
                #body
            }
        }
    ))
}

fn pinned_name(attrs: &[Attribute]) -> syn::Result<Option<String>> {
    match attrs.iter().find(|attr| attr.path.is_ident("kind")) {
        Some(attr) => {
            let name: LitStr = attr.parse_args()?;
            Ok(Some(name.value()))
        }
        None => Ok(None),
    }
}
