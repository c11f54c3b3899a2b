use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;

/// Generate a three component color model from a plain struct definition.
///
/// The fields are made public and the struct receives the value-object
/// derives, a `new` constructor and conversions to and from a tuple of its
/// components.
#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as syn::ItemStruct);

    match expand(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(mut input: syn::ItemStruct) -> syn::Result<TokenStream2> {
    if input.fields.len() != 3 {
        return Ok(quote! {
            compile_error!("Models must have exactly 3 fields, one for each component of the color.");
        });
    }

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "models are plain values and can not be generic",
        ));
    }

    let syn::Fields::Named(_) = input.fields else {
        return Err(syn::Error::new_spanned(
            &input.fields,
            "model components must be named",
        ));
    };

    // Make sure the 3 specified fields are public.
    input.fields.iter_mut().for_each(|f| {
        f.vis = syn::Visibility::Public(Default::default());
    });

    let names = input
        .fields
        .iter()
        .map(|f| f.ident.clone())
        .collect::<Vec<_>>();
    let types = input
        .fields
        .iter()
        .map(|f| f.ty.clone())
        .collect::<Vec<_>>();
    debug_assert!(names.len() == 3);

    let (n1, n2, n3) = (&names[0], &names[1], &names[2]);
    let (t1, t2, t3) = (&types[0], &types[1], &types[2]);

    input.attrs.push(syn::parse_quote! {
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    });
    input.attrs.push(syn::parse_quote! {
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    });

    let struct_name = &input.ident;

    Ok(quote! {
        #input

        impl #struct_name {
            /// Create a new color from its three components.
            pub const fn new(#n1: #t1, #n2: #t2, #n3: #t3) -> Self {
                Self { #n1, #n2, #n3 }
            }

            /// Return the three components as a tuple.
            pub const fn to_tuple(&self) -> (#t1, #t2, #t3) {
                (self.#n1, self.#n2, self.#n3)
            }
        }

        impl From<(#t1, #t2, #t3)> for #struct_name {
            fn from(value: (#t1, #t2, #t3)) -> Self {
                Self::new(value.0, value.1, value.2)
            }
        }

        impl From<#struct_name> for (#t1, #t2, #t3) {
            fn from(value: #struct_name) -> Self {
                value.to_tuple()
            }
        }
    })
}
