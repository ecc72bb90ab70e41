use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod fields;

#[proc_macro_derive(Fields, attributes(record, field, blank))]
pub fn derive_fields(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match fields::expand_fields(&input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error().into(),
    }
}
