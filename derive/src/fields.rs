use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{
    Data, DeriveInput, Error, Field, Fields, Ident, LitChar, LitInt, Path, Result, Token, Type,
    parse::{Parse, ParseStream},
    spanned::Spanned,
};

/// Field kinds that may be bound to a struct field.
const KINDS: &[&str] = &[
    "Text",
    "TextRightAligned",
    "Numeric",
    "ZeroPaddedNumeric",
    "Year",
    "Email",
    "Phone",
];

pub(crate) fn expand_fields(input: &DeriveInput) -> Result<TokenStream> {
    let Data::Struct(data) = &input.data else {
        Err(Error::new(
            input.span(),
            "`Fields` may only be derived on structs.",
        ))?
    };

    let Fields::Named(fields) = &data.fields else {
        Err(Error::new(
            input.span(),
            "`Fields` may only be derived on structs with named fields.",
        ))?
    };

    let Some(record) = input.attrs.iter().find(|a| a.path().is_ident("record")) else {
        Err(Error::new(
            input.span(),
            "`Fields` requires a `#[record('X')]` attribute naming the record's tag.",
        ))?
    };

    let tag = record.parse_args::<LitChar>()?;

    let mut specs = fields
        .named
        .iter()
        .map(FieldMetadata::parse)
        .map(Result::transpose)
        .flatten() // Skip fields without an attribute.
        .collect::<Result<Vec<_>>>()?;

    for attr in input.attrs.iter().filter(|a| a.path().is_ident("blank")) {
        specs.push(FieldMetadata {
            binding: None,
            extent: attr.parse_args()?,
            kind: format_ident!("Filler"),
            required: false,
            validators: Vec::new(),
        });
    }

    specs.sort_by_key(|s| s.extent.start.value);

    if let Some(first) = specs.first() {
        if first.extent.start.value == 0 {
            Err(Error::new(
                first.extent.start.lit.span(),
                "Offset 0 holds the record's tag and cannot be bound to a field.",
            ))?
        }
    }

    for pair in specs.windows(2) {
        if pair[0].extent.end() > pair[1].extent.start.value {
            Err(Error::new(
                pair[1].extent.start.lit.span(),
                "Field overlaps the preceding field.",
            ))?
        }
    }

    let layout = specs.iter().map(|spec| {
        let FieldMetadata {
            binding,
            extent,
            kind,
            required,
            validators,
        } = spec;

        let name = match binding {
            Some((name, _)) => name.to_string(),
            None => "blank".to_string(),
        };
        let start = &extent.start.lit;
        let len = &extent.len.lit;

        quote! {
            irs_fire::layout::FieldSpec {
                name: #name,
                start: #start,
                len: #len,
                kind: irs_fire::field::FieldType::#kind,
                required: #required,
                validators: &[#(#validators as irs_fire::layout::Validator),*],
            }
        }
    });

    let bounds = specs.iter().map(|spec| {
        let start = &spec.extent.start.lit;
        let len = &spec.extent.len.lit;
        let message = format!(
            "Field at offset {} extends past the end of the record.",
            spec.extent.start.value
        );

        quote! {
            assert!(#start + #len <= irs_fire::config::RECORD_LENGTH, #message);
        }
    });

    let bound = specs
        .iter()
        .enumerate()
        .filter_map(|(index, spec)| spec.binding.as_ref().map(|b| (index, b)));

    let getters = bound.clone().map(|(index, (name, _))| {
        quote! {
            #index => Some(irs_fire::layout::FieldValue::to_value(&self.#name)),
        }
    });

    let setters = bound.map(|(index, (name, ty))| {
        quote! {
            #index => match <#ty as irs_fire::layout::FieldValue>::from_value(value) {
                Some(value) => {
                    self.#name = value;
                    true
                }
                None => false,
            },
        }
    });

    let name = &input.ident;

    let expanded = quote! {
        impl irs_fire::layout::FromFields for #name {
            fn set_field(&mut self, index: usize, value: irs_fire::field::Value) -> bool {
                match index {
                    #(#setters)*
                    _ => false,
                }
            }
        }

        impl irs_fire::layout::ToFields for #name {
            fn field(&self, index: usize) -> Option<irs_fire::field::Value> {
                match index {
                    #(#getters)*
                    _ => None,
                }
            }
        }

        impl irs_fire::layout::FixedWidth for #name {
            const LAYOUT: &'static irs_fire::layout::RecordLayout =
                &irs_fire::layout::RecordLayout {
                    tag: #tag as u8,
                    length: irs_fire::config::RECORD_LENGTH,
                    fields: &[#(#layout),*],
                };
        }

        const _: () = {
            #(#bounds)*
        };
    };

    Ok(expanded.into())
}

#[derive(Debug)]
struct FieldMetadata {
    /// The bound struct field and its type, absent for blank runs.
    binding: Option<(Ident, Type)>,
    extent: Extent,
    kind: Ident,
    required: bool,
    validators: Vec<Path>,
}

impl FieldMetadata {
    fn parse(field: &Field) -> Result<Option<Self>> {
        let Some(name) = field.ident.clone() else {
            Err(Error::new(field.span(), "`Fields` requires named fields."))?
        };

        let Some(attr) = field.attrs.iter().find(|a| a.path().is_ident("field")) else {
            return Ok(None);
        };

        let FieldAttribute {
            extent,
            kind,
            required,
            validators,
        } = attr.meta.require_list()?.parse_args()?;

        Ok(Some(Self {
            binding: Some((name, field.ty.clone())),
            extent,
            kind,
            required,
            validators,
        }))
    }
}

#[derive(Debug)]
struct Offset {
    lit: LitInt,
    value: usize,
}

impl Parse for Offset {
    fn parse(input: ParseStream) -> Result<Self> {
        let lit = input.parse::<LitInt>()?;
        let value = lit.base10_parse()?;
        Ok(Self { lit, value })
    }
}

/// A run of bytes within a record.
#[derive(Debug)]
struct Extent {
    start: Offset,
    len: Offset,
}

impl Extent {
    fn end(&self) -> usize {
        self.start.value + self.len.value
    }
}

impl Parse for Extent {
    fn parse(input: ParseStream) -> Result<Self> {
        let start = input.parse()?;
        input.parse::<Token![,]>()?;
        let len: Offset = input.parse()?;

        if len.value == 0 {
            Err(Error::new(len.lit.span(), "Field length must be non-zero."))?
        }

        Ok(Self { start, len })
    }
}

#[derive(Debug)]
struct FieldAttribute {
    extent: Extent,
    kind: Ident,
    required: bool,
    validators: Vec<Path>,
}

impl Parse for FieldAttribute {
    fn parse(input: ParseStream) -> Result<Self> {
        let extent = input.parse()?;
        input.parse::<Token![,]>()?;

        let kind = input.parse::<Ident>()?;
        if !KINDS.iter().any(|k| kind == k) {
            Err(Error::new_spanned(
                &kind,
                format!("Field kind must be one of {}.", KINDS.join(", ")),
            ))?
        }

        let mut required = false;
        let mut validators = Vec::new();

        while !input.is_empty() {
            input.parse::<Token![,]>()?;
            if input.is_empty() {
                break;
            }

            let option = input.parse::<Ident>()?;
            if option == "required" {
                required = true;
            } else if option == "validate" {
                input.parse::<Token![=]>()?;
                validators.push(input.parse::<Path>()?);
            } else {
                Err(Error::new_spanned(
                    option,
                    "Expected `required` or `validate = <path>`.",
                ))?
            }
        }

        Ok(Self {
            extent,
            kind,
            required,
            validators,
        })
    }
}
