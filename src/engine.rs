//! Layout-driven decoding, encoding, and validation.
//!
//! The engine knows nothing of any record's business meaning. It walks the
//! fields of a [`RecordLayout`] in declared order, and stops at the first
//! field in error.

use thiserror::Error;

use crate::{
    config::BLANK,
    field::{FieldError, FieldType},
    layout::{FieldMap, FromFields, RecordLayout, ToFields},
};

/// Errors occurring while decoding records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// A record is not exactly the length of its layout.
    #[error("Record is {found} bytes long, expected {expected}.")]
    RecordLength { expected: usize, found: usize },
    /// A field extends past the end of the supplied bytes.
    #[error("Field `{field}` at offset {offset} extends past the end of the record.")]
    ShortRecord { field: &'static str, offset: usize },
    /// No record kind is known for a tag, or a payee record was found
    /// without a type of return selecting its layout.
    #[error("Unknown record type `{0}`.")]
    UnknownRecordType(char),
    /// A record of another kind was expected at this position.
    #[error("Expected {} record, found `{found}`.", describe_tags(.expected))]
    UnexpectedRecordType {
        expected: &'static [u8],
        found: char,
    },
    /// A field's decoded value cannot be assigned to its record.
    #[error("Field `{0}` cannot hold its decoded value.")]
    InvalidField(&'static str),
    /// A field's bytes do not satisfy its type.
    #[error("Field `{field}` at offset {offset}: {kind}")]
    Field {
        field: &'static str,
        offset: usize,
        #[source]
        kind: FieldError,
    },
}

/// Errors occurring while validating records and documents.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field `{0}` is required.")]
    FieldRequired(&'static str),
    /// A field's value does not satisfy its type.
    #[error("Field `{field}`: {kind}")]
    Field {
        field: &'static str,
        #[source]
        kind: FieldError,
    },
    /// A field's value is too wide, or breaks a business rule.
    #[error("Field `{0}` has an invalid value.")]
    InvalidValue(&'static str),
    /// A layout field is not bound to any record value.
    #[error("Field `{0}` is not bound to a record value.")]
    InvalidField(&'static str),
    /// A control count disagrees with the records it counts.
    #[error("Field `{field}` declares {declared}, but {found} were found.")]
    RecordCount {
        field: &'static str,
        declared: i64,
        found: usize,
    },
    #[error("Record sequence number {found} found where {expected} was expected.")]
    SequenceNumber { expected: i64, found: i64 },
}

fn describe_tags(tags: &[u8]) -> String {
    let tags: Vec<_> = tags.iter().map(|t| format!("a `{}`", *t as char)).collect();
    tags.join(" or ")
}

/// Decode a complete record, publishing its fields to a receiver.
///
/// The record must be exactly the layout's length and open with its tag.
pub fn decode<O: FromFields + ?Sized>(
    raw: &[u8],
    layout: &'static RecordLayout,
    o: &mut O,
) -> Result<(), DecodeError> {
    if raw.len() != layout.length {
        Err(DecodeError::RecordLength {
            expected: layout.length,
            found: raw.len(),
        })?;
    }

    match raw.first() {
        Some(tag) if *tag == layout.tag => {}
        found => Err(DecodeError::UnexpectedRecordType {
            expected: core::slice::from_ref(&layout.tag),
            found: found.map_or(' ', |t| *t as char),
        })?,
    }

    decode_fields(raw, layout, o)
}

/// Decode the fields of a layout from bytes of any length, publishing to a
/// receiver.
///
/// Neither the length nor the tag of the bytes is checked; a field running
/// past their end is a [`DecodeError::ShortRecord`].
pub fn decode_fields<O: FromFields + ?Sized>(
    raw: &[u8],
    layout: &RecordLayout,
    o: &mut O,
) -> Result<(), DecodeError> {
    for (index, spec) in layout.fields.iter().enumerate() {
        if spec.kind == FieldType::Filler {
            continue;
        }

        let data = raw.get(spec.range()).ok_or(DecodeError::ShortRecord {
            field: spec.name,
            offset: spec.start,
        })?;

        let field_error = |kind| DecodeError::Field {
            field: spec.name,
            offset: spec.start,
            kind,
        };

        spec.kind.check(data, spec.required).map_err(field_error)?;

        if let Some(value) = spec.kind.decode(data).map_err(field_error)? {
            if !o.set_field(index, value) {
                Err(DecodeError::InvalidField(spec.name))?;
            }
        }
    }

    Ok(())
}

/// Decode a complete record into a [`FieldMap`].
pub fn decode_map(raw: &[u8], layout: &'static RecordLayout) -> Result<FieldMap, DecodeError> {
    let mut map = FieldMap::new(layout);
    decode(raw, layout, &mut map)?;
    Ok(map)
}

/// Encode a record to bytes.
///
/// The output is always exactly the layout's length: values are padded or
/// truncated to their field widths, and unused positions are blank.
pub fn encode<I: ToFields + ?Sized>(layout: &RecordLayout, i: &I) -> Vec<u8> {
    let mut buf = vec![BLANK; layout.length];

    if let Some(tag) = buf.first_mut() {
        *tag = layout.tag;
    }

    encode_fields(layout, i, &mut buf);
    buf
}

/// Encode the fields of a layout into an existing record buffer, leaving
/// positions outside the layout's fields untouched.
pub fn encode_fields<I: ToFields + ?Sized>(layout: &RecordLayout, i: &I, buf: &mut [u8]) {
    for (index, spec) in layout.fields.iter().enumerate() {
        if let Some(out) = buf.get_mut(spec.range()) {
            spec.kind.encode(i.field(index).as_ref(), out);
        }
    }
}

/// Validate a record's values against its layout.
///
/// Each field is checked in declared order for presence if required, then
/// for fit within its width and type, then against its business rules. The
/// first failure is returned.
///
/// A value passes only if it decodes back unchanged from its encoding, so
/// text with blanks trimmed by decoding is an [`ValidationError::InvalidValue`],
/// and a required field encoding to blanks is missing.
pub fn validate<I: ToFields + ?Sized>(layout: &RecordLayout, i: &I) -> Result<(), ValidationError> {
    for (index, spec) in layout.fields.iter().enumerate() {
        if spec.kind == FieldType::Filler {
            continue;
        }

        let value = i
            .field(index)
            .ok_or(ValidationError::InvalidField(spec.name))?;

        if value.is_zero() {
            if spec.required {
                Err(ValidationError::FieldRequired(spec.name))?;
            }
        } else {
            if value.to_string().len() > spec.len {
                Err(ValidationError::InvalidValue(spec.name))?;
            }

            let mut buf = vec![BLANK; spec.len];
            spec.kind.encode(Some(&value), &mut buf);
            spec.kind
                .check(&buf, spec.required)
                .map_err(|kind| match kind {
                    FieldError::Required => ValidationError::FieldRequired(spec.name),
                    kind => ValidationError::Field {
                        field: spec.name,
                        kind,
                    },
                })?;

            // Padding that decoding would trim away.
            if spec.kind.decode(&buf).ok().flatten().as_ref() != Some(&value) {
                Err(ValidationError::InvalidValue(spec.name))?;
            }
        }

        if !spec.validators.iter().all(|rule| rule(&value)) {
            Err(ValidationError::InvalidValue(spec.name))?;
        }
    }

    Ok(())
}
