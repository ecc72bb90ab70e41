//! Declarative record layouts, and the traits binding them to records.
//!
//! A [`RecordLayout`] is an ordered table of [`FieldSpec`]s. Records expose
//! their values to the [`crate::engine`] by field index through
//! [`FromFields`] and [`ToFields`], so no field is ever looked up by name
//! while transcoding. These traits are usually derived; see
//! [`Fields`](macro@crate::Fields).

use core::ops::Range;

use crate::{
    engine::{self, DecodeError, ValidationError},
    field::{FieldType, Value},
};

/// A business rule applied to a field's value during validation.
pub type Validator = fn(&Value) -> bool;

/// The position, type, and rules of a single field.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    /// Zero-based byte offset of the field within its record.
    pub start: usize,
    pub len: usize,
    pub kind: FieldType,
    pub required: bool,
    pub validators: &'static [Validator],
}

impl FieldSpec {
    /// The byte range of this field within its record.
    pub fn range(&self) -> Range<usize> {
        self.start..self.start + self.len
    }
}

/// The ordered fields of a record, with its length and type tag.
///
/// Layouts are static configuration. Fields are listed in offset order and
/// never overlap, though gaps between them are permitted and stay blank.
#[derive(Debug)]
pub struct RecordLayout {
    pub tag: u8,
    pub length: usize,
    pub fields: &'static [FieldSpec],
}

impl RecordLayout {
    /// The index of a named field.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }
}

/// A Rust type that can hold a field value.
pub trait FieldValue: Sized {
    fn to_value(&self) -> Value;
    /// Convert from a value, if it is of the right kind.
    fn from_value(value: Value) -> Option<Self>;
}

impl FieldValue for String {
    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Text(s) => Some(s),
            Value::Number(_) => None,
        }
    }
}

impl FieldValue for i64 {
    fn to_value(&self) -> Value {
        Value::Number(*self)
    }

    fn from_value(value: Value) -> Option<Self> {
        value.as_number()
    }
}

/// Receive decoded field values by layout index.
pub trait FromFields {
    /// Assign a value to the field at `index`.
    ///
    /// Returns `false` if no field at that index can hold the value.
    fn set_field(&mut self, index: usize, value: Value) -> bool;
}

/// Publish field values by layout index.
pub trait ToFields {
    /// The value of the field at `index`, or `None` if nothing is bound there.
    fn field(&self, index: usize) -> Option<Value>;
}

/// A record bound to a static layout.
///
/// See the [`Fields`](macro@crate::Fields) derive macro for an automatic
/// implementation of this trait.
pub trait FixedWidth: FromFields + ToFields {
    const LAYOUT: &'static RecordLayout;

    /// Populate this record from a complete record's bytes.
    fn parse(&mut self, raw: &[u8]) -> Result<(), DecodeError> {
        engine::decode(raw, Self::LAYOUT, self)
    }

    /// Encode this record to its fixed-width bytes.
    fn ascii(&self) -> Vec<u8> {
        engine::encode(Self::LAYOUT, self)
    }

    fn validate(&self) -> Result<(), ValidationError> {
        engine::validate(Self::LAYOUT, self)
    }
}

/// Field values for an arbitrary layout, held without a typed record.
#[derive(Debug, Clone)]
pub struct FieldMap {
    layout: &'static RecordLayout,
    values: Vec<Option<Value>>,
}

impl FieldMap {
    /// An empty map, with every field blank.
    pub fn new(layout: &'static RecordLayout) -> Self {
        Self {
            layout,
            values: vec![None; layout.fields.len()],
        }
    }

    pub fn layout(&self) -> &'static RecordLayout {
        self.layout
    }

    /// The value of a named field. Blank fields yield their blank value.
    pub fn get(&self, name: &str) -> Option<Value> {
        self.field(self.layout.position(name)?)
    }

    /// Assign a value to a named field.
    ///
    /// Returns `false` if the layout has no such field, or it is filler.
    pub fn insert(&mut self, name: &str, value: Value) -> bool {
        match self.layout.position(name) {
            Some(index) => self.set_field(index, value),
            None => false,
        }
    }
}

impl FromFields for FieldMap {
    fn set_field(&mut self, index: usize, value: Value) -> bool {
        match (self.layout.fields.get(index), self.values.get_mut(index)) {
            (Some(spec), Some(slot)) if spec.kind != FieldType::Filler => {
                *slot = Some(value);
                true
            }
            _ => false,
        }
    }
}

impl ToFields for FieldMap {
    fn field(&self, index: usize) -> Option<Value> {
        match self.values.get(index)? {
            Some(value) => Some(value.clone()),
            None => self.layout.fields.get(index)?.kind.blank_value(),
        }
    }
}
