//! Form-specific portions of payee records.
//!
//! Each form occupies the bytes of a payee record from
//! [`PAYEE_FORM_OFFSET`](crate::config::PAYEE_FORM_OFFSET) onward. Which one
//! applies cannot be read from the record itself; it is selected by the
//! type of return of the enclosing payer.

use serde::{Deserialize, Serialize};

use crate::{
    config::TypeOfReturn,
    engine::{self, DecodeError, ValidationError},
    layout::FixedWidth,
};

mod btc;
mod int;
mod misc;
mod oid;
mod patr;

pub use btc::Sub1097Btc;
pub use int::Sub1099Int;
pub use misc::Sub1099Misc;
pub use oid::Sub1099Oid;
pub use patr::Sub1099Patr;

/// The form fields of a payee record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PayeeForm {
    Misc(Sub1099Misc),
    Int(Sub1099Int),
    Oid(Sub1099Oid),
    Patr(Sub1099Patr),
    Btc(Sub1097Btc),
}

impl PayeeForm {
    /// Empty form fields for a type of return.
    pub fn new(kind: TypeOfReturn) -> Self {
        match kind {
            TypeOfReturn::Form1099Misc => Self::Misc(Default::default()),
            TypeOfReturn::Form1099Int => Self::Int(Default::default()),
            TypeOfReturn::Form1099Oid => Self::Oid(Default::default()),
            TypeOfReturn::Form1099Patr => Self::Patr(Default::default()),
            TypeOfReturn::Form1097Btc => Self::Btc(Default::default()),
        }
    }

    pub fn return_type(&self) -> TypeOfReturn {
        match self {
            Self::Misc(_) => TypeOfReturn::Form1099Misc,
            Self::Int(_) => TypeOfReturn::Form1099Int,
            Self::Oid(_) => TypeOfReturn::Form1099Oid,
            Self::Patr(_) => TypeOfReturn::Form1099Patr,
            Self::Btc(_) => TypeOfReturn::Form1097Btc,
        }
    }

    /// Read the form fields from a complete payee record.
    ///
    /// The record's length and tag are not checked here.
    pub fn parse(&mut self, raw: &[u8]) -> Result<(), DecodeError> {
        fn parse<F: FixedWidth>(form: &mut F, raw: &[u8]) -> Result<(), DecodeError> {
            engine::decode_fields(raw, F::LAYOUT, form)
        }

        match self {
            Self::Misc(f) => parse(f, raw),
            Self::Int(f) => parse(f, raw),
            Self::Oid(f) => parse(f, raw),
            Self::Patr(f) => parse(f, raw),
            Self::Btc(f) => parse(f, raw),
        }
    }

    /// Write the form fields into a payee record buffer.
    pub fn encode_into(&self, buf: &mut [u8]) {
        fn encode<F: FixedWidth>(form: &F, buf: &mut [u8]) {
            engine::encode_fields(F::LAYOUT, form, buf)
        }

        match self {
            Self::Misc(f) => encode(f, buf),
            Self::Int(f) => encode(f, buf),
            Self::Oid(f) => encode(f, buf),
            Self::Patr(f) => encode(f, buf),
            Self::Btc(f) => encode(f, buf),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Self::Misc(f) => f.validate(),
            Self::Int(f) => f.validate(),
            Self::Oid(f) => f.validate(),
            Self::Patr(f) => f.validate(),
            Self::Btc(f) => f.validate(),
        }
    }

    /// Read the form fields of a type of return from a JSON object. Keys
    /// belonging to other forms or to the common payee fields are ignored.
    pub fn from_json(
        value: serde_json::Value,
        kind: TypeOfReturn,
    ) -> Result<Self, serde_json::Error> {
        Ok(match kind {
            TypeOfReturn::Form1099Misc => Self::Misc(Sub1099Misc::deserialize(value)?),
            TypeOfReturn::Form1099Int => Self::Int(Sub1099Int::deserialize(value)?),
            TypeOfReturn::Form1099Oid => Self::Oid(Sub1099Oid::deserialize(value)?),
            TypeOfReturn::Form1099Patr => Self::Patr(Sub1099Patr::deserialize(value)?),
            TypeOfReturn::Form1097Btc => Self::Btc(Sub1097Btc::deserialize(value)?),
        })
    }
}
