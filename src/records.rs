//! Record variants, and dispatch from type tags to them.
//!
//! Every record of a FIRE file is one of the kinds named by [`RecordKind`].
//! [`Record`] holds a record of any kind, and is the only place records are
//! constructed by tag.

use serde::Deserialize;

use crate::{
    config::{RECORD_LENGTH, TypeOfReturn},
    document,
    engine::{DecodeError, ValidationError},
    layout::FixedWidth,
};

pub mod forms;
pub mod rules;

mod end_payer;
mod end_transmitter;
mod payee;
mod payer;
mod state;
mod transmitter;

pub use end_payer::CRecord;
pub use end_transmitter::FRecord;
pub use forms::{PayeeForm, Sub1097Btc, Sub1099Int, Sub1099Misc, Sub1099Oid, Sub1099Patr};
pub use payee::{BRecord, Payee};
pub use payer::ARecord;
pub use state::KRecord;
pub use transmitter::TRecord;

/// The kinds of record, by type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Transmitter,
    Payer,
    Payee,
    EndPayer,
    State,
    EndTransmitter,
}

impl RecordKind {
    pub const ALL: [Self; 6] = [
        Self::Transmitter,
        Self::Payer,
        Self::Payee,
        Self::EndPayer,
        Self::State,
        Self::EndTransmitter,
    ];

    /// The type tag opening records of this kind.
    pub fn tag(self) -> u8 {
        match self {
            Self::Transmitter => b'T',
            Self::Payer => b'A',
            Self::Payee => b'B',
            Self::EndPayer => b'C',
            Self::State => b'K',
            Self::EndTransmitter => b'F',
        }
    }

    pub fn from_tag(tag: u8) -> Result<Self, DecodeError> {
        Self::ALL
            .into_iter()
            .find(|k| k.tag() == tag)
            .ok_or(DecodeError::UnknownRecordType(tag as char))
    }

    /// The key under which records of this kind are nested in a JSON
    /// document.
    pub fn key(self) -> &'static str {
        match self {
            Self::Transmitter => "transmitter",
            Self::Payer => "payer",
            Self::Payee => "payees",
            Self::EndPayer => "end_payer",
            Self::State => "states",
            Self::EndTransmitter => "end_transmitter",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.key() == key)
    }
}

/// A record of any kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    Transmitter(TRecord),
    Payer(ARecord),
    Payee(BRecord),
    EndPayer(CRecord),
    State(KRecord),
    EndTransmitter(FRecord),
}

/// Apply an expression to the record held by any variant.
macro_rules! each {
    ($record:expr, $r:ident => $body:expr) => {
        match $record {
            Record::Transmitter($r) => $body,
            Record::Payer($r) => $body,
            Record::Payee($r) => $body,
            Record::EndPayer($r) => $body,
            Record::State($r) => $body,
            Record::EndTransmitter($r) => $body,
        }
    };
}

impl Record {
    /// An empty record of a kind.
    ///
    /// Payee records need the type of return of their payer to select a
    /// layout; without one, they are an [`DecodeError::UnknownRecordType`].
    pub fn new(kind: RecordKind, return_type: Option<TypeOfReturn>) -> Result<Self, DecodeError> {
        Ok(match kind {
            RecordKind::Transmitter => Self::Transmitter(Default::default()),
            RecordKind::Payer => Self::Payer(Default::default()),
            RecordKind::Payee => match return_type {
                Some(t) => Self::Payee(BRecord::new(t)),
                None => Err(DecodeError::UnknownRecordType(kind.tag() as char))?,
            },
            RecordKind::EndPayer => Self::EndPayer(Default::default()),
            RecordKind::State => Self::State(Default::default()),
            RecordKind::EndTransmitter => Self::EndTransmitter(Default::default()),
        })
    }

    /// Decode a complete record, selecting its kind by its tag.
    pub fn parse(raw: &[u8], return_type: Option<TypeOfReturn>) -> Result<Self, DecodeError> {
        let tag = *raw.first().ok_or(DecodeError::RecordLength {
            expected: RECORD_LENGTH,
            found: 0,
        })?;

        let mut record = Self::new(RecordKind::from_tag(tag)?, return_type)?;

        each!(&mut record, r => r.parse(raw))?;

        Ok(record)
    }

    /// Build a record of a kind from a JSON object.
    pub fn from_json(
        kind: RecordKind,
        value: serde_json::Value,
        return_type: Option<TypeOfReturn>,
    ) -> Result<Self, document::Error> {
        Ok(match kind {
            RecordKind::Transmitter => Self::Transmitter(TRecord::deserialize(value)?),
            RecordKind::Payer => Self::Payer(ARecord::deserialize(value)?),
            RecordKind::Payee => match return_type {
                Some(t) => Self::Payee(BRecord::from_json(value, t)?),
                None => Err(DecodeError::UnknownRecordType(kind.tag() as char))?,
            },
            RecordKind::EndPayer => Self::EndPayer(CRecord::deserialize(value)?),
            RecordKind::State => Self::State(KRecord::deserialize(value)?),
            RecordKind::EndTransmitter => Self::EndTransmitter(FRecord::deserialize(value)?),
        })
    }

    pub fn to_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        each!(self, r => serde_json::to_value(r))
    }

    pub fn kind(&self) -> RecordKind {
        match self {
            Record::Transmitter(_) => RecordKind::Transmitter,
            Record::Payer(_) => RecordKind::Payer,
            Record::Payee(_) => RecordKind::Payee,
            Record::EndPayer(_) => RecordKind::EndPayer,
            Record::State(_) => RecordKind::State,
            Record::EndTransmitter(_) => RecordKind::EndTransmitter,
        }
    }

    pub fn ascii(&self) -> Vec<u8> {
        each!(self, r => r.ascii())
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        each!(self, r => r.validate())
    }

    pub fn sequence_number(&self) -> i64 {
        match self {
            Record::Payee(r) => r.payee.record_sequence_number,
            Record::Transmitter(r) => r.record_sequence_number,
            Record::Payer(r) => r.record_sequence_number,
            Record::EndPayer(r) => r.record_sequence_number,
            Record::State(r) => r.record_sequence_number,
            Record::EndTransmitter(r) => r.record_sequence_number,
        }
    }

    pub fn set_sequence_number(&mut self, n: i64) {
        match self {
            Record::Payee(r) => r.payee.record_sequence_number = n,
            Record::Transmitter(r) => r.record_sequence_number = n,
            Record::Payer(r) => r.record_sequence_number = n,
            Record::EndPayer(r) => r.record_sequence_number = n,
            Record::State(r) => r.record_sequence_number = n,
            Record::EndTransmitter(r) => r.record_sequence_number = n,
        }
    }
}
