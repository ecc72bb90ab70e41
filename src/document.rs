//! Document aggregates: payment groups, and whole files.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    avec,
    config::TypeOfReturn,
    engine::{DecodeError, ValidationError},
    layout::FixedWidth,
    records::{ARecord, BRecord, CRecord, FRecord, KRecord, TRecord},
};

/// Errors occurring while assembling documents.
#[derive(Debug, Error)]
pub enum Error {
    /// Payees were supplied under a payer whose type of return is unknown.
    #[error("Unknown type of return `{0}`.")]
    UnknownTypeOfReturn(String),
    /// A payee's form does not match its payer's type of return.
    #[error("Expected a {expected} payee, found {found}.")]
    FormMismatch {
        expected: &'static str,
        found: &'static str,
    },
    /// The payer's type of return cannot change once payees are present.
    #[error("Cannot change the type of return of a payer with payees.")]
    PayeesPresent,
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Dispatch(#[from] DecodeError),
}

/// A payment group: one payer, its payees, the end of payer record, and any
/// state totals.
///
/// Every payee holds the form selected by the payer's type of return. This is
/// checked as payees are added, and while deserializing, regardless of the
/// order of keys in the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPaymentPerson")]
pub struct PaymentPerson {
    payer: ARecord,
    payees: Vec<BRecord>,
    end_payer: CRecord,
    states: Vec<KRecord>,
}

/// A payment group as read from JSON, before its payees are resolved.
#[derive(Deserialize)]
struct RawPaymentPerson {
    payer: ARecord,
    #[serde(default)]
    payees: Vec<serde_json::Value>,
    end_payer: CRecord,
    #[serde(default)]
    states: Vec<KRecord>,
}

impl TryFrom<RawPaymentPerson> for PaymentPerson {
    type Error = Error;

    fn try_from(raw: RawPaymentPerson) -> Result<Self, Self::Error> {
        let RawPaymentPerson {
            payer,
            payees,
            end_payer,
            states,
        } = raw;

        let payees = match (payer.return_type(), payees.is_empty()) {
            (_, true) => Vec::new(),
            (None, false) => Err(Error::UnknownTypeOfReturn(payer.type_of_return.clone()))?,
            (Some(kind), false) => payees
                .into_iter()
                .map(|v| BRecord::from_json(v, kind))
                .collect::<Result<_, _>>()?,
        };

        Ok(Self::from_parts(payer, payees, end_payer, states))
    }
}

impl PaymentPerson {
    /// A payment group without payees or state totals.
    pub fn new(payer: ARecord, end_payer: CRecord) -> Self {
        Self::from_parts(payer, Vec::new(), end_payer, Vec::new())
    }

    pub(crate) fn from_parts(
        payer: ARecord,
        payees: Vec<BRecord>,
        end_payer: CRecord,
        states: Vec<KRecord>,
    ) -> Self {
        Self {
            payer,
            payees,
            end_payer,
            states,
        }
    }

    /// Decode a payment group occupying the whole of a slice.
    pub fn parse(raw: &[u8]) -> Result<Self, avec::Error> {
        let (person, n) = avec::slice::decode_person(raw)?;

        match raw.len() - n {
            0 => Ok(person),
            rest => Err(avec::Error::TrailingData(rest)),
        }
    }

    pub fn payer(&self) -> &ARecord {
        &self.payer
    }

    pub fn payees(&self) -> &[BRecord] {
        &self.payees
    }

    pub fn end_payer(&self) -> &CRecord {
        &self.end_payer
    }

    pub fn states(&self) -> &[KRecord] {
        &self.states
    }

    pub fn return_type(&self) -> Option<TypeOfReturn> {
        self.payer.return_type()
    }

    /// Replace the payer.
    ///
    /// Once payees are present, the new payer must keep the same type of
    /// return.
    pub fn set_payer(&mut self, payer: ARecord) -> Result<(), Error> {
        if !self.payees.is_empty() && payer.return_type() != self.return_type() {
            Err(Error::PayeesPresent)?;
        }

        self.payer = payer;
        Ok(())
    }

    /// Append a payee, which must hold the form of the payer's type of
    /// return.
    pub fn add_payee(&mut self, payee: BRecord) -> Result<(), Error> {
        let expected = self
            .return_type()
            .ok_or_else(|| Error::UnknownTypeOfReturn(self.payer.type_of_return.clone()))?;

        if payee.return_type() != expected {
            Err(Error::FormMismatch {
                expected: expected.form(),
                found: payee.return_type().form(),
            })?;
        }

        self.payees.push(payee);
        Ok(())
    }

    pub fn set_end_payer(&mut self, end_payer: CRecord) {
        self.end_payer = end_payer;
    }

    pub fn add_state(&mut self, state: KRecord) {
        self.states.push(state);
    }

    /// Encode the group: the payer, each payee, the end of payer record, then
    /// each state record.
    pub fn ascii(&self) -> Vec<u8> {
        let mut buf = self.payer.ascii();

        for payee in &self.payees {
            buf.extend(payee.ascii());
        }

        buf.extend(self.end_payer.ascii());

        for state in &self.states {
            buf.extend(state.ascii());
        }

        buf
    }

    /// Validate each record in order, then the end of payer record's payee
    /// count.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.payer.validate()?;

        for payee in &self.payees {
            payee.validate()?;
        }

        self.end_payer.validate()?;

        for state in &self.states {
            state.validate()?;
        }

        if self.end_payer.number_of_payees != self.payees.len() as i64 {
            Err(ValidationError::RecordCount {
                field: "number_of_payees",
                declared: self.end_payer.number_of_payees,
                found: self.payees.len(),
            })?;
        }

        Ok(())
    }

    /// The number of records in the group.
    pub fn record_count(&self) -> usize {
        self.payees.len() + self.states.len() + 2
    }

    /// The sequence numbers of the group's records, in order.
    pub fn sequence_numbers(&self) -> impl Iterator<Item = i64> + '_ {
        core::iter::once(self.payer.record_sequence_number)
            .chain(self.payees.iter().map(|p| p.payee.record_sequence_number))
            .chain(core::iter::once(self.end_payer.record_sequence_number))
            .chain(self.states.iter().map(|s| s.record_sequence_number))
    }

    /// Number the group's records consecutively from `first`, returning the
    /// number following the last record.
    pub fn renumber(&mut self, first: i64) -> i64 {
        let mut n = first;
        let mut next = || {
            n += 1;
            n - 1
        };

        self.payer.record_sequence_number = next();

        for payee in &mut self.payees {
            payee.payee.record_sequence_number = next();
        }

        self.end_payer.record_sequence_number = next();

        for state in &mut self.states {
            state.record_sequence_number = next();
        }

        n
    }

    pub fn from_json(s: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// A whole FIRE file: the transmitter record, one or more payment groups, and
/// the end of transmission record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct File {
    transmitter: TRecord,
    #[serde(default)]
    payment_persons: Vec<PaymentPerson>,
    end_transmitter: FRecord,
}

impl File {
    pub fn new(transmitter: TRecord, end_transmitter: FRecord) -> Self {
        Self::from_parts(transmitter, Vec::new(), end_transmitter)
    }

    pub(crate) fn from_parts(
        transmitter: TRecord,
        payment_persons: Vec<PaymentPerson>,
        end_transmitter: FRecord,
    ) -> Self {
        Self {
            transmitter,
            payment_persons,
            end_transmitter,
        }
    }

    /// Decode a whole file from a slice.
    pub fn parse(raw: &[u8]) -> Result<Self, avec::Error> {
        avec::decode_slice(raw)
    }

    pub fn transmitter(&self) -> &TRecord {
        &self.transmitter
    }

    pub fn payment_persons(&self) -> &[PaymentPerson] {
        &self.payment_persons
    }

    pub fn end_transmitter(&self) -> &FRecord {
        &self.end_transmitter
    }

    pub fn add_payment_person(&mut self, person: PaymentPerson) {
        self.payment_persons.push(person);
    }

    pub fn ascii(&self) -> Vec<u8> {
        let mut buf = self.transmitter.ascii();

        for person in &self.payment_persons {
            buf.extend(person.ascii());
        }

        buf.extend(self.end_transmitter.ascii());
        buf
    }

    /// Validate each record and payment group in order, then the end of
    /// transmission record's counts, then the record sequence numbers.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.transmitter.validate()?;

        for person in &self.payment_persons {
            person.validate()?;
        }

        self.end_transmitter.validate()?;

        let a_records = self.payment_persons.len();
        let payees = self.payment_persons.iter().map(|p| p.payees().len()).sum::<usize>();

        let counts = [
            ("number_of_a_records", self.end_transmitter.number_of_a_records, a_records),
            ("total_number_of_payees", self.end_transmitter.total_number_of_payees, payees),
        ];

        for (field, declared, found) in counts {
            if declared != found as i64 {
                Err(ValidationError::RecordCount {
                    field,
                    declared,
                    found,
                })?;
            }
        }

        let sequence = core::iter::once(self.transmitter.record_sequence_number)
            .chain(self.payment_persons.iter().flat_map(|p| p.sequence_numbers()))
            .chain(core::iter::once(self.end_transmitter.record_sequence_number));

        for (expected, found) in (1..).zip(sequence) {
            if expected != found {
                Err(ValidationError::SequenceNumber { expected, found })?;
            }
        }

        Ok(())
    }

    /// Number every record of the file consecutively from 1.
    pub fn renumber(&mut self) {
        self.transmitter.record_sequence_number = 1;

        let mut n = 2;
        for person in &mut self.payment_persons {
            n = person.renumber(n);
        }

        self.end_transmitter.record_sequence_number = n;
    }

    pub fn from_json(s: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
