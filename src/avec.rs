//! Convenience interfaces for common decoding patterns.
//!
//! The functions in this module decode whole files, and single payment
//! groups, from slices and readers. Each drives the state machine in
//! [`crate::sans`] over a source of complete records.

use std::io;

use either::Either::{Left, Right};
use thiserror::Error;
use tracing::{debug, trace};

use crate::{
    config::RECORD_LENGTH,
    document::{File, PaymentPerson},
    engine::DecodeError,
    layout::FixedWidth,
    records::{FRecord, RecordKind, TRecord},
    sans::Decoder,
};

pub mod reader;
pub mod slice;

pub use reader::decode_file as decode_reader;
pub use slice::decode_file as decode_slice;

/// Errors occurring while decoding from a slice or a reader.
#[derive(Debug, Error)]
pub enum Error {
    /// A record failed to decode.
    #[error("Record at offset {offset}: {source}")]
    Record {
        offset: usize,
        #[source]
        source: DecodeError,
    },
    /// An error from the supplied reader.
    #[error(transparent)]
    Io(#[from] io::Error),
    /// Bytes remain after the end of transmission record.
    #[error("{0} bytes follow the end of transmission record.")]
    TrailingData(usize),
}

/// A stream of complete records.
trait Source {
    /// The next complete record, without consuming it, or `None` at the end of
    /// the stream. A partial record at the end of the stream is an error.
    fn peek(&mut self) -> Result<Option<&[u8]>, Error>;
    /// Advance past the record last peeked.
    fn consume(&mut self);
    /// Offset of the next record from the start of the stream.
    fn offset(&self) -> usize;
    /// Drain the stream, returning the number of unread bytes.
    fn finish(&mut self) -> Result<usize, Error>;
}

/// Take the next record, which must exist.
fn next<S: Source>(s: &mut S) -> Result<&[u8], Error> {
    let offset = s.offset();
    s.peek()?.ok_or(Error::Record {
        offset,
        source: DecodeError::RecordLength {
            expected: RECORD_LENGTH,
            found: 0,
        },
    })
}

/// Attach the offset of the record being decoded to an error.
fn at(offset: usize) -> impl Fn(DecodeError) -> Error {
    move |source| Error::Record { offset, source }
}

/// Decode a payment group from the records of a source.
fn person<S: Source>(s: &mut S) -> Result<PaymentPerson, Error> {
    let offset = s.offset();
    let (payer, mut state) = Decoder::advance(next(s)?).map_err(at(offset))?;
    s.consume();

    trace!(offset, return_type = ?state.return_type(), "decoded payer");

    let mut payees = Vec::new();

    let (end_payer, mut state) = loop {
        let offset = s.offset();
        let successor = state.advance(next(s)?).map_err(at(offset))?;
        s.consume();

        state = match successor {
            Left((payee, state)) => {
                trace!(offset, "decoded payee");
                payees.push(payee);
                state
            }
            Right(done) => break done,
        };
    };

    let mut states = Vec::new();

    loop {
        let offset = s.offset();
        let Some(r) = s.peek()? else {
            break;
        };

        state = match state.advance(r).map_err(at(offset))? {
            Left((record, state)) => {
                s.consume();
                trace!(offset, "decoded state totals");
                states.push(record);
                state
            }
            Right(()) => break,
        };
    }

    debug!(payees = payees.len(), states = states.len(), "decoded payment group");

    Ok(PaymentPerson::from_parts(payer, payees, end_payer, states))
}

/// Decode a whole file from the records of a source.
fn file<S: Source>(s: &mut S) -> Result<File, Error> {
    let transmitter = record::<TRecord, S>(s)?;

    let mut payment_persons = Vec::new();

    loop {
        match s.peek()? {
            Some(r) if r.first() == Some(&RecordKind::Payer.tag()) => {}
            _ => break,
        }

        payment_persons.push(person(s)?);
    }

    let end_transmitter = record::<FRecord, S>(s)?;

    match s.finish()? {
        0 => {}
        n => Err(Error::TrailingData(n))?,
    }

    debug!(payment_persons = payment_persons.len(), "decoded file");

    Ok(File::from_parts(transmitter, payment_persons, end_transmitter))
}

/// Decode and consume a single record of a fixed kind.
fn record<R: FixedWidth + Default, S: Source>(s: &mut S) -> Result<R, Error> {
    let offset = s.offset();
    let r = next(s)?;

    if let Some(tag) = r.first() {
        RecordKind::from_tag(*tag).map_err(at(offset))?;
    }

    let mut record = R::default();
    record.parse(r).map_err(at(offset))?;
    s.consume();

    trace!(offset, tag = %(R::LAYOUT.tag as char), "decoded record");

    Ok(record)
}
