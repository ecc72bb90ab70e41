//! An encoder and decoder for IRS Filing Information Returns Electronically
//! (FIRE) records.
//!
//! A FIRE file is a stream of fixed-width, 750-byte ASCII records, each
//! opened by a single type tag. This crate transcodes those records between
//! their byte layout, typed Rust structs, and JSON, and assembles a stream of
//! records into the hierarchical document it describes.
//!
//! Most users should begin with [`avec`], which decodes whole files and
//! payment groups from slices and readers, and the aggregates in
//! [`document`]. Record layouts are declared with [`Fields`], which binds a
//! struct to a static [`layout::RecordLayout`] driven by the generic
//! [`engine`]. The state machine assembling a payment group is exposed in
//! [`sans`] for applications needing finer control.

extern crate self as irs_fire;

pub mod avec;
pub mod config;
pub mod document;
pub mod engine;
pub mod field;
pub mod layout;
pub mod records;
pub mod sans;

/// Derive [`layout::FixedWidth`] for a struct describing a record.
///
/// The struct names its type tag with `#[record('X')]`. Each bound struct
/// field carries `#[field(start, len, Kind)]`, optionally followed by
/// `required` and any number of `validate = path` business rules, where
/// `start` is the zero-based byte offset into the record. Blank runs are
/// declared on the struct with `#[blank(start, len)]`. Struct fields without
/// an attribute are ignored.
///
/// ```
/// #[derive(Debug, Default, Fields)]
/// #[record('C')]
/// #[blank(9, 6)]
/// struct EndPayer {
///     #[field(1, 8, ZeroPaddedNumeric, required)]
///     number_of_payees: i64,
///     #[field(15, 18, ZeroPaddedNumeric)]
///     control_total_1: i64,
/// }
/// ```
///
/// Overlapping fields, fields covering the tag byte, and unknown kinds are
/// rejected at compile time.
pub use irs_fire_derive::Fields;

pub use config::{RECORD_LENGTH, TypeOfReturn};
pub use document::{File, PaymentPerson};
pub use engine::{DecodeError, ValidationError};
pub use records::{Record, RecordKind};
