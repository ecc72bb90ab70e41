//! Finite-state machine assembling payment groups from records.
//!
//! This module is intended for applications that need fine control over how
//! records are read. See [`crate::avec`] for implementations decoding whole
//! slices and readers.
//!
//! # Architecture
//!
//! All states are represented by a non-copy token. Once the next complete
//! record is ready, transition to another state by calling the token's
//! `advance` method with its bytes. This returns the decoded record, along
//! with a successor state token.
//!
//! A payment group reads as a payer record, any number of payee records, an
//! end of payer record, and any number of state records:
//!
//! ```text
//! ExpectPayer -A-> ExpectPayeeOrEndPayer -C-> ExpectStateOrDone --> done
//!                    ^          |               ^         |
//!                    +----B-----+               +----K----+
//! ```
//!
//! The payer's type of return is carried by the [`person::ExpectPayeeOrEndPayer`]
//! token, and selects the layout used for each payee record.
//!
//! Only the initial state, re-exported for convenience as [`Decoder`], can be
//! constructed. Some parts of decoding are not represented in the
//! finite-state machine and must be carefully written:
//!
//! - Supplying exactly one complete record to each transition, and advancing
//! past it only when it was consumed.
//!
//! - Ending the group when the records run out in
//! [`person::ExpectStateOrDone`]. Running out in any other state is an error.

pub mod person;

/// Entrypoint to the finite-state machine.
pub type Decoder = person::ExpectPayer;
