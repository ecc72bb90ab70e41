//! States processing the records of a payment group.

use either::Either::{self, Left, Right};

use crate::{
    config::TypeOfReturn,
    engine::DecodeError,
    layout::FixedWidth,
    records::{ARecord, BRecord, CRecord, KRecord, RecordKind},
};

/// State token to decode the payer record opening a group.
#[derive(Debug)]
pub struct ExpectPayer;

impl ExpectPayer {
    /// Transition to another state by decoding a payer record.
    ///
    /// Returns the payer, and a successor state token carrying its type of
    /// return. A tag of no known kind fails with
    /// [`DecodeError::UnknownRecordType`].
    pub fn advance(r: &[u8]) -> Result<(ARecord, ExpectPayeeOrEndPayer), DecodeError> {
        RecordKind::from_tag(tag(r)?)?;

        let mut payer = ARecord::default();
        payer.parse(r)?;

        let successor = ExpectPayeeOrEndPayer {
            return_type: payer.return_type(),
        };

        Ok((payer, successor))
    }
}

/// State token to decode a payee record, or the end of payer record closing
/// the payees.
#[derive(Debug)]
pub struct ExpectPayeeOrEndPayer {
    return_type: Option<TypeOfReturn>,
}

impl ExpectPayeeOrEndPayer {
    /// The payer's type of return, if its code is known.
    pub fn return_type(&self) -> Option<TypeOfReturn> {
        self.return_type
    }

    /// Transition to another state by decoding a payee or end of payer
    /// record.
    ///
    /// Returns either a payee and this same state, or the end of payer record
    /// and a successor state token. Payee records under a payer with an
    /// unknown type of return fail with [`DecodeError::UnknownRecordType`].
    pub fn advance(
        self,
        r: &[u8],
    ) -> Result<Either<(BRecord, Self), (CRecord, ExpectStateOrDone)>, DecodeError> {
        match RecordKind::from_tag(tag(r)?)? {
            RecordKind::Payee => {
                let kind = self
                    .return_type
                    .ok_or(DecodeError::UnknownRecordType(RecordKind::Payee.tag() as char))?;

                let mut payee = BRecord::new(kind);
                payee.parse(r)?;

                Ok(Left((payee, self)))
            }
            RecordKind::EndPayer => {
                let mut end_payer = CRecord::default();
                end_payer.parse(r)?;

                Ok(Right((end_payer, ExpectStateOrDone(()))))
            }
            kind => Err(DecodeError::UnexpectedRecordType {
                expected: b"BC",
                found: kind.tag() as char,
            }),
        }
    }
}

/// State token to decode a state record, or end the group.
#[derive(Debug)]
pub struct ExpectStateOrDone(pub(super) ());

impl ExpectStateOrDone {
    /// Transition to another state by decoding a state record.
    ///
    /// Returns either a state record and this same state, or `Right` if the
    /// group has ended. In that case the record was not consumed, and opens
    /// whatever follows the group.
    pub fn advance(self, r: &[u8]) -> Result<Either<(KRecord, Self), ()>, DecodeError> {
        if tag(r)? != RecordKind::State.tag() {
            return Ok(Right(()));
        }

        let mut state = KRecord::default();
        state.parse(r)?;

        Ok(Left((state, self)))
    }
}

fn tag(r: &[u8]) -> Result<u8, DecodeError> {
    r.first().copied().ok_or(DecodeError::RecordLength {
        expected: crate::config::RECORD_LENGTH,
        found: 0,
    })
}
