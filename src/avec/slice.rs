//! Slice-based decoder implementation.

use crate::{
    config::RECORD_LENGTH,
    document::{File, PaymentPerson},
    engine::DecodeError,
};

use super::{Error, Source};

struct SliceSource<'a> {
    r: &'a [u8],
    i: usize, // Offset of the next record, used to read bytes from the tip.
}

impl Source for SliceSource<'_> {
    fn peek(&mut self) -> Result<Option<&[u8]>, Error> {
        let rest = self.r.get(self.i..).unwrap_or_default();

        match rest.get(..RECORD_LENGTH) {
            Some(record) => Ok(Some(record)),
            None if rest.is_empty() => Ok(None),
            None => Err(Error::Record {
                offset: self.i,
                source: DecodeError::RecordLength {
                    expected: RECORD_LENGTH,
                    found: rest.len(),
                },
            }),
        }
    }

    fn consume(&mut self) {
        self.i += RECORD_LENGTH;
    }

    fn offset(&self) -> usize {
        self.i
    }

    fn finish(&mut self) -> Result<usize, Error> {
        Ok(self.r.len().saturating_sub(self.i))
    }
}

/// Decode a single payment group from the start of a slice.
///
/// Returns the group, and the number of bytes it occupied. The group ends at
/// the first record after its end of payer record that is not a state
/// record, or at the end of the slice.
pub fn decode_person(r: &[u8]) -> Result<(PaymentPerson, usize), Error> {
    let mut s = SliceSource { r, i: 0 };
    let person = super::person(&mut s)?;
    Ok((person, s.i))
}

/// Decode a whole file from a slice.
///
/// This method is also re-exported as `irs_fire::avec::decode_slice`.
pub fn decode_file(r: &[u8]) -> Result<File, Error> {
    super::file(&mut SliceSource { r, i: 0 })
}
