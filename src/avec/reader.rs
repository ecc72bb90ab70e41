//! Reader-based decoder implementation.

use std::io::{self, ErrorKind, Read};

use crate::{config::RECORD_LENGTH, document::File, engine::DecodeError};

use super::{Error, Source};

struct ReaderSource<'a, R: Read> {
    r: &'a mut R,
    buf: Vec<u8>,
    ready: bool, // Whether `buf` holds a record not yet consumed.
    i: usize,
}

impl<R: Read> Source for ReaderSource<'_, R> {
    fn peek(&mut self) -> Result<Option<&[u8]>, Error> {
        if !self.ready {
            match fill(&mut *self.r, &mut self.buf)? {
                0 => return Ok(None),
                RECORD_LENGTH => self.ready = true,
                found => Err(Error::Record {
                    offset: self.i,
                    source: DecodeError::RecordLength {
                        expected: RECORD_LENGTH,
                        found,
                    },
                })?,
            }
        }

        Ok(Some(self.buf.as_slice()))
    }

    fn consume(&mut self) {
        self.ready = false;
        self.i += RECORD_LENGTH;
    }

    fn offset(&self) -> usize {
        self.i
    }

    fn finish(&mut self) -> Result<usize, Error> {
        let pending = if self.ready { RECORD_LENGTH } else { 0 };
        let rest = io::copy(&mut *self.r, &mut io::sink())?;
        Ok(pending + rest as usize)
    }
}

/// Read until a buffer is full or the reader is exhausted, returning the
/// number of bytes read.
fn fill(r: &mut impl Read, buf: &mut [u8]) -> Result<usize, io::Error> {
    let mut n = 0;

    while n < buf.len() {
        match r.read(&mut buf[n..]) {
            Ok(0) => break,
            Ok(read) => n += read,
            Err(e) if e.kind() == ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }

    Ok(n)
}

/// Decode a whole file from a reader.
///
/// Records are read one at a time; the file is never held in memory whole.
/// This method is also re-exported as `irs_fire::avec::decode_reader`.
pub fn decode_file(r: &mut impl Read) -> Result<File, Error> {
    super::file(&mut ReaderSource {
        r,
        buf: vec![0; RECORD_LENGTH],
        ready: false,
        i: 0,
    })
}
