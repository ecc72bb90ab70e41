//! Rules for each semantic field type.
//!
//! A field type decides how the fixed-width bytes of a field are checked,
//! how they decode into a [`Value`], and how a value is padded back out to
//! the field's width.

use core::{
    fmt,
    num::{IntErrorKind, ParseIntError},
};

use thiserror::Error;

use crate::config::{BLANK, ZERO};

/// Phone fields shorter than this are not required to be numeric.
const MIN_PHONE_LENGTH: usize = 10;

/// Punctuation permitted in text fields, alongside uppercase letters and
/// digits.
const PUNCTUATION: &[u8] = b" !\"#$%&'()*+,-./:;<=>?@[\\]^_{|}~";

/// Punctuation permitted in the local part of an email address.
const EMAIL_PUNCTUATION: &[u8] = b".!#$%&'*+/=?^_`{|}~-";

/// The semantic type of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// Left-justified text, blank-filled.
    Text,
    /// Right-justified text, blank-filled.
    TextRightAligned,
    /// Digits, left-justified and blank-filled. Decodes to text so that
    /// leading zeros survive.
    Numeric,
    /// A right-justified, zero-filled integer.
    ZeroPaddedNumeric,
    /// A four-digit year, left-justified.
    Year,
    Email,
    Phone,
    /// Always blank. Never populated from input.
    Filler,
}

/// A decoded field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Text(String),
    Number(i64),
}

impl Value {
    /// Whether the value is empty text or zero.
    pub fn is_zero(&self) -> bool {
        match self {
            Value::Text(s) => s.is_empty(),
            Value::Number(n) => *n == 0,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            Value::Number(_) => None,
        }
    }

    pub fn as_number(&self) -> Option<i64> {
        match self {
            Value::Text(_) => None,
            Value::Number(n) => Some(*n),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => f.write_str(s),
            Value::Number(n) => write!(f, "{n}"),
        }
    }
}

/// A field whose bytes do not satisfy its type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    /// A required field is blank.
    #[error("A value is required.")]
    Required,
    #[error("Value is not numeric.")]
    NotNumeric,
    /// Text contains a character outside the permitted set.
    #[error("Value contains characters other than uppercase letters, digits, and punctuation.")]
    NonAlphanumeric,
    /// Digits too large to hold as an integer.
    #[error("Value is too large.")]
    Overflow,
    #[error("Value is not a year between 1900 and 2099.")]
    InvalidDate,
    #[error("Value is not an email address.")]
    InvalidEmail,
}

/// Whether every byte of a field is the blank fill byte.
pub fn is_blank(data: &[u8]) -> bool {
    data.iter().all(|b| *b == BLANK)
}

impl FieldType {
    /// Check the bytes of a field against this type.
    ///
    /// Blank fields pass unless `required`.
    pub fn check(self, data: &[u8], required: bool) -> Result<(), FieldError> {
        if is_blank(data) {
            return if required {
                Err(FieldError::Required)
            } else {
                Ok(())
            };
        }

        match self {
            FieldType::Text | FieldType::TextRightAligned => check_text(data),
            FieldType::Numeric | FieldType::ZeroPaddedNumeric => check_numeric(data),
            FieldType::Year => check_year(data),
            FieldType::Email => check_email(data),
            FieldType::Phone if data.len() < MIN_PHONE_LENGTH => Ok(()),
            FieldType::Phone => check_numeric(data),
            FieldType::Filler => Ok(()),
        }
    }

    /// Decode the bytes of a field, which should already have passed
    /// [`FieldType::check`].
    ///
    /// Blank fields decode to empty text or zero. Returns `None` for filler.
    pub fn decode(self, data: &[u8]) -> Result<Option<Value>, FieldError> {
        let value = match self {
            FieldType::Filler => return Ok(None),
            FieldType::Text | FieldType::Numeric | FieldType::Email | FieldType::Phone => {
                Value::Text(text(trim_end(data)))
            }
            FieldType::TextRightAligned => Value::Text(text(trim_start(trim_end(data)))),
            FieldType::ZeroPaddedNumeric => Value::Number(number(data, FieldError::NotNumeric)?),
            FieldType::Year => Value::Number(number(data, FieldError::InvalidDate)?),
        };

        Ok(Some(value))
    }

    /// Encode a value into the bytes of a field, padding or truncating to the
    /// width of `out`.
    ///
    /// A missing value fills the field as if it were blank.
    pub fn encode(self, value: Option<&Value>, out: &mut [u8]) {
        out.fill(BLANK);

        let rendered = match (self, value) {
            (FieldType::Filler, _) => return,
            (FieldType::ZeroPaddedNumeric, None) => return out.fill(ZERO),
            (_, None) => return,
            (FieldType::Year, Some(Value::Number(0))) => return,
            (FieldType::ZeroPaddedNumeric, Some(Value::Number(n))) => {
                format!("{n:0width$}", width = out.len())
            }
            (_, Some(value)) => value.to_string(),
        };

        let bytes = rendered.as_bytes();
        let n = bytes.len().min(out.len());

        if self == FieldType::TextRightAligned {
            let start = out.len() - n;
            out[start..].copy_from_slice(&bytes[..n]);
        } else {
            out[..n].copy_from_slice(&bytes[..n]);
        }
    }

    /// The value of a blank field of this type.
    pub fn blank_value(self) -> Option<Value> {
        match self {
            FieldType::Filler => None,
            FieldType::ZeroPaddedNumeric | FieldType::Year => Some(Value::Number(0)),
            _ => Some(Value::Text(String::new())),
        }
    }
}

fn trim_end(data: &[u8]) -> &[u8] {
    let end = data.iter().rposition(|b| *b != BLANK).map_or(0, |i| i + 1);
    &data[..end]
}

fn trim_start(data: &[u8]) -> &[u8] {
    let start = data.iter().position(|b| *b != BLANK).unwrap_or(data.len());
    &data[start..]
}

fn text(data: &[u8]) -> String {
    String::from_utf8_lossy(data).into_owned()
}

fn number(data: &[u8], err: FieldError) -> Result<i64, FieldError> {
    let data = trim_end(data);
    if data.is_empty() {
        return Ok(0);
    }

    let s = core::str::from_utf8(data).map_err(|_| err)?;

    s.parse().map_err(|e: ParseIntError| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => FieldError::Overflow,
        _ => err,
    })
}

fn check_text(data: &[u8]) -> Result<(), FieldError> {
    let permitted = |b: &u8| b.is_ascii_uppercase() || b.is_ascii_digit() || PUNCTUATION.contains(b);

    if data.iter().all(permitted) {
        Ok(())
    } else {
        Err(FieldError::NonAlphanumeric)
    }
}

fn check_numeric(data: &[u8]) -> Result<(), FieldError> {
    let data = trim_end(data);

    if !data.is_empty() && data.iter().all(u8::is_ascii_digit) {
        Ok(())
    } else {
        Err(FieldError::NotNumeric)
    }
}

fn check_year(data: &[u8]) -> Result<(), FieldError> {
    let is_year =
        |w: &[u8]| matches!(&w[..2], b"19" | b"20") && w[2..].iter().all(u8::is_ascii_digit);

    if data.windows(4).any(is_year) {
        Ok(())
    } else {
        Err(FieldError::InvalidDate)
    }
}

fn check_email(data: &[u8]) -> Result<(), FieldError> {
    let data = trim_end(data);

    let valid = match data.iter().position(|b| *b == b'@') {
        Some(at) => is_local_part(&data[..at]) && is_domain(&data[at + 1..]),
        None => false,
    };

    if valid {
        Ok(())
    } else {
        Err(FieldError::InvalidEmail)
    }
}

fn is_local_part(s: &[u8]) -> bool {
    !s.is_empty()
        && s.iter()
            .all(|b| b.is_ascii_alphanumeric() || EMAIL_PUNCTUATION.contains(b))
}

fn is_domain(s: &[u8]) -> bool {
    // Each dot-separated label is 1 to 63 characters, beginning and ending
    // with an alphanumeric.
    let is_label = |l: &[u8]| match (l.first(), l.last()) {
        (Some(first), Some(last)) => {
            l.len() <= 63
                && first.is_ascii_alphanumeric()
                && last.is_ascii_alphanumeric()
                && l.iter().all(|b| b.is_ascii_alphanumeric() || *b == b'-')
        }
        _ => false,
    };

    !s.is_empty() && s.split(|b| *b == b'.').all(is_label)
}
