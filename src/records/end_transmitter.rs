use serde::{Deserialize, Serialize};

use crate::Fields;

/// The end of transmission ("F") record, closing a file.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize, Fields)]
#[serde(default)]
#[record('F')]
#[blank(30, 19)]
#[blank(57, 442)]
#[blank(507, 243)]
pub struct FRecord {
    #[field(1, 8, ZeroPaddedNumeric, required)]
    pub number_of_a_records: i64,
    /// Always zero.
    #[serde(skip)]
    #[field(9, 21, ZeroPaddedNumeric)]
    pub zero: i64,
    #[field(49, 8, ZeroPaddedNumeric)]
    pub total_number_of_payees: i64,
    #[field(499, 8, ZeroPaddedNumeric, required)]
    pub record_sequence_number: i64,
}
