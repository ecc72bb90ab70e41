use serde::{Deserialize, Serialize};

use crate::{Fields, records::rules};

/// Form 1097-BTC, bond tax credit.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize, Fields)]
#[serde(default)]
#[record('B')]
#[blank(543, 1)]
#[blank(545, 8)]
#[blank(554, 3)]
#[blank(599, 63)]
#[blank(722, 28)]
pub struct Sub1097Btc {
    /// Whether the filer is the issuer ("1") or a recipient ("2").
    #[field(544, 1, Text, required, validate = rules::issuer)]
    pub issuer_indicator: String,
    /// Account number ("A"), CUSIP ("C"), or other ("O").
    #[field(553, 1, Text, required, validate = rules::btc_code)]
    pub code: String,
    #[field(557, 39, Text)]
    pub unique_identifier: String,
    #[field(596, 3, Text, required)]
    pub bond_type: String,
    #[field(662, 60, Text)]
    pub special_data_entries: String,
}
