use serde::{Deserialize, Serialize};

use crate::{Fields, records::rules};

/// Form 1099-PATR, taxable distributions received from cooperatives.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize, Fields)]
#[serde(default)]
#[record('B')]
#[blank(544, 2)]
#[blank(547, 115)]
#[blank(748, 2)]
pub struct Sub1099Patr {
    #[field(543, 1, Text, validate = rules::second_tin_notice)]
    pub second_tin_notice: String,
    #[field(546, 1, Text, validate = rules::one_indicator)]
    pub fatca_filing_requirement_indicator: String,
    #[field(662, 60, Text)]
    pub special_data_entries: String,
    #[field(722, 12, ZeroPaddedNumeric)]
    pub state_income_tax_withheld: i64,
    #[field(734, 12, ZeroPaddedNumeric)]
    pub local_income_tax_withheld: i64,
    #[field(746, 2, ZeroPaddedNumeric, validate = rules::participating_state_or_blank)]
    pub combined_federal_state_code: i64,
}
