use serde::{Deserialize, Serialize};

use crate::{Fields, config::TypeOfReturn};

use super::rules;

/// The payer ("A") record, opening a payment group. Its type of return
/// selects the layout of every payee record in the group.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize, Fields)]
#[serde(default)]
#[record('A')]
#[blank(6, 5)]
#[blank(45, 6)]
#[blank(239, 260)]
#[blank(507, 243)]
pub struct ARecord {
    #[field(1, 4, Year, required)]
    pub payment_year: i64,
    #[field(5, 1, Text, validate = rules::one_indicator)]
    pub combined_federal_state: String,
    #[field(11, 9, Numeric, required)]
    pub payer_tin: String,
    #[field(20, 4, Text)]
    pub payer_name_control: String,
    #[field(24, 1, Text, validate = rules::one_indicator)]
    pub last_filing_indicator: String,
    #[field(25, 2, Text, required, validate = rules::type_of_return)]
    pub type_of_return: String,
    #[field(27, 18, Text, required)]
    pub amount_codes: String,
    #[field(51, 1, Text, validate = rules::one_indicator)]
    pub foreign_entity_indicator: String,
    #[field(52, 40, Text, required)]
    pub first_payer_name_line: String,
    #[field(92, 40, Text)]
    pub second_payer_name_line: String,
    #[field(132, 1, Text, required, validate = rules::transfer_agent)]
    pub transfer_agent_indicator: String,
    #[field(133, 40, Text, required)]
    pub payer_shipping_address: String,
    #[field(173, 40, Text, required)]
    pub payer_city: String,
    #[field(213, 2, Text, required)]
    pub payer_state: String,
    #[field(215, 9, Numeric, required)]
    pub payer_zip_code: String,
    #[field(224, 15, Phone)]
    pub payer_telephone_number: String,
    #[field(499, 8, ZeroPaddedNumeric, required)]
    pub record_sequence_number: i64,
}

impl ARecord {
    /// The type of return, if its code is known.
    pub fn return_type(&self) -> Option<TypeOfReturn> {
        TypeOfReturn::from_code(&self.type_of_return)
    }
}
