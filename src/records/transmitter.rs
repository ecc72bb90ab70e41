use serde::{Deserialize, Serialize};

use crate::Fields;

use super::rules;

/// The transmitter ("T") record, identifying the entity transmitting a file.
/// It is the first record of every file.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize, Fields)]
#[serde(default)]
#[record('T')]
#[blank(20, 7)]
#[blank(280, 15)]
#[blank(408, 91)]
#[blank(507, 10)]
#[blank(704, 35)]
#[blank(740, 10)]
pub struct TRecord {
    #[field(1, 4, Year, required)]
    pub payment_year: i64,
    #[field(5, 1, Text, validate = rules::prior_year_data)]
    pub prior_year_data_indicator: String,
    #[field(6, 9, Numeric, required)]
    pub transmitter_tin: String,
    #[field(15, 5, Text, required)]
    pub transmitter_control_code: String,
    #[field(27, 1, Text, validate = rules::test_file)]
    pub test_file_indicator: String,
    #[field(28, 1, Text, validate = rules::one_indicator)]
    pub foreign_entity_indicator: String,
    #[field(29, 40, Text, required)]
    pub transmitter_name: String,
    #[field(69, 40, Text)]
    pub transmitter_name_continuation: String,
    #[field(109, 40, Text, required)]
    pub company_name: String,
    #[field(149, 40, Text)]
    pub company_name_continuation: String,
    #[field(189, 40, Text, required)]
    pub company_mailing_address: String,
    #[field(229, 40, Text, required)]
    pub company_city: String,
    #[field(269, 2, Text, required)]
    pub company_state: String,
    #[field(271, 9, Numeric, required)]
    pub company_zip_code: String,
    #[field(295, 8, ZeroPaddedNumeric)]
    pub total_number_of_payees: i64,
    #[field(303, 40, Text, required)]
    pub contact_name: String,
    #[field(343, 15, Phone, required)]
    pub contact_telephone_number: String,
    #[field(358, 50, Email)]
    pub contact_email: String,
    #[field(499, 8, ZeroPaddedNumeric, required)]
    pub record_sequence_number: i64,
    #[field(517, 1, Text, required, validate = rules::vendor)]
    pub vendor_indicator: String,
    #[field(518, 40, Text)]
    pub vendor_name: String,
    #[field(558, 40, Text)]
    pub vendor_mailing_address: String,
    #[field(598, 40, Text)]
    pub vendor_city: String,
    #[field(638, 2, Text)]
    pub vendor_state: String,
    #[field(640, 9, Numeric)]
    pub vendor_zip_code: String,
    #[field(649, 40, Text)]
    pub vendor_contact_name: String,
    #[field(689, 15, Phone)]
    pub vendor_contact_phone_number: String,
    #[field(739, 1, Text, validate = rules::one_indicator)]
    pub vendor_foreign_entity_indicator: String,
}
