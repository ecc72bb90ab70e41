use serde::{Deserialize, Serialize};

use crate::Fields;

use super::rules;

/// The state totals ("K") record, summarizing a payment group for one state
/// participating in the Combined Federal/State Filing program.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize, Fields)]
#[serde(default)]
#[record('K')]
#[blank(9, 6)]
#[blank(303, 196)]
#[blank(507, 199)]
#[blank(742, 4)]
#[blank(748, 2)]
pub struct KRecord {
    #[field(1, 8, ZeroPaddedNumeric, required)]
    pub number_of_payees: i64,
    #[field(15, 18, ZeroPaddedNumeric)]
    pub control_total_1: i64,
    #[field(33, 18, ZeroPaddedNumeric)]
    pub control_total_2: i64,
    #[field(51, 18, ZeroPaddedNumeric)]
    pub control_total_3: i64,
    #[field(69, 18, ZeroPaddedNumeric)]
    pub control_total_4: i64,
    #[field(87, 18, ZeroPaddedNumeric)]
    pub control_total_5: i64,
    #[field(105, 18, ZeroPaddedNumeric)]
    pub control_total_6: i64,
    #[field(123, 18, ZeroPaddedNumeric)]
    pub control_total_7: i64,
    #[field(141, 18, ZeroPaddedNumeric)]
    pub control_total_8: i64,
    #[field(159, 18, ZeroPaddedNumeric)]
    pub control_total_9: i64,
    #[field(177, 18, ZeroPaddedNumeric)]
    pub control_total_a: i64,
    #[field(195, 18, ZeroPaddedNumeric)]
    pub control_total_b: i64,
    #[field(213, 18, ZeroPaddedNumeric)]
    pub control_total_c: i64,
    #[field(231, 18, ZeroPaddedNumeric)]
    pub control_total_d: i64,
    #[field(249, 18, ZeroPaddedNumeric)]
    pub control_total_e: i64,
    #[field(267, 18, ZeroPaddedNumeric)]
    pub control_total_f: i64,
    #[field(285, 18, ZeroPaddedNumeric)]
    pub control_total_g: i64,
    #[field(499, 8, ZeroPaddedNumeric, required)]
    pub record_sequence_number: i64,
    #[field(706, 18, ZeroPaddedNumeric)]
    pub state_income_tax_withheld_total: i64,
    #[field(724, 18, ZeroPaddedNumeric)]
    pub local_income_tax_withheld_total: i64,
    #[field(746, 2, ZeroPaddedNumeric, required, validate = rules::participating_state)]
    pub combined_federal_state_code: i64,
}
