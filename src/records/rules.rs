//! Business rules registered on record fields.
//!
//! Every rule receives the field's current value, including blank values, so
//! rules for optional fields accept blank text or zero.

use crate::{
    config::{TypeOfReturn, is_participating_state},
    field::Value,
};

/// Whether text is blank or one of the permitted codes.
fn blank_or_one_of(value: &Value, codes: &[&str]) -> bool {
    match value {
        Value::Text(s) => s.is_empty() || codes.contains(&s.as_str()),
        Value::Number(_) => false,
    }
}

pub fn prior_year_data(value: &Value) -> bool {
    blank_or_one_of(value, &["P"])
}

pub fn test_file(value: &Value) -> bool {
    blank_or_one_of(value, &["T"])
}

/// Foreign entity, combined federal/state, last filing, direct sales, and
/// FATCA filing requirement indicators.
pub fn one_indicator(value: &Value) -> bool {
    blank_or_one_of(value, &["1"])
}

pub fn vendor(value: &Value) -> bool {
    blank_or_one_of(value, &["V", "I"])
}

pub fn corrected_return(value: &Value) -> bool {
    blank_or_one_of(value, &["G", "C"])
}

pub fn type_of_tin(value: &Value) -> bool {
    blank_or_one_of(value, &["1", "2"])
}

pub fn second_tin_notice(value: &Value) -> bool {
    blank_or_one_of(value, &["2"])
}

pub fn transfer_agent(value: &Value) -> bool {
    blank_or_one_of(value, &["0", "1"])
}

pub fn issuer(value: &Value) -> bool {
    blank_or_one_of(value, &["1", "2"])
}

pub fn btc_code(value: &Value) -> bool {
    blank_or_one_of(value, &["A", "C", "O"])
}

/// The payer's type of return must be a known code.
pub fn type_of_return(value: &Value) -> bool {
    value
        .as_text()
        .is_some_and(|code| TypeOfReturn::from_code(code).is_some())
}

pub fn participating_state(value: &Value) -> bool {
    value.as_number().is_some_and(is_participating_state)
}

pub fn participating_state_or_blank(value: &Value) -> bool {
    value.as_number() == Some(0) || participating_state(value)
}
