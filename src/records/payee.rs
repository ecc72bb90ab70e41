use serde::{Deserialize, Serialize};

use crate::{
    Fields,
    config::TypeOfReturn,
    engine::{DecodeError, ValidationError},
    layout::FixedWidth,
};

use super::{forms::PayeeForm, rules};

/// The fields shared by payee records of every form, up to
/// [`PAYEE_FORM_OFFSET`](crate::config::PAYEE_FORM_OFFSET).
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize, Fields)]
#[serde(default)]
#[record('B')]
#[blank(44, 10)]
#[blank(367, 40)]
#[blank(458, 41)]
#[blank(507, 36)]
pub struct Payee {
    #[field(1, 4, Year, required)]
    pub payment_year: i64,
    #[field(5, 1, Text, validate = rules::corrected_return)]
    pub corrected_return_indicator: String,
    #[field(6, 4, Text)]
    pub name_control: String,
    #[field(10, 1, Text, validate = rules::type_of_tin)]
    pub type_of_tin: String,
    #[field(11, 9, Numeric)]
    pub payee_tin: String,
    #[field(20, 20, Text)]
    pub payer_account_number: String,
    #[field(40, 4, Text)]
    pub payer_office_code: String,
    #[field(54, 12, ZeroPaddedNumeric)]
    pub payment_amount_1: i64,
    #[field(66, 12, ZeroPaddedNumeric)]
    pub payment_amount_2: i64,
    #[field(78, 12, ZeroPaddedNumeric)]
    pub payment_amount_3: i64,
    #[field(90, 12, ZeroPaddedNumeric)]
    pub payment_amount_4: i64,
    #[field(102, 12, ZeroPaddedNumeric)]
    pub payment_amount_5: i64,
    #[field(114, 12, ZeroPaddedNumeric)]
    pub payment_amount_6: i64,
    #[field(126, 12, ZeroPaddedNumeric)]
    pub payment_amount_7: i64,
    #[field(138, 12, ZeroPaddedNumeric)]
    pub payment_amount_8: i64,
    #[field(150, 12, ZeroPaddedNumeric)]
    pub payment_amount_9: i64,
    #[field(162, 12, ZeroPaddedNumeric)]
    pub payment_amount_a: i64,
    #[field(174, 12, ZeroPaddedNumeric)]
    pub payment_amount_b: i64,
    #[field(186, 12, ZeroPaddedNumeric)]
    pub payment_amount_c: i64,
    #[field(198, 12, ZeroPaddedNumeric)]
    pub payment_amount_d: i64,
    #[field(210, 12, ZeroPaddedNumeric)]
    pub payment_amount_e: i64,
    #[field(222, 12, ZeroPaddedNumeric)]
    pub payment_amount_f: i64,
    #[field(234, 12, ZeroPaddedNumeric)]
    pub payment_amount_g: i64,
    #[field(246, 1, Text, validate = rules::one_indicator)]
    pub foreign_country_indicator: String,
    #[field(247, 40, Text, required)]
    pub first_payee_name_line: String,
    #[field(287, 40, Text)]
    pub second_payee_name_line: String,
    #[field(327, 40, Text, required)]
    pub payee_mailing_address: String,
    #[field(407, 40, Text, required)]
    pub payee_city: String,
    #[field(447, 2, Text, required)]
    pub payee_state: String,
    #[field(449, 9, Numeric, required)]
    pub payee_zip_code: String,
    #[field(499, 8, ZeroPaddedNumeric, required)]
    pub record_sequence_number: i64,
}

/// A payee ("B") record: the common payee fields, followed by the fields of
/// the form selected by the payer's type of return.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BRecord {
    #[serde(flatten)]
    pub payee: Payee,
    #[serde(flatten)]
    pub form: PayeeForm,
}

impl BRecord {
    /// An empty payee record for a type of return.
    pub fn new(kind: TypeOfReturn) -> Self {
        Self {
            payee: Payee::default(),
            form: PayeeForm::new(kind),
        }
    }

    pub fn return_type(&self) -> TypeOfReturn {
        self.form.return_type()
    }

    /// Populate this record from a complete record's bytes, reading the form
    /// fields with the layout already selected.
    pub fn parse(&mut self, raw: &[u8]) -> Result<(), DecodeError> {
        self.payee.parse(raw)?;
        self.form.parse(raw)
    }

    pub fn ascii(&self) -> Vec<u8> {
        let mut buf = self.payee.ascii();
        self.form.encode_into(&mut buf);
        buf
    }

    /// Validate the common fields, then the form fields.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.payee.validate()?;
        self.form.validate()
    }

    /// Build a payee record of a known type of return from a JSON object.
    pub fn from_json(
        value: serde_json::Value,
        kind: TypeOfReturn,
    ) -> Result<Self, serde_json::Error> {
        Ok(Self {
            payee: Payee::deserialize(&value)?,
            form: PayeeForm::from_json(value, kind)?,
        })
    }
}
