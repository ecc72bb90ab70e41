mod common;

use irs_fire::{
    DecodeError, Record, RecordKind, TypeOfReturn, ValidationError,
    field::FieldError,
    layout::FixedWidth,
    records::{ARecord, BRecord, CRecord, FRecord, KRecord, PayeeForm, TRecord},
};

const CASES: &[(&str, RecordKind, Option<TypeOfReturn>)] = &[
    ("records/transmitter", RecordKind::Transmitter, None),
    ("records/payer", RecordKind::Payer, None),
    ("records/payee_misc", RecordKind::Payee, Some(TypeOfReturn::Form1099Misc)),
    ("records/payee_int", RecordKind::Payee, Some(TypeOfReturn::Form1099Int)),
    ("records/payee_oid", RecordKind::Payee, Some(TypeOfReturn::Form1099Oid)),
    ("records/payee_patr", RecordKind::Payee, Some(TypeOfReturn::Form1099Patr)),
    ("records/payee_btc", RecordKind::Payee, Some(TypeOfReturn::Form1097Btc)),
    ("records/end_payer", RecordKind::EndPayer, None),
    ("records/state", RecordKind::State, None),
    ("records/end_transmitter", RecordKind::EndTransmitter, None),
];

fn from_fixture(name: &str, kind: RecordKind, rt: Option<TypeOfReturn>) -> Record {
    Record::from_json(kind, common::json(name), rt).unwrap()
}

fn payer() -> ARecord {
    serde_json::from_value(common::json("records/payer")).unwrap()
}

#[test]
fn json_encodes_to_fixture() {
    for &(name, kind, rt) in CASES {
        let record = from_fixture(name, kind, rt);
        record.validate().unwrap();

        let ascii = record.ascii();
        assert_eq!(ascii.len(), irs_fire::RECORD_LENGTH, "{name}");
        assert_eq!(common::text(&ascii), common::text(&common::ascii(name)), "{name}");
    }
}

#[test]
fn fixture_decodes_to_json_record() {
    for &(name, kind, rt) in CASES {
        let raw = common::ascii(name);
        let record = Record::parse(&raw, rt).unwrap();

        assert_eq!(record.kind(), kind, "{name}");
        assert_eq!(record, from_fixture(name, kind, rt), "{name}");
        assert_eq!(record.ascii(), raw, "{name}");
    }
}

#[test]
fn json_round_trip() {
    for &(name, kind, rt) in CASES {
        let record = from_fixture(name, kind, rt);
        let again = Record::from_json(kind, record.to_json().unwrap(), rt).unwrap();
        assert_eq!(again, record, "{name}");
    }
}

#[test]
fn truncated_record_is_rejected() {
    for &(name, _, rt) in CASES {
        let raw = common::ascii(name);

        assert_eq!(
            Record::parse(&raw[..raw.len() - 1], rt),
            Err(DecodeError::RecordLength {
                expected: 750,
                found: 749
            }),
            "{name}"
        );
    }

    assert!(matches!(
        Record::parse(&[], None),
        Err(DecodeError::RecordLength { found: 0, .. })
    ));
}

#[test]
fn unknown_tag_is_rejected() {
    let mut raw = common::ascii("records/payer");
    raw[0] = b'X';

    assert_eq!(
        Record::parse(&raw, None),
        Err(DecodeError::UnknownRecordType('X'))
    );
}

#[test]
fn payee_requires_type_of_return() {
    let raw = common::ascii("records/payee_misc");

    assert_eq!(
        Record::parse(&raw, None),
        Err(DecodeError::UnknownRecordType('B'))
    );
    assert_eq!(
        Record::new(RecordKind::Payee, None),
        Err(DecodeError::UnknownRecordType('B'))
    );
}

#[test]
fn typed_record_checks_its_tag() {
    let raw = common::ascii("records/end_payer");
    let mut state = KRecord::default();

    assert_eq!(
        state.parse(&raw),
        Err(DecodeError::UnexpectedRecordType {
            expected: b"K",
            found: 'C'
        })
    );
}

#[test]
fn malformed_field_is_located() {
    let mut raw = common::ascii("records/payer");
    raw[19] = b'A'; // Last digit of the payer's TIN.

    let mut payer = ARecord::default();
    assert_eq!(
        payer.parse(&raw),
        Err(DecodeError::Field {
            field: "payer_tin",
            offset: 11,
            kind: FieldError::NotNumeric
        })
    );
}

#[test]
fn blank_required_field_fails_decode() {
    let mut raw = common::ascii("records/payer");
    raw[52..92].fill(b' ');

    let mut payer = ARecord::default();
    assert_eq!(
        payer.parse(&raw),
        Err(DecodeError::Field {
            field: "first_payer_name_line",
            offset: 52,
            kind: FieldError::Required
        })
    );
}

#[test]
fn empty_records_fail_validation() {
    let payment_year = Err(ValidationError::FieldRequired("payment_year"));

    assert_eq!(TRecord::default().validate(), payment_year);
    assert_eq!(ARecord::default().validate(), payment_year);
    assert_eq!(
        BRecord::new(TypeOfReturn::Form1099Oid).validate(),
        payment_year
    );
    assert_eq!(
        CRecord::default().validate(),
        Err(ValidationError::FieldRequired("number_of_payees"))
    );
    assert_eq!(
        KRecord::default().validate(),
        Err(ValidationError::FieldRequired("number_of_payees"))
    );
    assert_eq!(
        FRecord::default().validate(),
        Err(ValidationError::FieldRequired("number_of_a_records"))
    );
}

#[test]
fn first_invalid_field_is_reported() {
    let mut payer = payer();
    payer.payer_city.clear();
    payer.payer_tin.clear();

    assert_eq!(
        payer.validate(),
        Err(ValidationError::FieldRequired("payer_tin"))
    );
}

#[test]
fn business_rules() {
    let mut payer = payer();
    payer.type_of_return = "ZZ".into();
    assert_eq!(
        payer.validate(),
        Err(ValidationError::InvalidValue("type_of_return"))
    );

    let mut payer = self::payer();
    payer.transfer_agent_indicator = "2".into();
    assert_eq!(
        payer.validate(),
        Err(ValidationError::InvalidValue("transfer_agent_indicator"))
    );

    let mut state: KRecord = serde_json::from_value(common::json("records/state")).unwrap();
    state.combined_federal_state_code = 2;
    assert_eq!(
        state.validate(),
        Err(ValidationError::InvalidValue("combined_federal_state_code"))
    );

    let Record::Payee(mut payee) = from_fixture(
        "records/payee_misc",
        RecordKind::Payee,
        Some(TypeOfReturn::Form1099Misc),
    ) else {
        panic!("expected a payee record");
    };

    let PayeeForm::Misc(misc) = &mut payee.form else {
        panic!("expected a 1099-MISC payee");
    };

    misc.combined_federal_state_code = 0;
    payee.validate().unwrap();

    let PayeeForm::Misc(misc) = &mut payee.form else {
        unreachable!();
    };

    misc.combined_federal_state_code = 2;
    assert_eq!(
        payee.validate(),
        Err(ValidationError::InvalidValue("combined_federal_state_code"))
    );
}

#[test]
fn values_must_fit_their_fields() {
    let mut payer = payer();
    payer.payer_state = "ILL".into();
    assert_eq!(
        payer.validate(),
        Err(ValidationError::InvalidValue("payer_state"))
    );

    let mut payer = self::payer();
    payer.first_payer_name_line = "Acme Payroll".into();
    assert_eq!(
        payer.validate(),
        Err(ValidationError::Field {
            field: "first_payer_name_line",
            kind: FieldError::NonAlphanumeric
        })
    );

    let mut payer = self::payer();
    payer.payment_year = 1850;
    assert_eq!(
        payer.validate(),
        Err(ValidationError::Field {
            field: "payment_year",
            kind: FieldError::InvalidDate
        })
    );
}

#[test]
fn payee_layout_follows_type_of_return() {
    // A 1099-MISC payee read with the 1099-INT layout decodes, but differently.
    let raw = common::ascii("records/payee_misc");
    let Record::Payee(int) = Record::parse(&raw, Some(TypeOfReturn::Form1099Int)).unwrap() else {
        panic!("expected a payee record");
    };

    let PayeeForm::Int(form) = &int.form else {
        panic!("expected a 1099-INT payee");
    };

    assert_eq!(form.foreign_country_or_us_possession, "1");
    assert_ne!(
        Record::Payee(int.clone()),
        Record::parse(&raw, Some(TypeOfReturn::Form1099Misc)).unwrap()
    );

    // The 1097-BTC layout requires an issuer indicator, blank in 1099-MISC.
    assert_eq!(
        Record::parse(&raw, Some(TypeOfReturn::Form1097Btc)),
        Err(DecodeError::Field {
            field: "issuer_indicator",
            offset: 544,
            kind: FieldError::Required
        })
    );
}

#[test]
fn skipped_fields_encode_as_zero() {
    let end: FRecord = serde_json::from_value(common::json("records/end_transmitter")).unwrap();
    let ascii = end.ascii();

    assert_eq!(&ascii[9..30], "0".repeat(21).as_bytes());
    let json = serde_json::to_value(&end).unwrap();
    assert!(json.get("zero").is_none());
}

#[test]
fn kinds_dispatch_by_tag_and_key() {
    for kind in RecordKind::ALL {
        assert_eq!(RecordKind::from_tag(kind.tag()), Ok(kind));
        assert_eq!(RecordKind::from_key(kind.key()), Some(kind));
    }

    assert_eq!(RecordKind::from_key("payee"), None);

    for rt in TypeOfReturn::ALL {
        assert_eq!(TypeOfReturn::from_code(rt.code()), Some(rt));
    }

    assert_eq!(TypeOfReturn::from_code("BT"), Some(TypeOfReturn::Form1097Btc));
    assert_eq!(TypeOfReturn::from_code("A "), Some(TypeOfReturn::Form1099Misc));
    assert_eq!(TypeOfReturn::from_code("B"), None);
}

#[test]
fn sequence_number_of_any_record() {
    for &(name, kind, rt) in CASES {
        let mut record = Record::new(kind, rt).unwrap();
        assert_eq!(record.sequence_number(), 0);

        record.set_sequence_number(42);
        assert_eq!(record.sequence_number(), 42, "{name}");
        assert_eq!(&record.ascii()[499..507], b"00000042", "{name}");
    }
}

#[test]
fn padded_values_fail_validation() {
    let mut payer = payer();
    payer.payer_city = "CHICAGO ".into();
    assert_eq!(
        payer.validate(),
        Err(ValidationError::InvalidValue("payer_city"))
    );

    let mut payer = self::payer();
    payer.payer_zip_code = "60601 ".into();
    assert_eq!(
        payer.validate(),
        Err(ValidationError::InvalidValue("payer_zip_code"))
    );

    let mut payer = self::payer();
    payer.payer_city = " ".into();
    assert_eq!(
        payer.validate(),
        Err(ValidationError::FieldRequired("payer_city"))
    );

    let mut payer = self::payer();
    payer.second_payer_name_line = "  ".into();
    assert_eq!(
        payer.validate(),
        Err(ValidationError::InvalidValue("second_payer_name_line"))
    );

    let mut payer = self::payer();
    payer.payer_city = "CHICAGO".into();
    payer.validate().unwrap();

    let mut decoded = ARecord::default();
    decoded.parse(&payer.ascii()).unwrap();
    assert_eq!(decoded, payer);
}

#[test]
fn oversized_number_is_located() {
    let mut raw = common::ascii("records/end_transmitter");
    raw[9..30].fill(b'9');

    let mut end = FRecord::default();
    assert_eq!(
        end.parse(&raw),
        Err(DecodeError::Field {
            field: "zero",
            offset: 9,
            kind: FieldError::Overflow
        })
    );
}
