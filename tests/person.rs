mod common;

use irs_fire::{
    DecodeError, PaymentPerson, TypeOfReturn, ValidationError,
    avec::{self, slice::decode_person},
    document,
    field::FieldError,
    records::{ARecord, BRecord, CRecord, PayeeForm},
};

#[test]
fn decode_group() {
    let raw = common::ascii("person");
    let person = PaymentPerson::parse(&raw).unwrap();

    assert_eq!(person.return_type(), Some(TypeOfReturn::Form1099Misc));
    assert_eq!(person.payees().len(), 2);
    assert_eq!(person.states().len(), 1);
    assert_eq!(person.record_count(), 5);

    for payee in person.payees() {
        assert!(matches!(payee.form, PayeeForm::Misc(_)));
    }

    assert_eq!(person.payees()[1].payee.first_payee_name_line, "JOHN SMITH 2");
    assert_eq!(person.end_payer().number_of_payees, 2);
    assert_eq!(person.states()[0].combined_federal_state_code, 6);

    person.validate().unwrap();
    assert_eq!(common::text(&person.ascii()), common::text(&raw));
}

#[test]
fn decode_group_without_payees() {
    let mut raw = common::ascii("records/payer");
    raw.extend(common::ascii("records/end_payer"));

    let person = PaymentPerson::parse(&raw).unwrap();

    assert!(person.payees().is_empty());
    assert!(person.states().is_empty());
    assert_eq!(person.ascii(), raw);
}

#[test]
fn group_ends_before_next_payer() {
    let group = common::ascii("person");
    let mut raw = group.clone();
    raw.extend(common::ascii("records/payer"));

    let (person, n) = decode_person(&raw).unwrap();
    assert_eq!(n, group.len());
    assert_eq!(person.states().len(), 1);

    assert!(matches!(
        PaymentPerson::parse(&raw),
        Err(avec::Error::TrailingData(750))
    ));
}

#[test]
fn json_matches_ascii() {
    let person = PaymentPerson::from_json(&common::json_str("person")).unwrap();

    person.validate().unwrap();
    assert_eq!(common::text(&person.ascii()), common::text(&common::ascii("person")));
    assert_eq!(person, PaymentPerson::parse(&common::ascii("person")).unwrap());
}

#[test]
fn json_key_order_is_irrelevant() {
    let person = PaymentPerson::from_json(&common::json_str("person")).unwrap();
    let reordered = PaymentPerson::from_json(&common::json_str("person_reordered")).unwrap();

    assert_eq!(person, reordered);
}

#[test]
fn json_round_trip() {
    let person = PaymentPerson::parse(&common::ascii("person")).unwrap();
    let json = person.to_json().unwrap();

    assert_eq!(PaymentPerson::from_json(&json).unwrap(), person);
}

#[test]
fn json_payees_need_known_type_of_return() {
    let mut json = common::json("person");
    json["payer"]["type_of_return"] = "ZZ".into();

    let err = PaymentPerson::from_json(&json.to_string()).unwrap_err();
    assert!(matches!(err, document::Error::Json(_)));
    assert!(err.to_string().contains("Unknown type of return `ZZ`"));

    // Without payees, the type of return is left to validation.
    json["payees"] = serde_json::json!([]);
    json["end_payer"]["number_of_payees"] = 0.into();
    let person = PaymentPerson::from_json(&json.to_string()).unwrap();
    assert_eq!(
        person.validate(),
        Err(ValidationError::InvalidValue("type_of_return"))
    );
}

#[test]
fn truncated_group_is_rejected() {
    let raw = common::ascii("person");

    let Err(avec::Error::Record { offset, source }) = PaymentPerson::parse(&raw[..raw.len() - 1])
    else {
        panic!("expected a record error");
    };

    assert_eq!(offset, 3000);
    assert_eq!(
        source,
        DecodeError::RecordLength {
            expected: 750,
            found: 749
        }
    );
}

#[test]
fn missing_end_payer_is_rejected() {
    let raw = common::ascii("person");

    let Err(avec::Error::Record { offset, source }) = PaymentPerson::parse(&raw[..2250]) else {
        panic!("expected a record error");
    };

    assert_eq!(offset, 2250);
    assert!(matches!(source, DecodeError::RecordLength { found: 0, .. }));
}

#[test]
fn unexpected_record_is_rejected() {
    let mut raw = common::ascii("records/payer");
    raw.extend(common::ascii("records/end_transmitter"));

    let Err(avec::Error::Record { offset, source }) = PaymentPerson::parse(&raw) else {
        panic!("expected a record error");
    };

    assert_eq!(offset, 750);
    assert_eq!(
        source,
        DecodeError::UnexpectedRecordType {
            expected: b"BC",
            found: 'F'
        }
    );
}

#[test]
fn unknown_tag_opening_group_is_rejected() {
    let mut raw = common::ascii("person");
    raw[0] = b'Z';

    let Err(avec::Error::Record { offset, source }) = PaymentPerson::parse(&raw) else {
        panic!("expected a record error");
    };

    assert_eq!(offset, 0);
    assert_eq!(source, DecodeError::UnknownRecordType('Z'));

    // Known kinds out of place are still unexpected.
    let Err(avec::Error::Record { source, .. }) =
        PaymentPerson::parse(&common::ascii("records/end_payer"))
    else {
        panic!("expected a record error");
    };

    assert_eq!(
        source,
        DecodeError::UnexpectedRecordType {
            expected: b"A",
            found: 'C'
        }
    );
}

/// Overwrite the payer's type of return in a group's bytes.
fn with_type_of_return(code: &[u8; 2]) -> Vec<u8> {
    let mut raw = common::ascii("person");
    raw[25..27].copy_from_slice(code);
    raw
}

#[test]
fn type_of_return_selects_payee_layout() {
    let int = PaymentPerson::parse(&with_type_of_return(b"6 ")).unwrap();
    let misc = PaymentPerson::parse(&common::ascii("person")).unwrap();

    let PayeeForm::Int(form) = &int.payees()[0].form else {
        panic!("expected a 1099-INT payee");
    };

    assert_eq!(form.foreign_country_or_us_possession, "1");
    assert_eq!(int.payees()[0].payee, misc.payees()[0].payee);
    assert_ne!(int.payees()[0].form, misc.payees()[0].form);

    let Err(avec::Error::Record { offset, source }) =
        PaymentPerson::parse(&with_type_of_return(b"BT"))
    else {
        panic!("expected a record error");
    };

    assert_eq!(offset, 750);
    assert_eq!(
        source,
        DecodeError::Field {
            field: "issuer_indicator",
            offset: 544,
            kind: FieldError::Required
        }
    );
}

#[test]
fn unknown_type_of_return_rejects_payees() {
    let Err(avec::Error::Record { offset, source }) =
        PaymentPerson::parse(&with_type_of_return(b"ZZ"))
    else {
        panic!("expected a record error");
    };

    assert_eq!(offset, 750);
    assert_eq!(source, DecodeError::UnknownRecordType('B'));
}

#[test]
fn payees_must_match_payer() {
    let mut person = PaymentPerson::parse(&common::ascii("person")).unwrap();

    assert!(matches!(
        person.add_payee(BRecord::new(TypeOfReturn::Form1099Int)),
        Err(document::Error::FormMismatch {
            expected: "1099-MISC",
            found: "1099-INT"
        })
    ));

    let mut payer = person.payer().clone();
    payer.type_of_return = "6".into();
    assert!(matches!(
        person.set_payer(payer),
        Err(document::Error::PayeesPresent)
    ));

    let mut payer = person.payer().clone();
    payer.second_payer_name_line = "PAYROLL DIVISION".into();
    person.set_payer(payer).unwrap();

    let payee = person.payees()[0].clone();
    person.add_payee(payee).unwrap();
    assert_eq!(person.payees().len(), 3);
}

#[test]
fn payee_count_is_checked() {
    let mut person = PaymentPerson::parse(&common::ascii("person")).unwrap();

    let mut end_payer = person.end_payer().clone();
    end_payer.number_of_payees = 3;
    person.set_end_payer(end_payer);

    assert_eq!(
        person.validate(),
        Err(ValidationError::RecordCount {
            field: "number_of_payees",
            declared: 3,
            found: 2
        })
    );
}

#[test]
fn build_and_renumber() {
    let payer: ARecord = serde_json::from_value(common::json("records/payer")).unwrap();
    let end_payer: CRecord = serde_json::from_value(common::json("records/end_payer")).unwrap();

    let mut person = PaymentPerson::new(payer, end_payer);
    let source = PaymentPerson::parse(&common::ascii("person")).unwrap();

    for payee in source.payees() {
        person.add_payee(payee.clone()).unwrap();
    }

    for state in source.states() {
        person.add_state(state.clone());
    }

    assert_eq!(person.renumber(2), 7);
    assert_eq!(person.sequence_numbers().collect::<Vec<_>>(), [2, 3, 4, 5, 6]);
    assert_eq!(person, source);
}
