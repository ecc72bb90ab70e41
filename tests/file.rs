mod common;

use irs_fire::{DecodeError, File, TypeOfReturn, ValidationError, avec};

#[test]
fn decode_slice() {
    let raw = common::ascii("file");
    let file = avec::decode_slice(&raw).unwrap();

    assert_eq!(file.transmitter().transmitter_control_code, "12ABC");
    assert_eq!(file.payment_persons().len(), 2);
    assert_eq!(
        file.payment_persons()[1].return_type(),
        Some(TypeOfReturn::Form1099Int)
    );
    assert_eq!(file.end_transmitter().total_number_of_payees, 3);

    file.validate().unwrap();
    assert_eq!(common::text(&file.ascii()), common::text(&raw));
}

#[test]
fn decode_reader() {
    let mut reader = std::fs::File::open("fixtures/file.ascii").unwrap();
    let file = avec::decode_reader(&mut reader).unwrap();

    assert_eq!(file, File::parse(&common::ascii("file")).unwrap());
}

#[test]
fn json_matches_ascii() {
    let file = File::from_json(&common::json_str("file")).unwrap();

    file.validate().unwrap();
    assert_eq!(common::text(&file.ascii()), common::text(&common::ascii("file")));
    assert_eq!(file, File::parse(&common::ascii("file")).unwrap());

    let json = file.to_json().unwrap();
    assert_eq!(File::from_json(&json).unwrap(), file);
}

#[test]
fn trailing_data_is_rejected() {
    let mut raw = common::ascii("file");
    raw.extend(b"\r\n");

    assert!(matches!(
        avec::decode_slice(&raw),
        Err(avec::Error::TrailingData(2))
    ));
    assert!(matches!(
        avec::decode_reader(&mut raw.as_slice()),
        Err(avec::Error::TrailingData(2))
    ));

    raw.truncate(raw.len() - 2);
    raw.extend(common::ascii("records/end_transmitter"));

    assert!(matches!(
        avec::decode_reader(&mut raw.as_slice()),
        Err(avec::Error::TrailingData(750))
    ));
}

#[test]
fn truncated_file_is_rejected() {
    let raw = common::ascii("file");

    for r in [&raw[..raw.len() - 1], &raw[..raw.len() - 750]] {
        let Err(avec::Error::Record { offset, source }) = avec::decode_slice(r) else {
            panic!("expected a record error");
        };

        assert_eq!(offset, 6750);
        assert!(matches!(source, DecodeError::RecordLength { .. }));

        let Err(avec::Error::Record { offset, .. }) = avec::decode_reader(&mut &r[..]) else {
            panic!("expected a record error");
        };

        assert_eq!(offset, 6750);
    }
}

#[test]
fn file_must_open_with_transmitter() {
    let raw = common::ascii("person");

    let Err(avec::Error::Record { offset, source }) = avec::decode_slice(&raw) else {
        panic!("expected a record error");
    };

    assert_eq!(offset, 0);
    assert_eq!(
        source,
        DecodeError::UnexpectedRecordType {
            expected: b"T",
            found: 'A'
        }
    );
}

#[test]
fn unknown_tag_is_rejected() {
    let mut raw = common::ascii("file");
    raw[0] = b'Z';

    for result in [avec::decode_slice(&raw), avec::decode_reader(&mut raw.as_slice())] {
        let Err(avec::Error::Record { offset, source }) = result else {
            panic!("expected a record error");
        };

        assert_eq!(offset, 0);
        assert_eq!(source, DecodeError::UnknownRecordType('Z'));
    }
}

#[test]
fn sequence_numbers_are_checked() {
    let mut json = common::json("file");
    json["payment_persons"][1]["payees"][0]["record_sequence_number"] = 9.into();

    let mut file = File::from_json(&json.to_string()).unwrap();
    assert_eq!(
        file.validate(),
        Err(ValidationError::SequenceNumber {
            expected: 8,
            found: 9
        })
    );

    file.renumber();
    file.validate().unwrap();
    assert_eq!(file, File::parse(&common::ascii("file")).unwrap());
}

#[test]
fn control_counts_are_checked() {
    let mut json = common::json("file");
    json["end_transmitter"]["number_of_a_records"] = 3.into();

    let file = File::from_json(&json.to_string()).unwrap();
    assert_eq!(
        file.validate(),
        Err(ValidationError::RecordCount {
            field: "number_of_a_records",
            declared: 3,
            found: 2
        })
    );

    let mut json = common::json("file");
    json["end_transmitter"]["total_number_of_payees"] = 4.into();

    let file = File::from_json(&json.to_string()).unwrap();
    assert_eq!(
        file.validate(),
        Err(ValidationError::RecordCount {
            field: "total_number_of_payees",
            declared: 4,
            found: 3
        })
    );
}
