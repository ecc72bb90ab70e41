//! Format constants and code tables shared by every record layout.

/// Length in bytes of every record in a FIRE file.
pub const RECORD_LENGTH: usize = 750;

/// Fill byte for unused text positions.
pub const BLANK: u8 = b' ';

/// Fill byte for unused zero-padded numeric positions.
pub const ZERO: u8 = b'0';

/// Offset of the first form-specific byte of a payee record.
pub const PAYEE_FORM_OFFSET: usize = 543;

/// A payer's type of return, selecting the layout of its payee records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeOfReturn {
    Form1099Misc,
    Form1099Int,
    Form1099Oid,
    Form1099Patr,
    Form1097Btc,
}

impl TypeOfReturn {
    pub const ALL: [Self; 5] = [
        Self::Form1099Misc,
        Self::Form1099Int,
        Self::Form1099Oid,
        Self::Form1099Patr,
        Self::Form1097Btc,
    ];

    /// The code entered in the payer record's type of return field.
    pub fn code(self) -> &'static str {
        match self {
            Self::Form1099Misc => "A",
            Self::Form1099Int => "6",
            Self::Form1099Oid => "D",
            Self::Form1099Patr => "7",
            Self::Form1097Btc => "BT",
        }
    }

    /// Look up a type of return by its code. Trailing blanks are ignored.
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim_end();
        Self::ALL.into_iter().find(|t| t.code() == code)
    }

    /// The form name, as printed by the IRS.
    pub fn form(self) -> &'static str {
        match self {
            Self::Form1099Misc => "1099-MISC",
            Self::Form1099Int => "1099-INT",
            Self::Form1099Oid => "1099-OID",
            Self::Form1099Patr => "1099-PATR",
            Self::Form1097Btc => "1097-BTC",
        }
    }
}

/// States participating in the Combined Federal/State Filing program, by
/// code.
pub const PARTICIPATING_STATES: [(i64, &str); 33] = [
    (1, "AL"),
    (4, "AZ"),
    (5, "AR"),
    (6, "CA"),
    (7, "CO"),
    (8, "CT"),
    (10, "DE"),
    (13, "GA"),
    (15, "HI"),
    (16, "ID"),
    (18, "IN"),
    (19, "IA"),
    (20, "KS"),
    (22, "LA"),
    (23, "ME"),
    (24, "MD"),
    (25, "MA"),
    (26, "MI"),
    (27, "MN"),
    (28, "MS"),
    (29, "MO"),
    (30, "MT"),
    (31, "NE"),
    (34, "NJ"),
    (35, "NM"),
    (37, "NC"),
    (38, "ND"),
    (39, "OH"),
    (40, "OK"),
    (41, "OR"),
    (45, "SC"),
    (51, "VA"),
    (55, "WI"),
];

/// Whether a code names a state participating in the Combined
/// Federal/State Filing program.
pub fn is_participating_state(code: i64) -> bool {
    PARTICIPATING_STATES.iter().any(|(c, _)| *c == code)
}
