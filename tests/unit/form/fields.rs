use super::*;

#[test]
fn field_names_round_trip_through_from_str() {
    for f in ClaimField::ALL {
        assert_eq!(f.as_str().parse::<ClaimField>().unwrap(), f);
    }
    assert!("claim_no".parse::<ClaimField>().is_err());
}

#[test]
fn field_serde_uses_wire_names() {
    assert_eq!(
        serde_json::to_string(&ClaimField::BankAccountNo).unwrap(),
        "\"bankAccountNo\""
    );
    assert_eq!(
        serde_json::to_string(&ClaimField::NameOfClaimant).unwrap(),
        "\"nameOfClaimant\""
    );
}

#[test]
fn text_fields_exclude_typed_inputs() {
    assert!(ClaimField::Amount.is_text());
    assert!(!ClaimField::ClaimType.is_text());
    assert!(!ClaimField::Date.is_text());
    assert!(!ClaimField::Signature.is_text());
}

#[test]
fn claim_types_parse_case_insensitively() {
    assert_eq!("Vehicle".parse::<ClaimType>().unwrap(), ClaimType::Vehicle);
    assert_eq!(" life ".parse::<ClaimType>().unwrap(), ClaimType::Life);
    assert!("pet".parse::<ClaimType>().is_err());
    assert_eq!(
        serde_json::to_string(&ClaimType::Property).unwrap(),
        "\"property\""
    );
    assert_eq!(ClaimType::Health.label(), "Health");
}

#[test]
fn manual_mode_is_default() {
    assert_eq!(FormMode::default(), FormMode::Manual);
}
