#![allow(clippy::unwrap_used)]

use cards::{CardExpirationMonth, CardExpirationYear, CardSecurityCode};
use masking::PeekInterface;

#[test]
fn test_card_security_code() {
    let valid_card_security_code = CardSecurityCode::try_from("012".to_string()).unwrap();
    let invalid_card_security_code = CardSecurityCode::try_from("12".to_string());

    assert_eq!(valid_card_security_code.peek().peek(), "012");
    assert!(invalid_card_security_code.is_err());
    assert!(CardSecurityCode::try_from("12a4".to_string()).is_err());

    let serialized = serde_json::to_string(&valid_card_security_code).unwrap();
    assert_eq!(serialized, r#""012""#);

    let deserialized = serde_json::from_str::<CardSecurityCode>(&serialized).unwrap();
    assert_eq!(deserialized.peek().peek(), "012");

    let invalid_deserialization = serde_json::from_str::<CardSecurityCode>(r#""12345""#);
    assert!(invalid_deserialization.is_err());

    assert_eq!(format!("{valid_card_security_code:?}"), "CardSecurityCode(*** alloc::string::String ***)");
}

#[test]
fn test_card_expiration_month() {
    let card_exp_month = CardExpirationMonth::try_from(12_u8).unwrap();
    let invalid_card_exp_month = CardExpirationMonth::try_from(13_u8);

    assert_eq!(*card_exp_month.peek().peek(), 12);
    assert_eq!(CardExpirationMonth::try_from(3_u8).unwrap().two_digits(), "03");
    assert!(invalid_card_exp_month.is_err());
    assert!(CardExpirationMonth::try_from(0_u8).is_err());

    let serialized = serde_json::to_string(&card_exp_month).unwrap();
    assert_eq!(serialized, "12");

    let deserialized = serde_json::from_str::<CardExpirationMonth>(&serialized).unwrap();
    assert_eq!(*deserialized.peek().peek(), 12);

    let invalid_deserialization = serde_json::from_str::<CardExpirationMonth>("13");
    assert!(invalid_deserialization.is_err());
}

#[test]
fn test_card_expiration_year() {
    let card_exp_year = CardExpirationYear::try_from(2034_u16).unwrap();

    assert_eq!(*card_exp_year.peek().peek(), 2034);
    assert_eq!(card_exp_year.four_digits(), "2034");
    assert_eq!(card_exp_year.two_digits(), "34");
    assert_eq!(CardExpirationYear::try_from(34_u16).unwrap().four_digits(), "2034");
    assert!(CardExpirationYear::try_from(123_u16).is_err());

    let serialized = serde_json::to_string(&card_exp_year).unwrap();
    assert_eq!(serialized, "2034");

    let deserialized = serde_json::from_str::<CardExpirationYear>(&serialized).unwrap();
    assert_eq!(*deserialized.peek().peek(), 2034);

    let invalid_deserialization = serde_json::from_str::<CardExpirationYear>("123");
    assert!(invalid_deserialization.is_err());
}
