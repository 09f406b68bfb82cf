use super::*;
use chrono::TimeZone;

fn values() -> ClaimValues {
    ClaimValues {
        claim_no: "CLM-001".to_string(),
        customer_id: "CUS-42".to_string(),
        claim_type: Some(ClaimType::Health),
        amount: "1500.50".to_string(),
        nominee: "Jane Doe".to_string(),
        date: NaiveDate::from_ymd_opt(2026, 3, 9),
        bank_account_no: "12345678".to_string(),
        name_of_claimant: "John Doe".to_string(),
    }
}

fn signature() -> SignatureImage {
    SignatureImage {
        data_uri: "data:image/png;base64,AAAA".to_string(),
        width: 600,
        height: 150,
    }
}

#[test]
fn payload_json_shape() {
    let at = Utc.with_ymd_and_hms(2026, 10, 18, 9, 30, 0).unwrap();
    let payload = ClaimPayload::build(&values(), &signature(), at).unwrap();
    let json = serde_json::to_value(&payload).unwrap();

    assert_eq!(json["claimNo"], "CLM-001");
    assert_eq!(json["customerId"], "CUS-42");
    assert_eq!(json["claimType"], "health");
    assert_eq!(json["amount"], 1500.5);
    assert_eq!(json["date"], "2026-03-09");
    assert_eq!(json["bankAccountNo"], "12345678");
    assert_eq!(json["nameOfClaimant"], "John Doe");
    assert_eq!(json["signature"], "data:image/png;base64,AAAA");
    assert_eq!(json["submittedAt"], "2026-10-18T09:30:00.000Z");
}

#[test]
fn build_refuses_incomplete_values() {
    let at = Utc.with_ymd_and_hms(2026, 10, 18, 9, 30, 0).unwrap();
    let mut v = values();
    v.claim_type = None;
    assert!(ClaimPayload::build(&v, &signature(), at).is_err());

    let mut v = values();
    v.amount = "lots".to_string();
    assert!(ClaimPayload::build(&v, &signature(), at).is_err());
}

#[test]
fn values_parse_from_camel_case_json() {
    let v = ClaimValues::from_json_str(
        r#"{ "claimNo": "CLM-001", "claimType": "vehicle", "date": "2026-01-02", "amount": "10" }"#,
    )
    .unwrap();
    assert_eq!(v.claim_no, "CLM-001");
    assert_eq!(v.claim_type, Some(ClaimType::Vehicle));
    assert_eq!(v.date, NaiveDate::from_ymd_opt(2026, 1, 2));
    assert_eq!(v.nominee, "");
    assert!(ClaimValues::from_json_str(r#"{ "date": "02/01/2026" }"#).is_err());
}

#[test]
fn text_accessors_cover_text_fields_only() {
    let mut v = values();
    for f in ClaimField::TEXT {
        assert!(v.text(f).is_some());
        assert!(v.text_mut(f).is_some());
    }
    assert!(v.text(ClaimField::Date).is_none());
    assert!(v.text_mut(ClaimField::Signature).is_none());
}

#[test]
fn submissions_describe_their_endpoint() {
    let at = Utc.with_ymd_and_hms(2026, 10, 18, 9, 30, 0).unwrap();
    let manual = ClaimSubmission::Manual(ClaimPayload::build(&values(), &signature(), at).unwrap());
    assert_eq!(manual.endpoint(), "/api/claims");
    let d = manual.describe().unwrap();
    assert_eq!(d["endpoint"], "/api/claims");
    assert_eq!(d["body"]["claimNo"], "CLM-001");

    let pdf = ClaimSubmission::Pdf(PdfAttachment {
        file_name: "claim.pdf".to_string(),
        bytes: vec![0; 5],
    });
    assert_eq!(pdf.endpoint(), "/extract-claim");
    let d = pdf.describe().unwrap();
    assert_eq!(d["file"]["name"], "claim.pdf");
    assert_eq!(d["file"]["bytes"], 5);
}
