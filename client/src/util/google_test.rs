use super::*;

#[test]
fn credential_from_detail_trims() {
    assert_eq!(credential_from_detail(Some("  tok  ".to_owned())), Some("tok".to_owned()));
}

#[test]
fn credential_from_detail_rejects_blank_and_missing() {
    assert_eq!(credential_from_detail(Some("   ".to_owned())), None);
    assert_eq!(credential_from_detail(None), None);
}
