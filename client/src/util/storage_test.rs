use super::*;

#[test]
fn report_flags_failed_remove() {
    assert!(!report::<()>(Err(()), "remove", "token"));
}

#[test]
fn report_passes_success_through() {
    assert!(report::<()>(Ok(()), "write", "token"));
}

#[test]
fn server_side_store_is_empty_and_clear_is_harmless() {
    let store = LocalStorageStore::new("token");
    store.save(&Token::new("T1"));
    store.clear();
    assert_eq!(store.load(), None);
}
