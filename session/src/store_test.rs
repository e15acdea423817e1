use super::*;

#[test]
fn memory_store_starts_empty() {
    assert_eq!(MemoryStore::default().load(), None);
}

#[test]
fn memory_store_save_replaces_and_clear_empties() {
    let store = MemoryStore::with_token(Token::new("old"));
    store.save(&Token::new("new"));
    assert_eq!(store.load(), Some(Token::new("new")));
    store.clear();
    assert_eq!(store.load(), None);
    store.clear();
    assert_eq!(store.load(), None);
}

#[cfg(feature = "native")]
mod file_store {
    use super::super::FileStore;
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("nutritrack-store-{}-{name}", std::process::id())).join("token")
    }

    #[test]
    fn missing_file_means_logged_out() {
        let store = FileStore::new(temp_path("missing"));
        assert_eq!(store.load(), None);
        store.clear();
    }

    #[test]
    fn save_load_clear_cycle() {
        let path = temp_path("cycle");
        let store = FileStore::new(&path);
        store.save(&Token::new("T1"));
        assert_eq!(store.load(), Some(Token::new("T1")));
        store.clear();
        assert!(!path.exists());
        assert_eq!(store.load(), None);
    }
}
