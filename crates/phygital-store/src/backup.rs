//! Whole-store snapshot, exchanged as one JSON file.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::document::DocumentStore;
use crate::StoreError;

/// Format version written into every snapshot.
pub const BACKUP_VERSION: &str = "1.0";

/// Every document of a store, keyed by storage key. Values are the raw
/// documents, so keys this crate has no repository for travel unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Backup {
    /// RFC 3339 creation time.
    pub timestamp: String,
    pub version: String,
    pub data: BTreeMap<String, String>,
}

/// Copies every document of `store` into a [`Backup`].
///
/// # Errors
///
/// Returns [`StoreError`] if a key cannot be listed or read.
pub fn export_backup<S: DocumentStore + ?Sized>(store: &S) -> Result<Backup, StoreError> {
    let mut data = BTreeMap::new();
    for key in store.keys()? {
        if let Some(document) = store.load(&key)? {
            data.insert(key, document);
        }
    }
    tracing::info!(documents = data.len(), "exported store backup");
    Ok(Backup {
        timestamp: chrono::Utc::now().to_rfc3339(),
        version: BACKUP_VERSION.to_owned(),
        data,
    })
}

/// Writes every document of `backup` into `store`, overwriting existing keys.
/// Keys absent from the backup are left alone. Returns the number written.
///
/// # Errors
///
/// Returns [`StoreError`] on the first key that cannot be written; earlier
/// keys stay written.
pub fn import_backup<S: DocumentStore + ?Sized>(
    store: &S,
    backup: &Backup,
) -> Result<usize, StoreError> {
    for (key, document) in &backup.data {
        store.save(key, document)?;
    }
    tracing::info!(
        documents = backup.data.len(),
        version = %backup.version,
        "imported store backup"
    );
    Ok(backup.data.len())
}

#[cfg(test)]
mod tests {
    use phygital_core::NotificationLevel;

    use super::*;
    use crate::{MemoryStore, NotificationStore, NOTIFICATIONS_KEY};

    #[test]
    fn export_holds_raw_documents() {
        let store = MemoryStore::new();
        store.save("phygital_team", r#"[{"name":"Amine"}]"#).unwrap();
        store
            .record("Stock Critique", "1 produit", NotificationLevel::Warning)
            .unwrap();

        let backup = export_backup(&store).unwrap();
        assert_eq!(backup.version, "1.0");
        assert_eq!(backup.data.len(), 2);
        assert_eq!(backup.data["phygital_team"], r#"[{"name":"Amine"}]"#);
        assert!(backup.data[NOTIFICATIONS_KEY].contains("Stock Critique"));
    }

    #[test]
    fn import_overwrites_and_keeps_unlisted_keys() {
        let store = MemoryStore::new();
        store.save("phygital_local_tx", "[]").unwrap();
        store.save("phygital_notifs", "[]").unwrap();

        let backup = Backup {
            timestamp: "2024-03-01T00:00:00Z".into(),
            version: BACKUP_VERSION.into(),
            data: BTreeMap::from([("phygital_local_tx".to_owned(), "[1]".to_owned())]),
        };
        assert_eq!(import_backup(&store, &backup).unwrap(), 1);

        assert_eq!(store.load("phygital_local_tx").unwrap().as_deref(), Some("[1]"));
        assert_eq!(store.load("phygital_notifs").unwrap().as_deref(), Some("[]"));
    }
}
