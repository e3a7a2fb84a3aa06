//! Notification feed repository.

use phygital_core::{AppNotification, NotificationLevel};

use crate::document::{load_list, save_list, DocumentStore};
use crate::{StoreError, NOTIFICATIONS_KEY};

/// Number of notifications retained; older ones are discarded on push.
pub const MAX_NOTIFICATIONS: usize = 50;

/// Notification feed operations. Implemented for every [`DocumentStore`].
pub trait NotificationStore {
    /// Returns the feed, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the feed cannot be read.
    fn list_notifications(&self) -> Result<Vec<AppNotification>, StoreError>;

    /// Prepends `notification`, keeping at most [`MAX_NOTIFICATIONS`].
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on read or write failure.
    fn push_notification(&self, notification: AppNotification) -> Result<(), StoreError>;

    /// Builds an unread notification stamped now and pushes it.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on read or write failure.
    fn record(
        &self,
        title: &str,
        message: &str,
        level: NotificationLevel,
    ) -> Result<AppNotification, StoreError> {
        let notification = AppNotification::new(title, message, level);
        self.push_notification(notification.clone())?;
        Ok(notification)
    }

    /// Marks every notification read and returns how many changed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on read or write failure.
    fn mark_all_read(&self) -> Result<usize, StoreError>;

    /// # Errors
    ///
    /// Returns [`StoreError`] on write failure.
    fn clear_notifications(&self) -> Result<(), StoreError>;
}

impl<S: DocumentStore + ?Sized> NotificationStore for S {
    fn list_notifications(&self) -> Result<Vec<AppNotification>, StoreError> {
        load_list(self, NOTIFICATIONS_KEY)
    }

    fn push_notification(&self, notification: AppNotification) -> Result<(), StoreError> {
        let mut feed = self.list_notifications()?;
        feed.insert(0, notification);
        feed.truncate(MAX_NOTIFICATIONS);
        save_list(self, NOTIFICATIONS_KEY, &feed)
    }

    fn mark_all_read(&self) -> Result<usize, StoreError> {
        let mut feed = self.list_notifications()?;
        let mut changed = 0;
        for notification in feed.iter_mut().filter(|n| !n.read) {
            notification.read = true;
            changed += 1;
        }
        if changed > 0 {
            save_list(self, NOTIFICATIONS_KEY, &feed)?;
        }
        Ok(changed)
    }

    fn clear_notifications(&self) -> Result<(), StoreError> {
        save_list::<AppNotification, _>(self, NOTIFICATIONS_KEY, &[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    #[test]
    fn record_prepends_unread_notification() {
        let store = MemoryStore::new();
        store
            .record("Stock Critique", "2 produits", NotificationLevel::Warning)
            .unwrap();
        let latest = store
            .record("Alerte Logistique : Retours", "25%", NotificationLevel::Error)
            .unwrap();

        let feed = store.list_notifications().unwrap();
        assert_eq!(feed.len(), 2);
        assert_eq!(feed[0], latest);
        assert!(feed[0].id.starts_with("notif-"));
        assert!(!feed[0].read);
        assert_eq!(feed[1].title, "Stock Critique");
    }

    #[test]
    fn feed_is_capped() {
        let store = MemoryStore::new();
        for i in 0..(MAX_NOTIFICATIONS + 5) {
            store
                .record(&format!("n{i}"), "", NotificationLevel::Info)
                .unwrap();
        }
        let feed = store.list_notifications().unwrap();
        assert_eq!(feed.len(), MAX_NOTIFICATIONS);
        assert_eq!(feed[0].title, format!("n{}", MAX_NOTIFICATIONS + 4));
    }

    #[test]
    fn mark_all_read_counts_changes() {
        let store = MemoryStore::new();
        store.record("a", "", NotificationLevel::Info).unwrap();
        store.record("b", "", NotificationLevel::Info).unwrap();
        assert_eq!(store.mark_all_read().unwrap(), 2);
        assert_eq!(store.mark_all_read().unwrap(), 0);
        assert!(store.list_notifications().unwrap().iter().all(|n| n.read));
    }

    #[test]
    fn clear_empties_feed() {
        let store = MemoryStore::new();
        store.record("a", "", NotificationLevel::Info).unwrap();
        store.clear_notifications().unwrap();
        assert!(store.list_notifications().unwrap().is_empty());
    }
}
