//! Destinations for raised alerts.

use phygital_core::{AppNotification, NotificationLevel};
use phygital_store::NotificationStore;

/// Receives alerts raised by the monitor. Delivery failures are the sink's
/// concern; the monitor never fails because of them.
pub trait NotificationSink {
    fn notify(&self, notification: &AppNotification);
}

/// Persists alerts into a notification feed.
pub struct StoreSink<'a, S: NotificationStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: NotificationStore + ?Sized> StoreSink<'a, S> {
    #[must_use]
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }
}

impl<S: NotificationStore + ?Sized> NotificationSink for StoreSink<'_, S> {
    fn notify(&self, notification: &AppNotification) {
        if let Err(e) = self.store.push_notification(notification.clone()) {
            tracing::warn!(
                title = %notification.title,
                error = %e,
                "failed to persist notification"
            );
        }
    }
}

/// Emits critical alerts as log lines, standing in for an email relay.
/// Lower levels are logged at `debug`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn notify(&self, notification: &AppNotification) {
        match notification.level {
            NotificationLevel::Error => tracing::warn!(
                title = %notification.title,
                message = %notification.message,
                "email alert: critical notification"
            ),
            level => tracing::debug!(
                title = %notification.title,
                level = %level,
                "notification raised"
            ),
        }
    }
}

/// Forwards every alert to each inner sink in order.
#[derive(Default)]
pub struct FanOutSink<'a> {
    sinks: Vec<&'a dyn NotificationSink>,
}

impl<'a> FanOutSink<'a> {
    #[must_use]
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    #[must_use]
    pub fn with(mut self, sink: &'a dyn NotificationSink) -> Self {
        self.sinks.push(sink);
        self
    }
}

impl NotificationSink for FanOutSink<'_> {
    fn notify(&self, notification: &AppNotification) {
        for sink in &self.sinks {
            sink.notify(notification);
        }
    }
}
