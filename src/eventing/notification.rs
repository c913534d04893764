//! TableNotification - Outbound Table Events
//!
//! Changes a host application may want to persist or react to, delivered
//! to registered listeners after each committed state change.

use crossbeam_channel::Sender;

use crate::components::composite::data_table::{RowId, SortDirection};

/// Notifications emitted by a DataTable
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableNotification {
    /// Sort column or direction changed. `column_id` is `None` when sorting was cleared.
    SortChanged {
        column_id: Option<String>,
        direction: SortDirection,
    },

    /// The set of selected row ids changed
    SelectionChanged { ids: Vec<RowId> },

    /// Effective page or page count changed
    PageChanged { page: usize, total_pages: usize },
}

impl TableNotification {
    /// Create a sort notification
    pub fn sort(column_id: Option<&str>, direction: SortDirection) -> Self {
        Self::SortChanged {
            column_id: column_id.map(str::to_string),
            direction,
        }
    }

    /// Create a selection notification
    pub fn selection(ids: Vec<RowId>) -> Self {
        Self::SelectionChanged { ids }
    }

    /// Create a page notification
    pub fn page(page: usize, total_pages: usize) -> Self {
        Self::PageChanged { page, total_pages }
    }
}

/// Listener callback
pub type Listener = Box<dyn FnMut(&TableNotification) + Send>;

/// Registered notification listeners
#[derive(Default)]
pub struct Listeners {
    listeners: Vec<Listener>,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener
    pub fn push(&mut self, listener: impl FnMut(&TableNotification) + Send + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Deliver one notification to every listener, in registration order
    pub fn emit(&mut self, notification: &TableNotification) {
        tracing::debug!(?notification, "Emitting table notification");
        for listener in &mut self.listeners {
            listener(notification);
        }
    }
}

impl std::fmt::Debug for Listeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.listeners.len())
            .finish()
    }
}

/// A listener that forwards notifications into a channel.
///
/// A disconnected receiver is logged and otherwise ignored.
pub fn channel_listener(tx: Sender<TableNotification>) -> impl FnMut(&TableNotification) + Send {
    move |notification| {
        if let Err(e) = tx.send(notification.clone()) {
            tracing::warn!("Notification channel closed: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_listeners_receive_in_order() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut listeners = Listeners::new();
        for tag in ["first", "second"] {
            let seen = Arc::clone(&seen);
            listeners.push(move |_| seen.lock().expect("lock").push(tag));
        }

        listeners.emit(&TableNotification::page(1, 2));
        assert_eq!(*seen.lock().expect("lock"), vec!["first", "second"]);
    }

    #[test]
    fn test_channel_listener() {
        let (tx, rx) = unbounded();
        let mut listeners = Listeners::new();
        listeners.push(channel_listener(tx));

        listeners.emit(&TableNotification::sort(Some("tasks"), SortDirection::Desc));
        assert_eq!(
            rx.try_recv().expect("notification"),
            TableNotification::SortChanged {
                column_id: Some("tasks".into()),
                direction: SortDirection::Desc,
            }
        );
    }

    #[test]
    fn test_channel_listener_survives_closed_receiver() {
        let (tx, rx) = unbounded();
        drop(rx);
        let mut listener = channel_listener(tx);
        listener(&TableNotification::selection(vec!["a".into()]));
    }
}
