//! Eventing - Table Notifications

pub mod notification;

pub use notification::{Listener, Listeners, TableNotification, channel_listener};
