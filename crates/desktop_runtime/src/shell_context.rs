//! Shell-wide state shared with apps: clipboard, notification queue, and user profile.
//!
//! Owned by [`crate::model::DesktopState`] and handed out by reference; apps reach it only
//! through [`desktop_app_contract::AppCommand`] requests.

use desktop_app_contract::NotificationKind;
use serde::{Deserialize, Serialize};

/// Oldest notifications are dropped beyond this count.
pub const MAX_NOTIFICATIONS: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub kind: NotificationKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellContext {
    clipboard: Option<String>,
    notifications: Vec<Notification>,
    next_notification_id: u64,
    user_profile: UserProfile,
}

impl ShellContext {
    pub fn new(user_profile: UserProfile) -> Self {
        Self {
            clipboard: None,
            notifications: Vec::new(),
            next_notification_id: 1,
            user_profile,
        }
    }

    pub fn clipboard(&self) -> Option<&str> {
        self.clipboard.as_deref()
    }

    pub fn set_clipboard(&mut self, text: String) {
        self.clipboard = Some(text);
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn user_profile(&self) -> &UserProfile {
        &self.user_profile
    }

    pub fn push_notification(&mut self, message: String, kind: NotificationKind) -> u64 {
        let id = self.next_notification_id;
        self.next_notification_id += 1;
        self.notifications.push(Notification { id, message, kind });
        if self.notifications.len() > MAX_NOTIFICATIONS {
            let overflow = self.notifications.len() - MAX_NOTIFICATIONS;
            self.notifications.drain(0..overflow);
        }
        id
    }

    pub fn dismiss_notification(&mut self, id: u64) -> bool {
        let before = self.notifications.len();
        self.notifications.retain(|n| n.id != id);
        self.notifications.len() != before
    }

    pub fn clear_notifications(&mut self) {
        self.notifications.clear();
    }
}
