//! Feed records for the right sidebar: notifications, the activity timeline
//! and the contact list. All static display data.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Picks which icon the notification row renders with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationKind {
    Bug,
    UserRegistered,
    Subscribed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    pub time_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub user: String,
    pub action: String,
    pub time_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
}

impl Contact {
    /// Initials for the avatar fallback ("Natali Craig" -> "NC").
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect::<String>()
            .to_uppercase()
    }
}

fn notification(kind: NotificationKind, message: &str, time_label: &str) -> Notification {
    Notification {
        kind,
        message: message.into(),
        time_label: time_label.into(),
    }
}

fn activity(user: &str, action: &str, time_label: &str) -> Activity {
    Activity {
        user: user.into(),
        action: action.into(),
        time_label: time_label.into(),
    }
}

pub static NOTIFICATIONS: Lazy<Vec<Notification>> = Lazy::new(|| {
    vec![
        notification(
            NotificationKind::Bug,
            "You have a bug that needs...",
            "Just now",
        ),
        notification(
            NotificationKind::UserRegistered,
            "New user registered",
            "59 minutes ago",
        ),
        notification(
            NotificationKind::Bug,
            "You have a bug that needs...",
            "12 hours ago",
        ),
        notification(
            NotificationKind::Subscribed,
            "Andi Lane Subscribed to you",
            "Today, 11:59 AM",
        ),
    ]
});

pub static ACTIVITIES: Lazy<Vec<Activity>> = Lazy::new(|| {
    vec![
        activity("Natali Craig", "fixed a bug", "Just now"),
        activity("Drew Cano", "released a new version", "59 minutes ago"),
        activity("Andi Lane", "submitted a bug", "12 hours ago"),
        activity("Koray Okumus", "modified data in Page X", "Today, 11:59 AM"),
        activity("Kate Morrison", "deleted a page in Project X", "Feb 2, 2024"),
    ]
});

pub static CONTACTS: Lazy<Vec<Contact>> = Lazy::new(|| {
    [
        "Natali Craig",
        "Drew Cano",
        "Orlando Diggs",
        "Andi Lane",
        "Kate Morrison",
        "Koray Okumus",
    ]
    .into_iter()
    .map(|name| Contact { name: name.into() })
    .collect()
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_initials() {
        let contact = Contact {
            name: "Natali Craig".into(),
        };
        assert_eq!(contact.initials(), "NC");
        let single = Contact {
            name: "Cher".into(),
        };
        assert_eq!(single.initials(), "C");
    }

    #[test]
    fn test_fixture_counts() {
        assert_eq!(NOTIFICATIONS.len(), 4);
        assert_eq!(ACTIVITIES.len(), 5);
        assert_eq!(CONTACTS.len(), 6);
    }
}
