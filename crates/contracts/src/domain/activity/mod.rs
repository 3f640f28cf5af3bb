pub mod aggregate;

pub use aggregate::{
    Activity, Contact, Notification, NotificationKind, ACTIVITIES, CONTACTS, NOTIFICATIONS,
};
