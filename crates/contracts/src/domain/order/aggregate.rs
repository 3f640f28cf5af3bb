use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

/// Prefix shared by every order identifier (`#CM9801`, `#CM9802`, ...).
pub const ORDER_ID_PREFIX: &str = "#CM";

/// Order identifier in display form: `"#CM"` followed by a 4-digit sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub String);

impl OrderId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric part after the `#CM` prefix. Unparseable ids sort as 0.
    pub fn numeric_suffix(&self) -> u32 {
        self.0
            .strip_prefix(ORDER_ID_PREFIX)
            .and_then(|s| s.parse().ok())
            .unwrap_or(0)
    }

    /// Next sequential id: `#CM` + zero-padded(max + 1, width 4).
    pub fn next_after(max_suffix: u32) -> Self {
        Self(format!("{}{:04}", ORDER_ID_PREFIX, max_suffix + 1))
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Status
// ============================================================================

/// Lifecycle label of an order. The numeric priority drives status sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    InProgress,
    Complete,
    Approved,
    Rejected,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::InProgress => "In Progress",
            OrderStatus::Complete => "Complete",
            OrderStatus::Approved => "Approved",
            OrderStatus::Rejected => "Rejected",
        }
    }

    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "Pending" => Some(OrderStatus::Pending),
            "In Progress" => Some(OrderStatus::InProgress),
            "Complete" => Some(OrderStatus::Complete),
            "Approved" => Some(OrderStatus::Approved),
            "Rejected" => Some(OrderStatus::Rejected),
            _ => None,
        }
    }

    /// Fixed sort priority: Pending=1, In Progress=2, Approved=3, Complete=4,
    /// Rejected=5.
    pub fn priority(&self) -> u8 {
        match self {
            OrderStatus::Pending => 1,
            OrderStatus::InProgress => 2,
            OrderStatus::Approved => 3,
            OrderStatus::Complete => 4,
            OrderStatus::Rejected => 5,
        }
    }

    pub fn all() -> [OrderStatus; 5] {
        [
            OrderStatus::Complete,
            OrderStatus::InProgress,
            OrderStatus::Pending,
            OrderStatus::Approved,
            OrderStatus::Rejected,
        ]
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// The person an order is attributed to. Only the display name is tracked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRef {
    pub name: String,
}

/// A unit of work tracked in the dashboard. Records are immutable once
/// created: the list only ever grows by prepending new orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub user: UserRef,
    pub project: String,
    pub address: String,
    /// Human-readable date ("Just now", "Yesterday", "Feb 2, 2023").
    #[serde(rename = "dateLabel")]
    pub date_label: String,
    /// Actual timestamp backing chronological sort.
    #[serde(rename = "dateSort")]
    pub date_sort: DateTime<Utc>,
    pub status: OrderStatus,
}

impl Order {
    pub fn new(
        id: OrderId,
        user_name: impl Into<String>,
        project: impl Into<String>,
        address: impl Into<String>,
        date_label: impl Into<String>,
        date_sort: DateTime<Utc>,
        status: OrderStatus,
    ) -> Self {
        Self {
            id,
            user: UserRef {
                name: user_name.into(),
            },
            project: project.into(),
            address: address.into(),
            date_label: date_label.into(),
            date_sort,
            status,
        }
    }
}

// ============================================================================
// Create-order draft
// ============================================================================

/// User input for the "Add New Order" form. The submit action stays disabled
/// until `is_complete` holds; there is no further validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDraft {
    pub user_name: String,
    pub project: String,
    pub address: String,
    pub status: OrderStatus,
}

impl Default for OrderDraft {
    fn default() -> Self {
        Self {
            user_name: String::new(),
            project: String::new(),
            address: String::new(),
            status: OrderStatus::Pending,
        }
    }
}

impl OrderDraft {
    pub fn is_complete(&self) -> bool {
        !self.user_name.trim().is_empty()
            && !self.project.trim().is_empty()
            && !self.address.trim().is_empty()
    }

    /// Materialize the draft into a record stamped "Just now".
    pub fn into_order(self, id: OrderId, now: DateTime<Utc>) -> Order {
        Order::new(
            id,
            self.user_name,
            self.project,
            self.address,
            "Just now",
            now,
            self.status,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_suffix() {
        assert_eq!(OrderId::new("#CM9801").numeric_suffix(), 9801);
        assert_eq!(OrderId::new("#CM0001").numeric_suffix(), 1);
        assert_eq!(OrderId::new("garbage").numeric_suffix(), 0);
        assert_eq!(OrderId::new("#CMxx").numeric_suffix(), 0);
    }

    #[test]
    fn test_next_after_pads_to_four_digits() {
        assert_eq!(OrderId::next_after(9900).as_str(), "#CM9901");
        assert_eq!(OrderId::next_after(7).as_str(), "#CM0008");
    }

    #[test]
    fn test_status_labels_round_trip() {
        for status in OrderStatus::all() {
            assert_eq!(OrderStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(OrderStatus::parse("Unknown"), None);
    }

    #[test]
    fn test_status_priority_order() {
        assert_eq!(OrderStatus::Pending.priority(), 1);
        assert_eq!(OrderStatus::InProgress.priority(), 2);
        assert_eq!(OrderStatus::Approved.priority(), 3);
        assert_eq!(OrderStatus::Complete.priority(), 4);
        assert_eq!(OrderStatus::Rejected.priority(), 5);
    }

    #[test]
    fn test_draft_completeness() {
        let mut draft = OrderDraft::default();
        assert!(!draft.is_complete());
        draft.user_name = "Jane Doe".into();
        draft.project = "Landing Page".into();
        assert!(!draft.is_complete());
        draft.address = "   ".into();
        assert!(!draft.is_complete());
        draft.address = "Meadow Lane Oakland".into();
        assert!(draft.is_complete());
    }

    #[test]
    fn test_order_serializes_with_camel_case_date_fields() {
        let order = Order::new(
            OrderId::new("#CM9801"),
            "Natali Craig",
            "Landing Page",
            "Meadow Lane Oakland",
            "Just now",
            Utc::now(),
            OrderStatus::InProgress,
        );
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["dateLabel"], "Just now");
        assert!(json.get("dateSort").is_some());
        assert!(json.get("date_label").is_none());
    }

    #[test]
    fn test_draft_into_order_stamps_just_now() {
        let now = Utc::now();
        let draft = OrderDraft {
            user_name: "Jane Doe".into(),
            project: "Landing Page".into(),
            address: "Meadow Lane Oakland".into(),
            status: OrderStatus::Approved,
        };
        let order = draft.into_order(OrderId::next_after(9900), now);
        assert_eq!(order.id.as_str(), "#CM9901");
        assert_eq!(order.date_label, "Just now");
        assert_eq!(order.date_sort, now);
        assert_eq!(order.status, OrderStatus::Approved);
    }
}
