use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::system::users::UserProfile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    ReviewAssigned,
    ReviewStatusChanged,
    CommentAdded,
}

impl NotificationType {
    pub fn label(self) -> &'static str {
        match self {
            NotificationType::ReviewAssigned => "Review assigned",
            NotificationType::ReviewStatusChanged => "Review status changed",
            NotificationType::CommentAdded => "Comment added",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub notification_id: i64,
    pub user_id: Uuid,
    pub notification_type: NotificationType,
    pub title: String,
    pub message: String,
    pub review_id: Option<i64>,
    pub material_number: Option<i64>,
    pub comment_id: Option<i64>,
    pub triggered_by: Option<Uuid>,
    pub triggered_by_user: Option<UserProfile>,
    pub is_read: bool,
    pub read_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Paginated notifications; carries the unread total for the badge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedNotifications {
    pub items: Vec<Notification>,
    pub total: u64,
    pub unread_count: u64,
    pub skip: u64,
    pub limit: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnreadCount {
    pub unread_count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationPreferences {
    #[serde(default = "default_true")]
    pub review_assigned: bool,
    #[serde(default = "default_true")]
    pub review_status_changed: bool,
    #[serde(default = "default_true")]
    pub comment_added: bool,
}

fn default_true() -> bool {
    true
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        Self {
            review_assigned: true,
            review_status_changed: true,
            comment_added: true,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotificationPreferencesUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_assigned: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_status_changed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment_added: Option<bool>,
}
