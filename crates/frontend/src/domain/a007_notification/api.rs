use contracts::domain::a007_notification::aggregate::{
    Notification, NotificationPreferences, NotificationPreferencesUpdate,
    PaginatedNotifications, UnreadCount,
};

use crate::shared::api_utils::{http_get, http_put, http_put_empty};

/// `is_read = None` fetches everything; `Some(false)` only unread.
pub async fn fetch_notifications(
    skip: u64,
    limit: u64,
    is_read: Option<bool>,
) -> Result<PaginatedNotifications, String> {
    let mut path = format!("/api/notifications?skip={}&limit={}", skip, limit);
    if let Some(flag) = is_read {
        path.push_str(&format!("&is_read={}", flag));
    }
    http_get(&path).await
}

pub async fn fetch_unread_count() -> Result<u64, String> {
    let response: UnreadCount = http_get("/api/notifications/unread-count").await?;
    Ok(response.unread_count)
}

pub async fn mark_read(notification_id: i64) -> Result<Notification, String> {
    http_put_empty(&format!("/api/notifications/{}/read", notification_id)).await
}

pub async fn mark_unread(notification_id: i64) -> Result<Notification, String> {
    http_put_empty(&format!("/api/notifications/{}/unread", notification_id)).await
}

pub async fn mark_all_read() -> Result<serde_json::Value, String> {
    http_put_empty("/api/notifications/mark-all-read").await
}

pub async fn fetch_preferences() -> Result<NotificationPreferences, String> {
    http_get("/api/notifications/preferences").await
}

pub async fn update_preferences(
    update: &NotificationPreferencesUpdate,
) -> Result<NotificationPreferences, String> {
    http_put("/api/notifications/preferences", update).await
}
