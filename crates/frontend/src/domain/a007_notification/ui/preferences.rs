use contracts::domain::a007_notification::aggregate::{
    NotificationPreferences, NotificationPreferencesUpdate,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a007_notification::api;
use crate::shared::toast::use_toasts;

/// Per-user toggles for the three notification triggers. Each change is
/// saved immediately.
#[component]
#[allow(non_snake_case)]
pub fn NotificationPreferencesPage() -> impl IntoView {
    let toasts = use_toasts();

    let prefs = RwSignal::new(NotificationPreferences::default());
    let (error, set_error) = signal::<Option<String>>(None);

    spawn_local(async move {
        match api::fetch_preferences().await {
            Ok(p) => prefs.set(p),
            Err(e) => set_error.set(Some(format!("Failed to load preferences: {}", e))),
        }
    });

    let save = move |update: NotificationPreferencesUpdate| {
        spawn_local(async move {
            match api::update_preferences(&update).await {
                Ok(p) => {
                    prefs.set(p);
                    toasts.success("Preferences saved");
                }
                Err(e) => toasts.error(format!("Failed to save preferences: {}", e)),
            }
        });
    };

    view! {
        <div class="content">
            <div class="header">
                <h2>{"Notification preferences"}</h2>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div style="max-width: 480px;">
                <label style="display: flex; align-items: center; gap: 8px; padding: 8px 0;">
                    <input
                        type="checkbox"
                        prop:checked=move || prefs.get().review_assigned
                        on:change=move |ev| {
                            save(NotificationPreferencesUpdate {
                                review_assigned: Some(event_target_checked(&ev)),
                                ..Default::default()
                            });
                        }
                    />
                    <span>{"Notify me when a review is assigned to me"}</span>
                </label>

                <label style="display: flex; align-items: center; gap: 8px; padding: 8px 0;">
                    <input
                        type="checkbox"
                        prop:checked=move || prefs.get().review_status_changed
                        on:change=move |ev| {
                            save(NotificationPreferencesUpdate {
                                review_status_changed: Some(event_target_checked(&ev)),
                                ..Default::default()
                            });
                        }
                    />
                    <span>{"Notify me when a review I am involved in changes status"}</span>
                </label>

                <label style="display: flex; align-items: center; gap: 8px; padding: 8px 0;">
                    <input
                        type="checkbox"
                        prop:checked=move || prefs.get().comment_added
                        on:change=move |ev| {
                            save(NotificationPreferencesUpdate {
                                comment_added: Some(event_target_checked(&ev)),
                                ..Default::default()
                            });
                        }
                    />
                    <span>{"Notify me when a comment is added to my reviews"}</span>
                </label>
            </div>
        </div>
    }
}
