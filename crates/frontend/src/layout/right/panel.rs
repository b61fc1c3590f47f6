use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a007_notification::api as notification_api;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::date_utils::format_datetime;
use contracts::domain::a007_notification::aggregate::Notification;

/// Right panel: the latest notifications, refreshed on every open.
#[component]
pub fn RightPanel() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    let (items, set_items) = signal::<Vec<Notification>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);

    Effect::new(move |_| {
        if !ctx.right_open.get() {
            return;
        }
        spawn_local(async move {
            match notification_api::fetch_notifications(0, 10, Some(false)).await {
                Ok(page) => {
                    set_items.set(page.items);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    });

    let open_all = move |_| {
        ctx.open_tab(
            "a007_notifications",
            crate::layout::tabs::tab_label_for_key("a007_notifications"),
        );
    };

    view! {
        <div class="right-panel" style="padding: 12px;">
            <div style="display: flex; align-items: center; justify-content: space-between;">
                <h3 style="margin: 0;">{"Unread notifications"}</h3>
                <button class="btn btn-secondary" on:click=open_all>{"All"}</button>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            {move || {
                let list = items.get();
                if list.is_empty() {
                    view! { <p style="color: #888;">{"Nothing unread"}</p> }.into_any()
                } else {
                    list.into_iter()
                        .map(|n| {
                            view! {
                                <div style="border-bottom: 1px solid #eee; padding: 8px 0;">
                                    <div style="font-weight: 600;">{n.title.clone()}</div>
                                    <div style="font-size: 13px;">{n.message.clone()}</div>
                                    <div style="font-size: 12px; color: #888;">
                                        {format_datetime(&n.created_at.to_rfc3339())}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()
                        .into_any()
                }
            }}
        </div>
    }
}
