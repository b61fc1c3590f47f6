use contracts::domain::a007_notification::aggregate::Notification;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a007_notification::api;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::toast::use_toasts;

const PAGE_SIZE: u64 = 25;

#[component]
#[allow(non_snake_case)]
pub fn NotificationsPage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let toasts = use_toasts();

    let (items, set_items) = signal::<Vec<Notification>>(Vec::new());
    let (total, set_total) = signal(0u64);
    let (unread, set_unread) = signal(0u64);
    let (skip, set_skip) = signal(0u64);
    let (only_unread, set_only_unread) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    Effect::new(move |_| {
        let offset = skip.get();
        let filter = if only_unread.get() { Some(false) } else { None };
        spawn_local(async move {
            match api::fetch_notifications(offset, PAGE_SIZE, filter).await {
                Ok(page) => {
                    set_items.set(page.items);
                    set_total.set(page.total);
                    set_unread.set(page.unread_count);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    });

    let refetch = move || set_skip.update(|s| *s = *s);

    let toggle_read = move |notification: Notification| {
        spawn_local(async move {
            let result = if notification.is_read {
                api::mark_unread(notification.notification_id).await
            } else {
                api::mark_read(notification.notification_id).await
            };
            match result {
                Ok(_) => refetch(),
                Err(e) => toasts.error(format!("Failed to update notification: {}", e)),
            }
        });
    };

    let mark_all = move |_| {
        spawn_local(async move {
            match api::mark_all_read().await {
                Ok(_) => refetch(),
                Err(e) => toasts.error(format!("Failed to mark all read: {}", e)),
            }
        });
    };

    // A notification links to its review; opening it jumps straight there.
    let open_target = move |n: &Notification| {
        if let (Some(material), Some(review)) = (n.material_number, n.review_id) {
            ctx.open_tab(
                &format!("a002_review_detail_{}_{}", material, review),
                &format!("Review #{}", review),
            );
        } else if let Some(material) = n.material_number {
            ctx.open_tab(
                &format!("a001_material_detail_{}", material),
                &format!("Material {}", material),
            );
        }
    };

    let page = move || skip.get() / PAGE_SIZE;
    let pages = move || total.get().div_ceil(PAGE_SIZE);

    view! {
        <div class="content">
            <div class="header">
                <h2>{move || format!("Notifications ({} unread)", unread.get())}</h2>
                <div class="header-actions">
                    <label style="display: inline-flex; align-items: center; gap: 4px;">
                        <input type="checkbox"
                            prop:checked=move || only_unread.get()
                            on:change=move |ev| {
                                set_only_unread.set(event_target_checked(&ev));
                                set_skip.set(0);
                            }
                        />
                        {"Unread only"}
                    </label>
                    <button class="btn btn-secondary" on:click=mark_all disabled=move || unread.get() == 0>
                        {"Mark all read"}
                    </button>
                    <button class="btn btn-secondary" on:click=move |_| refetch()>
                        {icon("refresh")}
                        {"Refresh"}
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            {move || {
                items.get().into_iter().map(|n| {
                    let n_for_toggle = n.clone();
                    let n_for_open = n.clone();
                    view! {
                        <div
                            style=format!(
                                "display: flex; align-items: flex-start; gap: 12px; border-bottom: 1px solid #eee; padding: 10px 4px; {}",
                                if n.is_read { "opacity: 0.7;" } else { "background: #f5f9ff;" }
                            )
                        >
                            <div style="flex: 1; cursor: pointer;" on:click=move |_| open_target(&n_for_open)>
                                <div style="display: flex; gap: 8px; align-items: center;">
                                    <span style="font-weight: 600;">{n.title.clone()}</span>
                                    <span style="font-size: 12px; color: #888;">{n.notification_type.label()}</span>
                                </div>
                                <div>{n.message.clone()}</div>
                                <div style="font-size: 12px; color: #888;">
                                    {format_datetime(&n.created_at.to_rfc3339())}
                                    {n.triggered_by_user
                                        .as_ref()
                                        .and_then(|u| u.full_name.clone())
                                        .map(|name| format!(" — {}", name))
                                        .unwrap_or_default()}
                                </div>
                            </div>
                            <button class="btn btn-secondary" on:click=move |_| toggle_read(n_for_toggle.clone())>
                                {if n.is_read { "Mark unread" } else { "Mark read" }}
                            </button>
                        </div>
                    }
                }).collect_view()
            }}

            <div style="display: flex; align-items: center; gap: 12px; padding: 8px 0;">
                <button
                    class="btn btn-secondary"
                    disabled=move || page() == 0
                    on:click=move |_| set_skip.set((page().saturating_sub(1)) * PAGE_SIZE)
                >
                    {icon("chevron-left")}
                </button>
                <span>{move || format!("Page {} of {}", page() + 1, pages().max(1))}</span>
                <button
                    class="btn btn-secondary"
                    disabled=move || page() + 1 >= pages()
                    on:click=move |_| set_skip.set((page() + 1) * PAGE_SIZE)
                >
                    {icon("chevron-right")}
                </button>
            </div>
        </div>
    }
}
