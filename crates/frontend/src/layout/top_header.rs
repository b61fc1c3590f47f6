use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a007_notification::api as notification_api;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};

const UNREAD_POLL_MS: u32 = 60_000;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let (auth_state, set_auth_state) = use_auth();

    let (unread, set_unread) = signal(0u64);

    // Badge polling; the loop dies with the component's owner.
    spawn_local(async move {
        loop {
            if let Ok(count) = notification_api::fetch_unread_count().await {
                set_unread.set(count);
            }
            TimeoutFuture::new(UNREAD_POLL_MS).await;
        }
    });

    let user_name = move || {
        auth_state
            .get()
            .user_info
            .map(|u| u.display_name().to_string())
            .unwrap_or_default()
    };

    let logout = move |_| {
        spawn_local(async move {
            let _ = do_logout(set_auth_state).await;
        });
    };

    view! {
        <div class="app-top-header" style="display: flex; align-items: center; gap: 12px; padding: 8px 16px; border-bottom: 1px solid #ddd; background: #1e2a38; color: white;">
            <button class="btn-icon" title="Toggle menu" on:click=move |_| ctx.toggle_left()>
                {icon("menu")}
            </button>
            <span style="font-weight: 600; font-size: 16px;">{"Material Analysis & Review"}</span>

            <div style="flex: 1;"></div>

            <button
                class="btn-icon"
                title="Notifications"
                style="position: relative;"
                on:click=move |_| ctx.toggle_right()
            >
                {icon("bell")}
                {move || if unread.get() > 0 {
                    view! {
                        <span style="position: absolute; top: -4px; right: -6px; background: #c62828; color: white; border-radius: 8px; font-size: 11px; padding: 0 5px;">
                            {unread.get().to_string()}
                        </span>
                    }.into_any()
                } else {
                    view! { <></> }.into_any()
                }}
            </button>

            <span style="color: #b8c4d0;">{user_name}</span>
            <button class="btn-icon" title="Sign out" on:click=logout>
                {icon("logout")}
            </button>
        </div>
    }
}
