use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::registry::render_tab_content;
use crate::shared::icons::icon;

/// Tab strip plus the active tab's content.
#[component]
pub fn Tabs() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <div class="tabs" style="display: flex; flex-direction: column; height: 100%;">
            <div class="tab-strip" style="display: flex; gap: 2px; border-bottom: 1px solid #ddd; background: #f4f5f7; padding: 4px 8px 0;">
                {move || {
                    ctx.opened
                        .get()
                        .into_iter()
                        .map(|tab| {
                            let key = tab.key.clone();
                            let key_activate = key.clone();
                            let key_close = key.clone();
                            let is_active = move || {
                                ctx.active.get().as_deref() == Some(key.as_str())
                            };
                            view! {
                                <div
                                    class="tab"
                                    style=move || format!(
                                        "display: inline-flex; align-items: center; gap: 6px; padding: 6px 10px; border: 1px solid #ddd; border-bottom: none; border-radius: 4px 4px 0 0; cursor: pointer; {}",
                                        if is_active() { "background: white; font-weight: 600;" } else { "background: #e9ecef;" }
                                    )
                                    on:click=move |_| ctx.activate_tab(&key_activate)
                                >
                                    <span>{tab.title.clone()}</span>
                                    <span
                                        style="display: inline-flex; opacity: 0.6;"
                                        on:click=move |ev| {
                                            ev.stop_propagation();
                                            ctx.close_tab(&key_close);
                                        }
                                    >
                                        {icon("x")}
                                    </span>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>

            <div class="tab-content" style="flex: 1; overflow: auto; background: white;">
                {move || match ctx.active.get() {
                    Some(key) => render_tab_content(&key, ctx),
                    None => view! {
                        <div class="placeholder" style="padding: 24px; color: #888;">
                            {"Select a screen from the menu"}
                        </div>
                    }
                    .into_any(),
                }}
            </div>
        </div>
    }
}
