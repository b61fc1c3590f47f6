pub mod sidebar;

use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

/// Left column wrapper; collapses with `ctx.left_open`.
#[component]
pub fn Left(children: ChildrenFn) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <div
            class="app-sidebar"
            style=move || if ctx.left_open.get() {
                "width: 240px; flex-shrink: 0; border-right: 1px solid #ddd; overflow-y: auto;"
            } else {
                "display: none;"
            }
        >
            {children()}
        </div>
    }
}
