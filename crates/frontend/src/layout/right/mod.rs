pub mod panel;

use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

/// Right column wrapper; collapses with `ctx.right_open`.
#[component]
pub fn Right(children: ChildrenFn) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <div
            class="app-right-panel"
            style=move || if ctx.right_open.get() {
                "width: 320px; flex-shrink: 0; border-left: 1px solid #ddd; overflow-y: auto;"
            } else {
                "display: none;"
            }
        >
            {children()}
        </div>
    }
}
