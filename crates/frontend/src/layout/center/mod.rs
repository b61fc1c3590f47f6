pub mod tabs;

use leptos::prelude::*;

/// Center column wrapper.
#[component]
pub fn Center(children: ChildrenFn) -> impl IntoView {
    view! {
        <div class="app-center" style="flex: 1; min-width: 0; display: flex; flex-direction: column;">
            {children()}
        </div>
    }
}
