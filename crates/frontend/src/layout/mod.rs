pub mod center;
pub mod global_context;
pub mod left;
pub mod right;
pub mod tabs;
pub mod top_header;

use leptos::prelude::*;
use top_header::TopHeader;

/// Main application shell.
///
/// Layout structure:
/// ```text
/// +------------------------------------------+
/// |              TopHeader                    |
/// +------------------------------------------+
/// |  Sidebar  |    Content    |  RightPanel  |
/// |   (Left)  |   (Center)    |   (Right)    |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<L, C, R>(left: L, center: C, right: R) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send + Sync,
    C: Fn() -> AnyView + 'static + Send + Sync,
    R: Fn() -> AnyView + 'static + Send + Sync,
{
    // Left/Right wrappers read AppGlobalContext for visibility control.
    view! {
        <div class="app-layout">
            <TopHeader />

            <div class="app-body">
                <left::Left>
                    {left()}
                </left::Left>

                <div class="app-main">
                    <center::Center>
                        {center()}
                    </center::Center>
                </div>

                <right::Right>
                    {right()}
                </right::Right>
            </div>
        </div>
    }
}
