//! Sidebar with grouped menu items. Every item opens (or re-activates)
//! a tab by key; admin-only groups are hidden for regular users.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (key, label, icon)
    admin_only: bool,
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "dashboards",
            label: "Dashboards",
            icon: "bar-chart",
            items: vec![("dashboard", tab_label_for_key("dashboard"), "bar-chart")],
            admin_only: false,
        },
        MenuGroup {
            id: "materials",
            label: "Materials",
            icon: "package",
            items: vec![
                ("a001_material", tab_label_for_key("a001_material"), "package"),
                (
                    "u101_upload_sap_data",
                    tab_label_for_key("u101_upload_sap_data"),
                    "upload",
                ),
            ],
            admin_only: false,
        },
        MenuGroup {
            id: "reviews",
            label: "Reviews",
            icon: "clipboard",
            items: vec![
                (
                    "a003_my_reviews",
                    tab_label_for_key("a003_my_reviews"),
                    "clipboard",
                ),
                (
                    "a007_notifications",
                    tab_label_for_key("a007_notifications"),
                    "bell",
                ),
                (
                    "a007_notification_preferences",
                    tab_label_for_key("a007_notification_preferences"),
                    "settings",
                ),
            ],
            admin_only: false,
        },
        MenuGroup {
            id: "administration",
            label: "Administration",
            icon: "settings",
            items: vec![
                ("a005_lookup", tab_label_for_key("a005_lookup"), "list"),
                ("sys_roles", tab_label_for_key("sys_roles"), "shield"),
                ("sys_user_roles", tab_label_for_key("sys_user_roles"), "users"),
                (
                    "sys_sme_expertise",
                    tab_label_for_key("sys_sme_expertise"),
                    "users",
                ),
                ("a006_audit", tab_label_for_key("a006_audit"), "history"),
            ],
            admin_only: true,
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let (auth_state, _) = use_auth();

    let is_admin = move || {
        auth_state
            .get()
            .user_info
            .as_ref()
            .map(|u| u.is_admin)
            .unwrap_or(false)
    };

    view! {
        <nav class="sidebar">
            {move || {
                let admin = is_admin();
                get_menu_groups()
                    .into_iter()
                    .filter(|group| !group.admin_only || admin)
                    .map(|group| {
                        view! {
                            <div class="sidebar-group">
                                <div class="sidebar-group-label" style="display: flex; align-items: center; gap: 6px; padding: 10px 12px 4px; color: #888; font-size: 12px; text-transform: uppercase;">
                                    {icon(group.icon)}
                                    <span>{group.label}</span>
                                </div>
                                {group
                                    .items
                                    .into_iter()
                                    .map(|(key, label, item_icon)| {
                                        let active = move || {
                                            ctx.active.get().as_deref() == Some(key)
                                        };
                                        view! {
                                            <div
                                                class="sidebar-item"
                                                style=move || format!(
                                                    "display: flex; align-items: center; gap: 8px; padding: 8px 16px; cursor: pointer; {}",
                                                    if active() { "background: #e8f0fe; font-weight: 600;" } else { "" }
                                                )
                                                on:click=move |_| ctx.open_tab(key, label)
                                            >
                                                {icon(item_icon)}
                                                <span>{label}</span>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </nav>
    }
}
