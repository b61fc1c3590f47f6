use contracts::system::rbac::{Role, RoleListItem};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::toast::use_toasts;
use crate::system::rbac::api;

/// Read-only role list with the permission matrix of the selected role.
#[component]
#[allow(non_snake_case)]
pub fn RolesPage() -> impl IntoView {
    let toasts = use_toasts();

    let (roles, set_roles) = signal::<Vec<RoleListItem>>(Vec::new());
    let (selected, set_selected) = signal::<Option<Role>>(None);
    let (error, set_error) = signal::<Option<String>>(None);

    spawn_local(async move {
        match api::fetch_roles().await {
            Ok(v) => set_roles.set(v),
            Err(e) => set_error.set(Some(e)),
        }
    });

    let select_role = move |role_id: i64| {
        spawn_local(async move {
            match api::fetch_role(role_id).await {
                Ok(role) => set_selected.set(Some(role)),
                Err(e) => toasts.error(format!("Failed to load role: {}", e)),
            }
        });
    };

    view! {
        <div class="content">
            <div class="header">
                <h2>{"Roles"}</h2>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div style="display: flex; gap: 24px;">
                <div class="table-container" style="flex: 1;">
                    <table>
                        <thead>
                            <tr>
                                <th>{"Code"}</th>
                                <th>{"Name"}</th>
                                <th>{"Type"}</th>
                                <th>{"Active"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || roles.get().into_iter().map(|r| {
                                let role_id = r.role_id;
                                view! {
                                    <tr on:click=move |_| select_role(role_id) style="cursor: pointer;">
                                        <td>{r.role_code.clone()}</td>
                                        <td>{r.role_name.clone()}</td>
                                        <td>{r.role_type.clone()}</td>
                                        <td style="text-align: center;">
                                            {if r.is_active { "✓" } else { "✗" }}
                                        </td>
                                    </tr>
                                }
                            }).collect_view()}
                        </tbody>
                    </table>
                </div>

                <div style="flex: 1;">
                    {move || match selected.get() {
                        None => view! { <p style="color: #888;">{"Select a role to see its permissions"}</p> }.into_any(),
                        Some(role) => {
                            let rows = role.permission_rows();
                            view! {
                                <div>
                                    <h3>{format!("{} — permissions", role.role_name)}</h3>
                                    {role.description.clone().map(|d| view! { <p style="color: #666;">{d}</p> })}
                                    <div class="table-container">
                                        <table>
                                            <tbody>
                                                {rows.into_iter().map(|(label, granted)| {
                                                    view! {
                                                        <tr>
                                                            <td>{label}</td>
                                                            <td style="text-align: center;">
                                                                {if granted {
                                                                    view! { <span style="color: green;">{"✓"}</span> }.into_any()
                                                                } else {
                                                                    view! { <span style="color: #ccc;">{"—"}</span> }.into_any()
                                                                }}
                                                            </td>
                                                        </tr>
                                                    }
                                                }).collect_view()}
                                            </tbody>
                                        </table>
                                    </div>
                                    {role.approval_limit.map(|limit| view! {
                                        <p style="margin-top: 8px;">
                                            {format!("Approval limit: {}", crate::shared::number_format::format_money(limit))}
                                        </p>
                                    })}
                                </div>
                            }.into_any()
                        }
                    }}
                </div>
            </div>
        </div>
    }
}
