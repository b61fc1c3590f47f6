use chrono::NaiveDate;
use contracts::system::rbac::{RoleListItem, UserRole, UserRoleCreate, UserRoleUpdate};
use contracts::system::users::UserListItem;
use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

use crate::shared::date_utils::{format_date, format_datetime};
use crate::shared::icons::icon;
use crate::shared::toast::use_toasts;
use crate::system::rbac::api;

/// User-role assignment administration: list, grant, revoke.
#[component]
#[allow(non_snake_case)]
pub fn UserRolesPage() -> impl IntoView {
    let toasts = use_toasts();

    let (assignments, set_assignments) = signal::<Vec<UserRole>>(Vec::new());
    let (users, set_users) = signal::<Vec<UserListItem>>(Vec::new());
    let (roles, set_roles) = signal::<Vec<RoleListItem>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (show_form, set_show_form) = signal(false);

    // New-assignment form
    let (new_user, set_new_user) = signal(String::new());
    let (new_role, set_new_role) = signal(String::new());
    let (valid_from, set_valid_from) = signal(String::new());
    let (valid_to, set_valid_to) = signal(String::new());

    let fetch = move || {
        spawn_local(async move {
            match api::fetch_user_roles().await {
                Ok(v) => {
                    set_assignments.set(v);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };
    fetch();

    spawn_local(async move {
        if let Ok(v) = api::fetch_users().await {
            set_users.set(v);
        }
    });
    spawn_local(async move {
        if let Ok(v) = api::fetch_roles().await {
            set_roles.set(v);
        }
    });

    let grant = move |_| {
        let Ok(user_id) = Uuid::parse_str(new_user.get().trim()) else {
            toasts.error("Select a user");
            return;
        };
        let Ok(role_id) = new_role.get().trim().parse::<i64>() else {
            toasts.error("Select a role");
            return;
        };
        let payload = UserRoleCreate {
            user_id,
            role_id,
            valid_from: NaiveDate::parse_from_str(valid_from.get().trim(), "%Y-%m-%d").ok(),
            valid_to: NaiveDate::parse_from_str(valid_to.get().trim(), "%Y-%m-%d").ok(),
        };
        spawn_local(async move {
            match api::create_user_role(&payload).await {
                Ok(_) => {
                    toasts.success("Role granted");
                    set_show_form.set(false);
                    fetch();
                }
                Err(e) => toasts.error(format!("Failed to grant role: {}", e)),
            }
        });
    };

    // Ends the assignment on a chosen date instead of removing it outright.
    let end_date = move |user_role_id: i64| {
        let input = web_sys::window()
            .and_then(|w| w.prompt_with_message("End date (YYYY-MM-DD)").ok().flatten());
        let Some(text) = input else {
            return;
        };
        let Ok(date) = NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d") else {
            toasts.error("Enter a date as YYYY-MM-DD");
            return;
        };
        let payload = UserRoleUpdate {
            valid_to: Some(date),
            ..Default::default()
        };
        spawn_local(async move {
            match api::update_user_role(user_role_id, &payload).await {
                Ok(_) => {
                    toasts.success("End date set");
                    fetch();
                }
                Err(e) => toasts.error(format!("Failed to set end date: {}", e)),
            }
        });
    };

    let revoke = move |user_role_id: i64, user_name: String, role_name: String| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message(&format!("Revoke {} from {}?", role_name, user_name))
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match api::delete_user_role(user_role_id).await {
                Ok(()) => fetch(),
                Err(e) => toasts.error(format!("Failed to revoke: {}", e)),
            }
        });
    };

    view! {
        <div class="content">
            <div class="header">
                <h2>{"User roles"}</h2>
                <div class="header-actions">
                    <button class="btn btn-primary" on:click=move |_| set_show_form.update(|v| *v = !*v)>
                        {icon("plus")}
                        {"Grant role"}
                    </button>
                    <button class="btn btn-secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        {"Refresh"}
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            {move || if show_form.get() {
                view! {
                    <div style="border: 1px solid #ddd; border-radius: 4px; padding: 12px; margin-bottom: 12px; display: flex; gap: 12px; align-items: flex-end; flex-wrap: wrap;">
                        <div>
                            <div style="font-size: 12px; color: #666;">{"User"}</div>
                            <select class="form-control" on:change=move |ev| set_new_user.set(event_target_value(&ev))>
                                <option value="">{"— select user —"}</option>
                                {users.get().into_iter().map(|u| {
                                    view! {
                                        <option value={u.user_id.to_string()}>
                                            {u.full_name.or(u.email).unwrap_or_else(|| u.user_id.to_string())}
                                        </option>
                                    }
                                }).collect_view()}
                            </select>
                        </div>
                        <div>
                            <div style="font-size: 12px; color: #666;">{"Role"}</div>
                            <select class="form-control" on:change=move |ev| set_new_role.set(event_target_value(&ev))>
                                <option value="">{"— select role —"}</option>
                                {roles.get().into_iter().filter(|r| r.is_active).map(|r| {
                                    view! {
                                        <option value={r.role_id.to_string()}>{r.role_name.clone()}</option>
                                    }
                                }).collect_view()}
                            </select>
                        </div>
                        <div>
                            <div style="font-size: 12px; color: #666;">{"Valid from"}</div>
                            <input type="date" class="form-control" on:change=move |ev| set_valid_from.set(event_target_value(&ev)) />
                        </div>
                        <div>
                            <div style="font-size: 12px; color: #666;">{"Valid to"}</div>
                            <input type="date" class="form-control" on:change=move |ev| set_valid_to.set(event_target_value(&ev)) />
                        </div>
                        <button class="btn btn-primary" on:click=grant>{"Grant"}</button>
                    </div>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}

            <div class="table-container">
                <table>
                    <thead>
                        <tr>
                            <th>{"User"}</th>
                            <th>{"Email"}</th>
                            <th>{"Role"}</th>
                            <th>{"Valid from"}</th>
                            <th>{"Valid to"}</th>
                            <th>{"Assigned"}</th>
                            <th>{"By"}</th>
                            <th>{"Active"}</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || assignments.get().into_iter().map(|a| {
                            let user_role_id = a.user_role_id;
                            let user_name = a.user_name.clone().unwrap_or_else(|| "user".to_string());
                            let role_name = a.role_name.clone();
                            view! {
                                <tr>
                                    <td>{a.user_name.clone().unwrap_or_else(|| "-".to_string())}</td>
                                    <td>{a.user_email.clone().unwrap_or_else(|| "-".to_string())}</td>
                                    <td>{a.role_name.clone()}</td>
                                    <td>{a.valid_from.map(|d| format_date(&d.to_string())).unwrap_or_else(|| "-".to_string())}</td>
                                    <td>{a.valid_to.map(|d| format_date(&d.to_string())).unwrap_or_else(|| "-".to_string())}</td>
                                    <td>{format_datetime(&a.assigned_at.to_rfc3339())}</td>
                                    <td>{a.assigned_by_name.clone().unwrap_or_else(|| "-".to_string())}</td>
                                    <td style="text-align: center;">{if a.is_active { "✓" } else { "✗" }}</td>
                                    <td>
                                        {if a.is_active {
                                            view! {
                                                <button class="btn btn-secondary" on:click=move |_| end_date(user_role_id)>
                                                    {"End"}
                                                </button>
                                                <button class="btn btn-danger" on:click=move |_| revoke(user_role_id, user_name.clone(), role_name.clone())>
                                                    {"Revoke"}
                                                </button>
                                            }.into_any()
                                        } else {
                                            view! { <></> }.into_any()
                                        }}
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
