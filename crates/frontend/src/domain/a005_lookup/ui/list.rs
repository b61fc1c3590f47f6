use contracts::domain::a005_lookup::aggregate::LookupOption;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::details::LookupOptionDetails;
use crate::domain::a005_lookup::api;
use crate::shared::icons::icon;
use crate::shared::toast::use_toasts;

/// Dropdown categories administered here. `proposed_action` options carry
/// the `requires_sme` workflow flag in their config.
const CATEGORIES: [&str; 4] = [
    "review_reason",
    "proposed_action",
    "sme_recommendation",
    "final_decision",
];

#[component]
#[allow(non_snake_case)]
pub fn LookupAdminPage() -> impl IntoView {
    let toasts = use_toasts();

    let (category, set_category) = signal("review_reason".to_string());
    let (items, set_items) = signal::<Vec<LookupOption>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (show_inactive, set_show_inactive) = signal(false);
    let (editing, set_editing) = signal::<Option<Option<i64>>>(None); // None=closed, Some(None)=new, Some(Some(id))=edit

    let fetch = move || {
        let cat = category.get();
        spawn_local(async move {
            match api::fetch_all(Some(&cat)).await {
                Ok(mut v) => {
                    v.sort_by(|a, b| {
                        (a.group_order, a.sort_order, a.label.clone())
                            .cmp(&(b.group_order, b.sort_order, b.label.clone()))
                    });
                    set_items.set(v);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    Effect::new(move |_| {
        // Track the category so switching refetches.
        let _ = category.get();
        fetch();
    });

    let deactivate = move |option_id: i64, label: String| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message(&format!("Deactivate option \"{}\"?", label))
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match api::delete_option(option_id).await {
                Ok(()) => fetch(),
                Err(e) => toasts.error(format!("Failed to deactivate: {}", e)),
            }
        });
    };

    view! {
        <div class="content">
            <div class="header">
                <h2>{"Lookup options"}</h2>
                <div class="header-actions">
                    <select
                        class="form-control"
                        on:change=move |ev| set_category.set(event_target_value(&ev))
                    >
                        {CATEGORIES.into_iter().map(|c| {
                            view! {
                                <option value={c} selected=move || category.get() == c>{c}</option>
                            }
                        }).collect_view()}
                    </select>
                    <label style="display: inline-flex; align-items: center; gap: 4px;">
                        <input type="checkbox"
                            prop:checked=move || show_inactive.get()
                            on:change=move |ev| set_show_inactive.set(event_target_checked(&ev))
                        />
                        {"Show inactive"}
                    </label>
                    <button class="btn btn-primary" on:click=move |_| set_editing.set(Some(None))>
                        {icon("plus")}
                        {"New option"}
                    </button>
                    <button class="btn btn-secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        {"Refresh"}
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="table-container">
                <table>
                    <thead>
                        <tr>
                            <th>{"Value"}</th>
                            <th>{"Label"}</th>
                            <th>{"Group"}</th>
                            <th>{"Order"}</th>
                            <th>{"Color"}</th>
                            <th>{"Requires SME"}</th>
                            <th>{"Active"}</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            items.get()
                                .into_iter()
                                .filter(|o| show_inactive.get() || o.is_active)
                                .map(|o| {
                                    let option_id = o.option_id.unwrap_or_default();
                                    let label_for_delete = o.label.clone();
                                    let requires_sme = o.requires_sme();
                                    let is_proposed_action = o.category == "proposed_action";
                                    view! {
                                        <tr>
                                            <td>{o.value.clone()}</td>
                                            <td>{o.label.clone()}</td>
                                            <td>{o.group_name.clone().unwrap_or_else(|| "-".to_string())}</td>
                                            <td>{format!("{}/{}", o.group_order, o.sort_order)}</td>
                                            <td>
                                                {o.color.clone().map(|c| view! {
                                                    <span style=format!("display: inline-block; width: 16px; height: 16px; border-radius: 3px; background: {};", c)></span>
                                                })}
                                            </td>
                                            <td style="text-align: center;">
                                                {if is_proposed_action {
                                                    if requires_sme { "Yes" } else { "No" }
                                                } else {
                                                    "-"
                                                }}
                                            </td>
                                            <td style="text-align: center;">
                                                {if o.is_active {
                                                    view! { <span style="color: green;">{"✓"}</span> }.into_any()
                                                } else {
                                                    view! { <span style="color: #c62828;">{"✗"}</span> }.into_any()
                                                }}
                                            </td>
                                            <td>
                                                <button class="btn btn-secondary" on:click=move |ev| {
                                                    ev.stop_propagation();
                                                    set_editing.set(Some(Some(option_id)));
                                                }>
                                                    {"Edit"}
                                                </button>
                                                {if o.is_active {
                                                    let label = label_for_delete.clone();
                                                    view! {
                                                        <button class="btn btn-danger" on:click=move |_| deactivate(option_id, label.clone())>
                                                            {"Deactivate"}
                                                        </button>
                                                    }.into_any()
                                                } else {
                                                    view! { <></> }.into_any()
                                                }}
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </div>

            {move || editing.get().map(|option_id| view! {
                <div class="modal-overlay">
                    <div class="modal-content">
                        <LookupOptionDetails
                            category=category.get()
                            option_id=option_id
                            on_saved=Callback::new(move |_| {
                                set_editing.set(None);
                                fetch();
                            })
                            on_cancel=Callback::new(move |_| set_editing.set(None))
                        />
                    </div>
                </div>
            })}
        </div>
    }
}
