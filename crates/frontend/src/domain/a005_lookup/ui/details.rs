use contracts::domain::a005_lookup::aggregate::{
    LookupOptionCreate, LookupOptionHistory, LookupOptionUpdate,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a005_lookup::api;
use crate::shared::date_utils::format_datetime;

#[derive(Clone, Debug, Default)]
struct OptionForm {
    value: String,
    label: String,
    description: String,
    color: String,
    group_name: String,
    group_order: i32,
    sort_order: i32,
    requires_sme: bool,
}

/// Create/edit form for one lookup option, with its change history.
/// `option_id = None` creates a new option in `category`.
#[component]
#[allow(non_snake_case)]
pub fn LookupOptionDetails(
    category: String,
    option_id: Option<i64>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let form = RwSignal::new(OptionForm::default());
    let (error, set_error) = signal::<Option<String>>(None);
    let (history, set_history) = signal::<Vec<LookupOptionHistory>>(Vec::new());

    let is_edit = option_id.is_some();
    let is_proposed_action = category == "proposed_action";
    let category_for_save = category.clone();

    if let Some(id) = option_id {
        spawn_local(async move {
            match api::fetch_option(id).await {
                Ok(option) => {
                    form.set(OptionForm {
                        value: option.value,
                        label: option.label,
                        description: option.description.unwrap_or_default(),
                        color: option.color.unwrap_or_default(),
                        group_name: option.group_name.unwrap_or_default(),
                        group_order: option.group_order,
                        sort_order: option.sort_order,
                        requires_sme: option
                            .config
                            .as_ref()
                            .and_then(|c| c.get("requires_sme"))
                            .and_then(|v| v.as_bool())
                            .unwrap_or(false),
                    });
                }
                Err(e) => set_error.set(Some(format!("Failed to load option: {}", e))),
            }
            if let Ok(entries) = api::fetch_option_history(id).await {
                set_history.set(entries);
            }
        });
    }

    let save = move |_| {
        let f = form.get();
        if f.label.trim().is_empty() {
            set_error.set(Some("Label is required".to_string()));
            return;
        }

        let config = if is_proposed_action {
            Some(serde_json::json!({ "requires_sme": f.requires_sme }))
        } else {
            None
        };

        let category = category_for_save.clone();
        spawn_local(async move {
            let result = match option_id {
                Some(id) => {
                    let payload = LookupOptionUpdate {
                        label: Some(f.label.clone()),
                        description: if f.description.trim().is_empty() {
                            None
                        } else {
                            Some(f.description.clone())
                        },
                        color: if f.color.trim().is_empty() {
                            None
                        } else {
                            Some(f.color.clone())
                        },
                        group_name: if f.group_name.trim().is_empty() {
                            None
                        } else {
                            Some(f.group_name.clone())
                        },
                        group_order: Some(f.group_order),
                        sort_order: Some(f.sort_order),
                        is_active: None,
                        config,
                    };
                    api::update_option(id, &payload).await.map(|_| ())
                }
                None => {
                    if f.value.trim().is_empty() {
                        set_error.set(Some("Value is required".to_string()));
                        return;
                    }
                    let payload = LookupOptionCreate {
                        category,
                        value: f.value.clone(),
                        label: f.label.clone(),
                        description: if f.description.trim().is_empty() {
                            None
                        } else {
                            Some(f.description.clone())
                        },
                        color: if f.color.trim().is_empty() {
                            None
                        } else {
                            Some(f.color.clone())
                        },
                        group_name: if f.group_name.trim().is_empty() {
                            None
                        } else {
                            Some(f.group_name.clone())
                        },
                        group_order: f.group_order,
                        sort_order: f.sort_order,
                        config,
                    };
                    api::create_option(&payload).await.map(|_| ())
                }
            };
            match result {
                Ok(()) => on_saved.run(()),
                Err(e) => set_error.set(Some(format!("Save failed: {}", e))),
            }
        });
    };

    view! {
        <div class="details-container">
            <div class="details-header">
                <h3>{if is_edit { "Edit lookup option" } else { "New lookup option" }}</h3>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label>{"Value"}</label>
                    <input
                        type="text"
                        class="form-control"
                        disabled=is_edit
                        prop:value=move || form.get().value
                        on:input=move |ev| form.update(|f| f.value = event_target_value(&ev))
                        placeholder="stable identifier, e.g. scrap_partial"
                    />
                </div>

                <div class="form-group">
                    <label>{"Label"}</label>
                    <input
                        type="text"
                        class="form-control"
                        prop:value=move || form.get().label
                        on:input=move |ev| form.update(|f| f.label = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label>{"Description"}</label>
                    <input
                        type="text"
                        class="form-control"
                        prop:value=move || form.get().description
                        on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label>{"Badge color (#rrggbb)"}</label>
                    <input
                        type="text"
                        class="form-control"
                        prop:value=move || form.get().color
                        on:input=move |ev| form.update(|f| f.color = event_target_value(&ev))
                        placeholder="#ff9800"
                    />
                </div>

                <div class="form-group">
                    <label>{"Group name"}</label>
                    <input
                        type="text"
                        class="form-control"
                        prop:value=move || form.get().group_name
                        on:input=move |ev| form.update(|f| f.group_name = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label>{"Group order"}</label>
                    <input
                        type="number"
                        class="form-control"
                        prop:value=move || form.get().group_order.to_string()
                        on:change=move |ev| {
                            let v = event_target_value(&ev).trim().parse().unwrap_or(0);
                            form.update(|f| f.group_order = v);
                        }
                    />
                </div>

                <div class="form-group">
                    <label>{"Sort order"}</label>
                    <input
                        type="number"
                        class="form-control"
                        prop:value=move || form.get().sort_order.to_string()
                        on:change=move |ev| {
                            let v = event_target_value(&ev).trim().parse().unwrap_or(0);
                            form.update(|f| f.sort_order = v);
                        }
                    />
                </div>

                {if is_proposed_action {
                    view! {
                        <label style="display: flex; align-items: center; gap: 8px; padding: 6px 0;">
                            <input
                                type="checkbox"
                                prop:checked=move || form.get().requires_sme
                                on:change=move |ev| {
                                    let v = event_target_checked(&ev);
                                    form.update(|f| f.requires_sme = v);
                                }
                            />
                            <span>{"Requires SME investigation"}</span>
                        </label>
                    }.into_any()
                } else {
                    view! { <></> }.into_any()
                }}

                <div style="display: flex; gap: 8px; margin-top: 12px;">
                    <button class="btn btn-primary" on:click=save>{"Save"}</button>
                    <button class="btn btn-secondary" on:click=move |_| on_cancel.run(())>{"Cancel"}</button>
                </div>
            </div>

            {move || {
                let entries = history.get();
                if entries.is_empty() {
                    return view! { <></> }.into_any();
                }
                view! {
                    <div style="margin-top: 16px;">
                        <h4>{"Change history"}</h4>
                        <div class="table-container">
                            <table>
                                <thead>
                                    <tr>
                                        <th>{"When"}</th>
                                        <th>{"Change"}</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {entries.into_iter().map(|h| {
                                        view! {
                                            <tr>
                                                <td>{format_datetime(&h.changed_at.to_rfc3339())}</td>
                                                <td>{h.change_type.clone()}</td>
                                            </tr>
                                        }
                                    }).collect_view()}
                                </tbody>
                            </table>
                        </div>
                    </div>
                }
                .into_any()
            }}
        </div>
    }
}
