pub mod assignment;
pub mod checklist;
pub mod final_decision;
pub mod follow_up;
pub mod general_info;
pub mod sme_investigation;

use contracts::domain::a005_lookup::aggregate::LookupOptionsGrouped;
use leptos::prelude::*;

/// Select backed by a lookup category, rendered with option groups.
#[component]
pub fn LookupSelect(
    #[prop(into)] options: Signal<Option<LookupOptionsGrouped>>,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <select
            class="form-control"
            disabled=move || disabled.get()
            on:change=move |ev| on_change.run(event_target_value(&ev))
        >
            <option value="" selected=move || value.get().is_empty()>{"— select —"}</option>
            {move || {
                let Some(grouped) = options.get() else {
                    return view! { <></> }.into_any();
                };
                if grouped.groups.is_empty() {
                    grouped
                        .options
                        .into_iter()
                        .filter(|o| o.is_active)
                        .map(|o| {
                            let v = o.value.clone();
                            view! {
                                <option value={o.value.clone()} selected=move || value.get() == v>
                                    {o.label.clone()}
                                </option>
                            }
                        })
                        .collect_view()
                        .into_any()
                } else {
                    grouped
                        .groups
                        .into_iter()
                        .map(|group| {
                            let label = group.group_name.clone().unwrap_or_default();
                            view! {
                                <optgroup label={label}>
                                    {group
                                        .options
                                        .into_iter()
                                        .filter(|o| o.is_active)
                                        .map(|o| {
                                            let v = o.value.clone();
                                            view! {
                                                <option value={o.value.clone()} selected=move || value.get() == v>
                                                    {o.label.clone()}
                                                </option>
                                            }
                                        })
                                        .collect_view()}
                                </optgroup>
                            }
                        })
                        .collect_view()
                        .into_any()
                }
            }}
        </select>
    }
}

/// Numeric input bound to an `Option<f64>` form field.
#[component]
pub fn NumberField(
    label: &'static str,
    #[prop(into)] value: Signal<Option<f64>>,
    #[prop(into)] on_change: Callback<Option<f64>>,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label>{label}</label>
            <input
                type="number"
                class="form-control"
                disabled=move || disabled.get()
                prop:value=move || value.get().map(|v| v.to_string()).unwrap_or_default()
                on:change=move |ev| {
                    let text = event_target_value(&ev);
                    let parsed = text.trim().parse::<f64>().ok();
                    on_change.run(parsed);
                }
            />
        </div>
    }
}

/// Multi-line text input bound to an `Option<String>` form field.
#[component]
pub fn TextAreaField(
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(into)] disabled: Signal<bool>,
    #[prop(optional)] rows: Option<u32>,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label>{label}</label>
            <textarea
                class="form-control"
                rows=rows.unwrap_or(3)
                disabled=move || disabled.get()
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            ></textarea>
        </div>
    }
}

/// Checkbox row for the checklist step.
#[component]
pub fn CheckRow(
    label: &'static str,
    #[prop(into)] value: Signal<bool>,
    #[prop(into)] on_change: Callback<bool>,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <label style="display: flex; align-items: center; gap: 8px; padding: 6px 0;">
            <input
                type="checkbox"
                disabled=move || disabled.get()
                prop:checked=move || value.get()
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
            <span>{label}</span>
        </label>
    }
}

pub(super) fn none_if_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}
