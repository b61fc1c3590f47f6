use chrono::NaiveDate;
use contracts::domain::a002_review::ReviewStep;
use leptos::prelude::*;

use super::{none_if_blank, TextAreaField};
use crate::domain::a002_review::ui::details::view_model::ReviewWizardViewModel;

#[component]
pub fn FollowUpStep(vm: ReviewWizardViewModel) -> impl IntoView {
    let disabled = Signal::derive(move || !vm.can_edit(ReviewStep::FollowUp));
    let requires = Signal::derive(move || vm.form.get().requires_follow_up.unwrap_or(false));

    view! {
        <div class="step-form">
            <p style="color: #666;">{"Optional: schedule a follow-up review for this material."}</p>

            <label style="display: flex; align-items: center; gap: 8px; padding: 6px 0;">
                <input
                    type="checkbox"
                    disabled=move || disabled.get()
                    prop:checked=move || requires.get()
                    on:change=move |ev| {
                        let v = event_target_checked(&ev);
                        vm.form.update(|f| f.requires_follow_up = Some(v));
                    }
                />
                <span>{"Requires follow-up"}</span>
            </label>

            {move || if requires.get() {
                view! {
                    <div>
                        <div class="form-group">
                            <label>{"Next review date"}</label>
                            <input
                                type="date"
                                class="form-control"
                                disabled=move || disabled.get()
                                prop:value=move || vm.form.get().next_review_date.map(|d| d.to_string()).unwrap_or_default()
                                on:change=move |ev| {
                                    let parsed = NaiveDate::parse_from_str(&event_target_value(&ev), "%Y-%m-%d").ok();
                                    vm.form.update(|f| f.next_review_date = parsed);
                                }
                            />
                        </div>

                        <div class="form-group">
                            <label>{"Review frequency (weeks)"}</label>
                            <input
                                type="number"
                                class="form-control"
                                disabled=move || disabled.get()
                                prop:value=move || vm.form.get().review_frequency_weeks.map(|v| v.to_string()).unwrap_or_default()
                                on:change=move |ev| {
                                    let parsed = event_target_value(&ev).trim().parse::<i32>().ok();
                                    vm.form.update(|f| f.review_frequency_weeks = parsed);
                                }
                            />
                        </div>

                        <TextAreaField
                            label="Follow-up reason"
                            value=Signal::derive(move || vm.form.get().follow_up_reason.unwrap_or_default())
                            on_change=Callback::new(move |v: String| {
                                vm.form.update(|f| f.follow_up_reason = none_if_blank(v));
                            })
                            disabled=disabled
                            rows=3
                        />
                    </div>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </div>
    }
}
