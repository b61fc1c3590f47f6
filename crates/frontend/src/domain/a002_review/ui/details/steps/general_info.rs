use contracts::domain::a002_review::ReviewStep;
use leptos::prelude::*;

use super::{none_if_blank, LookupSelect, NumberField, TextAreaField};
use crate::domain::a002_review::ui::details::view_model::ReviewWizardViewModel;

#[component]
pub fn GeneralInfoStep(vm: ReviewWizardViewModel) -> impl IntoView {
    let disabled = Signal::derive(move || !vm.can_edit(ReviewStep::GeneralInfo));

    view! {
        <div class="step-form">
            <div class="form-group">
                <label>{"Review reason"}</label>
                <LookupSelect
                    options=Signal::derive(move || vm.review_reasons.get())
                    value=Signal::derive(move || vm.form.get().review_reason.unwrap_or_default())
                    on_change=Callback::new(move |v: String| {
                        vm.form.update(|f| f.review_reason = none_if_blank(v));
                    })
                    disabled=disabled
                />
            </div>

            <NumberField
                label="Current stock quantity"
                value=Signal::derive(move || vm.form.get().current_stock_qty)
                on_change=Callback::new(move |v| vm.form.update(|f| f.current_stock_qty = v))
                disabled=disabled
            />

            <NumberField
                label="Current stock value"
                value=Signal::derive(move || vm.form.get().current_stock_value)
                on_change=Callback::new(move |v| vm.form.update(|f| f.current_stock_value = v))
                disabled=disabled
            />

            <div class="form-group">
                <label>{"Months without movement"}</label>
                <input
                    type="number"
                    class="form-control"
                    disabled=move || disabled.get()
                    prop:value=move || vm.form.get().months_no_movement.map(|v| v.to_string()).unwrap_or_default()
                    on:change=move |ev| {
                        let parsed = event_target_value(&ev).trim().parse::<i32>().ok();
                        vm.form.update(|f| f.months_no_movement = parsed);
                    }
                />
            </div>

            <div class="form-group">
                <label>{"Proposed action"}</label>
                <LookupSelect
                    options=Signal::derive(move || vm.proposed_actions.get())
                    value=Signal::derive(move || vm.form.get().proposed_action.unwrap_or_default())
                    on_change=Callback::new(move |v: String| {
                        vm.form.update(|f| f.proposed_action = none_if_blank(v));
                    })
                    disabled=disabled
                />
                {move || if vm.sme_required() {
                    view! {
                        <div style="font-size: 12px; color: #ff9800; margin-top: 4px;">
                            {"This action requires an SME investigation"}
                        </div>
                    }.into_any()
                } else {
                    view! { <></> }.into_any()
                }}
            </div>

            <NumberField
                label="Proposed safety stock quantity"
                value=Signal::derive(move || vm.form.get().proposed_safety_stock_qty)
                on_change=Callback::new(move |v| vm.form.update(|f| f.proposed_safety_stock_qty = v))
                disabled=disabled
            />

            <NumberField
                label="Proposed unrestricted quantity"
                value=Signal::derive(move || vm.form.get().proposed_unrestricted_qty)
                on_change=Callback::new(move |v| vm.form.update(|f| f.proposed_unrestricted_qty = v))
                disabled=disabled
            />

            <TextAreaField
                label="Business justification"
                value=Signal::derive(move || vm.form.get().business_justification.unwrap_or_default())
                on_change=Callback::new(move |v: String| {
                    vm.form.update(|f| f.business_justification = none_if_blank(v));
                })
                disabled=disabled
                rows=4
            />
        </div>
    }
}
