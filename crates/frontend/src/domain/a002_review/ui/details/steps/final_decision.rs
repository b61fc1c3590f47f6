use chrono::NaiveDate;
use contracts::domain::a002_review::ReviewStep;
use leptos::prelude::*;

use super::{none_if_blank, LookupSelect, NumberField, TextAreaField};
use crate::domain::a002_review::ui::details::view_model::ReviewWizardViewModel;

#[component]
pub fn FinalDecisionStep(vm: ReviewWizardViewModel) -> impl IntoView {
    let disabled = Signal::derive(move || !vm.can_edit(ReviewStep::FinalDecision));

    view! {
        <div class="step-form">
            {move || {
                let review = vm.review.get();
                let Some(r) = review else {
                    return view! { <></> }.into_any();
                };
                if r.sme_recommendation.is_none() {
                    return view! { <></> }.into_any();
                }
                view! {
                    <div style="background: #fafafa; border: 1px solid #eee; border-radius: 4px; padding: 8px 12px; margin-bottom: 12px;">
                        <div style="font-size: 12px; color: #666;">{"SME recommendation"}</div>
                        <div>{r.sme_recommendation.clone().unwrap_or_default()}</div>
                        {r.sme_analysis.clone().map(|a| view! { <div style="font-size: 13px; color: #444;">{a}</div> })}
                    </div>
                }
                .into_any()
            }}

            <div class="form-group">
                <label>{"Decision"}</label>
                <LookupSelect
                    options=Signal::derive(move || vm.final_decisions.get())
                    value=Signal::derive(move || vm.form.get().final_decision.unwrap_or_default())
                    on_change=Callback::new(move |v: String| {
                        vm.form.update(|f| f.final_decision = none_if_blank(v));
                    })
                    disabled=disabled
                />
                <div style="font-size: 12px; color: #666; margin-top: 4px;">
                    {"Choosing \"reject\" closes the review without stock changes."}
                </div>
            </div>

            <NumberField
                label="Final safety stock quantity"
                value=Signal::derive(move || vm.form.get().final_safety_stock_qty)
                on_change=Callback::new(move |v| vm.form.update(|f| f.final_safety_stock_qty = v))
                disabled=disabled
            />

            <NumberField
                label="Final unrestricted quantity"
                value=Signal::derive(move || vm.form.get().final_unrestricted_qty)
                on_change=Callback::new(move |v| vm.form.update(|f| f.final_unrestricted_qty = v))
                disabled=disabled
            />

            <NumberField
                label="Estimated savings"
                value=Signal::derive(move || vm.form.get().estimated_savings)
                on_change=Callback::new(move |v| vm.form.update(|f| f.estimated_savings = v))
                disabled=disabled
            />

            <div class="form-group">
                <label>{"Implementation date"}</label>
                <input
                    type="date"
                    class="form-control"
                    disabled=move || disabled.get()
                    prop:value=move || vm.form.get().implementation_date.map(|d| d.to_string()).unwrap_or_default()
                    on:change=move |ev| {
                        let parsed = NaiveDate::parse_from_str(&event_target_value(&ev), "%Y-%m-%d").ok();
                        vm.form.update(|f| f.implementation_date = parsed);
                    }
                />
            </div>

            <TextAreaField
                label="Notes"
                value=Signal::derive(move || vm.form.get().final_notes.unwrap_or_default())
                on_change=Callback::new(move |v: String| {
                    vm.form.update(|f| f.final_notes = none_if_blank(v));
                })
                disabled=disabled
                rows=4
            />
        </div>
    }
}
