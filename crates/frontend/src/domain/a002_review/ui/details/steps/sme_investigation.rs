use contracts::domain::a002_review::ReviewStep;
use leptos::prelude::*;

use super::{none_if_blank, LookupSelect, NumberField, TextAreaField};
use crate::domain::a002_review::ui::details::view_model::ReviewWizardViewModel;

#[component]
pub fn SmeInvestigationStep(vm: ReviewWizardViewModel) -> impl IntoView {
    let disabled = Signal::derive(move || !vm.can_edit(ReviewStep::SmeInvestigation));

    view! {
        <div class="step-form">
            <p style="color: #666;">
                {"Saving without a recommendation keeps the review with the SME; \
                  a recommendation submits it for the final decision."}
            </p>

            <div class="form-group">
                <label>{"Recommendation"}</label>
                <LookupSelect
                    options=Signal::derive(move || vm.sme_recommendations.get())
                    value=Signal::derive(move || vm.form.get().sme_recommendation.unwrap_or_default())
                    on_change=Callback::new(move |v: String| {
                        vm.form.update(|f| f.sme_recommendation = none_if_blank(v));
                    })
                    disabled=disabled
                />
            </div>

            <NumberField
                label="Recommended safety stock quantity"
                value=Signal::derive(move || vm.form.get().sme_recommended_safety_stock_qty)
                on_change=Callback::new(move |v| {
                    vm.form.update(|f| f.sme_recommended_safety_stock_qty = v);
                })
                disabled=disabled
            />

            <NumberField
                label="Recommended unrestricted quantity"
                value=Signal::derive(move || vm.form.get().sme_recommended_unrestricted_qty)
                on_change=Callback::new(move |v| {
                    vm.form.update(|f| f.sme_recommended_unrestricted_qty = v);
                })
                disabled=disabled
            />

            <TextAreaField
                label="Analysis"
                value=Signal::derive(move || vm.form.get().sme_analysis.unwrap_or_default())
                on_change=Callback::new(move |v: String| {
                    vm.form.update(|f| f.sme_analysis = none_if_blank(v));
                })
                disabled=disabled
                rows=4
            />

            <TextAreaField
                label="Alternative applications"
                value=Signal::derive(move || vm.form.get().alternative_applications.unwrap_or_default())
                on_change=Callback::new(move |v: String| {
                    vm.form.update(|f| f.alternative_applications = none_if_blank(v));
                })
                disabled=disabled
                rows=3
            />

            <TextAreaField
                label="Risk assessment"
                value=Signal::derive(move || vm.form.get().risk_assessment.unwrap_or_default())
                on_change=Callback::new(move |v: String| {
                    vm.form.update(|f| f.risk_assessment = none_if_blank(v));
                })
                disabled=disabled
                rows=3
            />
        </div>
    }
}
