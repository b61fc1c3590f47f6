use contracts::domain::a002_review::ReviewStep;
use leptos::prelude::*;

use super::{none_if_blank, CheckRow, NumberField, TextAreaField};
use crate::domain::a002_review::ui::details::view_model::ReviewWizardViewModel;

#[component]
pub fn ChecklistStep(vm: ReviewWizardViewModel) -> impl IntoView {
    let disabled = Signal::derive(move || !vm.can_edit(ReviewStep::Checklist));

    view! {
        <div class="step-form">
            <p style="color: #666;">
                {"Confirm each verification before the review can move to assignment."}
            </p>

            <CheckRow
                label="Checked for open purchase/production orders"
                value=Signal::derive(move || vm.form.get().has_open_orders.unwrap_or(false))
                on_change=Callback::new(move |v| vm.form.update(|f| f.has_open_orders = Some(v)))
                disabled=disabled
            />
            <TextAreaField
                label="Open order numbers (if any)"
                value=Signal::derive(move || vm.form.get().open_order_numbers.unwrap_or_default())
                on_change=Callback::new(move |v: String| {
                    vm.form.update(|f| f.open_order_numbers = none_if_blank(v));
                })
                disabled=disabled
                rows=2
            />

            <CheckRow
                label="Checked forecast demand"
                value=Signal::derive(move || vm.form.get().has_forecast_demand.unwrap_or(false))
                on_change=Callback::new(move |v| vm.form.update(|f| f.has_forecast_demand = Some(v)))
                disabled=disabled
            />
            <NumberField
                label="Forecast next 12 months"
                value=Signal::derive(move || vm.form.get().forecast_next_12m)
                on_change=Callback::new(move |v| vm.form.update(|f| f.forecast_next_12m = v))
                disabled=disabled
            />

            <CheckRow
                label="Checked stock at alternate plants"
                value=Signal::derive(move || vm.form.get().checked_alternate_plants.unwrap_or(false))
                on_change=Callback::new(move |v| vm.form.update(|f| f.checked_alternate_plants = Some(v)))
                disabled=disabled
            />
            <NumberField
                label="Quantity available at alternate plants"
                value=Signal::derive(move || vm.form.get().alternate_plant_qty)
                on_change=Callback::new(move |v| vm.form.update(|f| f.alternate_plant_qty = v))
                disabled=disabled
            />

            <CheckRow
                label="Contacted procurement"
                value=Signal::derive(move || vm.form.get().contacted_procurement.unwrap_or(false))
                on_change=Callback::new(move |v| vm.form.update(|f| f.contacted_procurement = Some(v)))
                disabled=disabled
            />
            <TextAreaField
                label="Procurement feedback"
                value=Signal::derive(move || vm.form.get().procurement_feedback.unwrap_or_default())
                on_change=Callback::new(move |v: String| {
                    vm.form.update(|f| f.procurement_feedback = none_if_blank(v));
                })
                disabled=disabled
                rows=2
            />

            <CheckRow
                label="Reviewed BOM usage"
                value=Signal::derive(move || vm.form.get().reviewed_bom_usage.unwrap_or(false))
                on_change=Callback::new(move |v| vm.form.update(|f| f.reviewed_bom_usage = Some(v)))
                disabled=disabled
            />
            <CheckRow
                label="Checked supersession chain"
                value=Signal::derive(move || vm.form.get().checked_supersession.unwrap_or(false))
                on_change=Callback::new(move |v| vm.form.update(|f| f.checked_supersession = Some(v)))
                disabled=disabled
            />
            <CheckRow
                label="Checked historical usage"
                value=Signal::derive(move || vm.form.get().checked_historical_usage.unwrap_or(false))
                on_change=Callback::new(move |v| vm.form.update(|f| f.checked_historical_usage = Some(v)))
                disabled=disabled
            />
        </div>
    }
}
