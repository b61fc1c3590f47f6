use contracts::domain::a002_review::ReviewStep;
use contracts::domain::a003_assignment::aggregate::UserWithPermission;
use leptos::prelude::*;

use crate::domain::a002_review::ui::details::view_model::ReviewWizardViewModel;

fn user_option(user: &UserWithPermission, selected: Signal<String>) -> impl IntoView {
    let id = user.user_id.to_string();
    let id_for_selected = id.clone();
    let label = match &user.sme_type {
        Some(t) => format!("{} ({})", user.full_name, t),
        None => user.full_name.clone(),
    };
    view! {
        <option value={id} selected=move || selected.get() == id_for_selected>{label}</option>
    }
}

#[component]
pub fn AssignmentStep(vm: ReviewWizardViewModel) -> impl IntoView {
    let disabled = Signal::derive(move || !vm.can_edit(ReviewStep::Assignment));

    let sme_value = Signal::derive(move || vm.assignment.get().sme_user_id);
    let approver_value = Signal::derive(move || vm.assignment.get().approver_user_id);

    view! {
        <div class="step-form">
            {move || if vm.sme_required() {
                view! {
                    <div class="form-group">
                        <label>{"SME (subject-matter expert)"}</label>
                        <select
                            class="form-control"
                            disabled=move || disabled.get()
                            on:change=move |ev| {
                                let v = event_target_value(&ev);
                                vm.assignment.update(|a| a.sme_user_id = v);
                            }
                        >
                            <option value="" selected=move || sme_value.get().is_empty()>{"— select SME —"}</option>
                            {vm.sme_users.get().iter().map(|u| user_option(u, sme_value)).collect_view()}
                        </select>
                    </div>
                }.into_any()
            } else {
                view! {
                    <p style="color: #666;">
                        {"The proposed action does not require an SME investigation; only an approver is assigned."}
                    </p>
                }.into_any()
            }}

            <div class="form-group">
                <label>{"Approver"}</label>
                <select
                    class="form-control"
                    disabled=move || disabled.get()
                    on:change=move |ev| {
                        let v = event_target_value(&ev);
                        vm.assignment.update(|a| a.approver_user_id = v);
                    }
                >
                    <option value="" selected=move || approver_value.get().is_empty()>{"— select approver —"}</option>
                    {move || vm.approver_users.get().iter().map(|u| user_option(u, approver_value)).collect_view()}
                </select>
            </div>

            {move || {
                let review = vm.review.get();
                let (sme, approver) = review
                    .map(|r| (r.assigned_sme_name, r.assigned_approver_name))
                    .unwrap_or((None, None));
                if sme.is_none() && approver.is_none() {
                    return view! { <></> }.into_any();
                }
                view! {
                    <div style="background: #fafafa; border: 1px solid #eee; border-radius: 4px; padding: 8px 12px;">
                        <div style="font-size: 12px; color: #666;">{"Current assignments"}</div>
                        {sme.map(|name| view! { <div>{format!("SME: {}", name)}</div> })}
                        {approver.map(|name| view! { <div>{format!("Approver: {}", name)}</div> })}
                    </div>
                }
                .into_any()
            }}
        </div>
    }
}
