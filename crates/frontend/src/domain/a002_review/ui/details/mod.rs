pub mod steps;
pub mod view_model;

use contracts::domain::a002_review::ReviewStep;
use leptos::prelude::*;

use crate::domain::a002_review::ui::comments::CommentsSection;
use crate::layout::global_context::AppGlobalContext;
use steps::assignment::AssignmentStep;
use steps::checklist::ChecklistStep;
use steps::final_decision::FinalDecisionStep;
use steps::follow_up::FollowUpStep;
use steps::general_info::GeneralInfoStep;
use steps::sme_investigation::SmeInvestigationStep;
use view_model::ReviewWizardViewModel;

/// Multi-step review wizard. `review_id = None` starts a new draft; the
/// first save creates the review and the tab is retitled with its id.
#[component]
#[allow(non_snake_case)]
pub fn ReviewDetails(
    material_number: i64,
    review_id: Option<i64>,
    on_close: Callback<()>,
) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    let vm = ReviewWizardViewModel::new(material_number);
    vm.load(review_id);

    // Tab content is torn down on every tab switch. Unsaved new-draft input
    // is parked in the global form-state store and restored here; loaded
    // reviews are prefilled from the server instead.
    let form_key = format!("a002_review_new_{}", material_number);
    if review_id.is_none() {
        if let Some(saved) = ctx.get_form_state(&form_key) {
            if let Ok(form) = serde_json::from_value(saved) {
                vm.form.set(form);
            }
        }
    }
    on_cleanup(move || {
        if vm.review.get_untracked().is_none() {
            if let Ok(value) = serde_json::to_value(vm.form.get_untracked()) {
                ctx.set_form_state(form_key.clone(), value);
            }
        }
    });

    let on_created = Callback::new(move |id: i64| {
        ctx.update_tab_title(
            &format!("a002_review_new_{}", material_number),
            &format!("Review #{}", id),
        );
    });

    let status_label = move || {
        vm.review
            .get()
            .map(|r| r.status.label())
            .unwrap_or("New draft")
    };

    let guidance = move || {
        vm.review
            .get()
            .and_then(|r| r.user_context)
            .and_then(|ctx| ctx.guidance)
    };

    let step_indicator = move || {
        let current = vm.current_step.get();
        vm.visible_steps()
            .into_iter()
            .enumerate()
            .map(|(index, step)| {
                let reachable = vm.is_step_reachable(step);
                let complete = vm.is_step_complete(step);
                let active = step == current;
                let style = format!(
                    "display: inline-flex; align-items: center; gap: 6px; padding: 6px 12px; border-radius: 16px; font-size: 13px; {} {}",
                    if active {
                        "background: #1565c0; color: white;"
                    } else if complete {
                        "background: #e8f5e9; color: #2e7d32;"
                    } else {
                        "background: #f0f0f0; color: #666;"
                    },
                    if reachable { "cursor: pointer;" } else { "opacity: 0.5;" }
                );
                view! {
                    <div style={style} on:click=move |_| vm.go_to_step(step)>
                        <span>{format!("{}.", index + 1)}</span>
                        <span>{step.title()}</span>
                        {if complete && !active {
                            view! { <span>{"✓"}</span> }.into_any()
                        } else {
                            view! { <></> }.into_any()
                        }}
                    </div>
                }
            })
            .collect_view()
    };

    let save_label = move || {
        if vm.saving.get() {
            "Saving...".to_string()
        } else if vm.review.get().is_none() {
            "Create review".to_string()
        } else {
            match vm.current_step.get() {
                ReviewStep::Assignment => "Assign".to_string(),
                ReviewStep::FinalDecision => "Submit decision".to_string(),
                _ => "Save & continue".to_string(),
            }
        }
    };

    let can_save = move || {
        let step = vm.current_step.get();
        !vm.saving.get() && vm.can_edit(step)
    };

    view! {
        <div class="content">
            <div class="header">
                <h2>
                    {move || match vm.review.get().and_then(|r| r.review_id) {
                        Some(id) => format!("Review #{} — material {}", id, material_number),
                        None => format!("New review — material {}", material_number),
                    }}
                </h2>
                <div class="header-actions">
                    <span style="padding: 4px 10px; border-radius: 12px; background: #f0f0f0; font-size: 13px;">
                        {status_label}
                    </span>
                    {move || if vm.review.get().is_some() && !vm.is_read_only() {
                        view! {
                            <button class="btn btn-danger" on:click=move |_| vm.cancel_review(on_close)>
                                {"Cancel review"}
                            </button>
                        }.into_any()
                    } else {
                        view! { <></> }.into_any()
                    }}
                    <button class="btn btn-secondary" on:click=move |_| on_close.run(())>
                        {"Close"}
                    </button>
                </div>
            </div>

            {move || guidance().map(|text| view! {
                <div style="background: #e8f0fe; border-left: 4px solid #1565c0; padding: 8px 12px; margin-bottom: 12px;">
                    {text}
                </div>
            })}

            {move || if vm.is_read_only() {
                view! {
                    <div style="background: #fff3e0; border-left: 4px solid #ff9800; padding: 8px 12px; margin-bottom: 12px;">
                        {"This review is closed and can no longer be edited."}
                    </div>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div style="display: flex; flex-wrap: wrap; gap: 8px; margin-bottom: 16px;">
                {step_indicator}
            </div>

            <div style="max-width: 640px;">
                {move || match vm.current_step.get() {
                    ReviewStep::GeneralInfo => view! { <GeneralInfoStep vm=vm /> }.into_any(),
                    ReviewStep::Checklist => view! { <ChecklistStep vm=vm /> }.into_any(),
                    ReviewStep::Assignment => view! { <AssignmentStep vm=vm /> }.into_any(),
                    ReviewStep::SmeInvestigation => {
                        view! { <SmeInvestigationStep vm=vm /> }.into_any()
                    }
                    ReviewStep::FollowUp => view! { <FollowUpStep vm=vm /> }.into_any(),
                    ReviewStep::FinalDecision => view! { <FinalDecisionStep vm=vm /> }.into_any(),
                }}

                <div style="display: flex; gap: 8px; margin-top: 16px;">
                    <button
                        class="btn btn-primary"
                        disabled=move || !can_save()
                        on:click=move |_| vm.save_current_step(on_created)
                    >
                        {save_label}
                    </button>
                </div>
            </div>

            {move || {
                let loaded = vm.review.get().and_then(|r| r.review_id);
                match loaded {
                    Some(id) => view! {
                        <div style="margin-top: 24px;">
                            <CommentsSection material_number=material_number review_id=id />
                        </div>
                    }
                    .into_any(),
                    None => view! { <></> }.into_any(),
                }
            }}
        </div>
    }
}
