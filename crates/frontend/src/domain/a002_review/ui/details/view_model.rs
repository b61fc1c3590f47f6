use contracts::domain::a002_review::aggregate::{
    MaterialReview, MaterialReviewCreate, MaterialReviewUpdate,
};
use contracts::domain::a002_review::{workflow, ReviewStep};
use contracts::domain::a003_assignment::aggregate::{AssignmentStepPayload, UserWithPermission};
use contracts::domain::a005_lookup::aggregate::LookupOptionsGrouped;
use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

use crate::domain::a002_review::api;
use crate::domain::a005_lookup::api as lookup_api;

/// Assignment step form state (user ids as strings straight from selects).
#[derive(Clone, Debug, Default)]
pub struct AssignmentForm {
    pub sme_user_id: String,
    pub approver_user_id: String,
}

/// ViewModel for the multi-step review wizard.
///
/// Holds the loaded review, the wizard position and a single accumulated
/// form; step gating comes from `contracts::domain::a002_review::workflow`.
/// Step saves PUT the step's slice of the form and swap in the echoed
/// review, so the wizard advances without refetching.
#[derive(Clone, Copy)]
pub struct ReviewWizardViewModel {
    pub material_number: i64,
    pub review: RwSignal<Option<MaterialReview>>,
    pub current_step: RwSignal<ReviewStep>,
    pub form: RwSignal<MaterialReviewUpdate>,
    pub assignment: RwSignal<AssignmentForm>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,

    // Lookup-driven dropdowns
    pub review_reasons: RwSignal<Option<LookupOptionsGrouped>>,
    pub proposed_actions: RwSignal<Option<LookupOptionsGrouped>>,
    pub sme_recommendations: RwSignal<Option<LookupOptionsGrouped>>,
    pub final_decisions: RwSignal<Option<LookupOptionsGrouped>>,

    // Assignment pickers
    pub sme_users: RwSignal<Vec<UserWithPermission>>,
    pub approver_users: RwSignal<Vec<UserWithPermission>>,
}

impl ReviewWizardViewModel {
    pub fn new(material_number: i64) -> Self {
        Self {
            material_number,
            review: RwSignal::new(None),
            current_step: RwSignal::new(ReviewStep::GeneralInfo),
            form: RwSignal::new(MaterialReviewUpdate::default()),
            assignment: RwSignal::new(AssignmentForm::default()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            review_reasons: RwSignal::new(None),
            proposed_actions: RwSignal::new(None),
            sme_recommendations: RwSignal::new(None),
            final_decisions: RwSignal::new(None),
            sme_users: RwSignal::new(Vec::new()),
            approver_users: RwSignal::new(Vec::new()),
        }
    }

    pub fn load(&self, review_id: Option<i64>) {
        self.load_lookups();
        self.load_users();

        let Some(id) = review_id else {
            return;
        };

        let vm = *self;
        spawn_local(async move {
            match api::fetch_review(vm.material_number, id).await {
                Ok(review) => vm.apply_review(review),
                Err(e) => vm.error.set(Some(format!("Failed to load review: {}", e))),
            }
        });
    }

    fn load_lookups(&self) {
        let targets = [
            ("review_reason", self.review_reasons),
            ("proposed_action", self.proposed_actions),
            ("sme_recommendation", self.sme_recommendations),
            ("final_decision", self.final_decisions),
        ];
        for (category, slot) in targets {
            spawn_local(async move {
                if let Ok(options) = lookup_api::fetch_category(category).await {
                    slot.set(Some(options));
                }
            });
        }
    }

    fn load_users(&self) {
        let smes = self.sme_users;
        let approvers = self.approver_users;
        spawn_local(async move {
            if let Ok(users) = api::fetch_users_by_permission("can_provide_sme_review").await {
                smes.set(users);
            }
        });
        spawn_local(async move {
            if let Ok(users) = api::fetch_users_by_permission("can_approve_reviews").await {
                approvers.set(users);
            }
        });
    }

    /// Swap in a server echo and recompute the wizard position from it.
    pub fn apply_review(&self, review: MaterialReview) {
        self.prefill_form(&review);
        self.assignment.set(AssignmentForm {
            sme_user_id: review
                .assigned_sme_id
                .map(|u| u.to_string())
                .unwrap_or_default(),
            approver_user_id: review
                .assigned_approver_id
                .map(|u| u.to_string())
                .unwrap_or_default(),
        });
        self.current_step.set(review.current_step);
        self.review.set(Some(review));
    }

    /// Optional-field mapping from the record into the form, so every step
    /// opens pre-populated.
    fn prefill_form(&self, review: &MaterialReview) {
        let checklist = review.checklist.clone();
        self.form.set(MaterialReviewUpdate {
            review_reason: review.review_reason.clone(),
            current_stock_qty: review.current_stock_qty,
            current_stock_value: review.current_stock_value,
            months_no_movement: review.months_no_movement,
            proposed_action: review.proposed_action.clone(),
            proposed_safety_stock_qty: review.proposed_safety_stock_qty,
            proposed_unrestricted_qty: review.proposed_unrestricted_qty,
            business_justification: review.business_justification.clone(),

            has_open_orders: checklist.as_ref().map(|c| c.has_open_orders),
            has_forecast_demand: checklist.as_ref().map(|c| c.has_forecast_demand),
            checked_alternate_plants: checklist.as_ref().map(|c| c.checked_alternate_plants),
            contacted_procurement: checklist.as_ref().map(|c| c.contacted_procurement),
            reviewed_bom_usage: checklist.as_ref().map(|c| c.reviewed_bom_usage),
            checked_supersession: checklist.as_ref().map(|c| c.checked_supersession),
            checked_historical_usage: checklist.as_ref().map(|c| c.checked_historical_usage),
            open_order_numbers: checklist.as_ref().and_then(|c| c.open_order_numbers.clone()),
            forecast_next_12m: checklist.as_ref().and_then(|c| c.forecast_next_12m),
            alternate_plant_qty: checklist.as_ref().and_then(|c| c.alternate_plant_qty),
            procurement_feedback: checklist
                .as_ref()
                .and_then(|c| c.procurement_feedback.clone()),

            sme_recommendation: review.sme_recommendation.clone(),
            sme_recommended_safety_stock_qty: review.sme_recommended_safety_stock_qty,
            sme_recommended_unrestricted_qty: review.sme_recommended_unrestricted_qty,
            sme_analysis: review.sme_analysis.clone(),
            alternative_applications: review.alternative_applications.clone(),
            risk_assessment: review.risk_assessment.clone(),

            final_decision: review.final_decision.clone(),
            final_safety_stock_qty: review.final_safety_stock_qty,
            final_unrestricted_qty: review.final_unrestricted_qty,
            final_notes: review.final_notes.clone(),

            requires_follow_up: review.requires_follow_up,
            next_review_date: review.next_review_date,
            follow_up_reason: review.follow_up_reason.clone(),
            review_frequency_weeks: review.review_frequency_weeks,

            previous_review_id: review.previous_review_id,
            estimated_savings: review.estimated_savings,
            implementation_date: review.implementation_date,

            status: None,
        });
    }

    /// Whether the current user may edit a step right now: the review is
    /// still open and the server-computed user context lists the step.
    /// A new draft (nothing loaded yet) is editable by its author.
    pub fn can_edit(&self, step: ReviewStep) -> bool {
        if self.is_read_only() {
            return false;
        }
        match self.review.get() {
            None => true,
            Some(review) => review
                .user_context
                .as_ref()
                .map(|ctx| ctx.can_edit_step(step))
                .unwrap_or(true),
        }
    }

    pub fn is_read_only(&self) -> bool {
        self.review
            .get()
            .map(|r| r.is_read_only || r.status.is_terminal())
            .unwrap_or(false)
    }

    /// Whether SME review will be needed, preferring the server flag and
    /// falling back to the proposed-action lookup config while drafting.
    pub fn sme_required(&self) -> bool {
        if let Some(review) = self.review.get() {
            if !matches!(
                review.status,
                contracts::domain::a002_review::ReviewStatus::Draft
            ) {
                return review.sme_required;
            }
        }
        let action = self.form.get().proposed_action;
        let Some(action) = action else {
            return false;
        };
        let config = self
            .proposed_actions
            .get()
            .and_then(|options| options.config_for(&action).cloned());
        workflow::is_sme_required(Some(&action), config.as_ref())
    }

    pub fn visible_steps(&self) -> Vec<ReviewStep> {
        workflow::visible_steps(self.sme_required())
    }

    pub fn is_step_reachable(&self, step: ReviewStep) -> bool {
        match self.review.get() {
            Some(review) => workflow::is_step_reachable(step, &review),
            // New draft: only the first step exists yet.
            None => step == ReviewStep::GeneralInfo,
        }
    }

    pub fn is_step_complete(&self, step: ReviewStep) -> bool {
        match self.review.get() {
            Some(review) => workflow::is_step_complete(step, &review),
            None => false,
        }
    }

    pub fn go_to_step(&self, step: ReviewStep) {
        if self.is_step_reachable(step) {
            self.current_step.set(step);
        }
    }

    /// The step after `step` in the visible sequence.
    fn next_step(&self, step: ReviewStep) -> Option<ReviewStep> {
        let steps = self.visible_steps();
        let pos = steps.iter().position(|s| *s == step)?;
        steps.get(pos + 1).copied()
    }

    fn step_payload(&self, step: ReviewStep) -> MaterialReviewUpdate {
        let form = self.form.get();
        match step {
            ReviewStep::GeneralInfo => MaterialReviewUpdate {
                review_reason: form.review_reason,
                current_stock_qty: form.current_stock_qty,
                current_stock_value: form.current_stock_value,
                months_no_movement: form.months_no_movement,
                proposed_action: form.proposed_action,
                proposed_safety_stock_qty: form.proposed_safety_stock_qty,
                proposed_unrestricted_qty: form.proposed_unrestricted_qty,
                business_justification: form.business_justification,
                ..Default::default()
            },
            ReviewStep::Checklist => MaterialReviewUpdate {
                // All seven booleans are required by the server; unset
                // checkboxes are sent as explicit false.
                has_open_orders: Some(form.has_open_orders.unwrap_or(false)),
                has_forecast_demand: Some(form.has_forecast_demand.unwrap_or(false)),
                checked_alternate_plants: Some(form.checked_alternate_plants.unwrap_or(false)),
                contacted_procurement: Some(form.contacted_procurement.unwrap_or(false)),
                reviewed_bom_usage: Some(form.reviewed_bom_usage.unwrap_or(false)),
                checked_supersession: Some(form.checked_supersession.unwrap_or(false)),
                checked_historical_usage: Some(form.checked_historical_usage.unwrap_or(false)),
                open_order_numbers: form.open_order_numbers,
                forecast_next_12m: form.forecast_next_12m,
                alternate_plant_qty: form.alternate_plant_qty,
                procurement_feedback: form.procurement_feedback,
                ..Default::default()
            },
            ReviewStep::Assignment => MaterialReviewUpdate::default(),
            ReviewStep::SmeInvestigation => MaterialReviewUpdate {
                sme_recommendation: form.sme_recommendation,
                sme_recommended_safety_stock_qty: form.sme_recommended_safety_stock_qty,
                sme_recommended_unrestricted_qty: form.sme_recommended_unrestricted_qty,
                sme_analysis: form.sme_analysis,
                alternative_applications: form.alternative_applications,
                risk_assessment: form.risk_assessment,
                ..Default::default()
            },
            ReviewStep::FollowUp => MaterialReviewUpdate {
                requires_follow_up: form.requires_follow_up,
                next_review_date: form.next_review_date,
                follow_up_reason: form.follow_up_reason,
                review_frequency_weeks: form.review_frequency_weeks,
                ..Default::default()
            },
            ReviewStep::FinalDecision => MaterialReviewUpdate {
                final_decision: form.final_decision,
                final_safety_stock_qty: form.final_safety_stock_qty,
                final_unrestricted_qty: form.final_unrestricted_qty,
                final_notes: form.final_notes,
                estimated_savings: form.estimated_savings,
                implementation_date: form.implementation_date,
                ..Default::default()
            },
        }
    }

    fn validate_step(&self, step: ReviewStep) -> Result<(), String> {
        let form = self.form.get();
        match step {
            ReviewStep::GeneralInfo => {
                if form.review_reason.as_deref().unwrap_or("").trim().is_empty() {
                    return Err("Review reason is required".to_string());
                }
                if form.proposed_action.as_deref().unwrap_or("").trim().is_empty() {
                    return Err("Proposed action is required".to_string());
                }
                if form
                    .business_justification
                    .as_deref()
                    .unwrap_or("")
                    .trim()
                    .len()
                    < 10
                {
                    return Err(
                        "Business justification must be at least 10 characters".to_string()
                    );
                }
                Ok(())
            }
            ReviewStep::Assignment => {
                let assignment = self.assignment.get();
                if assignment.approver_user_id.trim().is_empty() {
                    return Err("Approver is required".to_string());
                }
                if self.sme_required() && assignment.sme_user_id.trim().is_empty() {
                    return Err("SME is required for this proposed action".to_string());
                }
                Ok(())
            }
            ReviewStep::FinalDecision => {
                if form.final_decision.as_deref().unwrap_or("").trim().is_empty() {
                    return Err("Final decision is required".to_string());
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }

    /// Save the current step. New drafts are created on the first save;
    /// the assignment step posts to the assignments endpoint; everything
    /// else PUTs the step payload. The echoed review replaces local state
    /// and the wizard advances to the next visible step.
    pub fn save_current_step(&self, on_created: Callback<i64>) {
        let step = self.current_step.get();

        if let Err(msg) = self.validate_step(step) {
            self.error.set(Some(msg));
            return;
        }
        self.error.set(None);

        let vm = *self;
        let review_id = self.review.get().and_then(|r| r.review_id);

        self.saving.set(true);
        spawn_local(async move {
            let result = match review_id {
                None => {
                    let form = vm.form.get();
                    let payload = MaterialReviewCreate {
                        review_reason: form.review_reason,
                        months_no_movement: form.months_no_movement,
                        proposed_action: form.proposed_action,
                        proposed_safety_stock_qty: form.proposed_safety_stock_qty,
                        proposed_unrestricted_qty: form.proposed_unrestricted_qty,
                        business_justification: form.business_justification,
                        previous_review_id: form.previous_review_id,
                    };
                    api::create_review(vm.material_number, &payload).await
                }
                Some(id) if step == ReviewStep::Assignment => {
                    let assignment = vm.assignment.get();
                    let payload = AssignmentStepPayload {
                        sme_user_id: Uuid::parse_str(assignment.sme_user_id.trim()).ok(),
                        approver_user_id: match Uuid::parse_str(
                            assignment.approver_user_id.trim(),
                        ) {
                            Ok(id) => id,
                            Err(_) => {
                                vm.error.set(Some("Approver is required".to_string()));
                                vm.saving.set(false);
                                return;
                            }
                        },
                        sme_due_at: None,
                        approver_due_at: None,
                    };
                    api::create_assignments(vm.material_number, id, &payload).await
                }
                Some(id) => {
                    let payload = vm.step_payload(step);
                    api::update_review_step(vm.material_number, id, step, &payload).await
                }
            };

            match result {
                Ok(review) => {
                    let created_id = review.review_id;
                    let was_new = review_id.is_none();
                    let next = vm.next_step(step);

                    vm.apply_review(review);

                    // The echo lands on the workflow's computed step; for
                    // forward navigation prefer the next visible step when
                    // it is reachable (covers optional follow-up).
                    if let Some(next_step) = next {
                        if vm.is_step_reachable(next_step) {
                            vm.current_step.set(next_step);
                        }
                    }

                    if was_new {
                        if let Some(id) = created_id {
                            on_created.run(id);
                        }
                    }
                }
                Err(e) => vm.error.set(Some(format!("Save failed: {}", e))),
            }
            vm.saving.set(false);
        });
    }

    pub fn cancel_review(&self, on_done: Callback<()>) {
        let Some(id) = self.review.get().and_then(|r| r.review_id) else {
            on_done.run(());
            return;
        };

        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message("Cancel this review? This cannot be undone.")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        let vm = *self;
        spawn_local(async move {
            match api::cancel_review(vm.material_number, id).await {
                Ok(_) => on_done.run(()),
                Err(e) => vm.error.set(Some(format!("Cancel failed: {}", e))),
            }
        });
    }
}
