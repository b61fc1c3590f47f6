//! Review workflow state machine.
//!
//! Single source of truth for workflow positioning on the client: which
//! status follows which action, which wizard step a review sits on, and
//! which steps are reachable. The server runs the same rules; keeping a
//! copy here lets the wizard gate navigation and apply optimistic updates
//! without a round-trip.

use serde::{Deserialize, Serialize};

use super::aggregate::MaterialReview;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReviewStatus {
    #[default]
    Draft,
    /// Checklist complete, awaiting SME/approver assignment.
    PendingAssignment,
    PendingSme,
    PendingDecision,
    /// Review approved, stock changes executed.
    Approved,
    /// Review rejected, no stock changes made.
    Rejected,
    Cancelled,
}

impl ReviewStatus {
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            ReviewStatus::Approved | ReviewStatus::Rejected | ReviewStatus::Cancelled
        )
    }

    pub fn can_edit(self) -> bool {
        !self.is_terminal()
    }

    pub fn label(self) -> &'static str {
        match self {
            ReviewStatus::Draft => "Draft",
            ReviewStatus::PendingAssignment => "Pending assignment",
            ReviewStatus::PendingSme => "Pending SME",
            ReviewStatus::PendingDecision => "Pending decision",
            ReviewStatus::Approved => "Approved",
            ReviewStatus::Rejected => "Rejected",
            ReviewStatus::Cancelled => "Cancelled",
        }
    }

    /// Base wizard step associated with a status. DRAFT is refined further
    /// by [`workflow_position`] based on which data has been saved.
    pub fn step(self) -> ReviewStep {
        match self {
            ReviewStatus::Draft => ReviewStep::GeneralInfo,
            ReviewStatus::PendingAssignment => ReviewStep::Assignment,
            ReviewStatus::PendingSme => ReviewStep::SmeInvestigation,
            ReviewStatus::PendingDecision
            | ReviewStatus::Approved
            | ReviewStatus::Rejected => ReviewStep::FinalDecision,
            ReviewStatus::Cancelled => ReviewStep::GeneralInfo,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReviewStep {
    #[default]
    GeneralInfo,
    Checklist,
    Assignment,
    SmeInvestigation,
    FollowUp,
    FinalDecision,
}

impl ReviewStep {
    /// Wire name, as used in the `step` query parameter of the review
    /// update endpoint.
    pub fn as_str(self) -> &'static str {
        match self {
            ReviewStep::GeneralInfo => "general_info",
            ReviewStep::Checklist => "checklist",
            ReviewStep::Assignment => "assignment",
            ReviewStep::SmeInvestigation => "sme_investigation",
            ReviewStep::FollowUp => "follow_up",
            ReviewStep::FinalDecision => "final_decision",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ReviewStep::GeneralInfo => "General information",
            ReviewStep::Checklist => "Checklist",
            ReviewStep::Assignment => "Assignment",
            ReviewStep::SmeInvestigation => "SME investigation",
            ReviewStep::FollowUp => "Follow-up",
            ReviewStep::FinalDecision => "Final decision",
        }
    }
}

/// Actions that trigger state transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    CompleteChecklist,
    Assign,
    SubmitSmeReview,
    Approve,
    Reject,
    Cancel,
}

/// Determine whether SME investigation is required for a proposed action.
///
/// `config` is the `config` object of the matching `proposed_action` lookup
/// option; its `requires_sme` flag decides. Without a config the rule is
/// conservative: any proposed action requires SME review.
pub fn is_sme_required(
    proposed_action: Option<&str>,
    config: Option<&serde_json::Value>,
) -> bool {
    if proposed_action.map_or(true, |a| a.is_empty()) {
        return false;
    }
    match config {
        Some(cfg) => cfg
            .get("requires_sme")
            .and_then(|v| v.as_bool())
            .unwrap_or(false),
        None => true,
    }
}

/// Next status for `action` taken on a review in `current`, or `None` when
/// the transition is invalid. Guards mirror the server's transition table:
///
/// - `CompleteChecklist` requires the checklist to be saved.
/// - `Assign` branches on SME requirement.
/// - `SubmitSmeReview` requires an SME recommendation.
/// - `Approve` requires a final decision other than "reject".
/// - `Reject` requires the final decision "reject".
/// - `Cancel` is valid from any non-terminal state.
pub fn next_status(
    current: ReviewStatus,
    action: Action,
    review: &MaterialReview,
) -> Option<ReviewStatus> {
    if current.is_terminal() {
        return None;
    }

    match (current, action) {
        (_, Action::Cancel) => Some(ReviewStatus::Cancelled),
        (ReviewStatus::Draft, Action::CompleteChecklist) if review.completed_checklist => {
            Some(ReviewStatus::PendingAssignment)
        }
        (ReviewStatus::PendingAssignment, Action::Assign) => {
            if review.sme_required {
                Some(ReviewStatus::PendingSme)
            } else {
                Some(ReviewStatus::PendingDecision)
            }
        }
        (ReviewStatus::PendingSme, Action::SubmitSmeReview)
            if review.sme_recommendation.is_some() =>
        {
            Some(ReviewStatus::PendingDecision)
        }
        (ReviewStatus::PendingDecision, Action::Approve)
            if review
                .final_decision
                .as_deref()
                .is_some_and(|d| d != "reject") =>
        {
            Some(ReviewStatus::Approved)
        }
        (ReviewStatus::PendingDecision, Action::Reject)
            if review.final_decision.as_deref() == Some("reject") =>
        {
            Some(ReviewStatus::Rejected)
        }
        _ => None,
    }
}

/// Actions that have a transition out of `current`, ignoring guards.
pub fn valid_actions(current: ReviewStatus) -> Vec<Action> {
    if current.is_terminal() {
        return Vec::new();
    }
    let mut actions = match current {
        ReviewStatus::Draft => vec![Action::CompleteChecklist],
        ReviewStatus::PendingAssignment => vec![Action::Assign],
        ReviewStatus::PendingSme => vec![Action::SubmitSmeReview],
        ReviewStatus::PendingDecision => vec![Action::Approve, Action::Reject],
        _ => Vec::new(),
    };
    actions.push(Action::Cancel);
    actions
}

/// Current wizard position: `(step, sme_required)`.
///
/// DRAFT is split into sub-steps by saved data: a completed checklist puts
/// the user on assignment, saved general info puts them on the checklist,
/// otherwise they are still on general info.
pub fn workflow_position(review: &MaterialReview) -> (ReviewStep, bool) {
    let sme_required = is_sme_required(review.proposed_action.as_deref(), None);

    let step = if review.status == ReviewStatus::Draft {
        if review.completed_checklist {
            ReviewStep::Assignment
        } else if review.review_reason.is_some() {
            ReviewStep::Checklist
        } else {
            ReviewStep::GeneralInfo
        }
    } else {
        review.status.step()
    };

    (step, sme_required)
}

/// New status after saving `step`, mirroring the server's step→action
/// mapping. General info and follow-up never change status; the other
/// steps run their transition and keep the current status when the guard
/// fails (e.g. an SME saving a draft without a recommendation yet).
pub fn status_after_step(step: ReviewStep, review: &MaterialReview) -> ReviewStatus {
    let current = review.status;
    let attempted = match step {
        ReviewStep::GeneralInfo | ReviewStep::FollowUp => None,
        ReviewStep::Checklist => next_status(current, Action::CompleteChecklist, review),
        ReviewStep::Assignment => next_status(current, Action::Assign, review),
        ReviewStep::SmeInvestigation => {
            if review.sme_recommendation.is_some() {
                next_status(current, Action::SubmitSmeReview, review)
            } else {
                None
            }
        }
        ReviewStep::FinalDecision => match review.final_decision.as_deref() {
            Some("reject") => next_status(current, Action::Reject, review),
            Some(_) => next_status(current, Action::Approve, review),
            None => None,
        },
    };
    attempted.unwrap_or(current)
}

/// Steps shown in the wizard for a review. The SME investigation step is
/// hidden entirely when the proposed action does not require it.
pub fn visible_steps(sme_required: bool) -> Vec<ReviewStep> {
    let mut steps = vec![
        ReviewStep::GeneralInfo,
        ReviewStep::Checklist,
        ReviewStep::Assignment,
    ];
    if sme_required {
        steps.push(ReviewStep::SmeInvestigation);
    }
    steps.push(ReviewStep::FollowUp);
    steps.push(ReviewStep::FinalDecision);
    steps
}

/// Whether a step already holds its required data.
///
/// Follow-up is optional and counts as complete once the user has made an
/// explicit choice either way.
pub fn is_step_complete(step: ReviewStep, review: &MaterialReview) -> bool {
    match step {
        ReviewStep::GeneralInfo => review.review_reason.is_some(),
        ReviewStep::Checklist => review.completed_checklist,
        ReviewStep::Assignment => review.has_assignments,
        ReviewStep::SmeInvestigation => review.sme_recommendation.is_some(),
        ReviewStep::FollowUp => review.requires_follow_up.is_some(),
        ReviewStep::FinalDecision => review.final_decision.is_some(),
    }
}

/// Whether the wizard lets the user open a step.
///
/// A step is reachable when every earlier non-optional visible step is
/// complete; completed steps and the computed current step stay reachable
/// so users can navigate back. Terminal reviews keep everything reachable
/// for read-only display.
pub fn is_step_reachable(step: ReviewStep, review: &MaterialReview) -> bool {
    if review.status.is_terminal() {
        return true;
    }
    // The server-computed flag accounts for the proposed-action lookup
    // config; the local recompute in workflow_position does not.
    let steps = visible_steps(review.sme_required);
    let Some(pos) = steps.iter().position(|s| *s == step) else {
        return false;
    };
    steps[..pos]
        .iter()
        .all(|s| *s == ReviewStep::FollowUp || is_step_complete(*s, review))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};
    use uuid::Uuid;

    fn blank_review() -> MaterialReview {
        let ts = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        MaterialReview {
            review_id: Some(1),
            material_number: 100042,
            created_by: None,
            last_updated_by: None,
            created_at: ts,
            updated_at: ts,
            initiated_by: Uuid::nil(),
            initiated_by_user: None,
            review_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            review_reason: None,
            current_stock_qty: None,
            current_stock_value: None,
            months_no_movement: None,
            proposed_action: None,
            proposed_safety_stock_qty: None,
            proposed_unrestricted_qty: None,
            business_justification: None,
            sme_recommendation: None,
            sme_recommended_safety_stock_qty: None,
            sme_recommended_unrestricted_qty: None,
            sme_analysis: None,
            alternative_applications: None,
            risk_assessment: None,
            final_decision: None,
            final_safety_stock_qty: None,
            final_unrestricted_qty: None,
            final_notes: None,
            requires_follow_up: None,
            next_review_date: None,
            follow_up_reason: None,
            review_frequency_weeks: None,
            previous_review_id: None,
            estimated_savings: None,
            implementation_date: None,
            status: ReviewStatus::Draft,
            completed_checklist: false,
            checklist: None,
            assigned_sme_id: None,
            assigned_sme_name: None,
            assigned_approver_id: None,
            assigned_approver_name: None,
            is_read_only: false,
            comments_count: 0,
            current_step: ReviewStep::GeneralInfo,
            sme_required: false,
            has_assignments: false,
            user_context: None,
        }
    }

    #[test]
    fn status_wire_values_are_snake_case() {
        assert_eq!(
            serde_json::to_string(&ReviewStatus::PendingAssignment).unwrap(),
            "\"pending_assignment\""
        );
        assert_eq!(
            serde_json::from_str::<ReviewStatus>("\"pending_sme\"").unwrap(),
            ReviewStatus::PendingSme
        );
        assert_eq!(
            serde_json::to_string(&ReviewStep::SmeInvestigation).unwrap(),
            "\"sme_investigation\""
        );
    }

    #[test]
    fn terminal_states_accept_no_actions() {
        for status in [
            ReviewStatus::Approved,
            ReviewStatus::Rejected,
            ReviewStatus::Cancelled,
        ] {
            assert!(status.is_terminal());
            assert!(valid_actions(status).is_empty());
            let mut r = blank_review();
            r.status = status;
            assert_eq!(next_status(status, Action::Cancel, &r), None);
        }
    }

    #[test]
    fn cancel_is_valid_from_any_open_state() {
        for status in [
            ReviewStatus::Draft,
            ReviewStatus::PendingAssignment,
            ReviewStatus::PendingSme,
            ReviewStatus::PendingDecision,
        ] {
            let mut r = blank_review();
            r.status = status;
            assert_eq!(
                next_status(status, Action::Cancel, &r),
                Some(ReviewStatus::Cancelled)
            );
        }
    }

    #[test]
    fn checklist_guard_blocks_until_saved() {
        let mut r = blank_review();
        assert_eq!(
            next_status(ReviewStatus::Draft, Action::CompleteChecklist, &r),
            None
        );
        r.completed_checklist = true;
        assert_eq!(
            next_status(ReviewStatus::Draft, Action::CompleteChecklist, &r),
            Some(ReviewStatus::PendingAssignment)
        );
    }

    #[test]
    fn assignment_branches_on_sme_requirement() {
        let mut r = blank_review();
        r.status = ReviewStatus::PendingAssignment;
        r.sme_required = true;
        assert_eq!(
            next_status(r.status, Action::Assign, &r),
            Some(ReviewStatus::PendingSme)
        );
        r.sme_required = false;
        assert_eq!(
            next_status(r.status, Action::Assign, &r),
            Some(ReviewStatus::PendingDecision)
        );
    }

    #[test]
    fn approve_and_reject_read_final_decision() {
        let mut r = blank_review();
        r.status = ReviewStatus::PendingDecision;

        assert_eq!(next_status(r.status, Action::Approve, &r), None);

        r.final_decision = Some("approve_sme".to_string());
        assert_eq!(
            next_status(r.status, Action::Approve, &r),
            Some(ReviewStatus::Approved)
        );
        assert_eq!(next_status(r.status, Action::Reject, &r), None);

        r.final_decision = Some("reject".to_string());
        assert_eq!(next_status(r.status, Action::Approve, &r), None);
        assert_eq!(
            next_status(r.status, Action::Reject, &r),
            Some(ReviewStatus::Rejected)
        );
    }

    #[test]
    fn sme_requirement_follows_lookup_config() {
        assert!(!is_sme_required(None, None));
        assert!(!is_sme_required(Some(""), None));
        assert!(is_sme_required(Some("scrap_partial"), None));

        let requires = serde_json::json!({ "requires_sme": true });
        let exempt = serde_json::json!({ "requires_sme": false });
        let empty = serde_json::json!({});
        assert!(is_sme_required(Some("scrap_partial"), Some(&requires)));
        assert!(!is_sme_required(Some("keep_no_change"), Some(&exempt)));
        assert!(!is_sme_required(Some("keep_no_change"), Some(&empty)));
    }

    #[test]
    fn draft_position_depends_on_saved_data() {
        let mut r = blank_review();
        assert_eq!(workflow_position(&r).0, ReviewStep::GeneralInfo);

        r.review_reason = Some("No movement for 18 months".to_string());
        assert_eq!(workflow_position(&r).0, ReviewStep::Checklist);

        r.completed_checklist = true;
        assert_eq!(workflow_position(&r).0, ReviewStep::Assignment);
    }

    #[test]
    fn non_draft_position_comes_from_status() {
        let mut r = blank_review();
        r.status = ReviewStatus::PendingSme;
        assert_eq!(workflow_position(&r).0, ReviewStep::SmeInvestigation);
        r.status = ReviewStatus::Approved;
        assert_eq!(workflow_position(&r).0, ReviewStep::FinalDecision);
    }

    #[test]
    fn status_after_step_moves_draft_forward() {
        let mut r = blank_review();
        r.review_reason = Some("obsolete".to_string());

        // General info never changes status.
        assert_eq!(
            status_after_step(ReviewStep::GeneralInfo, &r),
            ReviewStatus::Draft
        );

        r.completed_checklist = true;
        assert_eq!(
            status_after_step(ReviewStep::Checklist, &r),
            ReviewStatus::PendingAssignment
        );
    }

    #[test]
    fn sme_draft_save_keeps_status() {
        let mut r = blank_review();
        r.status = ReviewStatus::PendingSme;
        // No recommendation yet: saving notes must not advance the review.
        r.sme_analysis = Some("still checking alternate plants".to_string());
        assert_eq!(
            status_after_step(ReviewStep::SmeInvestigation, &r),
            ReviewStatus::PendingSme
        );

        r.sme_recommendation = Some("reduce_safety_stock".to_string());
        assert_eq!(
            status_after_step(ReviewStep::SmeInvestigation, &r),
            ReviewStatus::PendingDecision
        );
    }

    #[test]
    fn sme_step_is_hidden_when_not_required() {
        let with = visible_steps(true);
        let without = visible_steps(false);
        assert!(with.contains(&ReviewStep::SmeInvestigation));
        assert!(!without.contains(&ReviewStep::SmeInvestigation));
        assert_eq!(with.len(), 6);
        assert_eq!(without.len(), 5);
    }

    #[test]
    fn gating_requires_earlier_steps() {
        let mut r = blank_review();
        assert!(is_step_reachable(ReviewStep::GeneralInfo, &r));
        assert!(!is_step_reachable(ReviewStep::Checklist, &r));
        assert!(!is_step_reachable(ReviewStep::FinalDecision, &r));

        r.review_reason = Some("surplus".to_string());
        assert!(is_step_reachable(ReviewStep::Checklist, &r));
        assert!(!is_step_reachable(ReviewStep::Assignment, &r));

        r.completed_checklist = true;
        assert!(is_step_reachable(ReviewStep::Assignment, &r));
    }

    #[test]
    fn follow_up_never_blocks_final_decision() {
        let mut r = blank_review();
        r.status = ReviewStatus::PendingDecision;
        r.review_reason = Some("surplus".to_string());
        r.completed_checklist = true;
        r.has_assignments = true;
        r.requires_follow_up = None;
        assert!(is_step_reachable(ReviewStep::FinalDecision, &r));
    }

    #[test]
    fn terminal_review_is_fully_navigable() {
        let mut r = blank_review();
        r.status = ReviewStatus::Rejected;
        for step in visible_steps(true) {
            assert!(is_step_reachable(step, &r));
        }
    }
}
