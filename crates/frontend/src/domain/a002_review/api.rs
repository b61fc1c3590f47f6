use contracts::domain::a002_review::aggregate::{
    MaterialReview, MaterialReviewCreate, MaterialReviewUpdate,
};
use contracts::domain::a002_review::ReviewStep;
use contracts::domain::a003_assignment::aggregate::{
    AssignmentStepPayload, ReviewAssignment, UserWithPermission,
};
use contracts::domain::a004_comment::aggregate::{
    PaginatedComments, ReviewComment, ReviewCommentCreate,
};

use crate::shared::api_utils::{http_delete, http_get, http_post, http_put};

pub async fn fetch_review(
    material_number: i64,
    review_id: i64,
) -> Result<MaterialReview, String> {
    http_get(&format!(
        "/api/materials/{}/reviews/{}",
        material_number, review_id
    ))
    .await
}

pub async fn create_review(
    material_number: i64,
    payload: &MaterialReviewCreate,
) -> Result<MaterialReview, String> {
    http_post(&format!("/api/materials/{}/review", material_number), payload).await
}

/// Save one wizard step. The server validates the payload against the step,
/// runs the workflow transition and echoes the updated review.
pub async fn update_review_step(
    material_number: i64,
    review_id: i64,
    step: ReviewStep,
    payload: &MaterialReviewUpdate,
) -> Result<MaterialReview, String> {
    http_put(
        &format!(
            "/api/materials/{}/review/{}?step={}",
            material_number,
            review_id,
            step.as_str()
        ),
        payload,
    )
    .await
}

pub async fn cancel_review(
    material_number: i64,
    review_id: i64,
) -> Result<serde_json::Value, String> {
    http_put(
        &format!("/api/materials/{}/review/{}/cancel", material_number, review_id),
        &serde_json::json!({}),
    )
    .await
}

pub async fn fetch_assignments(
    material_number: i64,
    review_id: i64,
) -> Result<Vec<ReviewAssignment>, String> {
    http_get(&format!(
        "/api/materials/{}/reviews/{}/assignments",
        material_number, review_id
    ))
    .await
}

/// Create (or replace) the SME and approver assignments; echoes the
/// updated review like a step save.
pub async fn create_assignments(
    material_number: i64,
    review_id: i64,
    payload: &AssignmentStepPayload,
) -> Result<MaterialReview, String> {
    http_post(
        &format!(
            "/api/materials/{}/reviews/{}/assignments",
            material_number, review_id
        ),
        payload,
    )
    .await
}

/// Users holding a permission, for the assignment pickers. Valid names:
/// "can_provide_sme_review", "can_approve_reviews", "can_assign_reviews".
pub async fn fetch_users_by_permission(
    permission: &str,
) -> Result<Vec<UserWithPermission>, String> {
    http_get(&format!("/api/users-by-permission?permission={}", permission)).await
}

pub async fn fetch_comments(
    material_number: i64,
    review_id: i64,
) -> Result<PaginatedComments, String> {
    http_get(&format!(
        "/api/materials/{}/review/{}/comments?limit=100",
        material_number, review_id
    ))
    .await
}

pub async fn add_comment(
    material_number: i64,
    review_id: i64,
    comment: String,
) -> Result<ReviewComment, String> {
    let payload = ReviewCommentCreate { comment };
    http_post(
        &format!(
            "/api/materials/{}/review/{}/comments",
            material_number, review_id
        ),
        &payload,
    )
    .await
}

pub async fn delete_comment(comment_id: i64) -> Result<(), String> {
    http_delete(&format!("/api/comments/{}", comment_id)).await
}
