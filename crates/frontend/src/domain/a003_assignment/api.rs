use contracts::domain::a003_assignment::aggregate::{MyAssignment, MyInitiatedReview};

use crate::shared::api_utils::http_get;

/// Reviews assigned to the current user as SME or approver.
pub async fn fetch_my_assignments() -> Result<Vec<MyAssignment>, String> {
    http_get("/api/my-assignments").await
}

/// Reviews the current user initiated.
pub async fn fetch_my_initiated_reviews() -> Result<Vec<MyInitiatedReview>, String> {
    http_get("/api/my-initiated-reviews").await
}
