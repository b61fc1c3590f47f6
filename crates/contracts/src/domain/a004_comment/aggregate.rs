use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::Paginated;
use crate::system::users::UserProfile;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewCommentCreate {
    pub comment: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewComment {
    pub comment_id: i64,
    pub review_id: i64,
    pub user_id: Uuid,
    pub comment: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub user: Option<UserProfile>,
}

pub type PaginatedComments = Paginated<ReviewComment>;
