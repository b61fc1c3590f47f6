use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UploadJobState {
    Pending,
    Processing,
    Completed,
    Failed,
}

impl UploadJobState {
    pub fn is_finished(self) -> bool {
        matches!(self, UploadJobState::Completed | UploadJobState::Failed)
    }

    pub fn label(self) -> &'static str {
        match self {
            UploadJobState::Pending => "Pending",
            UploadJobState::Processing => "Processing",
            UploadJobState::Completed => "Completed",
            UploadJobState::Failed => "Failed",
        }
    }
}

/// Processing phase of a running upload job, in pipeline order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UploadPhase {
    Validating,
    Materials,
    History,
    Insights,
    Reviews,
}

impl UploadPhase {
    pub fn label(self) -> &'static str {
        match self {
            UploadPhase::Validating => "Validating file",
            UploadPhase::Materials => "Importing materials",
            UploadPhase::History => "Importing consumption history",
            UploadPhase::Insights => "Generating insights",
            UploadPhase::Reviews => "Scheduling reviews",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadJobProgress {
    pub total: u64,
    pub processed: u64,
    pub percentage: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadJobResult {
    pub inserted: u64,
    pub updated: u64,
    pub insights: u64,
    pub reviews: u64,
}

/// Status of an upload job (`GET /api/materials/upload-jobs/{job_id}`).
/// Timestamps arrive as ISO strings and are only displayed, never parsed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadJobStatus {
    pub job_id: String,
    pub status: UploadJobState,
    pub current_phase: Option<UploadPhase>,
    pub progress: UploadJobProgress,
    pub file_name: Option<String>,
    pub file_size_bytes: Option<u64>,
    pub file_mime_type: Option<String>,
    pub created_at: Option<String>,
    pub started_at: Option<String>,
    pub completed_at: Option<String>,
    pub result: Option<UploadJobResult>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadJobList {
    pub jobs: Vec<UploadJobStatus>,
    pub total: u64,
}

/// `202 Accepted` body returned when an upload is enqueued.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadAccepted {
    pub job_id: String,
    pub status: UploadJobState,
    pub message: String,
}
