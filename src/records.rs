//! Input and result records for the grant workflow.
//!
//! Inputs are immutable caller-supplied data. Absent optional fields stay
//! absent; absent text fields default to empty strings and flow into prompts
//! as empty text rather than failing fast. Nothing here is persisted.

use serde::{Deserialize, Serialize};

/// A grant funding request submitted for evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Proposal {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub evaluation_criteria: String,
    #[serde(default)]
    pub submission_date: Option<String>,
}

/// A progress checkpoint tied to an approved grant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Milestone {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub progress: String,
    #[serde(default)]
    pub next_milestone: String,
}

/// Outcome of a proposal evaluation call.
///
/// `proposal_id` and `timestamp` are copied through from the proposal
/// unchanged and stay `None` when the caller omitted them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub evaluation_result: String,
    pub proposal_id: Option<String>,
    pub timestamp: Option<String>,
}

/// Outcome of a grant approval call. `status` is always `"approved"`; the
/// model's reply is carried verbatim in `next_steps` and never parsed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApprovalResult {
    pub status: String,
    pub proposal_id: String,
    pub amount: f64,
    pub next_steps: String,
}

/// Outcome of a grantee follow-up call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FollowupResult {
    pub grant_id: String,
    pub milestone_id: Option<String>,
    pub message: String,
}
