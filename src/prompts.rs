//! Prompt assembly for the four workflow operations.
//!
//! Templates live under `prompts/` and are loaded at compile time; builders
//! fill `{placeholder}` slots with caller data. Missing optional fields
//! render as empty text rather than failing - the prompt degrades, the call
//! still goes out.

use serde_json::{json, Value};

use crate::records::{Milestone, Proposal};

// Prompt templates loaded at compile time
const EVALUATE: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/prompts/evaluate.md"));
const APPROVE: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/prompts/approve.md"));
const SOCIAL: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/prompts/social.md"));
const FOLLOWUP: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/prompts/followup.md"));

/// Fill the five-point evaluation rubric with the proposal's description
/// and criteria.
pub fn evaluation_prompt(proposal: &Proposal) -> String {
    EVALUATE
        .replace("{proposal}", &proposal.description)
        .replace("{criteria}", &proposal.evaluation_criteria)
}

/// Request an approval notification, next steps, and a follow-up schedule.
pub fn approval_prompt(proposal_id: &str, amount: f64) -> String {
    APPROVE
        .replace("{proposal_id}", proposal_id)
        .replace("{amount}", &amount.to_string())
}

/// Request a social media post covering `update_type` and `content`.
///
/// `content` is free-form caller data; it is rendered into the prompt as
/// compact JSON, whatever shape it has.
pub fn social_prompt(update_type: &str, content: &Value) -> String {
    SOCIAL
        .replace("{update_type}", update_type)
        .replace("{content}", &content.to_string())
}

/// Request a grantee follow-up message for a milestone.
pub fn followup_prompt(grant_id: &str, milestone: &Milestone) -> String {
    let milestone_json = json!({
        "id": milestone.id,
        "name": milestone.name,
        "progress": milestone.progress,
        "next_milestone": milestone.next_milestone,
    });
    FOLLOWUP
        .replace("{grant_id}", grant_id)
        .replace("{milestone}", &milestone_json.to_string())
}
