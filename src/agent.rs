//! The grant workflow agent.
//!
//! One component: it holds a chat-model handle and the conversation
//! transcript, and exposes four operations that each format a prompt, submit
//! it, and wrap the reply text with caller-supplied identifiers. There is no
//! branching on the reply's content anywhere - the model's text is carried
//! through verbatim.

use serde_json::Value;

use crate::chat::{ChatModel, Exchange};
use crate::config::AgentConfig;
use crate::error::Error;
use crate::prompts;
use crate::records::{ApprovalResult, EvaluationResult, FollowupResult, Milestone, Proposal};
use crate::xai::XaiClient;

/// Workflow agent bound to one chat model and one conversation transcript.
///
/// Operations take `&mut self` because each successful call appends to the
/// transcript; callers invoking concurrently must serialize access
/// themselves.
pub struct GrantAgent {
    chat: Box<dyn ChatModel>,
    transcript: Vec<Exchange>,
}

impl GrantAgent {
    /// Build an agent backed by the xAI chat client.
    pub fn new(config: AgentConfig) -> Self {
        Self::with_chat(Box::new(XaiClient::new(config)))
    }

    /// Build an agent over any chat model, e.g. a test double.
    pub fn with_chat(chat: Box<dyn ChatModel>) -> Self {
        Self {
            chat,
            transcript: Vec::new(),
        }
    }

    /// The exchanges recorded so far, oldest first.
    #[allow(dead_code)]
    pub fn transcript(&self) -> &[Exchange] {
        &self.transcript
    }

    /// Submit a prompt and record the exchange.
    ///
    /// The transcript is appended only after a successful reply, so a failed
    /// call leaves caller-visible state untouched.
    fn submit(&mut self, prompt: String) -> Result<String, Error> {
        let reply = self.chat.submit(&prompt, &self.transcript)?;
        self.transcript.push(Exchange {
            prompt,
            reply: reply.clone(),
        });
        Ok(reply)
    }

    /// Evaluate a proposal against the five-point rubric.
    ///
    /// The proposal's `id` and `submission_date` are copied through
    /// unchanged; they stay absent if the caller omitted them.
    pub fn evaluate_proposal(&mut self, proposal: &Proposal) -> Result<EvaluationResult, Error> {
        tracing::info!(
            proposal_id = proposal.id.as_deref().unwrap_or("<none>"),
            "evaluating proposal"
        );
        let reply = self.submit(prompts::evaluation_prompt(proposal))?;
        Ok(EvaluationResult {
            evaluation_result: reply,
            proposal_id: proposal.id.clone(),
            timestamp: proposal.submission_date.clone(),
        })
    }

    /// Approve a grant and ask the model for next steps.
    ///
    /// `status` is always `"approved"` regardless of what the model says;
    /// the reply is never parsed or validated.
    pub fn approve_grant(&mut self, proposal_id: &str, amount: f64) -> Result<ApprovalResult, Error> {
        tracing::info!(proposal_id, amount, "approving grant");
        let reply = self.submit(prompts::approval_prompt(proposal_id, amount))?;
        Ok(ApprovalResult {
            status: "approved".to_string(),
            proposal_id: proposal_id.to_string(),
            amount,
            next_steps: reply,
        })
    }

    /// Generate a social media post for a grant update.
    pub fn generate_social_update(
        &mut self,
        update_type: &str,
        content: &Value,
    ) -> Result<String, Error> {
        tracing::info!(update_type, "generating social update");
        self.submit(prompts::social_prompt(update_type, content))
    }

    /// Draft a follow-up message for a grantee milestone.
    pub fn follow_up_with_grantee(
        &mut self,
        grant_id: &str,
        milestone: &Milestone,
    ) -> Result<FollowupResult, Error> {
        tracing::info!(
            grant_id,
            milestone_id = milestone.id.as_deref().unwrap_or("<none>"),
            "drafting grantee follow-up"
        );
        let reply = self.submit(prompts::followup_prompt(grant_id, milestone))?;
        Ok(FollowupResult {
            grant_id: grant_id.to_string(),
            milestone_id: milestone.id.clone(),
            message: reply,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Chat model that always returns the same reply.
    struct FixedReply(&'static str);

    impl ChatModel for FixedReply {
        fn submit(&self, _prompt: &str, _transcript: &[Exchange]) -> Result<String, Error> {
            Ok(self.0.to_string())
        }
    }

    /// Chat model that always fails.
    struct FailingChat;

    impl ChatModel for FailingChat {
        fn submit(&self, _prompt: &str, _transcript: &[Exchange]) -> Result<String, Error> {
            Err(Error::RemoteCall("connection refused".to_string()))
        }
    }

    fn agent_with_reply(reply: &'static str) -> GrantAgent {
        GrantAgent::with_chat(Box::new(FixedReply(reply)))
    }

    #[test]
    fn evaluate_echoes_id_and_submission_date() {
        let mut agent = agent_with_reply("Score: 8/10");
        let proposal = Proposal {
            id: Some("G-1".to_string()),
            description: "X".to_string(),
            evaluation_criteria: "Y".to_string(),
            submission_date: Some("2024-01-01".to_string()),
        };
        let result = agent.evaluate_proposal(&proposal).expect("evaluation should succeed");
        assert_eq!(result.evaluation_result, "Score: 8/10");
        assert_eq!(result.proposal_id.as_deref(), Some("G-1"));
        assert_eq!(result.timestamp.as_deref(), Some("2024-01-01"));
    }

    #[test]
    fn evaluate_keeps_omitted_fields_absent() {
        let mut agent = agent_with_reply("fine");
        let proposal = Proposal {
            id: None,
            description: "X".to_string(),
            evaluation_criteria: "Y".to_string(),
            submission_date: None,
        };
        let result = agent.evaluate_proposal(&proposal).expect("evaluation should succeed");
        assert!(result.proposal_id.is_none());
        assert!(result.timestamp.is_none());
    }

    #[test]
    fn approve_is_always_approved() {
        // The model reply is deliberately not an approval; the status must
        // not depend on it.
        let mut agent = agent_with_reply("I refuse to approve this grant.");
        let result = agent
            .approve_grant("GRANT-2024-002", 75000.0)
            .expect("approval should succeed");
        assert_eq!(result.status, "approved");
        assert_eq!(result.proposal_id, "GRANT-2024-002");
        assert_eq!(result.amount, 75000.0);
        assert_eq!(result.next_steps, "I refuse to approve this grant.");
    }

    #[test]
    fn social_update_returns_reply_verbatim() {
        let mut agent = agent_with_reply("Big news! #grants");
        let content = serde_json::json!({"project": "DeFi Education Hub"});
        let post = agent
            .generate_social_update("grant_approval", &content)
            .expect("social update should succeed");
        assert_eq!(post, "Big news! #grants");
    }

    #[test]
    fn follow_up_echoes_milestone_id() {
        let mut agent = agent_with_reply("Keep it up!");
        let milestone = Milestone {
            id: Some("MS-001".to_string()),
            name: "First Month Check-in".to_string(),
            progress: "Platform architecture completed".to_string(),
            next_milestone: "Interactive module prototype".to_string(),
        };
        let result = agent
            .follow_up_with_grantee("GRANT-2024-002", &milestone)
            .expect("follow-up should succeed");
        assert_eq!(result.grant_id, "GRANT-2024-002");
        assert_eq!(result.milestone_id.as_deref(), Some("MS-001"));
        assert_eq!(result.message, "Keep it up!");
    }

    #[test]
    fn transcript_grows_one_exchange_per_call() {
        let mut agent = agent_with_reply("ok");
        let proposal = Proposal {
            id: Some("G-1".to_string()),
            description: "X".to_string(),
            evaluation_criteria: "Y".to_string(),
            submission_date: None,
        };
        agent.evaluate_proposal(&proposal).expect("first call");
        agent.approve_grant("G-1", 100.0).expect("second call");
        assert_eq!(agent.transcript().len(), 2);
        assert!(agent.transcript()[0].prompt.contains("evaluate"));
        assert_eq!(agent.transcript()[1].reply, "ok");
    }

    #[test]
    fn remote_failure_propagates_and_leaves_transcript_untouched() {
        let mut agent = GrantAgent::with_chat(Box::new(FailingChat));
        let proposal = Proposal {
            id: Some("G-1".to_string()),
            description: "X".to_string(),
            evaluation_criteria: "Y".to_string(),
            submission_date: None,
        };
        let err = agent
            .evaluate_proposal(&proposal)
            .expect_err("failing chat should propagate");
        assert!(matches!(err, Error::RemoteCall(_)));
        assert!(agent.transcript().is_empty());

        let err = agent
            .approve_grant("G-1", 10.0)
            .expect_err("failing chat should propagate");
        assert!(matches!(err, Error::RemoteCall(_)));
        assert!(agent.transcript().is_empty());
    }
}
