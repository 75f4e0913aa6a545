//! CLI driver for the grant workflow agent.
//!
//! The CLI is glue: it resolves provider configuration, builds the agent,
//! runs one operation (or the whole demo sequence), and prints results to
//! stdout. Logs go to stderr so JSON output stays pipeable.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod agent;
mod chat;
mod config;
mod error;
mod prompts;
mod records;
mod xai;

use agent::GrantAgent;
use config::AgentConfig;
use records::{Milestone, Proposal};

#[derive(Parser, Debug)]
#[command(
    name = "grantflow",
    version,
    about = "Grant program workflow assistant driven by a remote chat model"
)]
struct Cli {
    /// Provider API key (falls back to XAI_API_KEY)
    #[arg(long, global = true, value_name = "KEY")]
    api_key: Option<String>,

    /// Chat model identifier
    #[arg(long, global = true, value_name = "MODEL")]
    model: Option<String>,

    /// Chat API base URL (falls back to XAI_API_BASE)
    #[arg(long, global = true, value_name = "URL")]
    endpoint: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate a grant proposal against the scoring rubric
    Evaluate(EvaluateArgs),
    /// Approve a grant and draft next steps for the grantee
    Approve(ApproveArgs),
    /// Generate a social media post about a grant update
    Social(SocialArgs),
    /// Draft a follow-up message for a grantee milestone
    FollowUp(FollowUpArgs),
    /// Run the evaluate/approve/announce/follow-up sequence end to end
    Run(RunArgs),
}

#[derive(Parser, Debug)]
struct EvaluateArgs {
    /// Path to a proposal JSON file
    #[arg(long, value_name = "PATH")]
    proposal: PathBuf,
}

#[derive(Parser, Debug)]
struct ApproveArgs {
    /// Proposal identifier to approve
    #[arg(long)]
    proposal_id: String,

    /// Grant amount
    #[arg(long)]
    amount: f64,
}

#[derive(Parser, Debug)]
struct SocialArgs {
    /// Kind of update (e.g. grant_approval)
    #[arg(long)]
    update_type: String,

    /// Update content as a JSON value
    #[arg(long, value_name = "JSON")]
    content: String,
}

#[derive(Parser, Debug)]
struct FollowUpArgs {
    /// Grant identifier the follow-up refers to
    #[arg(long)]
    grant_id: String,

    /// Path to a milestone JSON file
    #[arg(long, value_name = "PATH")]
    milestone: PathBuf,
}

#[derive(Parser, Debug)]
struct RunArgs {
    /// Path to a proposal JSON file
    #[arg(long, value_name = "PATH")]
    proposal: PathBuf,

    /// Amount to approve after evaluation
    #[arg(long)]
    amount: f64,

    /// Path to a milestone JSON file for the follow-up step
    #[arg(long, value_name = "PATH")]
    milestone: PathBuf,
}

fn main() -> Result<()> {
    // Load .env before reading any configuration from the environment.
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    init_logging();

    let config = AgentConfig::resolve(cli.api_key, cli.model, cli.endpoint)?;
    let mut agent = GrantAgent::new(config);

    match cli.command {
        Commands::Evaluate(args) => run_evaluate(&mut agent, &args),
        Commands::Approve(args) => run_approve(&mut agent, &args),
        Commands::Social(args) => run_social(&mut agent, &args),
        Commands::FollowUp(args) => run_follow_up(&mut agent, &args),
        Commands::Run(args) => run_sequence(&mut agent, &args),
    }
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "grantflow=info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run_evaluate(agent: &mut GrantAgent, args: &EvaluateArgs) -> Result<()> {
    let proposal = load_proposal(&args.proposal)?;
    let result = agent.evaluate_proposal(&proposal)?;
    print_json(&result)
}

fn run_approve(agent: &mut GrantAgent, args: &ApproveArgs) -> Result<()> {
    let result = agent.approve_grant(&args.proposal_id, args.amount)?;
    print_json(&result)
}

fn run_social(agent: &mut GrantAgent, args: &SocialArgs) -> Result<()> {
    let content: serde_json::Value = serde_json::from_str(&args.content)
        .with_context(|| format!("parse --content JSON: {}", args.content))?;
    let post = agent.generate_social_update(&args.update_type, &content)?;
    println!("{post}");
    Ok(())
}

fn run_follow_up(agent: &mut GrantAgent, args: &FollowUpArgs) -> Result<()> {
    let milestone = load_milestone(&args.milestone)?;
    let result = agent.follow_up_with_grantee(&args.grant_id, &milestone)?;
    print_json(&result)
}

/// The four-step demo workflow: evaluate, approve, announce, follow up,
/// printing each result in turn.
fn run_sequence(agent: &mut GrantAgent, args: &RunArgs) -> Result<()> {
    let proposal = load_proposal(&args.proposal)?;
    let milestone = load_milestone(&args.milestone)?;

    println!("=== Evaluating Proposal ===");
    let evaluation = agent.evaluate_proposal(&proposal)?;
    print_json(&evaluation)?;

    let proposal_id = proposal.id.clone().unwrap_or_default();

    println!("\n=== Approving Grant ===");
    let approval = agent.approve_grant(&proposal_id, args.amount)?;
    print_json(&approval)?;

    println!("\n=== Generating Social Update ===");
    let content = serde_json::json!({
        "proposal_id": proposal_id,
        "amount": args.amount,
    });
    let post = agent.generate_social_update("grant_approval", &content)?;
    println!("{post}");

    println!("\n=== Creating Follow-up ===");
    let followup = agent.follow_up_with_grantee(&proposal_id, &milestone)?;
    print_json(&followup)
}

fn load_proposal(path: &Path) -> Result<Proposal> {
    let raw =
        fs::read_to_string(path).with_context(|| format!("read proposal {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parse proposal {}", path.display()))
}

fn load_milestone(path: &Path) -> Result<Milestone> {
    let raw =
        fs::read_to_string(path).with_context(|| format!("read milestone {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parse milestone {}", path.display()))
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).context("serialize result")?
    );
    Ok(())
}
