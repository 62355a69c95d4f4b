//! Default prompt catalog.
//!
//! Hardcoded prompt templates for the orchestration roles, keyed by role
//! name. Each template here is only a fallback: the async accessors route
//! through the [`resolver`](crate::resolver) so a `prompts.yaml` override
//! wins when one is configured.
//!
//! Templates may carry placeholder tokens (currently `{members}`). The
//! catalog does not substitute them; that is the orchestration layer's job.

use crate::resolver::get_prompt;

/// Placeholder token filled in by the orchestration layer with the
/// comma-separated worker names.
pub const MEMBERS_PLACEHOLDER: &str = "{members}";

/// Config path for the supervisor prompt override.
pub const SUPERVISOR_PATH: &[&str] = &["agents", "supervisor", "prompt"];

/// Default prompts embedded at compile time.
pub mod defaults {
    /// Instruction text for the supervisor role that dispatches work among
    /// named workers.
    pub const SUPERVISOR: &str = "You are a supervisor tasked with managing a conversation between the
following workers: {members}. Given the following user request,
respond with the worker to act next. Each worker will perform a
task and respond with their results and status. Multiple workers can work at once, and they can use multiple tools at once. Each worker can run their tools multiple times per task. When finished,
respond with FINISH.";
}

/// Look up a role's default prompt by name.
///
/// Returns `None` for roles the catalog does not know about.
pub fn default_prompt(role: &str) -> Option<&'static str> {
    match role {
        "supervisor" => Some(defaults::SUPERVISOR),
        _ => None,
    }
}

/// Get the supervisor prompt from config with fallback to the default.
pub async fn supervisor_prompt() -> String {
    get_prompt(SUPERVISOR_PATH, defaults::SUPERVISOR).await
}
