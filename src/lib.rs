//! collab-kit
//!
//! Prompt and logging support utilities for a multi-agent orchestration
//! system: a catalog of default role prompts, a lazy config-backed prompt
//! resolver that never fails past its fallback, and an output tee that
//! duplicates console output into an append-only log file.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod prompts;
pub mod resolver;
