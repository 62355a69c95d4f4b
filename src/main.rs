//! collab-kit CLI
//!
//! Resolves a role's prompt through the configured provider (with the
//! catalog default as fallback), substitutes `{members}` on behalf of the
//! orchestration layer, and prints the result. Optionally duplicates all
//! output into an append-mode log file.

use anyhow::{Result, bail};
use clap::Parser;
use collab_kit::cli::Cli;
use collab_kit::logging::OutputTee;
use collab_kit::prompts::{self, MEMBERS_PLACEHOLDER};
use collab_kit::resolver::get_prompt;
use serde::Serialize;
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

/// JSON shape for `--json` output.
#[derive(Serialize)]
struct PromptOutput<'a> {
    role: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    members: Option<&'a str>,
    prompt: &'a str,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    // Install the tee before anything writes output. An open failure is
    // fatal: once log capture is lost there is nothing safe to fall back to.
    let tee = match &cli.log_file {
        Some(path) => Some(OutputTee::install(path)?),
        None => None,
    };

    // Tracing goes through the tee when one is installed, so subscriber
    // output lands in the same log file as everything else.
    match &tee {
        Some(tee) => {
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(tee.tracing_writer())
                .with_ansi(false)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        None => {
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(std::io::stderr)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
    }

    // If an explicit prompts file was given, hand it to the resolver's
    // discovery through the environment.
    // SAFETY: This is safe at program startup before any other threads are spawned
    if let Some(path) = &cli.prompts {
        unsafe {
            std::env::set_var("COLLAB_KIT_PROMPTS_PATH", path);
        }
    }

    let Some(fallback) = prompts::default_prompt(&cli.role) else {
        bail!("unknown role '{}'", cli.role);
    };

    debug!(role = %cli.role, "resolving prompt");
    let path = ["agents", cli.role.as_str(), "prompt"];
    let mut prompt = get_prompt(&path, fallback).await;

    // The catalog hands out raw templates; substitution is this layer's job.
    if let Some(members) = &cli.members {
        prompt = prompt.replace(MEMBERS_PLACEHOLDER, members);
    }

    let rendered = if cli.json {
        serde_json::to_string_pretty(&PromptOutput {
            role: &cli.role,
            members: cli.members.as_deref(),
            prompt: &prompt,
        })?
    } else {
        prompt
    };

    match &tee {
        Some(tee) => tee.log(format_args!("{rendered}")),
        None => println!("{rendered}"),
    }

    Ok(())
}
