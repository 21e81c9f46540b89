//! Investigation pipeline: build the input, stream the run, render.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use tracing::warn;

use veriscope_client::{ApiClient, Investigator};
use veriscope_core::{InvestigationInput, Phase};

use crate::display;

#[derive(Args)]
pub struct InvestigateArgs {
    /// Media link to investigate.
    #[arg(long, conflicts_with = "file")]
    url: Option<String>,

    /// Local image to upload instead of a link.
    #[arg(long)]
    file: Option<PathBuf>,

    /// Claim to check. Leave empty to let the backend auto-detect one.
    #[arg(long, default_value = "")]
    claim: String,

    /// Print the final state as JSON instead of the rendered card.
    #[arg(long)]
    json: bool,

    /// Skip the reachability probe before submitting.
    #[arg(long)]
    no_health_check: bool,
}

pub async fn investigate(api_url: &str, args: InvestigateArgs) -> anyhow::Result<()> {
    let input = build_input(&args).await?;

    let api = ApiClient::new(api_url.to_string());
    if !args.no_health_check
        && let Err(e) = api.health().await
    {
        warn!(error = %e, "backend health probe failed, submitting anyway");
    }

    let mut investigator = Investigator::new(api);

    println!("[SYSTEM] Initializing investigation...");
    let mut printed = 0;
    investigator
        .start(input, |state| {
            for entry in &state.logs[printed..] {
                println!("[{}] {}", entry.agent, entry.message);
            }
            printed = state.logs.len();
        })
        .await
        .context("starting investigation")?;

    let state = investigator.snapshot();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&state)?);
    } else {
        display::print_report(&state);
    }

    if state.phase == Phase::Concluded && state.result.is_none() {
        anyhow::bail!("no verdict received");
    }
    Ok(())
}

async fn build_input(args: &InvestigateArgs) -> anyhow::Result<InvestigationInput> {
    if let Some(path) = &args.file {
        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("reading {}", path.display()))?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        Ok(InvestigationInput::Upload {
            file_name,
            bytes,
            claim: args.claim.clone(),
        })
    } else {
        Ok(InvestigationInput::Url {
            value: args.url.clone().unwrap_or_default(),
            claim: args.claim.clone(),
        })
    }
}
