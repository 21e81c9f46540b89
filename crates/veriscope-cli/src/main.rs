use clap::{Parser, Subcommand};

mod display;
mod run;

/// Streaming client for the veriscope media-verification backend.
#[derive(Parser)]
#[command(name = "veriscope", version)]
struct Cli {
    /// Backend base URL.
    #[arg(long, env = "VERISCOPE_API_URL", default_value = "http://localhost:5000")]
    api_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Submit media and stream the investigation live.
    Investigate(run::InvestigateArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Investigate(args) => run::investigate(&cli.api_url, args).await,
    }
}
