use crate::demo::{run_demo, run_preview, DemoArgs, PreviewArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use round_insights::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Round Insights",
    about = "Serve and preview deterministic post-round golf insights",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Work with the insight engine directly
    Insights {
        #[command(subcommand)]
        command: InsightsCommand,
    },
    /// Walk a seeded golfer through onboarding and established rounds
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum InsightsCommand {
    /// Render insights for a JSON request file without persisting anything
    Preview(PreviewArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Insights {
            command: InsightsCommand::Preview(args),
        } => run_preview(args),
        Command::Demo(args) => run_demo(args),
    }
}
