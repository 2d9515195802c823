use crate::commands::{run_score, run_week_start, ScoreArgs, WeekStartArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use soulmatch::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "SoulMatch Compatibility Service",
    about = "Score questionnaire compatibility and serve weekly match proposals",
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
    /// Score two answer sets and print the result as JSON
    Score(ScoreArgs),
    /// Print the partition key of the current (or a given) week
    WeekStart(WeekStartArgs),
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
        Command::Score(args) => run_score(args),
        Command::WeekStart(args) => run_week_start(args),
    }
}
