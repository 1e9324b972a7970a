use crate::demo::{run_demo, run_recommend, DemoArgs, RecommendArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use outreach_ai::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Outreach Script Recommender",
    about = "Score training catalogs against prospects and serve outreach recommendations",
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
    /// Run the recommendation engine from the command line
    Outreach {
        #[command(subcommand)]
        command: OutreachCommand,
    },
    /// Run a demo over a built-in sample catalog and print the coverage report
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum OutreachCommand {
    /// Recommend outreach scripts for one prospect from CSV catalog exports
    Recommend(RecommendArgs),
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
        Command::Outreach {
            command: OutreachCommand::Recommend(args),
        } => run_recommend(args),
        Command::Demo(args) => run_demo(args),
    }
}
