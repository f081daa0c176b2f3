use clap::{Parser, Subcommand};
use telesum_core::cli;
use telesum_core::cli::summarize::SummarizeArgs;
use telesum_core::logging::{LogFormat, default_log_format, init_logging};

#[derive(Parser, Debug)]
#[command(
    name = "telesum",
    version,
    about = "telesum: daily telemetry log summarizer"
)]
struct Cli {
    /// Log output format [default: pretty on a terminal, json otherwise]
    #[arg(long, global = true, value_enum)]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Summarize all day files into summary.json (default)
    Summarize(SummarizeArgs),

    /// List the day files a run would read
    Files(cli::files::FilesArgs),

    /// Configuration tooling
    Config {
        #[command(subcommand)]
        cmd: cli::config::ConfigCmd,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_logging(cli.log_format.unwrap_or_else(default_log_format));

    let result = match cli.command {
        Some(Command::Summarize(args)) => cli::summarize::summarize(args).await,
        Some(Command::Files(args)) => cli::files::files(args),
        Some(Command::Config { cmd }) => cli::config::run(cmd),
        None => cli::summarize::summarize(SummarizeArgs::default()).await,
    };

    if let Err(e) = result {
        eprintln!("telesum error: {e:#}");
        std::process::exit(1);
    }
}
