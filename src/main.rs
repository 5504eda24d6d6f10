use clap::{
    ArgAction, CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use trackscout::{cli, config, error, options};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Start the HTTP API server
    Serve,

    /// Search tracks, most popular first
    Search(SearchOptions),

    /// Recommendations seeded by a single track
    Recommend(RecommendOptions),

    /// Audio features of a single track
    Features(FeaturesOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct SearchOptions {
    /// Search text, at least 3 characters
    pub query: String,

    /// Maximum number of tracks
    #[clap(long)]
    pub limit: Option<u32>,
}

#[derive(Parser, Debug, Clone)]
pub struct RecommendOptions {
    /// Spotify id of the seed track
    pub id: String,

    /// Maximum number of tracks
    #[clap(long)]
    pub limit: Option<u32>,

    /// Tuning option as key=value (e.g. target_energy=0.9); can be repeated
    #[clap(
        long = "option",
        value_parser = options::parse_option_pair,
        action = ArgAction::Append,
        num_args = 1
    )]
    pub options: Vec<(String, String)>,
}

#[derive(Parser, Debug, Clone)]
pub struct FeaturesOptions {
    /// Spotify id of the track
    pub id: String,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Serve => cli::serve().await,
        Command::Search(opt) => cli::search(opt.query, opt.limit).await,
        Command::Recommend(opt) => cli::recommend(opt.id, opt.limit, opt.options).await,
        Command::Features(opt) => cli::features(opt.id).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
