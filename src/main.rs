use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use sporec::{cli, config, recommend::DEFAULT_RECOMMENDATIONS, warning};

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
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Recommend playlist tracks similar to a seed track
    Recommend(RecommendOptions),

    /// Show the track dataset of a playlist
    Dataset(DatasetOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct RecommendOptions {
    /// Spotify playlist id (defaults to SPOREC_PLAYLIST_ID)
    #[clap(long)]
    pub playlist: Option<String>,

    /// Name of the seed track (defaults to SPOREC_SEED_TRACK)
    #[clap(long)]
    pub song: Option<String>,

    /// Number of tracks to recommend
    #[clap(long, default_value_t = DEFAULT_RECOMMENDATIONS)]
    pub count: usize,

    /// Ranking to apply
    #[clap(long, value_enum, default_value_t = cli::RecommendMode::Hybrid)]
    pub mode: cli::RecommendMode,
}

#[derive(Parser, Debug, Clone)]
pub struct DatasetOptions {
    /// Spotify playlist id (defaults to SPOREC_PLAYLIST_ID)
    #[clap(long)]
    pub playlist: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        warning!("Cannot load environment file. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Recommend(opt) => {
            cli::recommend(opt.playlist, opt.song, opt.count, opt.mode).await
        }
        Command::Dataset(opt) => cli::dataset(opt.playlist).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
