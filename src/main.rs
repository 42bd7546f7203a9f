use std::path::PathBuf;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use playfeat::{cli, config, error, utils};

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
    /// Authorize with Spotify API
    Auth,

    /// Build a feature dataset from a playlist
    Playlist(PlaylistOptions),

    /// Build a feature dataset from explicit track ids
    Tracks(TracksOptions),

    /// Some helper information about playlists and the cached token
    Info(InfoOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct PlaylistOptions {
    /// Spotify playlist id
    pub playlist_id: String,

    /// Write the dataset to this file instead of printing a preview
    #[clap(long)]
    pub output: Option<PathBuf>,

    /// Output format used with --output
    #[clap(
        long,
        default_value = "csv",
        value_parser = utils::parse_export_format
    )]
    pub format: utils::ExportFormat,
}

#[derive(Parser, Debug, Clone)]
pub struct TracksOptions {
    /// Comma-separated track ids
    #[clap(long, conflicts_with = "file")]
    pub ids: Option<String>,

    /// File with one track id per line ('#' starts a comment)
    #[clap(long)]
    pub file: Option<PathBuf>,

    /// Write the dataset to this file instead of printing a preview
    #[clap(long)]
    pub output: Option<PathBuf>,

    /// Output format used with --output
    #[clap(
        long,
        default_value = "csv",
        value_parser = utils::parse_export_format
    )]
    pub format: utils::ExportFormat,
}

#[derive(Parser, Debug, Clone)]
pub struct InfoOptions {
    /// Show the track total of this playlist
    #[clap(long)]
    playlist: Option<String>,

    /// Show the cached token's remaining lifetime
    #[clap(long)]
    token: bool,
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
        Command::Auth => cli::auth().await,
        Command::Playlist(opt) => cli::playlist(opt.playlist_id, opt.output, opt.format).await,
        Command::Tracks(opt) => cli::tracks(opt.ids, opt.file, opt.output, opt.format).await,
        Command::Info(opt) => cli::info(opt.playlist, opt.token).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
