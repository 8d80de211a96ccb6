//! boardctl - CLI entry point

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use tracing_subscriber::EnvFilter;

use boardctl::{BoardClient, Config, FileStore, HttpBoardClient, RecentFolders};

#[derive(Parser)]
#[command(name = "boardctl")]
#[command(about = "Terminal control panel for a board service")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive control panel
    Panel,

    /// Manage the recent-folders list
    #[command(subcommand)]
    Recent(RecentCommands),

    /// List favorites from the board configuration
    Favorites,

    /// Print the content preview
    Preview {
        /// Fetch the complete content instead of the truncated summary
        #[arg(long)]
        full: bool,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum RecentCommands {
    /// List recent folders, newest first
    List,
    /// Record a folder open
    Add {
        /// Folder path
        path: String,
    },
    /// Clear the recent-folders list
    Clear,
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Print the config file path
    Path,
    /// Write a default config file if none exists
    Init,
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Panel => cmd_panel(),
        Commands::Recent(cmd) => match cmd {
            RecentCommands::List => cmd_recent_list(),
            RecentCommands::Add { path } => cmd_recent_add(&path),
            RecentCommands::Clear => cmd_recent_clear(),
        },
        Commands::Favorites => cmd_favorites(),
        Commands::Preview { full } => cmd_preview(full),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => cmd_config_show(),
            ConfigCommands::Path => cmd_config_path(),
            ConfigCommands::Init => cmd_config_init(),
        },
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "boardctl", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Diagnostics go to stderr so they never corrupt the TUI screen.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn remote_client(config: &Config) -> Result<HttpBoardClient> {
    HttpBoardClient::new(&config.server.base_url, config.fetch_timeout())
        .context("Failed to create board client")
}

fn recent_cache() -> Result<RecentFolders<FileStore>> {
    Ok(RecentFolders::new(FileStore::open_default()?))
}

fn cmd_panel() -> Result<()> {
    let config = Config::load()?;
    boardctl::tui::run(&config)
}

fn cmd_recent_list() -> Result<()> {
    let entries = recent_cache()?.load();
    if entries.is_empty() {
        println!("No recent folders.");
        return Ok(());
    }
    for entry in entries {
        println!(
            "{}  {}",
            entry.last_accessed.format("%Y-%m-%d %H:%M:%S"),
            entry.path
        );
    }
    Ok(())
}

fn cmd_recent_add(path: &str) -> Result<()> {
    if path.is_empty() {
        println!("Nothing to record: empty path.");
        return Ok(());
    }
    let entries = recent_cache()?.add(path);
    println!("Recorded {} ({} recent)", path, entries.len());
    Ok(())
}

fn cmd_recent_clear() -> Result<()> {
    recent_cache()?.clear();
    println!("Recent folders cleared.");
    Ok(())
}

fn cmd_favorites() -> Result<()> {
    let config = Config::load()?;
    let favorites = remote_client(&config)?.get_config()?.favorites;
    if favorites.is_empty() {
        println!("No favorites configured.");
        return Ok(());
    }
    for favorite in favorites {
        println!("{}\t{}", favorite.label, favorite.path);
    }
    Ok(())
}

fn cmd_preview(full: bool) -> Result<()> {
    let config = Config::load()?;
    let preview = remote_client(&config)?.get_preview(full)?;
    if preview.preview.trim().is_empty() {
        println!("No preview available.");
    } else {
        println!("{}", preview.preview);
    }
    Ok(())
}

fn cmd_config_show() -> Result<()> {
    let config = Config::load()?;
    print!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}

fn cmd_config_path() -> Result<()> {
    println!("{}", Config::config_path()?.display());
    Ok(())
}

fn cmd_config_init() -> Result<()> {
    let path = Config::config_path()?;
    if path.exists() {
        println!("Config already exists at {}", path.display());
        return Ok(());
    }
    Config::default().save()?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}
