//! Command-line host for the check window: one-shot checks, or a packet
//! loop fed from stdin.

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use tokio::io::{AsyncBufReadExt, BufReader};

use callcheck::check_window::{self, CheckWindow, Packet, Pane};
use callcheck::cli::{self, Cli, Commands, ConfigCommands};
use callcheck::config::preferences::Preferences;
use callcheck::config::theme::{resolve_styles, to_hex};
use callcheck::config::{self, ConfigManager};
use callcheck::renderer::{self, Renderer};
use callcheck::sources::{self, Spot};
use callcheck::fuzzy_match;

fn print_panes(window: &mut CheckWindow, plain: bool) {
    let renderer = Renderer::new(window.styles(), plain);
    for pane in Pane::ALL {
        print!("{}", renderer.render_pane(pane.title(), window.pane(pane)));
    }
}

async fn run_check(window: &mut CheckWindow, call: String, spots: Option<std::path::PathBuf>) -> Result<()> {
    window.handle(Packet::CallChanged { call }).await;
    if let Some(path) = spots {
        let content = tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("reading spots from {:?}", path))?;
        let spots: Vec<Spot> = serde_json::from_str(&content)
            .with_context(|| format!("parsing spots in {:?}", path))?;
        window.handle(Packet::CheckSpots { spots }).await;
    }
    Ok(())
}

/// Processes packets from stdin one at a time, each to completion.
async fn run_listen(window: &mut CheckWindow, plain: bool) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match serde_json::from_str::<Packet>(line) {
            Ok(packet) => {
                window.handle(packet).await;
                print_panes(window, plain);
            }
            Err(e) => warn!("Ignoring packet {:?}: {}", line, e),
        }
    }
    info!("Input closed, stopping.");
    Ok(())
}

async fn run_config(
    config: &ConfigManager,
    action: &ConfigCommands,
    dark_mode_override: Option<bool>,
) -> Result<()> {
    match action {
        ConfigCommands::Show => {
            let dark = dark_mode_override.unwrap_or_else(|| config.preferences().is_dark_mode());
            let styles = resolve_styles(dark);
            println!("config file:   {}", config.paths().config_file.display());
            println!("scp file:      {}", config.scp_file().display());
            println!("database:      {}", config.database_path().display());
            println!(
                "highlights:    remove {} add {} match {} ({})",
                to_hex(styles.remove),
                to_hex(styles.add),
                to_hex(styles.matched),
                if dark { "dark" } else { "light" }
            );
            println!("{}", serde_json::to_string_pretty(config.preferences())?);
        }
        ConfigCommands::Init => {
            let path = &config.paths().config_file;
            if path.exists() {
                warn!("Preference file {:?} already exists, leaving it alone", path);
            } else {
                Preferences::default().save_to(path).await?;
                println!("wrote {}", path.display());
            }
        }
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if let Some(level) = cli.log_level() {
        builder.filter_level(level);
    }
    builder.init();

    if cli.verbose {
        log::info!("Verbose logging enabled.");
    }

    config::init();
    config::theme::init();
    cli::init();
    check_window::init();
    fuzzy_match::init();
    renderer::init();
    sources::init();

    let config = ConfigManager::new(cli.paths()).await;

    if let Commands::Config { action } = &cli.command {
        return run_config(&config, action, cli.mode.dark_mode_override()).await;
    }

    let mut window = CheckWindow::new(config).await;
    window.set_dark_mode_override(cli.mode.dark_mode_override());
    window.set_active(true);

    match cli.command {
        Commands::Check { call, spots } => {
            run_check(&mut window, call.to_uppercase(), spots).await?;
            print_panes(&mut window, cli.plain);
        }
        Commands::Listen => run_listen(&mut window, cli.plain).await?,
        Commands::Config { .. } => {}
    }
    Ok(())
}
