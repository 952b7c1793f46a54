//! Terminal shooter runner (default binary).
//!
//! Loads the configuration, fits the playfield to the terminal, builds the
//! textures and runs the game on the alternate screen. Logs go to a file
//! because the terminal belongs to the game.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use tui_shooter::assets::build_registry;
use tui_shooter::core::{GameConfig, Viewport};
use tui_shooter::engine::{Game, SoundBoard};
use tui_shooter::input::TerminalInput;
use tui_shooter::term::{BrailleView, ColorScheme, TerminalRenderer};
use tui_shooter::types::MatchResult;

/// Side-scrolling shooter drawn with Braille characters
#[derive(Parser)]
#[command(name = "tui-shooter")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Game configuration (JSON)
    #[arg(short, long, default_value = "config/default.json")]
    config: PathBuf,

    /// Directory that image texture paths are relative to
    #[arg(long, default_value = ".")]
    assets: PathBuf,

    /// Show the FPS counter and log per-stage frame timings
    #[arg(long)]
    debug: bool,

    /// Invert the Braille rendering
    #[arg(long)]
    inverse: bool,

    /// Log file
    #[arg(long, default_value = "tui-shooter.log")]
    log_file: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let mut config = GameConfig::from_path(&cli.config)
        .with_context(|| format!("loading configuration {}", cli.config.display()))?;
    config.debug |= cli.debug;
    config.canvas.inverse |= cli.inverse;

    let size = TerminalRenderer::size()?;
    let viewport = Viewport::from_terminal(size.cols, size.rows);
    config.fit_to_terminal(viewport)?;

    let textures = build_registry(&config.textures, &cli.assets).context("loading textures")?;
    let sound = SoundBoard::from_config(&config);
    let mut game = Game::new(&config, &textures, viewport, sound)?;

    let view = BrailleView::new(ColorScheme::from_config(&config.canvas.colors));
    let mut term = TerminalRenderer::new(view);
    term.enter()?;

    let result = game.run(&mut TerminalInput::new(), &mut term);

    // Always try to restore terminal state before reporting anything.
    let restored = term.exit();
    let result = result.context("game aborted")?;
    restored?;

    match result {
        MatchResult::Win => println!("You won!"),
        MatchResult::Loss => println!("Game over"),
        MatchResult::Undetermined => {}
    }
    Ok(())
}

fn init_logging(cli: &Cli) -> Result<()> {
    let file = File::create(&cli.log_file)
        .with_context(|| format!("creating log file {}", cli.log_file.display()))?;
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
