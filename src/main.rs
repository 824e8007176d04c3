use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use rasterpad::Config;
use rasterpad::export;
use rasterpad::input::EditorState;
use rasterpad::script::Script;
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rasterpad")]
#[command(
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("RASTERPAD_GIT_HASH"), ")"),
    about = "Raster canvas editor with undo history, shape tools and flood fill"
)]
struct Cli {
    /// Use this config file instead of ~/.config/rasterpad/config.toml
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<PathBuf>,

    /// Canvas width in pixels (overrides [canvas] width)
    #[arg(long, value_name = "W")]
    width: Option<u32>,

    /// Canvas height in pixels (overrides [canvas] height)
    #[arg(long, value_name = "H")]
    height: Option<u32>,

    /// Replay a gesture script ("-" reads from stdin)
    #[arg(long, short = 's', value_name = "FILE")]
    script: Option<String>,

    /// Write the final canvas to this PNG file
    #[arg(long, short = 'o', value_name = "FILE")]
    output: Option<PathBuf>,

    /// Write a documented default config file and exit
    #[arg(long, action = ArgAction::SetTrue)]
    init_config: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => Config::get_config_path()?,
    };

    if cli.init_config {
        Config::create_default_file(&config_path)?;
        println!("Created default config at {}", config_path.display());
        return Ok(());
    }

    let mut config = Config::load_from(&config_path)?;
    if let Some(width) = cli.width {
        config.canvas.width = width;
    }
    if let Some(height) = cli.height {
        config.canvas.height = height;
    }
    config.validate_and_clamp();

    let mut state = EditorState::from_config(&config)?;

    if let Some(source) = &cli.script {
        let text = read_script(source)?;
        let script = Script::parse(&text).with_context(|| format!("Invalid script {}", source))?;
        log::info!("Replaying {} script steps from {}", script.len(), source);

        let written = script
            .run(&mut state)
            .with_context(|| format!("Script {} failed", source))?;
        for path in written {
            println!("Exported {}", path.display());
        }
    }

    if let Some(output) = &cli.output {
        let path = export::save_png(state.buffer(), output)
            .with_context(|| format!("Failed to export to {}", output.display()))?;
        println!("Exported {}", path.display());
    } else if state.take_export_request() {
        let path = export::export_to_directory(state.buffer(), &config.export)
            .context("Failed to export to the configured directory")?;
        println!("Exported {}", path.display());
    }

    println!(
        "Canvas {}x{} (undo: {}, redo: {})",
        state.buffer().width(),
        state.buffer().height(),
        state.canvas.history().undo_len(),
        state.canvas.history().redo_len()
    );

    Ok(())
}

fn read_script(source: &str) -> Result<String> {
    if source == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read script from stdin")?;
        Ok(text)
    } else {
        std::fs::read_to_string(source).with_context(|| format!("Failed to read script {}", source))
    }
}
