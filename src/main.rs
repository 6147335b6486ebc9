use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::{info, warn};
use pomowatch::{AppConfig, JsonFileStore, PomoWatch, TimerUpdate, Variant};
use pomowatch_core::validator;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug, Clone)]
#[command(name = "pomowatch")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Debug verbosity level (0=quiet, 1=info, 2=debug, 3=trace)
    #[arg(short = 'd', long = "debug", value_name = "LEVEL", default_value = "0", global = true)]
    debug: u8,

    /// Config file to use instead of the per-user one
    #[arg(long = "config", value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Custom watchface store to use instead of the per-user one
    #[arg(long = "store", value_name = "FILE", global = true)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// List every watchface, built-ins first
    List,
    /// Import a watchface JSON file as a custom face
    Import {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Remove a custom watchface
    Remove {
        #[arg(value_name = "ID")]
        id: String,
    },
    /// Check a watchface JSON file without importing it
    Validate {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Make a watchface (and optionally a variant) the default
    Select {
        #[arg(value_name = "ID")]
        id: String,
        /// Render variant (v1 or v2)
        #[arg(long)]
        variant: Option<String>,
    },
    /// Render one frame of a watchface
    Render {
        /// Watchface id (defaults to the configured one)
        #[arg(long)]
        face: Option<String>,
        /// Render variant (v1 or v2)
        #[arg(long)]
        variant: Option<String>,
        /// Session length in seconds
        #[arg(long)]
        duration: Option<u64>,
        /// Seconds left (defaults to the full duration)
        #[arg(long)]
        remaining: Option<u64>,
        #[arg(long)]
        running: bool,
        #[arg(long)]
        paused: bool,
        #[arg(long)]
        hide_controls: bool,
        /// Print the render tree as JSON instead of an outline
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Level 0: warn, 1: info, 2: debug, 3+: trace
    let log_level = match cli.debug {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // Allow RUST_LOG to override CLI setting
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    info!("Starting pomowatch v{}", env!("CARGO_PKG_VERSION"));

    // Validation never touches config or storage
    let command = match cli.command {
        Command::Validate { file } => return validate_file(&file),
        command => command,
    };

    let mut config = load_config(cli.config.as_deref());
    let store = match &cli.store {
        Some(path) => JsonFileStore::new(path),
        None => JsonFileStore::open_default()?,
    };
    let mut app = PomoWatch::new(&config, Box::new(store))?;

    match command {
        Command::List => {
            for face in app.registry().get_all() {
                let marker = if face.id == app.selected_id() { "*" } else { " " };
                let origin = if app.registry().is_built_in(&face.id) { "built-in" } else { "custom" };
                println!("{} {:<24} {:<28} ({})", marker, face.id, face.name, origin);
            }
        }
        Command::Import { file } => {
            let id = app.import_file(&file)?;
            println!("Imported watchface as '{}'", id);
        }
        Command::Remove { id } => {
            if !app.remove(&id) {
                bail!("No custom watchface '{}'", id);
            }
            if config.watchface.selected == id {
                config.watchface.selected = app.selected_id().to_string();
                save_config(&config, cli.config.as_deref())?;
            }
            println!("Removed '{}'", id);
        }
        Command::Select { id, variant } => {
            if app.registry().get(&id).is_none() {
                bail!("Unknown watchface '{}'", id);
            }
            config.watchface.selected = id;
            if let Some(variant) = variant {
                config.watchface.variant = Variant::from_name(&variant);
            }
            save_config(&config, cli.config.as_deref())?;
            println!(
                "Selected '{}' ({})",
                config.watchface.selected, config.watchface.variant
            );
        }
        Command::Render {
            face,
            variant,
            duration,
            remaining,
            running,
            paused,
            hide_controls,
            json,
        } => {
            if let Some(face) = face {
                app.select(&face);
            }
            if let Some(variant) = variant {
                app.set_variant(Variant::from_name(&variant));
            }
            if hide_controls {
                app.set_hide_controls(true);
            }

            let duration = duration.unwrap_or(config.timer.default_duration_secs);
            let update = TimerUpdate {
                duration,
                remaining: remaining.unwrap_or(duration).min(duration),
                is_running: running,
                is_paused: paused,
                session_name: None,
            };

            let Some(tree) = app.render(&update, true) else {
                bail!("Watchface '{}' is not available", app.selected_id());
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&tree)?);
            } else {
                if let Some(bar) = &tree.progress_bar {
                    print!("{}", bar);
                }
                print!("{}", tree.root);
            }
        }
        Command::Validate { file } => validate_file(&file)?,
    }

    Ok(())
}

fn validate_file(path: &Path) -> Result<()> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let candidate: serde_json::Value = serde_json::from_str(&content)
        .with_context(|| format!("parsing {}", path.display()))?;
    match validator::check(&candidate) {
        Ok(()) => {
            println!("{}: valid", path.display());
            Ok(())
        }
        Err(reason) => bail!("{}: Invalid watch face configuration: {}", path.display(), reason),
    }
}

fn load_config(path: Option<&Path>) -> AppConfig {
    let loaded = match path {
        Some(path) if path.exists() => AppConfig::load_from_path(path),
        Some(_) => Ok(AppConfig::default()),
        None => AppConfig::load(),
    };
    // A broken config file shouldn't keep the watchfaces from working
    loaded.unwrap_or_else(|e| {
        warn!("Failed to load config, using defaults: {:#}", e);
        AppConfig::default()
    })
}

fn save_config(config: &AppConfig, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => config.save_to_path(path),
        None => config.save(),
    }
}
