mod app;
mod assets;
mod audio;
mod config;

use app::WavePleerApp;
use assets::Assets;
use audio::RodioDevice;
use clap::Parser;
use config::Settings;
use eframe::NativeOptions;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use wavecore::storage::{self, StorageError};
use wavecore::{Favorites, PlaybackController, Session};

#[derive(Parser)]
#[command(name = "wavepleer")]
#[command(about = "A minimal desktop audio player")]
struct Args {
    /// Settings file (defaults to settings.json in the config directory)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Folder scanned for tracks
    #[arg(long)]
    music_dir: Option<PathBuf>,
    /// Folder holding button icons, font and covers
    #[arg(long)]
    assets_dir: Option<PathBuf>,
    /// Debug logging for the player crates
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        "info,wavecore=debug,wavepleer=debug"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_env_filter(filter)
        .init();
}

/// Report a startup failure and exit.
fn fatal(message: String) -> ! {
    tracing::error!("{message}");
    eprintln!("wavepleer: {message}");
    std::process::exit(1)
}

fn main() -> eframe::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let settings = Settings::load(args.config.as_deref())
        .unwrap_or_else(|e| fatal(format!("cannot read settings: {e}")))
        .with_overrides(args.music_dir, args.assets_dir);
    if let Err(e) = settings.validate() {
        fatal(format!("invalid settings: {e}"));
    }

    let assets = Assets::load(
        &settings.assets_dir,
        &settings.covers_dir(),
        &settings.library.cover_extension,
    )
    .unwrap_or_else(|e| fatal(e.to_string()));

    let music_dir = &settings.library.music_dir;
    let playlist = match storage::scan_dir(music_dir, &settings.library.extension) {
        Ok(tracks) => tracks,
        Err(StorageError::NotFound(_)) => {
            tracing::warn!(dir = %music_dir.display(), "music directory not found");
            Vec::new()
        }
        Err(e) => {
            tracing::warn!(dir = %music_dir.display(), error = %e, "cannot list music directory");
            Vec::new()
        }
    };
    tracing::info!(dir = %music_dir.display(), tracks = playlist.len(), "library scanned");

    let favorites_path = settings.favorites_path();
    let favorites = Favorites::load(&favorites_path).unwrap_or_else(|e| {
        tracing::warn!(
            path = %favorites_path.display(),
            error = %e,
            "cannot read favorites, new favorites will not be saved"
        );
        Favorites::read_only(favorites_path.clone())
    });

    let playback = PlaybackController::new(playlist, RodioDevice::open_default(), settings.playback.initial_volume);
    let window = egui::vec2(settings.window.width, settings.window.height);
    let session = Session::new(
        playback,
        favorites,
        assets.covers.len(),
        window,
        settings.session_options(),
    );

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([settings.window.width, settings.window.height])
            .with_title(settings.window.title.clone()),
        ..Default::default()
    };
    eframe::run_native(
        &settings.window.title,
        options,
        Box::new(move |cc| Box::new(WavePleerApp::new(cc, session, assets))),
    )
}
