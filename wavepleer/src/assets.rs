//! Startup asset loading: button icons, label font, background and covers.
//!
//! Images are decoded here into `ColorImage`s so failures surface before
//! the window opens; they are uploaded as textures once egui is running.

use egui::ColorImage;
use std::path::{Path, PathBuf};
use thiserror::Error;
use wavecore::layout::COVER_SIZE;
use wavecore::storage::{self, StorageError};
use wavecore::Control;

pub const FONT_FILE: &str = "font.ttf";
pub const BACKGROUND_FILE: &str = "background.png";

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot decode {path}: {reason}")]
    Decode { path: PathBuf, reason: String },
}

pub struct Assets {
    pub icons: Vec<(Control, ColorImage)>,
    pub font: Vec<u8>,
    pub background: Option<ColorImage>,
    pub covers: Vec<ColorImage>,
}

impl Assets {
    /// Load everything. Icons and font are required; covers are optional
    /// and undecodable ones are skipped.
    pub fn load(assets_dir: &Path, covers_dir: &Path, cover_ext: &str) -> Result<Self, AssetError> {
        let mut icons = Vec::with_capacity(Control::ALL.len());
        for control in Control::ALL {
            let path = assets_dir.join(format!("{}.png", control.icon_name()));
            icons.push((control, decode_image(&path)?));
        }

        let font = load_font(&assets_dir.join(FONT_FILE))?;

        let background_path = assets_dir.join(BACKGROUND_FILE);
        let background = if background_path.exists() {
            Some(decode_image(&background_path)?)
        } else {
            tracing::info!(path = %background_path.display(), "no background image");
            None
        };

        let covers = load_covers(covers_dir, cover_ext);

        tracing::info!(covers = covers.len(), background = background.is_some(), "assets loaded");
        Ok(Self { icons, font, background, covers })
    }
}

/// Decode an image file into an egui image.
pub fn decode_image(path: &Path) -> Result<ColorImage, AssetError> {
    let data = std::fs::read(path).map_err(|source| AssetError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let img = image::load_from_memory(&data).map_err(|e| AssetError::Decode {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    Ok(to_color_image(&img))
}

fn to_color_image(img: &image::DynamicImage) -> ColorImage {
    let rgba = img.to_rgba8();
    let (w, h) = rgba.dimensions();
    ColorImage::from_rgba_unmultiplied([w as usize, h as usize], rgba.as_raw())
}

/// Read a TrueType/OpenType font, checking its signature.
pub fn load_font(path: &Path) -> Result<Vec<u8>, AssetError> {
    let data = std::fs::read(path).map_err(|source| AssetError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let known: [&[u8]; 4] = [&[0x00, 0x01, 0x00, 0x00], b"OTTO", b"true", b"ttcf"];
    if data.len() < 4 || !known.iter().any(|magic| data.starts_with(magic)) {
        return Err(AssetError::Decode {
            path: path.to_path_buf(),
            reason: "not a TrueType or OpenType font".into(),
        });
    }
    Ok(data)
}

/// Every cover in `dir`, resized to the display size.
pub fn load_covers(dir: &Path, ext: &str) -> Vec<ColorImage> {
    let paths = match storage::scan_dir(dir, ext) {
        Ok(paths) => paths,
        Err(StorageError::NotFound(_)) => {
            tracing::info!(dir = %dir.display(), "no covers directory");
            return Vec::new();
        }
        Err(e) => {
            tracing::warn!(dir = %dir.display(), error = %e, "cannot list covers");
            return Vec::new();
        }
    };

    let mut covers = Vec::new();
    for path in paths {
        let data = match std::fs::read(&path) {
            Ok(d) => d,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "skipping cover");
                continue;
            }
        };
        match image::load_from_memory(&data) {
            Ok(img) => {
                let resized = img.resize_exact(
                    COVER_SIZE.x as u32,
                    COVER_SIZE.y as u32,
                    image::imageops::FilterType::Triangle,
                );
                covers.push(to_color_image(&resized));
            }
            Err(e) => tracing::warn!(path = %path.display(), error = %e, "skipping cover"),
        }
    }
    covers
}
