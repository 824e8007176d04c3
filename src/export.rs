//! PNG export of the canvas buffer.

use crate::config::ExportConfig;
use crate::draw::PixelBuffer;
use chrono::Local;
use chrono::format::{Item, StrftimeItems};
use image::{ImageFormat, RgbaImage};
use std::fmt::Write;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name used when the user exports without choosing one.
pub const DEFAULT_EXPORT_NAME: &str = "drawing.png";

/// Errors that can occur while exporting the canvas.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to write export: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),

    #[error("Buffer of {len} bytes does not match a {width}x{height} RGBA image")]
    InvalidBuffer { width: u32, height: u32, len: usize },

    #[error("Invalid filename template '{0}'")]
    InvalidTemplate(String),
}

/// Encodes the buffer as a PNG image.
///
/// Pixels are written as-is, so erased areas stay transparent.
pub fn encode_png(buffer: &PixelBuffer) -> Result<Vec<u8>, ExportError> {
    let (width, height) = (buffer.width(), buffer.height());
    let pixels = buffer.pixels().to_vec();
    let len = pixels.len();
    let image = RgbaImage::from_raw(width, height, pixels).ok_or(ExportError::InvalidBuffer {
        width,
        height,
        len,
    })?;

    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    log::debug!("Encoded {}x{} canvas to {} PNG bytes", width, height, bytes.len());
    Ok(bytes)
}

/// Encodes the buffer and writes it to `path`, creating parent directories.
///
/// # Returns
/// The path that was written
pub fn save_png(buffer: &PixelBuffer, path: &Path) -> Result<PathBuf, ExportError> {
    let bytes = encode_png(buffer)?;

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        ensure_directory_exists(parent)?;
    }

    fs::write(path, &bytes)?;
    log::info!("Exported canvas to {} ({} bytes)", path.display(), bytes.len());
    Ok(path.to_path_buf())
}

/// Exports into the configured directory with a timestamped filename.
pub fn export_to_directory(
    buffer: &PixelBuffer,
    config: &ExportConfig,
) -> Result<PathBuf, ExportError> {
    let directory = ensure_directory_exists(&expand_tilde(&config.directory))?;
    let filename = generate_filename(&config.filename_template)?;
    save_png(buffer, &directory.join(filename))
}

/// Generate a filename based on the template and current time.
///
/// # Arguments
/// * `template` - Template string with chrono format specifiers
///
/// # Returns
/// Generated filename with a `.png` extension
///
/// # Errors
/// [`ExportError::InvalidTemplate`] if the template contains an unknown or
/// incomplete format specifier.
pub fn generate_filename(template: &str) -> Result<String, ExportError> {
    let invalid = || ExportError::InvalidTemplate(template.to_string());
    let items: Vec<Item<'_>> = StrftimeItems::new(template).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return Err(invalid());
    }

    let mut name = String::new();
    write!(name, "{}", Local::now().format_with_items(items.iter()))
        .map_err(|_| invalid())?;
    name.push_str(".png");
    Ok(name)
}

/// Ensure the export directory exists, creating it if necessary.
///
/// # Returns
/// The canonicalized path to the directory
pub fn ensure_directory_exists(directory: &Path) -> Result<PathBuf, ExportError> {
    if !directory.exists() {
        log::info!("Creating export directory: {}", directory.display());
        fs::create_dir_all(directory)?;
    }

    let canonical = directory
        .canonicalize()
        .unwrap_or_else(|_| directory.to_path_buf());

    Ok(canonical)
}

/// Expand tilde (~) in path strings.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}
