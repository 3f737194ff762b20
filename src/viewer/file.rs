//! Writing encoded rasters to disk.

use crate::canvas::CanvasError;
use chrono::Local;
use chrono::format::{Item, StrftimeItems};
use std::fmt::Write as _;
use std::fs;
use std::io::{self, Write as _};
use std::path::{Path, PathBuf};

/// Where `--save` without an explicit path puts its file.
#[derive(Debug, Clone)]
pub struct FileSaveConfig {
    /// Directory to save images to.
    pub save_directory: PathBuf,
    /// Filename template (supports chrono format specifiers).
    pub filename_template: String,
}

impl Default for FileSaveConfig {
    fn default() -> Self {
        Self {
            save_directory: dirs::picture_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("canvas-demo"),
            filename_template: "canvas_%Y-%m-%d_%H%M%S".to_string(),
        }
    }
}

/// Whether every specifier in `template` is one chrono understands.
pub fn is_valid_template(template: &str) -> bool {
    !StrftimeItems::new(template).any(|item| matches!(item, Item::Error))
}

/// Generate a `.png` filename from a chrono template and the current time.
///
/// # Errors
/// `InvalidInput` if the template contains an unknown specifier.
pub fn generate_filename(template: &str) -> Result<String, CanvasError> {
    let invalid = || {
        CanvasError::Io(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("invalid filename template '{}'", template),
        ))
    };
    if !is_valid_template(template) {
        return Err(invalid());
    }

    let mut filename = String::new();
    write!(filename, "{}.png", Local::now().format(template)).map_err(|_| invalid())?;
    Ok(filename)
}

/// Ensure the save directory exists, creating it if necessary.
pub fn ensure_directory_exists(directory: &Path) -> Result<PathBuf, CanvasError> {
    if !directory.exists() {
        log::info!("Creating image directory: {}", directory.display());
        fs::create_dir_all(directory)?;
    }

    let canonical = directory
        .canonicalize()
        .unwrap_or_else(|_| directory.to_path_buf());

    Ok(canonical)
}

/// Write PNG bytes to `path`, creating parent directories.
///
/// On Unix the file is restricted to user read/write.
pub fn save_png(png: &[u8], path: &Path) -> Result<PathBuf, CanvasError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        ensure_directory_exists(parent)?;
    }

    log::info!("Saving image to: {} ({} bytes)", path.display(), png.len());

    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    let mut file = options.open(path)?;

    // `mode` only applies to newly created files.
    #[cfg(unix)]
    {
        use std::fs::Permissions;
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(Permissions::from_mode(0o600))?;
    }

    file.write_all(png)?;

    Ok(path.to_path_buf())
}

/// Write PNG bytes into the configured directory under a generated name.
pub fn save_to_directory(png: &[u8], config: &FileSaveConfig) -> Result<PathBuf, CanvasError> {
    let directory = ensure_directory_exists(&config.save_directory)?;
    let file_path = directory.join(generate_filename(&config.filename_template)?);
    save_png(png, &file_path)
}

/// Expand a leading `~/` to the home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}
