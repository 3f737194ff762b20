use super::Viewer;
use super::file;
use crate::canvas::CanvasError;
use std::ffi::OsString;
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Environment variables that point at a display server.
const DISPLAY_VARS: [&str; 2] = ["WAYLAND_DISPLAY", "DISPLAY"];

/// Opens images with the host's default viewer.
///
/// The PNG is written to a temporary file first and the viewer is pointed at
/// it; the file is left for the viewer to own. An explicit `command` replaces
/// the platform opener (`xdg-open`, `open` or `start`).
///
/// If the viewer cannot be launched the temporary file is removed again.
#[derive(Clone)]
pub struct SystemViewer {
    command: Option<String>,
    temp_dir: Option<PathBuf>,
    env_lookup: fn(&str) -> Option<OsString>,
}

impl Default for SystemViewer {
    fn default() -> Self {
        Self {
            command: None,
            temp_dir: None,
            env_lookup: process_env,
        }
    }
}

impl fmt::Debug for SystemViewer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SystemViewer")
            .field("command", &self.command)
            .field("temp_dir", &self.temp_dir)
            .finish_non_exhaustive()
    }
}

impl SystemViewer {
    /// Uses `command` (program plus arguments, whitespace separated) instead
    /// of the platform opener. Empty strings mean "platform default".
    pub fn with_command(command: Option<String>) -> Self {
        Self {
            command: command.filter(|c| !c.trim().is_empty()),
            ..Self::default()
        }
    }

    /// Replaces the environment lookup used for the display check.
    pub fn with_env_lookup(mut self, lookup: fn(&str) -> Option<OsString>) -> Self {
        self.env_lookup = lookup;
        self
    }

    /// Overrides where the temporary PNG is written.
    pub fn with_temp_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.temp_dir = Some(dir.into());
        self
    }

    fn write_temp_file(&self, png: &[u8]) -> Result<PathBuf, CanvasError> {
        let dir = self.temp_dir.clone().unwrap_or_else(std::env::temp_dir);
        let name = format!(
            "canvas-demo-{}-{}",
            std::process::id(),
            file::generate_filename("%Y%m%d%H%M%S%.3f")?
        );
        file::save_png(png, &dir.join(name))
    }

    fn launch(&self, path: &Path) -> Result<(), CanvasError> {
        match &self.command {
            Some(command) => launch_custom(command, path),
            None => launch_platform_opener(path),
        }
    }
}

impl Viewer for SystemViewer {
    fn show(&self, png: &[u8]) -> Result<(), CanvasError> {
        // Checked before anything touches the disk.
        if !display_available(self.env_lookup) {
            return Err(CanvasError::NoViewerAvailable(format!(
                "no display server ({} are unset)",
                DISPLAY_VARS.join(" and ")
            )));
        }

        let path = self.write_temp_file(png)?;
        log::info!("Opening {} in image viewer", path.display());

        if let Err(err) = self.launch(&path) {
            if let Err(rm_err) = fs::remove_file(&path) {
                log::warn!(
                    "Failed to remove temporary image {}: {}",
                    path.display(),
                    rm_err
                );
            }
            return Err(err);
        }
        Ok(())
    }
}

fn process_env(key: &str) -> Option<OsString> {
    std::env::var_os(key)
}

/// Returns whether the host can show a window.
///
/// macOS and Windows always have a desktop session for our purposes; other
/// Unix systems need `WAYLAND_DISPLAY` or `DISPLAY` to be set and non-empty.
/// `lookup` reads an environment variable.
pub fn display_available<F>(lookup: F) -> bool
where
    F: Fn(&str) -> Option<OsString>,
{
    if cfg!(any(target_os = "macos", target_os = "windows")) {
        return true;
    }
    DISPLAY_VARS
        .iter()
        .any(|key| lookup(key).is_some_and(|value| !value.is_empty()))
}

/// Program and leading arguments of the platform's "open this file" command.
fn platform_opener() -> (&'static str, &'static [&'static str]) {
    if cfg!(target_os = "macos") {
        ("open", &[])
    } else if cfg!(target_os = "windows") {
        ("cmd", &["/C", "start", ""])
    } else {
        ("xdg-open", &[])
    }
}

/// Runs the platform opener and waits for it; openers hand the file to the
/// real viewer and exit immediately.
fn launch_platform_opener(path: &Path) -> Result<(), CanvasError> {
    let (program, args) = platform_opener();

    let output = Command::new(program)
        .args(args)
        .arg(path)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .output()
        .map_err(|e| spawn_error(program, e))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(CanvasError::NoViewerAvailable(format!(
            "{} failed: {}",
            program,
            stderr.trim()
        )));
    }

    log::debug!("{} handed off {}", program, path.display());
    Ok(())
}

/// Spawns a user-configured viewer without waiting for its window to close.
fn launch_custom(command: &str, path: &Path) -> Result<(), CanvasError> {
    let mut parts = command.split_whitespace();
    let program = parts
        .next()
        .ok_or_else(|| CanvasError::NoViewerAvailable("viewer command is empty".to_string()))?;

    let child = Command::new(program)
        .args(parts)
        .arg(path)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| spawn_error(program, e))?;

    log::debug!("Spawned viewer {} (pid {})", program, child.id());
    Ok(())
}

fn spawn_error(program: &str, err: std::io::Error) -> CanvasError {
    match err.kind() {
        ErrorKind::NotFound => {
            CanvasError::NoViewerAvailable(format!("{} is not installed", program))
        }
        _ => CanvasError::NoViewerAvailable(format!("failed to launch {}: {}", program, err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<OsString> {
        let map: HashMap<String, OsString> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), OsString::from(v)))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    #[test]
    fn headless_environment_has_no_display() {
        assert!(!display_available(env_from(&[])));
        assert!(!display_available(env_from(&[("DISPLAY", "")])));
    }

    #[test]
    fn display_or_wayland_is_enough() {
        assert!(display_available(env_from(&[("DISPLAY", ":0")])));
        assert!(display_available(env_from(&[("WAYLAND_DISPLAY", "wayland-1")])));
    }

    #[test]
    fn blank_command_falls_back_to_platform_opener() {
        let viewer = SystemViewer::with_command(Some("   ".to_string()));
        assert!(viewer.command.is_none());
    }

    #[test]
    fn missing_custom_viewer_is_no_viewer_available() {
        let err = launch_custom(
            "definitely-not-an-image-viewer-7f3a",
            Path::new("/tmp/x.png"),
        )
        .unwrap_err();
        assert!(matches!(err, CanvasError::NoViewerAvailable(_)));
    }

    fn fake_display(key: &str) -> Option<OsString> {
        (key == "DISPLAY").then(|| OsString::from(":0"))
    }

    fn no_display(_key: &str) -> Option<OsString> {
        None
    }

    #[test]
    fn failed_launch_removes_temp_file() {
        let temp = TempDir::new().unwrap();
        let viewer =
            SystemViewer::with_command(Some("definitely-not-an-image-viewer-7f3a".to_string()))
                .with_temp_dir(temp.path())
                .with_env_lookup(fake_display);

        let err = viewer.show(b"png").unwrap_err();
        assert!(matches!(err, CanvasError::NoViewerAvailable(_)));
        assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 0);
    }

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    #[test]
    fn headless_show_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let viewer = SystemViewer::default()
            .with_temp_dir(temp.path())
            .with_env_lookup(no_display);

        let err = viewer.show(b"png").unwrap_err();
        assert!(matches!(err, CanvasError::NoViewerAvailable(_)));
        assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 0);
    }

    #[test]
    fn temp_file_lands_in_configured_dir() {
        let temp = TempDir::new().unwrap();
        let viewer = SystemViewer::default().with_temp_dir(temp.path());

        let path = viewer.write_temp_file(b"png").unwrap();
        assert!(path.starts_with(temp.path()));
        assert!(path.to_string_lossy().ends_with(".png"));
    }
}
