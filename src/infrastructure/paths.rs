//! Sandbox path handling.

use crate::domain::{RentalError, Result};
use std::path::PathBuf;

/// Mount point of the host home directory inside the plugin sandbox.
const HOST_ROOT: &str = "/host";

/// Directory holding the trace file.
///
/// ```
/// use rentalizer::infrastructure::get_data_dir;
///
/// assert_eq!(
///     get_data_dir().to_str(),
///     Some("/host/.local/share/zellij/rentalizer")
/// );
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from(HOST_ROOT)
        .join(".local/share/zellij")
        .join("rentalizer")
}

/// Maps `~` to the sandbox's `/host` mount.
///
/// ```
/// use rentalizer::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/dark.toml"), "/host/themes/dark.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/etc/catalog.toml"), "/etc/catalog.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    match path.strip_prefix('~') {
        Some("") => HOST_ROOT.to_string(),
        Some(rest) if rest.starts_with('/') => format!("{HOST_ROOT}{rest}"),
        _ => path.to_string(),
    }
}

/// Reads a user-supplied file after tilde expansion.
///
/// # Errors
///
/// Returns [`RentalError::Io`] when the file cannot be read.
pub fn read_host_file(path: &str) -> Result<String> {
    let expanded = expand_tilde(path);
    Ok(std::fs::read_to_string(expanded)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilde_only_expands_as_home_prefix() {
        assert_eq!(expand_tilde("~user/file"), "~user/file");
        assert_eq!(expand_tilde("relative/~"), "relative/~");
    }

    #[test]
    fn read_host_file_reads_absolute_paths() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.toml");
        std::fs::write(&path, "cars = []").unwrap();

        let text = read_host_file(path.to_str().unwrap()).unwrap();
        assert_eq!(text, "cars = []");
    }

    #[test]
    fn read_host_file_reports_missing_files() {
        let err = read_host_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, RentalError::Io(_)));
    }
}
