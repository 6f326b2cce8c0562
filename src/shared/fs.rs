use crate::shared::error::LicenseReportError;
use crate::shared::security::validate_write_target;
use crate::shared::Result;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Checks that `path` may be replaced, mapping failures into report errors
///
/// Symbolic links become [`LicenseReportError::SecurityError`]; a missing
/// parent, a directory or a read-only file become
/// [`LicenseReportError::FileWriteError`].
pub fn check_write_target(path: &Path) -> std::result::Result<(), LicenseReportError> {
    validate_write_target(path).map_err(|e| {
        let details = e.to_string();
        if details.starts_with("Security:") {
            LicenseReportError::SecurityError {
                path: path.to_path_buf(),
                reason: details,
                hint: "Point the target at a regular file instead of a symbolic link".to_string(),
            }
        } else {
            LicenseReportError::FileWriteError {
                path: path.to_path_buf(),
                details,
            }
        }
    })
}

/// Replaces `path` with `content` through a temporary file and a rename
///
/// The temporary file lives next to the target so the rename stays on one
/// filesystem. Existing permissions are carried over. Callers run
/// [`check_write_target`] first; the rename itself only needs write access
/// to the directory.
///
/// # Errors
/// Returns [`LicenseReportError::FileWriteError`] if any step fails; the
/// target is then left as it was.
pub fn write_atomically(path: &Path, content: &str) -> Result<()> {
    persist_via_temp_file(path, content).map_err(|e| {
        LicenseReportError::FileWriteError {
            path: path.to_path_buf(),
            details: e.to_string(),
        }
        .into()
    })
}

fn persist_via_temp_file(path: &Path, content: &str) -> Result<()> {
    let directory = match path.parent() {
        Some(parent) if parent != Path::new("") => parent,
        _ => Path::new("."),
    };

    let mut temp_file = NamedTempFile::new_in(directory)?;
    if let Ok(metadata) = fs::metadata(path) {
        fs::set_permissions(temp_file.path(), metadata.permissions())?;
    }
    temp_file.write_all(content.as_bytes())?;
    temp_file.as_file().sync_all()?;
    temp_file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_atomically_creates_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("graph.json");

        write_atomically(&path, "{}").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
    }

    #[test]
    fn test_write_atomically_leaves_no_temp_files() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("licenses.html");
        fs::write(&path, "old").unwrap();

        write_atomically(&path, "new").unwrap();

        let entries: Vec<_> = fs::read_dir(temp_dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_check_write_target_read_only_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("README.md");
        fs::write(&path, "keep").unwrap();
        let mut permissions = fs::metadata(&path).unwrap().permissions();
        permissions.set_readonly(true);
        fs::set_permissions(&path, permissions).unwrap();

        let err = check_write_target(&path).unwrap_err();

        assert!(matches!(err, LicenseReportError::FileWriteError { .. }));
        assert!(err.to_string().contains("read-only"));
    }

    #[cfg(unix)]
    #[test]
    fn test_check_write_target_symlink_is_security_error() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("real.json");
        let link = temp_dir.path().join("graph.json");
        fs::write(&target, "{}").unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let err = check_write_target(&link).unwrap_err();

        assert!(matches!(err, LicenseReportError::SecurityError { .. }));
    }
}
