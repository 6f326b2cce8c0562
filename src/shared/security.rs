use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum size of any file this tool reads (100 MB)
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Validates that a path exists and is a regular file (not a directory or symlink)
///
/// # Security
/// Uses `symlink_metadata()` so that the link itself is inspected, not its target.
///
/// # Arguments
/// * `path` - The path to validate
/// * `file_description` - Description of the file (e.g., "graph file", "markdown document")
///
/// # Errors
/// Returns an error if:
/// - The path doesn't exist
/// - The path is a symbolic link
/// - The path is not a regular file
/// - The file is larger than [`MAX_FILE_SIZE`]
pub fn validate_readable_file(path: &Path, file_description: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", file_description, e))?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
            path.display()
        );
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    validate_file_size(metadata.len(), path, MAX_FILE_SIZE)
}

/// Validates that a document may be written at `path`.
///
/// The parent directory must exist and an existing file must be a writable,
/// non-symlinked regular file. A missing file is fine; it will be created.
///
/// Targets are replaced by renaming a temporary file over them, which only
/// needs write access to the directory, so the file's own read-only flag is
/// checked here.
pub fn validate_write_target(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if parent != Path::new("") && !parent.is_dir() {
            anyhow::bail!("Parent directory does not exist: {}", parent.display());
        }
    }

    match fs::symlink_metadata(path) {
        Ok(metadata) if metadata.is_symlink() => anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, writing to symbolic links is not allowed.",
            path.display()
        ),
        Ok(metadata) if metadata.is_dir() => {
            anyhow::bail!("{} is a directory", path.display())
        }
        Ok(metadata) if metadata.permissions().readonly() => {
            anyhow::bail!("{} is read-only", path.display())
        }
        _ => Ok(()),
    }
}

/// Validates file size is within acceptable limits
///
/// # Errors
/// Returns an error if the file size exceeds the maximum
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            file_size,
            max_size
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_validate_readable_file_success() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("graph.json");
        fs::write(&file_path, "{}").unwrap();

        assert!(validate_readable_file(&file_path, "graph file").is_ok());
    }

    #[test]
    fn test_validate_readable_file_nonexistent() {
        let path = PathBuf::from("/nonexistent/graph.json");
        let result = validate_readable_file(&path, "graph file");
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to read graph file metadata"));
    }

    #[test]
    fn test_validate_readable_file_is_directory() {
        let temp_dir = TempDir::new().unwrap();
        let result = validate_readable_file(temp_dir.path(), "test directory");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not a regular file"));
    }

    #[cfg(unix)]
    #[test]
    fn test_validate_readable_file_rejects_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("real.md");
        let link = temp_dir.path().join("link.md");
        fs::write(&target, "content").unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let result = validate_readable_file(&link, "markdown document");
        assert!(result.unwrap_err().to_string().contains("symbolic link"));
    }

    #[test]
    fn test_validate_write_target_new_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("licenses.html");
        assert!(validate_write_target(&path).is_ok());
    }

    #[test]
    fn test_validate_write_target_missing_parent() {
        let path = PathBuf::from("/nonexistent/directory/licenses.html");
        let result = validate_write_target(&path);
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Parent directory does not exist"));
    }

    #[test]
    fn test_validate_write_target_relative_file_name() {
        // A bare file name has an empty parent, meaning the current directory
        assert!(validate_write_target(Path::new("licenses.html")).is_ok());
    }

    #[test]
    fn test_validate_write_target_read_only_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("README.md");
        fs::write(&path, "content").unwrap();
        let mut permissions = fs::metadata(&path).unwrap().permissions();
        permissions.set_readonly(true);
        fs::set_permissions(&path, permissions).unwrap();

        let result = validate_write_target(&path);
        assert!(result.unwrap_err().to_string().contains("is read-only"));
    }

    #[test]
    fn test_validate_file_size_within_limit() {
        let path = PathBuf::from("/test/file.txt");
        assert!(validate_file_size(1000, &path, MAX_FILE_SIZE).is_ok());
    }

    #[test]
    fn test_validate_file_size_exceeds_limit() {
        let path = PathBuf::from("/test/file.txt");
        let result = validate_file_size(MAX_FILE_SIZE + 1, &path, MAX_FILE_SIZE);
        assert!(result.unwrap_err().to_string().contains("too large"));
    }
}
