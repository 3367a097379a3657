use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::FixError;

/// Content of a file read into memory
#[derive(Debug, Clone)]
pub struct FileContent {
    /// Path the file was read from
    pub path: String,
    /// File content as valid UTF-8, line endings normalized to `\n`
    pub content: String,
    /// BLAKE3 hash of the bytes on disk (hex-encoded)
    pub checksum: String,
}

/// Hex-encoded BLAKE3 hash of `content`
pub fn checksum(content: &str) -> String {
    blake3::hash(content.as_bytes()).to_hex().to_string()
}

/// Turn `\r\n` and lone `\r` line endings into `\n`
pub fn normalize_newlines(content: &str) -> String {
    if !content.contains('\r') {
        return content.to_string();
    }
    content.replace("\r\n", "\n").replace('\r', "\n")
}

/// Read a file from disk with UTF-8 validation
///
/// Line endings are normalized to `\n`; the checksum covers the raw file.
///
/// # Arguments
/// * `path` - Path to the file to read
///
/// # Returns
/// * `Ok(FileContent)` - File content with metadata
/// * `Err(FixError)` - File not found, I/O error, or invalid UTF-8
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<FileContent, FixError> {
    let path_ref = path.as_ref();
    let path_str = path_ref.display().to_string();

    if !path_ref.exists() {
        return Err(FixError::NotFound { path: path_str });
    }

    let bytes = fs::read(path_ref).map_err(|source| FixError::Read {
        path: path_str.clone(),
        source,
    })?;

    let raw = String::from_utf8(bytes)
        .map_err(|_| FixError::InvalidUtf8 { path: path_str.clone() })?;

    let checksum = checksum(&raw);
    let content = normalize_newlines(&raw);
    debug!(path = %path_str, len = content.len(), %checksum, "read source document");

    Ok(FileContent {
        path: path_str,
        content,
        checksum,
    })
}

/// Write `content` to `path`, creating or truncating it
///
/// Returns the checksum of what was written.
pub fn write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<String, FixError> {
    let path_ref = path.as_ref();

    fs::write(path_ref, content.as_bytes()).map_err(|source| FixError::Write {
        path: path_ref.display().to_string(),
        source,
    })?;

    let checksum = checksum(content);
    debug!(path = %path_ref.display(), len = content.len(), %checksum, "wrote output document");
    Ok(checksum)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_read_file_valid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("valid.tsx");
        let content = "const a = 1;\nconst b = 2;\n";
        fs::write(&file_path, content).unwrap();

        let file_content = read_file(&file_path).unwrap();

        assert_eq!(file_content.content, content);
        assert_eq!(file_content.path, file_path.display().to_string());
        assert_eq!(file_content.checksum, checksum(content));
        assert!(file_content.checksum.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_read_file_normalizes_line_endings() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("mixed.tsx");
        let raw = "a\r\nb\rc\n";
        fs::write(&file_path, raw).unwrap();

        let file_content = read_file(&file_path).unwrap();

        assert_eq!(file_content.content, "a\nb\nc\n");
        assert_eq!(file_content.checksum, checksum(raw));
    }

    #[test]
    fn test_normalize_newlines() {
        assert_eq!(normalize_newlines("x\r\n\r\ny"), "x\n\ny");
        assert_eq!(normalize_newlines("\r\r\n"), "\n\n");
        assert_eq!(normalize_newlines("plain\n"), "plain\n");
    }

    #[test]
    fn test_read_file_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("invalid.tsx");
        fs::write(&file_path, [0xFF, 0xFE, 0xFD]).unwrap();

        match read_file(&file_path) {
            Err(FixError::InvalidUtf8 { path }) => {
                assert_eq!(path, file_path.display().to_string());
            }
            other => panic!("Expected FixError::InvalidUtf8, got {:?}", other),
        }
    }

    #[test]
    fn test_read_file_not_found() {
        let file_path = PathBuf::from("/nonexistent/path/that/does/not/exist.tsx");

        match read_file(&file_path) {
            Err(FixError::NotFound { path }) => assert!(path.contains("nonexistent")),
            other => panic!("Expected FixError::NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_write_file_overwrites_existing() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("out.tsx");
        fs::write(&file_path, "stale content that is longer").unwrap();

        let written = write_file(&file_path, "fresh").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "fresh");
        assert_eq!(written, checksum("fresh"));
    }

    #[test]
    fn test_write_file_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("missing").join("out.tsx");

        match write_file(&file_path, "x") {
            Err(FixError::Write { path, .. }) => assert!(path.ends_with("out.tsx")),
            other => panic!("Expected FixError::Write, got {:?}", other),
        }
    }
}
