use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::errors::TranscriptError;

/// Read a transcript file into memory, refusing files over `max_bytes`.
///
/// The size is checked on the open handle so the file can't be swapped
/// between the check and the read.
pub fn read_transcript_bytes(path: &Path, max_bytes: u64) -> Result<Vec<u8>, TranscriptError> {
    let io_err = |source: std::io::Error| TranscriptError::Io { path: path.to_path_buf(), source };

    let mut file = File::open(path).map_err(io_err)?;
    let size = file.metadata().map_err(io_err)?.len();
    if size > max_bytes {
        return Err(TranscriptError::TooLarge { size, limit: max_bytes });
    }

    let mut bytes = Vec::with_capacity(size as usize);
    // Guard against growth after the metadata call.
    file.by_ref().take(max_bytes.saturating_add(1)).read_to_end(&mut bytes).map_err(io_err)?;
    if bytes.len() as u64 > max_bytes {
        return Err(TranscriptError::TooLarge { size: bytes.len() as u64, limit: max_bytes });
    }

    Ok(bytes)
}

/// Display a path with the home directory shortened to `~`.
pub fn format_path_with_tilde(path: &Path) -> String {
    format_path_with_home(path, dirs::home_dir().as_deref())
}

fn format_path_with_home(path: &Path, home: Option<&Path>) -> String {
    match home.and_then(|home| path.strip_prefix(home).ok()) {
        Some(rest) if rest.as_os_str().is_empty() => "~".to_string(),
        Some(rest) => format!("~/{}", rest.display()),
        None => path.display().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::path::PathBuf;

    use tempfile::NamedTempFile;

    use super::*;

    fn create_test_file(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content).expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    #[test]
    fn test_read_transcript_bytes() {
        let file = create_test_file(b"1/2/24, 10:00 - Bob: hi");
        let bytes = read_transcript_bytes(file.path(), 1024).unwrap();
        assert_eq!(bytes, b"1/2/24, 10:00 - Bob: hi");
    }

    #[test]
    fn test_read_transcript_too_large() {
        let file = create_test_file(&[b'a'; 100]);
        let err = read_transcript_bytes(file.path(), 99).unwrap_err();
        assert!(matches!(err, TranscriptError::TooLarge { size: 100, limit: 99 }));
    }

    #[test]
    fn test_read_transcript_unbounded_limit() {
        let file = create_test_file(b"1/2/24, 10:00 - Bob: hi");
        let bytes = read_transcript_bytes(file.path(), u64::MAX).unwrap();
        assert_eq!(bytes, b"1/2/24, 10:00 - Bob: hi");
    }

    #[test]
    fn test_read_transcript_missing_file() {
        let err = read_transcript_bytes(Path::new("/nonexistent/chat.txt"), 1024).unwrap_err();
        assert!(matches!(err, TranscriptError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/chat.txt"));
    }

    #[test]
    fn test_format_path_with_home() {
        let home = PathBuf::from("/home/analyst");

        let path = PathBuf::from("/home/analyst/exports/chat.txt");
        assert_eq!(format_path_with_home(&path, Some(&home)), "~/exports/chat.txt");

        assert_eq!(format_path_with_home(&home, Some(&home)), "~");

        let outside = PathBuf::from("/opt/exports/chat.txt");
        assert_eq!(format_path_with_home(&outside, Some(&home)), "/opt/exports/chat.txt");
        assert_eq!(format_path_with_home(&path, None), "/home/analyst/exports/chat.txt");
    }
}
