//! Writing the server response to local storage.
use std::fs::OpenOptions;
use std::io::Write;
#[cfg(unix)]
use std::os::unix::fs::OpenOptionsExt;
use std::path::Path;

use quote_common::Result;

/// Permissions of a newly created output file: owner read/write, others read.
#[cfg(unix)]
const FILE_MODE: u32 = 0o644;

/// Write `body` to `path` verbatim, replacing any previous content.
pub fn save_response(path: &Path, body: &[u8]) -> Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    options.mode(FILE_MODE);

    let mut file = options.open(path)?;
    file.write_all(body)?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn overwrites_previous_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cotacao.txt");
        std::fs::write(&path, "a much longer previous quote body").unwrap();

        save_response(&path, "{\"Dólar\":\"5.42\"}".as_bytes()).unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), "{\"Dólar\":\"5.42\"}".as_bytes());
    }

    #[cfg(unix)]
    #[test]
    fn new_file_is_never_executable_or_group_writable() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let path = dir.path().join("cotacao.txt");
        save_response(&path, b"{}").unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode & 0o600, 0o600);
        assert_eq!(mode & !0o644, 0);
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("cotacao.txt");
        let err = save_response(&path, b"{}").unwrap_err();
        assert!(matches!(err, quote_common::QuoteError::Io(_)));
    }
}
