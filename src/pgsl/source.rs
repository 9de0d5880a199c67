//! Source line reader
//!
//! Resolves a schema name to a file and reads it line by line. Reading is async
//! (tokio) so the only suspension point of tokenization is here; lexing between
//! lines is synchronous.
//!
//! Any line break convention is accepted: `\n`, `\r\n` and a bare `\r` all end
//! a line, and `\r\n` counts as a single break.

use crate::pgsl::error::PgslError;
use std::path::{Component, Path, PathBuf};
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Default extension for pgsl sources
pub const DEFAULT_EXTENSION: &str = "pgl";

const READ_CAPACITY: usize = 8 * 1024;

/// Resolve a schema identifier against the current directory.
///
/// The extension is optional on input: `users` and `users.pgl` both resolve to
/// `<cwd>/users.pgl`.
pub fn resolve_source_path(identifier: &str, extension: &str) -> Result<PathBuf, PgslError> {
    let cwd = std::env::current_dir().map_err(|err| PgslError::io(identifier, err))?;
    Ok(resolve_in(&cwd, identifier, extension))
}

/// Like [`resolve_source_path`], relative to `base` instead of the current directory.
///
/// The identifier always lands under `base`: a leading root or drive prefix is
/// dropped, so `/etc/users` resolves to `<base>/etc/users.pgl`.
pub fn resolve_in(base: &Path, identifier: &str, extension: &str) -> PathBuf {
    let suffix = format!(".{}", extension);
    let name = if identifier.ends_with(&suffix) {
        identifier.to_string()
    } else {
        format!("{}{}", identifier, suffix)
    };

    let mut path = base.to_path_buf();
    for component in Path::new(&name).components() {
        match component {
            Component::Normal(part) => path.push(part),
            Component::ParentDir => path.push(".."),
            Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
        }
    }
    path
}

/// Lazy, forward-only lines of a source file
pub struct SourceLines {
    path: PathBuf,
    reader: BufReader<File>,
    // The last line ended on `\r`; a `\n` right after it belongs to the same break
    after_cr: bool,
}

impl SourceLines {
    /// Open a source file. Fails if the path cannot be opened.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, PgslError> {
        Self::open_with_capacity(path, READ_CAPACITY).await
    }

    /// Open with an explicit read buffer size
    pub async fn open_with_capacity(
        path: impl AsRef<Path>,
        capacity: usize,
    ) -> Result<Self, PgslError> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path)
            .await
            .map_err(|err| PgslError::io(path.clone(), err))?;

        Ok(SourceLines {
            path,
            reader: BufReader::with_capacity(capacity, file),
            after_cr: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The next line without its line break, or `None` at end of file.
    ///
    /// Only one buffer's worth of input past the current line is held in memory.
    pub async fn next_line(&mut self) -> Result<Option<String>, PgslError> {
        let mut line = Vec::new();

        loop {
            let available = self
                .reader
                .fill_buf()
                .await
                .map_err(|err| PgslError::io(self.path.clone(), err))?;

            if available.is_empty() {
                if line.is_empty() {
                    return Ok(None);
                }
                return self.decode(line).map(Some);
            }

            if self.after_cr {
                self.after_cr = false;
                if available[0] == b'\n' {
                    self.reader.consume(1);
                    continue;
                }
            }

            match available.iter().position(|&b| b == b'\n' || b == b'\r') {
                Some(end) => {
                    let ended_on_cr = available[end] == b'\r';
                    line.extend_from_slice(&available[..end]);
                    self.reader.consume(end + 1);
                    self.after_cr = ended_on_cr;
                    return self.decode(line).map(Some);
                }
                None => {
                    let len = available.len();
                    line.extend_from_slice(available);
                    self.reader.consume(len);
                }
            }
        }
    }

    /// Read every remaining line
    pub async fn collect(mut self) -> Result<Vec<String>, PgslError> {
        let mut lines = Vec::new();
        while let Some(line) = self.next_line().await? {
            lines.push(line);
        }
        Ok(lines)
    }

    fn decode(&self, line: Vec<u8>) -> Result<String, PgslError> {
        String::from_utf8(line).map_err(|_| PgslError::InvalidEncoding {
            path: self.path.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_extension_is_appended() {
        let base = Path::new("/work");
        assert_eq!(
            resolve_in(base, "users", "pgl"),
            PathBuf::from("/work/users.pgl")
        );
        assert_eq!(
            resolve_in(base, "users.pgl", "pgl"),
            PathBuf::from("/work/users.pgl")
        );
        assert_eq!(
            resolve_in(base, "schema/users", "pgl"),
            PathBuf::from("/work/schema/users.pgl")
        );
    }

    #[test]
    fn test_other_extension_is_kept() {
        assert_eq!(
            resolve_in(Path::new("/work"), "users.txt", "pgl"),
            PathBuf::from("/work/users.txt.pgl")
        );
    }

    #[test]
    fn test_resolve_uses_current_dir() {
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(
            resolve_source_path("users", DEFAULT_EXTENSION).unwrap(),
            cwd.join("users.pgl")
        );
    }

    #[test]
    fn test_absolute_identifier_stays_under_base() {
        let base = Path::new("/work");
        assert_eq!(
            resolve_in(base, "/etc/users", "pgl"),
            PathBuf::from("/work/etc/users.pgl")
        );
        assert_eq!(
            resolve_in(base, "./schema/users.pgl", "pgl"),
            PathBuf::from("/work/schema/users.pgl")
        );
        assert_eq!(
            resolve_in(base, "../shared/users", "pgl"),
            PathBuf::from("/work/../shared/users.pgl")
        );
    }

    #[tokio::test]
    async fn test_reads_mixed_line_breaks() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"one\r\ntwo\rthree\n\nfour").unwrap();

        let lines = SourceLines::open(file.path()).await.unwrap().collect().await.unwrap();
        assert_eq!(lines, vec!["one", "two", "three", "", "four"]);
    }

    #[tokio::test]
    async fn test_crlf_split_across_reads() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"abc\r\nd\r\r\ne").unwrap();

        // "abc\r" fills the first read, its "\n" arrives with the next one
        let lines = SourceLines::open_with_capacity(file.path(), 4)
            .await
            .unwrap()
            .collect()
            .await
            .unwrap();
        assert_eq!(lines, vec!["abc", "d", "", "e"]);
    }

    #[tokio::test]
    async fn test_bare_cr_file_is_read_line_by_line() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let body: String = (0..1000).map(|i| format!("column_{} int\r", i)).collect();
        file.write_all(body.as_bytes()).unwrap();

        let mut lines = SourceLines::open_with_capacity(file.path(), 64).await.unwrap();
        assert_eq!(lines.next_line().await.unwrap(), Some("column_0 int".to_string()));
        assert_eq!(lines.next_line().await.unwrap(), Some("column_1 int".to_string()));

        // only the current buffer has been pulled from the file
        assert!(lines.reader.buffer().len() <= 64);
        assert_eq!(lines.collect().await.unwrap().len(), 998);
    }

    #[tokio::test]
    async fn test_trailing_break_adds_no_line() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"a\n\n").unwrap();

        let lines = SourceLines::open(file.path()).await.unwrap().collect().await.unwrap();
        assert_eq!(lines, vec!["a", ""]);
    }

    #[tokio::test]
    async fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = SourceLines::open(dir.path().join("missing.pgl")).await;
        let err = result.err().unwrap();
        assert_eq!(err.io_kind(), Some(std::io::ErrorKind::NotFound));
    }

    #[tokio::test]
    async fn test_invalid_utf8() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"ok\n\xff\xfe\n").unwrap();

        let mut lines = SourceLines::open(file.path()).await.unwrap();
        assert_eq!(lines.next_line().await.unwrap(), Some("ok".to_string()));
        assert!(matches!(
            lines.next_line().await,
            Err(PgslError::InvalidEncoding { .. })
        ));
    }
}
