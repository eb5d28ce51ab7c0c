//! Legacy file discovery and decoding.
//!
//! Files are read whole, decoded as ISO-8859-1 and split into lines with the
//! terminator removed. Every byte maps to exactly one character, so decoding
//! cannot fail; only I/O can.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::SourceError;

/// Default extension of legacy input files.
pub const RFB_EXTENSION: &str = "rfb";

/// Decode ISO-8859-1 bytes.
pub fn decode_latin1(bytes: &[u8]) -> String {
    encoding_rs::mem::decode_latin1(bytes).into_owned()
}

/// Split text into lines, accepting `\r\n`, `\n` and a lone `\r` as
/// terminators. A trailing terminator does not produce an empty last line.
pub fn split_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        match rest.find(['\n', '\r']) {
            Some(pos) => {
                lines.push(rest[..pos].to_string());
                let terminator = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[pos + terminator..];
            }
            None => {
                lines.push(rest.to_string());
                break;
            }
        }
    }

    lines
}

/// Read and decode one legacy file into lines.
pub fn read_legacy_file(path: &Path) -> Result<Vec<String>, SourceError> {
    let bytes = fs::read(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(split_lines(&decode_latin1(&bytes)))
}

/// Regular files in `dir` with the given extension, sorted by file name.
pub fn files_with_extension(dir: &Path, extension: &str) -> Result<Vec<PathBuf>, SourceError> {
    if !dir.is_dir() {
        return Err(SourceError::NotADirectory(dir.to_path_buf()));
    }

    let read_dir = fs::read_dir(dir).map_err(|source| SourceError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut paths = Vec::new();
    for entry in read_dir {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(dir = %dir.display(), error = %e, "skipping unreadable directory entry");
                continue;
            }
        };
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == extension) {
            paths.push(path);
        }
    }

    paths.sort();
    debug!(dir = %dir.display(), extension, count = paths.len(), "found input files");
    Ok(paths)
}

/// Lazily reads every legacy file of a directory.
///
/// Yields `(path, lines)` pairs; a file that cannot be read yields its error
/// without stopping the iteration.
pub struct LegacyFiles {
    paths: std::vec::IntoIter<PathBuf>,
}

impl LegacyFiles {
    pub fn open(dir: &Path, extension: &str) -> Result<Self, SourceError> {
        let paths = files_with_extension(dir, extension)?;
        Ok(Self {
            paths: paths.into_iter(),
        })
    }
}

impl Iterator for LegacyFiles {
    type Item = (PathBuf, Result<Vec<String>, SourceError>);

    fn next(&mut self) -> Option<Self::Item> {
        let path = self.paths.next()?;
        let lines = read_legacy_file(&path);
        Some((path, lines))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.paths.size_hint()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_latin1_high_bytes() {
        assert_eq!(decode_latin1(b"D\xe9bito"), "Débito");
        assert_eq!(decode_latin1(b"Situa\xe7\xe3o"), "Situação");
        assert_eq!(decode_latin1(&[0x80, 0xff]), "\u{80}\u{ff}");
    }

    #[test]
    fn test_split_lines_terminators() {
        assert_eq!(split_lines("a\nb\r\nc\rd"), vec!["a", "b", "c", "d"]);
        assert_eq!(split_lines("a\n"), vec!["a"]);
        assert_eq!(split_lines("a\n\nb"), vec!["a", "", "b"]);
        assert_eq!(split_lines("\n"), vec![""]);
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn test_split_lines_keeps_inner_whitespace() {
        assert_eq!(split_lines("R10  x  \r\n"), vec!["R10  x  "]);
    }

    #[test]
    fn test_files_with_extension_sorted_and_filtered() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.rfb"), "R10").unwrap();
        fs::write(dir.path().join("a.rfb"), "R10").unwrap();
        fs::write(dir.path().join("c.txt"), "R10").unwrap();
        fs::create_dir(dir.path().join("d.rfb")).unwrap();

        let paths = files_with_extension(dir.path(), "rfb").unwrap();
        let names: Vec<_> = paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();

        assert_eq!(names, vec!["a.rfb", "b.rfb"]);
    }

    #[test]
    fn test_files_with_extension_rejects_missing_dir() {
        let err = files_with_extension(Path::new("/nonexistent/input"), "rfb").unwrap_err();
        assert!(matches!(err, SourceError::NotADirectory(_)));
    }

    #[test]
    fn test_legacy_files_reads_and_decodes() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("one.rfb"), b"R01\r\nR10 D\xe9bito\r\n").unwrap();

        let files: Vec<_> = LegacyFiles::open(dir.path(), RFB_EXTENSION).unwrap().collect();

        assert_eq!(files.len(), 1);
        let (path, lines) = &files[0];
        assert!(path.ends_with("one.rfb"));
        assert_eq!(lines.as_ref().unwrap(), &vec!["R01".to_string(), "R10 Débito".to_string()]);
    }
}
