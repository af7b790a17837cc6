//! Streaming wordlist candidate source

use super::{CandidateSource, Strategy};
use crate::error::{IoError, ValidationError};
use crate::{Error, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Emit a progress sample every N candidates
const PROGRESS_INTERVAL: u64 = 500;

/// Reads a newline-delimited wordlist one line at a time
///
/// The file is never loaded whole: memory use stays constant whether the
/// wordlist has ten lines or a hundred million. One non-empty line maps to
/// exactly one candidate; line terminators are stripped, empty lines are
/// skipped, and invalid UTF-8 byte sequences are tolerated rather than
/// aborting the run. The open file handle is exclusively owned.
#[derive(Debug)]
pub struct DictionaryStream {
    path: PathBuf,
    reader: BufReader<File>,
    buf: Vec<u8>,
    produced: u64,
    pending_progress: Option<String>,
}

impl DictionaryStream {
    /// Open a wordlist for sequential reading
    ///
    /// Fails before any candidate is produced when the path is empty,
    /// missing, or unreadable.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(Error::Validation(ValidationError::invalid_parameter(
                "wordlist_path",
                "must not be empty",
            )));
        }

        let file =
            File::open(path).map_err(|e| Error::Io(IoError::from_std(e).with_path(path)))?;

        Ok(Self {
            path: path.to_path_buf(),
            reader: BufReader::new(file),
            buf: Vec::with_capacity(128),
            produced: 0,
            pending_progress: None,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Candidates produced so far
    ///
    /// The total line count stays unknown until the whole file has been
    /// streamed, so callers should treat progress totals as unknown.
    pub fn lines_produced(&self) -> u64 {
        self.produced
    }
}

impl CandidateSource for DictionaryStream {
    fn next_candidate(&mut self) -> Result<Option<String>> {
        loop {
            self.buf.clear();
            let n = self
                .reader
                .read_until(b'\n', &mut self.buf)
                .map_err(|e| Error::Io(IoError::from_std(e).with_path(&self.path)))?;
            if n == 0 {
                return Ok(None);
            }

            let line = String::from_utf8_lossy(&self.buf);
            let candidate = line.trim_end_matches(['\n', '\r']);
            if candidate.is_empty() {
                continue;
            }

            let candidate = candidate.to_string();
            self.produced += 1;
            if self.produced % PROGRESS_INTERVAL == 0 {
                self.pending_progress = Some(candidate.clone());
            }
            return Ok(Some(candidate));
        }
    }

    fn progress_due(&mut self) -> Option<String> {
        self.pending_progress.take()
    }

    fn strategy(&self) -> Strategy {
        Strategy::Dictionary
    }
}
