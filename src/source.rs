use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::{info, warn};

use crate::error::AnalysisError;

/// A pull-based stream of log lines.
///
/// `Ok(None)` marks the end of the stream. An `Err` means the stream broke
/// and the caller must not treat what it has seen so far as complete.
pub trait LineSource {
    fn next_line(&mut self) -> io::Result<Option<String>>;
}

impl<S: LineSource + ?Sized> LineSource for &mut S {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        (**self).next_line()
    }
}

/// Splits a buffered reader into lines.
///
/// `\n`, `\r\n` and a lone `\r` all end a line, and `\r\n` is always a single
/// boundary however the underlying reads are chunked. Only one line is
/// buffered at a time. Bytes are decoded lossily so one bad byte does not
/// abort a whole file.
#[derive(Debug)]
pub struct ReaderSource<R> {
    reader: R,
    buf: Vec<u8>,
    // Last line ended in `\r`; a `\n` at the start of the next read belongs to it.
    skip_lf: bool,
}

impl<R: BufRead> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            skip_lf: false,
        }
    }
}

impl<R: BufRead> LineSource for ReaderSource<R> {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        self.buf.clear();
        let mut terminated = false;

        loop {
            let available = match self.reader.fill_buf() {
                Ok(available) => available,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if available.is_empty() {
                break;
            }

            let mut start = 0;
            if self.skip_lf {
                self.skip_lf = false;
                if available[0] == b'\n' {
                    start = 1;
                }
            }

            match available[start..]
                .iter()
                .position(|&b| b == b'\n' || b == b'\r')
            {
                Some(offset) => {
                    let end = start + offset;
                    self.buf.extend_from_slice(&available[start..end]);
                    self.skip_lf = available[end] == b'\r';
                    self.reader.consume(end + 1);
                    terminated = true;
                    break;
                }
                None => {
                    self.buf.extend_from_slice(&available[start..]);
                    let used = available.len();
                    self.reader.consume(used);
                }
            }
        }

        if !terminated && self.buf.is_empty() {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&self.buf).into_owned()))
    }
}

/// Fails with [`AnalysisError::NotFound`] unless `path` is a readable file.
pub fn check_accessible(path: &Path) -> Result<(), AnalysisError> {
    let metadata = fs::metadata(path).map_err(|source| {
        warn!(action = "check", component = "log_file", path = ?path, error = %source, "Log file is not accessible");
        AnalysisError::NotFound {
            path: path.to_path_buf(),
            source,
        }
    })?;

    if metadata.is_dir() {
        warn!(action = "check", component = "log_file", path = ?path, "Log path is a directory");
        return Err(AnalysisError::NotFound {
            path: path.to_path_buf(),
            source: io::Error::other("path is a directory"),
        });
    }

    info!(action = "check", component = "log_file", path = ?path, size_bytes = metadata.len(), "Log file found");
    Ok(())
}

pub fn open_log(path: &Path) -> Result<ReaderSource<BufReader<File>>, AnalysisError> {
    check_accessible(path)?;
    let file = File::open(path).map_err(|source| AnalysisError::NotFound {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(ReaderSource::new(BufReader::new(file)))
}
