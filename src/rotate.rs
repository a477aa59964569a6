//! Output files bounded by a row count.
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{Error, Result};

/// Defines how output files will be split
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FileSplitting {
    /// Everything goes to a single file
    NoSplit,

    /// A new file is started once the current one holds more than this many
    /// rows. Checked after each batch, so a file may end up well above it.
    SplitAfterRows(usize),
}

/// A file written by a [`RotatingWriter`] and the data lines it holds.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputFile {
    pub path: PathBuf,
    pub rows: usize,
}

struct OpenFile {
    index: usize,
    path: PathBuf,
    rows: usize,
    writer: BufWriter<File>,
}

fn write_line<W: Write>(writer: &mut W, line: &str) -> io::Result<()> {
    writer.write_all(b"\n")?;
    writer.write_all(line.as_bytes())
}

/// Path of the `index`th output file: the base path itself for the first
/// one, `<index>-<file name>` next to it for the rest.
pub fn rotated_path(base: &Path, index: usize) -> PathBuf {
    if index == 0 {
        return base.to_path_buf();
    }

    match base.file_name() {
        Some(name) => {
            let mut rotated = OsString::from(format!("{}-", index));
            rotated.push(name);

            base.with_file_name(rotated)
        }
        None => PathBuf::from(format!("{}-{}", index, base.display())),
    }
}

/// Writes lines to a sequence of output files, each starting with the same
/// header line.
///
/// Lines are separated by a single `\n` and the last one is not terminated.
/// The first file is created lazily, when the first batch arrives, so a
/// source file may be read completely before its own path gets truncated.
pub struct RotatingWriter {
    base: PathBuf,
    header: String,
    splitting: FileSplitting,
    current: Option<OpenFile>,
    written: Vec<OutputFile>,
}

impl RotatingWriter {
    pub fn new<P: Into<PathBuf>>(base: P, header: String, splitting: FileSplitting) -> RotatingWriter {
        RotatingWriter {
            base: base.into(),
            header,
            splitting,
            current: None,
            written: Vec::new(),
        }
    }

    fn create(&self, index: usize) -> Result<OpenFile> {
        let path = rotated_path(&self.base, index);

        if let Some(dirname) = path.parent() {
            if !dirname.as_os_str().is_empty() {
                fs::create_dir_all(dirname).map_err(|e| Error::io(dirname, e))?;
            }
        }

        let file = File::create(&path).map_err(|e| Error::io(&path, e))?;
        let mut writer = BufWriter::new(file);

        writer
            .write_all(self.header.as_bytes())
            .map_err(|e| Error::io(&path, e))?;

        info!(path = %path.display(), "opened output file");

        Ok(OpenFile {
            index,
            path,
            rows: 0,
            writer,
        })
    }

    fn close(&mut self) -> Result<()> {
        if let Some(mut file) = self.current.take() {
            file.writer.flush().map_err(|e| Error::io(&file.path, e))?;

            self.written.push(OutputFile {
                path: file.path,
                rows: file.rows,
            });
        }

        Ok(())
    }

    /// Appends a batch of lines to the current file, then moves on to a new
    /// file if the current one went over the threshold.
    pub fn append(&mut self, lines: &[String]) -> Result<()> {
        let file = match self.current.take() {
            Some(file) => file,
            None => self.create(0)?,
        };
        let file = self.current.insert(file);

        for line in lines {
            write_line(&mut file.writer, line).map_err(|e| Error::io(&file.path, e))?;
        }

        file.rows += lines.len();

        let next_index = file.index + 1;
        let over = match self.splitting {
            FileSplitting::NoSplit => false,
            FileSplitting::SplitAfterRows(max) => file.rows > max,
        };

        if over {
            debug!(rows = file.rows, next = next_index, "row threshold exceeded");

            self.close()?;
            self.current = Some(self.create(next_index)?);
        }

        Ok(())
    }

    /// Flushes everything and returns the files written, in order. A run
    /// that appended nothing still leaves a header-only first file.
    pub fn finish(mut self) -> Result<Vec<OutputFile>> {
        if self.current.is_none() && self.written.is_empty() {
            self.current = Some(self.create(0)?);
        }

        self.close()?;

        Ok(self.written)
    }
}
