//! Drives a whole reformatting run: finds the inputs, projects every file and
//! hands the lines to the rotating writer.
use encoding::all::UTF_8;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::{
    error::{Error, Result},
    needs_escaping, output_line, ColumnMapping, FileSplitting, InputStream, OutputFile,
    RotatingWriter, RowStream,
};

pub const DEFAULT_INFOLDER: &str = "epc";
pub const DEFAULT_OUTFILE: &str = "epc.csv";
pub const DEFAULT_MAX_ROWS: usize = 500_000;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub infile: Option<PathBuf>,
    pub infolder: Option<PathBuf>,
    pub outfile: PathBuf,
    pub splitting: FileSplitting,
}

impl Config {
    /// Fills in the defaults: with no input at all the `epc` folder is read;
    /// a lone input file is rewritten in place unless an output is given.
    /// `max_rows == 0` disables splitting.
    pub fn new(
        infile: Option<PathBuf>,
        infolder: Option<PathBuf>,
        outfile: Option<PathBuf>,
        max_rows: usize,
    ) -> Config {
        let infolder = match (&infile, infolder) {
            (None, None) => Some(PathBuf::from(DEFAULT_INFOLDER)),
            (_, folder) => folder,
        };

        let outfile = match (outfile, &infile, &infolder) {
            (Some(out), _, _) => out,
            (None, Some(infile), None) => infile.clone(),
            _ => PathBuf::from(DEFAULT_OUTFILE),
        };

        let splitting = match max_rows {
            0 => FileSplitting::NoSplit,
            n => FileSplitting::SplitAfterRows(n),
        };

        Config {
            infile,
            infolder,
            outfile,
            splitting,
        }
    }
}

/// What a successful run did.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub files_read: usize,
    pub rows_written: usize,
    pub outputs: Vec<OutputFile>,
}

fn folder_entries(folder: &Path) -> Result<Vec<PathBuf>> {
    let mut entries = Vec::new();

    for entry in fs::read_dir(folder).map_err(|e| Error::io(folder, e))? {
        let path = entry.map_err(|e| Error::io(folder, e))?.path();

        if path.is_file() {
            entries.push(path);
        }
    }

    entries.sort();

    Ok(entries)
}

/// The input file, if any, followed by every file of the input folder sorted
/// by name. A folder entry that is the input file itself is read only once.
pub fn resolve_inputs(config: &Config) -> Result<Vec<PathBuf>> {
    let mut inputs: Vec<PathBuf> = config.infile.iter().cloned().collect();

    if let Some(ref folder) = config.infolder {
        let infile = config
            .infile
            .as_ref()
            .and_then(|path| fs::canonicalize(path).ok());

        for entry in folder_entries(folder)? {
            match (&infile, fs::canonicalize(&entry).ok()) {
                (Some(infile), Some(ref canonical)) if infile == canonical => {}
                _ => inputs.push(entry),
            }
        }
    }

    if inputs.is_empty() {
        return Err(Error::NoInputs);
    }

    Ok(inputs)
}

/// Reads a whole source file and turns it into output lines. Nothing is
/// returned unless every record could be projected.
pub fn reformat_file(path: &Path, mapping: &ColumnMapping) -> Result<Vec<String>> {
    let stream = InputStream::from_path(path, UTF_8)?;
    let mut unescaped = 0;

    let lines = stream
        .project(mapping)
        .into_iter()
        .map(|result| {
            result.map(|row| {
                if row.iter().any(needs_escaping) {
                    unescaped += 1;
                }

                output_line(&row)
            })
        })
        .collect::<Result<Vec<_>>>()?;

    if unescaped > 0 {
        warn!(
            path = %path.display(),
            lines = unescaped,
            "values with quotes, commas or line breaks were written unescaped"
        );
    }

    Ok(lines)
}

pub fn run(config: &Config) -> Result<Summary> {
    run_with_mapping(config, &ColumnMapping::scottish_epc())
}

pub fn run_with_mapping(config: &Config, mapping: &ColumnMapping) -> Result<Summary> {
    let inputs = resolve_inputs(config)?;
    let mut writer = RotatingWriter::new(
        &config.outfile,
        mapping.destination_header_line(),
        config.splitting,
    );
    let mut rows_written = 0;

    for path in inputs.iter() {
        info!("start {} to {}", path.display(), config.outfile.display());

        let lines = reformat_file(path, mapping)?;
        writer.append(&lines)?;
        rows_written += lines.len();

        info!(rows = lines.len(), "finish {} to {}", path.display(), config.outfile.display());
    }

    Ok(Summary {
        files_read: inputs.len(),
        rows_written,
        outputs: writer.finish()?,
    })
}
