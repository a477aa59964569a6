use csv::{ByteRecord, ByteRecordsIntoIter, ReaderBuilder};
use encoding::{DecoderTrap, EncodingRef};
use std::fs::File;
use std::path::Path;

use crate::{
    error::{Error, Result, RowResult},
    Headers, Row, RowStream,
};

const BOM: char = '\u{feff}';

fn decode(data: &ByteRecord, encoding: EncodingRef) -> Row {
    let mut row = Row::with_capacity(data.as_slice().len(), data.len());

    for item in data.iter() {
        match encoding.decode(item, DecoderTrap::Replace) {
            Ok(field) => row.push_field(&field),
            Err(_) => row.push_field(&String::from_utf8_lossy(item)),
        }
    }

    row
}

fn strip_bom(row: Row) -> Row {
    match row.get(0) {
        Some(first) if first.starts_with(BOM) => {
            let mut stripped = Row::with_capacity(row.as_slice().len(), row.len());

            for (i, field) in row.iter().enumerate() {
                if i == 0 {
                    stripped.push_field(field.trim_start_matches(BOM));
                } else {
                    stripped.push_field(field);
                }
            }

            stripped
        }
        _ => row,
    }
}

/// An opened source file with its decoded header row.
pub struct ReaderSource {
    records: ByteRecordsIntoIter<File>,
    headers: Headers,
    encoding: EncodingRef,
}

impl ReaderSource {
    pub fn from_path<P: AsRef<Path>>(path: P, encoding: EncodingRef) -> Result<ReaderSource> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::io(path, e))?;
        let mut reader = ReaderBuilder::new().from_reader(file);

        let header_row = strip_bom(decode(reader.byte_headers()?, encoding));

        Ok(ReaderSource {
            records: reader.into_byte_records(),
            headers: Headers::from_row(header_row),
            encoding,
        })
    }
}

/// The records of one source file, in file order.
///
/// The first record after the header is a second, descriptive header row in
/// the registry exports. It is always dropped, whatever it contains.
pub struct InputStream {
    source: ReaderSource,
}

impl InputStream {
    pub fn new(source: ReaderSource) -> InputStream {
        InputStream { source }
    }

    pub fn from_path<P: AsRef<Path>>(path: P, encoding: EncodingRef) -> Result<InputStream> {
        Ok(InputStream::new(ReaderSource::from_path(path, encoding)?))
    }
}

pub struct IntoIter {
    records: ByteRecordsIntoIter<File>,
    encoding: EncodingRef,
    skipped_secondary: bool,
}

impl Iterator for IntoIter {
    type Item = RowResult;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.skipped_secondary {
            self.skipped_secondary = true;

            if let Some(Err(e)) = self.records.next() {
                return Some(Err(Error::Csv(e)));
            }
        }

        let encoding = self.encoding;

        self.records
            .next()
            .map(|record| -> RowResult { Ok(decode(&record?, encoding)) })
    }
}

impl IntoIterator for InputStream {
    type Item = RowResult;

    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            records: self.source.records,
            encoding: self.source.encoding,
            skipped_secondary: false,
        }
    }
}

impl RowStream for InputStream {
    fn headers(&self) -> &Headers {
        &self.source.headers
    }
}
