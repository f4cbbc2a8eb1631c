// Segment source: opens the transcription file and streams raw delimited records.
// The header is left in the stream; the transformer drops it positionally.

use crate::error::TransformError;
use csv::{ReaderBuilder, StringRecord, Trim};
use indicatif::ProgressBar;
use std::fs::File;
use std::io::{BufRead, BufReader, Chain, Cursor, Read};
use std::path::Path;
use tracing::debug;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

pub struct SegmentSource<R: Read> {
    reader: csv::Reader<Chain<Cursor<Vec<u8>>, BufReader<R>>>,
    // The first physical line was blank. csv skips blank lines, so it is
    // handed out as an empty record to keep it in the header position.
    blank_header: bool,
    bar: Option<ProgressBar>,
}

impl SegmentSource<Box<dyn Read>> {
    // Open a file on disk. The handle lives as long as the source and is
    // released when it is dropped, whether or not the transform succeeded.
    // If a progress bar is provided, it advances by bytes read.
    pub fn open(
        path: &Path,
        delimiter: u8,
        bar: Option<ProgressBar>,
    ) -> Result<Self, TransformError> {
        debug!(path = %path.display(), "opening segment source");
        let file = File::open(path).map_err(|source| TransformError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let inner: Box<dyn Read> = match &bar {
            Some(b) => Box::new(b.wrap_read(file)),
            None => Box::new(file),
        };
        let mut source = Self::from_reader(inner, delimiter)?;
        source.bar = bar;
        Ok(source)
    }
}

impl<R: Read> SegmentSource<R> {
    pub fn from_reader(rdr: R, delimiter: u8) -> Result<Self, TransformError> {
        let mut rdr = BufReader::new(rdr);
        let mut first = Vec::new();
        rdr.read_until(b'\n', &mut first)?;
        let blank_header = !first.is_empty() && is_blank_line(&first);
        if blank_header {
            first.clear();
        }

        let reader = ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(false)
            .flexible(true)
            .trim(Trim::None)
            .from_reader(Cursor::new(first).chain(rdr));
        Ok(Self {
            reader,
            blank_header,
            bar: None,
        })
    }

    pub fn records(&mut self) -> impl Iterator<Item = Result<StringRecord, csv::Error>> + '_ {
        let header = self
            .blank_header
            .then(|| Ok::<_, csv::Error>(StringRecord::new()));
        header.into_iter().chain(self.reader.records())
    }

    pub fn finish(self) {
        if let Some(b) = self.bar {
            b.finish_and_clear();
        }
    }
}

// Blank means nothing but an optional BOM and the line terminator.
fn is_blank_line(line: &[u8]) -> bool {
    let line = line.strip_prefix(UTF8_BOM).unwrap_or(line);
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    line.is_empty()
}
