// Emitter: turns delimited segment records into INSERT statements and frames
// them in a transaction block. This is the only place with row-level decisions.

use crate::error::TransformError;
use crate::parser::Segment;
use csv::StringRecord;
use std::io::{self, Write};
use tracing::debug;

const TABLE: &str = "transcriptions";

/// Builds one INSERT per valid data record, in input order.
///
/// The first record is always discarded as the header. Short rows and rows with
/// an empty start, end or text are skipped silently. A read or decode error from
/// `records` aborts the whole transform and nothing is returned.
pub fn transform<I>(records: I, content_id: &str) -> Result<Vec<String>, TransformError>
where
    I: IntoIterator<Item = Result<StringRecord, csv::Error>>,
{
    let mut records = records.into_iter();
    match records.next() {
        Some(header) => {
            header?;
        }
        None => return Err(TransformError::MissingHeader),
    }

    let mut statements = Vec::new();
    for record in records {
        let record = record?;
        if let Some(segment) = Segment::from_record(&record) {
            statements.push(insert_statement(content_id, &segment));
        }
    }

    debug!(statements = statements.len(), "transform complete");
    Ok(statements)
}

// Double every single quote so the text can sit inside a '...' literal, then trim.
pub fn escape_text(text: &str) -> String {
    text.replace('\'', "''").trim().to_string()
}

// content_id, start and end go in verbatim; only the text is escaped.
pub fn insert_statement(content_id: &str, segment: &Segment<'_>) -> String {
    format!(
        "INSERT INTO {} (content_id, text, start_time, end_time) VALUES ('{}', '{}', {}, {});",
        TABLE,
        content_id,
        escape_text(segment.text),
        segment.start,
        segment.end
    )
}

// Write BEGIN;, one statement per line, COMMIT;.
pub fn write_transaction<W: Write>(out: &mut W, statements: &[String]) -> io::Result<()> {
    writeln!(out, "BEGIN;")?;
    for stmt in statements {
        writeln!(out, "{}", stmt)?;
    }
    writeln!(out, "COMMIT;")?;
    Ok(())
}
