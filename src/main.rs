// transcript2sql: read a transcription segment CSV and print a transactional
// batch of INSERT statements for one content id.

mod emitter;
mod error;
mod logger;
mod parser;
mod progress;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use error::TransformError;
use parser::SegmentSource;
use progress::ProgressManager;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;
use tracing::debug;

// Command-line flags and positional arguments.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Content id stamped on every row. Embedded in the SQL as-is.
    content_id: String,

    /// Transcription CSV (header row, then start_time,end_time,text).
    #[arg(short, long, default_value = "transcription_unsettling.csv")]
    input: PathBuf,

    /// Single ASCII field delimiter.
    #[arg(short, long, default_value = ",", value_parser = parse_delimiter)]
    delimiter: u8,

    /// Enable debug logging (disables the progress bar).
    #[arg(long)]
    debug: bool,

    /// Show a read progress bar on stderr.
    #[arg(long)]
    progress: bool,
}

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(_) => {
            // Usage errors go to stdout with exit code 1, before any processing.
            println!("{}", Args::command().render_usage());
            process::exit(1);
        }
    };

    logger::init(args.debug);
    debug!(content_id = %args.content_id, input = %args.input.display(), "starting");

    if !args.input.exists() {
        println!("Error: File not found: {}", args.input.display());
        process::exit(1);
    }

    if let Err(e) = run(&args) {
        eprintln!("Error processing file: {}", e);
        process::exit(1);
    }
}

// Every statement is built before stdout is touched, so a read error never
// leaves a half-written transaction block behind.
fn run(args: &Args) -> Result<(), TransformError> {
    let progress = ProgressManager::new(args.progress && !logger::is_debug());
    let bar = progress.new_file_bar(&args.input);

    let mut source = SegmentSource::open(&args.input, args.delimiter, bar)?;
    let statements = emitter::transform(source.records(), &args.content_id)?;
    source.finish();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    emitter::write_transaction(&mut out, &statements)?;
    out.flush()?;
    Ok(())
}

fn parse_delimiter(value: &str) -> Result<u8, String> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii() => Ok(c as u8),
        (Some('\\'), Some('t')) if value.len() == 2 => Ok(b'\t'),
        _ => Err(format!("delimiter must be a single ASCII character, got {:?}", value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delimiter_values() {
        assert_eq!(parse_delimiter(","), Ok(b','));
        assert_eq!(parse_delimiter(";"), Ok(b';'));
        assert_eq!(parse_delimiter("\\t"), Ok(b'\t'));
        assert!(parse_delimiter("").is_err());
        assert!(parse_delimiter(";;").is_err());
        assert!(parse_delimiter("é").is_err());
    }

    #[test]
    fn args_defaults() {
        let args = Args::try_parse_from(["transcript2sql", "abc123"]).unwrap();
        assert_eq!(args.content_id, "abc123");
        assert_eq!(args.input, PathBuf::from("transcription_unsettling.csv"));
        assert_eq!(args.delimiter, b',');
        assert!(!args.debug && !args.progress);
    }

    #[test]
    fn wrong_argument_count_is_rejected() {
        assert!(Args::try_parse_from(["transcript2sql"]).is_err());
        assert!(Args::try_parse_from(["transcript2sql", "a", "b"]).is_err());
    }

    #[test]
    fn clap_definition_is_consistent() {
        Args::command().debug_assert();
    }
}
