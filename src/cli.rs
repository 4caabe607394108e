//! CLI module - Command-line interface definitions and handlers

use anyhow::Result;
use clap::Parser;
use std::ffi::OsString;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::core::options::TallyOptions;
use crate::core::paths::DEFAULT_INPUT_DIR;
use crate::flows::tally::{run_tally, Outcome};

/// Exit status when `--strict` is set and the content stage was skipped
const STRICT_EXIT_CODE: u8 = 2;

/// topwords - count the words of a text file and print the most frequent ones.
#[derive(Parser, Debug)]
#[command(name = "topwords")]
#[command(
    author,
    version,
    about,
    long_about = r#"topwords reads a text file, counts every distinct word (ignoring a list of
common words) and prints the most frequent words, highest count first.

Words are split on whitespace, lower-cased, and stripped of the characters
- + . ^ : , ` * ? wherever they occur. All other punctuation is kept.

The table goes to stdout; diagnostics go to stderr. Unknown options are ignored.

Examples:
    topwords --content.file.name=book.txt --common.words.file.name=common.txt
    topwords --content.file.name=book.txt --max.number.words=20 --input.dir=corpus
    topwords --content.file.name=book.txt --format=jsonl
"#
)]
pub struct Cli {
    /// Text file to analyze, relative to the input directory.
    #[arg(long = "content.file.name", value_name = "NAME")]
    pub content_file: Vec<String>,

    /// Common-word list (one word per line), relative to the input directory.
    #[arg(
        long = "common.words.file.name",
        value_name = "NAME",
        long_help = "File listing words to ignore, one per line, relative to the input directory.\n\n\
If omitted or missing, no words are ignored."
    )]
    pub common_words_file: Vec<String>,

    /// Maximum number of words to print (default 9999).
    #[arg(
        long = "max.number.words",
        value_name = "N",
        allow_hyphen_values = true,
        long_help = "Maximum number of rows to print.\n\n\
Defaults to 9999 when omitted. A value that is not a non-negative integer is an error."
    )]
    pub max_words: Vec<String>,

    /// Directory the file names are resolved against.
    #[arg(
        long = "input.dir",
        env = "TOPWORDS_INPUT_DIR",
        default_value = DEFAULT_INPUT_DIR,
        value_name = "DIR"
    )]
    pub input_dir: PathBuf,

    /// Output format (table/jsonl/json).
    #[arg(
        long,
        default_value = "table",
        value_parser = ["table", "jsonl", "json"],
        value_name = "FORMAT",
        long_help = "Select the output format for the ranked listing.\n\n\
Supported values:\n\
- table (default): `Count     Word` header, then one padded row per word\n\
- jsonl: one {\"count\",\"word\"} object per line\n\
- json: a single JSON array"
    )]
    pub format: String,

    /// Exit with status 2 when the content file is not given or not found.
    #[arg(long)]
    pub strict: bool,

    /// Quiet mode (errors only).
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (debug diagnostics).
    #[arg(short, long)]
    pub verbose: bool,
}

/// Options taking a value, either as `--opt=value` or `--opt value`
const VALUE_OPTIONS: &[&str] = &[
    "--content.file.name",
    "--common.words.file.name",
    "--max.number.words",
    "--input.dir",
    "--format",
];

/// Options that stand alone
const FLAG_OPTIONS: &[&str] = &[
    "--strict",
    "--quiet",
    "-q",
    "--verbose",
    "-v",
    "--help",
    "-h",
    "--version",
    "-V",
];

/// Split argv into the arguments clap should see and the ignored ones
///
/// The program name is always kept.
pub fn retain_known_args<I, T>(args: I) -> (Vec<OsString>, Vec<String>)
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::into);
    let mut kept: Vec<OsString> = args.next().into_iter().collect();
    let mut ignored = Vec::new();

    while let Some(arg) = args.next() {
        let text = arg.to_string_lossy().into_owned();
        let name = text.split_once('=').map_or(text.as_str(), |(name, _)| name);

        if VALUE_OPTIONS.contains(&name) {
            let inline_value = name.len() < text.len();
            kept.push(arg);
            if !inline_value {
                if let Some(value) = args.next() {
                    kept.push(value);
                }
            }
        } else if FLAG_OPTIONS.contains(&text.as_str()) {
            kept.push(arg);
        } else {
            ignored.push(text);
        }
    }

    (kept, ignored)
}

impl Cli {
    /// Parse the process arguments, dropping unknown options first
    pub fn parse_lenient() -> (Self, Vec<String>) {
        let (kept, ignored) = retain_known_args(std::env::args_os());
        (Self::parse_from(kept), ignored)
    }

    /// Build the tally options; the first value of a repeated option wins
    pub fn tally_options(&self) -> TallyOptions {
        TallyOptions {
            content_file: self.content_file.first().cloned(),
            common_words_file: self.common_words_file.first().cloned(),
            max_words: self.max_words.first().cloned(),
            input_dir: self.input_dir.clone(),
            format: self.format.parse().unwrap_or_default(),
            strict: self.strict,
        }
    }
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli, ignored: &[String]) -> Result<ExitCode> {
    for arg in ignored {
        debug!(arg = %arg, "ignoring unknown argument");
    }

    let options = cli.tally_options();
    let stdout = io::stdout();
    let outcome = run_tally(&options, BufWriter::new(stdout.lock()))?;

    match outcome {
        Outcome::Printed { rows } => {
            debug!(rows, "tally complete");
            Ok(ExitCode::SUCCESS)
        }
        Outcome::Terminated(err) if options.strict => {
            debug!(code = err.code(), "strict mode, exiting with failure");
            Ok(ExitCode::from(STRICT_EXIT_CODE))
        }
        Outcome::Terminated(_) => Ok(ExitCode::SUCCESS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::render::OutputFormat;

    fn parse(args: &[&str]) -> Cli {
        let (kept, _) = retain_known_args(args.iter().copied());
        Cli::parse_from(kept)
    }

    #[test]
    fn test_retain_drops_unknown_options() {
        let (kept, ignored) = retain_known_args([
            "topwords",
            "--content.file.name=a.txt",
            "--spring.profiles.active=dev",
            "stray",
            "--strict",
        ]);
        assert_eq!(
            kept,
            vec![
                OsString::from("topwords"),
                OsString::from("--content.file.name=a.txt"),
                OsString::from("--strict"),
            ]
        );
        assert_eq!(ignored, vec!["--spring.profiles.active=dev", "stray"]);
    }

    #[test]
    fn test_retain_keeps_separate_value() {
        let (kept, ignored) =
            retain_known_args(["topwords", "--max.number.words", "5", "--format", "json"]);
        assert_eq!(kept.len(), 5);
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_parse_dotted_options() {
        let cli = parse(&[
            "topwords",
            "--content.file.name=book.txt",
            "--common.words.file.name=common.txt",
            "--max.number.words=3",
        ]);
        let options = cli.tally_options();
        assert_eq!(options.content_file.as_deref(), Some("book.txt"));
        assert_eq!(options.common_words_file.as_deref(), Some("common.txt"));
        assert_eq!(options.max_words.as_deref(), Some("3"));
        assert_eq!(options.format, OutputFormat::Table);
        assert!(!options.strict);
    }

    #[test]
    fn test_parse_absent_options() {
        let options = parse(&["topwords"]).tally_options();
        assert!(options.content_file.is_none());
        assert!(options.common_words_file.is_none());
        assert!(options.max_words.is_none());
    }

    #[test]
    fn test_parse_first_value_wins() {
        let options = parse(&[
            "topwords",
            "--content.file.name=first.txt",
            "--content.file.name=second.txt",
        ])
        .tally_options();
        assert_eq!(options.content_file.as_deref(), Some("first.txt"));
    }

    #[test]
    fn test_parse_negative_limit_is_kept_raw() {
        let options = parse(&["topwords", "--max.number.words", "-4"]).tally_options();
        assert_eq!(options.max_words.as_deref(), Some("-4"));
    }

    #[test]
    fn test_parse_format_and_input_dir() {
        let cli = parse(&["topwords", "--format=jsonl", "--input.dir=/tmp/corpus"]);
        let options = cli.tally_options();
        assert_eq!(options.format, OutputFormat::Jsonl);
        assert_eq!(options.input_dir, PathBuf::from("/tmp/corpus"));
    }
}
