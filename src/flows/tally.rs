//! Tally flow - the full pipeline
//!
//! Steps:
//! 1. Load stop words (missing list means no filtering)
//! 2. Count the content words (missing content ends the run)
//! 3. Rank and print the top N

use anyhow::{Context, Result};
use std::io::Write;
use tracing::error;

use crate::core::error::TallyError;
use crate::core::model::Load;
use crate::core::options::TallyOptions;
use crate::flows::count::count_words;
use crate::flows::rank::print_ranking;
use crate::flows::stopwords::load_stop_words;

/// How a tally run ended
#[derive(Debug)]
pub enum Outcome {
    /// The listing was written
    Printed { rows: usize },
    /// The content could not be located; nothing was written
    Terminated(TallyError),
}

/// Run the pipeline, writing the listing to `writer`
pub fn run_tally<W: Write>(options: &TallyOptions, writer: W) -> Result<Outcome> {
    let stop_words = load_stop_words(options).context("Failed to load common words")?;

    let counts = match count_words(options, &stop_words).context("Failed to count words")? {
        Load::Loaded(counts) => counts,
        Load::Missing(err) if err.is_recoverable() => {
            error!("Process Terminated with error");
            return Ok(Outcome::Terminated(err));
        }
        Load::Missing(err) => return Err(err).context("Failed to count words"),
    };

    let rows = print_ranking(writer, &counts, options)?;
    Ok(Outcome::Printed { rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    fn options_in(dir: &Path) -> TallyOptions {
        TallyOptions {
            input_dir: dir.to_path_buf(),
            ..TallyOptions::default()
        }
    }

    fn run(options: &TallyOptions) -> (Outcome, String) {
        let mut out = Vec::new();
        let outcome = run_tally(options, &mut out).unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_run_filters_and_ranks() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("common.txt"), "the\nand\n").unwrap();
        fs::write(
            temp.path().join("content.txt"),
            "the cat and the hat and a cat",
        )
        .unwrap();

        let options = TallyOptions {
            content_file: Some("content.txt".to_string()),
            common_words_file: Some("common.txt".to_string()),
            max_words: Some("10".to_string()),
            ..options_in(temp.path())
        };
        let (outcome, stdout) = run(&options);

        assert!(matches!(outcome, Outcome::Printed { rows: 3 }));
        let lines: Vec<&str> = stdout.lines().collect();
        assert_eq!(lines[0], "Count     Word");
        assert_eq!(lines[1], "2         cat");
        let mut rest = lines[2..].to_vec();
        rest.sort();
        assert_eq!(rest, vec!["1         a", "1         hat"]);
    }

    #[test]
    fn test_run_without_content_prints_nothing() {
        let temp = tempdir().unwrap();
        let (outcome, stdout) = run(&options_in(temp.path()));
        assert!(matches!(
            outcome,
            Outcome::Terminated(TallyError::MissingOption { .. })
        ));
        assert!(stdout.is_empty());
    }

    #[test]
    fn test_run_missing_content_file_prints_nothing() {
        let temp = tempdir().unwrap();
        let options = TallyOptions {
            content_file: Some("absent.txt".to_string()),
            ..options_in(temp.path())
        };
        let (outcome, stdout) = run(&options);
        assert!(matches!(
            outcome,
            Outcome::Terminated(TallyError::FileNotFound { .. })
        ));
        assert!(stdout.is_empty());
    }

    #[test]
    fn test_run_empty_content_prints_header() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("common.txt"), "the\n").unwrap();
        fs::write(temp.path().join("empty.txt"), "").unwrap();
        let options = TallyOptions {
            content_file: Some("empty.txt".to_string()),
            common_words_file: Some("common.txt".to_string()),
            ..options_in(temp.path())
        };
        let (outcome, stdout) = run(&options);
        assert!(matches!(outcome, Outcome::Printed { rows: 0 }));
        assert_eq!(stdout, "Count     Word\n");
    }

    #[test]
    fn test_run_malformed_limit_is_fatal() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("content.txt"), "a b").unwrap();
        let options = TallyOptions {
            content_file: Some("content.txt".to_string()),
            max_words: Some("ten".to_string()),
            ..options_in(temp.path())
        };
        let mut out = Vec::new();
        let err = run_tally(&options, &mut out).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<TallyError>(),
            Some(TallyError::MalformedLimit { .. })
        ));
    }
}
