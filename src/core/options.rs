//! Tally options
//!
//! Built once from the parsed command line. Each file option is optional so the
//! stages can report a missing value themselves.

use std::path::PathBuf;

use crate::core::paths::DEFAULT_INPUT_DIR;
use crate::core::render::OutputFormat;

/// Option naming the text to analyze
pub const CONTENT_FILE_ARG: &str = "content.file.name";

/// Option naming the stop-word list
pub const COMMON_WORDS_FILE_ARG: &str = "common.words.file.name";

/// Option limiting the number of rows printed
pub const MAX_WORDS_ARG: &str = "max.number.words";

/// Row limit used when `max.number.words` is absent
pub const DEFAULT_MAX_WORDS: usize = 9999;

#[derive(Debug, Clone)]
pub struct TallyOptions {
    /// Content file name, relative to `input_dir`
    pub content_file: Option<String>,
    /// Stop-word file name, relative to `input_dir`
    pub common_words_file: Option<String>,
    /// Raw row limit, parsed by the ranker
    pub max_words: Option<String>,
    /// Directory both file names are joined onto
    pub input_dir: PathBuf,
    pub format: OutputFormat,
    /// Exit non-zero when the content stage is skipped
    pub strict: bool,
}

impl Default for TallyOptions {
    fn default() -> Self {
        Self {
            content_file: None,
            common_words_file: None,
            max_words: None,
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            format: OutputFormat::default(),
            strict: false,
        }
    }
}
