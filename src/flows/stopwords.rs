//! Stop-word loading
//!
//! One word per line. Each line is lower-cased and trimmed before insertion, so
//! a blank line contributes the empty string.

use std::io::BufRead;
use std::path::Path;

use tracing::{debug, debug_span, error};

use crate::core::error::TallyError;
use crate::core::file_reader::{locate_input, open_lines};
use crate::core::model::{Load, StopWordSet};
use crate::core::options::{TallyOptions, COMMON_WORDS_FILE_ARG};
use crate::core::tokenizer::trim_word;

/// Load the stop-word list named by `common.words.file.name`
///
/// A missing option or missing file is logged and yields an empty set, so
/// counting proceeds without filtering. Read failures are returned.
pub fn load_stop_words(options: &TallyOptions) -> Result<StopWordSet, TallyError> {
    let _span = debug_span!("pipeline_stage", stage = "stop_words").entered();

    let path = match locate_input(
        &options.input_dir,
        options.common_words_file.as_deref(),
        COMMON_WORDS_FILE_ARG,
    ) {
        Load::Loaded(path) => path,
        Load::Missing(err) => {
            error!(code = err.code(), "{}", err);
            return Ok(StopWordSet::new());
        }
    };

    let stop_words = read_stop_words(&path)?;
    debug!(path = %path.display(), count = stop_words.len(), "loaded stop words");
    Ok(stop_words)
}

fn read_stop_words(path: &Path) -> Result<StopWordSet, TallyError> {
    parse_stop_words(open_lines(path)?).map_err(|source| TallyError::UnreadableFile {
        path: path.to_path_buf(),
        source,
    })
}

/// Build a stop-word set from a line-oriented reader
pub fn parse_stop_words<R: BufRead>(reader: R) -> std::io::Result<StopWordSet> {
    let mut stop_words = StopWordSet::new();
    for line in reader.lines() {
        stop_words.insert(trim_word(&line?.to_lowercase()));
    }
    Ok(stop_words)
}
