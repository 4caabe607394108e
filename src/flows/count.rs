//! Word counting
//!
//! Tokenizes the content file and tallies every word that is not a stop word.

use tracing::{debug, debug_span, error};

use crate::core::error::TallyError;
use crate::core::file_reader::{locate_input, read_to_string};
use crate::core::model::{Load, StopWordSet, WordCount};
use crate::core::options::{TallyOptions, CONTENT_FILE_ARG};
use crate::core::tokenizer::tokens;

/// Count the words of the file named by `content.file.name`
///
/// Returns `Load::Missing` (after logging) when the option is absent or the file
/// does not exist. Read failures are returned as errors.
pub fn count_words(
    options: &TallyOptions,
    stop_words: &StopWordSet,
) -> Result<Load<WordCount>, TallyError> {
    let _span = debug_span!("pipeline_stage", stage = "count").entered();

    let path = match locate_input(
        &options.input_dir,
        options.content_file.as_deref(),
        CONTENT_FILE_ARG,
    ) {
        Load::Loaded(path) => path,
        Load::Missing(err) => {
            error!(code = err.code(), "{}", err);
            return Ok(Load::Missing(err));
        }
    };

    let content = read_to_string(&path)?;
    let counts = count_text(&content, stop_words);
    debug!(
        path = %path.display(),
        words = counts.total(),
        distinct = counts.len(),
        "counted words"
    );
    Ok(Load::Loaded(counts))
}

/// Tally the normalized words of `text`, skipping stop words
pub fn count_text(text: &str, stop_words: &StopWordSet) -> WordCount {
    let mut counts = WordCount::new();
    for word in tokens(text) {
        if !stop_words.contains(&word) {
            counts.record(&word);
        }
    }
    counts
}
