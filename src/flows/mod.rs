//! Flows module - The word tally pipeline
//!
//! Provides:
//! - stopwords: Load the common-word list
//! - count: Tokenize the content and count words
//! - rank: Select the top N and print them
//! - tally: Run the stages in order

pub mod count;
pub mod rank;
pub mod stopwords;
pub mod tally;
