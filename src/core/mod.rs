//! Core module - Contains the fundamental data structures and utilities
//!
//! This module provides:
//! - The tally data model (stop words, word counts, ranked entries)
//! - Error kinds shared by the pipeline
//! - Tally options and input path resolution
//! - File reading
//! - Word tokenization
//! - Rendering of the ranked listing

pub mod error;
pub mod file_reader;
pub mod model;
pub mod options;
pub mod paths;
pub mod render;
pub mod tokenizer;
