//! Translate transcript coordinates to reference coordinates through a CIGAR
//! alignment.

pub mod batch;
pub mod cigar_parser;
pub mod error;
pub mod index_map;
pub mod transcript;
pub mod translator;
pub mod tsv_parser;

pub use error::{CigarError, TranslationError};
pub use transcript::{ParseMode, Transcript, TranslationConfig};
