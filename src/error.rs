use thiserror::Error;

/// A CIGAR string that cannot be read as a sequence of `<length><code>` runs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CigarError {
    #[error("Malformed CIGAR at offset {offset}: unexpected character '{found}'")]
    UnexpectedChar { offset: usize, found: char },
    #[error("Malformed CIGAR at offset {offset}: operator '{op}' has no length")]
    MissingLength { offset: usize, op: char },
    #[error("Malformed CIGAR: trailing length '{0}' has no operator")]
    DanglingLength(String),
    #[error("Malformed CIGAR at offset {offset}: zero-length '{op}' operator")]
    ZeroLength { offset: usize, op: char },
    #[error("Malformed CIGAR at offset {offset}: length '{digits}' is too large")]
    LengthOverflow { offset: usize, digits: String },
    #[error("CIGAR {axis} span exceeds the coordinate range at operator {index}")]
    SpanOverflow { axis: &'static str, index: usize },
    #[error("CIGAR must not begin with an '{0}' operator")]
    LeadingIndel(char),
    #[error("Unknown CIGAR operator: '{0}'")]
    UnknownOperator(char),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslationError {
    #[error("Unknown transcript: {0}")]
    UnknownTranscript(String),
    #[error("Transcript {name} has no coordinate (index) {coordinate}")]
    QueryOutOfRange { name: String, coordinate: i64 },
    #[error("Transcript {name} coordinate {coordinate} maps outside the reference coordinate range")]
    CoordinateOverflow { name: String, coordinate: i64 },
    #[error("Invalid CIGAR for transcript {name}: {source}")]
    InvalidCigar {
        name: String,
        #[source]
        source: CigarError,
    },
}
