use crate::cigar_parser::{parse_cigar, parse_cigar_lenient, validate_leading_op, CigarOp};
use crate::error::{CigarError, TranslationError};
use crate::index_map::{IndexMap, IndexMapEntry, OperatorTable};
use crate::tsv_parser::TranscriptRecord;
use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Reject malformed CIGAR strings and leading indels.
    #[default]
    Strict,
    /// Skip unrecognised fragments.
    Lenient,
}

#[derive(Debug, Clone, Default)]
pub struct TranslationConfig {
    pub parse_mode: ParseMode,
    pub operators: OperatorTable,
}

impl TranslationConfig {
    pub fn parse_ops(&self, cigar: &str) -> Result<Vec<CigarOp>, CigarError> {
        match self.parse_mode {
            ParseMode::Strict => {
                let ops = parse_cigar(cigar)?;
                validate_leading_op(&ops)?;
                Ok(ops)
            }
            ParseMode::Lenient => Ok(parse_cigar_lenient(cigar)),
        }
    }

    pub fn build_index_map(&self, cigar: &str) -> Result<IndexMap, CigarError> {
        let ops = self.parse_ops(cigar)?;
        IndexMap::build(&ops, &self.operators)
    }
}

/// An aligned transcript. The index map is built once here and reused for
/// every query against the transcript.
#[derive(Debug, Clone)]
pub struct Transcript {
    name: String,
    chromosome: String,
    ref_start: i64,
    cigar: String,
    index_map: IndexMap,
}

impl Transcript {
    pub fn new(
        name: impl Into<String>,
        chromosome: impl Into<String>,
        ref_start: i64,
        cigar: impl Into<String>,
        config: &TranslationConfig,
    ) -> Result<Self, TranslationError> {
        let name = name.into();
        let cigar = cigar.into();
        let index_map = config
            .build_index_map(&cigar)
            .map_err(|source| TranslationError::InvalidCigar {
                name: name.clone(),
                source,
            })?;
        debug!(
            "Transcript {}: length {}, {} indel boundaries",
            name,
            index_map.transcript_length(),
            index_map.entries().len()
        );

        Ok(Transcript {
            name,
            chromosome: chromosome.into(),
            ref_start,
            cigar,
            index_map,
        })
    }

    pub fn from_record(
        record: TranscriptRecord,
        config: &TranslationConfig,
    ) -> Result<Self, TranslationError> {
        Transcript::new(
            record.name,
            record.chromosome,
            record.ref_start,
            record.cigar,
            config,
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn chromosome(&self) -> &str {
        &self.chromosome
    }

    pub fn ref_start(&self) -> i64 {
        self.ref_start
    }

    pub fn cigar(&self) -> &str {
        &self.cigar
    }

    pub fn transcript_length(&self) -> i64 {
        self.index_map.transcript_length()
    }

    pub fn index_map(&self) -> &[IndexMapEntry] {
        self.index_map.entries()
    }

    pub fn reference_span(&self) -> i64 {
        self.index_map.reference_span()
    }

    pub fn translate(&self, query: i64) -> Option<i64> {
        self.index_map.translate(query, self.ref_start)
    }
}
