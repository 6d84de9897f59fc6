use crate::error::TranslationError;
use crate::transcript::{Transcript, TranslationConfig};
use crate::tsv_parser::{QueryRecord, TranscriptRecord, TranslatedCoordinate};
use anyhow::{Context, Result};
use log::{info, warn};
use std::collections::HashMap;
use std::io::{BufRead, BufWriter, Write};

/// Transcripts keyed by name.
#[derive(Debug, Default)]
pub struct TranscriptIndex {
    transcripts: HashMap<String, Transcript>,
}

impl TranscriptIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a headerless transcript TSV. Blank lines are skipped.
    pub fn from_reader<R: BufRead>(reader: R, config: &TranslationConfig) -> Result<Self> {
        let mut index = TranscriptIndex::new();

        for (line_number, line) in reader.lines().enumerate() {
            let line = line.context("Failed to read transcript line")?;
            if line.trim().is_empty() {
                continue;
            }
            let record = TranscriptRecord::from_line(&line).context(format!(
                "Failed to parse transcript record at line {}",
                line_number + 1
            ))?;
            let transcript = Transcript::from_record(record, config).context(format!(
                "Failed to build transcript at line {}",
                line_number + 1
            ))?;
            index.insert(transcript);
        }

        info!("Loaded {} transcripts", index.len());
        Ok(index)
    }

    /// Adds a transcript, replacing any earlier one with the same name.
    pub fn insert(&mut self, transcript: Transcript) {
        let name = transcript.name().to_string();
        if self.transcripts.contains_key(&name) {
            warn!("Duplicate transcript {}; keeping the later record", name);
        }
        self.transcripts.insert(name, transcript);
    }

    pub fn get(&self, name: &str) -> Result<&Transcript, TranslationError> {
        self.transcripts
            .get(name)
            .ok_or_else(|| TranslationError::UnknownTranscript(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.transcripts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transcripts.is_empty()
    }
}

pub fn translate_query(
    index: &TranscriptIndex,
    query: &QueryRecord,
) -> Result<TranslatedCoordinate, TranslationError> {
    let transcript = index.get(&query.transcript_name)?;
    let in_range = (0..transcript.transcript_length()).contains(&query.coordinate);
    let reference_coordinate = transcript.translate(query.coordinate).ok_or_else(|| {
        let name = query.transcript_name.clone();
        let coordinate = query.coordinate;
        if in_range {
            TranslationError::CoordinateOverflow { name, coordinate }
        } else {
            TranslationError::QueryOutOfRange { name, coordinate }
        }
    })?;

    Ok(TranslatedCoordinate {
        transcript_name: query.transcript_name.clone(),
        coordinate: query.coordinate,
        chromosome: transcript.chromosome().to_string(),
        reference_coordinate,
    })
}

/// Translates every query in a headerless query TSV, writing one result row
/// per query in input order. Stops at the first query that cannot be
/// translated; rows before it have already been written.
pub fn translate_queries<R: BufRead, W: Write>(
    index: &TranscriptIndex,
    reader: R,
    output: &mut BufWriter<W>,
) -> Result<usize> {
    let mut translated = 0;

    for (line_number, line) in reader.lines().enumerate() {
        let line = line.context("Failed to read query line")?;
        if line.trim().is_empty() {
            continue;
        }
        let query = QueryRecord::from_line(&line).context(format!(
            "Failed to parse query record at line {}",
            line_number + 1
        ))?;
        let row = translate_query(index, &query).context(format!(
            "Failed to translate query at line {}",
            line_number + 1
        ))?;
        writeln!(output, "{}", row).context("Failed to write result row")?;
        translated += 1;
    }

    output.flush().context("Failed to flush results")?;
    info!("Translated {} queries", translated);
    Ok(translated)
}
