use anyhow::{Context, Result};
use std::fmt;

fn split_fields(line: &str) -> Vec<&str> {
    line.trim_end_matches(&['\r', '\n'][..]).split('\t').collect()
}

/// One row of the transcript table: name, chromosome, reference start, CIGAR.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptRecord {
    pub name: String,
    pub chromosome: String,
    pub ref_start: i64,
    pub cigar: String,
}

impl TranscriptRecord {
    pub fn from_line(line: &str) -> Result<Self> {
        let fields = split_fields(line);
        if fields.len() < 4 {
            anyhow::bail!(
                "Transcript line has {} fields, expected 4 (name, chromosome, start, CIGAR)",
                fields.len()
            );
        }

        Ok(TranscriptRecord {
            name: fields[0].to_string(),
            chromosome: fields[1].to_string(),
            ref_start: fields[2]
                .trim()
                .parse()
                .context(format!("Failed to parse reference start '{}'", fields[2]))?,
            cigar: fields[3].to_string(),
        })
    }
}

/// One row of the query table: transcript name and transcript coordinate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRecord {
    pub transcript_name: String,
    pub coordinate: i64,
}

impl QueryRecord {
    pub fn from_line(line: &str) -> Result<Self> {
        let fields = split_fields(line);
        if fields.len() < 2 {
            anyhow::bail!(
                "Query line has {} fields, expected 2 (transcript, coordinate)",
                fields.len()
            );
        }

        Ok(QueryRecord {
            transcript_name: fields[0].to_string(),
            coordinate: fields[1]
                .trim()
                .parse()
                .context(format!("Failed to parse query coordinate '{}'", fields[1]))?,
        })
    }
}

/// A translated query, written as one tab-separated output row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatedCoordinate {
    pub transcript_name: String,
    pub coordinate: i64,
    pub chromosome: String,
    pub reference_coordinate: i64,
}

impl fmt::Display for TranslatedCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}",
            self.transcript_name, self.coordinate, self.chromosome, self.reference_coordinate
        )
    }
}
