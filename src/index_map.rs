//! Sparse transcript-to-reference index maps.
//!
//! Only indel boundaries are recorded. Each entry is anchored on the last
//! transcript index before the event and carries the shift every later query
//! must apply: positive for reference-only runs, negative for transcript-only
//! runs.

use crate::cigar_parser::{CigarOp, OPERATOR_CODES};
use crate::error::CigarError;
use crate::translator::translate;
use anyhow::{bail, Context};
use std::fmt;
use std::str::FromStr;

/// How an operator moves the transcript and reference cursors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpEffect {
    /// Consumes transcript and reference 1:1.
    Aligned,
    /// Consumes reference only (deletion, skipped region).
    ReferenceOnly,
    /// Consumes transcript only (insertion, soft clip).
    TranscriptOnly,
    /// Consumes neither.
    Inert,
}

impl FromStr for OpEffect {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "aligned" => Ok(OpEffect::Aligned),
            "reference" | "reference-only" => Ok(OpEffect::ReferenceOnly),
            "transcript" | "transcript-only" => Ok(OpEffect::TranscriptOnly),
            "inert" => Ok(OpEffect::Inert),
            _ => bail!(
                "Unknown operator effect '{}' (expected aligned, reference, transcript or inert)",
                s
            ),
        }
    }
}

impl fmt::Display for OpEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OpEffect::Aligned => "aligned",
            OpEffect::ReferenceOnly => "reference",
            OpEffect::TranscriptOnly => "transcript",
            OpEffect::Inert => "inert",
        };
        f.write_str(name)
    }
}

/// Per-operator handling used when building an index map.
///
/// The default treats hard clips and padding as inert, which leaves them out
/// of both the transcript length and the map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorTable {
    effects: [OpEffect; 9],
}

impl Default for OperatorTable {
    fn default() -> Self {
        use OpEffect::*;
        // Same order as OPERATOR_CODES: M I D N S H P = X
        OperatorTable {
            effects: [
                Aligned,
                TranscriptOnly,
                ReferenceOnly,
                ReferenceOnly,
                TranscriptOnly,
                Inert,
                Inert,
                Aligned,
                Aligned,
            ],
        }
    }
}

impl OperatorTable {
    fn slot(code: char) -> Option<usize> {
        OPERATOR_CODES.iter().position(|&c| c == code)
    }

    pub fn set(&mut self, code: char, effect: OpEffect) -> Result<(), CigarError> {
        let slot = Self::slot(code).ok_or(CigarError::UnknownOperator(code))?;
        self.effects[slot] = effect;
        Ok(())
    }

    /// Applies a `CODE=EFFECT` override such as `H=transcript`.
    pub fn apply_override(&mut self, spec: &str) -> anyhow::Result<(char, OpEffect)> {
        let (code, effect) = spec.split_once('=').context("Expected CODE=EFFECT")?;
        let mut chars = code.chars();
        let code = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => bail!("Operator code must be a single character, got '{}'", code),
        };
        let effect: OpEffect = effect.parse()?;
        self.set(code, effect)?;
        Ok((code, effect))
    }

    pub fn effect_of(&self, code: char) -> Option<OpEffect> {
        Self::slot(code).map(|slot| self.effects[slot])
    }

    pub fn effect(&self, op: &CigarOp) -> OpEffect {
        self.effect_of(op.code()).unwrap_or(OpEffect::Inert)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexMapEntry {
    /// Transcript index immediately before the indel.
    pub anchor: i64,
    /// Reference shift applied to every query past `anchor`.
    pub adjustment: i64,
}

impl IndexMapEntry {
    pub fn new(anchor: i64, adjustment: i64) -> Self {
        IndexMapEntry { anchor, adjustment }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IndexMap {
    entries: Vec<IndexMapEntry>,
    transcript_length: i64,
    reference_span: i64,
}

impl IndexMap {
    /// Fails when the cumulative transcript or reference span no longer fits
    /// a signed coordinate.
    pub fn build(ops: &[CigarOp], table: &OperatorTable) -> Result<Self, CigarError> {
        let mut entries = Vec::new();
        let mut ref_size: i64 = 0;
        let mut trans_size: i64 = 0;

        for (index, op) in ops.iter().enumerate() {
            let length = i64::try_from(op.length())
                .map_err(|_| CigarError::SpanOverflow { axis: "operator", index })?;
            let advance = |size: i64, axis: &'static str| {
                size.checked_add(length)
                    .ok_or(CigarError::SpanOverflow { axis, index })
            };
            match table.effect(op) {
                OpEffect::Aligned => {
                    ref_size = advance(ref_size, "reference")?;
                    trans_size = advance(trans_size, "transcript")?;
                }
                OpEffect::ReferenceOnly => {
                    ref_size = advance(ref_size, "reference")?;
                    entries.push(IndexMapEntry::new(trans_size - 1, length));
                }
                OpEffect::TranscriptOnly => {
                    entries.push(IndexMapEntry::new(trans_size - 1, -length));
                    trans_size = advance(trans_size, "transcript")?;
                }
                OpEffect::Inert => {}
            }
        }

        Ok(IndexMap {
            entries,
            transcript_length: trans_size,
            reference_span: ref_size,
        })
    }

    pub fn entries(&self) -> &[IndexMapEntry] {
        &self.entries
    }

    pub fn transcript_length(&self) -> i64 {
        self.transcript_length
    }

    /// Reference bases covered by the alignment.
    pub fn reference_span(&self) -> i64 {
        self.reference_span
    }

    pub fn translate(&self, query: i64, ref_start: i64) -> Option<i64> {
        translate(query, &self.entries, ref_start, self.transcript_length)
    }
}
