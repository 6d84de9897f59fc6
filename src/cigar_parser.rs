use crate::error::CigarError;
use log::debug;
use std::fmt;

/// Operator codes recognised in a CIGAR string, in SAM order.
pub const OPERATOR_CODES: [char; 9] = ['M', 'I', 'D', 'N', 'S', 'H', 'P', '=', 'X'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CigarOp {
    Match(u64),
    Insertion(u64),
    Deletion(u64),
    Skip(u64),
    SoftClip(u64),
    HardClip(u64),
    Padding(u64),
    SeqMatch(u64),
    Mismatch(u64),
}

impl CigarOp {
    pub fn from_code(code: char, length: u64) -> Option<Self> {
        let op = match code {
            'M' => CigarOp::Match(length),
            'I' => CigarOp::Insertion(length),
            'D' => CigarOp::Deletion(length),
            'N' => CigarOp::Skip(length),
            'S' => CigarOp::SoftClip(length),
            'H' => CigarOp::HardClip(length),
            'P' => CigarOp::Padding(length),
            '=' => CigarOp::SeqMatch(length),
            'X' => CigarOp::Mismatch(length),
            _ => return None,
        };
        Some(op)
    }

    pub fn code(&self) -> char {
        match self {
            CigarOp::Match(_) => 'M',
            CigarOp::Insertion(_) => 'I',
            CigarOp::Deletion(_) => 'D',
            CigarOp::Skip(_) => 'N',
            CigarOp::SoftClip(_) => 'S',
            CigarOp::HardClip(_) => 'H',
            CigarOp::Padding(_) => 'P',
            CigarOp::SeqMatch(_) => '=',
            CigarOp::Mismatch(_) => 'X',
        }
    }

    pub fn length(&self) -> u64 {
        match *self {
            CigarOp::Match(n)
            | CigarOp::Insertion(n)
            | CigarOp::Deletion(n)
            | CigarOp::Skip(n)
            | CigarOp::SoftClip(n)
            | CigarOp::HardClip(n)
            | CigarOp::Padding(n)
            | CigarOp::SeqMatch(n)
            | CigarOp::Mismatch(n) => n,
        }
    }
}

impl fmt::Display for CigarOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.length(), self.code())
    }
}

// Lengths must fit a signed coordinate.
fn parse_length(digits: &str) -> Option<u64> {
    digits.parse::<u64>().ok().filter(|&n| n <= i64::MAX as u64)
}

/// Parses a CIGAR string, rejecting anything that is not a run of
/// `<length><code>` pairs. An empty string yields no operators.
pub fn parse_cigar(cigar: &str) -> Result<Vec<CigarOp>, CigarError> {
    let mut ops = Vec::new();
    let mut num_start: Option<usize> = None;

    for (offset, c) in cigar.char_indices() {
        if c.is_ascii_digit() {
            num_start.get_or_insert(offset);
            continue;
        }
        let start = num_start.take();
        let digits = &cigar[start.unwrap_or(offset)..offset];
        let length = parse_length(digits);
        let op = CigarOp::from_code(c, length.unwrap_or(0))
            .ok_or(CigarError::UnexpectedChar { offset, found: c })?;
        let start = start.ok_or(CigarError::MissingLength { offset, op: c })?;
        if length.is_none() {
            return Err(CigarError::LengthOverflow {
                offset: start,
                digits: digits.to_string(),
            });
        }
        if op.length() == 0 {
            return Err(CigarError::ZeroLength { offset: start, op: c });
        }
        ops.push(op);
    }

    if let Some(start) = num_start {
        return Err(CigarError::DanglingLength(cigar[start..].to_string()));
    }
    Ok(ops)
}

/// Extracts every digit run immediately followed by an operator code and
/// silently drops everything else, e.g. `X8M7D12Q` reads as `8M7D`.
pub fn parse_cigar_lenient(cigar: &str) -> Vec<CigarOp> {
    let mut ops = Vec::new();
    let mut num_start: Option<usize> = None;

    for (offset, c) in cigar.char_indices() {
        if c.is_ascii_digit() {
            num_start.get_or_insert(offset);
            continue;
        }
        let Some(start) = num_start.take() else {
            debug!("Skipping CIGAR character '{}' at offset {}", c, offset);
            continue;
        };
        let digits = &cigar[start..offset];
        match parse_length(digits).and_then(|length| CigarOp::from_code(c, length)) {
            Some(op) => ops.push(op),
            None => debug!("Skipping CIGAR fragment '{}{}' at offset {}", digits, c, start),
        }
    }

    if let Some(start) = num_start {
        debug!("Skipping trailing CIGAR digits '{}'", &cigar[start..]);
    }
    ops
}

/// Alignments are expected to open on an aligned or clipped operator; an
/// opening indel has no upstream base to anchor on.
pub fn validate_leading_op(ops: &[CigarOp]) -> Result<(), CigarError> {
    match ops.first() {
        Some(op @ (CigarOp::Insertion(_) | CigarOp::Deletion(_))) => {
            Err(CigarError::LeadingIndel(op.code()))
        }
        _ => Ok(()),
    }
}
