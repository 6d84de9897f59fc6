use cigarmap::cigar_parser::{parse_cigar, parse_cigar_lenient, validate_leading_op, CigarOp};
use cigarmap::error::CigarError;

fn clean_ops() -> Vec<CigarOp> {
    vec![
        CigarOp::Match(8),
        CigarOp::Deletion(7),
        CigarOp::Match(6),
        CigarOp::Insertion(2),
        CigarOp::Match(2),
        CigarOp::Deletion(11),
        CigarOp::Match(7),
    ]
}

#[test]
fn test_parse_every_operator() {
    let ops = parse_cigar("1M2I3D4N5S6H7P8=9X").unwrap();
    assert_eq!(
        ops,
        vec![
            CigarOp::Match(1),
            CigarOp::Insertion(2),
            CigarOp::Deletion(3),
            CigarOp::Skip(4),
            CigarOp::SoftClip(5),
            CigarOp::HardClip(6),
            CigarOp::Padding(7),
            CigarOp::SeqMatch(8),
            CigarOp::Mismatch(9),
        ]
    );
    let codes: String = ops.iter().map(|op| op.code()).collect();
    assert_eq!(codes, "MIDNSHP=X");
}

#[test]
fn test_parse_multi_digit_lengths() {
    assert_eq!(parse_cigar("8M7D6M2I2M11D7M").unwrap(), clean_ops());
    assert_eq!(
        parse_cigar("150M12345N150M").unwrap(),
        vec![CigarOp::Match(150), CigarOp::Skip(12345), CigarOp::Match(150)]
    );
}

#[test]
fn test_parse_empty() {
    assert!(parse_cigar("").unwrap().is_empty());
    assert!(parse_cigar_lenient("").is_empty());
}

#[test]
fn test_display_round_trip() {
    let cigar = "8M7D6M2I2M11D7M";
    let rendered: String = parse_cigar(cigar)
        .unwrap()
        .iter()
        .map(|op| op.to_string())
        .collect();
    assert_eq!(rendered, cigar);
}

#[test]
fn test_strict_rejects_leading_garbage() {
    assert_eq!(
        parse_cigar("X8M7D6M2I2M11D7M"),
        Err(CigarError::MissingLength { offset: 0, op: 'X' })
    );
}

#[test]
fn test_strict_rejects_trailing_digits() {
    assert_eq!(
        parse_cigar("8M7D6M2I2M11D7M12"),
        Err(CigarError::DanglingLength("12".to_string()))
    );
}

#[test]
fn test_strict_rejects_unknown_operator() {
    assert_eq!(
        parse_cigar("8M7D6M2I2M11D7M12Q"),
        Err(CigarError::UnexpectedChar { offset: 17, found: 'Q' })
    );
    assert_eq!(
        parse_cigar("5M 3M"),
        Err(CigarError::UnexpectedChar { offset: 2, found: ' ' })
    );
}

#[test]
fn test_strict_rejects_zero_length() {
    assert_eq!(
        parse_cigar("5M0D5M"),
        Err(CigarError::ZeroLength { offset: 2, op: 'D' })
    );
}

#[test]
fn test_strict_rejects_overflowing_length() {
    let cigar = "99999999999999999999M";
    match parse_cigar(cigar) {
        Err(CigarError::LengthOverflow { offset, digits }) => {
            assert_eq!(offset, 0);
            assert_eq!(digits, "99999999999999999999");
        }
        other => panic!("Expected overflow error, got {:?}", other),
    }
}

#[test]
fn test_lenient_skips_garbage() {
    assert_eq!(parse_cigar_lenient("8M7D6M2I2M11D7M"), clean_ops());
    assert_eq!(parse_cigar_lenient("X8M7D6M2I2M11D7M12"), clean_ops());
    assert_eq!(parse_cigar_lenient("8M7D6M2I2M11D7M12Q"), clean_ops());
}

#[test]
fn test_lenient_restarts_digit_run_after_garbage() {
    assert_eq!(
        parse_cigar_lenient("12Q3M4?5I"),
        vec![CigarOp::Match(3), CigarOp::Insertion(5)]
    );
    assert!(parse_cigar_lenient("MIDX").is_empty());
}

#[test]
fn test_lenient_skips_overflowing_length() {
    assert_eq!(
        parse_cigar_lenient("99999999999999999999M4M"),
        vec![CigarOp::Match(4)]
    );
}

#[test]
fn test_leading_indel_rejected() {
    assert_eq!(
        validate_leading_op(&parse_cigar("3I5M").unwrap()),
        Err(CigarError::LeadingIndel('I'))
    );
    assert_eq!(
        validate_leading_op(&parse_cigar("2D5M").unwrap()),
        Err(CigarError::LeadingIndel('D'))
    );
    assert!(validate_leading_op(&parse_cigar("3S5M").unwrap()).is_ok());
    assert!(validate_leading_op(&[]).is_ok());
}

#[test]
fn test_error_messages() {
    let err = parse_cigar("8M12Q").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Malformed CIGAR at offset 4: unexpected character 'Q'"
    );
}

#[test]
fn test_strict_error_precedence() {
    assert_eq!(
        parse_cigar("5M3Q"),
        Err(CigarError::UnexpectedChar { offset: 3, found: 'Q' })
    );
    assert_eq!(
        parse_cigar("5M=5M"),
        Err(CigarError::MissingLength { offset: 2, op: '=' })
    );
    assert_eq!(
        parse_cigar("5M00X"),
        Err(CigarError::ZeroLength { offset: 2, op: 'X' })
    );
}
