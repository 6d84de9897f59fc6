use anyhow::{Context, Result};
use clap::{App, Arg};
use env_logger::Env;
use log::info;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};

use cigarmap::batch::{translate_queries, TranscriptIndex};
use cigarmap::transcript::{ParseMode, TranslationConfig};

fn main() -> Result<()> {
    let matches = App::new("cigarmap")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Translates transcript coordinates to reference coordinates using CIGAR alignments")
        .arg(
            Arg::with_name("transcripts")
                .short('t')
                .long("transcripts")
                .value_name("TRANSCRIPTS")
                .help("TSV of transcripts: name, chromosome, reference start, CIGAR")
                .takes_value(true)
                .required(true),
        )
        .arg(
            Arg::with_name("queries")
                .short('q')
                .long("queries")
                .value_name("QUERIES")
                .help("TSV of queries: transcript name, transcript coordinate")
                .takes_value(true)
                .required(true),
        )
        .arg(
            Arg::with_name("output")
                .short('o')
                .long("output")
                .value_name("OUTPUT")
                .help("Output TSV path [default: stdout]")
                .takes_value(true)
                .required(false),
        )
        .arg(
            Arg::with_name("lenient")
                .long("lenient")
                .help("Skip unrecognised CIGAR fragments instead of failing"),
        )
        .arg(
            Arg::with_name("operator-effect")
                .short('O')
                .long("operator-effect")
                .value_name("CODE=EFFECT")
                .help("Override how an operator is mapped: aligned, reference, transcript, inert")
                .takes_value(true)
                .multiple_occurrences(true),
        )
        .arg(
            Arg::with_name("verbose")
                .short('v')
                .long("verbose")
                .help("Increase log verbosity (-v info, -vv debug)")
                .multiple_occurrences(true),
        )
        .get_matches();

    let level = match matches.occurrences_of("verbose") {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    let transcripts_path = matches
        .value_of("transcripts")
        .context("Missing transcripts path")?;
    let queries_path = matches.value_of("queries").context("Missing queries path")?;

    let mut config = TranslationConfig::default();
    if matches.is_present("lenient") {
        config.parse_mode = ParseMode::Lenient;
    }
    for spec in matches.values_of("operator-effect").into_iter().flatten() {
        let (code, effect) = config
            .operators
            .apply_override(spec)
            .context(format!("Invalid operator effect '{}'", spec))?;
        info!("Operator {} mapped as {}", code, effect);
    }

    translate_files(transcripts_path, queries_path, matches.value_of("output"), &config)
        .context("Failed to translate coordinates")?;

    Ok(())
}

fn translate_files(
    transcripts_path: &str,
    queries_path: &str,
    output_path: Option<&str>,
    config: &TranslationConfig,
) -> Result<()> {
    let transcripts_file = File::open(transcripts_path)
        .context(format!("Failed to open transcripts file: {}", transcripts_path))?;
    let index = TranscriptIndex::from_reader(BufReader::new(transcripts_file), config)
        .context("Failed to load transcripts")?;

    let queries_file =
        File::open(queries_path).context(format!("Failed to open queries file: {}", queries_path))?;

    let sink: Box<dyn Write> = match output_path {
        Some(path) => Box::new(
            File::create(path).context(format!("Failed to create output file: {}", path))?,
        ),
        None => Box::new(io::stdout()),
    };
    let mut output = BufWriter::new(sink);

    translate_queries(&index, BufReader::new(queries_file), &mut output)?;
    Ok(())
}
