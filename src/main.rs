//! `uucodec` command line tool
//!
//! ```text
//! uucodec encode photo.jpg notes.txt     # writes photo.jpg.encoded, notes.txt.encoded
//! uucodec decode photo.jpg.encoded       # writes the file named in the header
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use uucodec::uuencode::DEFAULT_MODE;
use uucodec::{decode_file, encode_file, DecodeConfig, EncodeConfig, LineEnding};

/// uuencode / uudecode files
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Whether to encode or decode the given files
    #[arg(value_enum)]
    operation: Operation,

    /// Files to process, in order
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Permission mode recorded in encoded headers
    #[arg(long, default_value = DEFAULT_MODE)]
    mode: String,

    /// Write CRLF line endings when encoding
    #[arg(long)]
    crlf: bool,

    /// Directory decoded files are written to
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Skip text before the `begin` line when decoding
    #[arg(long)]
    skip_preamble: bool,

    /// Reject decoded documents without a closing `end` line
    #[arg(long)]
    require_end: bool,

    /// Report failures and continue with the remaining files
    #[arg(short, long)]
    keep_going: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Operation {
    Encode,
    Decode,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    debug!("{:?}", args);

    let line_ending = if args.crlf {
        LineEnding::Crlf
    } else {
        LineEnding::Lf
    };
    let encode_config = EncodeConfig::with_mode(args.mode.clone()).line_ending(line_ending);
    let decode_config = DecodeConfig {
        skip_preamble: args.skip_preamble,
        require_end: args.require_end,
    };

    let mut failures = 0usize;
    for file in &args.files {
        let result = match args.operation {
            Operation::Encode => encode_file(file, &encode_config).await,
            Operation::Decode => decode_file(file, &args.output_dir, &decode_config).await,
        };

        match result {
            Ok(out) => info!("{} -> {}", file.display(), out.display()),
            Err(e) => {
                eprintln!("uucodec: {}: {}", file.display(), e);
                failures += 1;
                if !args.keep_going {
                    return ExitCode::FAILURE;
                }
            }
        }
    }

    if failures > 0 {
        eprintln!(
            "uucodec: {} of {} files failed",
            failures,
            args.files.len()
        );
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
