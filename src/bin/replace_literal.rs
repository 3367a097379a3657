use std::path::PathBuf;

use clap::Parser;
use feed_fix::{
    config::{unescape, REPLACE_PATTERN, REPLACE_WITH},
    json::render,
    logging::init_logging,
    Job,
};
use tracing::error;

/// Replace a literal string in a source document and write the result to a new file
#[derive(Parser, Debug)]
#[command(name = "replace-literal")]
#[command(version = "0.1.0")]
#[command(about = "Literal, non-overlapping find and replace", long_about = None)]
struct Args {
    /// Source document to read [default: src/pages/social/SocialFeedPage.tsx.original]
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Where to write the edited document [default: src/pages/social/SocialFeedPage.tsx.fixed2]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Literal text to find (`\n`, `\t`, `\\` are expanded)
    #[arg(short, long)]
    pattern: Option<String>,

    /// Text to put in its place (`\n`, `\t`, `\\` are expanded)
    #[arg(short, long)]
    replacement: Option<String>,

    /// Refuse to edit unless the source has this BLAKE3 checksum
    #[arg(long)]
    expect_checksum: Option<String>,

    /// Print a JSON report instead of the confirmation line
    #[arg(short, long)]
    json: bool,
}

fn fail(e: feed_fix::FixError) -> ! {
    error!(error = %e, "replace-literal failed");
    eprintln!("Error: {}", e);
    std::process::exit(1);
}

fn main() {
    init_logging();
    let args = Args::parse();

    let pattern = args
        .pattern
        .as_deref()
        .map(unescape)
        .unwrap_or_else(|| REPLACE_PATTERN.to_string());
    let replacement = args
        .replacement
        .as_deref()
        .map(unescape)
        .unwrap_or_else(|| REPLACE_WITH.to_string());

    let job = Job::replace(pattern, replacement)
        .unwrap_or_else(|e| fail(e))
        .with_paths(args.input, args.output)
        .with_expected_checksum(args.expect_checksum);

    match feed_fix::run(&job) {
        Ok(report) => println!("{}", render(&report, args.json)),
        Err(e) => fail(e),
    }
}
