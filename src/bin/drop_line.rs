use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::Parser;
use feed_fix::{config::default_line, json::render, logging::init_logging, Job};
use tracing::error;

/// Remove one line from a source document and write the result to a new file
#[derive(Parser, Debug)]
#[command(name = "drop-line")]
#[command(version = "0.1.0")]
#[command(about = "Delete a single line, leaving the source untouched", long_about = None)]
struct Args {
    /// Source document to read [default: src/pages/social/SocialFeedPage.tsx.original]
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Where to write the edited document [default: src/pages/social/SocialFeedPage.tsx.fixed]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// 1-based line to remove; a shorter document is copied unchanged [default: 2700]
    #[arg(short, long)]
    line: Option<NonZeroUsize>,

    /// Refuse to edit unless the source has this BLAKE3 checksum
    #[arg(long)]
    expect_checksum: Option<String>,

    /// Print a JSON report instead of the confirmation line
    #[arg(short, long)]
    json: bool,
}

fn main() {
    init_logging();
    let args = Args::parse();

    let job = Job::drop_line(args.line.unwrap_or_else(default_line))
        .with_paths(args.input, args.output)
        .with_expected_checksum(args.expect_checksum);

    match feed_fix::run(&job) {
        Ok(report) => println!("{}", render(&report, args.json)),
        Err(e) => {
            error!(error = %e, "drop-line failed");
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
