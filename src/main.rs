//! YAML Merge CLI
//!
//! Entry point for the `yaml-merge` command-line tool.

use clap::error::ErrorKind as ClapErrorKind;
use clap::{CommandFactory, Parser};
use std::path::PathBuf;
use std::process;
use tracing::debug;
use yaml_merge::logging::init_logging;
use yaml_merge::{merge_files, ErrorKind};

#[derive(Parser)]
#[command(name = "yaml-merge")]
#[command(about = "Deep-merge an override YAML document onto an origin document", version)]
struct Cli {
    /// Base document
    #[arg(value_name = "origin.yaml")]
    origin: PathBuf,

    /// Document whose values take precedence
    #[arg(value_name = "override.yaml")]
    overlay: PathBuf,

    /// Where the merged document is written (overwritten if present)
    #[arg(value_name = "output.yaml")]
    output: PathBuf,
}

fn main() {
    init_logging();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion => e.exit(),
            _ => {
                println!("{}", Cli::command().render_usage());
                process::exit(ErrorKind::Usage.exit_code());
            }
        },
    };

    run_merge(&cli);
}

fn run_merge(cli: &Cli) {
    match merge_files(&cli.origin, &cli.overlay, &cli.output) {
        Ok(report) => {
            println!("Merged YAML written to: {}", report.output.display());
        }
        Err(e) => {
            let kind = e.kind();
            debug!(kind = ?kind, error = %e, "merge failed");
            println!("Error: {}", e);
            process::exit(kind.exit_code());
        }
    }
}
