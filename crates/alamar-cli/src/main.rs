//! alamar - interactive alamarBlue cell-viability analyzer

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use alamar_xlsx::XlsxReader;

mod prompt;
mod run;
mod select;
mod table;

use prompt::Console;
use run::RunOptions;
use select::PromptSelection;

#[derive(Parser)]
#[command(name = "alamar")]
#[command(
    author,
    version,
    about = "Compute cell viability percentages from alamarBlue absorbance readings"
)]
struct Cli {
    /// Input spreadsheet file (xlsx); prompted for when omitted
    input: Option<PathBuf>,

    /// Sheet holding the readings (skips the sheet prompt)
    #[arg(short, long)]
    sheet: Option<String>,

    /// Remove statistical outliers without asking
    #[arg(long)]
    remove_outliers: bool,

    /// Keep all replicate values without asking
    #[arg(long, conflicts_with = "remove_outliers")]
    keep_outliers: bool,

    /// Export the results table to this Word document (skips the export prompts)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());

    let input = match cli.input {
        Some(path) => path,
        None => {
            let answer = console.ask("Enter the path to the Excel file: ")?;
            if answer.is_empty() {
                console.say("No file selected. Exiting.")?;
                return Ok(());
            }
            PathBuf::from(answer)
        }
    };

    let workbook = XlsxReader::read_file(&input)
        .with_context(|| format!("Failed to open '{}'", input.display()))?;

    let opts = RunOptions {
        sheet: cli.sheet,
        remove_outliers: match (cli.remove_outliers, cli.keep_outliers) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        },
        output: cli.output,
    };

    run::run(&mut console, &mut PromptSelection, &workbook, &opts)
}
