use clap::{Parser, Subcommand};
use i18n_forge::cli;
use i18n_forge::config::{Paths, DEFAULT_EXCEL_INPUT, DEFAULT_EXCEL_OUTPUT, DEFAULT_JSON_OUTPUT};
use i18n_forge::error::I18nResult;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "i18n-forge")]
#[command(about = "Convert i18n Excel sheets to JSON and back, with key validation.")]
#[command(long_about = "i18n-forge - Excel ⇄ JSON for localized text

SHEET LAYOUT:
  key | IContent | Remark | Last Update Date
  First row is always the header. Rows without key or IContent are skipped.

COMMANDS:
  parse     - Excel (.xlsx) to flat JSON map
  generate  - JSON map to Excel (.xlsx)
  validate  - Check JSON keys are unique

Without a command, parses i18n/input/i18n.xlsx into i18n/output/i18n.json.

EXAMPLES:
  i18n-forge parse i18n.xlsx -o i18n.json
  i18n-forge generate i18n.json -o i18n.xlsx
  i18n-forge validate i18n.json

Set RUST_LOG=i18n_forge=debug for detailed logs.")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(long_about = "Parse an i18n Excel sheet into a flat JSON map.

Reads the first worksheet. Duplicate keys abort the run and nothing is written.
Incomplete rows (missing key or IContent) are skipped with a warning.")]
    /// Parse an Excel sheet into JSON
    Parse {
        /// Excel file to read
        #[arg(default_value = DEFAULT_EXCEL_INPUT)]
        input: PathBuf,

        /// JSON file to write
        #[arg(short, long, default_value = DEFAULT_JSON_OUTPUT, conflicts_with = "no_output")]
        output: PathBuf,

        /// Only check the sheet, do not write JSON
        #[arg(long)]
        no_output: bool,

        /// Show parsed keys
        #[arg(short, long)]
        verbose: bool,
    },

    #[command(long_about = "Generate an i18n Excel sheet from a flat JSON map.

Writes one worksheet named 'i18n'. Remark is left empty and
Last Update Date is set to today's date.")]
    /// Generate an Excel sheet from JSON
    Generate {
        /// JSON file to read
        #[arg(default_value = DEFAULT_JSON_OUTPUT)]
        input: PathBuf,

        /// Excel file to write
        #[arg(short, long, default_value = DEFAULT_EXCEL_OUTPUT)]
        output: PathBuf,

        /// Show verbose steps
        #[arg(short, long)]
        verbose: bool,
    },

    /// Check that JSON keys are unique
    Validate {
        /// JSON file to check (skipped if missing)
        #[arg(default_value = DEFAULT_JSON_OUTPUT)]
        file: PathBuf,
    },
}

fn main() -> I18nResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "i18n_forge=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Parse {
            input,
            output,
            no_output,
            verbose,
        }) => cli::parse(input, (!no_output).then_some(output), verbose),

        Some(Commands::Generate {
            input,
            output,
            verbose,
        }) => cli::generate(input, output, verbose),

        Some(Commands::Validate { file }) => cli::validate(file),

        None => cli::run_default(&Paths::default()),
    }
}
