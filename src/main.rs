use clap::Parser;
use email_sheet::{
    Config, DEFAULT_OUTPUT_FILE, DEFAULT_SHEET_NAME, DEFAULT_SOURCE_URL, DEFAULT_TIMEOUT_SECS,
    Source,
};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "email-sheet")]
#[command(about = "Validate a JSON list of email addresses and write a color-coded spreadsheet")]
#[command(version)]
struct Cli {
    #[arg(
        long,
        env = "EMAIL_SHEET_URL",
        default_value = DEFAULT_SOURCE_URL,
        help = "URL of a JSON array of email addresses"
    )]
    url: String,
    #[arg(
        long,
        short,
        value_name = "PATH",
        help = "Read the JSON array from a local file instead of the URL"
    )]
    input: Option<PathBuf>,
    #[arg(
        long,
        short,
        env = "EMAIL_SHEET_OUTPUT",
        default_value = DEFAULT_OUTPUT_FILE,
        help = "Workbook path to write"
    )]
    output: PathBuf,
    #[arg(
        long,
        env = "EMAIL_SHEET_TIMEOUT",
        value_name = "SECONDS",
        default_value_t = DEFAULT_TIMEOUT_SECS,
        help = "HTTP connect and request timeout"
    )]
    timeout: u64,
    #[arg(long, default_value = DEFAULT_SHEET_NAME, help = "Worksheet name")]
    sheet: String,
    #[arg(long, help = "Append a timestamp to the output file name")]
    timestamp: bool,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        let source = cli.input.map_or(Source::Url(cli.url), Source::File);
        Self {
            source,
            output: cli.output,
            timeout: Duration::from_secs(cli.timeout),
            sheet_name: cli.sheet,
            timestamped: cli.timestamp,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from(Cli::parse());

    match email_sheet::run(&config) {
        Ok(summary) => {
            println!("{summary}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
