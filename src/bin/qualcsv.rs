use clap::Parser;
use qualcsv::{
    read_records, write_records, CsvConfig, CsvError, LineTerminator, OutputTarget, QualifierMode,
};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Tokenize a delimited text file and write the records back out
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input file
    input: PathBuf,

    /// Output file; standard output when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Field delimiter
    #[arg(short, long, default_value_t = ',')]
    delimiter: char,

    /// Text qualifier
    #[arg(short, long, default_value_t = '"')]
    qualifier: char,

    /// Records are separated by LF instead of CRLF
    #[arg(long)]
    lf: bool,

    /// Treat doubled qualifiers inside a qualified span as one literal qualifier
    #[arg(long)]
    doubled_qualifiers: bool,

    /// Remove the enclosing qualifier pair from each field
    #[arg(long)]
    strip_qualifiers: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn config(&self) -> CsvConfig {
        CsvConfig::default()
            .delimiter(self.delimiter)
            .text_qualifier(self.qualifier)
            .line_terminator(if self.lf {
                LineTerminator::Lf
            } else {
                LineTerminator::CrLf
            })
            .qualifier_mode(if self.doubled_qualifiers {
                QualifierMode::Doubled
            } else {
                QualifierMode::Toggle
            })
            .strip_qualifiers(self.strip_qualifiers)
    }
}

fn run(cli: &Cli) -> Result<(), CsvError> {
    let config = cli.config();
    debug!("config: {:?}", config);

    let records = read_records(&cli.input, &config)?;
    info!("{} records read from {}", records.len(), cli.input.display());

    let target = match &cli.output {
        Some(path) => OutputTarget::File(path.clone()),
        None => OutputTarget::Stdout,
    };
    write_records(&target, &records, config)
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
