use std::{env, fs::File, io};

use tracing_subscriber::EnvFilter;

use trip_ledger::config::{Config, OutputFormat};
use trip_ledger::dlq::StdErrDLQ;
use trip_ledger::engine::Engine;
use trip_ledger::ingestion::CsvReader;
use trip_ledger::output_repository::{CsvSummaryOutput, JsonExportOutput};

#[tokio::main] // using Tokio runtime for async
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = Config::from_args(env::args().skip(1))?;
    let file = File::open(&config.input)?;
    let ingestion = CsvReader::new(file)?;
    let dlq = StdErrDLQ::default();

    match config.output {
        OutputFormat::SummaryCsv => {
            let mut engine = Engine::new(ingestion, CsvSummaryOutput::new(io::stdout()), dlq);
            engine.process().await?;
            engine.flush()?;
        }
        OutputFormat::Json => {
            let mut engine = Engine::new(ingestion, JsonExportOutput::new(io::stdout()), dlq);
            engine.process().await?;
            engine.flush()?;
        }
    }

    Ok(())
}
