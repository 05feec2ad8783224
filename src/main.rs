use std::ffi::OsString;
use std::path::PathBuf;

use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use config::Config;
use error::ConvertError;

pub mod config;
pub mod data;
pub mod error;

/// What a finished conversion wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub destination: PathBuf,
    pub rows: usize,
    pub columns: usize,
}

pub fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "thorn2csv=warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match try_main(std::env::args_os()) {
        Ok(summary) => info!(
            "Wrote {} rows, {} columns to {:?}",
            summary.rows, summary.columns, summary.destination
        ),
        Err(err) => {
            // Let clap print help, version and usage errors with its own exit codes.
            if let Some(ConvertError::Usage(usage)) = err.downcast_ref::<ConvertError>() {
                usage.exit();
            }
            eprintln!("Error: {:#}", err);
            std::process::exit(1);
        }
    }
}

fn try_main<I, T>(args: I) -> anyhow::Result<Summary>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let config = Config::from_args(args)?;
    run(&config)
}

/// Load the source described by `config` and write it back out as CSV.
pub fn run(config: &Config) -> anyhow::Result<Summary> {
    info!(
        "Converting {:?} (delimiter {:?}) into {:?}",
        config.source, config.delimiter, config.destination
    );

    let table = data::parse::load_file(&config.source, &config.delimiter)?;
    info!(
        "Parsed table: {} rows, {} columns",
        table.num_rows(),
        table.num_columns()
    );

    data::output::write_file(&table, &config.destination)?;

    Ok(Summary {
        destination: config.destination.clone(),
        rows: table.num_rows(),
        columns: table.num_columns(),
    })
}
