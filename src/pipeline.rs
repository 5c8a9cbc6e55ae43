//! One-shot conversion: load, classify, write

use crate::config::Config;
use crate::error::Result;
use crate::expander::expand_rows;
use crate::sheet::write_workbook;
use crate::source::load_addresses;
use crate::types::Summary;
use chrono::Local;
use tracing::info;

/// Run a full conversion and return the row tally.
///
/// Input failures abort before any classification happens. The row
/// sequence is built completely in memory before it is written.
pub fn run(config: &Config) -> Result<Summary> {
    let addresses = load_addresses(&config.source, config.timeout)?;

    let rows = expand_rows(&addresses);
    let summary = Summary::tally(&rows);
    info!(
        "Classified {} addresses into {} rows",
        addresses.len(),
        summary.total()
    );

    let output = config.output_path(Local::now().naive_local());
    write_workbook(&rows, &config.sheet_name, &output)?;

    Ok(summary)
}
