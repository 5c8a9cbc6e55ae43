// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! Email Sheet
//!
//! Turns a flat JSON list of email address strings into a color-annotated
//! spreadsheet.
//!
//! # Features
//!
//! - Validation against a single shared email-shape pattern
//! - Recovery of addresses glued together without a separator
//! - Company name and website guesses from the address domain
//! - Order-preserving row expansion with a valid/invalid tally
//! - XLSX output with green/red validity fills
//!
//! # Example
//!
//! ```rust
//! use email_sheet::{Summary, expand_rows};
//!
//! let rows = expand_rows(&["info@acme.org", "broken@"]);
//! let summary = Summary::tally(&rows);
//!
//! assert_eq!(rows[0].company_name(), "Acme");
//! assert_eq!(rows[0].website(), "https://acme.org");
//! assert_eq!(summary.valid, 1);
//! assert_eq!(summary.invalid, 1);
//! ```

mod address;
mod config;
mod enrich;
mod error;
mod expander;
mod pipeline;
mod sheet;
mod source;
mod types;

pub use address::{is_valid_address, split_embedded};
pub use config::{
    Config, DEFAULT_OUTPUT_FILE, DEFAULT_SHEET_NAME, DEFAULT_SOURCE_URL, DEFAULT_TIMEOUT_SECS,
    Source, timestamped_path,
};
pub use enrich::{company_name, enrich, website};
pub use error::{PipelineError, Result};
pub use expander::{expand_address, expand_rows};
pub use pipeline::run;
pub use sheet::{build_workbook, write_workbook};
pub use source::{fetch_address_list, load_addresses, parse_address_list, read_address_list};
pub use types::{EnrichedFields, OutputRow, RowOrigin, Summary, Validity};
