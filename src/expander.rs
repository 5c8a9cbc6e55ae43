//! Row expansion: raw address strings into ordered, annotated rows

use crate::address::{is_valid_address, split_embedded};
use crate::enrich::enrich;
use crate::types::{OutputRow, RowOrigin, Validity};
use tracing::debug;

/// Expand a raw address list into output rows.
///
/// Every input entry yields at least one row and input order is kept.
/// An invalid entry that contains two or more embedded addresses is
/// followed directly by one row per recovered address.
///
/// ```rust
/// use email_sheet::expand_rows;
///
/// let rows = expand_rows(&["valid@ok.com", "not-an-email", "a@x.coma2@y.org"]);
/// assert_eq!(rows.len(), 5);
/// assert_eq!(rows[3].address, "a@x.coma");
/// ```
#[must_use]
pub fn expand_rows<S: AsRef<str>>(addresses: &[S]) -> Vec<OutputRow> {
    let mut rows = Vec::with_capacity(addresses.len());

    for address in addresses {
        expand_address(address.as_ref(), &mut rows);
    }

    rows
}

/// Append the rows for a single raw address.
pub fn expand_address(raw: &str, rows: &mut Vec<OutputRow>) {
    if is_valid_address(raw) {
        rows.push(OutputRow::valid(
            raw.to_string(),
            enrich(raw),
            RowOrigin::Input,
        ));
        return;
    }

    let parts = split_embedded(raw);
    rows.push(OutputRow::invalid(raw.to_string(), RowOrigin::Input));

    // A single recovered match is dropped; only real splits get rows.
    if parts.len() < 2 {
        debug!("Invalid address: {raw:?}");
        return;
    }

    debug!("Split {raw:?} into {} addresses", parts.len());

    for part in parts {
        let validity = Validity::from_bool(is_valid_address(&part));
        rows.push(classified_row(part, validity, RowOrigin::Recovered));
    }
}

fn classified_row(address: String, validity: Validity, origin: RowOrigin) -> OutputRow {
    match validity {
        Validity::Valid => {
            let fields = enrich(&address);
            OutputRow::valid(address, fields, origin)
        }
        Validity::Invalid => OutputRow::invalid(address, origin),
    }
}
