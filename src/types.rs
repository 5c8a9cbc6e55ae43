//! Core types for classified output rows

use serde::{Deserialize, Serialize};
use std::fmt;

/// Validity of a single address
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Validity {
    Valid,
    Invalid,
}

impl Validity {
    #[must_use]
    pub const fn from_bool(valid: bool) -> Self {
        if valid { Self::Valid } else { Self::Invalid }
    }

    #[must_use]
    pub const fn is_valid(self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// Fields derived from the domain of a valid address
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EnrichedFields {
    /// Capitalized first domain label
    pub company_name: String,

    /// `https://` plus the full domain
    pub website: String,
}

/// Where a row came from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RowOrigin {
    /// Input entry written as-is
    Input,

    /// Address recovered by splitting the preceding input row
    Recovered,
}

/// One line of the output table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputRow {
    /// Address text, verbatim from the input or the split
    pub address: String,

    /// Result of validation
    pub validity: Validity,

    /// Present exactly when `validity` is valid
    pub enrichment: Option<EnrichedFields>,

    /// Input entry or recovered sub-address
    pub origin: RowOrigin,
}

impl OutputRow {
    /// Valid row carrying its enrichment
    #[must_use]
    pub const fn valid(address: String, enrichment: EnrichedFields, origin: RowOrigin) -> Self {
        Self {
            address,
            validity: Validity::Valid,
            enrichment: Some(enrichment),
            origin,
        }
    }

    /// Invalid row with empty enrichment
    #[must_use]
    pub const fn invalid(address: String, origin: RowOrigin) -> Self {
        Self {
            address,
            validity: Validity::Invalid,
            enrichment: None,
            origin,
        }
    }

    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.validity.is_valid()
    }

    /// Company name, or an empty string for invalid rows
    #[must_use]
    pub fn company_name(&self) -> &str {
        self.enrichment
            .as_ref()
            .map_or("", |fields| fields.company_name.as_str())
    }

    /// Website, or an empty string for invalid rows
    #[must_use]
    pub fn website(&self) -> &str {
        self.enrichment
            .as_ref()
            .map_or("", |fields| fields.website.as_str())
    }
}

/// Count of valid and invalid rows
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Summary {
    pub valid: usize,
    pub invalid: usize,
}

impl Summary {
    /// Tally a finished row sequence
    #[must_use]
    pub fn tally(rows: &[OutputRow]) -> Self {
        let valid = rows.iter().filter(|row| row.is_valid()).count();
        Self {
            valid,
            invalid: rows.len() - valid,
        }
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.valid + self.invalid
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation Summary:")?;
        writeln!(f, "Valid emails: {}", self.valid)?;
        write!(f, "Invalid emails: {}", self.invalid)
    }
}
