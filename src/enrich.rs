//! Company and website guesses derived from an address domain

use crate::types::EnrichedFields;

fn domain_of(email: &str) -> Option<&str> {
    email.split_once('@').map(|(_, domain)| domain)
}

/// Capitalized first domain label, e.g. `info@acme.org` -> `Acme`.
///
/// Returns an empty string when the address has no `@`.
#[must_use]
pub fn company_name(email: &str) -> String {
    let Some(domain) = domain_of(email) else {
        return String::new();
    };

    let label = domain.split('.').next().unwrap_or_default();
    let mut chars = label.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Website guess for the full domain, e.g. `info@acme.org` -> `https://acme.org`.
///
/// Returns an empty string when the address has no `@`.
#[must_use]
pub fn website(email: &str) -> String {
    domain_of(email).map_or_else(String::new, |domain| format!("https://{domain}"))
}

/// Both derived fields for one address
#[must_use]
pub fn enrich(email: &str) -> EnrichedFields {
    EnrichedFields {
        company_name: company_name(email),
        website: website(email),
    }
}
