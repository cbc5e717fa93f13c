use lazy_static::lazy_static;
use regex::Regex;

use crate::utils::NonBlankExtension;

lazy_static! {
    static ref SEPARATORS: Regex = Regex::new(r"[\s,]+").expect("Could not create regex");
    // Greedy prefix so the last street type wins
    static ref STREET_PREFIX: Regex = Regex::new(
        r"(?i)^.*\b(?:STREET|ROAD|AVENUE|DRIVE|COURT|CRESCENT|LANE|HIGHWAY|PARADE|PLACE|BOULEVARD|TERRACE|WAY|CLOSE|ESPLANADE)\s+"
    )
    .expect("Could not create regex");
}

/// Derives the locality from a free-form street address.
///
/// Commas and whitespace runs collapse to single spaces, then everything up to
/// and including the last street type (case-insensitive) is dropped. Without a
/// street type the whole normalised address is returned. Casing is kept as
/// given. Returns `None` for a missing or blank address.
pub fn extract_suburb(address: Option<&str>) -> Option<String> {
    let address = address.non_blank()?;
    let normalized = SEPARATORS.replace_all(address, " ");
    let normalized = normalized.trim();

    let suburb = STREET_PREFIX.replace(normalized, "");
    Some(suburb.trim().to_string()).non_blank()
}
