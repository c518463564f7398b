use chrono::{DateTime, FixedOffset};

use crate::errors::TimestampError;

/// Number of trailing characters dropped before parsing
///
/// The service renders `createdAt` as `2024-08-26 12:25:39.590519 +0300 +0300`,
/// i.e. with the offset repeated. It is unclear whether the repetition is a
/// service defect; either way the trailing copy is cut off.
pub const TIMEZONE_SUFFIX_LEN: usize = 6;

/// Layout of what remains once the suffix is gone
pub const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f %z";

/// Parses a `createdAt` value returned by the listing service
///
/// The last [`TIMEZONE_SUFFIX_LEN`] characters are discarded unconditionally,
/// then the rest must match [`CREATED_AT_FORMAT`]. A value that does not fit
/// is an error; there is no fallback format.
///
/// ### Arguments
///
/// * `raw` - The timestamp exactly as the service sent it
///
/// ### Returns
///
/// The parsed timestamp in its own offset
pub fn parse_created_at(raw: &str) -> Result<DateTime<FixedOffset>, TimestampError> {
    let trimmed = strip_timezone_suffix(raw);
    DateTime::parse_from_str(trimmed, CREATED_AT_FORMAT).map_err(|source| TimestampError {
        input: raw.to_string(),
        source,
    })
}

/// Drops the last [`TIMEZONE_SUFFIX_LEN`] characters, or everything if shorter
fn strip_timezone_suffix(raw: &str) -> &str {
    let cut = raw
        .char_indices()
        .rev()
        .nth(TIMEZONE_SUFFIX_LEN - 1)
        .map_or(0, |(index, _)| index);
    &raw[..cut]
}
