//! Text-to-value coercions for timestamp, integer, and boolean fields.
//!
//! Monetary coercion lives in [`crate::money`]; the coercions here cover
//! the remaining raw-text field kinds.

use time::macros::{format_description, offset};
use time::{OffsetDateTime, PrimitiveDateTime, UtcOffset};

use crate::error::CoercionError;

/// Parse the fixed notification timestamp layout `HH:MM:SS Mon D, YYYY TZ`
/// (e.g. `13:45:00 Jan 5, 2021 PST`).
///
/// The trailing zone abbreviation is mapped to a fixed UTC offset; the
/// provider emits US Pacific time, with the other common abbreviations
/// accepted for completeness.
pub fn to_timestamp(text: &str) -> Result<OffsetDateTime, CoercionError> {
    // Collapse runs of whitespace so space-padded single-digit days parse.
    let cleaned: String = text.split_whitespace().collect::<Vec<_>>().join(" ");

    let (datetime_text, zone) = cleaned
        .rsplit_once(' ')
        .ok_or_else(|| CoercionError::BadTimestamp {
            text: text.to_owned(),
        })?;

    // Layout first, zone second: arbitrary garbage should report a
    // layout failure, not whatever its last word looks like as a zone.
    let layout = format_description!(
        "[hour]:[minute]:[second] [month repr:short] [day padding:none], [year]"
    );
    let parsed =
        PrimitiveDateTime::parse(datetime_text, layout).map_err(|_| CoercionError::BadTimestamp {
            text: text.to_owned(),
        })?;

    let offset = zone_offset(zone).ok_or_else(|| CoercionError::UnknownTimeZone {
        zone: zone.to_owned(),
    })?;

    Ok(parsed.assume_offset(offset))
}

/// Fixed UTC offset for a provider time zone abbreviation.
fn zone_offset(zone: &str) -> Option<UtcOffset> {
    match zone.to_ascii_uppercase().as_str() {
        "PST" => Some(offset!(-8)),
        "PDT" | "MST" => Some(offset!(-7)),
        "MDT" | "CST" => Some(offset!(-6)),
        "CDT" | "EST" => Some(offset!(-5)),
        "EDT" => Some(offset!(-4)),
        "GMT" | "UTC" => Some(offset!(UTC)),
        _ => None,
    }
}

/// Parse an integer field.
pub fn to_int(text: &str) -> Result<i64, CoercionError> {
    text.trim()
        .parse::<i64>()
        .map_err(|_| CoercionError::BadInt {
            text: text.to_owned(),
        })
}

/// Normalize a boolean field from its common textual spellings.
pub fn to_bool(text: &str) -> Result<bool, CoercionError> {
    match text.trim().to_ascii_lowercase().as_str() {
        "true" | "t" | "1" | "yes" => Ok(true),
        "false" | "f" | "0" | "no" => Ok(false),
        _ => Err(CoercionError::BadBool {
            text: text.to_owned(),
        }),
    }
}
