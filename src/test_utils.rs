use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use proptest::prelude::*;
use uuid::Uuid;

/// Format the listing service uses for `createdAt`: the offset appears twice
pub const SERVICE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f %z %z";

/// Generates a lowercase hyphenated UUID string
pub fn arb_uuid() -> impl Strategy<Value = String> {
    any::<u128>().prop_map(|n| Uuid::from_u128(n).hyphenated().to_string())
}

/// Generates a timestamp with microsecond precision and a whole-minute offset
///
/// Years are kept within 1970..=2200 so `%Y` always prints four digits.
pub fn arb_service_datetime() -> impl Strategy<Value = DateTime<FixedOffset>> {
    (0i64..7_258_118_400, 0u32..1_000_000, -720i32..=840).prop_map(
        |(secs, micros, offset_minutes)| {
            let offset = FixedOffset::east_opt(offset_minutes * 60).unwrap();
            let utc = Utc.timestamp_opt(secs, micros * 1_000).unwrap();
            utc.with_timezone(&offset)
        },
    )
}

/// Renders a timestamp the way the listing service does
pub fn service_timestamp(dt: &DateTime<FixedOffset>) -> String {
    dt.format(SERVICE_TIMESTAMP_FORMAT).to_string()
}
