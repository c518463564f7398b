use uuid::Uuid;

/// Length of the canonical hyphenated UUID form (8-4-4-4-12)
const HYPHENATED_LEN: usize = 36;

/// Byte offsets of the hyphens in the hyphenated form
const HYPHEN_OFFSETS: [usize; 4] = [8, 13, 18, 23];

/// Finds the first UUID embedded in a piece of free text
///
/// The listing service reports a new item's id only inside a human-readable
/// status message, so the id has to be fished out of it. Only the canonical
/// 8-4-4-4-12 hex grouping is recognised, in either letter case.
///
/// ### Arguments
///
/// * `text` - Arbitrary UTF-8 text
///
/// ### Returns
///
/// The matching slice of `text`, or `None` when no UUID is present
pub fn extract_uuid(text: &str) -> Option<&str> {
    let bytes = text.as_bytes();
    if bytes.len() < HYPHENATED_LEN {
        return None;
    }

    (0..=bytes.len() - HYPHENATED_LEN)
        .find(|&start| is_hyphenated_uuid(&bytes[start..start + HYPHENATED_LEN]))
        // A match is pure ASCII, so both ends fall on char boundaries.
        .map(|start| &text[start..start + HYPHENATED_LEN])
}

fn is_hyphenated_uuid(window: &[u8]) -> bool {
    HYPHEN_OFFSETS.iter().all(|&offset| window[offset] == b'-')
        && Uuid::try_parse_ascii(window).is_ok()
}

/// Derives an id that almost certainly does not exist from one that does
///
/// The last character is advanced by one step within its class: digits
/// cycle `0..=9`, letters advance alphabetically and wrap from `z` to `a`
/// (`Z` to `A` for uppercase). Any other trailing character is left as is.
///
/// Advancing `f` yields `g`, so the result is not always a valid UUID. Probing
/// the service with it still exercises its not-found handling.
pub fn next_uuid(uuid: &str) -> String {
    let mut chars = uuid.chars();
    let Some(last) = chars.next_back() else {
        return String::new();
    };

    let mut next = String::with_capacity(uuid.len());
    next.push_str(chars.as_str());
    next.push(advance(last));
    next
}

fn advance(c: char) -> char {
    match c {
        '0'..='8' | 'a'..='y' | 'A'..='Y' => char::from(c as u8 + 1),
        '9' => '0',
        'z' => 'a',
        'Z' => 'A',
        other => other,
    }
}
