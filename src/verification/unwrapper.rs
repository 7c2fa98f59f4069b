use log::warn;

pub const PRIMARY_MARKER: &str = "---------- Forwarded message ----------";

/// Forward markers in priority order. The first one present anywhere in the body
/// wins, regardless of where in the body the others appear.
pub const FORWARD_MARKERS: &[&str] = &[
    PRIMARY_MARKER,
    "---------- Forwarded message ---------",
    "Begin forwarded message:",
    "-----Original Message-----",
    "----- Original Message -----",
];

pub fn find_marker(body: &str) -> Option<&'static str> {
    FORWARD_MARKERS.iter().copied().find(|marker| body.contains(marker))
}

pub fn contains_marker(body: &str) -> bool {
    find_marker(body).is_some()
}

/// Returns the forwarded block, marker included, or the whole body when no
/// marker is present.
pub fn unwrap(body: &str) -> &str {
    match find_marker(body).and_then(|marker| body.find(marker)) {
        Some(start) => &body[start..],
        None => {
            warn!("No forwarded email marker found. Returning full body.");
            body
        }
    }
}

/// Joins lines that quoted-printable transport split mid-word.
pub fn repair_soft_breaks(text: &str) -> String {
    text.replace("=\r\n", "")
        .replace("=\n", "")
        .replace("\\\r\n", "")
        .replace("\\\n", "")
}

/// Unwrap followed by soft break repair: the text handed to the extractors.
pub fn forwarded_text(body: &str) -> String {
    repair_soft_breaks(unwrap(body))
}
