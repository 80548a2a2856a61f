use super::ChartOptionsDocument;

/// Label published on a tick: the prefix immediately followed by the
/// wall-clock seconds, without separator or padding.
#[must_use]
pub fn tick_label(prefix: &str, seconds: u32) -> String {
    format!("{prefix}{seconds}")
}

/// Computes the document that replaces `current` on a tick.
#[must_use]
pub fn next_document(
    current: &ChartOptionsDocument,
    prefix: &str,
    seconds: u32,
) -> ChartOptionsDocument {
    current.relabeled(&tick_label(prefix, seconds))
}
