//! Label derivation helpers: local names, provenance tags and weights.

use std::collections::BTreeSet;

/// Extract the local name of a URI.
///
/// - `None` yields an empty string.
/// - With a `#` that is not the last character, the text after the last `#`.
/// - Otherwise, a trailing `/` removes the last *two* characters, and the text
///   after the last remaining `/` is taken.
/// - Without any separator the input is returned unchanged.
///
/// # Example
///
/// ```
/// use alignviz::export::extract_local_name;
///
/// assert_eq!(extract_local_name(Some("http://ex.org/ns#Foo")), "Foo");
/// assert_eq!(extract_local_name(Some("http://ex.org/a/bc/")), "b");
/// assert_eq!(extract_local_name(Some("plainToken")), "plainToken");
/// assert_eq!(extract_local_name(None), "");
/// ```
pub fn extract_local_name(uri: Option<&str>) -> String {
    let Some(uri) = uri else {
        return String::new();
    };

    if let Some(pos) = uri.rfind('#') {
        if pos + 1 < uri.len() {
            return uri[pos + 1..].to_string();
        }
    }

    // Existing exports depend on the two-character trim; keep it.
    let trimmed = if uri.ends_with('/') {
        drop_last_chars(uri, 2)
    } else {
        uri
    };

    match trimmed.rfind('/') {
        Some(pos) => trimmed[pos + 1..].to_string(),
        None => uri.to_string(),
    }
}

fn drop_last_chars(s: &str, n: usize) -> &str {
    match s.char_indices().rev().nth(n - 1) {
        Some((pos, _)) => &s[..pos],
        None => "",
    }
}

/// Label for an identifier: its local name, or the raw id when that is blank.
pub fn display_label(id: &str) -> String {
    label_or_fallback(extract_local_name(Some(id)), id)
}

pub(crate) fn label_or_fallback(local_name: String, fallback: &str) -> String {
    if local_name.trim().is_empty() {
        fallback.to_string()
    } else {
        local_name
    }
}

/// Render provenance tags as `[m1,m2]`, or an empty string when there are none.
pub fn format_model_ids(model_ids: &BTreeSet<String>) -> String {
    if model_ids.is_empty() {
        return String::new();
    }
    let joined = model_ids.iter().map(String::as_str).collect::<Vec<_>>().join(",");
    format!("[{joined}]")
}

/// Round half away from zero to two fractional digits.
///
/// Values too large to carry a fractional part are returned unchanged.
pub fn round_two_decimals(value: f64) -> f64 {
    const NO_FRACTION: f64 = 4_503_599_627_370_496.0; // 2^52
    let scaled = value * 100.0;
    if !scaled.is_finite() || value.abs() >= NO_FRACTION {
        return value;
    }
    scaled.round() / 100.0
}

/// Render a weight as `w=<value>` with at most two decimals and no padding zeros.
pub fn format_weight(weight: f64) -> String {
    let rounded = round_two_decimals(weight);
    // avoid "-0"
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("w={rounded}")
}
