//! Field-default policy shared by client and grant writes: optional text
//! fields persist as empty strings, never NULL.

pub(crate) fn or_empty(v: Option<String>) -> String {
    v.unwrap_or_default()
}

/// Falls back to `label` when the value is absent or blank.
pub(crate) fn or_label(v: Option<String>, label: &str) -> String {
    match v {
        Some(s) if !s.trim().is_empty() => s,
        _ => label.to_string(),
    }
}

/// Falls back when the value is absent or zero.
pub(crate) fn or_pct(v: Option<i32>, fallback: i32) -> i32 {
    match v {
        Some(p) if p != 0 => p,
        _ => fallback,
    }
}
