use serde::Serialize;

pub const STANDARD_KEY_PREFIX: &str = "standard_";
pub const CUSTOM_KEY_PREFIX: &str = "custom_";

/// Name segment substituted when sanitization leaves nothing usable.
const UNKNOWN_NAME: &str = "unknown";
const MAX_NAME_SEGMENT: usize = 50;

/// Whether a network is known to the external catalogue or user-defined.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum NetworkType {
    Standard,
    Custom,
}

/// Builds the deterministic identifying key `<type>_<sanitized-name>_<chain_id>`.
///
/// Total over all inputs; the name segment is normalized by [`sanitize_name`].
pub fn generate_key(network_type: NetworkType, name: &str, chain_id: u64) -> String {
    format!("{network_type}_{}_{chain_id}", sanitize_name(name))
}

/// Normalizes a display name into a key segment: lowercase, every maximal run
/// of characters outside `[a-z0-9]` collapsed into one underscore, no leading
/// or trailing underscore, `"unknown"` when nothing survives, at most 50
/// characters. Idempotent.
pub fn sanitize_name(name: &str) -> String {
    let mut collapsed = String::with_capacity(name.len());
    for ch in name.to_lowercase().chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            collapsed.push(ch);
        } else if !collapsed.ends_with('_') {
            collapsed.push('_');
        }
    }

    let trimmed = collapsed.trim_matches('_');
    if trimmed.is_empty() {
        return UNKNOWN_NAME.to_string();
    }

    let mut segment: String = trimmed.chars().take(MAX_NAME_SEGMENT).collect();
    // the cut can expose a separator that was mid-run before truncation
    while segment.ends_with('_') {
        segment.pop();
    }
    segment
}

pub fn is_standard_key(key: &str) -> bool {
    key.starts_with(STANDARD_KEY_PREFIX)
}

pub fn is_custom_key(key: &str) -> bool {
    key.starts_with(CUSTOM_KEY_PREFIX)
}

/// Resolves the network type encoded in a key. Keys without a recognized
/// prefix (legacy entries persisted before type metadata existed) resolve to
/// [`NetworkType::Custom`].
pub fn network_type_from_key(key: &str) -> NetworkType {
    if is_standard_key(key) {
        NetworkType::Standard
    } else {
        NetworkType::Custom
    }
}
