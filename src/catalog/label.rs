/// Build the display label for `identifier`.
///
/// Only the last `/`-separated segment is shown. A trailing `suffix` is
/// removed if present, then every underscore becomes a space.
pub fn display_label(identifier: &str, suffix: &str) -> String {
    let name = identifier.rsplit('/').next().unwrap_or(identifier);
    let name = if suffix.is_empty() {
        name
    } else {
        name.strip_suffix(suffix).unwrap_or(name)
    };
    name.replace('_', " ")
}

/// Join the media `prefix` and an identifier into the locator handed to the
/// audio output. The identifier is not escaped.
pub fn resource_locator(prefix: &str, identifier: &str) -> String {
    format!("{}/{}", prefix.trim_end_matches('/'), identifier)
}
