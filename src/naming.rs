//! Deterministic filenames for downloaded images.

/// Characters that are illegal in a filename on at least one common filesystem.
const ILLEGAL_CHARS: [char; 9] = ['\\', '/', ':', '*', '?', '"', '<', '>', '|'];
const DEFAULT_EXTENSION: &str = ".png";

/// Replaces every illegal character with `_` and trims surrounding whitespace.
#[inline]
pub fn sanitize_name(name: &str) -> String {
    name.replace(ILLEGAL_CHARS, "_").trim().to_string()
}

/// Returns the extension (dot included, case preserved) of the last path segment of `url`.
/// The scheme, host, query string and fragment are ignored. Falls back to `.png`.
pub fn infer_extension(url: &str) -> &str {
    let url = url.split(['?', '#']).next().unwrap_or_default();
    let path = match url.split_once("://") {
        Some((_, rest)) => rest.find('/').map_or("", |slash| &rest[slash..]),
        None => url,
    };
    let segment = path.rsplit('/').next().unwrap_or_default();

    match segment.rfind('.') {
        Some(dot) if dot + 1 < segment.len() => &segment[dot..],
        _ => DEFAULT_EXTENSION,
    }
}

/// `{sanitized index}_{sanitized name}{extension}`
///
/// Both parts come from the remote catalog, so both are sanitized: the result is
/// always a single path component.
pub fn build_filename(index: &str, name: &str, url: &str) -> String {
    format!(
        "{}_{}{}",
        sanitize_name(index),
        sanitize_name(name),
        infer_extension(url)
    )
}
