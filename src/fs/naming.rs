//! Filename normalization and sanitation.

use crate::error::{Error, Result};

/// Extensions used for common media types in preference to whatever sorts
/// first in the MIME database (which yields `jfif` for JPEG).
const PREFERRED_EXTENSIONS: &[(&str, &str)] = &[
    ("image/jpeg", "jpg"),
    ("image/jpg", "jpg"),
    ("image/png", "png"),
    ("image/gif", "gif"),
    ("image/webp", "webp"),
    ("image/heic", "heic"),
    ("image/heif", "heif"),
    ("image/tiff", "tiff"),
    ("image/bmp", "bmp"),
    ("video/mp4", "mp4"),
    ("video/quicktime", "mov"),
    ("video/x-m4v", "m4v"),
    ("video/webm", "webm"),
    ("video/3gpp", "3gp"),
    ("video/mpeg", "mpeg"),
    ("video/x-msvideo", "avi"),
];

/// Make a filename's extension agree with its declared MIME type.
///
/// Any extension other than the type's canonical one is replaced, including
/// aliases (`jpeg` for `image/jpeg`) and case variants (`JPG`). A name without
/// an extension gets one appended. An unrecognized type leaves the name as is.
pub fn normalize_filename(filename: &str, mime_type: &str) -> String {
    let essence = mime_essence(mime_type);
    let Some(canonical) = canonical_extension(&essence) else {
        return filename.to_string();
    };

    let (stem, current) = split_extension(filename);

    if current == Some(canonical) {
        return filename.to_string();
    }

    format!("{}.{}", stem, canonical)
}

/// Lowercased `type/subtype` with any parameters dropped.
fn mime_essence(mime_type: &str) -> String {
    mime_type
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase()
}

/// Canonical extension for a MIME type, without the dot.
pub fn canonical_extension(mime_type: &str) -> Option<&'static str> {
    let essence = mime_essence(mime_type);
    PREFERRED_EXTENSIONS
        .iter()
        .find(|(mime, _)| *mime == essence)
        .map(|(_, ext)| *ext)
        .or_else(|| known_extensions(&essence).first().copied())
}

fn known_extensions(essence: &str) -> &'static [&'static str] {
    mime_guess::get_mime_extensions_str(essence).unwrap_or(&[])
}

/// Split `name.ext` into (`name`, `Some("ext")`).
///
/// A leading dot (`.hidden`) or trailing dot is not an extension.
fn split_extension(filename: &str) -> (&str, Option<&str>) {
    match filename.rfind('.') {
        Some(idx) if idx > 0 && idx + 1 < filename.len() => {
            (&filename[..idx], Some(&filename[idx + 1..]))
        }
        _ => (filename, None),
    }
}

/// Make a server-supplied filename safe to join under a month folder.
///
/// Path separators and characters invalid on common filesystems become `_`.
/// Names that would resolve to the folder itself or its parent are rejected.
pub fn sanitize_filename(name: &str) -> Result<String> {
    let sanitized: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    let trimmed = sanitized.trim();
    if trimmed.is_empty() || trimmed == "." || trimmed == ".." {
        return Err(Error::InvalidFilename(format!(
            "'{}' cannot be used as a file name",
            name
        )));
    }

    Ok(sanitized)
}
