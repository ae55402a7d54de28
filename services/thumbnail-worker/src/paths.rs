//! Key handling for originals and thumbnails.
//!
//! Thumbnail keys are a pure function of target width and the original's
//! filename component, so the listing side can reproduce them without any
//! lookup.

use std::borrow::Cow;

/// Namespace for derived thumbnails. Objects under it are never reprocessed.
pub const THUMBNAIL_PREFIX: &str = "thumbnails/";

/// The two fixed target widths, in logical pixels.
pub const THUMB_SMALL_WIDTH: u32 = 200;
pub const THUMB_LARGE_WIDTH: u32 = 400;

/// Reverses the escaping applied to object keys in storage notifications:
/// `+` encodes a space, the rest is percent-encoded.
pub fn decode_object_key(raw: &str) -> String {
    let plus_decoded = raw.replace('+', " ");
    match urlencoding::decode(&plus_decoded) {
        Ok(Cow::Borrowed(_)) => plus_decoded,
        Ok(Cow::Owned(decoded)) => decoded,
        // Keys with stray `%` bytes are passed through as-is.
        Err(_) => plus_decoded,
    }
}

/// Whether a key falls under the thumbnail namespace.
pub fn is_thumbnail_key(key: &str) -> bool {
    key.starts_with(THUMBNAIL_PREFIX)
}

/// Final path segment of an object key.
pub fn file_name_of(key: &str) -> &str {
    key.rsplit('/').next().unwrap_or(key)
}

/// Storage key of the thumbnail for `width` derived from an original key.
pub fn thumbnail_key(width: u32, original_key: &str) -> String {
    format!("{THUMBNAIL_PREFIX}{width}/{}", file_name_of(original_key))
}
