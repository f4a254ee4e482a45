//! Storage key generation for uploaded files.
//!
//! Keys are `<epoch-millis>-<file name>`. Two uploads of the same name in
//! the same millisecond collide and the later one wins.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::CoreError;
use crate::types::now_epoch_millis;

/// Prefix of the public retrieval path for stored uploads.
pub const PUBLIC_IMAGE_PATH: &str = "/api/images";

/// Bytes left unescaped in a URL path segment (RFC 3986 unreserved).
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Content type recorded when the client does not send one.
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Reduce a client-supplied file name to its final path component.
///
/// Browsers normally send a bare name, but some clients send a full path
/// with either separator.
pub fn sanitize_file_name(raw: &str) -> Result<String, CoreError> {
    let name = raw
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .trim();

    if name.is_empty() || name == "." || name == ".." {
        return Err(CoreError::Validation("File name is empty".into()));
    }
    Ok(name.to_string())
}

/// Build the storage key for `file_name` at the given millisecond instant.
pub fn storage_key_at(millis: i64, file_name: &str) -> String {
    format!("{millis}-{file_name}")
}

/// Build the storage key for `file_name` at the current instant.
pub fn storage_key(file_name: &str) -> String {
    storage_key_at(now_epoch_millis(), file_name)
}

/// Relative URL under which a stored key is served. The key is
/// percent-encoded as a single path segment.
pub fn public_url(key: &str) -> String {
    format!("{PUBLIC_IMAGE_PATH}/{}", utf8_percent_encode(key, PATH_SEGMENT))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn key_is_millis_dash_name() {
        assert_eq!(
            storage_key_at(1_700_000_000_123, "logo.png"),
            "1700000000123-logo.png"
        );
    }

    #[test]
    fn current_key_uses_millisecond_prefix() {
        let key = storage_key("a.jpg");
        let (prefix, rest) = key.split_once('-').unwrap();
        assert_eq!(rest, "a.jpg");
        // Millisecond timestamps are 13 digits for the foreseeable future.
        assert_eq!(prefix.len(), 13);
        assert!(prefix.parse::<i64>().is_ok());
    }

    #[test]
    fn sanitize_strips_directories() {
        assert_eq!(sanitize_file_name("photo.jpg").unwrap(), "photo.jpg");
        assert_eq!(sanitize_file_name("/tmp/x/photo.jpg").unwrap(), "photo.jpg");
        assert_eq!(sanitize_file_name("C:\\Users\\me\\photo.jpg").unwrap(), "photo.jpg");
    }

    #[test]
    fn sanitize_rejects_empty_names() {
        assert_matches!(sanitize_file_name(""), Err(CoreError::Validation(_)));
        assert_matches!(sanitize_file_name("dir/"), Err(CoreError::Validation(_)));
        assert_matches!(sanitize_file_name("../.."), Err(CoreError::Validation(_)));
    }

    #[test]
    fn public_url_is_relative() {
        assert_eq!(public_url("1-a.png"), "/api/images/1-a.png");
    }

    #[test]
    fn public_url_escapes_reserved_characters() {
        assert_eq!(public_url("1-a#b.png"), "/api/images/1-a%23b.png");
        assert_eq!(public_url("1-q?x=1.png"), "/api/images/1-q%3Fx%3D1.png");
        assert_eq!(public_url("1-100%25.png"), "/api/images/1-100%2525.png");
        assert_eq!(public_url("1-my photo.png"), "/api/images/1-my%20photo.png");
    }
}
