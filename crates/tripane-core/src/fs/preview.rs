//! Bounded text previews.
//!
//! Files are never read past a caller-supplied byte limit. Decoding
//! strips terminal escape sequences and control characters and detects
//! binary content by looking for NUL bytes.

use std::fs;
use std::io::Read;
use std::path::Path;

use crate::error::{CoreError, CoreResult};

/// The number of leading bytes inspected for binary (NUL byte) detection.
const BINARY_CHECK_SIZE: usize = 8192;

/// A decoded, size-bounded text preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextPreview {
    /// Sanitised text. Never longer than the requested maximum in bytes.
    pub text: String,
    /// `true` when the file holds more than was read.
    pub is_truncated: bool,
}

/// Returns `true` if `path` has an extension from `extensions` (case-insensitive).
///
/// Entries in `extensions` are given without the leading dot.
pub fn is_previewable(path: &Path, extensions: &[String]) -> bool {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return false;
    };
    extensions.iter().any(|allowed| allowed.eq_ignore_ascii_case(ext))
}

/// Reads at most `limit` bytes from the start of the file at `path`.
///
/// # Errors
///
/// - [`CoreError::NotFound`] / [`CoreError::PermissionDenied`] when the file can't be opened.
/// - [`CoreError::Io`] on read failures.
pub fn read_head(path: &Path, limit: u64) -> CoreResult<Vec<u8>> {
    let file = fs::File::open(path).map_err(|e| CoreError::from_io(e, path))?;
    let mut buf = Vec::new();
    file.take(limit).read_to_end(&mut buf)?;
    Ok(buf)
}

/// Decodes up to `max_bytes` of `bytes` into a [`TextPreview`].
///
/// `bytes` may hold more than `max_bytes`; anything past the limit only
/// marks the preview as truncated. A UTF-8 sequence cut off by the limit
/// is dropped rather than replaced. Returns `None` for binary content.
pub fn decode_text(bytes: &[u8], max_bytes: usize) -> Option<TextPreview> {
    if is_binary(bytes) {
        return None;
    }

    let is_truncated = bytes.len() > max_bytes;
    let mut slice = &bytes[..bytes.len().min(max_bytes)];
    if is_truncated {
        if let Err(e) = std::str::from_utf8(slice) {
            if e.error_len().is_none() {
                slice = &slice[..e.valid_up_to()];
            }
        }
    }

    let mut text = strip_control_sequences(&String::from_utf8_lossy(slice));
    // U+FFFD is 3 bytes, so lossy decoding of invalid input can grow it
    if text.len() > max_bytes {
        let mut cut = max_bytes;
        while !text.is_char_boundary(cut) {
            cut -= 1;
        }
        text.truncate(cut);
    }

    Some(TextPreview { text, is_truncated })
}

/// Returns `true` if the first 8 KB of `bytes` contain a NUL byte.
pub fn is_binary(bytes: &[u8]) -> bool {
    bytes[..bytes.len().min(BINARY_CHECK_SIZE)].contains(&0)
}

/// Strips ANSI escape sequences and control characters, keeping `\n` and `\t`.
///
/// Handles CSI sequences (`\x1b[...`), OSC sequences (`\x1b]...\x07`),
/// and single-character escape codes. The output is never longer than the input.
fn strip_control_sequences(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\x1b' {
            match chars.peek() {
                // CSI: \x1b[ ... <letter>
                Some('[') => {
                    chars.next();
                    while let Some(next) = chars.next() {
                        if next.is_ascii_alphabetic() {
                            break;
                        }
                    }
                }
                // OSC: \x1b] ... (\x07 | \x1b\\)
                Some(']') => {
                    chars.next();
                    while let Some(next) = chars.next() {
                        if next == '\x07' {
                            break;
                        }
                        if next == '\x1b' && chars.peek() == Some(&'\\') {
                            chars.next();
                            break;
                        }
                    }
                }
                Some(_) => {
                    chars.next();
                }
                None => {}
            }
        } else if c == '\n' || c == '\t' || !c.is_control() {
            result.push(c);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn exts(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn previewable_matches_allow_list() {
        let allowed = exts(&["txt", "md"]);
        assert!(is_previewable(Path::new("/a/c.txt"), &allowed));
        assert!(is_previewable(Path::new("/a/README.MD"), &allowed));
        assert!(!is_previewable(Path::new("/a/photo.png"), &allowed));
        assert!(!is_previewable(Path::new("/a/Makefile"), &allowed));
    }

    #[test]
    fn read_head_respects_limit() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("big.txt");
        fs::write(&path, "a".repeat(10_000)).unwrap();

        let bytes = read_head(&path, 100).unwrap();
        assert_eq!(bytes.len(), 100);
    }

    #[test]
    fn read_head_short_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("small.txt");
        fs::write(&path, "hi").unwrap();

        assert_eq!(read_head(&path, 100).unwrap(), b"hi");
    }

    #[test]
    fn read_head_missing_returns_not_found() {
        let tmp = TempDir::new().unwrap();
        let result = read_head(&tmp.path().join("missing.txt"), 10);
        assert!(matches!(result.unwrap_err(), CoreError::NotFound(_)));
    }

    #[test]
    fn decode_text_within_limit() {
        let preview = decode_text(b"line 1\nline 2\n", 64).unwrap();
        assert_eq!(preview.text, "line 1\nline 2\n");
        assert!(!preview.is_truncated);
    }

    #[test]
    fn decode_text_truncates_to_limit() {
        let bytes = "x".repeat(101);
        let preview = decode_text(bytes.as_bytes(), 100).unwrap();
        assert_eq!(preview.text.len(), 100);
        assert!(preview.is_truncated);
    }

    #[test]
    fn decode_text_exact_limit_is_not_truncated() {
        let bytes = "x".repeat(100);
        let preview = decode_text(bytes.as_bytes(), 100).unwrap();
        assert!(!preview.is_truncated);
    }

    #[test]
    fn decode_text_drops_split_utf8_sequence() {
        // "한" is 3 bytes; limit falls inside the second character
        let bytes = "한한".as_bytes();
        let preview = decode_text(bytes, 4).unwrap();
        assert_eq!(preview.text, "한");
        assert!(preview.is_truncated);
    }

    #[test]
    fn decode_text_binary_returns_none() {
        assert!(decode_text(b"\x7fELF\x00\x01", 64).is_none());
    }

    #[test]
    fn decode_text_strips_ansi() {
        let preview = decode_text(b"\x1b[31mred\x1b[0m plain\tTab", 64).unwrap();
        assert_eq!(preview.text, "red plain\tTab");
    }

    #[test]
    fn decode_text_invalid_utf8_never_exceeds_limit() {
        let bytes = vec![0xffu8; 10];
        let preview = decode_text(&bytes, 10).unwrap();
        assert!(preview.text.len() <= 10);
    }

    #[test]
    fn is_binary_empty_is_text() {
        assert!(!is_binary(b""));
    }

    #[test]
    fn is_binary_ignores_nul_past_check_window() {
        let mut bytes = vec![b'a'; BINARY_CHECK_SIZE];
        bytes.push(0);
        assert!(!is_binary(&bytes));
    }

    #[test]
    fn strip_osc_sequence() {
        assert_eq!(
            strip_control_sequences("\x1b]0;title\x07after"),
            "after".to_string()
        );
    }

    #[test]
    fn strip_removes_carriage_returns() {
        assert_eq!(strip_control_sequences("a\r\nb"), "a\nb");
    }
}
