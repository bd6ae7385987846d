//! Byte classification used by the scanners and the inline highlighter.

const fn byte_set(bytes: &[u8]) -> [bool; 256] {
    let mut a = [false; 256];
    let mut i = 0;
    while i < bytes.len() {
        a[bytes[i] as usize] = true;
        i += 1;
    }
    a
}

/// Punctuation that a backslash escapes.
pub const ESCAPABLE_BYTES: &[u8] = b"\\`*_{}[]()#+-.!~|^";

static ESCAPABLE: [bool; 256] = byte_set(ESCAPABLE_BYTES);

#[inline]
pub fn isdigit(ch: u8) -> bool {
    ch.is_ascii_digit()
}

#[inline]
pub fn isalnum(ch: u8) -> bool {
    ch.is_ascii_alphanumeric()
}

#[inline]
pub fn isescapable(ch: u8) -> bool {
    ESCAPABLE[ch as usize]
}
