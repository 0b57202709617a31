//! C ABI for hosts that load this crate as a shared library.
//!
//! A host calls [`cedict_load_dictionary`] once at startup, then
//! [`cedict_get_pinyin`] / [`cedict_get_pinyin_initials`] per request. Results
//! are copied into a caller-owned buffer and silently truncated to its size,
//! which may cut a multi-byte character in half.
//!
//! ```c
//! size_t cedict_get_pinyin(char *buf, size_t buf_len, const char *word);
//! ```

use std::ffi::{c_char, c_int, CStr};
use std::sync::OnceLock;

use log::{error, info, warn};

use crate::cedict::{Dictionary, Initials, Pinyin, Romanization};

static DICTIONARY: OnceLock<Dictionary> = OnceLock::new();

/// Returns the process-wide dictionary, if one has been loaded.
pub fn dictionary() -> Option<&'static Dictionary> {
    DICTIONARY.get()
}

/// Copies as much of `src` as fits into `dst` and returns the byte count.
pub fn copy_truncated(dst: &mut [u8], src: &[u8]) -> usize {
    let len = src.len().min(dst.len());
    dst[..len].copy_from_slice(&src[..len]);
    len
}

/// Loads the GZIP-compressed dictionary at `path` into the process-wide slot.
///
/// Returns `0` on success, `1` if a dictionary was already loaded (the new
/// one is not read), and `-1` on failure. Failures are logged.
///
/// # Safety
/// `path` must be null or point to a NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn cedict_load_dictionary(path: *const c_char) -> c_int {
    if path.is_null() {
        error!("cedict_load_dictionary called with a null path");
        return -1;
    }
    if DICTIONARY.get().is_some() {
        warn!("Dictionary already loaded, ignoring reload request");
        return 1;
    }

    // SAFETY: non-null and NUL-terminated per the caller contract.
    let path = unsafe { CStr::from_ptr(path) };
    let path = match path.to_str() {
        Ok(path) => path,
        Err(e) => {
            error!("Dictionary path is not valid UTF-8: {}", e);
            return -1;
        }
    };

    match Dictionary::load(path) {
        Ok(dictionary) => {
            if DICTIONARY.set(dictionary).is_err() {
                warn!("Dictionary was loaded concurrently, keeping the first one");
                return 1;
            }
            info!("Dictionary ready: {}", path);
            0
        }
        Err(e) => {
            error!("Failed to load dictionary {}: {}", path, e);
            -1
        }
    }
}

/// Writes the pinyin of `word` into `buf` and returns the number of bytes
/// written. Returns `0` when no dictionary is loaded.
///
/// # Safety
/// `buf` must be null or valid for `buf_len` writable bytes; `word` must be
/// null or point to a NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn cedict_get_pinyin(
    buf: *mut c_char,
    buf_len: usize,
    word: *const c_char,
) -> usize {
    // SAFETY: forwarded caller contract.
    unsafe { convert_into(buf, buf_len, word, &Pinyin) }
}

/// Writes the pinyin initials of `word` into `buf` and returns the number of
/// bytes written. Returns `0` when no dictionary is loaded.
///
/// # Safety
/// Same contract as [`cedict_get_pinyin`].
#[no_mangle]
pub unsafe extern "C" fn cedict_get_pinyin_initials(
    buf: *mut c_char,
    buf_len: usize,
    word: *const c_char,
) -> usize {
    // SAFETY: forwarded caller contract.
    unsafe { convert_into(buf, buf_len, word, &Initials) }
}

unsafe fn convert_into(
    buf: *mut c_char,
    buf_len: usize,
    word: *const c_char,
    format: &dyn Romanization,
) -> usize {
    let Some(dictionary) = DICTIONARY.get() else {
        warn!("Conversion requested before a dictionary was loaded");
        return 0;
    };
    if buf.is_null() || word.is_null() {
        return 0;
    }

    // SAFETY: `word` is non-null and NUL-terminated per the caller contract.
    let word = unsafe { CStr::from_ptr(word) }.to_string_lossy();
    let converted = dictionary.convert(&word, format);

    // SAFETY: `buf` is non-null and valid for `buf_len` bytes per the caller contract.
    let dst = unsafe { std::slice::from_raw_parts_mut(buf.cast::<u8>(), buf_len) };
    copy_truncated(dst, converted.as_bytes())
}
