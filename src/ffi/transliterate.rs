use std::borrow::Cow;
use std::ffi::{c_char, CString};
use std::ptr;

use lipi_core::settings::{parse_settings_toml, Settings};
use lipi_core::Transliterator;

use super::{ffi_args, ffi_release, into_handle, release_handle};

// --- Transliterator lifecycle ---

/// Open a transliterator over the built-in tables.
///
/// `settings_toml` may be null for default settings. Returns null when the
/// settings or any table override fail to load.
#[no_mangle]
pub extern "C" fn lipi_transliterator_open(settings_toml: *const c_char) -> *mut Transliterator {
    let settings = if settings_toml.is_null() {
        Settings::default()
    } else {
        ffi_args!(ptr::null_mut();
            text: toml_str = settings_toml,
        );
        match parse_settings_toml(toml_str) {
            Ok(s) => s,
            Err(_) => return ptr::null_mut(),
        }
    };
    match Transliterator::from_settings(&settings) {
        Ok(t) => into_handle(t),
        Err(_) => ptr::null_mut(),
    }
}

ffi_release!(lipi_transliterator_close, Transliterator);

#[no_mangle]
pub extern "C" fn lipi_language_supported(t: *const Transliterator, lang: *const c_char) -> u8 {
    ffi_args!(0;
        handle: t = t,
        text: lang_str = lang,
    );
    t.registry().supports(lang_str) as u8
}

// --- Text results ---

/// UTF-8 text returned to the host. `text` is never null; free with
/// [`lipi_text_free`].
#[repr(C)]
pub struct LipiText {
    pub text: *const c_char,
    _owned: *mut CString,
}

impl LipiText {
    fn empty() -> Self {
        Self {
            text: c"".as_ptr(),
            _owned: ptr::null_mut(),
        }
    }

    fn new(s: &str) -> Self {
        let Ok(cs) = CString::new(s) else {
            return Self::empty();
        };
        let text = cs.as_ptr();
        Self {
            text,
            _owned: into_handle(cs),
        }
    }
}

#[no_mangle]
pub extern "C" fn lipi_text_free(result: LipiText) {
    unsafe { release_handle(result._owned) };
}

// --- Conversion ---

/// Transliterate `word` into the script of `lang`. Null or invalid UTF-8
/// arguments produce an empty string.
#[no_mangle]
pub extern "C" fn lipi_transliterate(
    t: *const Transliterator,
    word: *const c_char,
    lang: *const c_char,
) -> LipiText {
    ffi_args!(LipiText::empty();
        handle: t = t,
        text: word_str = word,
        text: lang_str = lang,
    );
    LipiText::new(&t.transliterate(word_str, lang_str))
}

/// Convert `text` only if it looks like romanized phonetics.
#[no_mangle]
pub extern "C" fn lipi_ensure_native(
    t: *const Transliterator,
    text: *const c_char,
    lang: *const c_char,
) -> LipiText {
    ffi_args!(LipiText::empty();
        handle: t = t,
        text: text_str = text,
        text: lang_str = lang,
    );
    match t.ensure_native(text_str, lang_str) {
        Cow::Borrowed(s) => LipiText::new(s),
        Cow::Owned(s) => LipiText::new(&s),
    }
}
