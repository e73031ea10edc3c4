use super::*;
use std::ffi::{CStr, CString};
use std::ptr;

fn text_of(result: &LipiText) -> String {
    assert!(!result.text.is_null());
    unsafe { CStr::from_ptr(result.text) }
        .to_str()
        .unwrap()
        .to_string()
}

fn transliterate(t: *const lipi_core::Transliterator, word: &str, lang: &str) -> String {
    let word = CString::new(word).unwrap();
    let lang = CString::new(lang).unwrap();
    let result = lipi_transliterate(t, word.as_ptr(), lang.as_ptr());
    let s = text_of(&result);
    lipi_text_free(result);
    s
}

#[test]
fn test_ffi_version() {
    let v = unsafe { CStr::from_ptr(lipi_engine_version()) };
    assert_eq!(v.to_str().unwrap(), "0.1.0");
}

#[test]
fn test_ffi_transliterate_roundtrip() {
    let t = lipi_transliterator_open(ptr::null());
    assert!(!t.is_null());

    assert_eq!(transliterate(t, "namaste", "hi"), "नमस्ते");
    assert_eq!(transliterate(t, "illi", "kn"), "ಇಲ್ಲಿ");
    assert_eq!(transliterate(t, "hello", "zz"), "hello");
    assert_eq!(transliterate(t, "", "hi"), "");

    lipi_transliterator_close(t);
}

#[test]
fn test_ffi_null_arguments() {
    let t = lipi_transliterator_open(ptr::null());
    let lang = CString::new("hi").unwrap();

    let result = lipi_transliterate(t, ptr::null(), lang.as_ptr());
    assert_eq!(text_of(&result), "");
    lipi_text_free(result);

    let word = CString::new("ka").unwrap();
    let result = lipi_transliterate(ptr::null(), word.as_ptr(), lang.as_ptr());
    assert_eq!(text_of(&result), "");
    lipi_text_free(result);

    assert_eq!(lipi_language_supported(ptr::null(), lang.as_ptr()), 0);
    assert_eq!(lipi_language_supported(t, ptr::null()), 0);

    lipi_transliterator_close(t);
}

#[test]
fn test_ffi_invalid_utf8() {
    let t = lipi_transliterator_open(ptr::null());
    let bad = CString::new(vec![0xff, 0xfe]).unwrap();
    let lang = CString::new("hi").unwrap();

    let result = lipi_transliterate(t, bad.as_ptr(), lang.as_ptr());
    assert_eq!(text_of(&result), "");
    lipi_text_free(result);

    lipi_transliterator_close(t);
}

#[test]
fn test_ffi_language_supported() {
    let t = lipi_transliterator_open(ptr::null());
    let hi = CString::new("hi").unwrap();
    let ja = CString::new("ja").unwrap();
    assert_eq!(lipi_language_supported(t, hi.as_ptr()), 1);
    assert_eq!(lipi_language_supported(t, ja.as_ptr()), 0);
    lipi_transliterator_close(t);
}

#[test]
fn test_ffi_ensure_native() {
    let t = lipi_transliterator_open(ptr::null());
    let lang = CString::new("hi").unwrap();

    let latin = CString::new("namaste").unwrap();
    let result = lipi_ensure_native(t, latin.as_ptr(), lang.as_ptr());
    assert_eq!(text_of(&result), "नमस्ते");
    lipi_text_free(result);

    let native = CString::new("नमस्ते").unwrap();
    let result = lipi_ensure_native(t, native.as_ptr(), lang.as_ptr());
    assert_eq!(text_of(&result), "नमस्ते");
    lipi_text_free(result);

    lipi_transliterator_close(t);
}

#[test]
fn test_ffi_open_with_settings() {
    let settings = CString::new(
        "[engine]\nidentity_languages = [\"en\", \"hi\"]\ndefault_language = \"kn\"\n",
    )
    .unwrap();
    let t = lipi_transliterator_open(settings.as_ptr());
    assert!(!t.is_null());
    assert_eq!(transliterate(t, "namaste", "hi"), "namaste");
    lipi_transliterator_close(t);
}

#[test]
fn test_ffi_open_invalid_settings() {
    let settings = CString::new("not valid toml {{{").unwrap();
    let t = lipi_transliterator_open(settings.as_ptr());
    assert!(t.is_null());
    // Closing null is a no-op.
    lipi_transliterator_close(t);
}
