//! C ABI for hosts that embed the transliterator in-process.
//!
//! Every entry point tolerates null and non-UTF-8 arguments and answers with
//! a neutral value (null handle, `0`, empty text) instead of unwinding.

use std::ffi::{c_char, CStr};
use std::path::Path;

pub mod transliterate;

#[cfg(test)]
mod tests;

pub use transliterate::*;

/// Move `value` to the heap and hand ownership to the host.
pub(crate) fn into_handle<T>(value: T) -> *mut T {
    Box::into_raw(Box::new(value))
}

/// Take ownership back from the host and drop it. Null is ignored.
///
/// # Safety
/// `handle` must come from [`into_handle`] and must not be released twice.
pub(crate) unsafe fn release_handle<T>(handle: *mut T) {
    if !handle.is_null() {
        drop(Box::from_raw(handle));
    }
}

/// Borrow a NUL-terminated host string as UTF-8.
pub(crate) unsafe fn borrow_str<'a>(ptr: *const c_char) -> Option<&'a str> {
    if ptr.is_null() {
        None
    } else {
        CStr::from_ptr(ptr).to_str().ok()
    }
}

/// Bind host arguments or return `$fallback` from the enclosing function.
///
/// `text: name = ptr` borrows a C string as `&str`;
/// `handle: name = ptr` borrows a `*const T` as `&T`.
macro_rules! ffi_args {
    ($fallback:expr ; ) => {};

    ($fallback:expr ; text: $name:ident = $ptr:expr , $($rest:tt)*) => {
        let Some($name) = (unsafe { $crate::ffi::borrow_str($ptr) }) else {
            return $fallback;
        };
        $crate::ffi::ffi_args!($fallback ; $($rest)*);
    };

    ($fallback:expr ; handle: $name:ident = $ptr:expr , $($rest:tt)*) => {
        let Some($name) = (unsafe { $ptr.as_ref() }) else {
            return $fallback;
        };
        $crate::ffi::ffi_args!($fallback ; $($rest)*);
    };
}

/// `extern "C" fn $name(*mut $T)` that releases a handle.
macro_rules! ffi_release {
    ($name:ident, $T:ty) => {
        #[no_mangle]
        pub extern "C" fn $name(handle: *mut $T) {
            unsafe { $crate::ffi::release_handle(handle) };
        }
    };
}

pub(crate) use ffi_args;
pub(crate) use ffi_release;

#[no_mangle]
pub extern "C" fn lipi_engine_version() -> *const c_char {
    c"0.1.0".as_ptr()
}

/// Install the JSON trace writer under `log_dir`. No-op without the `trace`
/// feature.
#[no_mangle]
#[allow(clippy::unused_unit)]
pub extern "C" fn lipi_trace_init(log_dir: *const c_char) {
    ffi_args!(();
        text: dir = log_dir,
    );
    crate::trace_init::init_tracing(Path::new(dir));
}
