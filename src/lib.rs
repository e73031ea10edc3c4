// FFI functions perform null checks before dereferencing raw pointers.
// Clippy cannot verify this statically, so we allow it at crate level.
#![allow(clippy::not_unsafe_ptr_arg_deref)]

pub mod ffi;
mod trace_init;

pub use lipi_core::{engine, normalize, registry, settings, table, unicode};
pub use lipi_core::{Registry, SymbolTable, TableError, Transliterator};
