pub mod bridge;
pub mod engine;
pub mod normalize;
pub mod registry;
pub mod settings;
pub mod table;
pub mod unicode;

pub use engine::{transliterate_with, Transliterator};
pub use registry::Registry;
pub use table::{SymbolTable, TableError};
