pub mod docset;
pub mod index;
pub mod persist;

pub use docset::DocSet;
pub use index::{DocId, InvertedIndex};
pub use persist::StorageError;
