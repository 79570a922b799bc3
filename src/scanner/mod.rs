//! Discovery of candidate files on disk

pub mod tree_walker;

pub use self::tree_walker::{walk, ExtensionFilter, WalkError, WalkOutcome};
