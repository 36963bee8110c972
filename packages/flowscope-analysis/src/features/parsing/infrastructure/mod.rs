//! Parsing infrastructure - tree-sitter dependency lives here

mod tree_sitter;

pub use self::tree_sitter::TreeSitterParser;
