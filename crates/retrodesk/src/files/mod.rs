//! File browser backing store
//!
//! A path-keyed tree of directories and text files rooted at `/`.

mod error;
mod path;
mod tree;

pub use error::FsError;
pub use path::{filename, is_under, join_path, normalize_path, parent_path, validate_name};
pub use tree::{FileNode, FileTree, NodeKind, TRASH_DIR};
